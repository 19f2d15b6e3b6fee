//! Message Board CLI - Command-line client for the JSON-RPC daemon

use anyhow::{Context, Result};
use chrono::{TimeZone, Utc};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tabled::{Table, Tabled};

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:9530";

#[derive(Parser)]
#[command(name = "msgboard")]
#[command(about = "Message board CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC server URL
    #[arg(long, env = "MSGBOARD_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one message
    Get {
        /// Message ID
        id: i64,
    },

    /// List all messages
    List,

    /// Create a message
    Create {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        body: String,
    },

    /// Replace title and body of a message
    Update {
        /// Message ID
        id: i64,

        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        body: String,
    },

    /// Delete a message
    Delete {
        /// Message ID
        id: i64,
    },
}

#[derive(Serialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: serde_json::Value,
    id: u64,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[allow(dead_code)]
    jsonrpc: String,
    #[allow(dead_code)]
    id: u64,
    result: Option<serde_json::Value>,
    error: Option<JsonRpcError>,
}

#[derive(Deserialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

#[derive(Deserialize)]
struct MessageRecord {
    id: i64,
    title: String,
    body: String,
    created_at: i64,
}

#[derive(Tabled)]
struct MessageRow {
    id: i64,
    title: String,
    body: String,
    created_at: String,
}

impl From<MessageRecord> for MessageRow {
    fn from(m: MessageRecord) -> Self {
        let created_at = Utc
            .timestamp_millis_opt(m.created_at)
            .single()
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| m.created_at.to_string());
        Self {
            id: m.id,
            title: m.title,
            body: m.body,
            created_at,
        }
    }
}

async fn call_rpc(url: &str, method: &str, params: serde_json::Value) -> Result<serde_json::Value> {
    let request = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        method: method.to_string(),
        params,
        id: 1,
    };

    let client = reqwest::Client::new();
    let response: JsonRpcResponse = client
        .post(url)
        .json(&request)
        .send()
        .await
        .context("Failed to connect to daemon")?
        .json()
        .await
        .context("Failed to parse response")?;

    if let Some(error) = response.error {
        anyhow::bail!("RPC error ({}): {}", error.code, error.message);
    }

    response
        .result
        .ok_or_else(|| anyhow::anyhow!("No result in response"))
}

fn print_messages(messages: Vec<MessageRecord>) {
    let rows: Vec<MessageRow> = messages.into_iter().map(MessageRow::from).collect();
    println!("{}", Table::new(rows));
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Get { id } => {
            let result = call_rpc(&cli.rpc_url, "messages.get.v1", json!({ "id": id })).await?;
            print_messages(vec![serde_json::from_value(result)?]);
        }

        Commands::List => {
            let result = call_rpc(&cli.rpc_url, "messages.list.v1", json!({})).await?;
            let messages: Vec<MessageRecord> = serde_json::from_value(result["messages"].clone())
                .context("Malformed list response")?;
            println!("{}", format!("{} message(s)", messages.len()).cyan().bold());
            print_messages(messages);
        }

        Commands::Create { title, body } => {
            let params = json!({ "title": title, "body": body });
            let result = call_rpc(&cli.rpc_url, "messages.create.v1", params).await?;

            println!("{}", "✓ Message created".green().bold());
            print_messages(vec![serde_json::from_value(result)?]);
        }

        Commands::Update { id, title, body } => {
            let params = json!({ "id": id, "title": title, "body": body });
            let result = call_rpc(&cli.rpc_url, "messages.update.v1", params).await?;

            println!("{}", format!("✓ Message {} updated", id).green().bold());
            print_messages(vec![serde_json::from_value(result)?]);
        }

        Commands::Delete { id } => {
            call_rpc(&cli.rpc_url, "messages.delete.v1", json!({ "id": id })).await?;

            println!("{}", format!("✓ Message {} deleted", id).green().bold());
        }
    }

    Ok(())
}
