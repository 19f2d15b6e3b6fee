//! Daemon configuration, read once from the environment

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::PathBuf;

const DEFAULT_DB_PATH: &str = "~/.msgboard/messages.db";
const DEFAULT_RPC_HOST: &str = "127.0.0.1";
const DEFAULT_RPC_PORT: u16 = 9530;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct DaemonConfig {
    pub db_path: String,
    pub rpc_host: String,
    pub rpc_port: u16,
    pub log_format: LogFormat,
    pub log_dir: Option<PathBuf>,
}

impl DaemonConfig {
    /// Load from `MSGBOARD_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::vars().collect())
    }

    fn from_vars(vars: HashMap<String, String>) -> Result<Self> {
        let db_path = vars
            .get("MSGBOARD_DB_PATH")
            .map(String::as_str)
            .unwrap_or(DEFAULT_DB_PATH);
        let db_path = shellexpand::tilde(db_path).into_owned();

        let rpc_host = vars
            .get("MSGBOARD_RPC_HOST")
            .cloned()
            .unwrap_or_else(|| DEFAULT_RPC_HOST.to_string());

        let rpc_port = match vars.get("MSGBOARD_RPC_PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("MSGBOARD_RPC_PORT is not a valid port: {}", raw))?,
            None => DEFAULT_RPC_PORT,
        };

        let log_format = match vars.get("MSGBOARD_LOG_FORMAT").map(String::as_str) {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => anyhow::bail!(
                "MSGBOARD_LOG_FORMAT must be \"pretty\" or \"json\", got: {}",
                other
            ),
        };

        let log_dir = vars
            .get("MSGBOARD_LOG_DIR")
            .map(|dir| PathBuf::from(shellexpand::tilde(dir).into_owned()));

        Ok(Self {
            db_path,
            rpc_host,
            rpc_port,
            log_format,
            log_dir,
        })
    }
}
