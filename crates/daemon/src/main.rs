//! Message Board Daemon - Main Entry Point
//! Composition root: config, logging, DI wiring, JSON-RPC server

mod config;
mod logging;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use config::DaemonConfig;
use msgboard_api_rpc::{RpcServer, RpcServerConfig};
use msgboard_core::application::MessageService;
use msgboard_core::port::time_provider::SystemTimeProvider;
use msgboard_infra_sqlite::{create_pool, ensure_schema, SqliteMessageRepository};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration
    let config = DaemonConfig::from_env()?;

    // 2. Initialize logging
    let _log_guard = logging::init(&config)?;

    info!("Message board v{} starting...", VERSION);
    info!(db_path = %config.db_path, "Initializing database...");

    // 3. Initialize database
    if let Some(parent) = std::path::Path::new(&config.db_path).parent() {
        if !config.db_path.contains(":memory:") && !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    let pool = create_pool(&config.db_path)
        .await
        .context("DB pool creation failed")?;
    ensure_schema(&pool).await.context("Schema bootstrap failed")?;

    // 4. Setup dependencies (DI wiring)
    let repo = Arc::new(SqliteMessageRepository::new(pool.clone()));
    let service = Arc::new(MessageService::new(repo, Arc::new(SystemTimeProvider)));

    // 5. Start JSON-RPC server
    let rpc_config = RpcServerConfig {
        host: config.rpc_host.clone(),
        port: config.rpc_port,
    };
    let (addr, rpc_handle) = RpcServer::new(rpc_config, service)
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("RPC server start failed: {}", e))?;

    info!(%addr, "System ready. Press Ctrl+C to shutdown");

    // 6. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Exiting gracefully...");

    rpc_handle
        .stop()
        .map_err(|e| anyhow::anyhow!("RPC server stop failed: {}", e))?;
    rpc_handle.stopped().await;
    pool.close().await;

    info!("Shutdown complete.");

    Ok(())
}
