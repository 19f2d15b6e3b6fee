// Table bootstrap

use crate::error::translate;
use msgboard_core::error::Result;
use sqlx::SqlitePool;
use tracing::info;

const CREATE_MESSAGES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS messages (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    title      TEXT    NOT NULL UNIQUE,
    body       TEXT    NOT NULL,
    created_at INTEGER NOT NULL
)
"#;

/// Create the `messages` table if it is missing.
///
/// Idempotent. Never alters an existing table.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    info!("Ensuring messages table exists");
    sqlx::query(CREATE_MESSAGES_TABLE)
        .execute(pool)
        .await
        .map_err(translate)?;
    Ok(())
}
