// SQLite MessageRepository Implementation

use crate::error::translate;
use async_trait::async_trait;
use msgboard_core::domain::{Message, MessageId};
use msgboard_core::error::{AppError, Result};
use msgboard_core::port::MessageRepository;
use sqlx::SqlitePool;
use tracing::debug;

const QUERY_GET_MESSAGE: &str = "SELECT id, title, body, created_at FROM messages WHERE id = ?";
const QUERY_GET_ALL_MESSAGES: &str = "SELECT id, title, body, created_at FROM messages ORDER BY id ASC";
const QUERY_INSERT_MESSAGE: &str = "INSERT INTO messages (title, body, created_at) VALUES (?, ?, ?)";
const QUERY_UPDATE_MESSAGE: &str = "UPDATE messages SET title = ?, body = ? WHERE id = ?";
const QUERY_DELETE_MESSAGE: &str = "DELETE FROM messages WHERE id = ?";

/// Store adapter over a single `messages` table.
///
/// Every statement is parameterized and runs on a connection checked out
/// from the pool for that statement only; sqlx returns it on drop, success
/// or not.
pub struct SqliteMessageRepository {
    pool: SqlitePool,
}

impl SqliteMessageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for SqliteMessageRepository {
    async fn get(&self, id: MessageId) -> Result<Message> {
        debug!(message_id = id, "SELECT message");
        let row = sqlx::query_as::<_, MessageRow>(QUERY_GET_MESSAGE)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(translate)?;

        Ok(row.into_message())
    }

    async fn get_all(&self) -> Result<Vec<Message>> {
        debug!("SELECT all messages");
        let rows: Vec<MessageRow> = sqlx::query_as(QUERY_GET_ALL_MESSAGES)
            .fetch_all(&self.pool)
            .await
            .map_err(translate)?;

        if rows.is_empty() {
            return Err(AppError::NotFound("no records found".to_string()));
        }
        Ok(rows.into_iter().map(MessageRow::into_message).collect())
    }

    async fn create(&self, message: &Message) -> Result<Message> {
        let result = sqlx::query(QUERY_INSERT_MESSAGE)
            .bind(&message.title)
            .bind(&message.body)
            .bind(message.created_at)
            .execute(&self.pool)
            .await
            .map_err(translate)?;

        let id = result.last_insert_rowid();
        debug!(message_id = id, "INSERT message");

        Ok(Message {
            id,
            ..message.clone()
        })
    }

    async fn update(&self, message: &Message) -> Result<Message> {
        // created_at is never written after insert
        let result = sqlx::query(QUERY_UPDATE_MESSAGE)
            .bind(&message.title)
            .bind(&message.body)
            .bind(message.id)
            .execute(&self.pool)
            .await
            .map_err(translate)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "message {} no longer exists",
                message.id
            )));
        }
        debug!(message_id = message.id, "UPDATE message");
        Ok(message.clone())
    }

    async fn delete(&self, id: MessageId) -> Result<()> {
        let result = sqlx::query(QUERY_DELETE_MESSAGE)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(translate)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "message {} no longer exists",
                id
            )));
        }
        debug!(message_id = id, "DELETE message");
        Ok(())
    }
}

/// SQLite row representation
#[derive(Debug, sqlx::FromRow)]
struct MessageRow {
    id: i64,
    title: String,
    body: String,
    created_at: i64,
}

impl MessageRow {
    fn into_message(self) -> Message {
        Message {
            id: self.id,
            title: self.title,
            body: self.body,
            created_at: self.created_at,
        }
    }
}
