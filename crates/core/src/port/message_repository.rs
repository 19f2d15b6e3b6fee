// Message Repository Port (Interface)

use crate::domain::{Message, MessageId};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for Message persistence
///
/// Implementations report absence as `AppError::NotFound`, never as an
/// empty success.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Find message by ID
    async fn get(&self, id: MessageId) -> Result<Message>;

    /// All messages; an empty table is `NotFound`
    async fn get_all(&self) -> Result<Vec<Message>>;

    /// Insert and return the message with its assigned ID
    async fn create(&self, message: &Message) -> Result<Message>;

    /// Overwrite title and body of an existing row
    async fn update(&self, message: &Message) -> Result<Message>;

    /// Remove the row
    async fn delete(&self, id: MessageId) -> Result<()>;
}
