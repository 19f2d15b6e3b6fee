// Message Service - validation and orchestration over the repository port

use crate::domain::{Message, MessageId};
use crate::error::Result;
use crate::port::{MessageRepository, TimeProvider};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Message use cases
///
/// Stateless per call. The repository and clock are injected at
/// construction and never swapped afterwards.
pub struct MessageService {
    repo: Arc<dyn MessageRepository>,
    time_provider: Arc<dyn TimeProvider>,
}

impl MessageService {
    pub fn new(repo: Arc<dyn MessageRepository>, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            repo,
            time_provider,
        }
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: MessageId) -> Result<Message> {
        debug!("Fetching message");
        self.repo.get(id).await
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Message>> {
        debug!("Fetching all messages");
        self.repo.get_all().await
    }

    /// Validate, stamp `created_at` with the current time and insert.
    ///
    /// Any caller-supplied `id` or `created_at` is discarded.
    #[instrument(skip(self, message), fields(title = %message.title))]
    pub async fn create(&self, mut message: Message) -> Result<Message> {
        message.validate()?;
        message.id = 0;
        message.created_at = self.time_provider.now_millis();

        let created = self.repo.create(&message).await?;
        info!(message_id = created.id, "Message created");
        Ok(created)
    }

    /// Validate, then overwrite title and body of the stored row.
    ///
    /// The stored `id` and `created_at` are kept as they are.
    #[instrument(skip(self, message), fields(message_id = message.id))]
    pub async fn update(&self, mut message: Message) -> Result<Message> {
        message.validate()?;

        let mut current = self.repo.get(message.id).await?;
        current.title = message.title;
        current.body = message.body;

        let updated = self.repo.update(&current).await?;
        info!("Message updated");
        Ok(updated)
    }

    /// Delete after confirming the row exists.
    ///
    /// Not isolated: a concurrent delete between the check and the
    /// statement surfaces as `NotFound` from the repository.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: MessageId) -> Result<()> {
        let existing = self.repo.get(id).await?;
        self.repo.delete(existing.id).await?;
        info!("Message deleted");
        Ok(())
    }
}
