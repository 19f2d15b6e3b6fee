//! RPC Request/Response Types
//!
//! Defines the JSON-RPC method parameters and results.

use msgboard_core::domain::{Message, MessageId};
use serde::{Deserialize, Serialize};

/// messages.get.v1
#[derive(Debug, Deserialize)]
pub struct GetMessageRequest {
    pub id: MessageId,
}

/// messages.list.v1
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMessagesResponse {
    pub messages: Vec<Message>,
}

/// messages.create.v1
#[derive(Debug, Deserialize)]
pub struct CreateMessageRequest {
    pub title: String,
    pub body: String,
}

/// messages.update.v1
#[derive(Debug, Deserialize)]
pub struct UpdateMessageRequest {
    pub id: MessageId,
    pub title: String,
    pub body: String,
}

/// messages.delete.v1
#[derive(Debug, Deserialize)]
pub struct DeleteMessageRequest {
    pub id: MessageId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteMessageResponse {
    pub id: MessageId,
    pub deleted: bool,
}
