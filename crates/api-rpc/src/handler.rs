//! RPC Method Handlers
//!
//! Thin adapters from RPC params to `MessageService` calls.

use crate::error::to_rpc_error;
use crate::types::{
    CreateMessageRequest, DeleteMessageRequest, DeleteMessageResponse, GetMessageRequest,
    ListMessagesResponse, UpdateMessageRequest,
};
use jsonrpsee::types::ErrorObjectOwned;
use msgboard_core::application::MessageService;
use msgboard_core::domain::Message;
use std::sync::Arc;

/// RPC Handler with injected service
pub struct RpcHandler {
    service: Arc<MessageService>,
}

impl RpcHandler {
    pub fn new(service: Arc<MessageService>) -> Self {
        Self { service }
    }

    /// messages.get.v1
    pub async fn get(&self, params: GetMessageRequest) -> Result<Message, ErrorObjectOwned> {
        self.service.get(params.id).await.map_err(to_rpc_error)
    }

    /// messages.list.v1
    pub async fn list(&self) -> Result<ListMessagesResponse, ErrorObjectOwned> {
        let messages = self.service.get_all().await.map_err(to_rpc_error)?;
        Ok(ListMessagesResponse { messages })
    }

    /// messages.create.v1
    pub async fn create(&self, params: CreateMessageRequest) -> Result<Message, ErrorObjectOwned> {
        self.service
            .create(Message::new(params.title, params.body))
            .await
            .map_err(to_rpc_error)
    }

    /// messages.update.v1
    pub async fn update(&self, params: UpdateMessageRequest) -> Result<Message, ErrorObjectOwned> {
        self.service
            .update(Message::with_id(params.id, params.title, params.body))
            .await
            .map_err(to_rpc_error)
    }

    /// messages.delete.v1
    pub async fn delete(
        &self,
        params: DeleteMessageRequest,
    ) -> Result<DeleteMessageResponse, ErrorObjectOwned> {
        self.service.delete(params.id).await.map_err(to_rpc_error)?;
        Ok(DeleteMessageResponse {
            id: params.id,
            deleted: true,
        })
    }
}
