//! JSON-RPC Server
//!
//! Serves the message methods over HTTP (JSON-RPC 2.0).

use crate::handler::RpcHandler;
use crate::types::{
    CreateMessageRequest, DeleteMessageRequest, GetMessageRequest, UpdateMessageRequest,
};
use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::RpcModule;
use msgboard_core::application::MessageService;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

const DEFAULT_RPC_HOST: &str = "127.0.0.1";
const DEFAULT_RPC_PORT: u16 = 9530;

/// RPC Server Configuration
#[derive(Debug, Clone)]
pub struct RpcServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for RpcServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_RPC_HOST.to_string(),
            port: DEFAULT_RPC_PORT,
        }
    }
}

/// RPC Server
pub struct RpcServer {
    config: RpcServerConfig,
    handler: Arc<RpcHandler>,
}

impl RpcServer {
    pub fn new(config: RpcServerConfig, service: Arc<MessageService>) -> Self {
        Self {
            config,
            handler: Arc::new(RpcHandler::new(service)),
        }
    }

    /// Start the JSON-RPC server
    ///
    /// Returns the bound address (useful with port 0) and the handle used to
    /// stop the server.
    pub async fn start(self) -> Result<(SocketAddr, ServerHandle), String> {
        let addr = format!("{}:{}", self.config.host, self.config.port);

        let server = Server::builder()
            .build(&addr)
            .await
            .map_err(|e| format!("Failed to build server on {}: {}", addr, e))?;
        let local_addr = server
            .local_addr()
            .map_err(|e| format!("Failed to read bound address: {}", e))?;

        let mut module = RpcModule::new(());

        let handler = self.handler.clone();
        module
            .register_async_method("messages.get.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: GetMessageRequest = params.parse()?;
                    handler.get(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("messages.list.v1", move |_, _, _| {
                let handler = handler.clone();
                async move { handler.list().await }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("messages.create.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: CreateMessageRequest = params.parse()?;
                    handler.create(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("messages.update.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: UpdateMessageRequest = params.parse()?;
                    handler.update(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("messages.delete.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: DeleteMessageRequest = params.parse()?;
                    handler.delete(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        info!(addr = %local_addr, "JSON-RPC server listening");

        let handle = server.start(module);
        Ok((local_addr, handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::code;
    use jsonrpsee::core::client::{ClientT, Error as ClientError};
    use jsonrpsee::core::params::ObjectParams;
    use jsonrpsee::http_client::HttpClientBuilder;
    use jsonrpsee::rpc_params;
    use msgboard_core::domain::Message;
    use msgboard_core::port::time_provider::SystemTimeProvider;
    use msgboard_infra_sqlite::{create_pool, ensure_schema, SqliteMessageRepository};

    #[tokio::test]
    async fn test_server_round_trip() {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        ensure_schema(&pool).await.unwrap();
        let service = Arc::new(MessageService::new(
            Arc::new(SqliteMessageRepository::new(pool)),
            Arc::new(SystemTimeProvider),
        ));

        let config = RpcServerConfig {
            port: 0,
            ..Default::default()
        };
        let (addr, handle) = RpcServer::new(config, service).start().await.unwrap();
        let client = HttpClientBuilder::default()
            .build(format!("http://{}", addr))
            .unwrap();

        let mut params = ObjectParams::new();
        params.insert("title", "title").unwrap();
        params.insert("body", "body").unwrap();
        let created: Message = client.request("messages.create.v1", params).await.unwrap();
        assert_eq!(created.id, 1);

        let list: crate::types::ListMessagesResponse = client
            .request("messages.list.v1", rpc_params![])
            .await
            .unwrap();
        assert_eq!(list.messages, vec![created]);

        let mut params = ObjectParams::new();
        params.insert("id", 99).unwrap();
        let err = client
            .request::<Message, _>("messages.get.v1", params)
            .await
            .unwrap_err();
        match err {
            ClientError::Call(obj) => assert_eq!(obj.code(), code::NOT_FOUND),
            other => panic!("unexpected error: {:?}", other),
        }

        handle.stop().unwrap();
    }
}
