// Application Layer - Use Cases

pub mod message_service;

// Re-exports
pub use message_service::MessageService;
