// Domain Layer - Pure business logic and entities

pub mod message;

// Re-exports
pub use message::{Message, MessageId};
