// Port Layer - Interfaces for external dependencies

pub mod message_repository;
pub mod time_provider; // For deterministic testing

// Re-exports
pub use message_repository::MessageRepository;
pub use time_provider::TimeProvider;
