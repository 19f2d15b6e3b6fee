// Message Board Infrastructure - SQLite Adapter
// Implements: MessageRepository, plus the sqlx::Error translator

mod connection;
mod error;
mod message_repository;
mod schema;

pub use connection::create_pool;
pub use error::translate;
pub use message_repository::SqliteMessageRepository;
pub use schema::ensure_schema;

// Note: sqlx::Error conversion goes through `translate`
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for AppError here)
