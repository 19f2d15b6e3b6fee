//! JSON-RPC API Layer
//!
//! Exposes the message service as JSON-RPC 2.0 methods.

pub mod error;
pub mod handler;
pub mod server;
pub mod types;

pub use server::{RpcServer, RpcServerConfig};
