//! RPC Error Types
//!
//! Maps application errors to JSON-RPC error codes.

use jsonrpsee::types::ErrorObjectOwned;
use msgboard_core::error::{AppError, ErrorKind};
use serde_json::json;

/// RPC Error Codes
pub mod code {
    pub const VALIDATION_ERROR: i32 = 4000;
    pub const NOT_FOUND: i32 = 4001;
    pub const CONFLICT: i32 = 4002;
    pub const INTERNAL_ERROR: i32 = 5000;
}

/// Convert AppError to JSON-RPC ErrorObject
///
/// `data` carries the status classification: `{"status": 404, "error": "not_found"}`.
pub fn to_rpc_error(err: AppError) -> ErrorObjectOwned {
    let kind = err.kind();
    let code = match kind {
        ErrorKind::Validation => code::VALIDATION_ERROR,
        ErrorKind::NotFound => code::NOT_FOUND,
        ErrorKind::Conflict => code::CONFLICT,
        ErrorKind::Internal => code::INTERNAL_ERROR,
    };
    let data = json!({ "status": kind.status(), "error": kind.code() });

    ErrorObjectOwned::owned(code, err.message().to_string(), Some(data))
}
