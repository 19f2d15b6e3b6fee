// Central Error Type for the Application

use thiserror::Error;

/// Coarse error classification exposed to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Internal,
}

impl ErrorKind {
    /// HTTP-style status classification
    pub fn status(self) -> u16 {
        match self {
            ErrorKind::Validation => 422,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::Internal => 500,
        }
    }

    /// Stable machine-readable code
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Validation => "invalid_request",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Internal => "server_error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Application-level error type
///
/// Storage adapters translate driver failures into one of these variants;
/// nothing driver-specific crosses this boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Conflict(_) => ErrorKind::Conflict,
            AppError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Human-readable message without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            AppError::Validation(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg)
            | AppError::Internal(msg) => msg,
        }
    }

    pub fn status(&self) -> u16 {
        self.kind().status()
    }

    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

// Note: sqlx::Error conversion is handled in the infra-sqlite crate
// by an explicit translator (orphan rule)

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(AppError::Validation("x".into()).status(), 422);
        assert_eq!(AppError::NotFound("x".into()).status(), 404);
        assert_eq!(AppError::Conflict("x".into()).status(), 409);
        assert_eq!(AppError::Internal("x".into()).status(), 500);
    }

    #[test]
    fn test_codes_and_message() {
        let err = AppError::NotFound("the id is not found".into());
        assert_eq!(err.code(), "not_found");
        assert_eq!(err.message(), "the id is not found");
        assert_eq!(err.to_string(), "Not found: the id is not found");

        assert_eq!(AppError::Validation(String::new()).code(), "invalid_request");
        assert_eq!(AppError::Internal(String::new()).code(), "server_error");
        assert_eq!(ErrorKind::Conflict.to_string(), "conflict");
    }
}
