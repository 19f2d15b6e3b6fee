// sqlx::Error -> AppError translation

use msgboard_core::error::AppError;
use tracing::warn;

pub(crate) const TITLE_TAKEN: &str = "title already taken";

/// Translate a driver failure into one of the domain error kinds.
///
/// Pure apart from logging. The raw `sqlx::Error` never leaves this function;
/// only its text survives, and only for `Internal`.
pub fn translate(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::RowNotFound => AppError::NotFound("no record matching given id".to_string()),
        sqlx::Error::Database(db_err) => {
            let code = db_err.code();
            let code_str = code.as_deref().unwrap_or("");

            // SQLite error codes: https://www.sqlite.org/rescode.html
            match code_str {
                // PRIMARY KEY constraint failed; ids are store-assigned, so
                // this is an integrity failure, not a title clash
                "1555" => internal(format!(
                    "primary key violation [{}]: {}",
                    code_str,
                    db_err.message()
                )),
                // UNIQUE constraint failed (only `title` is unique)
                "2067" => AppError::Conflict(TITLE_TAKEN.to_string()),
                _ if db_err.is_unique_violation() => AppError::Conflict(TITLE_TAKEN.to_string()),
                "5" => internal(format!(
                    "database locked (SQLITE_BUSY): {}",
                    db_err.message()
                )),
                "" => internal(format!("error when processing request: {}", db_err.message())),
                _ => internal(format!(
                    "error when processing request [{}]: {}",
                    code_str,
                    db_err.message()
                )),
            }
        }
        // Connection, pool, protocol, decode errors
        _ => internal(format!("error when processing request: {}", err)),
    }
}

fn internal(msg: String) -> AppError {
    warn!(error = %msg, "Storage failure");
    AppError::Internal(msg)
}
