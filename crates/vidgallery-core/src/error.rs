//! Error types module
//!
//! All failures that cross a crate boundary are unified under `AppError`.
//! The ingestion pipeline only ever surfaces `InvalidInput` (precondition
//! violations) and `Database` (persistence failures); everything else it
//! absorbs internally and degrades the record instead.

use sqlx::Error as SqlxError;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented.
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "DATABASE_ERROR")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[source] SqlxError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Blob storage error: {0}")]
    Blob(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::InvalidInput(_) => 400,
            AppError::NotFound(_) => 404,
            AppError::Database(_)
            | AppError::Configuration(_)
            | AppError::Blob(_)
            | AppError::Internal(_)
            | AppError::InternalWithSource { .. } => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Blob(_) => "BLOB_ERROR",
            AppError::Internal(_) | AppError::InternalWithSource { .. } => "INTERNAL_ERROR",
        }
    }

    fn client_message(&self) -> String {
        match self {
            // Database errors can leak schema details; keep the body generic.
            AppError::Database(_) => "Database error".to_string(),
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::Configuration(msg) => msg.clone(),
            AppError::Blob(msg) => msg.clone(),
            AppError::Internal(msg) => msg.clone(),
            AppError::InternalWithSource { message, .. } => message.clone(),
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::InvalidInput(_) | AppError::NotFound(_) => LogLevel::Debug,
            AppError::Blob(_) => LogLevel::Warn,
            AppError::Database(_)
            | AppError::Configuration(_)
            | AppError::Internal(_)
            | AppError::InternalWithSource { .. } => LogLevel::Error,
        }
    }
}

impl From<SqlxError> for AppError {
    fn from(err: SqlxError) -> Self {
        AppError::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_maps_to_400() {
        let err = AppError::InvalidInput("Missing required video parameters".to_string());
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.client_message(), "Missing required video parameters");
        assert_eq!(err.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = AppError::NotFound("Video not found".to_string());
        assert_eq!(err.http_status_code(), 404);
        assert_eq!(err.client_message(), "Video not found");
    }

    #[test]
    fn test_database_error_is_generic_to_clients() {
        let err = AppError::Database(SqlxError::PoolTimedOut);
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.client_message(), "Database error");
        assert_eq!(err.log_level(), LogLevel::Error);
    }

    #[test]
    fn test_configuration_error_is_server_side() {
        let err = AppError::Configuration("Blob token not configured on server".to_string());
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
    }
}
