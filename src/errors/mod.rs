//! Error handling module for the BEGLES data core.
//!
//! Provides a centralized error type with stable, non-stringly error codes.

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const NO_DRAFT: &str = "NO_DRAFT";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const MEDIA_ERROR: &str = "MEDIA_ERROR";
    pub const DATABASE_ERROR: &str = "DATABASE_ERROR";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found (a party id with no record)
    NotFound(String),
    /// An editor operation was invoked with no draft staged
    NoDraft,
    /// Validation error on a save or an index-addressed mutation
    Validation(String),
    /// File read or encode failure
    Media(String),
    /// Store failure
    Database(String),
    /// Serialization or other internal failure
    Internal(String),
}

impl AppError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => codes::NOT_FOUND,
            AppError::NoDraft => codes::NO_DRAFT,
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::Media(_) => codes::MEDIA_ERROR,
            AppError::Database(_) => codes::DATABASE_ERROR,
            AppError::Internal(_) => codes::INTERNAL_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::NotFound(msg) => msg.clone(),
            AppError::NoDraft => "No party draft is staged".to_string(),
            AppError::Validation(msg) => msg.clone(),
            AppError::Media(msg) => msg.clone(),
            AppError::Database(msg) => msg.clone(),
            AppError::Internal(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        AppError::Database(format!("Database error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Serialization error: {:?}", err);
        AppError::Internal(format!("Serialization error: {}", err))
    }
}
