use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Duplicate entity: {0}")]
    DuplicateEntity(String),

    #[error("Franchise not found with id: {0}")]
    FranchiseNotFound(String),

    #[error("Branch not found with id: {0}")]
    BranchNotFound(String),

    #[error("Product not found with id: {0}")]
    ProductNotFound(String),

    #[error("Concurrency conflict: {0}")]
    ConcurrencyConflict(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
