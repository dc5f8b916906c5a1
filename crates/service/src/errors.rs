use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("corrupt document: {0}")]
    Corrupt(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}
