use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("patch error: {0}")]
    Patch(String),
}
