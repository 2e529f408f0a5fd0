use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid benchmark document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
