use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Artifact error: {0}")]
    Artifact(String),

    #[error("Feature dimension mismatch: model expects {expected}, got {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Inference error: {0}")]
    Inference(String),
}

pub type Result<T> = std::result::Result<T, Error>;
