use crate::validation::FieldErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GigbookError {
    #[error("Artist not found: {0}")]
    ArtistNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    Fetch(String),

    #[error("{0}")]
    Submission(String),

    #[error("Invalid submission: {0}")]
    Validation(FieldErrors),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, GigbookError>;
