mod retrieval_error;

pub use retrieval_error::RetrievalError;

/// Top-level error for the meeple workspace.
#[derive(Debug, thiserror::Error)]
pub enum MeepleError {
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type MeepleResult<T> = Result<T, MeepleError>;
