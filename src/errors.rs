use thiserror::Error;

/// Error types for the application
#[derive(Debug, Error)]
pub enum RiskmapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Answers error: {0}")]
    Answers(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type alias
pub type RiskmapResult<T> = Result<T, RiskmapError>;
