use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiftError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Journal entry not found: {0}")]
    EntryNotFound(u64),
}

impl SiftError {
    pub fn invalid(message: impl Into<String>) -> Self {
        SiftError::InvalidArgument(message.into())
    }

    /// True when the error is an IO failure caused by a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SiftError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

pub type Result<T> = std::result::Result<T, SiftError>;
