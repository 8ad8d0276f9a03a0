use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScError {
    #[error("Failed to decode save data: {0}")]
    Decode(String),
    #[error("File not found or expired: {handle}")]
    NotFound { handle: String },
    #[error("Failed to encode save data: {0}")]
    Encode(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScError {
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub fn not_found(handle: impl Into<String>) -> Self {
        Self::NotFound { handle: handle.into() }
    }

    /// Client-caused failures: never retried, never logged above `warn`.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, ScError>;
