//! Error types for shelf

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShelfError>;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Remote error: {0}")]
    Remote(#[from] RemoteError),

    /// Locally detected duplicate-title conflict. Raised before any network
    /// traffic; the wrapped value is the offending title.
    #[error("An item with this title already exists.")]
    DuplicateTitle(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ShelfError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ShelfError::InvalidInput(_) => 3,
            ShelfError::DuplicateTitle(_) => 3,
            ShelfError::Remote(_) => 1,
            ShelfError::Config(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Failures from the remote item board.
///
/// `Clone` so the same failure can be recorded into store state and still be
/// returned to the caller.
#[derive(Error, Debug, Clone)]
pub enum RemoteError {
    #[error("Server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}
