/// Error types for the minutes core
///
/// Uses thiserror for ergonomic error handling with proper Display implementations.
use thiserror::Error;

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum MinutesError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, MinutesError>;

/// Convert MinutesError to a string for the API layer
impl From<MinutesError> for String {
    fn from(error: MinutesError) -> Self {
        error.to_string()
    }
}
