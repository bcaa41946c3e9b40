use thiserror::Error;

/// Main error type for the match engine
#[derive(Error, Debug)]
pub enum MatchEngineError {
    /// Operand exceeds the representable length bound
    #[error("Input too large: {len} characters exceeds limit of {max}")]
    InputTooLarge { len: usize, max: usize },

    /// Unexpected failure inside a scheduled unit of work
    #[error("Computation failed: {0}")]
    ComputationFailed(String),

    /// HTTP request errors
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset provider errors
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for MatchEngineError {
    fn from(s: String) -> Self {
        MatchEngineError::Other(s)
    }
}

impl From<&str> for MatchEngineError {
    fn from(s: &str) -> Self {
        MatchEngineError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, MatchEngineError>;
