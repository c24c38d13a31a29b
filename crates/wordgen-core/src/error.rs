use thiserror::Error;

/// Core error type shared across wordgen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The request cannot be turned into a runnable generation.
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Convenience alias for results returned by wordgen crates.
pub type Result<T> = std::result::Result<T, Error>;

/// Structured, non-fatal issue raised while resolving a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestIssue {
    pub code: String,
    pub message: String,
}

impl RequestIssue {
    /// Create a warning issue.
    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
