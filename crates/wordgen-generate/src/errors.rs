use thiserror::Error;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<wordgen_core::Error> for GenerationError {
    fn from(err: wordgen_core::Error) -> Self {
        match err {
            wordgen_core::Error::Configuration(message) => GenerationError::Configuration(message),
        }
    }
}
