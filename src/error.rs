//! Error types for the faqbot evaluation engine
//!
//! This module provides structured error definitions using thiserror, with
//! anyhow accepted at the edges for propagation from the binary.

use thiserror::Error;

/// Main error type for faqbot operations
#[derive(Error, Debug)]
pub enum FaqbotError {
    /// Input rejected before any state was touched
    #[error("Validation error: {0}")]
    Validation(String),

    /// Completion service failed (transport, auth, quota, malformed reply)
    #[error("Completion gateway error: {0}")]
    Gateway(String),

    /// HTTP request error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Knowledge base could not be loaded or is inconsistent
    #[error("Knowledge base error: {0}")]
    KnowledgeBase(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Config file parse error
    #[error("Failed to parse config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Result type alias for faqbot operations
pub type Result<T> = std::result::Result<T, FaqbotError>;

/// Convert anyhow::Error to FaqbotError
impl From<anyhow::Error> for FaqbotError {
    fn from(err: anyhow::Error) -> Self {
        // Alternate form keeps the whole context chain
        FaqbotError::Other(format!("{:#}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FaqbotError::Validation("user input is empty".to_string());
        assert_eq!(err.to_string(), "Validation error: user input is empty");

        let err = FaqbotError::Gateway("status 429".to_string());
        assert_eq!(err.to_string(), "Completion gateway error: status 429");
    }

    #[test]
    fn test_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json");
        assert!(json_err.is_err());

        let err: FaqbotError = json_err.unwrap_err().into();
        assert!(matches!(err, FaqbotError::Serialization(_)));

        let err: FaqbotError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_anyhow_context_chain_preserved() {
        use anyhow::Context;

        let io: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"));
        let err: FaqbotError = io
            .context("Failed to open knowledge store 'kb.json'")
            .unwrap_err()
            .into();

        assert!(matches!(err, FaqbotError::Other(_)));
        assert_eq!(err.to_string(), "Failed to open knowledge store 'kb.json': no such file");
    }
}
