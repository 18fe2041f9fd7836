//! Error types for startup configuration and glossary loading
//!
//! Query resolution itself never fails; these errors only surface while the
//! service is being assembled.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for glossary operations
pub type GlossaryResult<T> = std::result::Result<T, GlossaryError>;

#[derive(Error, Debug)]
pub enum GlossaryError {
    #[error("Failed to read glossary file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glossary JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Glossary topic at position {0} has an empty name")]
    EmptyTopic(usize),

    #[error("Duplicate glossary topic: {0}")]
    DuplicateTopic(String),

    #[error("Topic '{0}' lists an empty synonym phrase")]
    EmptyVariant(String),

    #[error("Topic '{0}' has an empty explanation")]
    EmptyExplanation(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {var} value '{value}': {reason}")]
    InvalidVar {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("Glossary error: {0}")]
    Glossary(#[from] GlossaryError),
}
