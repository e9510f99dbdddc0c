//! Error types for EchoVault

use thiserror::Error;

/// Result type alias for EchoVault operations
pub type Result<T> = std::result::Result<T, EchoVaultError>;

/// Main error type for EchoVault
///
/// Classification and history updates never fail; these variants only
/// surface at the edges (lexicon construction, configuration, CLI input).
#[derive(Error, Debug)]
pub enum EchoVaultError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown emotion: {0}")]
    UnknownEmotion(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl EchoVaultError {
    /// Check if error is retryable
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Get a JSON-RPC style error code
    pub fn code(&self) -> i64 {
        match self {
            EchoVaultError::UnknownEmotion(_) => -32001,
            EchoVaultError::InvalidInput(_) => -32602,
            EchoVaultError::Config(_) => -32002,
            _ => -32000,
        }
    }
}
