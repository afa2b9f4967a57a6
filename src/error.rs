//! @acp:module "Errors"
//! @acp:summary "Error taxonomy for sink and config file failures"
//! @acp:domain config
//! @acp:layer error
//!
//! The holder itself cannot fail. Errors come from the announcement sink and
//! from reading or writing configuration files.

use thiserror::Error;

/// Errors surfaced by the APEX library
#[derive(Debug, Error)]
pub enum ApexError {
    /// Sink or file I/O failure, passed through unchanged
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unknown environment: {0} (expected development, production or test)")]
    UnknownEnvironment(String),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, ApexError>;
