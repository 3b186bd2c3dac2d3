//! # Confparse Errors
//!
//! Defines [`ConfigError`], the error type shared by every part of the
//! crate. File access problems surface as [`ConfigError::Io`], malformed
//! values as [`ConfigError::Decode`].
use std::path::PathBuf;
use std::result::Result as StdResult;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error during operation '{operation}' on path '{path}': {source}")]
    Io {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot decode '{text}' as {type_name}: {reason}")]
    Decode {
        type_name: &'static str,
        text: String,
        reason: String,
    },

    #[error("Storage operation '{operation}' failed for path '{}': {message}", path.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "<unknown>".into()))]
    OperationFailed {
        operation: String,
        path: Option<PathBuf>,
        message: String,
    },
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, ConfigError>;

// Helpers for creating errors, ensuring context is always included.
impl ConfigError {
    pub fn io(source: std::io::Error, operation: impl Into<String>, path: PathBuf) -> Self {
        ConfigError::Io {
            source,
            operation: operation.into(),
            path,
        }
    }

    pub fn decode(type_name: &'static str, text: &str, reason: impl ToString) -> Self {
        ConfigError::Decode {
            type_name,
            text: text.to_string(),
            reason: reason.to_string(),
        }
    }

    /// True when the error came from reading or writing a file
    pub fn is_io(&self) -> bool {
        matches!(self, ConfigError::Io { .. } | ConfigError::OperationFailed { .. })
    }
}
