//! Error types for host configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or merging host configuration documents.
///
/// `parse` never falls back to defaults on failure: a malformed supplied
/// document surfaces here so the embedding host can report it, then decide
/// whether to continue with the built-in defaults.
#[derive(Debug, Error)]
pub enum HostConfigError {
    /// The supplied text is not well-formed JSON or YAML.
    #[error("failed to parse host configuration: {message}")]
    Parse { message: String },

    /// Well-formed text whose fields violate the document schema
    /// (wrong type, invalid color, unknown enumeration token).
    #[error("invalid host configuration: {message}")]
    Invalid { message: String },

    /// A configuration file could not be read.
    #[error("failed to read host configuration {}: {message}", .path.display())]
    Load { path: PathBuf, message: String },
}

impl HostConfigError {
    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a schema violation error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

/// Result type for host configuration operations.
pub type Result<T> = std::result::Result<T, HostConfigError>;
