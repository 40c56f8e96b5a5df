//! Error types for card payload handling.

use thiserror::Error;

use crate::card::SchemaVersion;

/// Errors that can occur when decoding or gating card payloads.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The payload text is not a well-formed card document.
    #[error("failed to parse card payload: {message}")]
    Parse { message: String },

    /// A payload could not be serialized back to JSON.
    #[error("failed to serialize card payload: {message}")]
    Serialize { message: String },

    /// The payload targets a schema version newer than the host supports.
    #[error("payload requires schema version {version}, host supports up to {supported}")]
    UnsupportedVersion {
        version: SchemaVersion,
        supported: SchemaVersion,
    },
}

impl PayloadError {
    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}

/// Result type for card payload operations.
pub type Result<T> = std::result::Result<T, PayloadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_version_display() {
        let err = PayloadError::UnsupportedVersion {
            version: SchemaVersion::new(1, 2),
            supported: SchemaVersion::V1_0,
        };
        let msg = err.to_string();
        assert!(msg.contains("1.2"));
        assert!(msg.contains("1.0"));
    }
}
