//! Typed error definitions for the DDFS client.
//!
//! Errors are designed to be:
//!
//! - **Serializable** so the CLI can emit them as JSON
//! - **Displayable** for logging via Display trait
//! - **Matchable** for error handling logic via enum variants
//!
//! Blob size lookups never surface these; they degrade to "unknown" instead.

mod transport;

pub use transport::{FailedAttempt, TransportError};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by tag resolution and job submission.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum DdfsError {
    /// The GET for a tag document failed at the transport level
    #[error("Failed to retrieve tag {tag}: {cause}")]
    TagRetrievalFailure {
        /// Tag name as requested
        tag: String,
        /// Underlying transport failure
        cause: TransportError,
    },

    /// The tag payload was not syntactically valid JSON
    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },

    /// The JSON was valid but did not have the expected shape
    #[error("Unexpected JSON: {message}")]
    UnexpectedJson { message: String },

    /// A blob URL failed URI syntax validation
    #[error("Invalid URI {uri:?}: {message}")]
    InvalidUri { uri: String, message: String },

    /// The POST to the master's submit endpoint failed at the transport level
    #[error("Job submission failed: {cause}")]
    SubmitFailure { cause: TransportError },
}

impl DdfsError {
    /// Create an invalid-JSON error from a serde_json error.
    pub fn from_json_error(e: &serde_json::Error) -> Self {
        Self::InvalidJson { message: e.to_string() }
    }

    pub fn unexpected_json(message: impl Into<String>) -> Self {
        Self::UnexpectedJson { message: message.into() }
    }

    pub fn invalid_uri(uri: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidUri { uri: uri.into(), message: message.into() }
    }
}

/// Standard Result type using DdfsError.
pub type Result<T> = std::result::Result<T, DdfsError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = DdfsError::TagRetrievalFailure {
            tag: "mytag".to_string(),
            cause: TransportError::Status { status: 404 },
        };

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("TagRetrievalFailure"));
        assert!(json.contains("mytag"));

        let deserialized: DdfsError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn test_error_display() {
        let err = DdfsError::TagRetrievalFailure {
            tag: "data:chekhov".to_string(),
            cause: TransportError::Status { status: 404 },
        };

        let msg = format!("{}", err);
        assert!(msg.contains("data:chekhov"));
        assert!(msg.contains("404"));
    }

    #[test]
    fn test_failed_attempt_display_names_url() {
        let attempt = FailedAttempt::new("http://node1:8989/blob", TransportError::Timeout);
        assert_eq!(attempt.to_string(), "http://node1:8989/blob: Request timed out");
        assert_eq!(attempt.error.status(), None);
    }

    #[test]
    fn test_from_json_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(DdfsError::from_json_error(&parse_err), DdfsError::InvalidJson { .. }));
    }
}
