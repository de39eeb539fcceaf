//! Transport-level errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a single candidate request did not produce a usable response.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum TransportError {
    /// The server answered, but not with a 2xx status
    #[error("HTTP status {status}")]
    Status { status: u16 },

    /// The request could not be sent or the response could not be read
    #[error("Request failed: {message}")]
    Request { message: String },

    /// The request did not complete within its timeout
    #[error("Request timed out")]
    Timeout,
}

impl TransportError {
    /// Create a request error from a reqwest-style error message.
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request { message: message.into() }
    }

    /// Status code carried by this error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            _ => None,
        }
    }
}

/// One candidate of a failover request that did not succeed.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[error("{url}: {error}")]
pub struct FailedAttempt {
    /// Address that was attempted
    pub url: String,
    /// What went wrong
    pub error: TransportError,
}

impl FailedAttempt {
    pub fn new(url: impl Into<String>, error: TransportError) -> Self {
        Self { url: url.into(), error }
    }
}
