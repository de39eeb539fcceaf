//! Job submission response.

use serde::{Deserialize, Serialize};

/// Decoded reply of the master's submit endpoint.
///
/// The master answers with a two-element JSON array. Anything that does not
/// match one of the two known shapes is kept verbatim as [`SubmitResponse::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmitResponse {
    /// `["ok", job_id]`
    Ok { job_id: String },
    /// `["error", message]`
    Error { message: String },
    /// Any other body, as received
    Unknown { raw: String },
}

impl SubmitResponse {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    pub fn job_id(&self) -> Option<&str> {
        match self {
            Self::Ok { job_id } => Some(job_id),
            _ => None,
        }
    }
}
