//! Failover requests.
//!
//! A [`FailoverRequest`] is one logical request expressed over several
//! candidate addresses. A [`Transport`] tries them in order and reports the
//! first success, or every failure if none succeeded. Callers only build the
//! candidate list; they never walk it themselves.

mod http;


use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use ddfs_types::{FailedAttempt, TransportError};
use reqwest::header::HeaderMap;

pub use http::HttpTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Head => reqwest::Method::HEAD,
            Method::Post => reqwest::Method::POST,
        }
    }
}

/// One request, many candidate addresses, in preference order.
#[derive(Debug, Clone, PartialEq)]
pub struct FailoverRequest {
    pub method: Method,
    pub candidates: Vec<String>,
    pub body: Option<Bytes>,
    pub timeout: Option<Duration>,
}

impl FailoverRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: Method::Get, candidates: vec![url.into()], body: None, timeout: None }
    }

    pub fn head(candidates: Vec<String>) -> Self {
        Self { method: Method::Head, candidates, body: None, timeout: None }
    }

    pub fn post(url: impl Into<String>, body: Bytes) -> Self {
        Self { method: Method::Post, candidates: vec![url.into()], body: Some(body), timeout: None }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// The response of the candidate that succeeded.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// Candidate address that answered
    pub url: String,
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// First success in candidate order, or every failure in candidate order.
pub type RequestOutcome = Result<TransportResponse, Vec<FailedAttempt>>;

#[async_trait]
pub trait Transport: Send + Sync {
    /// Try each candidate of `request` once, in order, stopping at the first
    /// 2xx response.
    async fn execute(&self, request: &FailoverRequest) -> RequestOutcome;
}

/// Cause of a failed single-candidate request.
pub(crate) fn single_failure(failures: Vec<FailedAttempt>) -> TransportError {
    failures
        .into_iter()
        .next()
        .map(|attempt| attempt.error)
        .unwrap_or_else(|| TransportError::request("no response from transport"))
}
