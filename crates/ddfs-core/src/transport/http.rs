use async_trait::async_trait;
use ddfs_types::{FailedAttempt, TransportError};
use reqwest::Client;

use super::{FailoverRequest, RequestOutcome, Transport, TransportResponse};

/// [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Accepts a pre-built client so callers control TLS, proxies and
    /// connect timeouts.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Transport over a client with reqwest's default settings. Fails if the
    /// TLS backend cannot be initialised.
    pub fn build() -> Result<Self, reqwest::Error> {
        Ok(Self::new(Client::builder().build()?))
    }

    async fn send_once(
        &self,
        request: &FailoverRequest,
        url: &str,
    ) -> Result<TransportResponse, TransportError> {
        let mut builder = self.client.request(request.method.into(), url);
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let resp = builder.send().await.map_err(map_reqwest_error)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(TransportError::Status { status: status.as_u16() });
        }

        let headers = resp.headers().clone();
        let body = resp.bytes().await.map_err(map_reqwest_error)?;
        Ok(TransportResponse { url: url.to_string(), status: status.as_u16(), headers, body })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: &FailoverRequest) -> RequestOutcome {
        let mut failures = Vec::with_capacity(request.candidates.len());

        for (idx, url) in request.candidates.iter().enumerate() {
            match self.send_once(request, url).await {
                Ok(response) => {
                    if idx > 0 {
                        tracing::info!(
                            "Fallback succeeded | {} {} | Status: {} | Attempt: {}/{}",
                            request.method,
                            url,
                            response.status,
                            idx + 1,
                            request.candidates.len()
                        );
                    } else {
                        tracing::debug!(
                            "Request succeeded | {} {} | Status: {}",
                            request.method,
                            url,
                            response.status
                        );
                    }
                    return Ok(response);
                },
                Err(error) => {
                    tracing::debug!("{} {} failed: {}", request.method, url, error);
                    failures.push(FailedAttempt::new(url.clone(), error));
                },
            }
        }

        Err(failures)
    }
}

fn map_reqwest_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::request(e.to_string())
    }
}
