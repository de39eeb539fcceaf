//! Job submission.
//!
//! The job package itself is built elsewhere; this only ships the bytes to
//! the master and interprets the reply.

use std::time::Duration;

use bytes::Bytes;
use ddfs_types::{Config, DdfsError, Result, SubmitResponse};

use crate::transport::{single_failure, FailoverRequest, Transport};

/// POST `payload` to the master's submit endpoint.
///
/// Only transport failures are errors. A reply that is not one of the two
/// known shapes comes back as [`SubmitResponse::Unknown`].
pub async fn submit<T>(
    transport: &T,
    config: &Config,
    payload: Bytes,
    timeout: Option<Duration>,
) -> Result<SubmitResponse>
where
    T: Transport + ?Sized,
{
    let request = FailoverRequest::post(config.submit_url(), payload).with_timeout(timeout);

    let response = transport
        .execute(&request)
        .await
        .map_err(|failures| DdfsError::SubmitFailure { cause: single_failure(failures) })?;

    let decoded = decode_submit_response(&response.body);
    match &decoded {
        SubmitResponse::Ok { job_id } => tracing::info!("Job submitted: {}", job_id),
        SubmitResponse::Error { message } => tracing::warn!("Master rejected job: {}", message),
        SubmitResponse::Unknown { raw } => tracing::debug!("Unrecognised submit reply: {}", raw),
    }
    Ok(decoded)
}

/// `["ok", id]` and `["error", msg]`; everything else is kept as raw text.
pub fn decode_submit_response(body: &[u8]) -> SubmitResponse {
    match serde_json::from_slice::<(String, String)>(body) {
        Ok((status, job_id)) if status == "ok" => SubmitResponse::Ok { job_id },
        Ok((status, message)) if status == "error" => SubmitResponse::Error { message },
        _ => SubmitResponse::Unknown { raw: String::from_utf8_lossy(body).into_owned() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_shapes() {
        assert_eq!(
            decode_submit_response(br#"["ok", "WordCount@5a1:1b2c3"]"#),
            SubmitResponse::Ok { job_id: "WordCount@5a1:1b2c3".to_string() }
        );
        assert_eq!(
            decode_submit_response(br#"["error", "invalid job package"]"#),
            SubmitResponse::Error { message: "invalid job package".to_string() }
        );
    }

    #[test]
    fn test_everything_else_is_unknown() {
        let bodies: [&[u8]; 7] = [
            br#"["ok"]"#,
            br#"["ok", "id", "extra"]"#,
            br#"["ok", 5]"#,
            br#"["pending", "id"]"#,
            br#"{"status": "ok"}"#,
            b"Internal error",
            b"",
        ];
        for body in bodies {
            assert_eq!(
                decode_submit_response(body),
                SubmitResponse::Unknown { raw: String::from_utf8_lossy(body).into_owned() },
                "{:?}",
                String::from_utf8_lossy(body)
            );
        }
    }
}
