use ddfs_types::{Config, DdfsError, Result, Tag};

use super::decoder;
use crate::transport::{single_failure, FailoverRequest, Transport};

/// Fetch `GET /ddfs/tag/{name}` from the master and decode it.
///
/// `name` goes into the URL as is. Each step short-circuits; nothing is
/// retried or cached.
pub async fn resolve_tag<T>(transport: &T, config: &Config, name: &str) -> Result<Tag>
where
    T: Transport + ?Sized,
{
    let request = FailoverRequest::get(config.tag_url(name));

    let response = transport.execute(&request).await.map_err(|failures| {
        DdfsError::TagRetrievalFailure { tag: name.to_string(), cause: single_failure(failures) }
    })?;

    let tag = decoder::decode_slice(&response.body)?;
    tracing::debug!(
        "Resolved tag {} | {} replica groups | last modified {}",
        name,
        tag.replica_groups.len(),
        tag.last_modified
    );
    Ok(tag)
}
