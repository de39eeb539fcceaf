//! Blob size lookup across replicas.
//!
//! Size is advisory: every failure here is logged and turned into `None`.

use ddfs_types::{BlobSet, Config, Tag};
use reqwest::header::CONTENT_LENGTH;

use crate::transport::{FailoverRequest, Transport, TransportResponse};
use crate::uri::normalize;

/// Size of the blob replicated by `blobset`, or `None` if no replica could
/// tell.
///
/// All replicas go into a single HEAD failover request, normalized and in
/// preference order.
pub async fn blob_size<T>(transport: &T, config: &Config, blobset: &BlobSet) -> Option<u64>
where
    T: Transport + ?Sized,
{
    let candidates = blobset.iter().map(|uri| normalize(config, uri).to_string()).collect();

    match transport.execute(&FailoverRequest::head(candidates)).await {
        Ok(response) => content_length(&response),
        Err(failures) => {
            for failure in &failures {
                tracing::warn!("Blob size lookup failed at {}: {}", failure.url, failure.error);
            }
            None
        },
    }
}

/// [`blob_size`] for every replica group of `tag`, in order.
pub async fn tag_blob_sizes<T>(transport: &T, config: &Config, tag: &Tag) -> Vec<Option<u64>>
where
    T: Transport + ?Sized,
{
    let mut sizes = Vec::with_capacity(tag.replica_groups.len());
    for blobset in &tag.replica_groups {
        sizes.push(blob_size(transport, config, blobset).await);
    }
    sizes
}

/// Repeated `Content-Length` values are joined with `", "` before parsing, so
/// more than one value never parses.
fn content_length(response: &TransportResponse) -> Option<u64> {
    let mut values = Vec::new();
    for value in response.headers.get_all(CONTENT_LENGTH) {
        match value.to_str() {
            Ok(v) => values.push(v),
            Err(_) => {
                tracing::warn!("Unreadable Content-Length from {}", response.url);
                return None;
            },
        }
    }

    if values.is_empty() {
        tracing::warn!("No Content-Length in response from {}", response.url);
        return None;
    }

    let joined = values.join(", ");
    match joined.parse::<u64>() {
        Ok(size) => Some(size),
        Err(e) => {
            tracing::warn!("Invalid Content-Length {:?} from {}: {}", joined, response.url, e);
            None
        },
    }
}
