//! High-level client bundling a master [`Config`] with a [`Transport`].

use std::time::Duration;

use bytes::Bytes;
use ddfs_types::{BlobSet, Config, Result, SubmitResponse, Tag, Uri};

use crate::transport::{HttpTransport, Transport};
use crate::uri::tag_name_of;
use crate::{locator, submit, tag};

pub struct DdfsClient<T = HttpTransport> {
    config: Config,
    transport: T,
}

impl DdfsClient<HttpTransport> {
    /// Client over a default reqwest transport. `None` uses [`Config::default`].
    ///
    /// Fails only if the HTTP client cannot be built (TLS backend
    /// initialisation).
    pub fn new(config: Option<Config>) -> std::result::Result<Self, reqwest::Error> {
        Ok(Self::with_transport(Config::resolve(config), HttpTransport::build()?))
    }
}

impl<T: Transport> DdfsClient<T> {
    pub fn with_transport(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn resolve_tag(&self, name: &str) -> Result<Tag> {
        tag::resolve_tag(&self.transport, &self.config, name).await
    }

    /// Resolve a `tag://` URI.
    ///
    /// # Panics
    ///
    /// Panics if `uri` is not a tag URI; see [`tag_name_of`].
    pub async fn resolve_tag_uri(&self, uri: &Uri) -> Result<Tag> {
        self.resolve_tag(tag_name_of(uri)).await
    }

    pub async fn blob_size(&self, blobset: &BlobSet) -> Option<u64> {
        locator::blob_size(&self.transport, &self.config, blobset).await
    }

    pub async fn tag_blob_sizes(&self, tag: &Tag) -> Vec<Option<u64>> {
        locator::tag_blob_sizes(&self.transport, &self.config, tag).await
    }

    pub async fn submit(
        &self,
        payload: impl Into<Bytes>,
        timeout: Option<Duration>,
    ) -> Result<SubmitResponse> {
        submit::submit(&self.transport, &self.config, payload.into(), timeout).await
    }
}
