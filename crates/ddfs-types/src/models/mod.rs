//! Domain models for the DDFS client.

mod config;
mod submit;
mod tag;
mod uri;

pub use config::{Config, DEFAULT_MASTER_HOST, DEFAULT_MASTER_PORT};
pub use submit::SubmitResponse;
pub use tag::{BlobSet, Tag};
pub use uri::{Authority, Uri};
