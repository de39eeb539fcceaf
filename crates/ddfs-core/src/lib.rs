//! # DDFS Core
//!
//! Client side of the DDFS tag/blob protocol:
//!
//! - **`uri`** - rewrite node-relative addresses into dereferenceable ones
//! - **`tag`** - fetch a tag document from the master and decode it
//! - **`locator`** - find a blob's size by asking its replicas in order
//! - **`submit`** - post a job package to the master
//! - **`transport`** - the failover request abstraction and its reqwest backend
//!
//! [`DdfsClient`] bundles a [`Config`](ddfs_types::Config) with a transport and
//! exposes all of the above.

pub mod client;
pub mod config;
pub mod locator;
pub mod submit;
pub mod tag;
pub mod transport;
pub mod uri;

pub use client::DdfsClient;
pub use transport::{FailoverRequest, HttpTransport, Method, Transport, TransportResponse};
