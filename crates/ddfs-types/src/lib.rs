//! # DDFS Types
//!
//! Core types, models, and error definitions for the DDFS client.
//!
//! - **`error`** - Typed errors for tag resolution, transport and submission
//! - **`models`** - Domain models (Config, Uri, Tag, BlobSet, SubmitResponse)
//!
//! ## Architecture Role
//!
//! `ddfs-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!          ddfs-types (this crate)
//!                 │
//!                 ▼
//!             ddfs-core
//!                 │
//!                 ▼
//!              ddfs-cli
//! ```
//!
//! Nothing in here performs I/O. Values are immutable once built and are
//! `Clone` + `PartialEq` so tests can compare them directly.

pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{DdfsError, FailedAttempt, Result, TransportError};

// Re-export core model types
pub use models::{Authority, BlobSet, Config, SubmitResponse, Tag, Uri};
