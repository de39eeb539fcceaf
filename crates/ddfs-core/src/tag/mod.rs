//! Tag documents: fetching them from the master and decoding them.

mod decoder;
mod resolver;

pub use decoder::{decode, decode_slice, decode_str};
pub use resolver::resolve_tag;
