//! # Codecs
//!
//! Named, reversible transformations used by the [`Obscurer`](crate::obscure::Obscurer).
//!
//! ## Capabilities
//! - [`Codec`]: bytes to bytes, identified in obscured headers by [`Codec::name`]
//! - [`StringCodec`]: bytes to text, used for the obscured body
//!
//! For every codec `c` and input `x`, `c.decode(&c.encode(x)?)? == x`.

pub mod compression;
pub mod text;

pub use compression::{compress, decompress, CompressionCodec, CompressionKind};
pub use text::{Base64Codec, HexCodec};

use crate::error::Result;

/// Named reversible byte transformation
pub trait Codec: Send + Sync {
    /// Header name. Must be non-empty and free of `,` and ` `.
    fn name(&self) -> &str;

    fn encode(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// # Errors
    /// Returns `KitError::DecodeFailure` when `data` was not produced by `encode`
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// True for codecs that only pay off on larger inputs
    fn compresses(&self) -> bool {
        false
    }
}

/// Reversible mapping between bytes and text
pub trait StringCodec: Send + Sync {
    fn name(&self) -> &str;

    fn encode(&self, data: &[u8]) -> String;

    fn decode(&self, text: &str) -> Result<Vec<u8>>;
}
