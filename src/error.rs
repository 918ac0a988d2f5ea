//! # Error Types
//!
//! Error handling for the buffer, padding and codec subsystems.
//!
//! Every fallible operation in the crate reports one of the variants below to its
//! immediate caller. Nothing is retried or recovered internally; after a failure the
//! involved buffer is left in a well-defined state, but callers must not assume that
//! a partially executed operation left it untouched.
//!
//! ## Error Categories
//! - **Bounds Errors**: positions outside a buffer, reads past the end, writes past capacity
//! - **Argument Errors**: invalid block sizes, malformed hex/base64 input
//! - **Padding Errors**: trailing bytes that are not valid PKCS7 padding
//! - **Codec Errors**: unknown codec names, failed decode steps
//! - **Configuration Errors**: unreadable or invalid configuration
//!
//! ## Example Usage
//! ```rust
//! use bytekit::core::ByteData;
//! use bytekit::error::KitError;
//!
//! let mut data = ByteData::with_capacity(4);
//! match data.set_write_index(5) {
//!     Err(KitError::OutOfRange { index, limit }) => assert_eq!((index, limit), (5, 4)),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use thiserror::Error;

/// Error message constants to reduce allocations in error paths.
pub mod constants {
    /// Padding validation errors
    pub const ERR_PADDING_EMPTY: &str = "no data to remove padding from";
    pub const ERR_PADDING_ZERO: &str = "pad byte is zero";
    pub const ERR_PADDING_TOO_LONG: &str = "pad count exceeds data length";
    pub const ERR_PADDING_MISMATCH: &str = "pad bytes do not match pad count";

    /// Argument validation errors
    pub const ERR_BLOCK_SIZE: &str = "block size must be within 1..=255";
    pub const ERR_NOT_HEX: &str = "not a hex string";
    pub const ERR_NOT_BASE64: &str = "not a base64 string";
    pub const ERR_EMPTY_CODEC_NAME: &str = "codec name cannot be empty";
    pub const ERR_RESERVED_CHAR: &str = "must not contain ',' or ' '";

    /// Codec errors
    pub const ERR_NOT_UTF8: &str = "decoded bytes are not valid UTF-8";
    pub const ERR_OUTPUT_LIMIT: &str = "decompressed output exceeds size limit";
    pub const ERR_TRUNCATED_INPUT: &str = "input too short";
}

/// KitError is the error type for all buffer, padding and codec operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KitError {
    #[error("Index out of range: {index} (limit {limit})")]
    OutOfRange { index: usize, limit: usize },

    #[error("Buffer underflow: requested {requested} bytes, {available} available")]
    Underflow { requested: usize, available: usize },

    #[error("Buffer overflow: requested {requested} bytes, {available} writable")]
    Overflow { requested: usize, available: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid padding: {0}")]
    InvalidPadding(String),

    #[error("Missing codec: {0}")]
    MissingCodec(String),

    #[error("Decode failed in {codec}: {reason}")]
    DecodeFailure { codec: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl KitError {
    pub(crate) fn decode(codec: &str, reason: impl Into<String>) -> Self {
        KitError::DecodeFailure {
            codec: codec.to_string(),
            reason: reason.into(),
        }
    }
}

/// Type alias for Results using KitError
pub type Result<T> = std::result::Result<T, KitError>;
