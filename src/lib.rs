//! # bytekit
//!
//! Byte buffers, typed binary access, block padding and reversible string obscuring.
//!
//! ## Modules
//! - [`core`]: [`ByteData`](core::ByteData), [`ByteReader`](core::ByteReader),
//!   [`ByteWriter`](core::ByteWriter) and PKCS5/PKCS7 padding
//! - [`codec`]: named byte codecs (gzip, lz4, zstd) and text codecs (base64, hex)
//! - [`obscure`]: the self-describing `+codec,+codec body` string format
//! - [`config`]: TOML / environment configuration
//! - [`error`]: the crate error type
//!
//! ## Example
//! ```rust
//! use bytekit::core::{ByteData, Endian};
//!
//! let mut data = ByteData::new();
//! data.write_i32(0x0102_0304, Endian::Big).write_i8(5);
//! assert_eq!(data.to_string(), "0102030405");
//!
//! let mut reader = data.reader(Endian::Big);
//! assert_eq!(reader.read_i32()?, 0x0102_0304);
//! # Ok::<(), bytekit::error::KitError>(())
//! ```
//!
//! The library emits `tracing` events but never installs a subscriber.

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod codec;
pub mod config;
pub mod core;
pub mod error;
pub mod obscure;

pub use crate::core::{ByteData, ByteReader, ByteWriter, Charset, Endian, Pkcs7};
pub use error::{KitError, Result};
pub use obscure::Obscurer;
