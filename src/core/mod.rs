//! # Core Buffer Components
//!
//! Byte storage, typed access and block padding.
//!
//! ## Components
//! - **ByteData**: growable owned buffer with a write cursor
//! - **ByteReader**: typed reads over a borrowed region
//! - **ByteWriter**: typed writes into a borrowed fixed-capacity region
//! - **Padding**: PKCS5 / PKCS7 block padding
//!
//! ## Byte Order
//! Multi-byte values are big-endian unless an [`Endian`] is given explicitly.

pub mod byte_data;
pub mod charset;
pub mod endian;
pub mod padding;
pub mod reader;
pub mod writer;

pub use byte_data::ByteData;
pub use charset::Charset;
pub use endian::Endian;
pub use padding::{
    append_padding, apply_padding, drop_padding, padding_bytes, padding_count, padding_size,
    remove_padding, Pkcs7,
};
pub use reader::ByteReader;
pub use writer::ByteWriter;
