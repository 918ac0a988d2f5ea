//! # Block Padding
//!
//! PKCS5 / PKCS7 padding: `p` trailing bytes each equal to `p`, with `1 <= p <= 255`.
//! Padding is always added, so block-aligned input gains a full block.
//!
//! ```text
//! data (5 bytes, block 8):  61 62 63 64 65
//! padded:                   61 62 63 64 65 03 03 03
//! ```
//!
//! Removal validates every claimed pad byte before anything is dropped.

use tracing::warn;

use crate::config::PaddingConfig;
use crate::core::ByteData;
use crate::error::{constants, KitError, Result};

fn check_block_size(block_size: usize) -> Result<u8> {
    match u8::try_from(block_size) {
        Ok(b) if b > 0 => Ok(b),
        _ => Err(KitError::InvalidArgument(format!(
            "{}: {block_size}",
            constants::ERR_BLOCK_SIZE
        ))),
    }
}

/// The pad byte for `data_len` bytes of input, which is also the pad length
fn pad_value(data_len: usize, block: u8) -> u8 {
    // the remainder is below `block`, so it fits in a u8
    block - (data_len % usize::from(block)) as u8
}

fn pad_run(data_len: usize, block: u8) -> Vec<u8> {
    let value = pad_value(data_len, block);
    vec![value; usize::from(value)]
}

fn padded(data: &[u8], block: u8) -> Vec<u8> {
    let pad = pad_run(data.len(), block);
    let mut out = Vec::with_capacity(data.len() + pad.len());
    out.extend_from_slice(data);
    out.extend_from_slice(&pad);
    out
}

fn append_run(data: &mut ByteData, block: u8) -> usize {
    let pad = pad_run(data.readable_bytes(), block);
    data.write_bytes(&pad);
    pad.len()
}

/// Number of pad bytes to append to `data_len` bytes; never zero
///
/// # Errors
/// Returns `KitError::InvalidArgument` if `block_size` is outside `1..=255`
pub fn padding_count(data_len: usize, block_size: usize) -> Result<usize> {
    let block = check_block_size(block_size)?;
    Ok(usize::from(pad_value(data_len, block)))
}

/// The pad bytes for `data_len` bytes of input
pub fn padding_bytes(data_len: usize, block_size: usize) -> Result<Vec<u8>> {
    Ok(pad_run(data_len, check_block_size(block_size)?))
}

/// Copy `data` and append padding
pub fn apply_padding(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    Ok(padded(data, check_block_size(block_size)?))
}

/// Validate the padding at the end of `data` and return its length.
///
/// All claimed pad bytes are compared before deciding, so the time spent does not
/// depend on where a mismatch sits.
///
/// # Errors
/// Returns `KitError::InvalidPadding` for empty input, a zero pad byte, a pad count
/// longer than the data, or any trailing byte that differs from the pad count
pub fn padding_size(data: &[u8]) -> Result<usize> {
    let Some(&last) = data.last() else {
        return Err(reject(constants::ERR_PADDING_EMPTY));
    };
    let count = usize::from(last);
    if count == 0 {
        return Err(reject(constants::ERR_PADDING_ZERO));
    }
    if count > data.len() {
        return Err(reject(constants::ERR_PADDING_TOO_LONG));
    }
    let diff = data[data.len() - count..]
        .iter()
        .fold(0u8, |acc, &b| acc | (b ^ last));
    if diff != 0 {
        return Err(reject(constants::ERR_PADDING_MISMATCH));
    }
    Ok(count)
}

fn reject(reason: &str) -> KitError {
    warn!(reason, "rejecting block padding");
    KitError::InvalidPadding(reason.to_string())
}

/// `data` without its validated padding
pub fn remove_padding(data: &[u8]) -> Result<&[u8]> {
    let count = padding_size(data)?;
    Ok(&data[..data.len() - count])
}

/// Pad the readable region of `data` in place, growing it if needed.
///
/// Returns the number of pad bytes written.
pub fn append_padding(data: &mut ByteData, block_size: usize) -> Result<usize> {
    Ok(append_run(data, check_block_size(block_size)?))
}

/// Validate and drop the padding at the end of the readable region.
///
/// Only the write cursor moves; capacity is unchanged. Returns the number of bytes dropped.
pub fn drop_padding(data: &mut ByteData) -> Result<usize> {
    let count = padding_size(&data.buffer()[..data.readable_bytes()])?;
    data.set_write_index(data.write_index() - count)?;
    Ok(count)
}

/// PKCS7 padding bound to one block size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pkcs7 {
    block_size: u8,
}

impl Pkcs7 {
    /// PKCS5: PKCS7 over 8-byte blocks
    pub const PKCS5: Pkcs7 = Pkcs7 { block_size: 8 };

    pub fn new(block_size: usize) -> Result<Self> {
        Ok(Self {
            block_size: check_block_size(block_size)?,
        })
    }

    pub fn from_config(config: &PaddingConfig) -> Result<Self> {
        Self::new(config.block_size)
    }

    pub fn block_size(&self) -> usize {
        usize::from(self.block_size)
    }

    pub fn pad(&self, data: &[u8]) -> Vec<u8> {
        padded(data, self.block_size)
    }

    /// Strip padding. Any valid padding is accepted, even one longer than a block.
    pub fn unpad<'a>(&self, data: &'a [u8]) -> Result<&'a [u8]> {
        remove_padding(data)
    }

    pub fn pad_in_place(&self, data: &mut ByteData) -> usize {
        append_run(data, self.block_size)
    }

    pub fn unpad_in_place(&self, data: &mut ByteData) -> Result<usize> {
        drop_padding(data)
    }
}

impl Default for Pkcs7 {
    fn default() -> Self {
        Self::PKCS5
    }
}
