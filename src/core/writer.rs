//! # Structured Writer
//!
//! Cursor-based typed writes into a borrowed, fixed-capacity byte region.
//!
//! Unlike [`ByteData`](crate::core::ByteData), a `ByteWriter` never grows: every write
//! checks the remaining space first and fails with `KitError::Overflow` without
//! touching the region when it does not fit.

use crate::core::{Charset, Endian};
use crate::error::{KitError, Result};

/// Typed writer over a fixed byte region
#[derive(Debug)]
pub struct ByteWriter<'a> {
    data: &'a mut [u8],
    pos: usize,
    order: Endian,
}

impl<'a> ByteWriter<'a> {
    /// Create a big-endian writer positioned at the start of `data`
    pub fn new(data: &'a mut [u8]) -> Self {
        Self::with_order(data, Endian::default())
    }

    pub fn with_order(data: &'a mut [u8], order: Endian) -> Self {
        Self {
            data,
            pos: 0,
            order,
        }
    }

    pub fn order(&self) -> Endian {
        self.order
    }

    /// Change the byte order used by subsequent multi-byte writes
    pub fn set_order(&mut self, order: Endian) -> &mut Self {
        self.order = order;
        self
    }

    /// Claim the next `n` bytes for writing
    fn slot(&mut self, n: usize) -> Result<&mut [u8]> {
        let available = self.writable_bytes();
        if n > available {
            return Err(KitError::Overflow {
                requested: n,
                available,
            });
        }
        let start = self.pos;
        self.pos += n;
        Ok(&mut self.data[start..start + n])
    }

    // ~ Primitive writes
    // ========================================================================

    pub fn write_u8(&mut self, value: u8) -> Result<&mut Self> {
        self.slot(1)?[0] = value;
        Ok(self)
    }

    pub fn write_i8(&mut self, value: i8) -> Result<&mut Self> {
        self.write_u8(value as u8)
    }

    /// Write a two-byte UTF-16 code unit in the current byte order
    pub fn write_char(&mut self, value: u16) -> Result<&mut Self> {
        self.write_u16(value)
    }

    pub fn write_u16(&mut self, value: u16) -> Result<&mut Self> {
        let order = self.order;
        order.write_u16(self.slot(2)?, value);
        Ok(self)
    }

    pub fn write_i16(&mut self, value: i16) -> Result<&mut Self> {
        self.write_u16(value as u16)
    }

    pub fn write_u32(&mut self, value: u32) -> Result<&mut Self> {
        let order = self.order;
        order.write_u32(self.slot(4)?, value);
        Ok(self)
    }

    pub fn write_i32(&mut self, value: i32) -> Result<&mut Self> {
        self.write_u32(value as u32)
    }

    pub fn write_u64(&mut self, value: u64) -> Result<&mut Self> {
        let order = self.order;
        order.write_u64(self.slot(8)?, value);
        Ok(self)
    }

    pub fn write_i64(&mut self, value: i64) -> Result<&mut Self> {
        self.write_u64(value as u64)
    }

    pub fn write_f32(&mut self, value: f32) -> Result<&mut Self> {
        let order = self.order;
        order.write_f32(self.slot(4)?, value);
        Ok(self)
    }

    pub fn write_f64(&mut self, value: f64) -> Result<&mut Self> {
        let order = self.order;
        order.write_f64(self.slot(8)?, value);
        Ok(self)
    }

    // ~ Bulk writes
    // ========================================================================

    pub fn write_repeated_byte(&mut self, value: u8, count: usize) -> Result<&mut Self> {
        self.slot(count)?.fill(value);
        Ok(self)
    }

    pub fn write_bytes(&mut self, src: &[u8]) -> Result<&mut Self> {
        self.slot(src.len())?.copy_from_slice(src);
        Ok(self)
    }

    /// Encode `text` with `charset` and write it.
    ///
    /// With `fixed_length = None` the natural encoded length is written. Otherwise the
    /// encoded bytes are truncated to, or padded with `filler` up to, exactly that length.
    pub fn write_string(
        &mut self,
        text: &str,
        charset: Charset,
        fixed_length: Option<usize>,
        filler: u8,
    ) -> Result<&mut Self> {
        let raw = charset.encode(text);
        let length = fixed_length.unwrap_or(raw.len());
        let slot = self.slot(length)?;
        let copied = raw.len().min(length);
        slot[..copied].copy_from_slice(&raw[..copied]);
        slot[copied..].fill(filler);
        Ok(self)
    }

    /// UTF-8 string truncated or zero-padded to `size` bytes
    pub fn write_fixed_string(&mut self, text: &str, size: usize) -> Result<&mut Self> {
        self.write_string(text, Charset::Utf8, Some(size), 0)
    }

    // ~ Position control
    // ========================================================================

    /// Move the cursor back by up to `n` bytes. Bytes stay in place until overwritten.
    pub fn discard(&mut self, n: usize) -> &mut Self {
        self.pos = self.pos.saturating_sub(n);
        self
    }

    pub fn discard_all(&mut self) -> &mut Self {
        self.pos = 0;
        self
    }

    /// Skip up to `n` bytes without writing, for later backfilling
    pub fn reserve(&mut self, n: usize) -> &mut Self {
        self.pos = self.pos.saturating_add(n).min(self.data.len());
        self
    }

    pub fn written_bytes(&self) -> usize {
        self.pos
    }

    pub fn writable_bytes(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Everything written so far
    pub fn written(&self) -> &[u8] {
        &self.data[..self.pos]
    }

    /// Inspect any byte of the region, written or not
    pub fn peek_at(&self, pos: usize) -> Option<u8> {
        self.data.get(pos).copied()
    }
}
