//! # Structured Reader
//!
//! Cursor-based typed reads over a borrowed, fixed byte region.
//!
//! The reader never mutates the region it wraps. Multi-byte numeric reads use the
//! reader's current [`Endian`] setting at the moment of the call, so the order can
//! be switched mid-stream with [`ByteReader::set_order`].
//!
//! ```rust
//! use bytekit::core::{ByteReader, Endian};
//!
//! let data = [0x01, 0x02, 0x03, 0x04];
//! let mut reader = ByteReader::with_order(&data, Endian::Little);
//! assert_eq!(reader.read_u16().unwrap(), 0x0201);
//! reader.set_order(Endian::Big);
//! assert_eq!(reader.read_u16().unwrap(), 0x0304);
//! ```

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::core::{Charset, Endian};
use crate::error::{KitError, Result};

const STR_END: u8 = 0x00;

/// Typed reader over a fixed byte region
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
    order: Endian,
}

impl<'a> ByteReader<'a> {
    /// Create a big-endian reader positioned at the start of `data`
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_order(data, Endian::default())
    }

    pub fn with_order(data: &'a [u8], order: Endian) -> Self {
        Self {
            data,
            pos: 0,
            order,
        }
    }

    pub fn order(&self) -> Endian {
        self.order
    }

    /// Change the byte order used by subsequent multi-byte reads
    pub fn set_order(&mut self, order: Endian) -> &mut Self {
        self.order = order;
        self
    }

    /// Take the next `n` bytes, advancing the position
    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let available = self.readable_bytes();
        if n > available {
            return Err(KitError::Underflow {
                requested: n,
                available,
            });
        }
        let data: &'a [u8] = self.data;
        let out = &data[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    // ~ Primitive reads
    // ========================================================================

    /// Read a single byte (byte order does not apply)
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// Read a two-byte UTF-16 code unit in the current byte order
    pub fn read_char(&mut self) -> Result<u16> {
        self.read_u16()
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let order = self.order;
        Ok(order.read_u16(self.take(2)?))
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(self.read_u16()? as i16)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let order = self.order;
        Ok(order.read_u32(self.take(4)?))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(self.read_u32()? as i32)
    }

    /// Read an unsigned 64-bit value; the full range `0..=u64::MAX` is representable
    pub fn read_u64(&mut self) -> Result<u64> {
        let order = self.order;
        Ok(order.read_u64(self.take(8)?))
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(self.read_u64()? as i64)
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        let order = self.order;
        Ok(order.read_f32(self.take(4)?))
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        let order = self.order;
        Ok(order.read_f64(self.take(8)?))
    }

    // ~ Bulk reads
    // ========================================================================

    /// Copy out the next `n` bytes
    ///
    /// # Errors
    /// Returns `KitError::Underflow` if fewer than `n` bytes remain
    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        Ok(self.take(n)?.to_vec())
    }

    /// Read `length` bytes, filling with `fill` when the region runs short.
    ///
    /// When fewer than `length` bytes remain, all remaining bytes are consumed and
    /// placed after (`pad_left`) or before the fill bytes.
    pub fn read_or_fill(&mut self, length: usize, fill: u8, pad_left: bool) -> Vec<u8> {
        let readable = self.readable_bytes();
        if length <= readable {
            let data: &'a [u8] = self.data;
            let out = data[self.pos..self.pos + length].to_vec();
            self.pos += length;
            return out;
        }

        let mut out = vec![fill; length];
        let real = &self.data[self.pos..];
        if pad_left {
            out[length - readable..].copy_from_slice(real);
        } else {
            out[..readable].copy_from_slice(real);
        }
        self.pos = self.data.len();
        out
    }

    /// Fill `dest` completely from the region.
    ///
    /// Availability is checked before any byte is copied, so `dest` is untouched on error.
    pub fn transfer_into(&mut self, dest: &mut [u8]) -> Result<&mut Self> {
        let src = self.take(dest.len())?;
        dest.copy_from_slice(src);
        Ok(self)
    }

    /// Read exactly `length` bytes and decode them with `charset`.
    ///
    /// With `drop_trailing_nul`, the string ends before the first `0x00` byte
    /// (C-string semantics); the whole `length` bytes are consumed either way.
    pub fn read_string(
        &mut self,
        length: usize,
        charset: Charset,
        drop_trailing_nul: bool,
    ) -> Result<String> {
        let raw = self.take(length)?;
        if drop_trailing_nul {
            if let Some(end) = raw.iter().position(|&b| b == STR_END) {
                return Ok(charset.decode(&raw[..end]));
            }
        }
        Ok(charset.decode(raw))
    }

    /// UTF-8 C-string read
    pub fn read_utf8_string(&mut self, length: usize) -> Result<String> {
        self.read_string(length, Charset::Utf8, true)
    }

    /// Read a two-byte-unit string such as UTF-16.
    ///
    /// The terminator is a `0x00 0x00` pair at an even offset. `length` should be even;
    /// a trailing odd byte is never treated as part of a terminator.
    pub fn read_wide_string(
        &mut self,
        length: usize,
        charset: Charset,
        drop_trailing_nul: bool,
    ) -> Result<String> {
        let raw = self.take(length)?;
        if drop_trailing_nul {
            let end = raw
                .chunks_exact(2)
                .position(|unit| unit == [STR_END, STR_END])
                .map(|i| i * 2);
            if let Some(end) = end {
                return Ok(charset.decode(&raw[..end]));
            }
        }
        Ok(charset.decode(raw))
    }

    // ~ Position control
    // ========================================================================

    pub fn readable_bytes(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn consumed_bytes(&self) -> usize {
        self.pos
    }

    /// Unread bytes without copying
    pub fn remaining(&self) -> &'a [u8] {
        let data: &'a [u8] = self.data;
        &data[self.pos..]
    }

    /// Move the position back by up to `n` bytes, stopping at the start
    pub fn rewind(&mut self, n: usize) -> &mut Self {
        self.pos = self.pos.saturating_sub(n);
        self
    }

    pub fn rewind_all(&mut self) -> &mut Self {
        self.pos = 0;
        self
    }

    /// Move the position forward by up to `n` bytes, stopping at the end
    pub fn skip(&mut self, n: usize) -> &mut Self {
        self.pos = self.pos.saturating_add(n).min(self.data.len());
        self
    }

    /// Consume everything left and return it as lowercase hex ("" when nothing remains)
    pub fn dump_hex(&mut self) -> String {
        let out = hex::encode(self.remaining());
        self.pos = self.data.len();
        out
    }

    /// Consume everything left and return it as standard base64 ("" when nothing remains)
    pub fn dump_base64(&mut self) -> String {
        let out = STANDARD.encode(self.remaining());
        self.pos = self.data.len();
        out
    }
}
