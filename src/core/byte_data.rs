//! # Growable Byte Buffer
//!
//! `ByteData` owns a resizable byte array plus an independent write cursor.
//!
//! ```text
//! 0                write_index            capacity
//! |---- readable ----|------ writable ------|
//! ```
//!
//! Writes grow the storage by exactly the number of missing bytes before copying,
//! then advance the cursor. [`ByteData::resize_by`] is the only primitive that changes
//! capacity; [`ByteData::ensure_writable`] and [`ByteData::grow`] are expressed in terms
//! of it. Callers appending many small pieces should call `grow` (or `ensure_writable`
//! with a generous size) up front rather than relying on exact-fit reallocation.
//!
//! ## Views
//! [`ByteData::reader`] borrows the readable region as a [`ByteReader`];
//! [`ByteData::writer`] borrows the writable region as a [`ByteWriter`] which cannot
//! grow the buffer. [`ByteData::fill_with`] combines a writer with a cursor update.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine};
use bytes::Bytes;
use rand::Rng;
use tracing::trace;

use crate::config::BufferConfig;
use crate::core::{ByteReader, ByteWriter, Charset, Endian};
use crate::error::{constants, KitError, Result};

/// Owned byte storage with a write cursor
#[derive(Debug, Clone, Default)]
pub struct ByteData {
    storage: Vec<u8>,
    write_index: usize,
}

impl ByteData {
    // ~ Construction
    // ========================================================================

    /// Zero-filled buffer of `capacity` bytes with the cursor at 0
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: vec![0; capacity],
            write_index: 0,
        }
    }

    /// Zero-capacity buffer
    pub fn new() -> Self {
        Self::default()
    }

    pub fn empty() -> Self {
        Self::new()
    }

    /// Buffer sized from configuration. The configured byte order applies to
    /// [`ByteData::reader_from_config`] and [`ByteData::writer_from_config`].
    pub fn from_config(config: &BufferConfig) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    /// Buffer holding a copy of `src`, fully readable
    pub fn copy_of(src: &[u8]) -> Self {
        Self::from(src.to_vec())
    }

    /// Buffer holding `count` copies of `value`
    pub fn repeat(value: u8, count: usize) -> Self {
        Self::from(vec![value; count])
    }

    /// Buffer holding `size` random bytes
    pub fn random(size: usize) -> Self {
        let mut storage = vec![0u8; size];
        rand::rng().fill(&mut storage[..]);
        Self::from(storage)
    }

    /// Decode a hex string (either case)
    ///
    /// # Errors
    /// Returns `KitError::InvalidArgument` for odd lengths or non-hex characters
    pub fn from_hex(text: &str) -> Result<Self> {
        hex::decode(text)
            .map(Self::from)
            .map_err(|e| KitError::InvalidArgument(format!("{}: {e}", constants::ERR_NOT_HEX)))
    }

    /// Decode a standard (padded) base64 string
    ///
    /// # Errors
    /// Returns `KitError::InvalidArgument` for malformed input
    pub fn from_base64(text: &str) -> Result<Self> {
        STANDARD
            .decode(text)
            .map(Self::from)
            .map_err(|e| KitError::InvalidArgument(format!("{}: {e}", constants::ERR_NOT_BASE64)))
    }

    // ~ Cursor and capacity
    // ========================================================================

    /// The whole storage, including the writable tail
    pub fn buffer(&self) -> &[u8] {
        &self.storage
    }

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    pub fn write_index(&self) -> usize {
        self.write_index
    }

    /// Move the write cursor to `value`
    ///
    /// # Errors
    /// Returns `KitError::OutOfRange` if `value > capacity()`
    pub fn set_write_index(&mut self, value: usize) -> Result<&mut Self> {
        if value > self.capacity() {
            return Err(KitError::OutOfRange {
                index: value,
                limit: self.capacity(),
            });
        }
        self.write_index = value;
        Ok(self)
    }

    /// Move the write cursor by `delta` (negative moves backward)
    ///
    /// # Errors
    /// Returns `KitError::InvalidArgument` naming the delta if the cursor would move
    /// below zero, and `KitError::OutOfRange` if the target lies past `capacity()`
    pub fn advance_write_index(&mut self, delta: isize) -> Result<&mut Self> {
        let target = self.write_index.checked_add_signed(delta).ok_or_else(|| {
            KitError::InvalidArgument(format!(
                "cannot move write index {} by {delta}",
                self.write_index
            ))
        })?;
        self.set_write_index(target)
    }

    /// Move the write cursor by `delta`, clamping into `0..=capacity()`
    pub fn advance_write_index_clamped(&mut self, delta: isize) -> &mut Self {
        let target = self.write_index.saturating_add_signed(delta);
        self.write_index = target.min(self.capacity());
        self
    }

    /// Grow (positive) or shrink (negative) the capacity by `delta` bytes.
    ///
    /// Shrinking to zero or below empties the buffer and resets the cursor. Otherwise
    /// the contents are kept up to the new capacity and the cursor is clamped to it.
    pub fn resize_by(&mut self, delta: isize) -> &mut Self {
        let capacity = self.capacity();
        let new_capacity = match capacity.checked_add_signed(delta) {
            Some(n) if n > 0 => n,
            _ => {
                self.storage = Vec::new();
                self.write_index = 0;
                return self;
            }
        };
        if new_capacity != capacity {
            trace!(from = capacity, to = new_capacity, "resizing byte buffer");
            self.storage.resize(new_capacity, 0);
            self.storage.shrink_to_fit();
            self.write_index = self.write_index.min(new_capacity);
        }
        self
    }

    /// Grow by half the current capacity (at least one byte)
    pub fn grow(&mut self) -> &mut Self {
        let step = (self.capacity() / 2).max(1);
        self.resize_by(step as isize)
    }

    /// Make sure at least `n` bytes are writable, growing by exactly the shortfall.
    ///
    /// Never shrinks. A shortfall no allocation can satisfy panics with a capacity
    /// overflow, like `Vec::reserve`; use [`ByteData::try_ensure_writable`] to get an
    /// error instead.
    pub fn ensure_writable(&mut self, n: usize) -> &mut Self {
        let more = n.saturating_sub(self.writable_bytes());
        if more > 0 {
            self.resize_by(isize::try_from(more).unwrap_or(isize::MAX));
        }
        self
    }

    /// Fallible form of [`ByteData::ensure_writable`]
    ///
    /// # Errors
    /// Returns `KitError::Overflow` if `write_index() + n` exceeds `isize::MAX`, the
    /// largest buffer that can be allocated. The buffer is left untouched.
    pub fn try_ensure_writable(&mut self, n: usize) -> Result<&mut Self> {
        let fits = self
            .write_index
            .checked_add(n)
            .is_some_and(|end| isize::try_from(end).is_ok());
        if !fits {
            return Err(KitError::Overflow {
                requested: n,
                available: self.writable_bytes(),
            });
        }
        Ok(self.ensure_writable(n))
    }

    /// Overwrite the entire storage with zeros; the cursor is unchanged
    pub fn zero(&mut self) -> &mut Self {
        self.storage.fill(0);
        self
    }

    pub fn readable_bytes(&self) -> usize {
        self.write_index
    }

    /// Readable bytes starting at `offset` (0 once `offset` reaches the cursor)
    pub fn readable_bytes_from(&self, offset: usize) -> usize {
        self.write_index.saturating_sub(offset)
    }

    pub fn writable_bytes(&self) -> usize {
        self.capacity() - self.write_index
    }

    // ~ Reads
    // ========================================================================

    fn check_read_pos(&self, offset: usize) -> Result<()> {
        if offset > self.write_index {
            return Err(KitError::OutOfRange {
                index: offset,
                limit: self.write_index,
            });
        }
        Ok(())
    }

    fn readable_range(&self, offset: usize, count: Option<usize>) -> Result<&[u8]> {
        self.check_read_pos(offset)?;
        let count = count.unwrap_or_else(|| self.readable_bytes_from(offset));
        let end = offset.saturating_add(count);
        if end > self.write_index {
            return Err(KitError::OutOfRange {
                index: end,
                limit: self.write_index,
            });
        }
        Ok(&self.storage[offset..end])
    }

    /// Copy `count` readable bytes starting at `offset`; `None` means all remaining
    ///
    /// # Errors
    /// Returns `KitError::OutOfRange` if the range extends past the write cursor
    pub fn read(&self, offset: usize, count: Option<usize>) -> Result<Vec<u8>> {
        Ok(self.readable_range(offset, count)?.to_vec())
    }

    /// Copy the whole readable region
    pub fn read_all(&self) -> Vec<u8> {
        self.storage[..self.write_index].to_vec()
    }

    pub fn read_at(&self, offset: usize) -> Result<u8> {
        Ok(self.readable_range(offset, Some(1))?[0])
    }

    /// Copy up to `max_count` readable bytes starting at `offset`
    ///
    /// # Errors
    /// Returns `KitError::OutOfRange` only if `offset` lies past the write cursor
    pub fn read_some(&self, offset: usize, max_count: usize) -> Result<Vec<u8>> {
        self.check_read_pos(offset)?;
        let end = offset.saturating_add(max_count).min(self.write_index);
        Ok(self.storage[offset..end].to_vec())
    }

    pub fn read_string(&self, offset: usize, length: Option<usize>, charset: Charset) -> Result<String> {
        Ok(charset.decode(self.readable_range(offset, length)?))
    }

    pub fn read_utf8_string(&self, offset: usize, length: Option<usize>) -> Result<String> {
        self.read_string(offset, length, Charset::Utf8)
    }

    pub fn read_hex_lower(&self, offset: usize, length: Option<usize>) -> Result<String> {
        Ok(hex::encode(self.readable_range(offset, length)?))
    }

    pub fn read_hex_upper(&self, offset: usize, length: Option<usize>) -> Result<String> {
        Ok(hex::encode_upper(self.readable_range(offset, length)?))
    }

    pub fn read_base64(&self, offset: usize, length: Option<usize>) -> Result<String> {
        Ok(STANDARD.encode(self.readable_range(offset, length)?))
    }

    /// Copy readable bytes from `offset` into `dest`, filling any shortfall with `padding`.
    ///
    /// Returns the number of padding bytes written.
    pub fn read_into(&self, offset: usize, dest: &mut [u8], padding: u8) -> usize {
        let readable = self.readable_bytes_from(offset).min(dest.len());
        if readable > 0 {
            dest[..readable].copy_from_slice(&self.storage[offset..offset + readable]);
        }
        dest[readable..].fill(padding);
        dest.len() - readable
    }

    // ~ Writes
    // ========================================================================

    /// Reserve `width` bytes at the cursor, growing as needed, and advance past them
    fn claim(&mut self, width: usize) -> &mut [u8] {
        self.ensure_writable(width);
        let start = self.write_index;
        self.write_index += width;
        &mut self.storage[start..start + width]
    }

    /// Append the readable region of another buffer
    pub fn write(&mut self, src: &ByteData) -> &mut Self {
        self.write_bytes(&src.storage[..src.write_index])
    }

    pub fn write_bytes(&mut self, src: &[u8]) -> &mut Self {
        self.claim(src.len()).copy_from_slice(src);
        self
    }

    pub fn write_i8(&mut self, value: i8) -> &mut Self {
        self.claim(1)[0] = value as u8;
        self
    }

    pub fn write_i16(&mut self, value: i16, order: Endian) -> &mut Self {
        order.write_u16(self.claim(2), value as u16);
        self
    }

    pub fn write_i32(&mut self, value: i32, order: Endian) -> &mut Self {
        order.write_u32(self.claim(4), value as u32);
        self
    }

    pub fn write_i64(&mut self, value: i64, order: Endian) -> &mut Self {
        order.write_u64(self.claim(8), value as u64);
        self
    }

    pub fn write_f32(&mut self, value: f32, order: Endian) -> &mut Self {
        order.write_f32(self.claim(4), value);
        self
    }

    pub fn write_f64(&mut self, value: f64, order: Endian) -> &mut Self {
        order.write_f64(self.claim(8), value);
        self
    }

    /// Run `f` against a writer over the writable region, then advance the cursor
    /// by however many bytes it wrote. Nothing is committed if `f` fails.
    pub fn fill_with<F>(&mut self, order: Endian, f: F) -> Result<usize>
    where
        F: FnOnce(&mut ByteWriter<'_>) -> Result<()>,
    {
        let written = {
            let mut writer = self.writer(order);
            f(&mut writer)?;
            writer.written_bytes()
        };
        self.write_index += written;
        Ok(written)
    }

    // ~ Views and comparison
    // ========================================================================

    /// Reader over the readable region
    pub fn reader(&self, order: Endian) -> ByteReader<'_> {
        ByteReader::with_order(&self.storage[..self.write_index], order)
    }

    /// Writer over the writable region. Writes through it do not move the cursor.
    pub fn writer(&mut self, order: Endian) -> ByteWriter<'_> {
        let start = self.write_index;
        ByteWriter::with_order(&mut self.storage[start..], order)
    }

    /// Reader over the readable region in the configured byte order
    pub fn reader_from_config(&self, config: &BufferConfig) -> ByteReader<'_> {
        self.reader(config.byte_order)
    }

    /// Writer over the writable region in the configured byte order
    pub fn writer_from_config(&mut self, config: &BufferConfig) -> ByteWriter<'_> {
        self.writer(config.byte_order)
    }

    /// Compare readable regions only; two empty buffers are equal
    pub fn data_equals(&self, other: &ByteData) -> bool {
        self.data_equals_slice(&other.storage[..other.write_index])
    }

    pub fn data_equals_slice(&self, data: &[u8]) -> bool {
        self.storage[..self.write_index] == *data
    }

    /// Convert the readable region into shared immutable bytes
    pub fn freeze(mut self) -> Bytes {
        self.storage.truncate(self.write_index);
        Bytes::from(self.storage)
    }

    /// `[n]hex` summary of the readable region
    pub fn describe(&self) -> String {
        format!("[{}]{}", self.write_index, self)
    }
}

impl From<Vec<u8>> for ByteData {
    fn from(storage: Vec<u8>) -> Self {
        let write_index = storage.len();
        Self {
            storage,
            write_index,
        }
    }
}

impl fmt::Display for ByteData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.storage[..self.write_index]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_capacity() {
        let data = ByteData::with_capacity(1);
        assert_eq!(data.capacity(), 1);
        assert_eq!(data.write_index(), 0);
        assert_eq!(data.writable_bytes(), 1);
        assert_eq!(data.readable_bytes(), 0);

        let empty = ByteData::new();
        assert_eq!(empty.capacity(), 0);
        assert_eq!(empty.writable_bytes(), 0);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_copy_constructors() {
        let src = [1u8, 2, 3, 4];
        let data = ByteData::copy_of(&src[1..3]);
        assert_eq!(data.capacity(), 2);
        assert_eq!(data.write_index(), 2);
        assert_eq!(data.read(0, None).unwrap(), vec![2, 3]);

        let repeated = ByteData::repeat(1, 3);
        assert_eq!(repeated.buffer(), &[1, 1, 1]);

        let random = ByteData::random(3);
        assert_eq!(random.readable_bytes(), 3);
        assert_eq!(random.writable_bytes(), 0);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_hex_and_base64() {
        assert_eq!(ByteData::from_hex("0123").unwrap().buffer(), &[0x01, 0x23]);
        assert!(matches!(
            ByteData::from_hex("123"),
            Err(KitError::InvalidArgument(_))
        ));
        assert_eq!(
            ByteData::from_base64("AQIDBA==").unwrap().buffer(),
            &[1, 2, 3, 4]
        );
        assert!(ByteData::from_base64("!").is_err());
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_write_index_bounds() {
        let mut data = ByteData::with_capacity(4);
        assert!(matches!(
            data.set_write_index(5),
            Err(KitError::OutOfRange { index: 5, limit: 4 })
        ));
        assert_eq!(data.set_write_index(1).unwrap().write_index(), 1);

        assert!(data.advance_write_index(-2).is_err());
        assert!(data.advance_write_index(4).is_err());
        assert_eq!(data.write_index(), 1);

        match data.advance_write_index(-2) {
            Err(KitError::InvalidArgument(msg)) => {
                assert_eq!(msg, "cannot move write index 1 by -2")
            }
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
        assert!(matches!(
            data.advance_write_index(4),
            Err(KitError::OutOfRange { index: 5, limit: 4 })
        ));

        data.set_write_index(0).unwrap();
        data.advance_write_index(4).unwrap();
        data.advance_write_index(-3).unwrap();
        assert_eq!(data.write_index(), 1);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_advance_clamped() {
        let mut data = ByteData::with_capacity(4);
        data.set_write_index(1).unwrap();
        assert_eq!(data.advance_write_index_clamped(-2).write_index(), 0);
        data.set_write_index(1).unwrap();
        assert_eq!(data.advance_write_index_clamped(5).write_index(), 4);
    }

    #[test]
    fn test_resize_by() {
        let mut data = ByteData::repeat(1, 4);
        data.resize_by(1);
        assert_eq!(data.capacity(), 5);
        assert_eq!(data.writable_bytes(), 1);

        let mut data = ByteData::repeat(1, 4);
        data.resize_by(-1);
        assert_eq!(data.capacity(), 3);
        assert_eq!(data.writable_bytes(), 0);
        assert_eq!(data.readable_bytes(), 3);

        let mut data = ByteData::random(1);
        data.resize_by(-2);
        assert_eq!(data.capacity(), 0);
        assert_eq!(data.write_index(), 0);
    }

    #[test]
    fn test_grow_and_ensure() {
        let mut data = ByteData::random(2);
        data.grow();
        assert_eq!(data.capacity(), 3);
        assert_eq!(data.readable_bytes(), 2);

        let mut empty = ByteData::new();
        empty.grow();
        assert_eq!(empty.capacity(), 1);

        assert_eq!(ByteData::new().ensure_writable(1).writable_bytes(), 1);
        assert_eq!(ByteData::with_capacity(1).ensure_writable(1).writable_bytes(), 1);
        assert_eq!(ByteData::with_capacity(1).ensure_writable(2).writable_bytes(), 2);
    }

    #[test]
    fn test_ensure_writable_never_shrinks() {
        let mut data = ByteData::copy_of(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        data.resize_by(2);

        assert!(matches!(
            data.try_ensure_writable(usize::MAX),
            Err(KitError::Overflow {
                requested: usize::MAX,
                available: 2
            })
        ));
        assert!(data.try_ensure_writable(isize::MAX as usize).is_err());
        assert_eq!(data.capacity(), 12);
        assert_eq!(data.write_index(), 10);
        assert_eq!(data.read_all(), vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);

        assert!(data.try_ensure_writable(1).is_ok());
        assert_eq!(data.capacity(), 12);
        assert!(data.try_ensure_writable(5).is_ok());
        assert_eq!(data.capacity(), 15);
        assert_eq!(data.read_all(), vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn test_ensure_writable_impossible_size_panics() {
        let mut data = ByteData::copy_of(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        data.resize_by(2);
        data.ensure_writable(usize::MAX);
    }

    #[test]
    fn test_zero() {
        let mut data = ByteData::repeat(1, 2);
        data.resize_by(1).zero();
        assert_eq!(data.buffer(), &[0, 0, 0]);
        assert_eq!(data.write_index(), 2);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_read() {
        let data = ByteData::copy_of(&[0, 1, 2]);
        assert_eq!(data.read_at(1).unwrap(), 1);
        assert_eq!(data.read(0, Some(1)).unwrap(), vec![0]);
        assert_eq!(data.read(1, Some(2)).unwrap(), vec![1, 2]);
        assert_eq!(data.read(0, None).unwrap(), vec![0, 1, 2]);
        assert!(data.read(2, Some(0)).unwrap().is_empty());
        assert!(data.read(3, None).unwrap().is_empty());
        assert!(data.read(0, Some(4)).is_err());
        assert!(data.read(3, Some(1)).is_err());
        assert!(data.read(4, None).is_err());
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_read_some() {
        let data = ByteData::copy_of(&[0, 1]);
        assert_eq!(data.read_some(0, 3).unwrap(), vec![0, 1]);
        assert_eq!(data.read_some(1, 3).unwrap(), vec![1]);
        assert!(data.read_some(3, 1).is_err());
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_read_text() {
        let data = ByteData::copy_of("a它".as_bytes());
        assert_eq!(data.read_utf8_string(0, Some(1)).unwrap(), "a");
        assert_eq!(data.read_utf8_string(1, Some(1)).unwrap(), "\u{FFFD}");
        assert_eq!(ByteData::new().read_string(0, None, Charset::Ascii).unwrap(), "");

        let data = ByteData::copy_of(&[0x12, 0x3A]);
        assert_eq!(data.read_hex_lower(0, None).unwrap(), "123a");
        assert_eq!(data.read_hex_upper(1, Some(1)).unwrap(), "3A");
        assert_eq!(
            ByteData::copy_of(&[1, 2, 3, 4]).read_base64(0, None).unwrap(),
            "AQIDBA=="
        );
        assert_eq!(data.to_string(), "123a");
        assert_eq!(data.describe(), "[2]123a");
    }

    #[test]
    fn test_read_into() {
        let mut buf = [0u8; 5];
        assert_eq!(ByteData::new().read_into(0, &mut buf[1..1], 0xF), 0);
        assert_eq!(buf, [0; 5]);

        let data = ByteData::copy_of(&[0x12, 0x34]);
        assert_eq!(data.read_into(0, &mut buf[1..2], 0xF), 0);
        assert_eq!(buf, [0, 0x12, 0, 0, 0]);

        let mut buf = [0u8; 5];
        assert_eq!(data.read_into(0, &mut buf[1..5], 0xF), 2);
        assert_eq!(buf, [0, 0x12, 0x34, 0xF, 0xF]);

        let mut buf = [0u8; 5];
        assert_eq!(data.read_into(1, &mut buf[1..5], 0xF), 3);
        assert_eq!(buf, [0, 0x34, 0xF, 0xF, 0xF]);

        let mut buf = [1u8; 5];
        assert_eq!(data.read_into(1, &mut buf, 1), 4);
        assert_eq!(buf, [0x34, 1, 1, 1, 1]);

        let mut buf = [7u8; 2];
        assert_eq!(data.read_into(5, &mut buf, 0), 2);
        assert_eq!(buf, [0, 0]);
    }

    #[test]
    fn test_writes_grow_exactly() {
        let mut data = ByteData::new();
        data.write_i8(1);
        assert_eq!(data.capacity(), 1);
        data.write_i32(0x1234_5678, Endian::Big);
        data.write_i32(0x1234_5678, Endian::Little);
        assert_eq!(data.capacity(), 9);
        assert_eq!(
            data.read_all(),
            vec![1, 0x12, 0x34, 0x56, 0x78, 0x78, 0x56, 0x34, 0x12]
        );

        let mut data = ByteData::with_capacity(16);
        data.write_i16(-2, Endian::Little)
            .write_i64(1, Endian::Big)
            .write_f32(1.5, Endian::Big)
            .write_f64(0.25, Endian::Little);
        assert_eq!(data.readable_bytes(), 22);
        assert_eq!(data.capacity(), 22);
        assert_eq!(&data.buffer()[..2], &[0xFE, 0xFF]);
    }

    #[test]
    fn test_write_byte_data() {
        let src = ByteData::repeat(0xF, 2);
        let mut data = ByteData::repeat(0xA, 1);
        data.write(&src);
        assert_eq!(data.read_all(), vec![0xA, 0xF, 0xF]);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_fill_with() {
        let mut data = ByteData::with_capacity(8);
        let written = data
            .fill_with(Endian::Little, |w| {
                w.write_u16(0x0102)?;
                w.write_u8(3)?;
                Ok(())
            })
            .unwrap();
        assert_eq!(written, 3);
        assert_eq!(data.read_all(), vec![0x02, 0x01, 3]);

        let failed = data.fill_with(Endian::Big, |w| {
            w.write_u64(0)?;
            Ok(())
        });
        assert!(matches!(failed, Err(KitError::Overflow { .. })));
        assert_eq!(data.write_index(), 3);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_views() {
        let mut data = ByteData::with_capacity(4);
        data.write_bytes(&[1, 2]);
        let mut reader = data.reader(Endian::Big);
        assert_eq!(reader.read_u16().unwrap(), 0x0102);
        assert!(reader.read_u8().is_err());

        let mut writer = data.writer(Endian::Big);
        writer.write_u16(0x0304).unwrap();
        assert_eq!(data.write_index(), 2);
        assert_eq!(data.buffer(), &[1, 2, 3, 4]);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_views_from_config() {
        let config = BufferConfig {
            initial_capacity: 4,
            byte_order: Endian::Little,
        };
        let mut data = ByteData::from_config(&config);
        data.writer_from_config(&config).write_u16(0x0102).unwrap();
        assert_eq!(data.buffer(), &[0x02, 0x01, 0, 0]);

        data.set_write_index(2).unwrap();
        let mut reader = data.reader_from_config(&config);
        assert_eq!(reader.order(), Endian::Little);
        assert_eq!(reader.read_u16().unwrap(), 0x0102);

        let big = BufferConfig::default();
        assert_eq!(data.reader_from_config(&big).read_u16().unwrap(), 0x0201);
    }

    #[test]
    fn test_data_equals() {
        assert!(ByteData::new().data_equals(&ByteData::with_capacity(8)));
        let mut a = ByteData::with_capacity(8);
        a.write_bytes(&[1, 2]);
        assert!(a.data_equals(&ByteData::copy_of(&[1, 2])));
        assert!(!a.data_equals_slice(&[1, 2, 0]));
    }

    #[test]
    fn test_freeze() {
        let mut data = ByteData::with_capacity(8);
        data.write_bytes(b"abc");
        let frozen = data.freeze();
        assert_eq!(&frozen[..], b"abc");
    }
}
