//! Compression codecs with a bounded decompression output.

use std::io::{Read, Write};

use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use tracing::debug;

use crate::codec::Codec;
use crate::error::{constants, KitError, Result};

/// Maximum output size for decompression (prevents decompression bombs)
pub const MAX_DECOMPRESSION_SIZE: usize = 16 * 1024 * 1024;

/// Compression level used when none is configured
pub const DEFAULT_LEVEL: i32 = 6;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CompressionKind {
    Gzip,
    Lz4,
    Zstd,
}

impl CompressionKind {
    /// Codec name written into obscured headers
    pub fn name(self) -> &'static str {
        match self {
            CompressionKind::Gzip => "gz",
            CompressionKind::Lz4 => "lz4",
            CompressionKind::Zstd => "zstd",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "gz" | "gzip" => Some(CompressionKind::Gzip),
            "lz4" => Some(CompressionKind::Lz4),
            "zstd" => Some(CompressionKind::Zstd),
            _ => None,
        }
    }
}

/// Compresses data with the given algorithm and level.
///
/// The level is clamped to what the algorithm accepts; lz4 ignores it.
///
/// # Errors
/// Returns `KitError::InvalidArgument` if the encoder fails
pub fn compress(data: &[u8], kind: CompressionKind, level: i32) -> Result<Vec<u8>> {
    let failed = |e: std::io::Error| KitError::InvalidArgument(format!("{}: {e}", kind.name()));
    match kind {
        CompressionKind::Gzip => {
            let level = Compression::new(level.clamp(0, 9) as u32);
            let mut enc = GzEncoder::new(Vec::with_capacity(data.len() / 2 + 32), level);
            enc.write_all(data).map_err(failed)?;
            enc.finish().map_err(failed)
        }
        CompressionKind::Lz4 => Ok(lz4_flex::compress_prepend_size(data)),
        CompressionKind::Zstd => {
            let mut out = Vec::new();
            zstd::stream::copy_encode(data, &mut out, level.clamp(1, 22)).map_err(failed)?;
            Ok(out)
        }
    }
}

/// Read a decoder to the end, failing once the output passes the limit
fn read_bounded(mut reader: impl Read, codec: &str) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut buffer = [0u8; 8192];
    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => {
                out.extend_from_slice(&buffer[..n]);
                if out.len() > MAX_DECOMPRESSION_SIZE {
                    return Err(KitError::decode(codec, constants::ERR_OUTPUT_LIMIT));
                }
            }
            Err(e) => return Err(KitError::decode(codec, e.to_string())),
        }
    }
    Ok(out)
}

/// Decompresses data that was compressed with the specified algorithm
///
/// Output is capped at [`MAX_DECOMPRESSION_SIZE`].
///
/// # Errors
/// Returns `KitError::DecodeFailure` if:
/// - Decompression fails
/// - Output size exceeds MAX_DECOMPRESSION_SIZE
pub fn decompress(data: &[u8], kind: CompressionKind) -> Result<Vec<u8>> {
    let codec = kind.name();
    match kind {
        CompressionKind::Gzip => read_bounded(GzDecoder::new(data), codec),
        CompressionKind::Lz4 => {
            // lz4_flex prepends the uncompressed size as 4 little-endian bytes;
            // check it before the decoder allocates
            let Some(header) = data.get(..4) else {
                return Err(KitError::decode(codec, constants::ERR_TRUNCATED_INPUT));
            };
            let claimed_size =
                u32::from_le_bytes([header[0], header[1], header[2], header[3]]) as usize;
            if claimed_size > MAX_DECOMPRESSION_SIZE {
                return Err(KitError::decode(codec, constants::ERR_OUTPUT_LIMIT));
            }
            lz4_flex::decompress_size_prepended(data)
                .map_err(|e| KitError::decode(codec, e.to_string()))
        }
        CompressionKind::Zstd => {
            let reader = zstd::stream::Decoder::new(data)
                .map_err(|e| KitError::decode(codec, e.to_string()))?;
            read_bounded(reader, codec)
        }
    }
}

/// [`Codec`] backed by one compression algorithm
#[derive(Debug, Clone)]
pub struct CompressionCodec {
    kind: CompressionKind,
    level: i32,
}

impl CompressionCodec {
    pub fn new(kind: CompressionKind) -> Self {
        Self::with_level(kind, DEFAULT_LEVEL)
    }

    pub fn with_level(kind: CompressionKind, level: i32) -> Self {
        Self { kind, level }
    }

    pub fn gzip() -> Self {
        Self::new(CompressionKind::Gzip)
    }

    pub fn lz4() -> Self {
        Self::new(CompressionKind::Lz4)
    }

    pub fn zstd() -> Self {
        Self::new(CompressionKind::Zstd)
    }

    pub fn kind(&self) -> CompressionKind {
        self.kind
    }
}

impl Codec for CompressionCodec {
    fn name(&self) -> &str {
        self.kind.name()
    }

    fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let out = compress(data, self.kind, self.level)?;
        debug!(codec = self.name(), input = data.len(), output = out.len(), "compressed");
        Ok(out)
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        decompress(data, self.kind)
    }

    fn compresses(&self) -> bool {
        true
    }
}
