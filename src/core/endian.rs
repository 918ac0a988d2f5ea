//! Byte order selection for fixed-width numeric reads and writes.

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use serde::{Deserialize, Serialize};

/// Byte order of multi-byte numeric values
///
/// Defaults to big-endian (network order) when unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endian {
    #[default]
    Big,
    Little,
}

impl Endian {
    /// Byte order of the host platform
    pub fn native() -> Self {
        if cfg!(target_endian = "little") {
            Endian::Little
        } else {
            Endian::Big
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Endian::Big => "big",
            Endian::Little => "little",
        }
    }

    // Slices passed to the helpers below are always exactly the value width;
    // callers check bounds first.

    pub(crate) fn read_u16(self, buf: &[u8]) -> u16 {
        match self {
            Endian::Big => BigEndian::read_u16(buf),
            Endian::Little => LittleEndian::read_u16(buf),
        }
    }

    pub(crate) fn read_u32(self, buf: &[u8]) -> u32 {
        match self {
            Endian::Big => BigEndian::read_u32(buf),
            Endian::Little => LittleEndian::read_u32(buf),
        }
    }

    pub(crate) fn read_u64(self, buf: &[u8]) -> u64 {
        match self {
            Endian::Big => BigEndian::read_u64(buf),
            Endian::Little => LittleEndian::read_u64(buf),
        }
    }

    pub(crate) fn read_f32(self, buf: &[u8]) -> f32 {
        match self {
            Endian::Big => BigEndian::read_f32(buf),
            Endian::Little => LittleEndian::read_f32(buf),
        }
    }

    pub(crate) fn read_f64(self, buf: &[u8]) -> f64 {
        match self {
            Endian::Big => BigEndian::read_f64(buf),
            Endian::Little => LittleEndian::read_f64(buf),
        }
    }

    pub(crate) fn write_u16(self, buf: &mut [u8], value: u16) {
        match self {
            Endian::Big => BigEndian::write_u16(buf, value),
            Endian::Little => LittleEndian::write_u16(buf, value),
        }
    }

    pub(crate) fn write_u32(self, buf: &mut [u8], value: u32) {
        match self {
            Endian::Big => BigEndian::write_u32(buf, value),
            Endian::Little => LittleEndian::write_u32(buf, value),
        }
    }

    pub(crate) fn write_u64(self, buf: &mut [u8], value: u64) {
        match self {
            Endian::Big => BigEndian::write_u64(buf, value),
            Endian::Little => LittleEndian::write_u64(buf, value),
        }
    }

    pub(crate) fn write_f32(self, buf: &mut [u8], value: f32) {
        match self {
            Endian::Big => BigEndian::write_f32(buf, value),
            Endian::Little => LittleEndian::write_f32(buf, value),
        }
    }

    pub(crate) fn write_f64(self, buf: &mut [u8], value: f64) {
        match self {
            Endian::Big => BigEndian::write_f64(buf, value),
            Endian::Little => LittleEndian::write_f64(buf, value),
        }
    }
}
