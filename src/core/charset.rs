//! Character sets used to turn buffer contents into text and back.
//!
//! Decoding is always lossy: malformed sequences become U+FFFD rather than errors,
//! so reading a string never fails once the bytes themselves are available.

use encoding_rs::Encoding;

/// Character set for string reads and writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    #[default]
    Utf8,
    /// ISO-8859-1, one byte per code point U+0000..=U+00FF
    Latin1,
    Ascii,
    Utf16Be,
    Utf16Le,
    /// Any other single- or multi-byte encoding known to `encoding_rs`
    Other(&'static Encoding),
}

impl Charset {
    /// Look up a charset by its WHATWG / IANA label (case-insensitive)
    pub fn for_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "iso-8859-1" | "iso8859-1" | "latin1" | "l1" => return Some(Charset::Latin1),
            "ascii" | "us-ascii" => return Some(Charset::Ascii),
            _ => {}
        }
        let encoding = Encoding::for_label(normalized.as_bytes())?;
        Some(Self::from_encoding(encoding))
    }

    fn from_encoding(encoding: &'static Encoding) -> Self {
        if encoding == encoding_rs::UTF_8 {
            Charset::Utf8
        } else if encoding == encoding_rs::UTF_16BE {
            Charset::Utf16Be
        } else if encoding == encoding_rs::UTF_16LE {
            Charset::Utf16Le
        } else {
            Charset::Other(encoding)
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Charset::Utf8 => "UTF-8",
            Charset::Latin1 => "ISO-8859-1",
            Charset::Ascii => "US-ASCII",
            Charset::Utf16Be => "UTF-16BE",
            Charset::Utf16Le => "UTF-16LE",
            Charset::Other(encoding) => encoding.name(),
        }
    }

    /// True for charsets whose code units are two bytes wide
    pub fn is_wide(&self) -> bool {
        matches!(self, Charset::Utf16Be | Charset::Utf16Le)
    }

    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            Charset::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Charset::Latin1 => encoding_rs::mem::decode_latin1(bytes).into_owned(),
            Charset::Ascii => bytes
                .iter()
                .map(|&b| if b.is_ascii() { b as char } else { '\u{FFFD}' })
                .collect(),
            Charset::Utf16Be => encoding_rs::UTF_16BE
                .decode_without_bom_handling(bytes)
                .0
                .into_owned(),
            Charset::Utf16Le => encoding_rs::UTF_16LE
                .decode_without_bom_handling(bytes)
                .0
                .into_owned(),
            Charset::Other(encoding) => encoding.decode_without_bom_handling(bytes).0.into_owned(),
        }
    }

    /// Encode text; characters the charset cannot represent become `?`
    /// (or the encoder's own replacement for `Other`).
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Charset::Utf8 => text.as_bytes().to_vec(),
            Charset::Latin1 => text
                .chars()
                .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
                .collect(),
            Charset::Ascii => text
                .chars()
                .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
                .collect(),
            Charset::Utf16Be => text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
            Charset::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            Charset::Other(encoding) => encoding.encode(text).0.into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin1_is_byte_exact() {
        let raw: Vec<u8> = (0u8..=255).collect();
        let text = Charset::Latin1.decode(&raw);
        assert_eq!(text.chars().count(), 256);
        assert_eq!(Charset::Latin1.encode(&text), raw);
    }

    #[test]
    fn test_ascii_replaces_high_bytes() {
        assert_eq!(Charset::Ascii.decode(&[0x61, 0xE5]), "a\u{FFFD}");
        assert_eq!(Charset::Ascii.encode("a它"), b"a?".to_vec());
    }

    #[test]
    fn test_utf16_roundtrip() {
        let be = Charset::Utf16Be.encode("hi");
        assert_eq!(be, vec![0x00, 0x68, 0x00, 0x69]);
        assert_eq!(Charset::Utf16Be.decode(&be), "hi");

        let le = Charset::Utf16Le.encode("hi");
        assert_eq!(le, vec![0x68, 0x00, 0x69, 0x00]);
        assert_eq!(Charset::Utf16Le.decode(&le), "hi");
    }

    #[test]
    fn test_labels() {
        assert_eq!(Charset::for_label("ISO-8859-1"), Some(Charset::Latin1));
        assert_eq!(Charset::for_label("utf-8"), Some(Charset::Utf8));
        assert_eq!(Charset::for_label("UTF-16LE"), Some(Charset::Utf16Le));
        assert_eq!(
            Charset::for_label("gbk"),
            Some(Charset::Other(encoding_rs::GBK))
        );
        assert_eq!(Charset::for_label("no-such-charset"), None);
    }
}
