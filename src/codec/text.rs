//! Text codecs for obscured bodies.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::codec::StringCodec;
use crate::error::{KitError, Result};

/// Standard-alphabet base64 with padding
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Codec;

impl StringCodec for Base64Codec {
    fn name(&self) -> &str {
        "base64"
    }

    fn encode(&self, data: &[u8]) -> String {
        STANDARD.encode(data)
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>> {
        STANDARD
            .decode(text)
            .map_err(|e| KitError::decode(self.name(), e.to_string()))
    }
}

/// Lowercase hex; decoding accepts either case
#[derive(Debug, Clone, Copy, Default)]
pub struct HexCodec;

impl StringCodec for HexCodec {
    fn name(&self) -> &str {
        "hex"
    }

    fn encode(&self, data: &[u8]) -> String {
        hex::encode(data)
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>> {
        hex::decode(text).map_err(|e| KitError::decode(self.name(), e.to_string()))
    }
}

/// Look up a string codec by name
pub fn string_codec_for(name: &str) -> Option<Box<dyn StringCodec>> {
    match name {
        "base64" => Some(Box::new(Base64Codec)),
        "hex" => Some(Box::new(HexCodec)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_base64() {
        assert_eq!(Base64Codec.encode(&[1, 2, 3, 4]), "AQIDBA==");
        assert_eq!(Base64Codec.decode("AQIDBA==").unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(Base64Codec.encode(&[]), "");
        assert!(matches!(
            Base64Codec.decode("not base64!"),
            Err(KitError::DecodeFailure { .. })
        ));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_hex() {
        assert_eq!(HexCodec.encode(&[0xAB, 0x01]), "ab01");
        assert_eq!(HexCodec.decode("AB01").unwrap(), vec![0xAB, 0x01]);
        assert!(HexCodec.decode("abc").is_err());
    }

    #[test]
    fn test_lookup() {
        assert_eq!(string_codec_for("hex").map(|c| c.name().to_string()), Some("hex".into()));
        assert!(string_codec_for("rot13").is_none());
    }
}
