//! # Configuration Management
//!
//! Centralized configuration for buffers, padding and the obscurer.
//!
//! ## Configuration Sources
//! - TOML files via [`KitConfig::from_file`]
//! - TOML strings via [`KitConfig::from_toml`]
//! - Environment variables via [`KitConfig::from_env`] (`BYTEKIT_*`)
//! - Direct instantiation with defaults
//!
//! ## Example
//! ```toml
//! [obscurer]
//! flag_prefix = "+"
//! string_codec = "base64"
//! codecs = ["gz"]
//! compression_level = 6
//!
//! [padding]
//! block_size = 16
//!
//! [buffer]
//! initial_capacity = 256
//! byte_order = "big"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::codec::compression::DEFAULT_LEVEL;
use crate::codec::text::string_codec_for;
use crate::codec::CompressionKind;
use crate::core::Endian;
use crate::error::{KitError, Result};

/// Flag prefix used in obscured headers by default
pub const DEFAULT_FLAG_PREFIX: &str = "+";

/// Default PKCS7 block size (AES block)
pub const DEFAULT_BLOCK_SIZE: usize = 16;

/// Default starting capacity for configured buffers
pub const DEFAULT_INITIAL_CAPACITY: usize = 256;

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct KitConfig {
    #[serde(default)]
    pub obscurer: ObscurerConfig,

    #[serde(default)]
    pub padding: PaddingConfig,

    #[serde(default)]
    pub buffer: BufferConfig,
}

impl KitConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| KitError::ConfigError(format!("Failed to read config file: {e}")))?;
        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| KitError::ConfigError(format!("Failed to parse TOML: {e}")))
    }

    /// Defaults overridden by `BYTEKIT_*` environment variables
    ///
    /// # Errors
    /// Returns `KitError::ConfigError` when a variable is set but cannot be parsed
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `BYTEKIT_*` key
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(prefix) = lookup("BYTEKIT_FLAG_PREFIX") {
            config.obscurer.flag_prefix = prefix;
        }

        if let Some(codecs) = lookup("BYTEKIT_CODECS") {
            config.obscurer.codecs = codecs
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(String::from)
                .collect();
        }

        if let Some(codec) = lookup("BYTEKIT_STRING_CODEC") {
            config.obscurer.string_codec = codec;
        }

        if let Some(size) = lookup("BYTEKIT_BLOCK_SIZE") {
            config.padding.block_size = parse_var("BYTEKIT_BLOCK_SIZE", &size)?;
        }

        if let Some(capacity) = lookup("BYTEKIT_INITIAL_CAPACITY") {
            config.buffer.initial_capacity = parse_var("BYTEKIT_INITIAL_CAPACITY", &capacity)?;
        }

        if let Some(order) = lookup("BYTEKIT_BYTE_ORDER") {
            config.buffer.byte_order = match order.to_ascii_lowercase().as_str() {
                "big" => Endian::Big,
                "little" => Endian::Little,
                "native" => Endian::native(),
                _ => {
                    return Err(KitError::ConfigError(format!(
                        "BYTEKIT_BYTE_ORDER: expected big, little or native, got '{order}'"
                    )))
                }
            };
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| KitError::ConfigError(format!("Failed to serialize config: {e}")))?;

        fs::write(path, content)
            .map_err(|e| KitError::ConfigError(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Validate the configuration
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(self.obscurer.validate());
        errors.extend(self.padding.validate());
        errors.extend(self.buffer.validate());
        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(KitError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

fn parse_var(key: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|e| KitError::ConfigError(format!("{key}: '{value}' is not a number ({e})")))
}

/// Obscurer configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ObscurerConfig {
    /// Prefix put before each codec name in the header
    pub flag_prefix: String,

    /// Body encoding: "base64" or "hex"
    pub string_codec: String,

    /// Compression codecs to register, by name ("gz", "lz4", "zstd")
    pub codecs: Vec<String>,

    /// Compression level for the registered codecs
    #[serde(default = "default_level")]
    pub compression_level: i32,
}

fn default_level() -> i32 {
    DEFAULT_LEVEL
}

impl Default for ObscurerConfig {
    fn default() -> Self {
        Self {
            flag_prefix: String::from(DEFAULT_FLAG_PREFIX),
            string_codec: String::from("base64"),
            codecs: vec![String::from("gz")],
            compression_level: DEFAULT_LEVEL,
        }
    }
}

impl ObscurerConfig {
    /// Validate obscurer configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.flag_prefix.contains([',', ' ']) {
            errors.push(format!(
                "Flag prefix '{}' must not contain ',' or ' '",
                self.flag_prefix
            ));
        }

        if string_codec_for(&self.string_codec).is_none() {
            errors.push(format!(
                "Unknown string codec: '{}' (expected 'base64' or 'hex')",
                self.string_codec
            ));
        }

        for name in &self.codecs {
            if CompressionKind::from_name(name).is_none() {
                errors.push(format!(
                    "Unknown codec: '{name}' (expected 'gz', 'lz4' or 'zstd')"
                ));
            }
        }

        let mut seen = std::collections::HashSet::new();
        for name in &self.codecs {
            if let Some(kind) = CompressionKind::from_name(name) {
                if !seen.insert(kind) {
                    errors.push(format!("Codec '{name}' is listed more than once"));
                }
            }
        }

        if self.compression_level < 1 || self.compression_level > 22 {
            errors.push(format!(
                "Invalid compression level: {} (valid range: 1-22)",
                self.compression_level
            ));
        }

        errors
    }
}

/// Padding configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PaddingConfig {
    /// PKCS7 block size in bytes
    pub block_size: usize,
}

impl Default for PaddingConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

impl PaddingConfig {
    /// Validate padding configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.block_size == 0 || self.block_size > 255 {
            errors.push(format!(
                "Invalid block size: {} (valid range: 1-255)",
                self.block_size
            ));
        }
        errors
    }
}

/// Buffer configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct BufferConfig {
    /// Capacity of buffers created from this configuration
    pub initial_capacity: usize,

    /// Byte order used by `ByteData::reader_from_config` and `ByteData::writer_from_config`
    #[serde(default)]
    pub byte_order: Endian,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            byte_order: Endian::Big,
        }
    }
}

impl BufferConfig {
    /// Validate buffer configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.initial_capacity > crate::codec::compression::MAX_DECOMPRESSION_SIZE {
            errors.push(format!(
                "Initial capacity too large: {} bytes (maximum: 16 MB)",
                self.initial_capacity
            ));
        }
        errors
    }
}
