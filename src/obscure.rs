//! # Obscured Strings
//!
//! Reversible, self-describing text transformation through a chain of named codecs.
//!
//! ## Format
//! ```text
//! [<prefix><name1>,<prefix><name2>,... ]<body>
//! ```
//! The optional header lists the applied codecs in encode order and is separated from
//! the body by exactly one space. The body is the transformed UTF-8 bytes rendered by
//! the string codec (base64 unless configured otherwise). No header means no codec ran.
//!
//! ## Codec Order
//! Registered codecs are kept sorted by name, and that order is the default encode
//! order. A [`CodecSelector`] may pick a different subset or order per input; parsing
//! never consults a selector and simply follows the header.
//!
//! ## Example
//! ```rust
//! use bytekit::obscure::Obscurer;
//!
//! let obscurer = Obscurer::builder().build()?;
//! let hidden = obscurer.obscure("hello world")?;
//! assert!(hidden.starts_with("+gz "));
//! assert_eq!(obscurer.parse(&hidden)?, "hello world");
//! # Ok::<(), bytekit::error::KitError>(())
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::codec::text::string_codec_for;
use crate::codec::{Base64Codec, Codec, CompressionCodec, CompressionKind, StringCodec};
use crate::config::{ObscurerConfig, DEFAULT_FLAG_PREFIX};
use crate::error::{constants, KitError, Result};

const HEADER_END: char = ' ';
const FLAG_SEPARATOR: char = ',';

/// Chooses which codecs run, and in what order, for a given input
pub trait CodecSelector {
    fn select(&self, text: &str, available: &[Arc<dyn Codec>]) -> Vec<Arc<dyn Codec>>;
}

impl<F> CodecSelector for F
where
    F: Fn(&str, &[Arc<dyn Codec>]) -> Vec<Arc<dyn Codec>>,
{
    fn select(&self, text: &str, available: &[Arc<dyn Codec>]) -> Vec<Arc<dyn Codec>> {
        self(text, available)
    }
}

/// Every registered codec, in registry order
#[derive(Debug, Clone, Copy, Default)]
pub struct AllCodecs;

impl CodecSelector for AllCodecs {
    fn select(&self, _text: &str, available: &[Arc<dyn Codec>]) -> Vec<Arc<dyn Codec>> {
        available.to_vec()
    }
}

/// Skips compressing codecs for texts shorter than `min_len` bytes
#[derive(Debug, Clone, Copy)]
pub struct MinLength(pub usize);

impl CodecSelector for MinLength {
    fn select(&self, text: &str, available: &[Arc<dyn Codec>]) -> Vec<Arc<dyn Codec>> {
        available
            .iter()
            .filter(|codec| !codec.compresses() || text.len() >= self.0)
            .cloned()
            .collect()
    }
}

/// Registry of named codecs plus the header and body format
pub struct Obscurer {
    flag_prefix: String,
    string_codec: Box<dyn StringCodec>,
    codecs: BTreeMap<String, Arc<dyn Codec>>,
}

impl fmt::Debug for Obscurer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Obscurer")
            .field("flag_prefix", &self.flag_prefix)
            .field("string_codec", &self.string_codec.name())
            .field("codecs", &self.codec_names())
            .finish()
    }
}

impl Obscurer {
    /// Builder with prefix `+` and a base64 body.
    ///
    /// Unless codecs are added through [`ObscurerBuilder::codec`] or
    /// [`ObscurerBuilder::codecs`], the built obscurer registers gzip under `"gz"`.
    /// Pass `codecs(Vec::new())` for an empty registry.
    ///
    /// ```
    /// use bytekit::Obscurer;
    ///
    /// let obscurer = Obscurer::builder().build()?;
    /// assert_eq!(obscurer.codec_names(), vec!["gz"]);
    ///
    /// let bare = Obscurer::builder().codecs(Vec::new()).build()?;
    /// assert!(bare.codec_names().is_empty());
    /// # Ok::<(), bytekit::KitError>(())
    /// ```
    pub fn builder() -> ObscurerBuilder {
        ObscurerBuilder::default()
    }

    /// Obscurer with the default prefix and body encoding over `codecs`
    pub fn with_codecs(codecs: Vec<Arc<dyn Codec>>) -> Result<Self> {
        Self::builder().codecs(codecs).build()
    }

    /// Obscurer described by configuration
    ///
    /// # Errors
    /// Returns `KitError::ConfigError` for unknown string codec or codec names
    pub fn from_config(config: &ObscurerConfig) -> Result<Self> {
        let string_codec = string_codec_for(&config.string_codec).ok_or_else(|| {
            KitError::ConfigError(format!("Unknown string codec: {}", config.string_codec))
        })?;
        let mut builder = Self::builder()
            .flag_prefix(&config.flag_prefix)
            .boxed_string_codec(string_codec);
        for name in &config.codecs {
            let kind = CompressionKind::from_name(name)
                .ok_or_else(|| KitError::ConfigError(format!("Unknown codec: {name}")))?;
            builder = builder.codec(CompressionCodec::with_level(kind, config.compression_level));
        }
        builder.build()
    }

    pub fn flag_prefix(&self) -> &str {
        &self.flag_prefix
    }

    /// Registered codec names in default encode order
    pub fn codec_names(&self) -> Vec<&str> {
        self.codecs.keys().map(String::as_str).collect()
    }

    /// Obscure with every registered codec
    pub fn obscure(&self, text: &str) -> Result<String> {
        self.obscure_with(text, &AllCodecs)
    }

    /// Obscure with the codecs `selector` picks for `text`
    #[instrument(skip_all, fields(len = text.len()))]
    pub fn obscure_with(&self, text: &str, selector: &dyn CodecSelector) -> Result<String> {
        let available: Vec<Arc<dyn Codec>> = self.codecs.values().cloned().collect();
        let chosen = selector.select(text, &available);

        let mut data = text.as_bytes().to_vec();
        for codec in &chosen {
            data = codec.encode(&data)?;
        }

        let mut out = String::new();
        for (i, codec) in chosen.iter().enumerate() {
            if i > 0 {
                out.push(FLAG_SEPARATOR);
            }
            out.push_str(&self.flag_prefix);
            out.push_str(codec.name());
        }
        if !chosen.is_empty() {
            out.push(HEADER_END);
        }
        out.push_str(&self.string_codec.encode(&data));

        debug!(codecs = chosen.len(), output = out.len(), "obscured text");
        Ok(out)
    }

    /// Reverse [`Obscurer::obscure`], following the codecs named in the header
    ///
    /// # Errors
    /// - `KitError::MissingCodec` if the header names an unregistered codec
    /// - `KitError::DecodeFailure` if the body or any codec step cannot be decoded,
    ///   or the result is not UTF-8
    #[instrument(skip_all, fields(len = input.len()))]
    pub fn parse(&self, input: &str) -> Result<String> {
        let (flags, body) = input.split_once(HEADER_END).unwrap_or(("", input));

        let mut chain = Vec::new();
        for token in flags.split(FLAG_SEPARATOR).filter(|t| !t.is_empty()) {
            let name = token.strip_prefix(self.flag_prefix.as_str()).unwrap_or(token);
            match self.codecs.get(name) {
                Some(codec) => chain.push(codec),
                None => {
                    warn!(codec = name, "header names an unregistered codec");
                    return Err(KitError::MissingCodec(name.to_string()));
                }
            }
        }

        let mut data = self.string_codec.decode(body)?;
        for codec in chain.iter().rev() {
            data = codec.decode(&data)?;
        }

        debug!(codecs = chain.len(), output = data.len(), "parsed obscured text");
        String::from_utf8(data)
            .map_err(|_| KitError::decode(self.string_codec.name(), constants::ERR_NOT_UTF8))
    }
}

/// Builder for [`Obscurer`]
///
/// Defaults: prefix `+`, base64 body, and a single gzip codec unless codecs are given.
pub struct ObscurerBuilder {
    flag_prefix: String,
    string_codec: Box<dyn StringCodec>,
    codecs: Option<Vec<Arc<dyn Codec>>>,
}

impl Default for ObscurerBuilder {
    fn default() -> Self {
        Self {
            flag_prefix: String::from(DEFAULT_FLAG_PREFIX),
            string_codec: Box::new(Base64Codec),
            codecs: None,
        }
    }
}

impl ObscurerBuilder {
    pub fn flag_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.flag_prefix = prefix.into();
        self
    }

    pub fn string_codec<S: StringCodec + 'static>(self, codec: S) -> Self {
        self.boxed_string_codec(Box::new(codec))
    }

    pub fn boxed_string_codec(mut self, codec: Box<dyn StringCodec>) -> Self {
        self.string_codec = codec;
        self
    }

    /// Register one codec. A later codec with the same name replaces an earlier one.
    pub fn codec<C: Codec + 'static>(mut self, codec: C) -> Self {
        self.codecs.get_or_insert_with(Vec::new).push(Arc::new(codec));
        self
    }

    /// Register several codecs; an empty list yields an obscurer that only applies
    /// the string codec
    pub fn codecs(mut self, codecs: Vec<Arc<dyn Codec>>) -> Self {
        self.codecs.get_or_insert_with(Vec::new).extend(codecs);
        self
    }

    /// # Errors
    /// Returns `KitError::InvalidArgument` if the prefix or any codec name contains
    /// `,` or ` `, or a codec name is empty
    pub fn build(self) -> Result<Obscurer> {
        if self.flag_prefix.contains([FLAG_SEPARATOR, HEADER_END]) {
            return Err(KitError::InvalidArgument(format!(
                "flag prefix '{}' {}",
                self.flag_prefix,
                constants::ERR_RESERVED_CHAR
            )));
        }

        let codecs = self
            .codecs
            .unwrap_or_else(|| vec![Arc::new(CompressionCodec::gzip())]);

        let mut registry = BTreeMap::new();
        for codec in codecs {
            let name = codec.name();
            if name.is_empty() {
                return Err(KitError::InvalidArgument(
                    constants::ERR_EMPTY_CODEC_NAME.to_string(),
                ));
            }
            if name.contains([FLAG_SEPARATOR, HEADER_END]) {
                return Err(KitError::InvalidArgument(format!(
                    "codec name '{name}' {}",
                    constants::ERR_RESERVED_CHAR
                )));
            }
            registry.insert(name.to_string(), codec);
        }

        Ok(Obscurer {
            flag_prefix: self.flag_prefix,
            string_codec: self.string_codec,
            codecs: registry,
        })
    }
}
