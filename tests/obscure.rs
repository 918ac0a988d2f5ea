//! Integration tests for the obscured string format

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod common;

use std::sync::Arc;
use std::thread;

use bytekit::codec::{Codec, CompressionCodec, HexCodec};
use bytekit::config::KitConfig;
use bytekit::error::KitError;
use bytekit::obscure::{MinLength, Obscurer};

fn all_compressors() -> Obscurer {
    Obscurer::builder()
        .codec(CompressionCodec::zstd())
        .codec(CompressionCodec::gzip())
        .codec(CompressionCodec::lz4())
        .build()
        .expect("valid codecs")
}

#[test]
fn test_default_obscurer_roundtrip() {
    common::init_test_logging();
    let obscurer = Obscurer::builder().build().unwrap();
    let text = common::sample_text(300);
    let hidden = obscurer.obscure(&text).unwrap();
    assert!(hidden.starts_with("+gz "));
    assert!(hidden.len() < text.len());
    assert_eq!(obscurer.parse(&hidden).unwrap(), text);
}

#[test]
fn test_chain_runs_in_name_order() {
    common::init_test_logging();
    let obscurer = all_compressors();
    assert_eq!(obscurer.codec_names(), vec!["gz", "lz4", "zstd"]);

    let text = "ünïcödé and emoji 🦀 survive the chain";
    let hidden = obscurer.obscure(text).unwrap();
    let (header, _) = hidden.split_once(' ').unwrap();
    assert_eq!(header, "+gz,+lz4,+zstd");
    assert_eq!(obscurer.parse(&hidden).unwrap(), text);
}

#[test]
fn test_parse_follows_header_not_registry_order() {
    let obscurer = all_compressors();
    let zstd_then_gz = |_: &str, available: &[Arc<dyn Codec>]| -> Vec<Arc<dyn Codec>> {
        let pick = |name: &str| {
            available
                .iter()
                .find(|c| c.name() == name)
                .cloned()
                .expect("registered")
        };
        vec![pick("zstd"), pick("gz")]
    };
    let hidden = obscurer
        .obscure_with("selected order", &zstd_then_gz)
        .unwrap();
    assert!(hidden.starts_with("+zstd,+gz "));
    assert_eq!(obscurer.parse(&hidden).unwrap(), "selected order");
}

#[test]
fn test_min_length_skips_short_texts() {
    let obscurer = all_compressors();
    let short = obscurer.obscure_with("tiny", &MinLength(32)).unwrap();
    assert_eq!(short, "dGlueQ==");
    assert_eq!(obscurer.parse(&short).unwrap(), "tiny");

    let long = common::sample_text(64);
    let hidden = obscurer.obscure_with(&long, &MinLength(32)).unwrap();
    assert!(hidden.starts_with("+gz,+lz4,+zstd "));
}

#[test]
fn test_parse_errors() {
    common::init_test_logging();
    let obscurer = Obscurer::builder().build().unwrap();

    assert_eq!(
        obscurer.parse("+lz4 AAAA"),
        Err(KitError::MissingCodec("lz4".into()))
    );
    assert!(matches!(
        obscurer.parse("+gz not*base64"),
        Err(KitError::DecodeFailure { .. })
    ));
    // valid base64, but not a gzip stream
    assert!(matches!(
        obscurer.parse("+gz YWJj"),
        Err(KitError::DecodeFailure { codec, .. }) if codec == "gz"
    ));
}

#[test]
fn test_header_without_prefix_is_accepted() {
    let obscurer = Obscurer::builder().build().unwrap();
    let hidden = obscurer.obscure("prefixless").unwrap();
    let stripped = hidden.trim_start_matches('+');
    assert_eq!(obscurer.parse(stripped).unwrap(), "prefixless");
}

#[test]
fn test_hex_body() {
    let obscurer = Obscurer::builder()
        .string_codec(HexCodec)
        .codecs(Vec::new())
        .build()
        .unwrap();
    assert_eq!(obscurer.obscure("AB").unwrap(), "4142");
    assert_eq!(obscurer.parse("4142").unwrap(), "AB");
}

#[test]
fn test_from_default_config() {
    let config = KitConfig::default();
    let obscurer = Obscurer::from_config(&config.obscurer).unwrap();
    assert_eq!(obscurer.flag_prefix(), "+");
    assert_eq!(obscurer.codec_names(), vec!["gz"]);
}

#[test]
fn test_shared_across_threads() {
    let obscurer = Arc::new(all_compressors());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let obscurer = Arc::clone(&obscurer);
            thread::spawn(move || {
                let text = format!("{i}: {}", common::sample_text(100 + i));
                let hidden = obscurer.obscure(&text).unwrap();
                assert_eq!(obscurer.parse(&hidden).unwrap(), text);
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker panicked");
    }
}
