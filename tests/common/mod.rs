//! Shared helpers for integration tests

#![allow(dead_code)]

use std::sync::Once;

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

/// Route library tracing output to the test writer.
///
/// Honors `RUST_LOG`, defaulting to `bytekit=debug`. The first call wins.
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bytekit=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_ansi(false)
            .try_init();
    });
}

/// Deterministic, mildly compressible text of `len` bytes
pub fn sample_text(len: usize) -> String {
    "the quick brown fox jumps over the lazy dog "
        .chars()
        .cycle()
        .take(len)
        .collect()
}
