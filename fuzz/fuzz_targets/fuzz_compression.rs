#![no_main]

use bytekit::codec::{compress, decompress, CompressionKind};
use libfuzzer_sys::fuzz_target;

const KINDS: [CompressionKind; 3] = [
    CompressionKind::Gzip,
    CompressionKind::Lz4,
    CompressionKind::Zstd,
];

fuzz_target!(|data: &[u8]| {
    for kind in KINDS {
        // Roundtrip must hold for any input
        if let Ok(compressed) = compress(data, kind, 1) {
            let restored = decompress(&compressed, kind);
            assert_eq!(restored.as_deref().ok(), Some(data));
        }

        // Raw decompression of malformed data must fail cleanly within the size limit
        let _ = decompress(data, kind);
    }
});
