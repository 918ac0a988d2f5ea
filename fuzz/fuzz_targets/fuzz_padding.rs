#![no_main]

use bytekit::core::{apply_padding, drop_padding, padding_size, ByteData, ByteReader};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Validation of arbitrary trailing bytes
    if let Ok(count) = padding_size(data) {
        assert!(count >= 1 && count <= data.len());
    }

    let Some((&block, rest)) = data.split_first() else {
        return;
    };
    if let Ok(padded) = apply_padding(rest, usize::from(block)) {
        let mut buf = ByteData::copy_of(&padded);
        assert!(drop_padding(&mut buf).is_ok());
        assert!(buf.data_equals_slice(rest));
    }

    // Typed reads over arbitrary bytes never panic
    let mut reader = ByteReader::new(rest);
    while reader.read_u32().is_ok() {}
    let _ = reader.read_wide_string(reader.readable_bytes(), bytekit::Charset::Utf16Be, true);
});
