#![no_main]

use bytekit::obscure::Obscurer;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(obscurer) = Obscurer::builder().build() else {
        return;
    };

    if let Ok(text) = std::str::from_utf8(data) {
        // Arbitrary input must never panic
        let _ = obscurer.parse(text);

        if let Ok(hidden) = obscurer.obscure(text) {
            assert_eq!(obscurer.parse(&hidden).ok().as_deref(), Some(text));
        }
    }
});
