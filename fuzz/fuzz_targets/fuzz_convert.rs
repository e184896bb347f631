#![no_main]

use libfuzzer_sys::fuzz_target;

// Accepts arbitrary bytes, attempts to read them as UTF-8 SDL, feeds to convert().
// Goal: no panics, even on malformed input or deeply nested list types.
fuzz_target!(|data: &[u8]| {
    if let Ok(sdl) = std::str::from_utf8(data) {
        if let Ok(schema) = graphql2sadl_core::convert(sdl, &Default::default()) {
            let _ = graphql2sadl_core::decompile(&schema);
        }
    }
});
