//! Fuzz target for image file name parsing and captioning.
//!
//! A name that parses must either caption or fail with an unknown scenario
//! code; nothing may panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sensorcap::caption::caption_for;
use sensorcap::filename::{parse_image_filename, ParsedName};

fuzz_target!(|data: &[u8]| {
    let Ok(name) = std::str::from_utf8(data) else {
        return;
    };

    if let ParsedName::Matched(codes) = parse_image_filename(name) {
        let _ = caption_for(&codes);
    }
});
