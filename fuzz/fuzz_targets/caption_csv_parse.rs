//! Fuzz target for caption table CSV parsing.
//!
//! This fuzzer feeds arbitrary byte sequences to the caption CSV reader,
//! checking for panics, crashes, or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sensorcap::dataset::io_caption_csv::from_caption_csv_slice;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let _ = from_caption_csv_slice(data);
});
