//! Fuzz target for the runtime-info JSON parser.
//!
//! The parser should **never panic**. Malformed input is an error; whatever parses must
//! evaluate without panicking too.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_runtime_info
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 64 * 1024 {
        return;
    }

    if let Ok(info) = fipsguard_app::parse_runtime_info(text) {
        let attributes = info.attributes.unwrap_or_default();
        let algorithms = info.algorithms.unwrap_or_default();
        let _ = fipsguard_domain::evaluate(&attributes, &algorithms);
    }
});
