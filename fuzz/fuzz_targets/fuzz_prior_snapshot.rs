#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the previous-output reader with arbitrary documents.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let snapshot = adstxt_merge::parsers::PriorSnapshot::parse(s);
        let _ = snapshot.networks().count();
    }
});
