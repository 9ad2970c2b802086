#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz line normalization.
///
/// Any entry produced must normalize to itself.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut invalid = Vec::new();
        if let Some(entry) = adstxt_merge::parsers::normalize(s, "fuzz", &mut invalid) {
            let mut again = Vec::new();
            let second = adstxt_merge::parsers::normalize(entry.as_str(), "fuzz", &mut again);
            assert_eq!(second.as_ref(), Some(&entry));
        }
    }
});
