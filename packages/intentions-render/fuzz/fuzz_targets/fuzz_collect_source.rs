#![no_main]

use intentions_render::features::parsing::TreeSitterParser;
use intentions_render::{collect_source, RenderConfig, Report};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to string (may be invalid UTF-8)
    if let Ok(source) = std::str::from_utf8(data) {
        // Errors are fine, panics are not
        let mut report = Report::new();
        let _ = collect_source(
            &mut report,
            &TreeSitterParser::python(),
            source,
            "test_fuzz.py",
            &RenderConfig::default(),
        );
    }
});
