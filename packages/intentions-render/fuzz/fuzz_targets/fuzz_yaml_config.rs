#![no_main]

use intentions_render::RenderConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(yaml_str) = std::str::from_utf8(data) {
        let _ = RenderConfig::from_yaml_str(yaml_str);
    }
});
