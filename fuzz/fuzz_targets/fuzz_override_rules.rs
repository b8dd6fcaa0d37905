#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use lightbox::application::OverrideRules;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(rules) = OverrideRules::parse(content, Path::new("rules.json")) {
            // Matching against arbitrary exported lines must not panic either
            let lines: Vec<String> = content.lines().map(str::to_string).collect();
            let _ = rules.apply(lines);
        }
    }
});
