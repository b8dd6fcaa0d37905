#![no_main]

use libfuzzer_sys::fuzz_target;
use lightbox::application::export::metadata::exported_lines;
use lightbox::application::CaptureTime;

fuzz_target!(|data: &[u8]| {
    let output = String::from_utf8_lossy(data);
    let _ = CaptureTime::parse(&output);
    let _ = exported_lines(&output);
});
