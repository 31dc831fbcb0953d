#![no_main]
use libfuzzer_sys::fuzz_target;
use prismlog::Style;

fuzz_target!(|data: &str| {
    // Must not panic on any list of code names
    let names: Vec<&str> = data.split(',').collect();
    if let Ok(style) = Style::parse(&names) {
        assert!(style.is_empty() || style.as_str().ends_with('m'));
    }
});
