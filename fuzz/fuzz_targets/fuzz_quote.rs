#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Quoted output is always a single line wrapped in double quotes
    let quoted = prismlog::fmt::quote(data);
    assert!(quoted.starts_with('"') && quoted.ends_with('"'));
    assert!(!quoted.contains('\n'));
});
