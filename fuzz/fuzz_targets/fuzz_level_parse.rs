#![no_main]
use gatelog::Level;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Only the four exact names parse, and they round-trip
    if let Ok(level) = data.parse::<Level>() {
        assert_eq!(level.as_str(), data);
    }
});
