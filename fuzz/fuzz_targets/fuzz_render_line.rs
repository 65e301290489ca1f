#![no_main]
use chrono::DateTime;
use gatelog::Flags;
use gatelog::fmt::render_line;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u8, i64, &str, &str)| {
    let (bits, secs, prefix, msg) = input;
    let Some(time) = DateTime::from_timestamp(secs, 0) else {
        return;
    };
    let line = render_line(prefix, Flags::from_bits(bits), time.naive_utc(), None, msg);
    // Every rendering is one terminated line containing the message
    assert!(line.ends_with('\n'));
    assert!(line.contains(msg));
});
