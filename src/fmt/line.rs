//! Assembles one output line: prefix, header fields, message, newline.

use super::Flags;
use chrono::{Local, NaiveDateTime, Utc};
use std::panic::Location;

/// Wall-clock time in the zone the flags ask for.
#[must_use]
pub fn now(flags: Flags) -> NaiveDateTime {
    if flags.contains(Flags::UTC) {
        Utc::now().naive_utc()
    } else {
        Local::now().naive_local()
    }
}

/// Renders `msg` with the header selected by `flags`.
///
/// Layout: `[prefix][date ][time ][file:line: ][prefix if MSG_PREFIX]msg\n`.
/// A newline is appended only when `msg` does not already end with one.
/// When a file field is requested but no location is known, `???:0` stands in.
#[must_use]
pub fn render_line(
    prefix: &str,
    flags: Flags,
    time: NaiveDateTime,
    location: Option<&Location<'_>>,
    msg: &str,
) -> String {
    let mut line = String::with_capacity(prefix.len() + msg.len() + 48);

    if !flags.contains(Flags::MSG_PREFIX) {
        line.push_str(prefix);
    }

    if flags.contains(Flags::DATE) {
        line.push_str(&time.format("%Y/%m/%d ").to_string());
    }
    if flags.intersects(Flags::TIME.union(Flags::MICROSECONDS)) {
        if flags.contains(Flags::MICROSECONDS) {
            line.push_str(&time.format("%H:%M:%S%.6f ").to_string());
        } else {
            line.push_str(&time.format("%H:%M:%S ").to_string());
        }
    }

    if flags.intersects(Flags::LONG_FILE.union(Flags::SHORT_FILE)) {
        let (file, lineno) = location.map_or(("???", 0), |loc| (loc.file(), loc.line()));
        let file = if flags.contains(Flags::SHORT_FILE) {
            file.rsplit(['/', '\\']).next().unwrap_or(file)
        } else {
            file
        };
        line.push_str(file);
        line.push(':');
        line.push_str(&lineno.to_string());
        line.push_str(": ");
    }

    if flags.contains(Flags::MSG_PREFIX) {
        line.push_str(prefix);
    }

    line.push_str(msg);
    if !msg.ends_with('\n') {
        line.push('\n');
    }
    line
}
