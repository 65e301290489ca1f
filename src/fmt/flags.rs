//! Metadata flags selecting which contextual fields precede a log line.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Bit set of header fields. Combine with `|`.
///
/// The empty set writes only the prefix and the message.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u8);

impl Flags {
    pub const NONE: Self = Self(0);
    /// Local date, `2009/01/23`.
    pub const DATE: Self = Self(1);
    /// Local time, `01:23:23`.
    pub const TIME: Self = Self(1 << 1);
    /// Microsecond resolution, `01:23:23.123123`. Implies `TIME`.
    pub const MICROSECONDS: Self = Self(1 << 2);
    /// Full caller path and line, `src/app/main.rs:23`.
    pub const LONG_FILE: Self = Self(1 << 3);
    /// Caller file name and line, `main.rs:23`. Overrides `LONG_FILE`.
    pub const SHORT_FILE: Self = Self(1 << 4);
    /// Use UTC rather than the local time zone.
    pub const UTC: Self = Self(1 << 5);
    /// Move the prefix from the start of the line to just before the message.
    pub const MSG_PREFIX: Self = Self(1 << 6);
    /// Ambient default for a fresh writer.
    pub const STD: Self = Self(Self::DATE.0 | Self::TIME.0);

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0x7f)
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Flags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(Flags, &str); 7] = [
            (Flags::DATE, "DATE"),
            (Flags::TIME, "TIME"),
            (Flags::MICROSECONDS, "MICROSECONDS"),
            (Flags::LONG_FILE, "LONG_FILE"),
            (Flags::SHORT_FILE, "SHORT_FILE"),
            (Flags::UTC, "UTC"),
            (Flags::MSG_PREFIX, "MSG_PREFIX"),
        ];

        if self.is_empty() {
            return f.write_str("Flags(NONE)");
        }
        let names: Vec<&str> = NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "Flags({})", names.join(" | "))
    }
}
