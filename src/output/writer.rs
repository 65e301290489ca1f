//! A line writer with a mutable prefix and flag set, in the shape of a
//! classic line logger: whatever prefix and flags are current when `output`
//! runs are the ones the line is rendered with.

use crate::fmt::{self as line_fmt, Flags};
use std::fmt;
use std::io::{self, Write};
use std::panic::Location;
use std::sync::{Mutex, MutexGuard, PoisonError, TryLockError};

struct LineState {
    prefix: String,
    flags: Flags,
    sink: Box<dyn Write + Send>,
}

impl LineState {
    fn output(&mut self, location: Option<&Location<'_>>, msg: &str) -> io::Result<()> {
        let time = line_fmt::now(self.flags);
        let line = line_fmt::render_line(&self.prefix, self.flags, time, location, msg);
        // One write_all per line so concurrent writers never interleave bytes.
        self.sink.write_all(line.as_bytes())?;
        self.sink.flush()
    }
}

/// Shared by reference across threads; every method takes `&self`.
///
/// Individual setters lock independently. Callers that need "set prefix, set
/// flags, write" to happen as one unit take a [`LineGuard`] via [`LineWriter::lock`].
pub struct LineWriter {
    state: Mutex<LineState>,
}

impl LineWriter {
    #[must_use]
    pub fn new(sink: impl Write + Send + 'static, prefix: impl Into<String>, flags: Flags) -> Self {
        Self {
            state: Mutex::new(LineState {
                prefix: prefix.into(),
                flags,
                sink: Box::new(sink),
            }),
        }
    }

    /// Process stdout, no prefix, date and time.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout(), "", Flags::STD)
    }

    /// Process stderr, no prefix, date and time.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr(), "", Flags::STD)
    }

    /// A panic while the lock was held must not silence every later call.
    #[must_use]
    pub fn lock(&self) -> LineGuard<'_> {
        LineGuard {
            state: self.state.lock().unwrap_or_else(PoisonError::into_inner),
        }
    }

    #[must_use]
    pub fn prefix(&self) -> String {
        self.lock().prefix().to_string()
    }

    pub fn set_prefix(&self, prefix: &str) {
        self.lock().set_prefix(prefix);
    }

    #[must_use]
    pub fn flags(&self) -> Flags {
        self.lock().flags()
    }

    pub fn set_flags(&self, flags: Flags) {
        self.lock().set_flags(flags);
    }

    /// Redirects all later lines. The previous sink is dropped.
    pub fn set_output(&self, sink: impl Write + Send + 'static) {
        self.lock().set_output(sink);
    }

    /// Writes one line with the current prefix and flags.
    ///
    /// `args` is formatted before the lock is taken, so arguments that log
    /// through this writer themselves do not deadlock.
    ///
    /// # Errors
    /// I/O errors from the sink.
    pub fn output(
        &self,
        location: Option<&Location<'_>>,
        args: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        let msg = args.to_string();
        self.lock().output_str(location, &msg)
    }
}

impl Default for LineWriter {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for LineWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = match self.state.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
            Err(TryLockError::WouldBlock) => {
                return f
                    .debug_struct("LineWriter")
                    .field("state", &format_args!("<locked>"))
                    .finish_non_exhaustive();
            }
        };
        f.debug_struct("LineWriter")
            .field("prefix", &guard.prefix)
            .field("flags", &guard.flags)
            .finish_non_exhaustive()
    }
}

/// Exclusive access to a [`LineWriter`] until dropped.
pub struct LineGuard<'a> {
    state: MutexGuard<'a, LineState>,
}

impl LineGuard<'_> {
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.state.prefix
    }

    pub fn set_prefix(&mut self, prefix: &str) {
        prefix.clone_into(&mut self.state.prefix);
    }

    #[must_use]
    pub fn flags(&self) -> Flags {
        self.state.flags
    }

    pub fn set_flags(&mut self, flags: Flags) {
        self.state.flags = flags;
    }

    pub fn set_output(&mut self, sink: impl Write + Send + 'static) {
        self.state.sink = Box::new(sink);
    }

    /// Formats `args` while the lock is held; prefer [`LineGuard::output_str`]
    /// when the arguments may log through this same writer.
    ///
    /// # Errors
    /// I/O errors from the sink.
    pub fn output(
        &mut self,
        location: Option<&Location<'_>>,
        args: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        let msg = args.to_string();
        self.state.output(location, &msg)
    }

    /// Writes an already formatted message.
    ///
    /// # Errors
    /// I/O errors from the sink.
    pub fn output_str(&mut self, location: Option<&Location<'_>>, msg: &str) -> io::Result<()> {
        self.state.output(location, msg)
    }
}
