//! The line-output primitive shared by every call on one logger, plus the
//! destinations it can be pointed at.

mod file;
mod writer;

pub use file::{expand_path, open_append};
pub use writer::{LineGuard, LineWriter};
