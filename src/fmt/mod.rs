//! Line rendering is split from the output primitive so the layout can be
//! tested and benchmarked without a sink or a clock.

mod flags;
mod line;

pub use flags::Flags;
pub use line::{now, render_line};
