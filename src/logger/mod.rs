//! Leveled logger with `{i}` placeholder formatting and a replaceable writer.
//! See `bin/error_demo.rs` and `main.rs` for the demonstration programs.

mod format;
mod logger;

pub use format::*;
pub use logger::*;
