//! The `diagnostics` module installs the global `tracing` subscriber and is
//! verified manually. See `main.rs` for its usage.

mod diagnostics;
pub use diagnostics::*;

pub use tracing::{debug, error, info, trace, warn};
