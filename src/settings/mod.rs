//! The `settings` module loads the TOML settings that pick the writer and
//! drive the demos. See `bin/settings_demo.rs` for a manual check.

mod cli;
pub use clap::Parser;
pub use cli::*;

mod settings;
pub use settings::*;
