use super::Parser;

/// Emits demo log lines through the configured writer.
#[derive(Parser, Debug)]
#[command(name = "tinylog", version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(long)]
    pub settings: Option<String>,
}
