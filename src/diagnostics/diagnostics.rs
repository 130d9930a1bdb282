use anyhow::{Result, anyhow};
use std::io;
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

pub struct DiagnosticsConfig {
    pub filter: String,
}

/// Process-level `tracing` subscriber for the crate's own events.
///
/// Events go to stderr so they never mix with logger output on stdout.
pub struct Diagnostics {
    reload_handle: reload::Handle<EnvFilter, Registry>,
}

impl Diagnostics {
    pub fn new_bootstrap() -> Self {
        let filter = EnvFilter::new("info");
        let (filter, reload_handle) = reload::Layer::new(filter);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(io::stderr))
            .init();

        Self { reload_handle }
    }

    pub fn reload_from_config(&self, config: &DiagnosticsConfig) -> Result<()> {
        let filter = EnvFilter::try_new(&config.filter).map_err(|e| anyhow!(e))?;
        self.reload_handle.reload(filter).map_err(|e| anyhow!(e))?;
        Ok(())
    }
}
