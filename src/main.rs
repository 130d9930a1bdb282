use std::sync::Arc;
use std::thread;
use tinylog::diagnostics::*;
use tinylog::infra::build_writer;
use tinylog::logger::Logger;
use tinylog::settings::*;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let diagnostics = Diagnostics::new_bootstrap();

    let project_settings = parse_settings(cli.settings.as_deref())?;
    info!(?project_settings);
    diagnostics.reload_from_config(&DiagnosticsConfig {
        filter: project_settings.log.filter.clone(),
    })?;

    let logger = Arc::new(Logger::with_min_level(project_settings.writer.min_level));
    logger.set_writer(build_writer(&project_settings.writer)?);

    let entries = project_settings.demo.entries;
    let worker = {
        let logger = logger.clone();
        thread::Builder::new()
            .name(project_settings.demo.thread_name.clone())
            .spawn(move || {
                for n in 0..entries {
                    logger.info("Test threading! This is log entry {0}.", &[&n]);
                }
            })?
    };

    worker
        .join()
        .map_err(|_| anyhow::anyhow!("logging thread panicked"))?;
    logger.flush()?;
    debug!(entries, "demo finished");

    Ok(())
}
