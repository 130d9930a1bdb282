use tinylog::diagnostics::*;
use tinylog::infra::build_writer;
use tinylog::logger::Logger;
use tinylog::settings::*;

fn main() -> anyhow::Result<()> {
    let diagnostics = Diagnostics::new_bootstrap();

    // Attempt to load from an invalid path (expected to fail)
    let is_err = parse_settings(Some("")).is_err();
    println!("Error on invalid path: {:?}", is_err);

    // Load from the default location, or a custom one:
    // $ cargo run --bin settings_demo -- --settings=settings/file.toml
    let cli = Cli::parse();
    let project_settings = parse_settings(cli.settings.as_deref())?;
    diagnostics.reload_from_config(&DiagnosticsConfig {
        filter: project_settings.log.filter.clone(),
    })?;

    let logger = Logger::with_min_level(project_settings.writer.min_level);
    logger.set_writer(build_writer(&project_settings.writer)?);

    let kind = format!("{:?}", project_settings.writer.kind);
    let path = project_settings.writer.path.as_deref().unwrap_or("-");
    logger.info("writer: {0}, path: {1}", &[&kind, &path]);
    logger.info("minimum level: {0}", &[&project_settings.writer.min_level]);
    logger.debug("visible only when the minimum level is debug or lower", &[]);
    logger.flush()?;

    Ok(())
}
