// Logs from a background thread, then logs a caught error value.
// $ RUST_BACKTRACE=1 cargo run --bin error_demo
use std::io;
use std::sync::Arc;
use std::thread;
use tinylog::diagnostics::Diagnostics;
use tinylog::infra::ConsoleWriter;
use tinylog::logger::Logger;

fn fail() -> io::Result<()> {
    Err(io::Error::other("hell world"))
}

fn main() -> anyhow::Result<()> {
    let _diagnostics = Diagnostics::new_bootstrap();

    let logger = Arc::new(Logger::new());
    logger.set_writer(Arc::new(ConsoleWriter::new()));

    let worker = {
        let logger = logger.clone();
        thread::spawn(move || {
            for n in 0..10 {
                logger.info("Test threading! This is log entry {0}.", &[&n]);
            }
        })
    };

    if let Err(e) = fail() {
        logger.info_error(&e);
    }

    worker
        .join()
        .map_err(|_| anyhow::anyhow!("logging thread panicked"))?;
    logger.flush()?;

    Ok(())
}
