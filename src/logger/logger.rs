use crate::domain_model::{ErrorReport, Level, LogRecord};
use crate::domain_port::{WriteError, Writer};
use crate::logger::format_message;
use parking_lot::RwLock;
use std::error::Error;
use std::fmt::Display;
use std::sync::Arc;

/// Leveled logger dispatching to one replaceable [`Writer`].
///
/// Share it as `Arc<Logger>`. Calls made while no writer is set are
/// dropped without formatting. Logging never fails from the caller's point
/// of view: format and write failures are reported as `tracing` events.
pub struct Logger {
    writer: RwLock<Option<Arc<dyn Writer>>>,
    min_level: Level,
}

impl Logger {
    pub fn new() -> Self {
        Self::with_min_level(Level::Trace)
    }

    /// Records below `min_level` are discarded before formatting.
    pub fn with_min_level(min_level: Level) -> Self {
        Self {
            writer: RwLock::new(None),
            min_level,
        }
    }

    pub fn min_level(&self) -> Level {
        self.min_level
    }

    /// Replaces the active writer. Calls already holding the previous
    /// writer finish on it.
    pub fn set_writer(&self, writer: Arc<dyn Writer>) {
        *self.writer.write() = Some(writer);
    }

    pub fn clear_writer(&self) {
        self.writer.write().take();
    }

    pub fn has_writer(&self) -> bool {
        self.writer.read().is_some()
    }

    pub fn log(&self, level: Level, template: &str, args: &[&dyn Display]) {
        let Some(writer) = self.active_writer(level) else {
            return;
        };
        match format_message(template, args) {
            Ok(message) => dispatch(writer.as_ref(), LogRecord::new(level, message)),
            Err(e) => {
                tracing::warn!(%level, template, error = %e, "dropping log record");
            }
        }
    }

    pub fn trace(&self, template: &str, args: &[&dyn Display]) {
        self.log(Level::Trace, template, args);
    }

    pub fn debug(&self, template: &str, args: &[&dyn Display]) {
        self.log(Level::Debug, template, args);
    }

    pub fn info(&self, template: &str, args: &[&dyn Display]) {
        self.log(Level::Info, template, args);
    }

    pub fn warn(&self, template: &str, args: &[&dyn Display]) {
        self.log(Level::Warning, template, args);
    }

    pub fn error(&self, template: &str, args: &[&dyn Display]) {
        self.log(Level::Error, template, args);
    }

    /// Logs `err` as one multi-line record: type name, message, source
    /// chain and the captured backtrace if any.
    ///
    /// The type name is the static type of `err`. A trait object such as
    /// `&*boxed` reports `dyn core::error::Error + ...` rather than the
    /// concrete type behind it.
    pub fn log_error<E>(&self, level: Level, err: &E)
    where
        E: Error + ?Sized + 'static,
    {
        let Some(writer) = self.active_writer(level) else {
            return;
        };
        let report = ErrorReport::capture(err);
        dispatch(writer.as_ref(), LogRecord::new(level, report.to_string()));
    }

    pub fn info_error<E>(&self, err: &E)
    where
        E: Error + ?Sized + 'static,
    {
        self.log_error(Level::Info, err);
    }

    pub fn flush(&self) -> Result<(), WriteError> {
        let writer = self.writer.read().clone();
        let Some(writer) = writer else {
            return Ok(());
        };
        writer.flush().inspect_err(|e| {
            tracing::warn!(error = %e, "failed to flush log writer");
        })
    }

    fn active_writer(&self, level: Level) -> Option<Arc<dyn Writer>> {
        if level < self.min_level {
            return None;
        }
        self.writer.read().clone()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

fn dispatch(writer: &dyn Writer, record: LogRecord) {
    if let Err(e) = writer.write(&record) {
        tracing::warn!(level = %record.level(), error = %e, "failed to write log record");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MemoryWriter;
    use std::io;

    struct BrokenWriter;

    impl Writer for BrokenWriter {
        fn write(&self, _record: &LogRecord) -> Result<(), WriteError> {
            Err(WriteError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "closed")))
        }

        fn flush(&self) -> Result<(), WriteError> {
            Err(WriteError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "closed")))
        }
    }

    fn logger_with_memory() -> (Logger, Arc<MemoryWriter>) {
        let logger = Logger::new();
        let memory = Arc::new(MemoryWriter::new());
        logger.set_writer(memory.clone());
        (logger, memory)
    }

    #[test]
    fn test_info_reaches_writer() {
        let (logger, memory) = logger_with_memory();

        logger.info("Test threading! This is log entry {0}.", &[&0]);

        let lines = memory.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("INFO: Test threading! This is log entry 0."));
    }

    #[test]
    fn test_calls_before_set_writer_are_not_replayed() {
        let logger = Logger::new();
        assert!(!logger.has_writer());

        logger.info("early {0}", &[&1]);
        logger.info_error(&io::Error::other("early error"));
        assert!(logger.flush().is_ok());

        let memory = Arc::new(MemoryWriter::new());
        logger.set_writer(memory.clone());
        logger.info("late", &[]);

        assert_eq!(memory.len(), 1);
        assert!(memory.lines()[0].ends_with("INFO: late"));
    }

    #[test]
    fn test_set_writer_replaces_previous() {
        let (logger, first) = logger_with_memory();
        logger.info("one", &[]);

        let second = Arc::new(MemoryWriter::new());
        logger.set_writer(second.clone());
        logger.info("two", &[]);

        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert!(second.lines()[0].ends_with("two"));
    }

    #[test]
    fn test_clear_writer_returns_to_no_op() {
        let (logger, memory) = logger_with_memory();
        logger.clear_writer();

        logger.info("dropped", &[]);

        assert!(!logger.has_writer());
        assert!(memory.is_empty());
    }

    #[test]
    fn test_format_error_drops_record() {
        let (logger, memory) = logger_with_memory();

        logger.info("{0} {1}", &[&"a"]);

        assert!(memory.is_empty());
    }

    #[test]
    fn test_records_below_min_level_are_discarded() {
        let logger = Logger::with_min_level(Level::Info);
        assert_eq!(logger.min_level(), Level::Info);
        assert_eq!(Logger::new().min_level(), Level::Trace);
        let memory = Arc::new(MemoryWriter::new());
        logger.set_writer(memory.clone());

        logger.trace("t", &[]);
        logger.debug("d", &[]);
        logger.info("i", &[]);
        logger.warn("w", &[]);
        logger.error("e", &[]);

        let lines = memory.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("INFO: i"));
        assert!(lines[1].ends_with("WARNING: w"));
        assert!(lines[2].ends_with("ERROR: e"));
    }

    #[test]
    fn test_info_error_contains_type_and_message() {
        let (logger, memory) = logger_with_memory();

        logger.info_error(&io::Error::other("hell world"));

        let lines = memory.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("INFO: "));
        assert!(lines[0].contains("Error"));
        assert!(lines[0].contains("hell world"));
    }

    #[test]
    fn test_info_error_accepts_boxed_errors() {
        let (logger, memory) = logger_with_memory();
        let err: Box<dyn Error + Send + Sync> = "boxed failure".into();

        logger.info_error(&*err);

        let line = &memory.lines()[0];
        let message = line.split_once("INFO: ").unwrap().1;
        assert!(message.starts_with("dyn core::error::Error"));
        assert!(message.contains(": boxed failure"));
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let logger = Logger::new();
        logger.set_writer(Arc::new(BrokenWriter));

        logger.info("still fine", &[]);
        logger.info_error(&io::Error::other("still fine"));

        assert!(matches!(logger.flush(), Err(WriteError::Io(_))));
    }
}
