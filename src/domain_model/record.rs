use crate::domain_model::Level;
use chrono::{DateTime, Local};
use std::fmt;
use std::thread;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// One formatted log event. Immutable once built.
#[derive(Debug, Clone)]
pub struct LogRecord {
    level: Level,
    timestamp: DateTime<Local>,
    thread: String,
    message: String,
}

impl LogRecord {
    /// Builds a record stamped with the current time and the calling thread.
    pub fn new(level: Level, message: String) -> Self {
        Self::at(level, Local::now(), current_thread_name(), message)
    }

    pub fn at(level: Level, timestamp: DateTime<Local>, thread: String, message: String) -> Self {
        Self {
            level,
            timestamp,
            thread,
            message,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn thread(&self) -> &str {
        &self.thread
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn render_line(&self) -> String {
        format!("{self}\n")
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.thread,
            self.level,
            self.message
        )
    }
}

fn current_thread_name() -> String {
    let current = thread::current();
    match current.name() {
        Some(name) => name.to_string(),
        None => format!("{:?}", current.id()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_render_line_layout() {
        let timestamp = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        let record = LogRecord::at(
            Level::Info,
            timestamp,
            "worker".to_string(),
            "This is log entry 0.".to_string(),
        );

        assert_eq!(
            record.render_line(),
            "2024-03-09 07:05:01.000 [worker] INFO: This is log entry 0.\n"
        );
        assert_eq!(record.timestamp(), timestamp);
    }

    #[test]
    fn test_new_uses_calling_thread_name() {
        let record = thread::Builder::new()
            .name("named-thread".to_string())
            .spawn(|| LogRecord::new(Level::Debug, "hi".to_string()))
            .unwrap()
            .join()
            .unwrap();

        assert_eq!(record.thread(), "named-thread");
        assert!(record.timestamp() <= Local::now());
        assert_eq!(record.level(), Level::Debug);
        assert_eq!(record.message(), "hi");
    }
}
