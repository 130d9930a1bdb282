use crate::domain_model::LogRecord;
use crate::domain_port::{WriteError, Writer};
use parking_lot::Mutex;

/// Keeps rendered lines in memory. Useful for capturing output.
#[derive(Debug, Default)]
pub struct MemoryWriter {
    lines: Mutex<Vec<String>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl Writer for MemoryWriter {
    fn write(&self, record: &LogRecord) -> Result<(), WriteError> {
        self.lines.lock().push(record.to_string());
        Ok(())
    }
}
