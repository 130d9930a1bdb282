use crate::domain_model::LogRecord;
use crate::domain_port::{WriteError, Writer};
use std::io::{self, Write};

/// Writes each record to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleWriter;

impl ConsoleWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Writer for ConsoleWriter {
    fn write(&self, record: &LogRecord) -> Result<(), WriteError> {
        let line = record.render_line();
        // one write_all under the stdout lock keeps concurrent lines whole
        let mut stdout = io::stdout().lock();
        stdout.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<(), WriteError> {
        io::stdout().lock().flush()?;
        Ok(())
    }
}
