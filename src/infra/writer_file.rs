use crate::domain_model::LogRecord;
use crate::domain_port::{WriteError, Writer};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends records to a file through a buffered handle.
#[derive(Debug)]
pub struct FileWriter {
    path: PathBuf,
    file: Mutex<BufWriter<File>>,
}

impl FileWriter {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, WriteError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Writer for FileWriter {
    fn write(&self, record: &LogRecord) -> Result<(), WriteError> {
        let line = record.render_line();
        self.file.lock().write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<(), WriteError> {
        self.file.lock().flush()?;
        Ok(())
    }
}

impl Drop for FileWriter {
    fn drop(&mut self) {
        if let Err(e) = self.file.get_mut().flush() {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to flush log file on drop");
        }
    }
}
