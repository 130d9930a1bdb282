use crate::domain_model::LogRecord;

/// Destination for formatted log records.
///
/// Implementations must keep each record's output contiguous when called
/// from several threads at once.
pub trait Writer: Send + Sync {
    fn write(&self, record: &LogRecord) -> Result<(), WriteError>;

    fn flush(&self) -> Result<(), WriteError> {
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("file writer requires a path")]
    MissingPath,
}
