use crate::domain_port::{WriteError, Writer};
use crate::infra::{ConsoleWriter, FileWriter, MemoryWriter};
use crate::settings::{WriterKind, WriterSettings};
use std::sync::Arc;

pub fn build_writer(settings: &WriterSettings) -> Result<Arc<dyn Writer>, WriteError> {
    let writer: Arc<dyn Writer> = match settings.kind {
        WriterKind::Console => Arc::new(ConsoleWriter::new()),
        WriterKind::File => {
            let path = settings.path.as_deref().ok_or(WriteError::MissingPath)?;
            Arc::new(FileWriter::open(path)?)
        }
        WriterKind::Memory => Arc::new(MemoryWriter::new()),
    };
    tracing::debug!(kind = ?settings.kind, "writer built");
    Ok(writer)
}
