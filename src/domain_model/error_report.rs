use std::any;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;
use std::fmt;

/// A caught error flattened into text: type, message, source chain and,
/// when the runtime captured one, a backtrace.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    type_name: String,
    message: String,
    causes: Vec<String>,
    backtrace: Option<String>,
}

impl ErrorReport {
    /// Backtrace capture follows `RUST_BACKTRACE` / `RUST_LIB_BACKTRACE`.
    pub fn capture<E>(err: &E) -> Self
    where
        E: Error + ?Sized + 'static,
    {
        let backtrace = Backtrace::capture();
        let backtrace = match backtrace.status() {
            BacktraceStatus::Captured => Some(backtrace.to_string()),
            _ => None,
        };
        Self::without_backtrace(err).with_backtrace(backtrace)
    }

    pub fn without_backtrace<E>(err: &E) -> Self
    where
        E: Error + ?Sized + 'static,
    {
        let mut causes = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }

        Self {
            type_name: any::type_name::<E>().to_string(),
            message: err.to_string(),
            causes,
            backtrace: None,
        }
    }

    fn with_backtrace(mut self, backtrace: Option<String>) -> Self {
        self.backtrace = backtrace;
        self
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn causes(&self) -> &[String] {
        &self.causes
    }

    pub fn backtrace(&self) -> Option<&str> {
        self.backtrace.as_deref()
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.type_name, self.message)?;
        for cause in &self.causes {
            write!(f, "\nCaused by: {cause}")?;
        }
        if let Some(backtrace) = &self.backtrace {
            write!(f, "\n{}", backtrace.trim_end())?;
        }
        Ok(())
    }
}
