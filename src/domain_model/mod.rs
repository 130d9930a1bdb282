mod error_report;
mod level;
mod record;

pub use error_report::*;
pub use level::*;
pub use record::*;
