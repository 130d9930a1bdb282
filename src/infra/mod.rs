mod writer_console;
mod writer_factory;
mod writer_file;
mod writer_memory;

pub use writer_console::*;
pub use writer_factory::*;
pub use writer_file::*;
pub use writer_memory::*;
