//! Output sinks records are written to

pub mod file;
pub mod memory;
pub mod shared_writer;

pub use file::FileSink;
pub use memory::MemorySink;
pub use shared_writer::SharedWriter;
