//! Sink implementations

pub mod buffer;
pub mod console;
pub mod file;
pub mod writer;

pub use buffer::SharedBuffer;
pub use writer::WriterSink;

pub use crate::core::Sink;
