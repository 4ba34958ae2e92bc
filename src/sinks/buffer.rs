//! In-memory sinks

use crate::core::Sink;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

impl Sink for Vec<u8> {
    fn name(&self) -> &str {
        "memory"
    }
}

/// A clonable in-memory sink.
///
/// Every clone shares the same bytes, so a host can hand one clone to a
/// logger and read what was written through another.
///
/// # Example
///
/// ```
/// use leveled_logger::{Logger, SharedBuffer};
///
/// let buffer = SharedBuffer::new();
/// let logger = Logger::with_sink(buffer.clone());
/// logger.info("captured");
///
/// assert!(buffer.contents().contains("captured"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.bytes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Sink for SharedBuffer {
    fn name(&self) -> &str {
        "shared-buffer"
    }
}
