//! Adapter for arbitrary writers

use crate::core::Sink;
use std::io::{self, Write};

/// Wraps any `Write + Send` as a sink.
///
/// Interactivity is fixed at construction; use [`WriterSink::interactive`]
/// for writers known to end at a terminal (a pty, say) that the OS check
/// cannot see through.
#[derive(Debug)]
pub struct WriterSink<W> {
    inner: W,
    interactive: bool,
    name: String,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            interactive: false,
            name: "writer".to_string(),
        }
    }

    #[must_use]
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write + Send> Write for WriterSink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn name(&self) -> &str {
        &self.name
    }
}
