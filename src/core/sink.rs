//! Sink trait for log output destinations

use std::io::Write;

/// A byte-stream destination for formatted lines.
///
/// The logger owns the handle it is given but never closes the underlying
/// resource on its own; pass a clone (`File::try_clone`, [`SharedBuffer`]) when
/// the host needs to keep using it.
///
/// [`SharedBuffer`]: crate::sinks::SharedBuffer
pub trait Sink: Write + Send {
    /// Whether this sink is a character-device terminal.
    ///
    /// Queried on every emission, so the answer may change when the sink does.
    fn is_interactive(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "sink"
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn is_interactive(&self) -> bool {
        (**self).is_interactive()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
