//! Fatal termination contract
//!
//! A FATAL emission produces a [`FatalError`]. The host either propagates it
//! as an ordinary error or unwinds with it via [`FatalError::raise`]. Both
//! paths end in [`run`], which turns them into a failing [`ExitCode`] after the
//! closure's destructors have run.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;

/// The termination payload of a FATAL emission.
#[must_use = "a fatal error must be propagated or raised"]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FatalError {
    message: String,
    line: Option<String>,
}

impl FatalError {
    pub fn new(message: impl Into<String>, line: Option<String>) -> Self {
        Self {
            message: message.into(),
            line,
        }
    }

    /// The interpolated message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The formatted line as written to the sink, if it was emitted.
    pub fn line(&self) -> Option<&str> {
        self.line.as_deref()
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::FAILURE
    }

    /// Abort the calling flow by unwinding with `self` as the panic payload.
    pub fn raise(self) -> ! {
        panic::panic_any(self)
    }

    /// Recover a `FatalError` from a caught panic payload.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Result<Self, Box<dyn Any + Send>> {
        payload.downcast::<FatalError>().map(|fatal| *fatal)
    }
}

/// Run `f` as the top level of a program and map fatal outcomes to an exit code.
///
/// Panics that do not carry a [`FatalError`] are resumed unchanged. A fatal
/// unwind ends the program, so `f` need not be unwind safe.
///
/// # Example
///
/// ```no_run
/// use leveled_logger::{fatal, Logger};
/// use std::process::ExitCode;
///
/// fn main() -> ExitCode {
///     let logger = Logger::new();
///     fatal::run(|| {
///         logger.info("starting");
///         Err(logger.fatal("configuration missing"))
///     })
/// }
/// ```
pub fn run<F>(f: F) -> ExitCode
where
    F: FnOnce() -> Result<(), FatalError>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(fatal)) => fatal.exit_code(),
        Err(payload) => match FatalError::from_panic(payload) {
            Ok(fatal) => fatal.exit_code(),
            Err(other) => panic::resume_unwind(other),
        },
    }
}
