//! Main logger implementation

use super::{
    caller,
    config::LoggerConfig,
    error::LoggerError,
    fatal::FatalError,
    formatter::{FormatFlags, LineFormatter},
    log_record::LogRecord,
    message::interpolate,
    metrics::LoggerMetrics,
    severity::Severity,
    sink::Sink,
};
use parking_lot::{Mutex, MutexGuard};
use std::fmt;
use std::io;
use std::panic::Location;
use std::sync::Arc;

/// Callback invoked when the sink rejects a line.
///
/// Emission never returns write errors; this hook is the only place they
/// surface. It runs after the logger's lock is released, so it may log.
pub type ErrorObserver = Arc<dyn Fn(&LoggerError) + Send + Sync>;

struct LoggerState {
    sink: Box<dyn Sink>,
    minimum_severity: Severity,
    caller_depth: usize,
    formatter: LineFormatter,
    on_write_error: Option<ErrorObserver>,
}

/// A synchronous, single-sink leveled logger.
///
/// All configuration and the sink sit behind one lock that is held from the
/// severity check until the line is written, so concurrent calls never
/// interleave and setters never race a half-read configuration.
pub struct Logger {
    state: Mutex<LoggerState>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// A logger writing to stdout at INFO with caller annotation disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(io::stdout())
    }

    #[must_use]
    pub fn with_sink(sink: impl Sink + 'static) -> Self {
        Self::from_parts(Box::new(sink), LoggerConfig::default(), None)
    }

    fn from_parts(
        sink: Box<dyn Sink>,
        config: LoggerConfig,
        on_write_error: Option<ErrorObserver>,
    ) -> Self {
        Self {
            state: Mutex::new(LoggerState {
                sink,
                minimum_severity: config.minimum_severity,
                caller_depth: config.caller_depth,
                formatter: LineFormatter::new(config.flags),
                on_write_error,
            }),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Replace the sink. The previous sink is dropped.
    pub fn set_output(&self, sink: impl Sink + 'static) {
        self.state.lock().sink = Box::new(sink);
    }

    /// Set how many frames above the logging call DEBUG lines are annotated
    /// with. 0 disables annotation.
    pub fn set_caller_depth(&self, depth: usize) {
        self.state.lock().caller_depth = depth;
    }

    /// Set the minimum severity.
    ///
    /// Accepts a [`Severity`] or any raw value convertible into one (integer
    /// codes, names). A value that names no severity installs INFO and emits a
    /// WARN line announcing the fallback.
    #[track_caller]
    pub fn set_minimum_severity<L>(&self, level: L)
    where
        L: TryInto<Severity>,
        L::Error: fmt::Display,
    {
        match level.try_into() {
            Ok(severity) => self.state.lock().minimum_severity = severity,
            Err(err) => {
                self.state.lock().minimum_severity = Severity::Info;
                self.warn(format!("Logger severity rejected ({}). Defaulting to INFO", err));
            }
        }
    }

    pub fn set_flags(&self, flags: FormatFlags) {
        self.state.lock().formatter = LineFormatter::new(flags);
    }

    pub fn set_error_observer(&self, observer: ErrorObserver) {
        self.state.lock().on_write_error = Some(observer);
    }

    /// Apply every setting in `config` at once.
    pub fn set_config(&self, config: LoggerConfig) {
        let mut state = self.state.lock();
        state.minimum_severity = config.minimum_severity;
        state.caller_depth = config.caller_depth;
        state.formatter = LineFormatter::new(config.flags);
    }

    pub fn minimum_severity(&self) -> Severity {
        self.state.lock().minimum_severity
    }

    pub fn caller_depth(&self) -> usize {
        self.state.lock().caller_depth
    }

    pub fn flags(&self) -> FormatFlags {
        self.state.lock().formatter.flags()
    }

    pub fn config(&self) -> LoggerConfig {
        let state = self.state.lock();
        LoggerConfig {
            minimum_severity: state.minimum_severity,
            caller_depth: state.caller_depth,
            flags: state.formatter.flags(),
        }
    }

    /// Whether a call at `severity` would currently produce a line.
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.state.lock().minimum_severity
    }

    /// Get the logger metrics for detailed observability
    ///
    /// # Example
    ///
    /// ```
    /// use leveled_logger::{Logger, SharedBuffer};
    ///
    /// let logger = Logger::with_sink(SharedBuffer::new());
    /// logger.debug("filtered out at the default INFO minimum");
    /// logger.info("written");
    ///
    /// assert_eq!(logger.metrics().suppressed(), 1);
    /// assert_eq!(logger.metrics().total_logged(), 1);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Emit `message` at `severity`. Returns the line handed to the sink, or
    /// `None` when the severity is filtered out.
    fn emit(
        &self,
        severity: Severity,
        message: String,
        origin: &'static Location<'static>,
    ) -> Option<String> {
        let mut state = self.state.lock();
        if state.minimum_severity > severity {
            drop(state);
            self.metrics.record_suppressed();
            return None;
        }

        let depth = if severity.shows_caller() { state.caller_depth } else { 0 };
        let site = if depth > 1 {
            // Stack walks symbolize frames; other threads keep logging meanwhile.
            let site = MutexGuard::unlocked(&mut state, || caller::resolve_from(depth, origin));
            if state.minimum_severity > severity {
                drop(state);
                self.metrics.record_suppressed();
                return None;
            }
            site
        } else {
            caller::resolve_from(depth, origin)
        };

        let record = LogRecord::new(severity, message).with_caller_site(site);

        let interactive = state.sink.is_interactive();
        let line = state.formatter.format(&record, interactive);
        let written = state
            .sink
            .write_all(line.as_bytes())
            .and_then(|()| state.sink.flush());

        let failure = written.err().map(|source| {
            (
                LoggerError::io_operation("writing log line", state.sink.name(), source),
                state.on_write_error.clone(),
            )
        });
        drop(state);

        self.metrics.record_logged();
        if let Some((err, observer)) = failure {
            self.report_write_failure(err, observer);
        }

        Some(line)
    }

    fn report_write_failure(&self, err: LoggerError, observer: Option<ErrorObserver>) {
        let previous = self.metrics.record_write_failure();
        match observer {
            Some(callback) => callback(&err),
            None if previous == 0 => {
                eprintln!("[LOGGER ERROR] {}. Further write failures are only counted.", err);
            }
            None => {}
        }
    }

    #[track_caller]
    pub fn log(&self, severity: Severity, message: impl Into<String>) {
        self.emit(severity, message.into(), Location::caller());
    }

    /// Log a runtime template, substituting `args` positionally.
    ///
    /// With no arguments the template is written verbatim.
    #[track_caller]
    pub fn log_fmt(&self, severity: Severity, template: &str, args: &[&dyn fmt::Display]) {
        if !self.enabled(severity) {
            self.metrics.record_suppressed();
            return;
        }
        self.emit(severity, interpolate(template, args), Location::caller());
    }

    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.emit(Severity::Debug, message.into(), Location::caller());
    }

    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.emit(Severity::Info, message.into(), Location::caller());
    }

    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        self.emit(Severity::Warn, message.into(), Location::caller());
    }

    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.emit(Severity::Error, message.into(), Location::caller());
    }

    #[track_caller]
    pub fn success(&self, message: impl Into<String>) {
        self.emit(Severity::Success, message.into(), Location::caller());
    }

    #[track_caller]
    pub fn notice(&self, message: impl Into<String>) {
        self.emit(Severity::Notice, message.into(), Location::caller());
    }

    /// Emit at FATAL and return the termination payload.
    ///
    /// The caller is expected to stop: propagate the error to the top level
    /// (see [`fatal::run`](crate::fatal::run)) or call [`FatalError::raise`].
    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>) -> FatalError {
        let message = message.into();
        let line = self.emit(Severity::Fatal, message.clone(), Location::caller());
        FatalError::new(message, line)
    }

    /// Emit at FATAL and unwind with the [`FatalError`] as panic payload.
    #[track_caller]
    pub fn fatal_unwind(&self, message: impl Into<String>) -> ! {
        self.fatal(message).raise()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Logger")
            .field("sink", &state.sink.name())
            .field("minimum_severity", &state.minimum_severity)
            .field("caller_depth", &state.caller_depth)
            .field("flags", &state.formatter.flags())
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use leveled_logger::prelude::*;
/// use std::sync::Arc;
///
/// let buffer = SharedBuffer::new();
/// let logger = Logger::builder()
///     .minimum_severity(Severity::Debug)
///     .caller_depth(1)
///     .flags(FormatFlags::new().with_date(true))
///     .output(buffer.clone())
///     .on_write_error(Arc::new(|err: &LoggerError| {
///         eprintln!("log write failed: {}", err);
///     }))
///     .build();
///
/// logger.info("ready");
/// assert!(buffer.contents().contains("[INFO] ready"));
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    sink: Option<Box<dyn Sink>>,
    on_write_error: Option<ErrorObserver>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            sink: None,
            on_write_error: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn minimum_severity(mut self, severity: Severity) -> Self {
        self.config.minimum_severity = severity;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn caller_depth(mut self, depth: usize) -> Self {
        self.config.caller_depth = depth;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn flags(mut self, flags: FormatFlags) -> Self {
        self.config.flags = flags;
        self
    }

    /// Start from a loaded configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the sink. Defaults to stdout.
    #[must_use = "builder methods return a new value"]
    pub fn output<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn on_write_error(mut self, observer: ErrorObserver) -> Self {
        self.on_write_error = Some(observer);
        self
    }

    pub fn build(self) -> Logger {
        let sink = self.sink.unwrap_or_else(|| Box::new(io::stdout()));
        Logger::from_parts(sink, self.config, self.on_write_error)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
