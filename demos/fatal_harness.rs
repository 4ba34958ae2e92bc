//! Fatal harness example
//!
//! A FATAL emission returns a `FatalError`; `fatal::run` turns it into a
//! failing exit status once the program's destructors have run.
//!
//! Run with: cargo run --example fatal_harness -- [--unwind]

use leveled_logger::{fatal, FatalError, Logger, Severity};
use std::process::ExitCode;

fn load_settings(logger: &Logger, unwind: bool) -> Result<(), FatalError> {
    logger.info("Reading settings");
    if unwind {
        logger.fatal_unwind("Settings file is corrupt");
    }
    Err(fatal!(logger, "Settings file {} is missing", "app.toml"))
}

fn main() -> ExitCode {
    let unwind = std::env::args().any(|arg| arg == "--unwind");
    let logger = Logger::new();
    logger.set_minimum_severity(Severity::Debug);

    let code = fatal::run(|| {
        load_settings(&logger, unwind)?;
        logger.success("Started");
        Ok(())
    });

    logger.notice("Shutting down cleanly");
    code
}
