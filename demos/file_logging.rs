//! File logging example
//!
//! Demonstrates writing plain, dated lines to a file.
//!
//! Run with: cargo run --example file_logging

use leveled_logger::prelude::*;
use leveled_logger::sinks::file;

fn main() -> Result<()> {
    println!("=== Leveled Logger - File Logging Example ===\n");

    let path = std::env::temp_dir().join("leveled_logger_demo.log");
    let logger = Logger::builder()
        .minimum_severity(Severity::Info)
        .flags(FormatFlags::new().with_date(true))
        .output(file::open_append(&path)?)
        .build();

    for i in 0..5 {
        logger.info(format!("Processing batch {}", i));
    }
    logger.success("All batches processed");

    println!("Wrote {} lines to {}", logger.metrics().total_logged(), path.display());
    let written = std::fs::read_to_string(&path).map_err(|source| {
        LoggerError::io_operation("reading log file", path.display().to_string(), source)
    })?;
    print!("{}", written);

    Ok(())
}
