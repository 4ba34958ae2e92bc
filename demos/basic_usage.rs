//! Basic logger usage example
//!
//! Demonstrates every severity, filtering and caller annotation on stdout.
//! Colors appear when stdout is a terminal; pipe the output to see plain text.
//!
//! Run with: cargo run --example basic_usage

use leveled_logger::prelude::*;
use leveled_logger::{debug, info};

fn main() {
    println!("=== Leveled Logger - Basic Usage Example ===\n");

    let logger = Logger::new();
    logger.set_minimum_severity(Severity::Debug);
    logger.set_caller_depth(1);

    println!("1. Logging at every severity:");
    debug!(logger, "Loaded {} plugins", 3);
    info!(logger, "Listening on port {}", 8080);
    logger.success("Database migrated");
    logger.notice("Maintenance window starts at 02:00");
    logger.warn("Disk usage at 85%");
    logger.error("Upstream returned 503");

    println!("\n2. Raising the minimum to WARN:");
    logger.set_minimum_severity(Severity::Warn);
    logger.info("Info message (hidden)");
    logger.notice("Notice message (hidden)");
    logger.warn("Warning message (visible)");

    println!("\n3. An invalid minimum falls back to INFO:");
    logger.set_minimum_severity(17u8);
    logger.info("Info is visible again");

    println!("\n=== Example completed successfully! ===");
}
