//! Integration tests for the leveled logger
//!
//! These tests verify:
//! - Severity filtering against the configured minimum
//! - Plain output on non-terminal sinks
//! - The fatal contract, both returned and unwound
//! - Invalid severity fallback
//! - File sinks and sink swapping

use leveled_logger::fatal::{self as fatal_contract, FatalError};
use leveled_logger::prelude::*;
use leveled_logger::sinks::file;
use leveled_logger::{info, notice};
use std::fs;
use std::process::ExitCode;
use tempfile::TempDir;

fn capture(minimum: Severity) -> (Logger, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let logger = Logger::builder()
        .minimum_severity(minimum)
        .output(buffer.clone())
        .build();
    (logger, buffer)
}

#[test]
fn test_info_reaches_buffer() {
    let (logger, buffer) = capture(Severity::Debug);

    info!(logger, "hello {}", "world");

    assert!(buffer.contents().contains("hello world"));
}

#[test]
fn test_info_suppressed_when_minimum_is_error() {
    let (logger, buffer) = capture(Severity::Error);

    logger.info("should not appear");

    assert!(buffer.is_empty(), "expected no output, got {:?}", buffer.contents());
}

#[test]
fn test_fatal_payload_and_line() {
    let (logger, buffer) = capture(Severity::Debug);

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        logger.fatal_unwind(format!("fatal {}", "test"));
    }));

    let payload = result.expect_err("fatal_unwind must unwind");
    let fatal = FatalError::from_panic(payload).expect("payload should be a FatalError");
    assert!(fatal.message().contains("fatal test"));
    assert!(fatal.line().unwrap().contains("fatal test"));
    assert!(buffer.contents().contains("[FATAL] fatal test"));
}

#[test]
fn test_fatal_harness_maps_to_failure() {
    let (logger, buffer) = capture(Severity::Debug);

    let code = fatal_contract::run(|| {
        logger.info("starting");
        Err(logger.fatal("configuration missing"))
    });

    assert_eq!(code, ExitCode::FAILURE);
    let contents = buffer.contents();
    assert!(contents.contains("[INFO] starting"));
    assert!(contents.contains("[FATAL] configuration missing"));
}

#[test]
fn test_fatal_is_never_suppressed() {
    for minimum in Severity::ALL {
        let (logger, buffer) = capture(minimum);
        let fatal = logger.fatal("stop");
        assert!(fatal.line().is_some(), "FATAL suppressed at minimum {}", minimum);
        assert!(buffer.contents().contains("[FATAL] stop"));
    }
}

#[test]
fn test_invalid_minimum_falls_back_with_warning() {
    let (logger, buffer) = capture(Severity::Fatal);

    logger.set_minimum_severity(99i32);

    assert_eq!(logger.minimum_severity(), Severity::Info);
    let contents = buffer.contents();
    assert_eq!(contents.lines().count(), 1);
    assert!(contents.contains("[WARN]"));
    assert!(contents.contains("Defaulting to INFO"));

    logger.info("visible again");
    assert!(buffer.contents().contains("visible again"));
}

#[test]
fn test_buffer_output_has_no_ansi() {
    let (logger, buffer) = capture(Severity::Debug);
    logger.set_caller_depth(1);

    logger.debug("d");
    logger.info("i");
    logger.warn("w");
    logger.error("e");
    logger.success("s");
    logger.notice("n");
    let _ = logger.fatal("f");

    let bytes = buffer.to_bytes();
    assert!(!bytes.contains(&0x1b), "ANSI escape written to a buffer");
    assert_eq!(buffer.contents().lines().count(), 7);
}

#[test]
fn test_file_sink_receives_plain_lines() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("app.log");

    let logger = Logger::builder()
        .minimum_severity(Severity::Info)
        .flags(FormatFlags::new().with_date(true))
        .output(file::open_append(&log_file).expect("Failed to open log file"))
        .build();

    logger.info("written to disk");
    notice!(logger, "{} tables migrated", 3);

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("[INFO] written to disk"));
    assert!(lines[1].ends_with("[NOTICE] 3 tables migrated"));
    // YYYY/MM/DD HH:MM:SS.mmm
    assert_eq!(lines[0].find(" [INFO]"), Some("2025/01/08 10:30:45.123".len()));
    assert!(!content.contains('\x1b'));
}

#[test]
fn test_swapping_to_file_mid_run() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("later.log");
    let (logger, buffer) = capture(Severity::Info);

    logger.info("before");
    logger.set_output(file::open_append(&log_file).unwrap());
    logger.info("after");

    assert!(buffer.contents().contains("before"));
    let content = fs::read_to_string(&log_file).unwrap();
    assert!(content.contains("after"));
    assert!(!content.contains("before"));
}

#[test]
fn test_config_from_json_drives_logger() {
    let config = LoggerConfig::from_json(
        r#"{ "minimum_severity": "WARN", "caller_depth": 0, "flags": { "utc": true } }"#,
    )
    .expect("valid config");

    let buffer = SharedBuffer::new();
    let logger = Logger::builder().config(config).output(buffer.clone()).build();

    logger.notice("below warn");
    logger.warn("at warn");

    let contents = buffer.contents();
    assert!(!contents.contains("below warn"));
    assert!(contents.contains("[WARN] at warn"));
}

#[test]
fn test_escape_newlines_keeps_one_line_per_call() {
    let buffer = SharedBuffer::new();
    let logger = Logger::builder()
        .flags(FormatFlags::new().with_escape_newlines(true))
        .output(buffer.clone())
        .build();

    logger.info("User login\nERROR fake entry");

    let contents = buffer.contents();
    assert_eq!(contents.lines().count(), 1);
    assert!(contents.contains("User login\\nERROR fake entry"));
}
