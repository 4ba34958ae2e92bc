//! Concurrency tests
//!
//! These tests verify:
//! - Lines from many threads never interleave
//! - Setters racing emissions leave every line well formed

use leveled_logger::prelude::*;
use std::sync::Arc;
use std::thread;

#[test]
fn test_concurrent_lines_do_not_interleave() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 200;

    let buffer = SharedBuffer::new();
    let logger = Arc::new(
        Logger::builder()
            .minimum_severity(Severity::Debug)
            .output(buffer.clone())
            .build(),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    logger.info(format!("thread-{} message-{} end", t, i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let contents = buffer.contents();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), THREADS * PER_THREAD);
    for line in lines {
        assert!(line.contains("[INFO] thread-"), "malformed line: {:?}", line);
        assert!(line.ends_with(" end"), "interleaved line: {:?}", line);
    }
    assert_eq!(logger.metrics().total_logged(), (THREADS * PER_THREAD) as u64);
}

#[test]
fn test_setters_race_emissions() {
    let buffer = SharedBuffer::new();
    let logger = Arc::new(Logger::with_sink(buffer.clone()));

    let writer = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..500 {
                logger.warn(format!("warn {}", i));
                logger.debug(format!("debug {}", i));
            }
        })
    };

    let configurer = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..500 {
                let minimum = if i % 2 == 0 { Severity::Debug } else { Severity::Error };
                logger.set_minimum_severity(minimum);
                logger.set_caller_depth(i % 2);
                logger.set_flags(FormatFlags::new().with_utc(i % 3 == 0));
            }
        })
    };

    writer.join().unwrap();
    configurer.join().unwrap();

    let contents = buffer.contents();
    for line in contents.lines() {
        assert!(
            line.contains("[WARN] warn ") || line.contains("[DEBUG] debug "),
            "malformed line: {:?}",
            line
        );
    }
    let metrics = logger.metrics();
    assert_eq!(metrics.total_logged() + metrics.suppressed(), 1000);
}

#[inline(never)]
fn debug_from_helper(logger: &Logger, i: usize) {
    logger.debug(format!("deep {}", i));
}

#[test]
fn test_stack_walks_race_setters() {
    const THREADS: usize = 4;
    const PER_THREAD: usize = 50;

    let buffer = SharedBuffer::new();
    let logger = Arc::new(
        Logger::builder()
            .minimum_severity(Severity::Debug)
            .caller_depth(2)
            .output(buffer.clone())
            .build(),
    );

    let mut handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    debug_from_helper(&logger, i);
                }
            })
        })
        .collect();

    handles.push({
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..200 {
                let minimum = if i % 2 == 0 { Severity::Debug } else { Severity::Error };
                logger.set_minimum_severity(minimum);
                logger.set_caller_depth(2 + i % 2);
            }
            logger.set_minimum_severity(Severity::Debug);
        })
    });

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let contents = buffer.contents();
    for line in contents.lines() {
        assert!(line.contains("[DEBUG] deep "), "malformed line: {:?}", line);
        assert!(line.contains(" | "), "missing caller site: {:?}", line);
    }
    let metrics = logger.metrics();
    assert_eq!(contents.lines().count() as u64, metrics.total_logged());
    assert_eq!(
        metrics.total_logged() + metrics.suppressed(),
        (THREADS * PER_THREAD) as u64
    );
}
