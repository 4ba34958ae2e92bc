//! Tests for the default process-wide logger
//!
//! The default instance is shared by the whole test binary, so everything
//! runs inside a single test.

use leveled_logger::{global, SharedBuffer, Severity};

#[test]
fn test_global_logger_lifecycle() {
    let buffer = SharedBuffer::new();
    global::set_output(buffer.clone());

    assert_eq!(global::logger().minimum_severity(), Severity::Info);

    global::debug("hidden at INFO");
    global::info("hello world");
    assert!(!buffer.contents().contains("hidden at INFO"));
    assert!(buffer.contents().contains("[INFO] hello world"));

    global::set_minimum_severity(Severity::Debug);
    global::set_caller_depth(1);
    let line = line!() + 1;
    global::debug("cache warm");
    assert!(buffer
        .contents()
        .contains(&format!("[DEBUG] cache warm | global_tests.rs:{}", line)));

    global::success("done");
    global::notice("heads up");
    global::warn("careful");
    global::error("broken");
    let fatal = global::fatal("stop");
    assert_eq!(fatal.message(), "stop");

    buffer.clear();
    global::set_minimum_severity("nonsense");
    assert_eq!(global::logger().minimum_severity(), Severity::Info);
    assert!(buffer.contents().contains("[WARN]"));
    assert!(buffer.contents().contains("Defaulting to INFO"));
}
