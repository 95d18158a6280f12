//! Installing a custom default logger
//!
//! Kept in its own test binary so no other test touches the default first.

use common_logger::prelude::*;

#[test]
fn test_init_default_logger_once() {
    let buffer = MemorySink::new();
    let custom = Logger::builder()
        .log_level("debug")
        .writer(buffer.clone().into())
        .name("app")
        .build();

    let installed = init_default_logger(custom).expect("first install succeeds");
    assert_eq!(installed.name(), Some("app"));
    assert!(std::ptr::eq(installed, default_logger()));

    default_logger().debug("through the default");
    assert_eq!(buffer.lines().len(), 1);

    let second = init_default_logger(Logger::default());
    assert!(matches!(second, Err(LoggerError::AlreadyInitialized)));
    assert_eq!(default_logger().level(), LogLevel::Debug);
}
