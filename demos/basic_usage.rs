//! Basic logger usage example
//!
//! Demonstrates the default logger, derived loggers and custom layouts.
//!
//! Run with: cargo run --example basic_usage

use common_logger::prelude::*;
use common_logger::{info, TimeEncoder};
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Common Logger - Basic Usage Example ===\n");

    // Process-wide default: info level, stdout, caller capture
    let logger = default_logger();

    println!("1. Default logger:");
    logger.debug("This is a debug message (hidden)");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");

    println!("\n2. Derived loggers leave the original untouched:");
    let verbose = logger.with_level("debug").with_name("worker");
    verbose.debug("Visible through the derived logger");
    logger.debug("Still hidden on the default logger");

    println!("\n3. Fields and macros:");
    let request = verbose.with_fields([("request_id", "abc-123")]);
    request.log_with_fields(
        LogLevel::Info,
        "Request served",
        &[Field::new("latency", Duration::from_millis(42))],
    );
    info!(request, "Processed {} items", 100);

    println!("\n4. Custom layout on stderr:");
    let layout = EncoderConfig::default()
        .with_message_key("message")
        .with_time_encoder(TimeEncoder::Rfc3339);
    let custom = logger
        .with_encoding(layout)
        .with_writer(SharedWriter::stderr());
    custom.warn("Rendered with the custom layout");

    logger.sync()?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
