//! Basic dispatcher usage example
//!
//! Demonstrates synchronous logging to the console at every severity and
//! how a binding's threshold filters events.
//!
//! Run with: cargo run --example basic_usage

use rust_log_dispatcher::prelude::*;
use rust_log_dispatcher::{info, warning};
use serde_json::json;

fn main() -> Result<()> {
    println!("=== Rust Log Dispatcher - Basic Usage Example ===\n");

    // Console adapter with a template that shows where each call came from
    let logger = Logger::builder()
        .attach(
            "console",
            Severity::Debug,
            json!({"color": true, "format": "%timestamp_format% [%level_string%] %file%:%line% %body%"}),
        )
        .build()?;

    println!("1. Logging at every severity:");
    logger.emergency("This is an emergency message");
    logger.alert("This is an alert message");
    logger.critical("This is a critical message");
    logger.error("This is an error message");
    logger.warning("This is a warning message");
    logger.notice("This is a notice message");
    logger.info("This is an info message");
    logger.debug("This is a debug message");

    println!("\n2. Formatting and macros:");
    let port = 8080;
    logger.info_fmt(format_args!("Listening on port {}", port));
    info!(logger, "Macro call records the function name too");
    warning!(logger, "Retry attempt {} of {}", 3, 5);

    println!("\n3. A second binding with a higher threshold:");
    logger.detach("console");
    logger.attach("console", Severity::Warning, json!({"format": "[%level_string%] %body%"}))?;
    logger.info("Info message (hidden)");
    logger.warning("Warning message (visible)");

    println!("\n4. Numeric levels:");
    logger.log_raw(2, "Level 2 is Critical")?;
    if let Err(e) = logger.log_raw(9, "Out of range") {
        println!("   Rejected: {}", e);
    }

    logger.flush();
    println!("\n=== Example completed successfully! ===");
    Ok(())
}
