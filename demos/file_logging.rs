//! File logging example
//!
//! Demonstrates file and JSON-lines output, configured both in code and
//! from a JSON document.
//!
//! Run with: cargo run --example file_logging

use rust_log_dispatcher::prelude::*;
use serde_json::json;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Log Dispatcher - File Logging Example ===\n");

    println!("1. Plain and JSON files from the builder:");
    {
        let logger = Logger::builder()
            .attach(
                "file",
                Severity::Info,
                FileConfig {
                    filename: "logs/app.log".into(),
                    json_format: false,
                    format: Some("%millisecond_format% [%level_string%] %file%:%line% %body%".to_string()),
                },
            )
            .attach("file", Severity::Debug, json!({"filename": "logs/app.jsonl", "json_format": true}))
            .build()?;

        logger.info("Application started");
        logger.debug("Only in the JSON file");
        logger.error("Something went wrong");
        // Dropping the logger flushes both files
    }
    println!("   Wrote logs/app.log and logs/app.jsonl");

    println!("\n2. From a configuration document:");
    let config = LoggerConfig::from_json_str(
        r#"{
            "asynchronous": 128,
            "outputs": [
                { "adapter": "console", "level": "warning" },
                { "adapter": "file", "level": "debug",
                  "config": { "filename": "logs/configured.log", "format": "%level_string% %body%" } }
            ]
        }"#,
    )?;
    let logger = Logger::from_config(Arc::new(Registry::with_builtin_adapters()), &config)?;
    for i in 0..10 {
        logger.debug(format!("Background step {}", i));
    }
    logger.warning("Visible on the console and in the file");
    logger.flush();
    println!("   Wrote logs/configured.log");

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
