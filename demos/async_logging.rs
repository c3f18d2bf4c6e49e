//! Async logging example
//!
//! Demonstrates queued delivery with several logging threads and the flush
//! guarantee.
//!
//! Run with: cargo run --example async_logging

use rust_log_dispatcher::prelude::*;
use serde_json::json;
use std::sync::Arc;
use std::thread;

fn main() -> Result<()> {
    println!("=== Rust Log Dispatcher - Async Logging Example ===\n");

    let sink = MemorySink::new();
    let mut registry = Registry::with_builtin_adapters();
    registry.register("collector", MemoryAdapter::factory_with_sink(sink.clone()))?;

    let mut logger = Logger::new(Arc::new(registry));
    logger.attach("console", Severity::Notice, json!({"format": "[%level_string%] %body%"}))?;
    logger.attach("collector", Severity::Debug, ())?;
    logger.set_asynchronous_with_capacity(1000);

    println!("1. Logging from the main thread:");
    for i in 0..100 {
        logger.info(format!("Message #{}", i));
    }
    logger.notice("Queued 100 info messages");

    println!("\n2. Logging from several threads:");
    let logger = Arc::new(logger);
    let mut handles = vec![];
    for thread_id in 0..4 {
        let logger = Arc::clone(&logger);
        handles.push(thread::spawn(move || {
            for i in 0..25 {
                logger.debug(format!("Thread {} - message {}", thread_id, i));
            }
            logger.notice(format!("Thread {} done", thread_id));
        }));
    }
    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    println!("\n3. Flush waits until every queued event is written:");
    logger.flush();
    println!("   Collector holds {} events", sink.len());
    println!("   Pending after flush: {}", logger.pending());

    let metrics = logger.metrics();
    println!("\n4. Metrics:");
    println!("   Accepted: {}", metrics.accepted());
    println!("   Dispatched: {}", metrics.dispatched());
    println!("   Producers blocked on a full queue: {}", metrics.backpressure_blocks());

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
