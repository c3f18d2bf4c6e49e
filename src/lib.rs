//! # Rust Log Dispatcher
//!
//! A level-filtered log dispatcher that fans each message out to pluggable
//! output adapters, synchronously or through a background drain queue.
//!
//! ## Features
//!
//! - **Eight severities**: syslog-style `Emergency` (0) through `Debug` (7),
//!   with a per-output threshold
//! - **Pluggable adapters**: register a factory under a name, attach it with
//!   a JSON-shaped config; console, file and network are built in, and a
//!   memory adapter records into a sink you keep a handle on
//! - **Templates**: `%token%` substitution over the event fields, or JSON lines
//! - **Asynchronous delivery**: bounded queue, one drain thread, and a flush
//!   that waits for every queued event to be written
//!
//! ## Quick start
//!
//! ```
//! use rust_log_dispatcher::prelude::*;
//!
//! let logger = Logger::builder()
//!     .attach("console", Severity::Info, serde_json::json!({"format": "[%level_string%] %body%"}))
//!     .build()
//!     .expect("console adapter is built in");
//!
//! logger.info("service started");
//! logger.debug("filtered out by the Info threshold");
//! logger.flush();
//! ```

pub mod adapters;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::adapters::{
        ConsoleAdapter, ConsoleConfig, FileAdapter, FileConfig, MemoryAdapter, MemoryConfig,
        MemorySink, NetworkAdapter, NetworkConfig,
    };
    pub use crate::core::{
        Adapter, AdapterConfig, AdapterFactory, CallSite, DeliveryMode, DuplicatePolicy,
        ErrorMode, LogEvent, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics,
        MessageTemplate, OutputFormat, Registry, Result, Severity,
    };
}

pub use adapters::{ConsoleAdapter, FileAdapter, MemoryAdapter, MemorySink, NetworkAdapter};
pub use core::{
    Adapter, AdapterConfig, AdapterFactory, CallSite, DeliveryMode, DuplicatePolicy, ErrorMode,
    LogEvent, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, MessageTemplate,
    OutputFormat, Registry, Result, Severity,
};
