//! In-memory adapter that keeps every event it receives
//!
//! Handy for tests and for embedding applications that forward log lines
//! somewhere of their own.
//!
//! ```
//! use rust_log_dispatcher::prelude::*;
//! use rust_log_dispatcher::adapters::{MemoryAdapter, MemorySink};
//! use std::sync::Arc;
//!
//! let sink = MemorySink::new();
//! let mut registry = Registry::new();
//! registry.register("memory", MemoryAdapter::factory_with_sink(sink.clone())).unwrap();
//!
//! let logger = Logger::new(Arc::new(registry));
//! logger.attach("memory", Severity::Info, serde_json::json!({"format": "%body%"})).unwrap();
//! logger.info("kept");
//! logger.debug("filtered");
//!
//! assert_eq!(sink.lines(), vec!["kept".to_string()]);
//! ```

use crate::core::{Adapter, AdapterConfig, AdapterFactory, LogEvent, OutputFormat, Result};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const NAME: &str = "memory";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MemoryConfig {
    pub json_format: bool,
    pub format: Option<String>,
}

#[derive(Debug, Default)]
struct Records {
    events: Vec<LogEvent>,
    lines: Vec<String>,
    flushes: usize,
}

/// Shared handle onto what one or more memory adapters have recorded.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Records>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<LogEvent> {
        self.records.lock().events.clone()
    }

    /// Rendered lines, in write order
    pub fn lines(&self) -> Vec<String> {
        self.records.lock().lines.clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn flush_count(&self) -> usize {
        self.records.lock().flushes
    }

    pub fn clear(&self) {
        let mut records = self.records.lock();
        records.events.clear();
        records.lines.clear();
        records.flushes = 0;
    }
}

pub struct MemoryAdapter {
    sink: MemorySink,
    output_format: OutputFormat,
}

impl MemoryAdapter {
    pub fn new(sink: MemorySink) -> Self {
        Self {
            sink,
            output_format: OutputFormat::default(),
        }
    }

    /// Factory whose adapters each get a private sink.
    pub fn factory() -> AdapterFactory {
        Arc::new(|| -> Box<dyn Adapter> { Box::new(MemoryAdapter::new(MemorySink::new())) })
    }

    /// Factory whose adapters all record into `sink`.
    pub fn factory_with_sink(sink: MemorySink) -> AdapterFactory {
        Arc::new(move || -> Box<dyn Adapter> { Box::new(MemoryAdapter::new(sink.clone())) })
    }

    pub fn sink(&self) -> &MemorySink {
        &self.sink
    }
}

impl Adapter for MemoryAdapter {
    fn name(&self) -> &str {
        NAME
    }

    fn initialize(&mut self, config: &AdapterConfig) -> Result<()> {
        let config: MemoryConfig = config.parse(NAME)?;
        self.output_format = OutputFormat::from_options(config.format.as_deref(), config.json_format);
        Ok(())
    }

    fn write(&mut self, event: &LogEvent) -> Result<()> {
        let line = self.output_format.format(event)?;
        let mut records = self.sink.records.lock();
        records.events.push(event.clone());
        records.lines.push(line);
        Ok(())
    }

    fn flush(&mut self) {
        self.sink.records.lock().flushes += 1;
    }
}
