//! Declarative logger configuration
//!
//! ```
//! use rust_log_dispatcher::prelude::*;
//! use std::sync::Arc;
//!
//! let sink = MemorySink::new();
//! let mut registry = Registry::with_builtin_adapters();
//! registry.register("memory", MemoryAdapter::factory_with_sink(sink.clone())).unwrap();
//!
//! let config = LoggerConfig::from_json_str(r#"{
//!     "asynchronous": 256,
//!     "outputs": [
//!         { "adapter": "memory", "level": "warning", "config": { "format": "%level_string%: %body%" } }
//!     ]
//! }"#).unwrap();
//!
//! let logger = Logger::from_config(Arc::new(registry), &config).unwrap();
//! assert_eq!(logger.outputs(), vec![("memory".to_string(), Severity::Warning)]);
//!
//! logger.error("kept");
//! logger.flush();
//! assert_eq!(sink.lines(), vec!["Error: kept".to_string()]);
//! ```

use super::{
    error::{ErrorMode, Result},
    logger::{DuplicatePolicy, Logger, LoggerBuilder},
    registry::Registry,
    severity::Severity,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Queue capacity; absent means synchronous delivery.
    pub asynchronous: Option<usize>,
    /// Terminate the process on configuration errors.
    pub strict: bool,
    /// Refuse a second binding with an existing name instead of warning.
    pub reject_duplicates: bool,
    pub outputs: Vec<OutputConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub adapter: String,
    /// Level name, resolved leniently: unknown names mean `Debug`.
    #[serde(default = "default_level_name")]
    pub level: String,
    #[serde(default)]
    pub config: serde_json::Value,
}

fn default_level_name() -> String {
    Severity::Debug.name().to_string()
}

impl LoggerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn error_mode(&self) -> ErrorMode {
        if self.strict {
            ErrorMode::Strict
        } else {
            ErrorMode::Recoverable
        }
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        if self.reject_duplicates {
            DuplicatePolicy::Reject
        } else {
            DuplicatePolicy::Warn
        }
    }

    pub fn builder(&self, registry: Arc<Registry>) -> LoggerBuilder {
        let mut builder = LoggerBuilder::new()
            .registry(registry)
            .error_mode(self.error_mode())
            .duplicate_policy(self.duplicate_policy());

        for output in &self.outputs {
            builder = builder.attach(
                &output.adapter,
                Severity::parse(&output.level),
                &output.config,
            );
        }

        if let Some(capacity) = self.asynchronous {
            builder = builder.async_mode(capacity);
        }
        builder
    }
}

impl Logger {
    /// Build a logger from a [`LoggerConfig`].
    ///
    /// # Errors
    ///
    /// The first attach error, as with [`LoggerBuilder::build`].
    pub fn from_config(registry: Arc<Registry>, config: &LoggerConfig) -> Result<Logger> {
        config.builder(registry).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LoggerError;
    use crate::adapters::{MemoryAdapter, MemorySink};
    use crate::core::logger::DeliveryMode;

    fn registry_with_memory(sink: &MemorySink) -> Arc<Registry> {
        let mut registry = Registry::with_builtin_adapters();
        registry
            .register("memory", MemoryAdapter::factory_with_sink(sink.clone()))
            .unwrap();
        Arc::new(registry)
    }

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::from_json_str("{}").unwrap();
        assert_eq!(config, LoggerConfig::default());
        assert_eq!(config.error_mode(), ErrorMode::Recoverable);
        assert_eq!(config.duplicate_policy(), DuplicatePolicy::Warn);
    }

    #[test]
    fn test_levels_resolve_leniently() {
        let config = LoggerConfig::from_json_str(
            r#"{"outputs": [
                {"adapter": "memory", "level": "ERROR"},
                {"adapter": "memory", "level": "loud"},
                {"adapter": "memory"}
            ]}"#,
        )
        .unwrap();

        let logger = Logger::from_config(registry_with_memory(&MemorySink::new()), &config).unwrap();
        let levels: Vec<Severity> = logger.outputs().into_iter().map(|(_, level)| level).collect();
        assert_eq!(levels, vec![Severity::Error, Severity::Debug, Severity::Debug]);
        assert_eq!(logger.delivery_mode(), DeliveryMode::Synchronous);
    }

    #[test]
    fn test_asynchronous_and_duplicates() {
        let config = LoggerConfig {
            asynchronous: Some(8),
            reject_duplicates: true,
            outputs: vec![
                OutputConfig {
                    adapter: "memory".to_string(),
                    level: "info".to_string(),
                    config: serde_json::Value::Null,
                },
                OutputConfig {
                    adapter: "memory".to_string(),
                    level: "debug".to_string(),
                    config: serde_json::Value::Null,
                },
            ],
            ..LoggerConfig::default()
        };

        let result = Logger::from_config(registry_with_memory(&MemorySink::new()), &config);
        assert!(matches!(result, Err(LoggerError::DuplicateName { .. })));
    }

    #[test]
    fn test_memory_needs_explicit_registration() {
        let config =
            LoggerConfig::from_json_str(r#"{"outputs": [{"adapter": "memory"}]}"#).unwrap();

        let result = Logger::from_config(Arc::new(Registry::with_builtin_adapters()), &config);
        assert!(matches!(result, Err(LoggerError::UnknownAdapter { ref name }) if name == "memory"));

        let sink = MemorySink::new();
        let logger = Logger::from_config(registry_with_memory(&sink), &config).unwrap();
        logger.info("reachable");
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(LoggerConfig::from_json_str(r#"{"async": 10}"#).is_err());
    }
}
