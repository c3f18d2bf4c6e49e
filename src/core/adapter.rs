//! Adapter trait for log output destinations

use super::{
    error::{LoggerError, Result},
    log_event::LogEvent,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Capability contract every output sink implements.
///
/// An adapter is created by its registered factory, configured once through
/// `initialize`, then receives every admitted event through `write`.
pub trait Adapter: Send {
    /// Stable type name, the same one the factory is registered under.
    fn name(&self) -> &str;

    fn initialize(&mut self, config: &AdapterConfig) -> Result<()>;

    fn write(&mut self, event: &LogEvent) -> Result<()>;

    /// Best-effort push of local buffers. Failures are the adapter's to report.
    fn flush(&mut self);
}

/// Adapter-specific configuration, carried untyped until the adapter reads it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdapterConfig(serde_json::Value);

impl AdapterConfig {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Capture any serializable config struct.
    pub fn from_serialize<T: Serialize>(config: &T) -> Result<Self> {
        Ok(Self(serde_json::to_value(config)?))
    }

    pub fn value(&self) -> &serde_json::Value {
        &self.0
    }

    /// Deserialize into the adapter's own config type. An absent (`null`)
    /// config deserializes from an empty object so all-default structs work.
    pub fn parse<T: DeserializeOwned>(&self, component: &str) -> Result<T> {
        let value = match &self.0 {
            serde_json::Value::Null => serde_json::Value::Object(serde_json::Map::new()),
            other => other.clone(),
        };
        serde_json::from_value(value).map_err(|e| LoggerError::config(component, e.to_string()))
    }
}

impl From<serde_json::Value> for AdapterConfig {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq, Default)]
    #[serde(default, deny_unknown_fields)]
    struct SampleConfig {
        path: String,
        verbose: bool,
    }

    #[test]
    fn test_parse_typed_config() {
        let config = AdapterConfig::new(json!({"path": "/tmp/x.log", "verbose": true}));
        let parsed: SampleConfig = config.parse("sample").unwrap();
        assert_eq!(parsed.path, "/tmp/x.log");
        assert!(parsed.verbose);
    }

    #[test]
    fn test_null_config_uses_defaults() {
        let parsed: SampleConfig = AdapterConfig::default().parse("sample").unwrap();
        assert_eq!(parsed, SampleConfig::default());
    }

    #[test]
    fn test_invalid_config_is_configuration_error() {
        let config = AdapterConfig::new(json!({"pth": "typo"}));
        let err = config.parse::<SampleConfig>("sample").unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { ref component, .. } if component == "sample"));
    }
}
