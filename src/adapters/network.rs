//! Network adapter for remote logging
//!
//! Sends one rendered line per event to a TCP endpoint. A broken connection
//! surfaces as a write error; there is no reconnect or retry.

use crate::core::{
    Adapter, AdapterConfig, AdapterFactory, LogEvent, LoggerError, OutputFormat, Result,
};
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::sync::Arc;
use std::time::Duration;

pub const NAME: &str = "network";

const DEFAULT_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkConfig {
    /// `host:port` of the collector
    pub address: String,
    /// Connect and write timeout
    pub timeout_ms: u64,
    pub json_format: bool,
    pub format: Option<String>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            address: String::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            json_format: false,
            format: None,
        }
    }
}

pub struct NetworkAdapter {
    stream: Option<BufWriter<TcpStream>>,
    address: String,
    output_format: OutputFormat,
}

impl NetworkAdapter {
    pub fn new() -> Self {
        Self {
            stream: None,
            address: String::new(),
            output_format: OutputFormat::default(),
        }
    }

    pub fn factory() -> AdapterFactory {
        Arc::new(|| -> Box<dyn Adapter> { Box::new(NetworkAdapter::new()) })
    }

    fn connect(address: &str, timeout: Duration) -> Result<TcpStream> {
        let mut last_error = None;
        for addr in address.to_socket_addrs()? {
            match TcpStream::connect_timeout(&addr, timeout) {
                Ok(stream) => {
                    stream.set_write_timeout(Some(timeout))?;
                    // Enable TCP_NODELAY for low-latency logging
                    stream.set_nodelay(true)?;
                    return Ok(stream);
                }
                Err(e) => last_error = Some(e),
            }
        }
        Err(match last_error {
            Some(e) => e.into(),
            None => LoggerError::config(NAME, format!("'{}' resolved to no addresses", address)),
        })
    }
}

impl Default for NetworkAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Adapter for NetworkAdapter {
    fn name(&self) -> &str {
        NAME
    }

    fn initialize(&mut self, config: &AdapterConfig) -> Result<()> {
        let config: NetworkConfig = config.parse(NAME)?;
        if config.address.is_empty() {
            return Err(LoggerError::config(NAME, "address is required"));
        }

        let stream = Self::connect(&config.address, Duration::from_millis(config.timeout_ms))?;
        self.stream = Some(BufWriter::new(stream));
        self.address = config.address;
        self.output_format = OutputFormat::from_options(config.format.as_deref(), config.json_format);
        Ok(())
    }

    fn write(&mut self, event: &LogEvent) -> Result<()> {
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| LoggerError::writer("Network stream not connected"))?;

        let mut line = self.output_format.format(event)?;
        line.push('\n');
        stream.write_all(line.as_bytes()).map_err(|e| {
            LoggerError::writer(format!("Failed to send to {}: {}", self.address, e))
        })
    }

    fn flush(&mut self) {
        if let Some(ref mut stream) = self.stream {
            if let Err(e) = stream.flush() {
                eprintln!("[LOGGER ERROR] Network flush to {} failed: {}", self.address, e);
            }
        }
    }
}

impl Drop for NetworkAdapter {
    fn drop(&mut self) {
        self.flush();
    }
}
