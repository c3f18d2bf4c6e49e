//! File adapter implementation

use crate::core::{
    Adapter, AdapterConfig, AdapterFactory, LogEvent, LoggerError, OutputFormat, Result,
};
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

pub const NAME: &str = "file";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Log file path; missing parent directories are created
    pub filename: PathBuf,
    pub json_format: bool,
    pub format: Option<String>,
}

/// Appends one rendered line per event through a buffered writer.
/// Lines reach the disk on `flush` or when the buffer fills.
pub struct FileAdapter {
    writer: Option<BufWriter<File>>,
    path: Option<PathBuf>,
    output_format: OutputFormat,
}

impl FileAdapter {
    pub fn new() -> Self {
        Self {
            writer: None,
            path: None,
            output_format: OutputFormat::default(),
        }
    }

    pub fn factory() -> AdapterFactory {
        Arc::new(|| -> Box<dyn Adapter> { Box::new(FileAdapter::new()) })
    }

    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }
}

impl Default for FileAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Adapter for FileAdapter {
    fn name(&self) -> &str {
        NAME
    }

    fn initialize(&mut self, config: &AdapterConfig) -> Result<()> {
        let config: FileConfig = config.parse(NAME)?;
        if config.filename.as_os_str().is_empty() {
            return Err(LoggerError::config(NAME, "filename is required"));
        }

        if let Some(parent) = config.filename.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.filename)?;

        self.writer = Some(BufWriter::new(file));
        self.path = Some(config.filename);
        self.output_format = OutputFormat::from_options(config.format.as_deref(), config.json_format);
        Ok(())
    }

    fn write(&mut self, event: &LogEvent) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::writer("File writer not initialized"))?;

        let mut line = self.output_format.format(event)?;
        line.push('\n');
        writer.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) {
        if let Some(ref mut writer) = self.writer {
            if let Err(e) = writer.flush() {
                eprintln!(
                    "[LOGGER ERROR] File flush failed for '{}': {}",
                    self.path.as_ref().map(|p| p.display().to_string()).unwrap_or_default(),
                    e
                );
            }
        }
    }
}

impl Drop for FileAdapter {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        self.flush();
    }
}
