//! Console adapter implementation

use crate::core::{
    Adapter, AdapterConfig, AdapterFactory, LogEvent, OutputFormat, Result, Severity,
};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::sync::Arc;

pub const NAME: &str = "console";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Color the whole line by severity
    pub color: bool,
    /// Emit the event as one JSON object per line instead of the template
    pub json_format: bool,
    /// Line template; the default is `%millisecond_format% [%level_string%] %body%`
    pub format: Option<String>,
}

pub struct ConsoleAdapter {
    use_colors: bool,
    output_format: OutputFormat,
}

impl ConsoleAdapter {
    pub fn new() -> Self {
        Self {
            use_colors: false,
            output_format: OutputFormat::default(),
        }
    }

    pub fn factory() -> AdapterFactory {
        Arc::new(|| -> Box<dyn Adapter> { Box::new(ConsoleAdapter::new()) })
    }

    #[cfg(feature = "console")]
    fn paint(&self, line: String, level: Severity) -> String {
        use colored::Colorize;
        if self.use_colors {
            line.color(level.color_code()).to_string()
        } else {
            line
        }
    }

    #[cfg(not(feature = "console"))]
    fn paint(&self, line: String, _level: Severity) -> String {
        line
    }
}

impl Default for ConsoleAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Adapter for ConsoleAdapter {
    fn name(&self) -> &str {
        NAME
    }

    fn initialize(&mut self, config: &AdapterConfig) -> Result<()> {
        let config: ConsoleConfig = config.parse(NAME)?;
        self.use_colors = config.color;
        self.output_format = OutputFormat::from_options(config.format.as_deref(), config.json_format);
        Ok(())
    }

    fn write(&mut self, event: &LogEvent) -> Result<()> {
        let line = self.paint(self.output_format.format(event)?, event.level);

        // Error and more urgent go to stderr, everything else to stdout
        if event.level <= Severity::Error {
            writeln!(std::io::stderr().lock(), "{}", line)?;
        } else {
            writeln!(std::io::stdout().lock(), "{}", line)?;
        }
        Ok(())
    }

    fn flush(&mut self) {
        // Flush both stdout and stderr since we write to both
        if let Err(e) = std::io::stdout().flush().and_then(|()| std::io::stderr().flush()) {
            eprintln!("[LOGGER ERROR] Console flush failed: {}", e);
        }
    }
}
