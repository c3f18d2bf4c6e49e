//! Line formats shared by the built-in adapters
//!
//! - Template: placeholder substitution (default `%millisecond_format% [%level_string%] %body%`)
//! - Json: the event's JSON object on a single line

use super::error::Result;
use super::log_event::LogEvent;
use super::template::MessageTemplate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Template(MessageTemplate),
    Json,
}

impl OutputFormat {
    /// Pick the format from the common adapter config fields.
    pub fn from_options(template: Option<&str>, json_format: bool) -> Self {
        if json_format {
            OutputFormat::Json
        } else {
            OutputFormat::Template(template.map(MessageTemplate::new).unwrap_or_default())
        }
    }

    /// Render one event, without a trailing newline.
    pub fn format(&self, event: &LogEvent) -> Result<String> {
        match self {
            OutputFormat::Template(template) => Ok(template.render(event)),
            OutputFormat::Json => Ok(event.to_json()?),
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Template(MessageTemplate::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::log_event::CallSite;
    use crate::core::severity::Severity;

    fn sample() -> LogEvent {
        LogEvent::new(
            Severity::Info,
            "Request processed".to_string(),
            CallSite::new("server.rs", 12, "server::handle"),
        )
    }

    #[test]
    fn test_template_format() {
        let format = OutputFormat::from_options(Some("[%level_string%] %file%:%line% %body%"), false);
        assert_eq!(format.format(&sample()).unwrap(), "[Info] server.rs:12 Request processed");
    }

    #[test]
    fn test_json_wins_over_template() {
        let format = OutputFormat::from_options(Some("%body%"), true);
        let line = format.format(&sample()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["body"], "Request processed");
        assert_eq!(parsed["level_string"], "Info");
    }

    #[test]
    fn test_default_is_default_template() {
        let line = OutputFormat::default().format(&sample()).unwrap();
        assert!(line.ends_with(" [Info] Request processed"));
    }
}
