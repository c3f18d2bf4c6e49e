//! Placeholder substitution for rendering a `LogEvent` into one line
//!
//! Recognized tokens: `%timestamp%`, `%timestamp_format%`, `%millisecond%`,
//! `%millisecond_format%`, `%level%`, `%level_string%`, `%file%`, `%line%`,
//! `%function%`, `%body%`. Each token is substituted at its first occurrence
//! only; later repeats and unknown tokens are copied through verbatim.
//! Substituted values are never scanned again.

use super::log_event::LogEvent;

pub const DEFAULT_TEMPLATE: &str = "%millisecond_format% [%level_string%] %body%";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Timestamp,
    TimestampFormat,
    Millisecond,
    MillisecondFormat,
    Level,
    LevelString,
    File,
    Line,
    Function,
    Body,
}

const TOKENS: [(&str, Token); 10] = [
    ("%timestamp%", Token::Timestamp),
    ("%timestamp_format%", Token::TimestampFormat),
    ("%millisecond%", Token::Millisecond),
    ("%millisecond_format%", Token::MillisecondFormat),
    ("%level%", Token::Level),
    ("%level_string%", Token::LevelString),
    ("%file%", Token::File),
    ("%line%", Token::Line),
    ("%function%", Token::Function),
    ("%body%", Token::Body),
];

impl Token {
    fn index(self) -> usize {
        self as usize
    }

    fn write_value(self, event: &LogEvent, out: &mut String) {
        match self {
            Token::Timestamp => out.push_str(&event.timestamp.to_string()),
            Token::TimestampFormat => out.push_str(&event.timestamp_format),
            Token::Millisecond => out.push_str(&event.millisecond.to_string()),
            Token::MillisecondFormat => out.push_str(&event.millisecond_format),
            Token::Level => out.push_str(&event.level.as_u8().to_string()),
            Token::LevelString => out.push_str(&event.level_string),
            Token::File => out.push_str(&event.file),
            Token::Line => out.push_str(&event.line.to_string()),
            Token::Function => out.push_str(&event.function),
            Token::Body => out.push_str(&event.body),
        }
    }
}

/// Render `template` against `event`. Malformed templates are not an error;
/// whatever is not a recognized first-occurrence token is kept literally.
pub fn render(template: &str, event: &LogEvent) -> String {
    let mut out = String::with_capacity(template.len() + event.body.len());
    let mut used = [false; TOKENS.len()];
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        let matched = TOKENS
            .iter()
            .find(|(text, token)| !used[token.index()] && rest.starts_with(text));

        match matched {
            Some((text, token)) => {
                used[token.index()] = true;
                token.write_value(event, &mut out);
                rest = &rest[text.len()..];
            }
            None => {
                out.push('%');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// A template string bound once and rendered for many events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate(String);

impl MessageTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn render(&self, event: &LogEvent) -> String {
        render(&self.0, event)
    }
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::severity::Severity;

    fn event(level: Severity, body: &str) -> LogEvent {
        LogEvent {
            timestamp: 1_700_000_000,
            timestamp_format: "2023-11-14 22:13:20".to_string(),
            millisecond: 1_700_000_000_123,
            millisecond_format: "2023-11-14 22:13:20.123".to_string(),
            level,
            level_string: level.name().to_string(),
            body: body.to_string(),
            file: "console_test.rs".to_string(),
            line: 77,
            function: "adapters::console::tests::write".to_string(),
        }
    }

    #[test]
    fn test_level_and_body() {
        let rendered = render("%level_string% %body%", &event(Severity::Debug, "hi"));
        assert_eq!(rendered, "Debug hi");
    }

    #[test]
    fn test_default_template() {
        let rendered = MessageTemplate::default().render(&event(Severity::Warning, "low disk"));
        assert_eq!(rendered, "2023-11-14 22:13:20.123 [Warning] low disk");
    }

    #[test]
    fn test_every_token() {
        let rendered = render(
            "%timestamp%|%timestamp_format%|%millisecond%|%millisecond_format%|%level%|%level_string%|%file%|%line%|%function%|%body%",
            &event(Severity::Critical, "x"),
        );
        assert_eq!(
            rendered,
            "1700000000|2023-11-14 22:13:20|1700000000123|2023-11-14 22:13:20.123|2|Critical|console_test.rs|77|adapters::console::tests::write|x"
        );
    }

    #[test]
    fn test_token_substituted_once() {
        let rendered = render("%level% %level% %body% %body%", &event(Severity::Info, "b"));
        assert_eq!(rendered, "6 %level% b %body%");
    }

    #[test]
    fn test_body_is_not_rescanned() {
        let rendered = render("%body% %level_string%", &event(Severity::Alert, "%body% %level%"));
        assert_eq!(rendered, "%body% %level% Alert");
    }

    #[test]
    fn test_unknown_tokens_pass_through() {
        let rendered = render("%host% %% 100% [%file%:%line%]", &event(Severity::Info, ""));
        assert_eq!(rendered, "%host% %% 100% [console_test.rs:77]");
    }

    #[test]
    fn test_adjacent_percent() {
        assert_eq!(render("%%body%", &event(Severity::Info, "z")), "%z");
    }
}
