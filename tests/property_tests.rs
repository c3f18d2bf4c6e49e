//! Property-based tests for rust_log_dispatcher using proptest

use proptest::prelude::*;
use rust_log_dispatcher::core::{render, CallSite};
use rust_log_dispatcher::prelude::*;

fn any_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Emergency),
        Just(Severity::Alert),
        Just(Severity::Critical),
        Just(Severity::Error),
        Just(Severity::Warning),
        Just(Severity::Notice),
        Just(Severity::Info),
        Just(Severity::Debug),
    ]
}

fn event(level: Severity, body: &str) -> LogEvent {
    LogEvent::new(level, body.to_string(), CallSite::new("prop.rs", 1, "prop"))
}

// ============================================================================
// Severity Tests
// ============================================================================

proptest! {
    /// Names parse back to the same level regardless of case
    #[test]
    fn test_severity_name_case_insensitive(level in any_severity(), upper in any::<bool>()) {
        let name = if upper {
            level.name().to_uppercase()
        } else {
            level.name().to_lowercase()
        };
        prop_assert_eq!(Severity::parse(&name), level);
        prop_assert_eq!(name.parse::<Severity>().unwrap(), level);
    }

    /// Ordering follows the numeric values
    #[test]
    fn test_severity_ordering(a in any_severity(), b in any_severity()) {
        prop_assert_eq!(a <= b, a.as_u8() <= b.as_u8());
        prop_assert_eq!(a < b, a.as_u8() < b.as_u8());
    }

    /// A threshold admits exactly the levels at or below its number
    #[test]
    fn test_admission_rule(threshold in any_severity(), level in any_severity()) {
        prop_assert_eq!(threshold.admits(level), level.as_u8() <= threshold.as_u8());
    }

    /// Numeric conversion succeeds for 0..=7 and fails above
    #[test]
    fn test_numeric_conversion(value in any::<u8>()) {
        match Severity::try_from(value) {
            Ok(level) => prop_assert_eq!(level.as_u8(), value),
            Err(LoggerError::UnknownLevel(v)) => {
                prop_assert!(value > 7);
                prop_assert_eq!(v, value);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    /// Unknown names fall back to Debug
    #[test]
    fn test_unknown_names_default_to_debug(name in "[a-z]{0,12}") {
        let known = Severity::ALL.iter().any(|l| l.name().eq_ignore_ascii_case(&name));
        prop_assume!(!known);
        prop_assert_eq!(Severity::parse(&name), Severity::Debug);
    }
}

// ============================================================================
// Template Tests
// ============================================================================

proptest! {
    /// Text without any '%' passes through untouched
    #[test]
    fn test_render_plain_text_verbatim(template in "[^%]*", body in ".*") {
        let rendered = render(&template, &event(Severity::Info, &body));
        prop_assert_eq!(rendered, template);
    }

    /// The body is inserted as-is, even when it looks like a token
    #[test]
    fn test_render_body_not_rescanned(body in ".*") {
        let rendered = render("%body%", &event(Severity::Notice, &body));
        prop_assert_eq!(rendered, body);
    }

    /// Level tokens render the level's number and name
    #[test]
    fn test_render_level_tokens(level in any_severity()) {
        let rendered = render("%level%|%level_string%", &event(level, "x"));
        prop_assert_eq!(rendered, format!("{}|{}", level.as_u8(), level.name()));
    }

    /// Rendering never panics on arbitrary templates
    #[test]
    fn test_render_no_panic(template in ".*", body in ".*") {
        let _ = render(&template, &event(Severity::Debug, &body));
    }
}

// ============================================================================
// Event Tests
// ============================================================================

proptest! {
    /// JSON output parses back into an equal event
    #[test]
    fn test_event_json(level in any_severity(), body in ".*", line in 1u32..100_000) {
        let original = LogEvent::new(level, body, CallSite::new("src/lib.rs", line, "run"));
        let json = original.to_json().unwrap();
        let parsed: LogEvent = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&parsed, &original);
        prop_assert_eq!(parsed.file.as_str(), "lib.rs");
    }
}
