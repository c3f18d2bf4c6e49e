//! Log event captured at the moment a facade method is called

use super::severity::Severity;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::panic::Location;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Always three fractional digits, so `.000` and `.500` keep their zeros.
const MILLISECOND_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Function name recorded when the call site cannot name its enclosing function.
pub const UNKNOWN_FUNCTION: &str = "unknown";

/// Where a log call was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub file: String,
    pub line: u32,
    pub function: String,
}

impl CallSite {
    /// Location of the nearest caller that is not `#[track_caller]`.
    ///
    /// The enclosing function is not available this way; `function` is
    /// [`UNKNOWN_FUNCTION`]. The logging macros build their call site with
    /// [`CallSite::new`] instead.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            file: base_name(location.file()).to_string(),
            line: location.line(),
            function: UNKNOWN_FUNCTION.to_string(),
        }
    }

    /// Used by the logging macros, which know the enclosing function.
    pub fn new(file: &str, line: u32, function: &str) -> Self {
        Self {
            file: base_name(file).to_string(),
            line,
            function: function.to_string(),
        }
    }
}

fn base_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Unix seconds
    pub timestamp: i64,
    pub timestamp_format: String,
    /// Unix milliseconds
    pub millisecond: i64,
    pub millisecond_format: String,
    pub level: Severity,
    pub level_string: String,
    pub body: String,
    pub file: String,
    pub line: u32,
    pub function: String,
}

impl LogEvent {
    pub fn new(level: Severity, body: String, call_site: CallSite) -> Self {
        Self::at(Local::now(), level, body, call_site)
    }

    /// Build an event with an explicit wall-clock time; both string forms are
    /// rendered from the same instant.
    pub fn at(now: DateTime<Local>, level: Severity, body: String, call_site: CallSite) -> Self {
        Self {
            timestamp: now.timestamp(),
            timestamp_format: now.format(TIMESTAMP_FORMAT).to_string(),
            millisecond: now.timestamp_millis(),
            millisecond_format: now.format(MILLISECOND_FORMAT).to_string(),
            level,
            level_string: level.name().to_string(),
            body,
            file: call_site.file,
            line: call_site.line,
            function: call_site.function,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
