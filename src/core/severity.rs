//! Severity levels, ordered from most to least urgent

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lower numeric value means higher urgency, so the derived `Ord` reads
/// `Emergency < Alert < ... < Debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Severity {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    Notice = 5,
    Info = 6,
    #[default]
    Debug = 7,
}

impl Severity {
    pub const ALL: [Severity; 8] = [
        Severity::Emergency,
        Severity::Alert,
        Severity::Critical,
        Severity::Error,
        Severity::Warning,
        Severity::Notice,
        Severity::Info,
        Severity::Debug,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Severity::Emergency => "Emergency",
            Severity::Alert => "Alert",
            Severity::Critical => "Critical",
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Notice => "Notice",
            Severity::Info => "Info",
            Severity::Debug => "Debug",
        }
    }

    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Case-insensitive lookup that never fails: unknown or empty names
    /// resolve to `Debug`. Use `str::parse` for a strict variant.
    pub fn parse(name: &str) -> Severity {
        name.parse().unwrap_or(Severity::Debug)
    }

    /// A binding with threshold `self` receives events at `level` and anything more urgent.
    #[inline]
    pub fn admits(self, level: Severity) -> bool {
        self >= level
    }

    #[cfg(feature = "console")]
    pub fn color_code(self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Emergency | Severity::Alert => BrightRed,
            Severity::Critical | Severity::Error => Red,
            Severity::Warning => Yellow,
            Severity::Notice => Cyan,
            Severity::Info => Green,
            Severity::Debug => Blue,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EMERGENCY" => Ok(Severity::Emergency),
            "ALERT" => Ok(Severity::Alert),
            "CRITICAL" => Ok(Severity::Critical),
            "ERROR" => Ok(Severity::Error),
            "WARNING" => Ok(Severity::Warning),
            "NOTICE" => Ok(Severity::Notice),
            "INFO" => Ok(Severity::Info),
            "DEBUG" => Ok(Severity::Debug),
            _ => Err(format!("Invalid severity level: '{}'", s)),
        }
    }
}

impl From<Severity> for u8 {
    fn from(level: Severity) -> u8 {
        level.as_u8()
    }
}

impl TryFrom<u8> for Severity {
    type Error = LoggerError;

    fn try_from(value: u8) -> Result<Self, LoggerError> {
        Severity::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(LoggerError::UnknownLevel(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_values() {
        for (idx, level) in Severity::ALL.iter().enumerate() {
            assert_eq!(level.as_u8() as usize, idx);
        }
    }

    #[test]
    fn test_parse_permissive() {
        assert_eq!(Severity::parse("WARNING"), Severity::Warning);
        assert_eq!(Severity::parse("emerGENCY"), Severity::Emergency);
        assert_eq!(Severity::parse("cRITICAL"), Severity::Critical);
        assert_eq!(Severity::parse("bogus"), Severity::Debug);
        assert_eq!(Severity::parse(""), Severity::Debug);
    }

    #[test]
    fn test_strict_from_str() {
        assert_eq!("notice".parse::<Severity>(), Ok(Severity::Notice));
        assert!("warn".parse::<Severity>().is_err());
    }

    #[test]
    fn test_admission_rule() {
        let threshold = Severity::Warning;
        assert!(threshold.admits(Severity::Emergency));
        assert!(threshold.admits(Severity::Warning));
        assert!(!threshold.admits(Severity::Notice));
        assert!(!threshold.admits(Severity::Debug));
    }

    #[test]
    fn test_try_from_u8() {
        for level in Severity::ALL {
            assert_eq!(Severity::try_from(level.as_u8()).ok(), Some(level));
        }
        assert!(matches!(Severity::try_from(8), Err(LoggerError::UnknownLevel(8))));
        assert!(matches!(Severity::try_from(u8::MAX), Err(LoggerError::UnknownLevel(255))));

        let via_into: Result<Severity, LoggerError> = 3u8.try_into();
        assert_eq!(via_into.ok(), Some(Severity::Error));
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&Severity::Notice).unwrap();
        assert_eq!(json, "5");
        let back: Severity = serde_json::from_str("2").unwrap();
        assert_eq!(back, Severity::Critical);
        assert!(serde_json::from_str::<Severity>("12").is_err());
    }
}
