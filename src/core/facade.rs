//! One plain and one formatted method per severity level
//!
//! Every method is `#[track_caller]`, so the recorded file and line are the
//! caller's, never a frame inside this crate. A method cannot see which
//! function called it, so events from these methods carry `function`
//! `"unknown"`. The macros (`info!`, `error!`, ... and `log!`) record the
//! enclosing function as well; use them where `%function%` matters.
//!
//! ```
//! use rust_log_dispatcher::prelude::*;
//!
//! let logger = Logger::default();
//! logger.warning("disk almost full");
//! logger.warning_fmt(format_args!("{}% used on {}", 93, "/var"));
//! ```

use super::{logger::Logger, severity::Severity};
use std::fmt;

impl Logger {
    #[inline]
    #[track_caller]
    pub fn emergency(&self, body: impl Into<String>) {
        self.log(Severity::Emergency, body);
    }

    #[inline]
    #[track_caller]
    pub fn emergency_fmt(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Emergency, args.to_string());
    }

    #[inline]
    #[track_caller]
    pub fn alert(&self, body: impl Into<String>) {
        self.log(Severity::Alert, body);
    }

    #[inline]
    #[track_caller]
    pub fn alert_fmt(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Alert, args.to_string());
    }

    #[inline]
    #[track_caller]
    pub fn critical(&self, body: impl Into<String>) {
        self.log(Severity::Critical, body);
    }

    #[inline]
    #[track_caller]
    pub fn critical_fmt(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Critical, args.to_string());
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, body: impl Into<String>) {
        self.log(Severity::Error, body);
    }

    #[inline]
    #[track_caller]
    pub fn error_fmt(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, args.to_string());
    }

    #[inline]
    #[track_caller]
    pub fn warning(&self, body: impl Into<String>) {
        self.log(Severity::Warning, body);
    }

    #[inline]
    #[track_caller]
    pub fn warning_fmt(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Warning, args.to_string());
    }

    #[inline]
    #[track_caller]
    pub fn notice(&self, body: impl Into<String>) {
        self.log(Severity::Notice, body);
    }

    #[inline]
    #[track_caller]
    pub fn notice_fmt(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Notice, args.to_string());
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, body: impl Into<String>) {
        self.log(Severity::Info, body);
    }

    #[inline]
    #[track_caller]
    pub fn info_fmt(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, args.to_string());
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, body: impl Into<String>) {
        self.log(Severity::Debug, body);
    }

    #[inline]
    #[track_caller]
    pub fn debug_fmt(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Debug, args.to_string());
    }
}
