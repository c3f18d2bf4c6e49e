//! Logging macros for ergonomic log message formatting.
//!
//! Unlike the facade methods, the macros also record the name of the
//! enclosing function.
//!
//! # Examples
//!
//! ```
//! use rust_log_dispatcher::prelude::*;
//! use rust_log_dispatcher::info;
//!
//! let logger = Logger::default();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Name of the function the macro is expanded in, without its module path.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = name.strip_suffix("::f").unwrap_or(name);
        let name = name.trim_end_matches("::{{closure}}");
        match name.rfind("::") {
            Some(pos) => &name[pos + 2..],
            None => name,
        }
    }};
}

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use rust_log_dispatcher::prelude::*;
/// # let logger = Logger::default();
/// use rust_log_dispatcher::log;
/// log!(logger, Severity::Info, "Simple message");
/// log!(logger, Severity::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_at(
            $level,
            format!($($arg)+),
            $crate::core::CallSite::new(file!(), line!(), $crate::__function_name!()),
        )
    };
}

/// Log an emergency-level message.
///
/// ```
/// # use rust_log_dispatcher::prelude::*;
/// # let logger = Logger::default();
/// use rust_log_dispatcher::emergency;
/// emergency!(logger, "Power lost on rack {}", 4);
/// ```
#[macro_export]
macro_rules! emergency {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Emergency, $($arg)+)
    };
}

/// Log an alert-level message.
#[macro_export]
macro_rules! alert {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Alert, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Critical, $($arg)+)
    };
}

/// Log an error-level message.
///
/// ```
/// # use rust_log_dispatcher::prelude::*;
/// # let logger = Logger::default();
/// use rust_log_dispatcher::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log a notice-level message.
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Notice, $($arg)+)
    };
}

/// Log an info-level message.
///
/// ```
/// # use rust_log_dispatcher::prelude::*;
/// # let logger = Logger::default();
/// use rust_log_dispatcher::info;
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::adapters::{MemoryAdapter, MemorySink};
    use crate::core::{Logger, Registry, Severity};
    use std::sync::Arc;

    fn memory_logger() -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        let mut registry = Registry::new();
        registry
            .register("memory", MemoryAdapter::factory_with_sink(sink.clone()))
            .unwrap();
        let logger = Logger::new(Arc::new(registry));
        logger.attach("memory", Severity::Debug, ()).unwrap();
        (logger, sink)
    }

    #[test]
    fn test_log_macro_records_call_site() {
        let (logger, sink) = memory_logger();
        log!(logger, Severity::Notice, "Formatted: {}", 42);
        let line = line!() - 1;

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].body, "Formatted: 42");
        assert_eq!(events[0].level, Severity::Notice);
        assert_eq!(events[0].file, "macros.rs");
        assert_eq!(events[0].line, line);
        assert_eq!(events[0].function, "test_log_macro_records_call_site");
    }

    #[test]
    fn test_function_name_inside_closure() {
        let (logger, sink) = memory_logger();
        let emit = || info!(logger, "from closure");
        emit();
        assert_eq!(sink.events()[0].function, "test_function_name_inside_closure");
    }

    #[test]
    fn test_level_macros() {
        let (logger, sink) = memory_logger();
        emergency!(logger, "m{}", 0);
        alert!(logger, "m{}", 1);
        critical!(logger, "m{}", 2);
        error!(logger, "m{}", 3);
        warning!(logger, "m{}", 4);
        notice!(logger, "m{}", 5);
        info!(logger, "m{}", 6);
        debug!(logger, "m{}", 7);

        let levels: Vec<Severity> = sink.events().iter().map(|e| e.level).collect();
        assert_eq!(levels, Severity::ALL.to_vec());
        let bodies: Vec<String> = sink.events().into_iter().map(|e| e.body).collect();
        assert_eq!(bodies, (0..8).map(|i| format!("m{}", i)).collect::<Vec<_>>());
    }
}
