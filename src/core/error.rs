//! Error types for the log dispatcher

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// No factory is registered under the requested adapter name
    #[error("Unknown adapter '{name}': no factory registered under this name")]
    UnknownAdapter { name: String },

    /// Name already taken, either in a registry or (with `DuplicatePolicy::Reject`) on a logger
    #[error("Adapter name '{name}' is already in use")]
    DuplicateName { name: String },

    /// The adapter rejected the configuration handed to `initialize`
    #[error("Adapter '{name}' failed to initialize: {source}")]
    AdapterInitFailed {
        name: String,
        #[source]
        source: Box<LoggerError>,
    },

    /// Numeric severity outside Emergency(0)..=Debug(7)
    #[error("Severity level {0} is illegal")]
    UnknownLevel(u8),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// The drain task is gone and can no longer accept events
    #[error("Logger already stopped")]
    LoggerStopped,

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    pub fn unknown_adapter(name: impl Into<String>) -> Self {
        LoggerError::UnknownAdapter { name: name.into() }
    }

    pub fn duplicate_name(name: impl Into<String>) -> Self {
        LoggerError::DuplicateName { name: name.into() }
    }

    pub fn adapter_init(name: impl Into<String>, source: LoggerError) -> Self {
        LoggerError::AdapterInitFailed {
            name: name.into(),
            source: Box::new(source),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }

    /// True for the misconfiguration family that strict mode treats as fatal.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            LoggerError::UnknownAdapter { .. }
                | LoggerError::DuplicateName { .. }
                | LoggerError::AdapterInitFailed { .. }
                | LoggerError::UnknownLevel(_)
                | LoggerError::InvalidConfiguration { .. }
        )
    }
}

/// How a logger reacts to configuration errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorMode {
    /// Return the error to the caller.
    #[default]
    Recoverable,
    /// Print the error and terminate the process.
    Strict,
}

impl ErrorMode {
    /// Pass `result` through, or terminate on a configuration error under `Strict`.
    pub fn apply<T>(self, result: Result<T>) -> Result<T> {
        match (self, result) {
            (ErrorMode::Strict, Err(e)) if e.is_configuration() => strict::exit_with(&e),
            (_, result) => result,
        }
    }
}

/// Fatal-on-misconfiguration compatibility helpers.
///
/// Two details differ from the fatal path these helpers stand in for, which
/// printed to stdout and exited with status 0: the message goes to stderr and
/// the exit status is [`EXIT_CODE`](strict::EXIT_CODE) (1), so a supervising
/// process can tell a misconfiguration from a clean exit. Rendered events
/// also always carry three millisecond digits in `millisecond_format`, where
/// the older layout trimmed trailing zeros.
pub mod strict {
    use super::{LoggerError, Result};

    /// Exit status used when strict mode terminates the process.
    pub const EXIT_CODE: i32 = 1;

    pub fn exit_with(error: &LoggerError) -> ! {
        eprintln!("[LOGGER CRITICAL] {}", error);
        std::process::exit(EXIT_CODE)
    }

    /// Unwrap `result` or terminate the process, whatever the error kind.
    ///
    /// ```no_run
    /// use rust_log_dispatcher::core::{error::strict, Registry};
    /// use rust_log_dispatcher::adapters::MemoryAdapter;
    ///
    /// let mut registry = Registry::new();
    /// strict::exit_on_error(registry.register("memory", MemoryAdapter::factory()));
    /// ```
    pub fn exit_on_error<T>(result: Result<T>) -> T {
        match result {
            Ok(value) => value,
            Err(e) => exit_with(&e),
        }
    }
}
