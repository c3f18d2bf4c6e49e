//! Output binding: one live adapter attached to one logger

use super::{adapter::Adapter, error::Result, log_event::LogEvent, severity::Severity};
use parking_lot::Mutex;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

pub struct Binding {
    name: String,
    level: Severity,
    adapter: Mutex<Box<dyn Adapter>>,
}

/// Outcome of offering one event to one binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Written,
    Filtered,
    Failed,
}

impl Binding {
    pub fn new(name: impl Into<String>, level: Severity, adapter: Box<dyn Adapter>) -> Self {
        Self {
            name: name.into(),
            level,
            adapter: Mutex::new(adapter),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    pub fn admits(&self, level: Severity) -> bool {
        self.level.admits(level)
    }

    /// Write `event` if the threshold admits it. Errors and panics are
    /// reported to stderr and never reach the caller.
    pub fn offer(&self, event: &LogEvent) -> Delivery {
        if !self.admits(event.level) {
            return Delivery::Filtered;
        }

        let mut adapter = self.adapter.lock();
        let result: std::thread::Result<Result<()>> =
            catch_unwind(AssertUnwindSafe(|| adapter.write(event)));

        match result {
            Ok(Ok(())) => Delivery::Written,
            Ok(Err(e)) => {
                eprintln!(
                    "[LOGGER ERROR] Unable to write event to adapter '{}': {}",
                    self.name, e
                );
                Delivery::Failed
            }
            Err(panic_info) => {
                eprintln!(
                    "[LOGGER CRITICAL] Adapter '{}' panicked during write: {}. \
                     Other adapters continue to function.",
                    self.name,
                    panic_message(panic_info.as_ref())
                );
                Delivery::Failed
            }
        }
    }

    pub fn flush(&self) {
        let mut adapter = self.adapter.lock();
        if let Err(panic_info) = catch_unwind(AssertUnwindSafe(|| adapter.flush())) {
            eprintln!(
                "[LOGGER CRITICAL] Adapter '{}' panicked during flush: {}",
                self.name,
                panic_message(panic_info.as_ref())
            );
        }
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("name", &self.name)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

pub(crate) fn panic_message(panic_info: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::adapter::AdapterConfig;
    use crate::core::error::LoggerError;
    use crate::core::log_event::CallSite;

    struct Scripted {
        fail: bool,
        panic: bool,
        writes: usize,
    }

    impl Adapter for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }

        fn initialize(&mut self, _config: &AdapterConfig) -> Result<()> {
            Ok(())
        }

        fn write(&mut self, _event: &LogEvent) -> Result<()> {
            if self.panic {
                panic!("sink exploded");
            }
            self.writes += 1;
            if self.fail {
                Err(LoggerError::writer("simulated failure"))
            } else {
                Ok(())
            }
        }

        fn flush(&mut self) {}
    }

    fn scripted(fail: bool, panic: bool) -> Box<dyn Adapter> {
        Box::new(Scripted { fail, panic, writes: 0 })
    }

    fn event(level: Severity) -> LogEvent {
        LogEvent::new(level, "payload".to_string(), CallSite::caller())
    }

    #[test]
    fn test_threshold_filtering() {
        let binding = Binding::new("scripted", Severity::Warning, scripted(false, false));
        assert_eq!(binding.offer(&event(Severity::Emergency)), Delivery::Written);
        assert_eq!(binding.offer(&event(Severity::Warning)), Delivery::Written);
        assert_eq!(binding.offer(&event(Severity::Notice)), Delivery::Filtered);
    }

    #[test]
    fn test_write_failure_reported() {
        let binding = Binding::new("scripted", Severity::Debug, scripted(true, false));
        assert_eq!(binding.offer(&event(Severity::Info)), Delivery::Failed);
    }

    #[test]
    fn test_panic_isolated() {
        let binding = Binding::new("scripted", Severity::Debug, scripted(false, true));
        assert_eq!(binding.offer(&event(Severity::Info)), Delivery::Failed);
        // The mutex is not poisoned; the binding keeps working.
        binding.flush();
    }
}
