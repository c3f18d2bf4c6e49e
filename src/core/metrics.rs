//! Logger metrics for observability
//!
//! Counters for accepted, delivered and failed events, flush passes and
//! backpressure stalls on the asynchronous queue.

use std::sync::atomic::{AtomicU64, Ordering};

/// # Example
///
/// ```
/// use rust_log_dispatcher::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_accepted();
/// metrics.record_dispatched();
///
/// assert_eq!(metrics.accepted(), 1);
/// assert_eq!(metrics.dispatched(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Events handed to the dispatch core
    accepted: AtomicU64,

    /// Events that completed a dispatch pass over the bindings
    dispatched: AtomicU64,

    /// Individual binding writes that failed or panicked
    write_failures: AtomicU64,

    /// Completed flush passes
    flushes: AtomicU64,

    /// Times `log` found the async queue full and had to wait
    backpressure_blocks: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            accepted: AtomicU64::new(0),
            dispatched: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            flushes: AtomicU64::new(0),
            backpressure_blocks: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn accepted(&self) -> u64 {
        self.accepted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dispatched(&self) -> u64 {
        self.dispatched.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn flushes(&self) -> u64 {
        self.flushes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn backpressure_blocks(&self) -> u64 {
        self.backpressure_blocks.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_accepted(&self) -> u64 {
        self.accepted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dispatched(&self) -> u64 {
        self.dispatched.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_flush(&self) -> u64 {
        self.flushes.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_backpressure(&self) -> u64 {
        self.backpressure_blocks.fetch_add(1, Ordering::Relaxed)
    }

    /// Failed writes as a percentage of dispatched events (0.0 - 100.0)
    pub fn failure_rate(&self) -> f64 {
        let dispatched = self.dispatched() as f64;
        if dispatched == 0.0 {
            0.0
        } else {
            (self.write_failures() as f64 / dispatched) * 100.0
        }
    }

    pub fn reset(&self) {
        self.accepted.store(0, Ordering::Relaxed);
        self.dispatched.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
        self.flushes.store(0, Ordering::Relaxed);
        self.backpressure_blocks.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Snapshot of the current values
    fn clone(&self) -> Self {
        Self {
            accepted: AtomicU64::new(self.accepted()),
            dispatched: AtomicU64::new(self.dispatched()),
            write_failures: AtomicU64::new(self.write_failures()),
            flushes: AtomicU64::new(self.flushes()),
            backpressure_blocks: AtomicU64::new(self.backpressure_blocks()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.accepted(), 0);
        assert_eq!(metrics.dispatched(), 0);
        assert_eq!(metrics.write_failures(), 0);
        assert_eq!(metrics.flushes(), 0);
        assert_eq!(metrics.backpressure_blocks(), 0);
    }

    #[test]
    fn test_record_returns_previous() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_accepted(), 0);
        assert_eq!(metrics.record_accepted(), 1);
        assert_eq!(metrics.accepted(), 2);
    }

    #[test]
    fn test_failure_rate() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.failure_rate(), 0.0);

        for _ in 0..20 {
            metrics.record_dispatched();
        }
        metrics.record_write_failure();
        let rate = metrics.failure_rate();
        assert!((4.9..=5.1).contains(&rate), "Failure rate was {}", rate);
    }

    #[test]
    fn test_clone_is_snapshot() {
        let metrics = LoggerMetrics::new();
        metrics.record_flush();
        let snapshot = metrics.clone();
        metrics.record_flush();
        assert_eq!(snapshot.flushes(), 1);
        assert_eq!(metrics.flushes(), 2);

        metrics.reset();
        assert_eq!(metrics.flushes(), 0);
    }
}
