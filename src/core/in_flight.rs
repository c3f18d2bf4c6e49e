//! Count of queued-but-undelivered events, with a wait-for-zero

use parking_lot::{Condvar, Mutex};
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub struct InFlight {
    count: Mutex<usize>,
    drained: Condvar,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self) {
        *self.count.lock() += 1;
    }

    /// Mark one event delivered. Waking happens under the lock, so a waiter
    /// that sees zero also sees every write that preceded the decrement.
    pub fn done(&self) {
        let mut count = self.count.lock();
        *count = count.saturating_sub(1);
        if *count == 0 {
            self.drained.notify_all();
        }
    }

    pub fn get(&self) -> usize {
        *self.count.lock()
    }

    pub fn wait(&self) {
        let mut count = self.count.lock();
        while *count > 0 {
            self.drained.wait(&mut count);
        }
    }

    /// Like `wait`, giving up after `timeout`. Returns true once drained.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut count = self.count.lock();
        while *count > 0 {
            if self.drained.wait_until(&mut count, deadline).timed_out() {
                return *count == 0;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_wait_returns_immediately_when_idle() {
        let in_flight = InFlight::new();
        in_flight.wait();
        assert_eq!(in_flight.get(), 0);
    }

    #[test]
    fn test_wait_blocks_until_done() {
        let in_flight = Arc::new(InFlight::new());
        for _ in 0..3 {
            in_flight.add();
        }

        let worker = {
            let in_flight = Arc::clone(&in_flight);
            thread::spawn(move || {
                for _ in 0..3 {
                    thread::sleep(Duration::from_millis(5));
                    in_flight.done();
                }
            })
        };

        in_flight.wait();
        assert_eq!(in_flight.get(), 0);
        worker.join().unwrap();
    }

    #[test]
    fn test_wait_timeout_expires() {
        let in_flight = InFlight::new();
        in_flight.add();
        assert!(!in_flight.wait_timeout(Duration::from_millis(20)));
        in_flight.done();
        assert!(in_flight.wait_timeout(Duration::from_millis(20)));
    }
}
