//! Outbound request pacing.
//!
//! # Data Flow
//! ```text
//! send() call
//!     → IntervalGate::acquire()
//!     → lock last-request stamp (serializes concurrent callers)
//!     → sleep until previous stamp + interval
//!     → stamp now, release, proceed to transport
//! ```
//!
//! # Design Decisions
//! - Strict interval gate, one slot: no burst capacity, unlike a token
//!   bucket
//! - The gate is an owned field of each client, never process-global, so
//!   independent clients pace independently
//! - The stamp mutex is held across the sleep; that hold is what gives
//!   concurrent callers a global minimum spacing

use tokio::sync::Mutex;
use tokio::time::{sleep_until, Duration, Instant};

/// Enforces a minimum interval between consecutive acquisitions.
///
/// A zero interval disables pacing entirely.
#[derive(Debug)]
pub struct IntervalGate {
    interval: Duration,
    last: Mutex<Option<Instant>>,
}

impl IntervalGate {
    /// Create a gate with the given minimum spacing.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Mutex::new(None),
        }
    }

    /// Wait until at least `interval` has elapsed since the previous
    /// acquisition, then claim the slot.
    ///
    /// Callers blocked here are served in lock-acquisition order; across
    /// all concurrent callers no two acquisitions complete less than
    /// `interval` apart.
    pub async fn acquire(&self) {
        if self.interval.is_zero() {
            return;
        }

        let mut last = self.last.lock().await;
        if let Some(prev) = *last {
            sleep_until(prev + self.interval).await;
        }
        *last = Some(Instant::now());
    }

    /// The configured minimum spacing.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_zero_interval_never_waits() {
        let gate = IntervalGate::new(Duration::ZERO);
        let start = Instant::now();
        for _ in 0..10 {
            gate.acquire().await;
        }
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sequential_acquires_are_spaced() {
        let gate = IntervalGate::new(Duration::from_millis(250));
        let start = Instant::now();
        for _ in 0..4 {
            gate.acquire().await;
        }
        // First acquire is free; the remaining three each wait a full interval.
        assert!(start.elapsed() >= Duration::from_millis(750));
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_acquires_are_globally_spaced() {
        let interval = Duration::from_millis(250);
        let gate = Arc::new(IntervalGate::new(interval));

        let mut handles = Vec::new();
        for _ in 0..5 {
            let gate = Arc::clone(&gate);
            handles.push(tokio::spawn(async move {
                gate.acquire().await;
                Instant::now()
            }));
        }

        let mut stamps = Vec::new();
        for handle in handles {
            stamps.push(handle.await.unwrap());
        }
        stamps.sort();

        for pair in stamps.windows(2) {
            assert!(pair[1] - pair[0] >= interval);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_independent_gates_do_not_interfere() {
        let a = IntervalGate::new(Duration::from_millis(250));
        let b = IntervalGate::new(Duration::from_millis(250));

        let start = Instant::now();
        a.acquire().await;
        b.acquire().await;
        assert!(start.elapsed() < Duration::from_millis(250));
    }
}
