//! Request counters backing the health endpoint.
//!
//! Both counters live behind one mutex so a reader never sees a torn pair.
//! Calculations hold an [`InFlightGuard`] for their whole duration; dropping the
//! guard decrements the in-flight counter on every exit path, including panics.

use parking_lot::Mutex;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Default)]
pub(crate) struct Counters {
    total_requests: u64,
    in_flight: u64,
}

/// Consistent copy of the counter pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MetricsSnapshot {
    pub total_requests: u64,
    pub in_flight: u64,
}

/// Process-wide request counters, shared by every handler
#[derive(Debug, Default)]
pub struct RequestMetrics {
    counters: Mutex<Counters>,
}

impl RequestMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a calculation. Increments both counters in one critical
    /// section and returns a guard that decrements `in_flight` when dropped.
    pub fn begin(&self) -> InFlightGuard<'_> {
        let mut counters = self.counters.lock();
        counters.total_requests += 1;
        counters.in_flight += 1;
        let sequence = counters.total_requests;
        drop(counters);

        InFlightGuard {
            metrics: self,
            sequence,
        }
    }

    /// Read both counters under the lock
    pub fn snapshot(&self) -> MetricsSnapshot {
        let counters = self.counters.lock();
        MetricsSnapshot {
            total_requests: counters.total_requests,
            in_flight: counters.in_flight,
        }
    }

    /// Like [`snapshot`](Self::snapshot), but gives up after `timeout`
    pub fn try_snapshot(&self, timeout: Duration) -> Option<MetricsSnapshot> {
        let counters = self.counters.try_lock_for(timeout)?;
        Some(MetricsSnapshot {
            total_requests: counters.total_requests,
            in_flight: counters.in_flight,
        })
    }

    /// Hold the counter lock, stalling every reader and writer until dropped
    #[cfg(test)]
    pub(crate) fn lock_for_test(&self) -> parking_lot::MutexGuard<'_, Counters> {
        self.counters.lock()
    }

    fn finish(&self) {
        let mut counters = self.counters.lock();
        counters.in_flight = counters.in_flight.saturating_sub(1);
    }
}

/// Scope guard for one in-flight calculation
#[derive(Debug)]
#[must_use = "dropping the guard immediately ends the in-flight window"]
pub struct InFlightGuard<'a> {
    metrics: &'a RequestMetrics,
    sequence: u64,
}

impl InFlightGuard<'_> {
    /// Value of `total_requests` right after this request was counted
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.metrics.finish();
    }
}
