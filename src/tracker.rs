//! Rolling-window success-rate tracking
//!
//! Keeps a chronological sequence of transfer outcomes and reports the
//! success rate over the trailing window. Eviction is lazy: expired
//! records are dropped on each `stats()` query instead of by a background
//! timer, which keeps the tracker single-threaded and deterministic under
//! an injected clock. Memory stays bounded because the scheduler queries
//! stats after every record.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
struct TransactionRecord {
    at: Instant,
    success: bool,
}

/// Snapshot of the rolling window at one query instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub total_transactions: usize,
    pub successful_transactions: usize,
    /// Percentage in [0, 100]. Defined as 0 when no transactions remain
    /// in the window.
    pub success_rate: f64,
    pub window_minutes: u64,
}

pub struct SuccessRateTracker {
    window: Duration,
    records: VecDeque<TransactionRecord>,
}

impl SuccessRateTracker {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            records: VecDeque::new(),
        }
    }

    /// Append one outcome. Timestamps must be non-decreasing (single
    /// producer, appends in submission order).
    pub fn record(&mut self, success: bool, at: Instant) {
        self.records.push_back(TransactionRecord { at, success });
    }

    /// Evict expired records, then compute stats over the remainder.
    ///
    /// The window boundary is inclusive: a record exactly `window` old
    /// still counts. Idempotent for a fixed `now` with no intervening
    /// `record()` calls.
    pub fn stats(&mut self, now: Instant) -> Stats {
        self.evict(now);

        let total = self.records.len();
        let successes = self.records.iter().filter(|r| r.success).count();
        let success_rate = if total > 0 {
            successes as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        Stats {
            total_transactions: total,
            successful_transactions: successes,
            success_rate,
            window_minutes: self.window.as_secs() / 60,
        }
    }

    fn evict(&mut self, now: Instant) {
        while let Some(oldest) = self.records.front() {
            if now.duration_since(oldest.at) > self.window {
                self.records.pop_front();
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(600);

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn empty_tracker_reports_zero_rate() {
        let mut tracker = SuccessRateTracker::new(WINDOW);
        let stats = tracker.stats(Instant::now());

        assert_eq!(stats.total_transactions, 0);
        assert_eq!(stats.successful_transactions, 0);
        assert_eq!(stats.success_rate, 0.0);
        assert_eq!(stats.window_minutes, 10);
    }

    #[test]
    fn counts_only_records_inside_the_window() {
        let base = Instant::now();
        let mut tracker = SuccessRateTracker::new(WINDOW);
        tracker.record(true, base);
        tracker.record(false, base + secs(100));
        tracker.record(true, base + secs(700));

        // Queried at t=750s: the t=0 and t=100 records are out, t=700 is in.
        let stats = tracker.stats(base + secs(750));
        assert_eq!(stats.total_transactions, 1);
        assert_eq!(stats.successful_transactions, 1);
    }

    #[test]
    fn window_boundary_is_inclusive() {
        let base = Instant::now();
        let mut tracker = SuccessRateTracker::new(WINDOW);
        tracker.record(true, base);
        tracker.record(true, base + secs(30));
        tracker.record(true, base + secs(600));

        // At t=630s the t=0 record is 630s old (evicted) and the t=30s
        // record is exactly 600s old (kept: boundary is inclusive).
        let stats = tracker.stats(base + secs(630));
        assert_eq!(stats.total_transactions, 2);

        // At t=650s the t=30s record has aged out too.
        let stats = tracker.stats(base + secs(650));
        assert_eq!(stats.total_transactions, 1);
    }

    #[test]
    fn success_rate_sequence_after_each_record() {
        let base = Instant::now();
        let mut tracker = SuccessRateTracker::new(WINDOW);
        let outcomes = [true, true, true, false];
        let expected_rates = [100.0, 100.0, 100.0, 75.0];

        for (i, (&outcome, &expected)) in outcomes.iter().zip(&expected_rates).enumerate() {
            let at = base + secs(i as u64);
            tracker.record(outcome, at);
            let stats = tracker.stats(at);
            assert_eq!(stats.success_rate, expected, "after record {}", i);
        }
    }

    #[test]
    fn stats_is_idempotent_for_a_fixed_now() {
        let base = Instant::now();
        let mut tracker = SuccessRateTracker::new(WINDOW);
        tracker.record(true, base);
        tracker.record(false, base + secs(1));

        let now = base + secs(2);
        let first = tracker.stats(now);
        let second = tracker.stats(now);
        assert_eq!(first, second);
    }

    #[test]
    fn evicted_records_never_come_back() {
        let base = Instant::now();
        let mut tracker = SuccessRateTracker::new(WINDOW);
        tracker.record(true, base);

        let stats = tracker.stats(base + secs(601));
        assert_eq!(stats.total_transactions, 0);

        // Later queries with a larger now stay empty.
        let stats = tracker.stats(base + secs(700));
        assert_eq!(stats.total_transactions, 0);
    }
}
