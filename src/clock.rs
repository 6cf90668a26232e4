//! Clock abstraction
//!
//! The scheduler never reads time or sleeps directly; it goes through this
//! trait so tests can simulate elapsed time deterministically.

use std::time::{Duration, Instant};

#[allow(async_fn_in_trait)]
pub trait Clock {
    fn now(&self) -> Instant;
    async fn sleep(&self, duration: Duration);
}

/// Real wall-clock time backed by the tokio timer.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
