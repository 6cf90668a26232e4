//! Transfer scheduling loop
//!
//! Alternates 1-lamport transfers between the two parties, records every
//! outcome into the success-rate tracker, and waits a fixed interval
//! between attempts. A failed attempt consumes one wait interval exactly
//! like a successful one; there is no retry, no backoff, and no error
//! path out of the loop.

use std::time::Duration;
use tracing::{info, warn};

use crate::clock::Clock;
use crate::ledger::LedgerClient;
use crate::tracker::{Stats, SuccessRateTracker};
use crate::types::{Direction, Party, TransferAttempt};

/// Lamports moved per transfer.
const TRANSFER_LAMPORTS: u64 = 1;

pub struct TransferScheduler<L, C> {
    party_a: Party,
    party_b: Party,
    ledger: L,
    clock: C,
    tracker: SuccessRateTracker,
    priority_fee: u64,
    wait: Duration,
    direction: Direction,
}

impl<L: LedgerClient, C: Clock> TransferScheduler<L, C> {
    pub fn new(
        party_a: Party,
        party_b: Party,
        ledger: L,
        clock: C,
        tracker: SuccessRateTracker,
        priority_fee: u64,
        wait: Duration,
    ) -> Self {
        Self {
            party_a,
            party_b,
            ledger,
            clock,
            tracker,
            priority_fee,
            wait,
            direction: Direction::AToB,
        }
    }

    /// Run until the process is terminated.
    pub async fn run(&mut self) {
        loop {
            self.run_once().await;
        }
    }

    /// One attempt in the current direction, then the fixed wait.
    /// Flips the direction for the next call regardless of outcome.
    pub async fn run_once(&mut self) {
        let (sender, receiver) = match self.direction {
            Direction::AToB => (&self.party_a, &self.party_b),
            Direction::BToA => (&self.party_b, &self.party_a),
        };

        let attempt = TransferAttempt {
            from: sender.pubkey,
            to: receiver.pubkey,
            lamports: TRANSFER_LAMPORTS,
            priority_fee: self.priority_fee,
        };

        info!("Transferring from {} to {}...", attempt.from, attempt.to);

        match self.ledger.submit_and_confirm(&attempt, &sender.keypair).await {
            Ok(signature) => {
                info!("Completed. TX signature: {}", signature);
                self.tracker.record(true, self.clock.now());
            }
            Err(e) => {
                warn!("Transfer failed: {}", e);
                self.tracker.record(false, self.clock.now());
            }
        }

        let stats = self.tracker.stats(self.clock.now());
        info!(
            "Successful transactions: {:.1}% ({}/{} in last {} minutes)",
            stats.success_rate,
            stats.successful_transactions,
            stats.total_transactions,
            stats.window_minutes,
        );

        self.direction = self.direction.flip();

        info!("Waiting {} seconds...", self.wait.as_secs());
        self.clock.sleep(self.wait).await;
    }

    /// Current rolling-window stats.
    pub fn stats(&mut self) -> Stats {
        self.tracker.stats(self.clock.now())
    }
}
