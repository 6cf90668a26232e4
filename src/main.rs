//! Solana Keepalive Ping
//!
//! Endlessly ping-pongs 1 lamport between two keypairs with a priority
//! fee attached, waiting a fixed interval between transfers, and reports
//! the transaction success rate over the trailing 10 minutes. Useful as
//! a liveness probe or a steady source of observable ledger activity.

mod clock;
mod config;
mod keys;
mod ledger;
mod scheduler;
mod sender;
mod tracker;
mod types;

use clap::Parser;
use config::Config;
use ledger::{LedgerClient, RpcLedgerClient};
use std::time::Duration;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    let _subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = Config::parse();

    let party_a = types::Party::new(keys::load_keypair(&config.keypair_a)?);
    let party_b = types::Party::new(keys::load_keypair(&config.keypair_b)?);

    info!("Loaded keys.");
    info!("{}: {}", config.keypair_a.display(), party_a.pubkey);
    info!("{}: {}", config.keypair_b.display(), party_b.pubkey);

    info!("RPC URL: {}", config.rpc_url);
    info!(
        "Configured to wait {} seconds between transactions.",
        config.wait_time_ms / 1000
    );
    info!(
        "Running with a priority fee of {} microlamports.",
        config.priority_fee
    );

    let ledger = RpcLedgerClient::new(config.rpc_url.clone());

    if let Some(config::Command::Test) = config.command {
        info!("Sending test transfer...");
        let attempt = types::TransferAttempt {
            from: party_a.pubkey,
            to: party_b.pubkey,
            lamports: 1,
            priority_fee: config.priority_fee,
        };
        match ledger.submit_and_confirm(&attempt, &party_a.keypair).await {
            Ok(sig) => {
                info!("✓ Test transfer confirmed: {}", sig);
            }
            Err(e) => {
                error!("✗ Test transfer failed: {}", e);
                return Err(e.into());
            }
        }
        return Ok(());
    }

    let tracker =
        tracker::SuccessRateTracker::new(Duration::from_millis(config.window_duration_ms));

    let mut scheduler = scheduler::TransferScheduler::new(
        party_a,
        party_b,
        ledger,
        clock::SystemClock,
        tracker,
        config.priority_fee,
        Duration::from_millis(config.wait_time_ms),
    );

    info!("Starting transfer loop.");
    scheduler.run().await;

    Ok(())
}
