//! Configuration for the ping bot

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Solana Keepalive Ping
#[derive(Parser, Debug, Clone)]
#[command(name = "sol-ping")]
#[command(about = "Ping-pongs 1 lamport between two keypairs for a steady stream of ledger activity", long_about = None)]
pub struct Config {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// RPC URL
    #[arg(long, env = "RPC_URL", default_value = "https://api.mainnet-beta.solana.com")]
    pub rpc_url: String,

    /// Keypair file for the first account (party A)
    #[arg(long, env = "KEYPAIR_A", default_value = "keys/key1.json")]
    pub keypair_a: PathBuf,

    /// Keypair file for the second account (party B)
    #[arg(long, env = "KEYPAIR_B", default_value = "keys/key2.json")]
    pub keypair_b: PathBuf,

    /// Priority fee in microlamports per compute unit
    #[arg(long, env = "PRIORITY_FEE", default_value = "20000")]
    pub priority_fee: u64,

    /// Wait between transfer attempts, in milliseconds
    #[arg(long, env = "WAIT_TIME_MS", default_value = "10000")]
    pub wait_time_ms: u64,

    /// Rolling success-rate window, in milliseconds
    #[arg(long, env = "WINDOW_DURATION_MS", default_value = "600000")]
    pub window_duration_ms: u64,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the transfer loop
    Run,
    /// Send a single test transfer to verify connectivity, then exit
    Test,
}
