//! Shared data types for the transfer loop

use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};

/// One of the two fixed accounts exchanging value.
///
/// Immutable after load; the keypair is only used when this party is the
/// sender of an attempt.
pub struct Party {
    pub pubkey: Pubkey,
    pub keypair: Keypair,
}

impl Party {
    pub fn new(keypair: Keypair) -> Self {
        Self {
            pubkey: keypair.pubkey(),
            keypair,
        }
    }
}

/// Which way the next transfer goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    AToB,
    BToA,
}

impl Direction {
    pub fn flip(self) -> Self {
        match self {
            Direction::AToB => Direction::BToA,
            Direction::BToA => Direction::AToB,
        }
    }
}

/// A single directional transfer, built fresh for each iteration and
/// consumed immediately by the ledger client.
#[derive(Debug, Clone, Copy)]
pub struct TransferAttempt {
    pub from: Pubkey,
    pub to: Pubkey,
    pub lamports: u64,
    /// Priority fee in microlamports per compute unit, constant for the
    /// lifetime of the process.
    pub priority_fee: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_flip_round_trips() {
        assert_eq!(Direction::AToB.flip(), Direction::BToA);
        assert_eq!(Direction::BToA.flip(), Direction::AToB);
        assert_eq!(Direction::AToB.flip().flip(), Direction::AToB);
    }
}
