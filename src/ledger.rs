//! Ledger client
//!
//! Builds, signs, and submits transfer transactions. Each transaction is
//! a compute budget pair (unit limit + priority fee price) followed by a
//! system transfer.

use solana_client::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    compute_budget::ComputeBudgetInstruction,
    signature::{Keypair, Signature},
    system_instruction,
    transaction::Transaction,
};

use crate::sender::RpcSender;
use crate::types::TransferAttempt;

/// Compute unit limit for a bare transfer plus compute budget instructions.
const TRANSFER_CU_LIMIT: u32 = 5_000;

/// Confirmation polls before giving up (500ms apart, ~30s total).
const CONFIRM_MAX_RETRIES: u32 = 60;

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Transaction rejected: {0}")]
    Rejected(String),
    #[error("Timeout waiting for confirmation: {0}")]
    Timeout(String),
}

/// Submission contract the scheduler depends on.
#[allow(async_fn_in_trait)]
pub trait LedgerClient {
    async fn submit_and_confirm(
        &self,
        transfer: &TransferAttempt,
        signer: &Keypair,
    ) -> Result<Signature, LedgerError>;
}

/// Ledger client backed by a Solana RPC node.
pub struct RpcLedgerClient {
    rpc_client: RpcClient,
    sender: RpcSender,
}

impl RpcLedgerClient {
    pub fn new(rpc_url: String) -> Self {
        let rpc_client =
            RpcClient::new_with_commitment(rpc_url.clone(), CommitmentConfig::confirmed());

        Self {
            rpc_client,
            sender: RpcSender::new(rpc_url),
        }
    }
}

impl LedgerClient for RpcLedgerClient {
    async fn submit_and_confirm(
        &self,
        transfer: &TransferAttempt,
        signer: &Keypair,
    ) -> Result<Signature, LedgerError> {
        let recent_blockhash = self
            .rpc_client
            .get_latest_blockhash()
            .map_err(|e| LedgerError::Network(e.to_string()))?;

        let instructions = vec![
            ComputeBudgetInstruction::set_compute_unit_limit(TRANSFER_CU_LIMIT),
            ComputeBudgetInstruction::set_compute_unit_price(transfer.priority_fee),
            system_instruction::transfer(&transfer.from, &transfer.to, transfer.lamports),
        ];

        let mut tx = Transaction::new_with_payer(&instructions, Some(&transfer.from));
        tx.sign(&[signer], recent_blockhash);

        self.sender.send_and_confirm(&tx, CONFIRM_MAX_RETRIES).await
    }
}
