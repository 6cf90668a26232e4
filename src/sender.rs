//! Raw JSON-RPC transaction submission
//!
//! Sends transactions with `sendTransaction` and polls
//! `getSignatureStatuses` until confirmation or timeout.

use solana_sdk::{signature::Signature, transaction::Transaction};
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

use crate::ledger::LedgerError;

/// Interval between confirmation polls.
const CONFIRM_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Re-send an unconfirmed transaction every this many polls in case the
/// original broadcast was dropped.
const RESEND_EVERY_POLLS: u32 = 10;

/// Transaction sender over standard RPC.
pub struct RpcSender {
    client: reqwest::Client,
    rpc_url: String,
}

impl RpcSender {
    pub fn new(rpc_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap();

        Self { client, rpc_url }
    }

    async fn post(&self, body: serde_json::Value) -> Result<serde_json::Value, LedgerError> {
        let response = self
            .client
            .post(&self.rpc_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| LedgerError::Network(e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| LedgerError::Parse(e.to_string()))
    }

    /// Send a signed transaction via sendTransaction.
    pub async fn send(&self, tx: &Transaction) -> Result<Signature, LedgerError> {
        let tx_bytes =
            bincode::serialize(tx).map_err(|e| LedgerError::Serialize(e.to_string()))?;
        let tx_base64 = base64::encode(&tx_bytes);

        debug!("Sending tx: {} bytes (limit 1232)", tx_bytes.len());

        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "sendTransaction",
            "params": [
                tx_base64,
                {
                    "encoding": "base64",
                    "skipPreflight": true,
                    "maxRetries": 0
                }
            ]
        });

        let json = self.post(body).await?;

        if let Some(error) = json.get("error") {
            return Err(LedgerError::Rejected(error.to_string()));
        }

        let sig_str = json["result"]
            .as_str()
            .ok_or_else(|| LedgerError::Parse("No result in response".to_string()))?;

        Signature::from_str(sig_str).map_err(|e| LedgerError::Parse(e.to_string()))
    }

    /// Check one transaction signature status.
    /// - None = not found yet
    /// - Some(true) = confirmed/finalized
    /// - Some(false) = failed with error
    pub async fn signature_status(
        &self,
        signature: &Signature,
    ) -> Result<Option<bool>, LedgerError> {
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "getSignatureStatuses",
            "params": [
                [signature.to_string()],
                { "searchTransactionHistory": false }
            ]
        });

        let json = self.post(body).await?;

        if let Some(error) = json.get("error") {
            return Err(LedgerError::Rejected(error.to_string()));
        }

        let value = json["result"]["value"]
            .as_array()
            .and_then(|v| v.first())
            .cloned()
            .ok_or_else(|| LedgerError::Parse("Expected array in result.value".to_string()))?;

        if value.is_null() {
            return Ok(None);
        }
        if let Some(err) = value.get("err") {
            if !err.is_null() {
                return Ok(Some(false));
            }
        }
        let status = value
            .get("confirmationStatus")
            .and_then(|s| s.as_str())
            .map(|s| s == "confirmed" || s == "finalized");

        Ok(status)
    }

    /// Send and poll until confirmed, failed on chain, or out of retries.
    pub async fn send_and_confirm(
        &self,
        tx: &Transaction,
        max_retries: u32,
    ) -> Result<Signature, LedgerError> {
        let signature = self.send(tx).await?;

        for i in 0..max_retries {
            tokio::time::sleep(CONFIRM_POLL_INTERVAL).await;

            match self.signature_status(&signature).await {
                Ok(Some(true)) => {
                    return Ok(signature);
                }
                Ok(Some(false)) => {
                    return Err(LedgerError::Rejected(signature.to_string()));
                }
                Ok(None) => {
                    // Not found yet, keep polling
                    if i > 0 && i % RESEND_EVERY_POLLS == 0 {
                        let _ = self.send(tx).await;
                    }
                }
                Err(e) => {
                    // Network error, keep trying
                    if i == max_retries - 1 {
                        return Err(e);
                    }
                }
            }
        }

        Err(LedgerError::Timeout(signature.to_string()))
    }
}
