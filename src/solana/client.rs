use crate::entity::BlockReference;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::debug;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::RpcSendTransactionConfig;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::VersionedTransaction;
use solana_transaction_status::{TransactionStatus, UiTransactionEncoding};
use std::sync::Arc;

/// Create a Solana client with confirmed commitment
pub fn create_solana_client(rpc_url: &str) -> Arc<RpcClient> {
    let client = RpcClient::new_with_commitment(rpc_url.to_string(), CommitmentConfig::confirmed());

    Arc::new(client)
}

/// Opens a fresh ledger session; each pipeline phase holds one only while it runs
pub type LedgerConnector = Arc<dyn Fn() -> Arc<dyn LedgerClient> + Send + Sync>;

/// Connector opening a new RPC client for every phase
pub fn rpc_connector(rpc_url: &str) -> LedgerConnector {
    let rpc_url = rpc_url.to_string();
    Arc::new(move || create_solana_client(&rpc_url) as Arc<dyn LedgerClient>)
}

/// The ledger calls the swap pipeline depends on
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Latest blockhash and the last block height it stays valid for
    async fn latest_block_reference(&self) -> Result<BlockReference>;

    /// Per-slot prioritization fees recently paid by transactions touching `accounts`
    async fn recent_prioritization_fees(&self, accounts: &[Pubkey]) -> Result<Vec<u64>>;

    /// Submits a signed transaction once, without client-side retries
    async fn send_transaction(&self, transaction: &VersionedTransaction) -> Result<Signature>;

    /// Current status of a signature, `None` while the node has not seen it
    async fn signature_status(&self, signature: &Signature) -> Result<Option<TransactionStatus>>;
}

#[async_trait]
impl LedgerClient for RpcClient {
    async fn latest_block_reference(&self) -> Result<BlockReference> {
        let (blockhash, last_valid_block_height) = self
            .get_latest_blockhash_with_commitment(self.commitment())
            .await
            .map_err(|e| anyhow!("Failed to get latest blockhash: {}", e))?;

        Ok(BlockReference {
            blockhash,
            last_valid_block_height,
        })
    }

    async fn recent_prioritization_fees(&self, accounts: &[Pubkey]) -> Result<Vec<u64>> {
        let fees = self
            .get_recent_prioritization_fees(accounts)
            .await
            .map_err(|e| anyhow!("Failed to get recent prioritization fees: {}", e))?;

        debug!("Prioritization fee response: {:?}", fees);

        Ok(fees.iter().map(|fee| fee.prioritization_fee).collect())
    }

    async fn send_transaction(&self, transaction: &VersionedTransaction) -> Result<Signature> {
        let config = RpcSendTransactionConfig {
            encoding: Some(UiTransactionEncoding::Base64),
            ..RpcSendTransactionConfig::default()
        };

        self.send_transaction_with_config(transaction, config)
            .await
            .map_err(|e| anyhow!("{}", e))
    }

    async fn signature_status(&self, signature: &Signature) -> Result<Option<TransactionStatus>> {
        let response = self
            .get_signature_statuses(&[*signature])
            .await
            .map_err(|e| anyhow!("Failed to get signature status: {}", e))?;

        Ok(response.value.into_iter().next().flatten())
    }
}
