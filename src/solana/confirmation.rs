use crate::solana::client::LedgerClient;
use log::{debug, warn};
use solana_sdk::signature::Signature;
use solana_transaction_status::TransactionConfirmationStatus;
use std::time::Duration;
use tokio::time::{sleep, Instant};

pub const DEFAULT_CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Polls the signature status every `poll_interval` until the node reports a
/// status or `timeout` elapses. Query errors count as "not yet confirmed".
///
/// Returns `None` on timeout.
pub async fn await_confirmation(
    client: &dyn LedgerClient,
    signature: &Signature,
    timeout: Duration,
    poll_interval: Duration,
) -> Option<TransactionConfirmationStatus> {
    let started = Instant::now();

    while started.elapsed() < timeout {
        match client.signature_status(signature).await {
            Ok(Some(status)) => {
                if let Some(err) = &status.err {
                    warn!("Transaction {} failed on chain: {}", signature, err);
                }
                return Some(status.confirmation_status());
            }
            Ok(None) => debug!("Transaction {} not yet seen", signature),
            Err(e) => warn!("Failed to check transaction status: {}", e),
        }

        sleep(poll_interval).await;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::BlockReference;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use solana_sdk::pubkey::Pubkey;
    use solana_sdk::transaction::{TransactionError, VersionedTransaction};
    use solana_transaction_status::TransactionStatus;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Answers status queries from a script, then `None` forever
    struct ScriptedStatuses {
        script: Mutex<Vec<Result<Option<TransactionStatus>>>>,
        queries: AtomicUsize,
    }

    impl ScriptedStatuses {
        fn new(mut script: Vec<Result<Option<TransactionStatus>>>) -> Self {
            script.reverse();
            Self {
                script: Mutex::new(script),
                queries: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl LedgerClient for ScriptedStatuses {
        async fn latest_block_reference(&self) -> Result<BlockReference> {
            unreachable!()
        }

        async fn recent_prioritization_fees(&self, _accounts: &[Pubkey]) -> Result<Vec<u64>> {
            unreachable!()
        }

        async fn send_transaction(&self, _transaction: &VersionedTransaction) -> Result<Signature> {
            unreachable!()
        }

        async fn signature_status(&self, _signature: &Signature) -> Result<Option<TransactionStatus>> {
            self.queries.fetch_add(1, Ordering::SeqCst);
            self.script.lock().unwrap().pop().unwrap_or(Ok(None))
        }
    }

    fn status(confirmation: TransactionConfirmationStatus) -> TransactionStatus {
        TransactionStatus {
            slot: 10,
            confirmations: None,
            status: Ok(()),
            err: None,
            confirmation_status: Some(confirmation),
        }
    }

    #[tokio::test]
    async fn test_returns_first_status_after_transient_errors() {
        let client = ScriptedStatuses::new(vec![
            Err(anyhow!("connection reset")),
            Ok(None),
            Ok(Some(status(TransactionConfirmationStatus::Confirmed))),
            Ok(Some(status(TransactionConfirmationStatus::Finalized))),
        ]);

        let result = await_confirmation(
            &client,
            &Signature::new_unique(),
            Duration::from_secs(5),
            Duration::from_millis(5),
        )
        .await;

        assert_eq!(result, Some(TransactionConfirmationStatus::Confirmed));
        assert_eq!(client.queries.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_failed_transaction_status_is_still_returned() {
        let failed = TransactionStatus {
            status: Err(TransactionError::InsufficientFundsForFee),
            err: Some(TransactionError::InsufficientFundsForFee),
            ..status(TransactionConfirmationStatus::Processed)
        };
        let client = ScriptedStatuses::new(vec![Ok(None), Ok(Some(failed))]);

        let result = await_confirmation(
            &client,
            &Signature::new_unique(),
            Duration::from_secs(5),
            Duration::from_millis(5),
        )
        .await;

        assert_eq!(result, Some(TransactionConfirmationStatus::Processed));
        assert_eq!(client.queries.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_times_out_without_status() {
        let client = ScriptedStatuses::new(vec![]);

        let result = await_confirmation(
            &client,
            &Signature::new_unique(),
            Duration::from_millis(50),
            Duration::from_millis(10),
        )
        .await;

        assert_eq!(result, None);
        assert!(client.queries.load(Ordering::SeqCst) >= 1);
    }

    #[tokio::test]
    async fn test_zero_timeout_never_polls() {
        let client = ScriptedStatuses::new(vec![Ok(Some(status(
            TransactionConfirmationStatus::Processed,
        )))]);

        let result = await_confirmation(
            &client,
            &Signature::new_unique(),
            Duration::ZERO,
            Duration::from_millis(10),
        )
        .await;

        assert_eq!(result, None);
        assert_eq!(client.queries.load(Ordering::SeqCst), 0);
    }
}
