use solana_sdk::signature::Signature;
use solana_transaction_status::TransactionConfirmationStatus;

pub const EXPLORER_TX_URL: &str = "https://solscan.io/tx";

/// Block explorer link for a transaction
pub fn explorer_url(signature: &Signature) -> String {
    format!("{}/{}", EXPLORER_TX_URL, signature)
}

// "unknown" when polling timed out
pub fn format_confirmation_status(status: Option<&TransactionConfirmationStatus>) -> &'static str {
    match status {
        Some(TransactionConfirmationStatus::Processed) => "processed",
        Some(TransactionConfirmationStatus::Confirmed) => "confirmed",
        Some(TransactionConfirmationStatus::Finalized) => "finalized",
        None => "unknown",
    }
}
