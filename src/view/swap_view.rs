use crate::entity::{SubmittedSwap, SwapError};
use crate::utils::{explorer_url, format_confirmation_status};
use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use solana_transaction_status::TransactionConfirmationStatus;

#[async_trait]
pub trait SwapView: Send + Sync {
    async fn display_submitted(&self, submitted: &SubmittedSwap) -> Result<()>;
    async fn display_waiting(&self) -> Result<()>;
    async fn display_confirmation(&self, status: Option<&TransactionConfirmationStatus>) -> Result<()>;
    async fn display_swap_error(&self, error: &SwapError) -> Result<()>;
}

/// Prints progress lines to stdout
#[derive(Debug, Default)]
pub struct ConsoleSwapView;

impl ConsoleSwapView {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SwapView for ConsoleSwapView {
    async fn display_submitted(&self, submitted: &SubmittedSwap) -> Result<()> {
        debug!("Transaction signature: {}", submitted.signature);
        println!("Solscan link: {}", explorer_url(&submitted.signature));

        Ok(())
    }

    async fn display_waiting(&self) -> Result<()> {
        println!("Waiting for transaction confirmation...");

        Ok(())
    }

    async fn display_confirmation(&self, status: Option<&TransactionConfirmationStatus>) -> Result<()> {
        println!(
            "Transaction confirmation status: {}",
            format_confirmation_status(status)
        );

        Ok(())
    }

    async fn display_swap_error(&self, error: &SwapError) -> Result<()> {
        println!("An error occurred: {}", error);

        Ok(())
    }
}
