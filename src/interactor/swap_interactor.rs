use crate::entity::{BlockReference, PriorityFee, SubmittedSwap, SwapError, SwapRequest};
use crate::solana;
use crate::solana::client::LedgerConnector;
use crate::solana::confirmation::{DEFAULT_CONFIRMATION_TIMEOUT, DEFAULT_POLL_INTERVAL};
use crate::solana::jupiter::{Config as JupiterConfig, Quote, QuoteParams, QuoteService, SwapService};
use async_trait::async_trait;
use log::{debug, info};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::Signer;
use solana_sdk::transaction::VersionedTransaction;
use solana_transaction_status::TransactionConfirmationStatus;
use std::time::Duration;

#[async_trait]
pub trait SwapInteractor: Send + Sync {
    /// Decodes the identity, fetches context, quote and transaction, then
    /// signs and submits. The first failing step aborts the rest.
    async fn execute_swap(
        &self,
        secret_base64: &str,
        request: &SwapRequest,
    ) -> Result<SubmittedSwap, SwapError>;

    /// `None` when no status was observed within the confirmation budget
    async fn await_confirmation(&self, signature: &Signature) -> Option<TransactionConfirmationStatus>;
}

pub struct SwapInteractorImpl {
    connect: LedgerConnector,
    quote_service: QuoteService,
    swap_service: SwapService,
    confirmation_timeout: Duration,
    poll_interval: Duration,
}

impl SwapInteractorImpl {
    pub fn new(connect: LedgerConnector, jupiter_config: JupiterConfig) -> Self {
        Self {
            connect,
            quote_service: QuoteService::new(jupiter_config.clone()),
            swap_service: SwapService::new(jupiter_config),
            confirmation_timeout: DEFAULT_CONFIRMATION_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_confirmation(mut self, timeout: Duration, poll_interval: Duration) -> Self {
        self.confirmation_timeout = timeout;
        self.poll_interval = poll_interval;
        self
    }

    /// Latest block reference and the scaled median priority fee for `input_mint`
    pub async fn fetch_context(
        &self,
        input_mint: &Pubkey,
        fee_multiplier: f64,
    ) -> Result<(BlockReference, PriorityFee), SwapError> {
        let ledger = (self.connect)();

        let block_reference = ledger
            .latest_block_reference()
            .await
            .map_err(|e| SwapError::NetworkError(e.to_string()))?;

        debug!(
            "Latest blockhash {} valid until block height {}",
            block_reference.blockhash, block_reference.last_valid_block_height
        );

        let observations = ledger
            .recent_prioritization_fees(&[*input_mint])
            .await
            .map_err(|e| SwapError::NetworkError(e.to_string()))?;

        let priority_fee = PriorityFee::from_observations(&observations, fee_multiplier);
        debug!(
            "Priority fee: median={} over {} observations, scaled={}",
            priority_fee.median,
            observations.len(),
            priority_fee.scaled()
        );

        Ok((block_reference, priority_fee))
    }

    pub async fn fetch_quote(
        &self,
        request: &SwapRequest,
        total_amount: u64,
    ) -> Result<Quote, SwapError> {
        let params = QuoteParams {
            input_mint: request.input_mint.to_string(),
            output_mint: request.output_mint.to_string(),
            amount: total_amount,
            slippage_bps: request.slippage_bps,
        };

        self.quote_service.get_quote(&params).await
    }

    pub async fn fetch_transaction(
        &self,
        quote: &Quote,
        wallet_address: &Pubkey,
    ) -> Result<Vec<u8>, SwapError> {
        self.swap_service.build_transaction(quote, wallet_address).await
    }

    pub fn augment_and_sign(
        &self,
        unsigned_transaction: &[u8],
        priority_fee: &PriorityFee,
        keypair: &Keypair,
    ) -> Result<VersionedTransaction, SwapError> {
        solana::augment_and_sign(unsigned_transaction, priority_fee.micro_lamports(), keypair)
    }

    /// Sends the transaction exactly once. A failure here is final: the
    /// transaction may still land, so it is never resubmitted.
    pub async fn submit(&self, transaction: &VersionedTransaction) -> Result<Signature, SwapError> {
        let ledger = (self.connect)();

        let signature = ledger
            .send_transaction(transaction)
            .await
            .map_err(|e| SwapError::SubmissionError(e.to_string()))?;

        debug!("Transaction sent, signature: {}", signature);

        Ok(signature)
    }
}

#[async_trait]
impl SwapInteractor for SwapInteractorImpl {
    async fn execute_swap(
        &self,
        secret_base64: &str,
        request: &SwapRequest,
    ) -> Result<SubmittedSwap, SwapError> {
        let keypair = solana::decode_identity(secret_base64)?;
        let wallet_address = keypair.pubkey();
        debug!("Wallet address: {}", wallet_address);

        info!("Fetching network context");
        let (block_reference, priority_fee) = self
            .fetch_context(&request.input_mint, request.fee_multiplier)
            .await?;

        let total_amount = priority_fee.total_amount(request.amount);
        debug!("Total amount (including priority fee): {} lamports", total_amount);

        info!(
            "Requesting quote: {} {} -> {}",
            total_amount, request.input_mint, request.output_mint
        );
        let quote = self.fetch_quote(request, total_amount).await?;

        info!("Requesting swap transaction");
        let unsigned_transaction = self.fetch_transaction(&quote, &wallet_address).await?;

        let signed_transaction =
            self.augment_and_sign(&unsigned_transaction, &priority_fee, &keypair)?;

        info!("Submitting transaction");
        let signature = self.submit(&signed_transaction).await?;

        Ok(SubmittedSwap {
            signature,
            wallet_address: wallet_address.to_string(),
            total_amount,
            priority_fee,
            block_reference,
        })
    }

    async fn await_confirmation(&self, signature: &Signature) -> Option<TransactionConfirmationStatus> {
        let ledger = (self.connect)();

        solana::await_confirmation(
            ledger.as_ref(),
            signature,
            self.confirmation_timeout,
            self.poll_interval,
        )
        .await
    }
}
