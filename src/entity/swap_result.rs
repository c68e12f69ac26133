use solana_sdk::signature::Signature;

use crate::entity::{BlockReference, PriorityFee};

/// Outcome of a successful submission, before confirmation.
#[derive(Debug, Clone)]
pub struct SubmittedSwap {
    pub signature: Signature,
    pub wallet_address: String,
    pub total_amount: u64,
    pub priority_fee: PriorityFee,
    pub block_reference: BlockReference,
}
