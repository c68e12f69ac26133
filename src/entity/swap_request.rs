use solana_sdk::pubkey::Pubkey;

/// Parameters of a single swap, supplied once by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapRequest {
    pub input_mint: Pubkey,
    pub output_mint: Pubkey,
    /// Base amount in the smallest unit of the input asset
    pub amount: u64,
    pub slippage_bps: u16,
    /// Scales the observed median priority fee; 0.0 disables the fee
    pub fee_multiplier: f64,
}
