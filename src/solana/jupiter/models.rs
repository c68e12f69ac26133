// src/solana/jupiter/models.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Wrapped SOL
pub const SOL_MINT: &str = "So11111111111111111111111111111111111111112";

/// Query parameters of `GET /quote`
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteParams {
    pub input_mint: String,
    pub output_mint: String,
    pub amount: u64,
    pub slippage_bps: u16,
}

impl QuoteParams {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("inputMint", self.input_mint.clone()),
            ("outputMint", self.output_mint.clone()),
            ("amount", self.amount.to_string()),
            ("slippageBps", self.slippage_bps.to_string()),
        ]
    }
}

/// Quote returned by the aggregator. Forwarded to `/swap` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quote(pub Value);

impl Quote {
    pub fn in_amount(&self) -> Option<&str> {
        self.0.get("inAmount").and_then(Value::as_str)
    }

    pub fn out_amount(&self) -> Option<&str> {
        self.0.get("outAmount").and_then(Value::as_str)
    }
}

/// Body of `POST /swap`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapTransactionRequest<'a> {
    pub quote_response: &'a Quote,
    pub user_public_key: String,
    #[serde(rename = "wrapUnwrapSOL")]
    pub wrap_and_unwrap_sol: bool,
}

/// Response of `POST /swap`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapResponse {
    /// Base64 encoded unsigned transaction
    pub swap_transaction: String,
    #[serde(default)]
    pub last_valid_block_height: Option<u64>,
    #[serde(default)]
    pub prioritization_fee_lamports: Option<u64>,
}
