use crate::entity::SwapError;
use anyhow::{anyhow, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use solana_sdk::{pubkey::Pubkey, signature::Keypair};
use std::str::FromStr;

/// Length of an ed25519 keypair: 32 secret bytes followed by 32 public bytes.
pub const KEYPAIR_LENGTH: usize = 64;

/// Restore the signing identity from a base64 string (64 bytes).
pub fn decode_identity(secret_base64: &str) -> Result<Keypair, SwapError> {
    let keypair_bytes = STANDARD
        .decode(secret_base64.trim())
        .map_err(|e| SwapError::InvalidKeyFormat(format!("Failed to decode base64 keypair: {}", e)))?;

    if keypair_bytes.len() != KEYPAIR_LENGTH {
        return Err(SwapError::InvalidKeyFormat(format!(
            "Invalid keypair length: {} bytes (expected {})",
            keypair_bytes.len(),
            KEYPAIR_LENGTH
        )));
    }

    Keypair::try_from(keypair_bytes.as_slice())
        .map_err(|e| SwapError::InvalidKeyFormat(format!("Failed to create keypair from bytes: {}", e)))
}

/// Serialize Keypair (64 bytes) to base64.
pub fn keypair_to_base64(keypair: &Keypair) -> String {
    STANDARD.encode(keypair.to_bytes())
}

/// Convert base58 string to Solana `Pubkey`.
pub fn parse_pubkey(address: &str) -> Result<Pubkey> {
    Pubkey::from_str(address).map_err(|e| anyhow!("Invalid Solana address: {}", e))
}
