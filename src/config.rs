use crate::entity::SwapRequest;
use crate::solana::confirmation::{DEFAULT_CONFIRMATION_TIMEOUT, DEFAULT_POLL_INTERVAL};
use crate::solana::jupiter::config::{Config as JupiterConfig, DEFAULT_API_URL, DEFAULT_REQUEST_TIMEOUT};
use crate::solana::jupiter::SOL_MINT;
use crate::solana::parse_pubkey;
use anyhow::{anyhow, Context, Result};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
// POPCAT
pub const DEFAULT_OUTPUT_MINT: &str = "7GCihgDB8fe6KNjn2MYtkzZcRjQy3t9GHdC8uHYmW2hr";
pub const DEFAULT_AMOUNT: u64 = 1_000_000;
pub const DEFAULT_FEE_MULTIPLIER: f64 = 1.1;
pub const DEFAULT_SLIPPAGE_BPS: u16 = 1000;

/// Process configuration, built once at start-up and passed into the pipeline
#[derive(Clone)]
pub struct Config {
    /// Base64 encoded 64-byte keypair
    pub private_key_base64: String,
    pub rpc_url: String,
    pub swap: SwapRequest,
    pub debug: bool,
    pub jupiter: JupiterConfig,
    pub confirmation_timeout: Duration,
    pub poll_interval: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("private_key_base64", &"<redacted>")
            .field("rpc_url", &self.rpc_url)
            .field("swap", &self.swap)
            .field("debug", &self.debug)
            .field("jupiter", &self.jupiter)
            .field("confirmation_timeout", &self.confirmation_timeout)
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}

impl Config {
    /// Loads the configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads the configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Checked by decode_identity when the swap runs
        let private_key_base64 = lookup("PRIVATE_KEY_BASE64").unwrap_or_default();

        let input_mint = lookup("INPUT_MINT").unwrap_or_else(|| SOL_MINT.to_string());
        let output_mint = lookup("OUTPUT_MINT").unwrap_or_else(|| DEFAULT_OUTPUT_MINT.to_string());

        let swap = SwapRequest {
            input_mint: parse_pubkey(&input_mint).context("INPUT_MINT is not a valid address")?,
            output_mint: parse_pubkey(&output_mint).context("OUTPUT_MINT is not a valid address")?,
            amount: parse_or(&lookup, "AMOUNT", DEFAULT_AMOUNT)?,
            slippage_bps: parse_or(&lookup, "SLIPPAGE_BPS", DEFAULT_SLIPPAGE_BPS)?,
            fee_multiplier: parse_or(&lookup, "AUTO_MULTIPLIER", DEFAULT_FEE_MULTIPLIER)?,
        };

        Ok(Self {
            private_key_base64,
            rpc_url: lookup("SOLANA_RPC_URL").unwrap_or_else(|| DEFAULT_RPC_URL.to_string()),
            swap,
            debug: parse_or(&lookup, "DEBUG", false)?,
            jupiter: JupiterConfig {
                api_url: lookup("JUPITER_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
                request_timeout: parse_or(&lookup, "JUPITER_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT.as_secs())
                    .map(Duration::from_secs)?,
            },
            confirmation_timeout: parse_or(
                &lookup,
                "CONFIRMATION_TIMEOUT_SECS",
                DEFAULT_CONFIRMATION_TIMEOUT.as_secs(),
            )
            .map(Duration::from_secs)?,
            poll_interval: parse_or(
                &lookup,
                "CONFIRMATION_POLL_INTERVAL_MS",
                DEFAULT_POLL_INTERVAL.as_millis() as u64,
            )
            .map(Duration::from_millis)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow!("Invalid value for {}: {} ({})", name, value, e)),
        None => Ok(default),
    }
}
