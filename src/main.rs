//! Jupiter swap executor - Main executable
//!
//! Performs one token swap through the Jupiter aggregator: quote, build,
//! add a priority fee, sign, submit and wait for confirmation.
use anyhow::Context;
use dotenv::dotenv;
use jupiter_swap_executor::{
    rpc_connector, Config, ConsoleSwapView, SwapInteractorImpl, SwapPresenter,
    SwapPresenterImpl,
};
use log::info;
use std::sync::Arc;

/// Application entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env().context("Failed to load configuration")?;

    // The debug flag raises this crate's records to debug level
    let default_filter = if config.debug {
        format!("info,{}=debug", env!("CARGO_CRATE_NAME"))
    } else {
        "info".to_string()
    };
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(default_filter));
    info!(
        "Starting Jupiter swap executor v{}",
        jupiter_swap_executor::VERSION
    );

    info!("Using Solana network at {}", config.rpc_url);

    let interactor = Arc::new(
        SwapInteractorImpl::new(rpc_connector(&config.rpc_url), config.jupiter.clone())
            .with_confirmation(config.confirmation_timeout, config.poll_interval),
    );
    let presenter = SwapPresenterImpl::new(interactor, Arc::new(ConsoleSwapView::new()));

    presenter
        .run_swap(&config.private_key_base64, &config.swap)
        .await?;

    Ok(())
}
