pub mod config;
pub mod models;
pub mod quote_service;
pub mod swap_service;

pub use config::Config;
pub use models::{Quote, QuoteParams, SwapResponse, SwapTransactionRequest, SOL_MINT};
pub use quote_service::QuoteService;
pub use swap_service::SwapService;
