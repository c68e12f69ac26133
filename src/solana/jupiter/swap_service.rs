use crate::entity::SwapError;
use crate::solana::jupiter::models::{Quote, SwapResponse, SwapTransactionRequest};
use crate::solana::jupiter::Config;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::{debug, info};
use reqwest::Client;
use solana_sdk::pubkey::Pubkey;

/// Service for building swap transactions using Jupiter
pub struct SwapService {
    config: Config,
}

impl SwapService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Asks the aggregator to build the unsigned transaction implementing
    /// `quote` for `user_public_key`, and returns its wire bytes.
    pub async fn build_transaction(
        &self,
        quote: &Quote,
        user_public_key: &Pubkey,
    ) -> Result<Vec<u8>, SwapError> {
        let request = SwapTransactionRequest {
            quote_response: quote,
            user_public_key: user_public_key.to_string(),
            wrap_and_unwrap_sol: true,
        };

        debug!(
            "Requesting swap transaction with user_public_key: {}",
            user_public_key
        );

        // One HTTP session per request, closed when it goes out of scope
        let http_client = Client::builder()
            .timeout(self.config.request_timeout)
            .build()
            .map_err(|e| SwapError::TransactionBuildFailed(format!("Failed to create HTTP client: {}", e)))?;

        let response = http_client
            .post(self.config.swap_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| SwapError::TransactionBuildFailed(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SwapError::TransactionBuildFailed(format!(
                "Jupiter API error ({}): {}",
                status, error_text
            )));
        }

        let swap_response: SwapResponse = response.json().await.map_err(|e| {
            SwapError::TransactionBuildFailed(format!("Failed to parse swap response: {}", e))
        })?;

        debug!("Swap response: {:?}", swap_response);

        let transaction = STANDARD
            .decode(swap_response.swap_transaction.as_bytes())
            .map_err(|e| {
                SwapError::TransactionBuildFailed(format!("Invalid base64 swap transaction: {}", e))
            })?;

        info!(
            "Swap transaction received: tx_length={}, last_valid_block_height={:?}, prioritization_fee_lamports={:?}",
            transaction.len(),
            swap_response.last_valid_block_height,
            swap_response.prioritization_fee_lamports
        );

        Ok(transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;
    use std::io::Write;
    use std::time::Duration;

    fn service(server: &mockito::ServerGuard) -> SwapService {
        SwapService::new(Config {
            api_url: server.url(),
            ..Config::default()
        })
    }

    #[tokio::test]
    async fn test_build_transaction_posts_quote_and_decodes() {
        let mut server = mockito::Server::new_async().await;
        let user = Pubkey::new_unique();
        let quote = Quote(json!({ "inAmount": "1000", "outAmount": "2" }));

        let mock = server
            .mock("POST", "/swap")
            .match_body(Matcher::Json(json!({
                "quoteResponse": { "inAmount": "1000", "outAmount": "2" },
                "userPublicKey": user.to_string(),
                "wrapUnwrapSOL": true
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "swapTransaction": STANDARD.encode([1u8, 2, 3]), "lastValidBlockHeight": 99 }).to_string())
            .create_async()
            .await;

        let bytes = service(&server).build_transaction(&quote, &user).await.unwrap();

        mock.assert_async().await;
        assert_eq!(bytes, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_build_transaction_rejects_bad_base64() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/swap")
            .with_status(200)
            .with_body(json!({ "swapTransaction": "***" }).to_string())
            .create_async()
            .await;

        let result = service(&server)
            .build_transaction(&Quote(json!({})), &Pubkey::new_unique())
            .await;

        assert!(matches!(result, Err(SwapError::TransactionBuildFailed(_))));
    }

    #[tokio::test]
    async fn test_build_transaction_server_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/swap")
            .with_status(400)
            .with_body("bad quote")
            .create_async()
            .await;

        let result = service(&server)
            .build_transaction(&Quote(json!({})), &Pubkey::new_unique())
            .await;

        assert!(matches!(result, Err(SwapError::TransactionBuildFailed(_))));
    }

    #[tokio::test]
    async fn test_build_transaction_times_out() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/swap")
            .with_status(200)
            .with_chunked_body(|writer| {
                std::thread::sleep(Duration::from_millis(500));
                writer.write_all(br#"{"swapTransaction":"AQID"}"#)
            })
            .create_async()
            .await;

        let service = SwapService::new(Config {
            api_url: server.url(),
            request_timeout: Duration::from_millis(50),
        });
        let result = service
            .build_transaction(&Quote(json!({})), &Pubkey::new_unique())
            .await;

        assert!(matches!(result, Err(SwapError::TransactionBuildFailed(_))));
    }
}
