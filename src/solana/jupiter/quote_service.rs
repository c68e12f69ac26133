use crate::entity::SwapError;
use crate::solana::jupiter::models::{Quote, QuoteParams};
use crate::solana::jupiter::Config;
use log::{debug, info};
use reqwest::Client;

/// Fetches swap quotes from the Jupiter API
pub struct QuoteService {
    config: Config,
}

impl QuoteService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Requests a route for `params`. Any transport failure, timeout or
    /// non-success status is reported as `QuoteUnavailable`.
    pub async fn get_quote(&self, params: &QuoteParams) -> Result<Quote, SwapError> {
        debug!("Requesting quote with parameters: {:?}", params);

        // One HTTP session per request, closed when it goes out of scope
        let http_client = Client::builder()
            .timeout(self.config.request_timeout)
            .build()
            .map_err(|e| SwapError::QuoteUnavailable(format!("Failed to create HTTP client: {}", e)))?;

        let response = http_client
            .get(self.config.quote_url())
            .query(&params.to_query())
            .send()
            .await
            .map_err(|e| SwapError::QuoteUnavailable(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SwapError::QuoteUnavailable(format!(
                "Jupiter API error ({}): {}",
                status, error_text
            )));
        }

        let quote: Quote = response
            .json()
            .await
            .map_err(|e| SwapError::QuoteUnavailable(format!("Failed to parse quote response: {}", e)))?;

        debug!("Quote response: {}", quote.0);
        info!(
            "Quote received successfully: input_amount={}, output_amount={}",
            quote.in_amount().unwrap_or("?"),
            quote.out_amount().unwrap_or("?")
        );

        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;
    use std::io::Write;
    use std::time::Duration;

    fn params() -> QuoteParams {
        QuoteParams {
            input_mint: "So11111111111111111111111111111111111111112".to_string(),
            output_mint: "7GCihgDB8fe6KNjn2MYtkzZcRjQy3t9GHdC8uHYmW2hr".to_string(),
            amount: 1_000_220,
            slippage_bps: 1000,
        }
    }

    fn service(server: &mockito::ServerGuard) -> QuoteService {
        QuoteService::new(Config {
            api_url: server.url(),
            ..Config::default()
        })
    }

    #[tokio::test]
    async fn test_get_quote_sends_query_and_keeps_body() {
        let mut server = mockito::Server::new_async().await;
        let body = json!({ "inAmount": "1000220", "outAmount": "31337", "routePlan": [] });
        let mock = server
            .mock("GET", "/quote")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("inputMint".into(), "So11111111111111111111111111111111111111112".into()),
                Matcher::UrlEncoded("outputMint".into(), "7GCihgDB8fe6KNjn2MYtkzZcRjQy3t9GHdC8uHYmW2hr".into()),
                Matcher::UrlEncoded("amount".into(), "1000220".into()),
                Matcher::UrlEncoded("slippageBps".into(), "1000".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let quote = service(&server).get_quote(&params()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(quote, Quote(body));
    }

    #[tokio::test]
    async fn test_get_quote_server_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", Matcher::Regex("^/quote".to_string()))
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let result = service(&server).get_quote(&params()).await;

        match result {
            Err(SwapError::QuoteUnavailable(message)) => assert!(message.contains("internal error")),
            other => panic!("expected QuoteUnavailable, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_quote_invalid_json() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", Matcher::Regex("^/quote".to_string()))
            .with_status(200)
            .with_body("<html>")
            .create_async()
            .await;

        let result = service(&server).get_quote(&params()).await;
        assert!(matches!(result, Err(SwapError::QuoteUnavailable(_))));
    }

    #[tokio::test]
    async fn test_get_quote_unreachable_host() {
        let service = QuoteService::new(Config {
            api_url: "http://127.0.0.1:1".to_string(),
            ..Config::default()
        });

        let result = service.get_quote(&params()).await;
        assert!(matches!(result, Err(SwapError::QuoteUnavailable(_))));
    }

    #[tokio::test]
    async fn test_get_quote_times_out() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/quote")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_chunked_body(|writer| {
                std::thread::sleep(Duration::from_millis(500));
                writer.write_all(b"{}")
            })
            .create_async()
            .await;

        let service = QuoteService::new(Config {
            api_url: server.url(),
            request_timeout: Duration::from_millis(50),
        });
        let result = service.get_quote(&params()).await;

        assert!(matches!(result, Err(SwapError::QuoteUnavailable(_))));
    }
}
