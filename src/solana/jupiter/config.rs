use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://quote-api.jup.ag/v6";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Jupiter API configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL serving `/quote` and `/swap`
    pub api_url: String,

    /// Timeout applied to every aggregator request
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl Config {
    pub fn quote_url(&self) -> String {
        format!("{}/quote", self.api_url.trim_end_matches('/'))
    }

    pub fn swap_url(&self) -> String {
        format!("{}/swap", self.api_url.trim_end_matches('/'))
    }
}
