/// Failure kinds of the swap pipeline. Each carries a human-readable detail.
#[derive(Debug, thiserror::Error)]
pub enum SwapError {
    #[error("Invalid private key format: {0}")]
    InvalidKeyFormat(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Quote unavailable: {0}")]
    QuoteUnavailable(String),

    #[error("Failed to build swap transaction: {0}")]
    TransactionBuildFailed(String),

    #[error("Failed to sign transaction: {0}")]
    SigningError(String),

    #[error("Failed to submit transaction: {0}")]
    SubmissionError(String),
}
