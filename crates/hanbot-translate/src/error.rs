/// Errors a provider call can produce.
///
/// Every variant from the primary provider is transient (it routes the
/// request to the fallback). The same error from the fallback is terminal
/// and becomes a user-visible failure.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider returned HTTP {0}")]
    Status(u16),

    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout
        } else {
            ProviderError::Network(err.to_string())
        }
    }
}
