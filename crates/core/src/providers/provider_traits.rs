use async_trait::async_trait;
use thiserror::Error;

use super::provider_models::RawProviderTransaction;

/// Errors surfaced by an external account provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider session initialization failed: {0}")]
    SessionInit(String),
    #[error("Provider fetch failed: {0}")]
    FetchFailed(String),
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

/// Abstraction over an external account provider (bank aggregation or
/// mobile-money operator).
///
/// A real paginated API client and the sandbox generator are
/// interchangeable behind this trait, as are scripted test doubles.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// Initializes an API session. Called once per sync run, before any
    /// fetch.
    async fn initialize_session(&self) -> Result<(), ProviderError>;

    /// Fetches one bounded page of candidate transactions for the given
    /// account reference. Never returns more than `limit` items.
    async fn fetch_candidates(
        &self,
        provider_ref: &str,
        limit: usize,
    ) -> Result<Vec<RawProviderTransaction>, ProviderError>;
}
