use thiserror::Error;

/// Run-level sync errors. Item-level failures are accumulated in the run
/// outcome instead.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("No active linked account to sync")]
    NoActiveAccount,
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),
    #[error("Sync failed: {0}")]
    Failed(String),
}
