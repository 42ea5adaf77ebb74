// Module declarations
pub(crate) mod sync_errors;
pub(crate) mod sync_model;
pub(crate) mod sync_service;
#[cfg(test)]
mod sync_service_tests;
pub(crate) mod sync_traits;

// Re-export the public interface
pub use sync_errors::SyncError;
pub use sync_model::{NewSyncLog, SyncItemError, SyncLogEntry, SyncOutcome, SyncStatus};
pub use sync_service::SyncService;
pub use sync_traits::{SyncLogRepositoryTrait, SyncServiceTrait};
