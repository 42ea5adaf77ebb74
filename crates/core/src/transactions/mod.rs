// Module declarations
pub(crate) mod transactions_model;
pub(crate) mod transactions_traits;

// Re-export the public interface
pub use transactions_model::{CanonicalTransaction, NewTransaction, TransactionUpdate};
pub use transactions_traits::TransactionRepositoryTrait;
