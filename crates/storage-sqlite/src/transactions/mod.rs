pub mod model;
pub mod repository;

pub use model::{TransactionDB, TransactionUpdateDB};
pub use repository::TransactionRepository;
