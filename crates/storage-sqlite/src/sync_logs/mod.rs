pub mod model;
pub mod repository;

pub use model::SyncLogDB;
pub use repository::SyncLogRepository;
