pub mod model;
pub mod repository;

pub use model::LinkedAccountDB;
pub use repository::AccountRepository;
