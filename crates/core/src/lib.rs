//! Sikasync Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for syncing provider
//! transactions into the local ledger: the account registry, the provider
//! adapter abstraction, the heuristic categorization engine, the category
//! resolver, and the sync orchestrator. It is database-agnostic and defines
//! repository traits that are implemented by the `storage-sqlite` crate.

pub mod accounts;
pub mod categories;
pub mod categorization;
pub mod constants;
pub mod envelope;
pub mod errors;
pub mod identity;
pub mod providers;
pub mod sync;
pub mod transactions;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
