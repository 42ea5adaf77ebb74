// Module declarations
pub(crate) mod provider_models;
pub(crate) mod provider_traits;
pub(crate) mod sandbox_provider;

// Re-export the public interface
pub use provider_models::RawProviderTransaction;
pub use provider_traits::{ProviderAdapter, ProviderError};
pub use sandbox_provider::SandboxProvider;
