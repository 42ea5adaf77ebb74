//! Ambient identity boundary.
//!
//! The owner id is supplied by an external session/auth provider. Its
//! absence is an authentication failure, distinct from input validation.
//!
//! Like the [`crate::envelope`] types, this is the contract for embedding
//! hosts: the host resolves its session into an [`IdentityProvider`] and
//! passes the owner id into the services, which take it as a plain
//! argument and stay session-agnostic.

use crate::errors::{Error, Result};

/// Source of the current owner id for all domain operations.
pub trait IdentityProvider: Send + Sync {
    fn current_owner_id(&self) -> Result<String>;
}

/// Identity backed by a fixed owner id, used by hosts that resolve the
/// session before calling into the core (and by tests).
pub struct StaticIdentity {
    owner_id: Option<String>,
}

impl StaticIdentity {
    pub fn new(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: Some(owner_id.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self { owner_id: None }
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_owner_id(&self) -> Result<String> {
        self.owner_id
            .clone()
            .ok_or_else(|| Error::Unauthenticated("no active session".to_string()))
    }
}
