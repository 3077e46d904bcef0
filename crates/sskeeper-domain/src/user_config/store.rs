use async_trait::async_trait;

use super::ServiceState;
use crate::shared::DomainError;

/// Persistence port for the credential set.
///
/// Implementations do no locking of their own; a load-mutate-save sequence
/// is only atomic when the caller holds a [`crate::MutationLock`] guard
/// around it.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Read the persisted users and combine them with the service-wide port and cipher
    async fn load(&self) -> Result<ServiceState, DomainError>;

    /// Replace the persisted users with `state.users()`
    async fn save(&self, state: &ServiceState) -> Result<(), DomainError>;
}
