use async_trait::async_trait;
use std::time::Duration;

use crate::shared::DomainError;

/// Upper bound on a single restart of the proxy process
pub const DEFAULT_RESTART_TIMEOUT: Duration = Duration::from_secs(10);

/// Restarts the supervised proxy so it reloads the persisted key set
#[async_trait]
pub trait ProcessRestarter: Send + Sync {
    /// Run the restart and wait at most `timeout` for it.
    ///
    /// A restart that completes in time is a success whatever its exit
    /// status. On expiry the child is killed and
    /// [`DomainError::RestartTimeout`] carries its captured output.
    async fn restart(&self, timeout: Duration) -> Result<(), DomainError>;
}
