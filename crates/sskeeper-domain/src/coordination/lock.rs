use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

use crate::shared::DomainError;

/// Proof of exclusive access to the config file.
///
/// Holds whatever the lock implementation needs to keep the lock alive;
/// dropping the guard releases it, on success and error paths alike.
pub struct MutationGuard {
    _held: Box<dyn Send>,
}

impl MutationGuard {
    pub fn new<T: Send + 'static>(held: T) -> Self {
        Self {
            _held: Box::new(held),
        }
    }
}

impl fmt::Debug for MutationGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutationGuard").finish_non_exhaustive()
    }
}

/// Exclusive gate in front of every load-mutate-save sequence
#[async_trait]
pub trait MutationLock: Send + Sync {
    /// Wait up to `timeout` for exclusive access.
    ///
    /// Fails with [`DomainError::LockTimeout`] when the deadline passes;
    /// the caller must abort rather than proceed unlocked.
    async fn acquire(&self, timeout: Duration) -> Result<MutationGuard, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    struct Flag(Arc<AtomicBool>);

    impl Drop for Flag {
        fn drop(&mut self) {
            self.0.store(true, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_guard_releases_on_drop() {
        let released = Arc::new(AtomicBool::new(false));
        let guard = MutationGuard::new(Flag(released.clone()));

        assert!(!released.load(Ordering::SeqCst));
        drop(guard);
        assert!(released.load(Ordering::SeqCst));
    }
}
