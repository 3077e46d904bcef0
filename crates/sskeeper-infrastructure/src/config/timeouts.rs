use std::time::Duration;

pub use sskeeper_domain::coordination::DEFAULT_RESTART_TIMEOUT;

pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(5);

/// Bounds on the two blocking waits of a mutating operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// How long to wait for the config file lock
    pub lock_acquire: Duration,

    /// How long the restart command may run before it is killed
    pub restart: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            lock_acquire: DEFAULT_LOCK_TIMEOUT,
            restart: DEFAULT_RESTART_TIMEOUT,
        }
    }
}

impl TimeoutConfig {
    pub fn new(lock_acquire: Duration, restart: Duration) -> Self {
        Self {
            lock_acquire,
            restart,
        }
    }
}
