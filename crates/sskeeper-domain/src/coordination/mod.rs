//! Ports for the two side effects around a config mutation: serializing
//! writers and bouncing the proxy so it picks up the new key set.

mod lock;
mod restart;

pub use lock::{MutationGuard, MutationLock};
pub use restart::{ProcessRestarter, DEFAULT_RESTART_TIMEOUT};
