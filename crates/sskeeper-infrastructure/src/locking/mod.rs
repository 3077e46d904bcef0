mod file_lock;

pub use file_lock::{FileMutationLock, DEFAULT_POLL_INTERVAL};
