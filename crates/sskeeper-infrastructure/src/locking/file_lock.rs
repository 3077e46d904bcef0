//! Cross-process lock on the config file.
//!
//! Writers take an OS-level exclusive lock (`flock` on Unix, `LockFileEx` on
//! Windows) on a companion `.lock` file. `flock` locks belong to the open file
//! description, so two handles in one process contend just like two
//! processes do, and a crashed holder releases its lock with its descriptors.

use async_trait::async_trait;
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, error, warn};

use sskeeper_domain::{DomainError, MutationGuard, MutationLock};

/// Delay between attempts while another writer holds the lock
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// MutationLock backed by an advisory lock on a file
pub struct FileMutationLock {
    path: PathBuf,
    poll_interval: Duration,
}

impl FileMutationLock {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Returns the path to the lock file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Result<File, DomainError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    DomainError::Lock(format!("Failed to create {}: {}", parent.display(), e))
                })?;
            }
        }

        OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&self.path)
            .map_err(|e| {
                DomainError::Lock(format!("Failed to open {}: {}", self.path.display(), e))
            })
    }
}

fn is_contended(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::WouldBlock
        || err.raw_os_error() == fs2::lock_contended_error().raw_os_error()
}

#[async_trait]
impl MutationLock for FileMutationLock {
    async fn acquire(&self, timeout: Duration) -> Result<MutationGuard, DomainError> {
        let file = self.open()?;
        let deadline = Instant::now() + timeout;

        loop {
            match file.try_lock_exclusive() {
                Ok(()) => {
                    debug!(path = %self.path.display(), "Acquired config lock");
                    return Ok(MutationGuard::new(HeldLock {
                        file,
                        path: self.path.clone(),
                    }));
                }
                Err(e) if is_contended(&e) => {
                    let now = Instant::now();
                    if now >= deadline {
                        warn!(
                            path = %self.path.display(),
                            timeout_ms = timeout.as_millis() as u64,
                            "Timed out waiting for config lock"
                        );
                        return Err(DomainError::LockTimeout(timeout));
                    }
                    tokio::time::sleep(self.poll_interval.min(deadline - now)).await;
                }
                Err(e) => {
                    error!(
                        path = %self.path.display(),
                        error = %e,
                        "Failed to lock config"
                    );
                    return Err(DomainError::Lock(format!(
                        "Failed to lock {}: {}",
                        self.path.display(),
                        e
                    )));
                }
            }
        }
    }
}

/// Keeps the locked handle open until dropped
struct HeldLock {
    file: File,
    path: PathBuf,
}

impl Drop for HeldLock {
    fn drop(&mut self) {
        // closing the handle releases the lock anyway; unlock explicitly to log it
        if let Err(e) = FileExt::unlock(&self.file) {
            error!(
                path = %self.path.display(),
                error = %e,
                "Failed to release config lock"
            );
        } else {
            debug!(path = %self.path.display(), "Released config lock");
        }
    }
}
