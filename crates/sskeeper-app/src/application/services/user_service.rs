use std::future::Future;
use std::sync::Arc;
use tracing::{error, info};

use sskeeper_domain::{ConfigStore, DomainError, MutationLock, ProcessRestarter, ServiceState};
use sskeeper_infrastructure::config::TimeoutConfig;

use crate::application::dtos::{CreateUserInput, UserDto, UserIdDto};

/// Create, read and delete proxy users.
///
/// Every call starts from a fresh `load()`; nothing is cached between
/// requests. Mutations run lock -> load -> transform -> save -> restart and
/// release the lock only after the restart has finished or failed. A failed
/// restart is returned as-is and the saved file is not rolled back.
///
/// Each locked sequence runs on its own task: dropping the caller's future
/// (e.g. a disconnected HTTP client) does not cancel it.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn ConfigStore>,
    lock: Arc<dyn MutationLock>,
    restarter: Arc<dyn ProcessRestarter>,
    timeouts: TimeoutConfig,
}

impl UserService {
    pub fn new(
        store: Arc<dyn ConfigStore>,
        lock: Arc<dyn MutationLock>,
        restarter: Arc<dyn ProcessRestarter>,
        timeouts: TimeoutConfig,
    ) -> Self {
        Self {
            store,
            lock,
            restarter,
            timeouts,
        }
    }

    pub async fn create_user(&self, input: CreateUserInput) -> Result<UserDto, DomainError> {
        if input.user_id.is_empty() {
            return Err(DomainError::Validation(
                "user_id cannot be empty".to_string(),
            ));
        }

        let service = self.clone();
        detached("create", async move { service.create_user_locked(input).await }).await
    }

    async fn create_user_locked(&self, input: CreateUserInput) -> Result<UserDto, DomainError> {
        let _guard = self.lock.acquire(self.timeouts.lock_acquire).await?;

        let state = self.store.load().await?;
        let user = state.provision_user(input.user_id, input.sssecret)?;
        let next = state.with_user(user.clone())?;
        self.store.save(&next).await?;

        self.restart_after_save("create", user.id()).await?;

        info!(user_id = %user.id(), port = user.port(), "User created");
        Ok(UserDto::from(&user))
    }

    /// Unlocked read; may observe the file just before or after a concurrent write
    pub async fn get_user(&self, user_id: &str) -> Result<UserDto, DomainError> {
        let state = self.store.load().await?;

        state
            .find_user(user_id)
            .map(UserDto::from)
            .ok_or_else(|| DomainError::NotFound(user_id.to_string()))
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<(), DomainError> {
        let service = self.clone();
        let user_id = user_id.to_string();
        detached("delete", async move { service.delete_user_locked(&user_id).await }).await
    }

    async fn delete_user_locked(&self, user_id: &str) -> Result<(), DomainError> {
        let _guard = self.lock.acquire(self.timeouts.lock_acquire).await?;

        let state = self.store.load().await?;
        let next = state.without_user(user_id)?;
        self.store.save(&next).await?;

        self.restart_after_save("delete", user_id).await?;

        info!(user_id = %user_id, "User deleted");
        Ok(())
    }

    /// Unlocked read, file order
    pub async fn list_users(&self) -> Result<Vec<UserIdDto>, DomainError> {
        let state = self.store.load().await?;

        Ok(state.user_ids().into_iter().map(UserIdDto::from).collect())
    }

    /// Manual recovery: restart the proxy without touching the config
    pub async fn restart_server(&self) -> Result<(), DomainError> {
        let service = self.clone();
        detached("restart", async move { service.restart_server_locked().await }).await
    }

    async fn restart_server_locked(&self) -> Result<(), DomainError> {
        let _guard = self.lock.acquire(self.timeouts.lock_acquire).await?;

        self.restarter.restart(self.timeouts.restart).await?;

        info!("Proxy restarted on request");
        Ok(())
    }

    /// Rewrite the config file in canonical form. Does not restart the proxy.
    pub async fn normalize_config(&self) -> Result<ServiceState, DomainError> {
        let service = self.clone();
        detached("normalize", async move { service.normalize_config_locked().await }).await
    }

    async fn normalize_config_locked(&self) -> Result<ServiceState, DomainError> {
        let _guard = self.lock.acquire(self.timeouts.lock_acquire).await?;

        let state = self.store.load().await?;
        self.store.save(&state).await?;

        info!(users = state.users().len(), "Config normalized");
        Ok(state)
    }

    async fn restart_after_save(&self, operation: &str, user_id: &str) -> Result<(), DomainError> {
        self.restarter
            .restart(self.timeouts.restart)
            .await
            .inspect_err(|e| {
                error!(
                    operation,
                    user_id = %user_id,
                    error = %e,
                    "Config saved but proxy restart failed; retry POST /restart-ss-server"
                );
            })
    }
}

/// Run `work` on its own task and wait for it. The task keeps running, lock
/// held, if the returned future is dropped.
async fn detached<T, F>(operation: &'static str, work: F) -> Result<T, DomainError>
where
    T: Send + 'static,
    F: Future<Output = Result<T, DomainError>> + Send + 'static,
{
    tokio::spawn(work).await.map_err(|e| {
        error!(operation, error = %e, "Mutation task did not complete");
        DomainError::Restart(format!("{operation} task failed: {e}"))
    })?
}
