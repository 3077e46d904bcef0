use std::sync::Arc;
use tracing::info;

use crate::application::services::UserService;
use crate::presentation::state::AppState;
use sskeeper_infrastructure::config::ServiceSettings;
use sskeeper_infrastructure::locking::FileMutationLock;
use sskeeper_infrastructure::persistence::YamlConfigStore;
use sskeeper_infrastructure::process::CommandRestarter;

/// Wire the file store, file lock and restart command into a [`UserService`]
pub fn build_app_state(settings: ServiceSettings) -> AppState {
    let store = Arc::new(YamlConfigStore::new(
        &settings.config_path,
        settings.listen_port,
        settings.cipher,
    ));
    let lock = Arc::new(FileMutationLock::new(settings.lock_path()));
    let restarter = Arc::new(CommandRestarter::new(settings.restart_command.clone()));

    info!(
        ss_port = settings.listen_port,
        cipher = %settings.cipher,
        config_path = %settings.config_path.display(),
        lock_path = %lock.path().display(),
        restart_command = %restarter.command(),
        lock_timeout_ms = settings.timeouts.lock_acquire.as_millis() as u64,
        restart_timeout_ms = settings.timeouts.restart.as_millis() as u64,
        "Service configured"
    );

    let user_service = Arc::new(UserService::new(
        store,
        lock,
        restarter,
        settings.timeouts,
    ));

    AppState {
        settings,
        user_service,
    }
}
