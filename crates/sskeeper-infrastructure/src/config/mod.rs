mod settings;
mod timeouts;

pub use settings::{
    RestartCommand, ServiceSettings, DEFAULT_CONFIG_PATH, DEFAULT_LISTEN_PORT,
    DEFAULT_RESTART_COMMAND, LOCK_FILE_SUFFIX,
};
pub use timeouts::{TimeoutConfig, DEFAULT_LOCK_TIMEOUT, DEFAULT_RESTART_TIMEOUT};
