use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use sskeeper_domain::Cipher;
use sskeeper_infrastructure::config::{
    RestartCommand, ServiceSettings, TimeoutConfig, DEFAULT_CONFIG_PATH, DEFAULT_LISTEN_PORT,
    DEFAULT_LOCK_TIMEOUT, DEFAULT_RESTART_COMMAND, DEFAULT_RESTART_TIMEOUT,
};

#[derive(Parser, Debug)]
#[command(name = "sskeeper", author, version, about = "Manage shadowsocks proxy users over HTTP")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub options: ServiceArgs,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Run the management API (default).
    Serve,

    /// Rewrite the config file in canonical form without restarting the proxy.
    Normalize,
}

#[derive(Args, Debug, Clone)]
pub struct ServiceArgs {
    /// Port every user shares on the proxy.
    #[arg(long, env = "SS_USER_PORT", default_value_t = DEFAULT_LISTEN_PORT, global = true)]
    pub ss_port: u16,

    /// Path to the proxy's YAML config file.
    #[arg(long, env = "SS_CONFIG_PATH", default_value = DEFAULT_CONFIG_PATH, global = true)]
    pub config_path: PathBuf,

    /// Cipher every user shares on the proxy.
    #[arg(long, env = "SS_CIPHER", default_value_t = Cipher::default(), global = true)]
    pub cipher: Cipher,

    /// Address the management API listens on.
    #[arg(long, env = "SSKEEPER_BIND", default_value = "127.0.0.1:8000", global = true)]
    pub bind: String,

    /// Command that restarts the proxy, split on whitespace.
    #[arg(
        long,
        env = "SSKEEPER_RESTART_COMMAND",
        default_value = DEFAULT_RESTART_COMMAND,
        global = true
    )]
    pub restart_command: RestartCommand,

    /// Seconds the restart command may run before it is killed.
    #[arg(
        long,
        env = "SSKEEPER_RESTART_TIMEOUT",
        default_value_t = DEFAULT_RESTART_TIMEOUT.as_secs(),
        global = true
    )]
    pub restart_timeout_secs: u64,

    /// Seconds to wait for the config lock.
    #[arg(
        long,
        env = "SSKEEPER_LOCK_TIMEOUT",
        default_value_t = DEFAULT_LOCK_TIMEOUT.as_secs(),
        global = true
    )]
    pub lock_timeout_secs: u64,

    /// Also write JSON logs, rotated daily, into this directory.
    #[arg(long, env = "SSKEEPER_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,
}

impl ServiceArgs {
    pub fn to_settings(&self) -> ServiceSettings {
        ServiceSettings {
            listen_port: self.ss_port,
            cipher: self.cipher,
            config_path: self.config_path.clone(),
            restart_command: self.restart_command.clone(),
            timeouts: TimeoutConfig::new(
                Duration::from_secs(self.lock_timeout_secs),
                Duration::from_secs(self.restart_timeout_secs),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_map_to_settings() {
        let cli = Cli::try_parse_from([
            "sskeeper",
            "--ss-port",
            "8388",
            "--cipher",
            "aes-256-gcm",
            "--config-path",
            "/etc/ss/config.yml",
            "--restart-command",
            "systemctl restart ss",
            "--restart-timeout-secs",
            "3",
            "normalize",
        ])
        .unwrap();

        assert_eq!(cli.command, Some(Command::Normalize));
        let settings = cli.options.to_settings();
        assert_eq!(settings.listen_port, 8388);
        assert_eq!(settings.cipher, Cipher::Aes256Gcm);
        assert_eq!(settings.lock_path(), PathBuf::from("/etc/ss/config.yml.lock"));
        assert_eq!(settings.restart_command.program(), "systemctl");
        assert_eq!(settings.timeouts.restart, Duration::from_secs(3));
    }

    #[test]
    fn test_defaults_match_settings() {
        let cli = Cli::try_parse_from(["sskeeper"]).unwrap();
        let settings = cli.options.to_settings();
        let defaults = ServiceSettings::default();

        assert_eq!(cli.command, None);
        assert_eq!(settings.listen_port, defaults.listen_port);
        assert_eq!(settings.cipher, defaults.cipher);
        assert_eq!(settings.restart_command, defaults.restart_command);
        assert_eq!(settings.timeouts, defaults.timeouts);
    }

    #[test]
    fn test_invalid_cipher_is_rejected() {
        let result = Cli::try_parse_from(["sskeeper", "--cipher", "rc4-md5"]);
        assert!(result.is_err());
    }
}
