use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use sskeeper_domain::{Cipher, DomainError};

use super::TimeoutConfig;

pub const DEFAULT_CONFIG_PATH: &str = "outline-ss-server/config.yml";
pub const DEFAULT_LISTEN_PORT: u16 = 9000;
pub const DEFAULT_RESTART_COMMAND: &str = "supervisorctl restart ss-server";

/// Appended to the config path to name the companion lock file
pub const LOCK_FILE_SUFFIX: &str = ".lock";

/// Program plus arguments used to restart the proxy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestartCommand {
    program: String,
    args: Vec<String>,
}

impl RestartCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Default for RestartCommand {
    fn default() -> Self {
        DEFAULT_RESTART_COMMAND
            .parse()
            .unwrap_or_else(|_| Self::new("supervisorctl", Vec::new()))
    }
}

/// Splits on whitespace; no shell quoting is interpreted
impl FromStr for RestartCommand {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or_else(|| {
            DomainError::Validation("Restart command cannot be empty".to_string())
        })?;

        Ok(Self::new(program, parts.collect()))
    }
}

impl fmt::Display for RestartCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Process-wide settings, fixed at startup
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    /// Port every user shares on the proxy
    pub listen_port: u16,

    /// Cipher every user shares on the proxy
    pub cipher: Cipher,

    /// The proxy's YAML config file
    pub config_path: PathBuf,

    pub restart_command: RestartCommand,

    pub timeouts: TimeoutConfig,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            listen_port: DEFAULT_LISTEN_PORT,
            cipher: Cipher::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            restart_command: RestartCommand::default(),
            timeouts: TimeoutConfig::default(),
        }
    }
}

impl ServiceSettings {
    /// Config path with [`LOCK_FILE_SUFFIX`] appended
    pub fn lock_path(&self) -> PathBuf {
        let mut path = OsString::from(self.config_path.as_os_str());
        path.push(LOCK_FILE_SUFFIX);
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_defaults() {
        let settings = ServiceSettings::default();
        assert_eq!(settings.listen_port, 9000);
        assert_eq!(settings.cipher, Cipher::ChaCha20IetfPoly1305);
        assert_eq!(settings.config_path, Path::new("outline-ss-server/config.yml"));
        assert_eq!(
            settings.restart_command.to_string(),
            "supervisorctl restart ss-server"
        );
    }

    #[test]
    fn test_lock_path_appends_suffix() {
        let settings = ServiceSettings {
            config_path: PathBuf::from("/etc/ss/config.yml"),
            ..Default::default()
        };
        assert_eq!(settings.lock_path(), Path::new("/etc/ss/config.yml.lock"));
    }

    #[test]
    fn test_restart_command_parse() {
        let command: RestartCommand = "  systemctl  restart ss-server ".parse().unwrap();
        assert_eq!(command.program(), "systemctl");
        assert_eq!(command.args(), ["restart", "ss-server"]);

        assert!("   ".parse::<RestartCommand>().is_err());
    }
}
