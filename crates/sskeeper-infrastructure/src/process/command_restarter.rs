use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{error, info, warn};

use sskeeper_domain::{DomainError, ProcessRestarter};

use super::output::{finish, OutputCapture};
use crate::config::RestartCommand;

/// Restarts the proxy by running an external command, e.g. `supervisorctl restart ss-server`
///
/// On timeout only the direct child is killed. Processes it started keep
/// running, and if they hold its stdout/stderr the call returns up to one
/// drain grace period (1s) after `timeout`, with whatever output was read by
/// then.
pub struct CommandRestarter {
    command: RestartCommand,
}

impl CommandRestarter {
    pub fn new(command: RestartCommand) -> Self {
        Self { command }
    }

    pub fn command(&self) -> &RestartCommand {
        &self.command
    }
}

#[async_trait]
impl ProcessRestarter for CommandRestarter {
    async fn restart(&self, timeout: Duration) -> Result<(), DomainError> {
        let mut child = Command::new(self.command.program())
            .args(self.command.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                error!(command = %self.command, error = %e, "Failed to spawn restart command");
                DomainError::Restart(format!("Failed to spawn `{}`: {}", self.command, e))
            })?;

        let stdout = child.stdout.take().map(OutputCapture::spawn);
        let stderr = child.stderr.take().map(OutputCapture::spawn);

        match tokio::time::timeout(timeout, child.wait()).await {
            Ok(Ok(status)) => {
                let (stdout, stderr) = tokio::join!(finish(stdout), finish(stderr));

                if status.success() {
                    info!(command = %self.command, "Proxy restarted");
                } else {
                    // exit status is informational only
                    warn!(
                        command = %self.command,
                        status = %status,
                        stdout = %stdout,
                        stderr = %stderr,
                        "Restart command exited unsuccessfully"
                    );
                }
                Ok(())
            }
            Ok(Err(e)) => Err(DomainError::Restart(format!(
                "Failed to wait for `{}`: {}",
                self.command, e
            ))),
            Err(_) => {
                if let Err(e) = child.start_kill() {
                    warn!(command = %self.command, error = %e, "Failed to kill restart command");
                }
                let _ = child.wait().await;

                let (stdout, stderr) = tokio::join!(finish(stdout), finish(stderr));
                error!(
                    command = %self.command,
                    timeout_ms = timeout.as_millis() as u64,
                    stdout = %stdout,
                    stderr = %stderr,
                    "Restart command timed out and was killed"
                );

                Err(DomainError::RestartTimeout {
                    timeout,
                    stdout,
                    stderr,
                })
            }
        }
    }
}
