use async_trait::async_trait;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use sskeeper_domain::{Cipher, ConfigStore, DomainError, ServiceState};

use super::document::{parse_users, render_users};

/// YAML file implementation of ConfigStore
///
/// `save` writes a hidden sibling file and renames it over the config, so
/// readers never see a partial file. Deployment requirements that follow:
/// - the service needs write access to the config file's directory, not just
///   to the file;
/// - a symlinked config path is replaced by a regular file, so point the
///   service at the symlink target instead;
/// - the new file is owned by the service's user; only the permission bits
///   of the old file are carried over.
pub struct YamlConfigStore {
    path: PathBuf,
    listen_port: u16,
    cipher: Cipher,
}

impl YamlConfigStore {
    pub fn new(path: impl Into<PathBuf>, listen_port: u16, cipher: Cipher) -> Self {
        Self {
            path: path.into(),
            listen_port,
            cipher,
        }
    }

    /// Sibling of the config file, so the final rename stays on one filesystem
    fn staging_path(&self) -> PathBuf {
        let mut name = OsString::from(".");
        name.push(self.path.file_name().unwrap_or(OsStr::new("config.yml")));
        name.push(format!(".{}.tmp", std::process::id()));
        self.path.with_file_name(name)
    }

    async fn write_staged(&self, staging: &Path, content: &str) -> std::io::Result<()> {
        let mut file = tokio::fs::File::create(staging).await?;
        file.write_all(content.as_bytes()).await?;
        file.sync_all().await?;

        // keep the mode of the file being replaced
        if let Ok(metadata) = tokio::fs::metadata(&self.path).await {
            tokio::fs::set_permissions(staging, metadata.permissions()).await?;
        }

        tokio::fs::rename(staging, &self.path).await
    }
}

#[async_trait]
impl ConfigStore for YamlConfigStore {
    async fn load(&self) -> Result<ServiceState, DomainError> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::ConfigRead(format!("{}: {}", self.path.display(), e))
        })?;

        let users = parse_users(&content)?;
        debug!(path = %self.path.display(), users = users.len(), "Loaded config");

        Ok(ServiceState::new(self.listen_port, self.cipher, users))
    }

    async fn save(&self, state: &ServiceState) -> Result<(), DomainError> {
        let content = render_users(state.users())?;
        let staging = self.staging_path();

        if let Err(e) = self.write_staged(&staging, &content).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(DomainError::ConfigWrite(format!(
                "{}: {}",
                self.path.display(),
                e
            )));
        }

        debug!(path = %self.path.display(), users = state.users().len(), "Saved config");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staging_path_is_hidden_sibling() {
        let store = YamlConfigStore::new("/etc/ss/config.yml", 9000, Cipher::default());
        let staging = store.staging_path();

        assert_eq!(staging.parent(), Some(Path::new("/etc/ss")));
        let name = staging.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with(".config.yml."));
        assert!(name.ends_with(".tmp"));
    }

    #[tokio::test]
    async fn test_load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = YamlConfigStore::new(dir.path().join("absent.yml"), 9000, Cipher::default());

        let result = store.load().await;
        assert!(matches!(result, Err(DomainError::ConfigRead(_))));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_save_keeps_permission_bits() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "keys:\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o640)).unwrap();

        let store = YamlConfigStore::new(&path, 9000, Cipher::default());
        let state = store.load().await.unwrap();
        store.save(&state).await.unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
    }
}
