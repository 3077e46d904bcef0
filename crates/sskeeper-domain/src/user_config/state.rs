use super::{Cipher, UserConfig};
use crate::shared::DomainError;

/// Service-wide port and cipher plus the users read from the config file.
///
/// Rebuilt from disk for every operation and dropped afterwards. The
/// transformations below never touch `self`; each returns a new state so a
/// failed check leaves the loaded view untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceState {
    listen_port: u16,
    cipher: Cipher,
    users: Vec<UserConfig>,
}

impl ServiceState {
    pub fn new(listen_port: u16, cipher: Cipher, users: Vec<UserConfig>) -> Self {
        Self {
            listen_port,
            cipher,
            users,
        }
    }

    // Getters
    pub fn listen_port(&self) -> u16 {
        self.listen_port
    }

    pub fn cipher(&self) -> Cipher {
        self.cipher
    }

    pub fn users(&self) -> &[UserConfig] {
        &self.users
    }

    /// Exact, case-sensitive lookup; the first entry in file order wins
    pub fn find_user(&self, id: &str) -> Option<&UserConfig> {
        self.users.iter().find(|user| user.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find_user(id).is_some()
    }

    /// Identifiers in file order
    pub fn user_ids(&self) -> Vec<&str> {
        self.users.iter().map(UserConfig::id).collect()
    }

    /// Build a credential bound to the shared listening port and cipher
    pub fn provision_user(&self, id: String, secret: String) -> Result<UserConfig, DomainError> {
        UserConfig::new(id, self.listen_port, self.cipher, secret)
    }

    /// Append `user`, failing with `Conflict` if its id is taken
    pub fn with_user(&self, user: UserConfig) -> Result<ServiceState, DomainError> {
        if self.contains(user.id()) {
            return Err(DomainError::Conflict(user.id().to_string()));
        }

        let mut users = self.users.clone();
        users.push(user);

        Ok(Self::new(self.listen_port, self.cipher, users))
    }

    /// Drop every entry with `id`, failing with `NotFound` if there is none
    pub fn without_user(&self, id: &str) -> Result<ServiceState, DomainError> {
        if !self.contains(id) {
            return Err(DomainError::NotFound(id.to_string()));
        }

        let users = self
            .users
            .iter()
            .filter(|user| user.id() != id)
            .cloned()
            .collect();

        Ok(Self::new(self.listen_port, self.cipher, users))
    }
}
