mod state;
mod store;
mod value_objects;

pub use state::ServiceState;
pub use store::ConfigStore;
pub use value_objects::Cipher;

use crate::shared::DomainError;

/// One proxy credential as it appears in the `keys` list of the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserConfig {
    id: String,
    port: u16,
    cipher: Cipher,
    secret: String,
}

impl UserConfig {
    /// Create a new credential, rejecting an empty id
    pub fn new(id: String, port: u16, cipher: Cipher, secret: String) -> Result<Self, DomainError> {
        if id.is_empty() {
            return Err(DomainError::Validation(
                "User id cannot be empty".to_string(),
            ));
        }

        Ok(Self::restore(id, port, cipher, secret))
    }

    /// Rebuild a record read back from persistence, as-is
    pub fn restore(id: String, port: u16, cipher: Cipher, secret: String) -> Self {
        Self {
            id,
            port,
            cipher,
            secret,
        }
    }

    // Getters
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn cipher(&self) -> Cipher {
        self.cipher
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_id() {
        let result = UserConfig::new(
            String::new(),
            9000,
            Cipher::ChaCha20IetfPoly1305,
            "s3cret".to_string(),
        );
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_new_keeps_fields() {
        let user = UserConfig::new(
            "alice".to_string(),
            9000,
            Cipher::Aes128Gcm,
            "s3cret".to_string(),
        )
        .unwrap();
        assert_eq!(user.id(), "alice");
        assert_eq!(user.port(), 9000);
        assert_eq!(user.cipher(), Cipher::Aes128Gcm);
        assert_eq!(user.secret(), "s3cret");
    }
}
