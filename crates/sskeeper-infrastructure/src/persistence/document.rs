//! On-disk shape of the proxy config file.
//!
//! Only `keys` is understood. Field order in [`KeyEntry`] is the order the
//! entries are written back: cipher, id, port, secret.

use serde::{Deserialize, Serialize};

use sskeeper_domain::{Cipher, DomainError, UserConfig};

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct ConfigDocument {
    #[serde(default)]
    pub keys: Option<Vec<KeyEntry>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct KeyEntry {
    pub cipher: Cipher,
    pub id: String,
    pub port: u16,
    pub secret: String,
}

impl From<&UserConfig> for KeyEntry {
    fn from(user: &UserConfig) -> Self {
        Self {
            cipher: user.cipher(),
            id: user.id().to_string(),
            port: user.port(),
            secret: user.secret().to_string(),
        }
    }
}

impl From<KeyEntry> for UserConfig {
    fn from(entry: KeyEntry) -> Self {
        UserConfig::restore(entry.id, entry.port, entry.cipher, entry.secret)
    }
}

/// Parse file contents; an empty file, `keys: null` or no `keys` mean no users
pub(crate) fn parse_users(content: &str) -> Result<Vec<UserConfig>, DomainError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let document: ConfigDocument = serde_yaml::from_str(content)
        .map_err(|e| DomainError::ConfigRead(format!("Invalid config document: {e}")))?;

    Ok(document
        .keys
        .unwrap_or_default()
        .into_iter()
        .map(UserConfig::from)
        .collect())
}

pub(crate) fn render_users(users: &[UserConfig]) -> Result<String, DomainError> {
    let document = ConfigDocument {
        keys: Some(users.iter().map(KeyEntry::from).collect()),
    };

    serde_yaml::to_string(&document)
        .map_err(|e| DomainError::ConfigWrite(format!("Failed to serialize config: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> UserConfig {
        UserConfig::restore(
            "alice".to_string(),
            9000,
            Cipher::ChaCha20IetfPoly1305,
            "s3cret".to_string(),
        )
    }

    #[test]
    fn test_parse_empty_inputs() {
        assert!(parse_users("").unwrap().is_empty());
        assert!(parse_users("  \n").unwrap().is_empty());
        assert!(parse_users("keys:\n").unwrap().is_empty());
        assert!(parse_users("keys: []\n").unwrap().is_empty());
        assert!(parse_users("other: 1\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_entries_in_order() {
        let content = "\
keys:
  - id: alice
    port: 9000
    cipher: chacha20-ietf-poly1305
    secret: s3cret
  - id: bob
    port: 9000
    cipher: aes-256-gcm
    secret: hunter2
";
        let users = parse_users(content).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0], alice());
        assert_eq!(users[1].id(), "bob");
        assert_eq!(users[1].cipher(), Cipher::Aes256Gcm);
    }

    #[test]
    fn test_parse_rejects_bad_entries() {
        let unknown_cipher = "keys:\n  - {id: a, port: 9000, cipher: rc4-md5, secret: x}\n";
        assert!(matches!(
            parse_users(unknown_cipher),
            Err(DomainError::ConfigRead(_))
        ));

        let missing_secret = "keys:\n  - {id: a, port: 9000, cipher: aes-128-gcm}\n";
        assert!(parse_users(missing_secret).is_err());

        let bad_port = "keys:\n  - {id: a, port: 70000, cipher: aes-128-gcm, secret: x}\n";
        assert!(parse_users(bad_port).is_err());

        assert!(parse_users("keys: [unclosed\n").is_err());
    }

    #[test]
    fn test_render_field_order() {
        let rendered = render_users(&[alice()]).unwrap();

        let cipher = rendered.find("cipher:").unwrap();
        let id = rendered.find("id:").unwrap();
        let port = rendered.find("port:").unwrap();
        let secret = rendered.find("secret:").unwrap();
        assert!(rendered.starts_with("keys:"));
        assert!(cipher < id && id < port && port < secret);
    }

    #[test]
    fn test_render_then_parse() {
        let users = vec![
            alice(),
            UserConfig::restore("123".to_string(), 9000, Cipher::Aes192Gcm, "true".to_string()),
        ];
        let rendered = render_users(&users).unwrap();

        assert_eq!(parse_users(&rendered).unwrap(), users);
        assert!(parse_users(&render_users(&[]).unwrap()).unwrap().is_empty());
    }
}
