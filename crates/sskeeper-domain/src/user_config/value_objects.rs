use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::DomainError;

/// AEAD ciphers accepted by the proxy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cipher {
    #[default]
    #[serde(rename = "chacha20-ietf-poly1305")]
    ChaCha20IetfPoly1305,
    #[serde(rename = "aes-256-gcm")]
    Aes256Gcm,
    #[serde(rename = "aes-192-gcm")]
    Aes192Gcm,
    #[serde(rename = "aes-128-gcm")]
    Aes128Gcm,
}

impl Cipher {
    pub const ALL: [Cipher; 4] = [
        Cipher::ChaCha20IetfPoly1305,
        Cipher::Aes256Gcm,
        Cipher::Aes192Gcm,
        Cipher::Aes128Gcm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Cipher::ChaCha20IetfPoly1305 => "chacha20-ietf-poly1305",
            Cipher::Aes256Gcm => "aes-256-gcm",
            Cipher::Aes192Gcm => "aes-192-gcm",
            Cipher::Aes128Gcm => "aes-128-gcm",
        }
    }
}

impl fmt::Display for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cipher {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cipher::ALL
            .into_iter()
            .find(|cipher| cipher.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = Cipher::ALL.iter().map(Cipher::as_str).collect();
                DomainError::Validation(format!(
                    "Invalid cipher: {s}. Valid values: {}",
                    valid.join(", ")
                ))
            })
    }
}
