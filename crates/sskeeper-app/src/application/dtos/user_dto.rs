use serde::{Deserialize, Serialize};

use sskeeper_domain::UserConfig;

/// Body of `POST /user`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateUserInput {
    pub user_id: String,
    pub sssecret: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub user_id: String,
    pub port: u16,
    pub cipher: String,
    pub secret: String,
}

impl From<&UserConfig> for UserDto {
    fn from(user: &UserConfig) -> Self {
        Self {
            user_id: user.id().to_string(),
            port: user.port(),
            cipher: user.cipher().to_string(),
            secret: user.secret().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdDto {
    pub user_id: String,
}

impl From<&str> for UserIdDto {
    fn from(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
        }
    }
}
