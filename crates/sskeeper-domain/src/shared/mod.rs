use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Error codes for structured error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Resource Not Found (2xxx)
    UserNotFound = 2001,

    // Business Logic (3xxx)
    UserAlreadyExists = 3001,

    // Data & Persistence (4xxx)
    ConfigReadError = 4001,
    ConfigWriteError = 4002,

    // Coordination (5xxx)
    LockTimeout = 5001,
    LockError = 5002,
    RestartTimeout = 5003,
    RestartFailed = 5004,

    // Validation (6xxx)
    ValidationError = 6001,
}

impl ErrorCode {
    /// Get error code as integer
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ErrorCode::UserNotFound | ErrorCode::ValidationError => ErrorSeverity::Info,

            ErrorCode::UserAlreadyExists | ErrorCode::LockTimeout => ErrorSeverity::Warning,

            ErrorCode::ConfigReadError
            | ErrorCode::ConfigWriteError
            | ErrorCode::LockError
            | ErrorCode::RestartFailed => ErrorSeverity::Error,

            // config already persisted, proxy still running the old set
            ErrorCode::RestartTimeout => ErrorSeverity::Critical,
        }
    }

    /// Check if the caller may simply retry
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ErrorCode::LockTimeout | ErrorCode::RestartTimeout)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Failed to read config: {0}")]
    ConfigRead(String),

    #[error("Failed to write config: {0}")]
    ConfigWrite(String),

    #[error("Config lock not acquired within {0:?}")]
    LockTimeout(Duration),

    #[error("Config lock error: {0}")]
    Lock(String),

    #[error("User already exists: {0}")]
    Conflict(String),

    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Proxy restart did not finish within {timeout:?}")]
    RestartTimeout {
        timeout: Duration,
        stdout: String,
        stderr: String,
    },

    #[error("Proxy restart failed: {0}")]
    Restart(String),
}

impl DomainError {
    /// Get error code
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::ConfigRead(_) => ErrorCode::ConfigReadError,
            DomainError::ConfigWrite(_) => ErrorCode::ConfigWriteError,
            DomainError::LockTimeout(_) => ErrorCode::LockTimeout,
            DomainError::Lock(_) => ErrorCode::LockError,
            DomainError::Conflict(_) => ErrorCode::UserAlreadyExists,
            DomainError::NotFound(_) => ErrorCode::UserNotFound,
            DomainError::Validation(_) => ErrorCode::ValidationError,
            DomainError::RestartTimeout { .. } => ErrorCode::RestartTimeout,
            DomainError::Restart(_) => ErrorCode::RestartFailed,
        }
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        self.code().severity()
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        self.code().is_recoverable()
    }

    /// Format error with code
    pub fn format_with_code(&self) -> String {
        format!("[{}] {}", self.code().code(), self)
    }
}
