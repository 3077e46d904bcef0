// Domain layer - credential records and the ports the service drives
// No dependencies on infrastructure or presentation layers

pub mod coordination;
pub mod shared;
pub mod user_config;

// Re-exports for convenience
pub use coordination::{MutationGuard, MutationLock, ProcessRestarter};
pub use shared::{DomainError, ErrorCode, ErrorSeverity};
pub use user_config::{Cipher, ConfigStore, ServiceState, UserConfig};
