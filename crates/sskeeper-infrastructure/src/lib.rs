// Infrastructure layer - file, lock and process adapters
// Depends on domain layer, implements its interfaces

pub mod config;
pub mod locking;
pub mod logging;
pub mod persistence;
pub mod process;
