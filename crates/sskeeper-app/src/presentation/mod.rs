pub mod args;
pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;
