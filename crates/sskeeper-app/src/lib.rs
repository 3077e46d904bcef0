// Application and presentation layers
// The user service and the HTTP API in front of it

pub mod application;
pub mod presentation;
