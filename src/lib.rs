// Declare all modules as public so they can be used by the binary and tests.
pub mod app;
pub mod assets;
pub mod config;
pub mod core;
pub mod platform;
pub mod utils;
