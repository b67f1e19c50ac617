pub mod commands;
pub mod config;
pub mod env;
pub mod state;
pub mod stream;
