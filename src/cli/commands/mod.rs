//! Command implementations for the CLI.

mod config;
mod demo;
mod log;

pub use config::cmd_config_path;
pub use demo::cmd_demo;
pub use log::{LogArgs, cmd_log};
