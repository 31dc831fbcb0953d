//! CLI module for prismlog.
//!
//! This module provides the command-line interface using Clap.

pub mod commands;
pub mod util;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for crate::level::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

/// prismlog - Render structured log lines from the command line.
#[derive(Parser)]
#[command(
    name = "prismlog",
    version,
    about = "Render structured log lines from the command line"
)]
pub struct Cli {
    /// Config file (defaults to $PRISMLOG_CONFIG or the platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Log one record to stderr.
    Log {
        /// Record level
        #[arg(value_enum)]
        level: LogLevel,
        /// Log message
        message: String,
        /// Attributes as key=value (int, float and bool values are detected)
        attrs: Vec<String>,
        /// Minimum level; records below it are dropped
        #[arg(long, value_enum)]
        min_level: Option<LogLevel>,
        /// Enter a group before logging (repeatable, outermost first)
        #[arg(long = "group", value_name = "NAME")]
        groups: Vec<String>,
        /// Text between the message and the attributes
        #[arg(long, value_name = "TEXT")]
        message_separator: Option<String>,
        /// Text between attributes
        #[arg(long, value_name = "TEXT")]
        attr_separator: Option<String>,
    },
    /// Print one sample record per level with every value kind.
    Demo,
    /// Print the config file path that would be loaded.
    ConfigPath,
}

pub use commands::{cmd_config_path, cmd_demo, cmd_log};
pub use util::{build_options, load_config, parse_attr};
