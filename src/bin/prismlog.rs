//! `prismlog` - render structured log lines from the command line.
//!
//! Usage:
//!   prismlog log <level> <message> [key=value...]   Log one record to stderr
//!   prismlog demo                                   Show every level and value kind
//!   prismlog config-path                            Print the config file location

use clap::Parser;
use prismlog::cli::commands::LogArgs;
use prismlog::cli::{Cli, Command, build_options, cmd_config_path, cmd_demo, cmd_log, load_config};
use prismlog::internal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if matches!(cli.command, Command::ConfigPath) {
        return cmd_config_path();
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    internal::init_with_config(&config);

    let options = match build_options(&config, cli.no_color) {
        Ok(o) => o,
        Err(e) => {
            internal::error("Invalid config", &[prismlog::Attr::string("reason", e.to_string())]);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Log {
            level,
            message,
            attrs,
            min_level,
            groups,
            message_separator,
            attr_separator,
        } => {
            let args = LogArgs {
                level: level.into(),
                message: &message,
                attrs: &attrs,
                min_level: min_level.map(Into::into),
                groups: &groups,
                message_separator: message_separator.as_deref(),
                attr_separator: attr_separator.as_deref(),
            };
            cmd_log(&args, options, std::io::stderr())
        }
        Command::Demo => cmd_demo(&options, std::io::stderr()),
        Command::ConfigPath => cmd_config_path(),
    }
}
