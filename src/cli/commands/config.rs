//! Where the config would be read from; useful when a setting doesn't take.

use crate::config::Config;
use std::process::ExitCode;

#[must_use]
pub fn cmd_config_path() -> ExitCode {
    match Config::get_config_path() {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
