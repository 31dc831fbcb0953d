//! Utility functions for the CLI.

use crate::attr::Attr;
use crate::config::Config;
use crate::handler::HandlerOptions;
use std::path::Path;

/// Loads the config from `path`, or from the default location.
///
/// # Errors
/// Config read or parse errors.
pub fn load_config(path: Option<&Path>) -> Result<Config, crate::Error> {
    path.map_or_else(Config::load, Config::load_from)
}

/// Handler options from config with the global `--no-color` applied on top.
///
/// # Errors
/// Unknown level or style names in the config.
pub fn build_options(config: &Config, no_color: bool) -> Result<HandlerOptions, crate::Error> {
    let options = config.handler_options()?;
    Ok(if no_color { options.no_color(true) } else { options })
}

/// Parses `key=value` into an attribute, inferring int, float and bool
/// values. Anything else, including a value-less `key`, is a string.
#[must_use]
pub fn parse_attr(arg: &str) -> Attr {
    let (key, raw) = arg.split_once('=').unwrap_or((arg, ""));
    if let Ok(n) = raw.parse::<i64>() {
        return Attr::int64(key, n);
    }
    if let Ok(n) = raw.parse::<u64>() {
        return Attr::uint64(key, n);
    }
    if let Ok(f) = raw.parse::<f64>()
        && f.is_finite()
    {
        return Attr::float64(key, f);
    }
    match raw {
        "true" => Attr::bool(key, true),
        "false" => Attr::bool(key, false),
        _ => Attr::string(key, raw),
    }
}
