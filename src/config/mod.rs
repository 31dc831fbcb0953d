//! TOML configuration loading and `source = "..."` include resolution.
//!
//! Separated from struct definitions so that the loading logic (file I/O, cycle
//! detection, merge strategy) stays independent of the serde schema.

mod structs;

pub use structs::{
    GeneralConfig, KeyStylesConfig, LevelStylesConfig, SeparatorConfig, SpecialStylesConfig,
    StylesConfig, ValueStylesConfig,
};

use crate::handler::HandlerOptions;
use crate::internal;
use crate::level::Level;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file to use instead of the default location.
pub const CONFIG_PATH_ENV: &str = "PRISMLOG_CONFIG";

/// Every field is defaulted, so an empty file yields a working handler.
///
/// ```toml
/// [general]
/// level = "debug"
///
/// [separators]
/// message = " | "
/// attribute = " "
///
/// [styles.key]
/// default = ["faint"]
/// keys = { err = ["red", "bold"] }
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub separators: SeparatorConfig,
    pub styles: StylesConfig,
}

/// Scans raw TOML for `source = "..."` directives before deserialization,
/// since serde cannot handle them. Returns the extracted paths and the
/// remaining TOML content stripped of those lines.
///
/// Only top-level lines (before the first `[table]` header) with a quoted
/// value are directives; a `source` key inside a table, such as a style for
/// the attribute key `source`, is left for the TOML parser.
#[doc(hidden)]
#[must_use]
pub fn extract_sources(content: &str) -> (Vec<String>, String) {
    let mut sources = Vec::new();
    let mut remaining = String::new();
    let mut in_table = false;

    for line in content.lines() {
        let trimmed = line.trim();
        in_table |= trimmed.starts_with('[');
        let directive = trimmed
            .strip_prefix("source")
            .filter(|_| !in_table)
            .map(str::trim_start)
            .and_then(|rest| rest.strip_prefix('='))
            .map(str::trim)
            .and_then(unquote);
        if let Some(path) = directive {
            if !path.is_empty() {
                sources.push(path.to_string());
            }
        } else {
            remaining.push_str(line);
            remaining.push('\n');
        }
    }

    (sources, remaining)
}

/// The contents of a `"..."` or `'...'` value.
fn unquote(value: &str) -> Option<&str> {
    ['"', '\'']
        .into_iter()
        .find_map(|q| value.strip_prefix(q)?.strip_suffix(q))
}

impl Config {
    /// Loads from `$PRISMLOG_CONFIG` if set, else `<config dir>/prismlog/config.toml`.
    /// A missing file yields defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        let config_path = Self::get_config_path()?;
        internal::debug(
            "Loading config",
            &[crate::Attr::string("path", config_path.display().to_string())],
        );
        let config = Self::load_with_sources(&config_path, &mut HashSet::new())?;
        internal::info(
            "Config loaded",
            &[crate::Attr::string("path", config_path.display().to_string())],
        );
        Ok(config)
    }

    /// Loads configuration from an explicit path instead of the default location.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or contains cyclic includes.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        Self::load_with_sources(path, &mut HashSet::new())
    }

    /// Parses config text directly. `source` directives are ignored here,
    /// since there is no file to resolve them against.
    ///
    /// # Errors
    /// TOML syntax or schema errors.
    pub fn from_toml(content: &str) -> Result<Self, crate::Error> {
        let (_, toml_content) = extract_sources(content);
        Ok(toml::from_str(&toml_content)?)
    }

    /// Recursive loader that expands `source = "..."` includes while tracking
    /// visited paths in `seen` to break include cycles.
    fn load_with_sources(path: &Path, seen: &mut HashSet<PathBuf>) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("Config file not found, using defaults", &[]);
            return Ok(Self::default());
        }

        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        if !seen.insert(canonical.clone()) {
            internal::warn(
                "Cyclic include detected",
                &[crate::Attr::string("path", canonical.display().to_string())],
            );
            return Err(crate::Error::CyclicInclude(canonical));
        }

        let content = fs::read_to_string(path)?;
        let (sources, toml_content) = extract_sources(&content);
        let mut config: Self = toml::from_str(&toml_content)?;

        for source_path in sources {
            let expanded = shellexpand::tilde(&source_path);
            let source_file = Path::new(expanded.as_ref());
            if source_file.exists() {
                internal::debug(
                    "Processing source",
                    &[crate::Attr::string("path", source_path.clone())],
                );
                let source_config = Self::load_with_sources(source_file, seen)?;
                config.merge(source_config);
            } else {
                internal::warn(
                    "Source file not found",
                    &[crate::Attr::string("path", source_path.clone())],
                );
            }
        }

        Ok(config)
    }

    /// Fills sections and map entries that `self` leaves unset from a
    /// sourced config, so the including file takes precedence.
    pub fn merge(&mut self, other: Self) {
        let Self {
            general: _,
            separators,
            styles,
        } = other;

        if self.separators.message.is_none() {
            self.separators.message = separators.message;
        }
        if self.separators.attribute.is_none() {
            self.separators.attribute = separators.attribute;
        }

        let mine = &mut self.styles;
        if mine.reset.is_none() {
            mine.reset = styles.reset;
        }
        if mine.symbol.is_none() {
            mine.symbol = styles.symbol;
        }
        if mine.level.is_none() {
            mine.level = styles.level;
        }
        if mine.value.is_none() {
            mine.value = styles.value;
        }
        if mine.special.is_none() {
            mine.special = styles.special;
        }
        if let Some(theirs) = styles.key {
            if let Some(key) = mine.key.as_mut() {
                for (k, v) in theirs.keys {
                    key.keys.entry(k).or_insert(v);
                }
                for (k, v) in theirs.groups {
                    key.groups.entry(k).or_insert(v);
                }
            } else {
                mine.key = Some(theirs);
            }
        }
    }

    /// Parsed minimum level.
    ///
    /// # Errors
    /// [`crate::Error::InvalidLevel`] for unknown level names.
    pub fn parse_level(&self) -> Result<Level, crate::Error> {
        Ok(self.general.level.parse()?)
    }

    /// Builds handler options from this config. `NO_COLOR` is still honored.
    ///
    /// # Errors
    /// Unknown level or style code names.
    pub fn handler_options(&self) -> Result<HandlerOptions, crate::Error> {
        let mut options = HandlerOptions::new()
            .level(self.parse_level()?)
            .no_color(self.general.no_color)
            .styles(self.styles.to_overrides()?);
        if let Some(sep) = &self.separators.message {
            options = options.message_separator(sep.as_str());
        }
        if let Some(sep) = &self.separators.attribute {
            options = options.attr_separator(sep.as_str());
        }
        Ok(options)
    }

    /// `$PRISMLOG_CONFIG`, or the platform config directory.
    ///
    /// # Errors
    /// [`crate::Error::ConfigDirNotFound`] when no home directory can be determined.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        directories::ProjectDirs::from("", "", "prismlog")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }
}
