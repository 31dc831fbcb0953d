//! Configuration struct definitions.
//!
//! Style entries are lists of code names as accepted by
//! [`Code::from_name`](crate::fmt::Code::from_name), e.g. `["faint", "hi_white"]`.

use crate::fmt::{KeyStyles, LevelStyles, SpecialStyles, Style, StyleOverrides, ValueStyles};
use serde::Deserialize;
use std::collections::HashMap;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum log level.
    pub level: String,
    /// Disable colors.
    pub no_color: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            no_color: false,
        }
    }
}

/// Separator text. Unset (or empty) keeps the built-in newline + tab.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SeparatorConfig {
    /// Between the message and the first attribute.
    pub message: Option<String>,
    /// Between attributes.
    pub attribute: Option<String>,
}

/// Style overrides. Each present sub-table replaces the whole default table
/// for its role; entries missing from a present table render unstyled.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct StylesConfig {
    /// Sequence emitted after every styled fragment.
    pub reset: Option<Vec<String>>,
    /// Style of separators, `=` and `.`.
    pub symbol: Option<Vec<String>>,
    pub level: Option<LevelStylesConfig>,
    pub value: Option<ValueStylesConfig>,
    pub special: Option<SpecialStylesConfig>,
    pub key: Option<KeyStylesConfig>,
}

/// Level marker styles.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LevelStylesConfig {
    pub debug: Vec<String>,
    pub info: Vec<String>,
    pub warn: Vec<String>,
    pub error: Vec<String>,
}

/// Value styles by kind.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ValueStylesConfig {
    pub string: Vec<String>,
    pub int: Vec<String>,
    pub float: Vec<String>,
    pub uint: Vec<String>,
    pub error: Vec<String>,
    pub time: Vec<String>,
    pub bool: Vec<String>,
    pub duration: Vec<String>,
    pub any: Vec<String>,
}

/// Timestamp and message styles.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SpecialStylesConfig {
    pub time: Vec<String>,
    pub message: Vec<String>,
}

/// Key and group-name styles.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct KeyStylesConfig {
    /// Fallback for keys and groups not listed below.
    pub default: Vec<String>,
    pub keys: HashMap<String, Vec<String>>,
    pub groups: HashMap<String, Vec<String>>,
}

impl LevelStylesConfig {
    /// # Errors
    /// Unknown style code names.
    pub fn to_styles(&self) -> Result<LevelStyles, crate::Error> {
        Ok(LevelStyles {
            debug: Style::parse(&self.debug)?,
            info: Style::parse(&self.info)?,
            warn: Style::parse(&self.warn)?,
            error: Style::parse(&self.error)?,
        })
    }
}

impl ValueStylesConfig {
    /// # Errors
    /// Unknown style code names.
    pub fn to_styles(&self) -> Result<ValueStyles, crate::Error> {
        Ok(ValueStyles {
            string: Style::parse(&self.string)?,
            int: Style::parse(&self.int)?,
            float: Style::parse(&self.float)?,
            uint: Style::parse(&self.uint)?,
            error: Style::parse(&self.error)?,
            time: Style::parse(&self.time)?,
            bool: Style::parse(&self.bool)?,
            duration: Style::parse(&self.duration)?,
            any: Style::parse(&self.any)?,
        })
    }
}

impl SpecialStylesConfig {
    /// # Errors
    /// Unknown style code names.
    pub fn to_styles(&self) -> Result<SpecialStyles, crate::Error> {
        Ok(SpecialStyles {
            time: Style::parse(&self.time)?,
            message: Style::parse(&self.message)?,
        })
    }
}

impl KeyStylesConfig {
    /// # Errors
    /// Unknown style code names.
    pub fn to_styles(&self) -> Result<KeyStyles, crate::Error> {
        Ok(KeyStyles {
            default: Style::parse(&self.default)?,
            keys: parse_map(&self.keys)?,
            groups: parse_map(&self.groups)?,
        })
    }
}

fn parse_map(
    map: &HashMap<String, Vec<String>>,
) -> Result<HashMap<String, Style>, crate::Error> {
    map.iter()
        .map(|(name, codes)| Ok((name.clone(), Style::parse(codes)?)))
        .collect()
}

impl StylesConfig {
    /// Converts every present section; absent ones stay `None` so the
    /// handler falls back to its defaults for them.
    ///
    /// # Errors
    /// Unknown style code names.
    pub fn to_overrides(&self) -> Result<StyleOverrides, crate::Error> {
        Ok(StyleOverrides {
            level: self.level.as_ref().map(LevelStylesConfig::to_styles).transpose()?,
            value: self.value.as_ref().map(ValueStylesConfig::to_styles).transpose()?,
            key: self.key.as_ref().map(KeyStylesConfig::to_styles).transpose()?,
            special: self
                .special
                .as_ref()
                .map(SpecialStylesConfig::to_styles)
                .transpose()?,
            reset: self.reset.as_deref().map(Style::parse).transpose()?,
            symbol: self.symbol.as_deref().map(Style::parse).transpose()?,
        })
    }
}
