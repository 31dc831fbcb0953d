//! Style tables per semantic role and their resolution into the read-only
//! [`Palette`] a handler renders with.
//!
//! Each role table is replaced wholesale when overridden: a caller who
//! supplies a [`ValueStyles`] owns every field of it, and fields left as
//! [`Style::none`] render unstyled.

use super::Style;
use super::ansi::{fg, fmt, sgr};
use crate::level::Level;
use std::collections::HashMap;

/// Styles for the `|DBG ` style level markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelStyles {
    pub debug: Style,
    pub info: Style,
    pub warn: Style,
    pub error: Style,
}

impl Default for LevelStyles {
    fn default() -> Self {
        Self {
            debug: sgr(&[fg::GREEN]),
            info: sgr(&[fg::BLUE]),
            warn: sgr(&[fg::YELLOW]),
            error: sgr(&[fg::RED]),
        }
    }
}

impl LevelStyles {
    /// Every field unstyled.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            debug: Style::none(),
            info: Style::none(),
            warn: Style::none(),
            error: Style::none(),
        }
    }
}

/// Styles for attribute values, one per value kind. `error` applies to
/// "any" values that carry an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueStyles {
    pub string: Style,
    pub int: Style,
    pub float: Style,
    pub uint: Style,
    pub error: Style,
    pub time: Style,
    pub bool: Style,
    pub duration: Style,
    pub any: Style,
}

impl Default for ValueStyles {
    fn default() -> Self {
        Self {
            string: Style::none(),
            int: sgr(&[fg::YELLOW]),
            float: sgr(&[fg::YELLOW]),
            uint: sgr(&[fg::YELLOW]),
            error: sgr(&[fg::RED]),
            time: sgr(&[fmt::ITALIC]),
            bool: sgr(&[fg::GREEN]),
            duration: sgr(&[fg::CYAN]),
            any: Style::none(),
        }
    }
}

impl ValueStyles {
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            string: Style::none(),
            int: Style::none(),
            float: Style::none(),
            uint: Style::none(),
            error: Style::none(),
            time: Style::none(),
            bool: Style::none(),
            duration: Style::none(),
            any: Style::none(),
        }
    }
}

/// Styles for attribute keys and group names. Names missing from `keys` or
/// `groups` fall back to `default`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyStyles {
    pub default: Style,
    pub keys: HashMap<String, Style>,
    pub groups: HashMap<String, Style>,
}

impl Default for KeyStyles {
    fn default() -> Self {
        let error_key = sgr(&[fg::RED, fmt::FAINT]);
        let keys = HashMap::from([
            ("error".to_string(), error_key.clone()),
            ("err".to_string(), error_key),
        ]);
        Self {
            default: sgr(&[fmt::FAINT, fg::HI_WHITE, fmt::ITALIC, fmt::FAINT]),
            keys,
            groups: HashMap::new(),
        }
    }
}

impl KeyStyles {
    #[must_use]
    pub fn plain() -> Self {
        Self {
            default: Style::none(),
            keys: HashMap::new(),
            groups: HashMap::new(),
        }
    }
}

/// Styles for the record timestamp and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialStyles {
    pub time: Style,
    pub message: Style,
}

impl Default for SpecialStyles {
    fn default() -> Self {
        Self {
            time: sgr(&[fmt::FAINT, fg::HI_BLACK]),
            message: Style::none(),
        }
    }
}

impl SpecialStyles {
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            time: Style::none(),
            message: Style::none(),
        }
    }
}

/// Caller-supplied replacements. `None` keeps the default table for that role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleOverrides {
    pub level: Option<LevelStyles>,
    pub value: Option<ValueStyles>,
    pub key: Option<KeyStyles>,
    pub special: Option<SpecialStyles>,
    pub reset: Option<Style>,
    pub symbol: Option<Style>,
}

/// The effective, immutable style tables. Built once per root handler and
/// shared by every handler derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub level: LevelStyles,
    pub value: ValueStyles,
    pub key: KeyStyles,
    pub special: SpecialStyles,
    /// Emitted after every styled fragment.
    pub reset: Style,
    /// Wraps separators, `=` and `.`.
    pub symbol: Style,
}

impl Palette {
    /// Applies overrides over the defaults. With color off every token is
    /// emptied, overrides included, so rendering never needs to branch on it.
    #[must_use]
    pub fn resolve(overrides: &StyleOverrides, color: bool) -> Self {
        if !color {
            return Self::plain();
        }

        Self {
            level: overrides.level.clone().unwrap_or_default(),
            value: overrides.value.clone().unwrap_or_default(),
            key: overrides.key.clone().unwrap_or_default(),
            special: overrides.special.clone().unwrap_or_default(),
            reset: overrides
                .reset
                .clone()
                .unwrap_or_else(|| sgr(&[fmt::RESET])),
            symbol: overrides
                .symbol
                .clone()
                .unwrap_or_else(|| sgr(&[fmt::FAINT, fg::HI_WHITE])),
        }
    }

    /// A palette that renders no escape sequences at all.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            level: LevelStyles::plain(),
            value: ValueStyles::plain(),
            key: KeyStyles::plain(),
            special: SpecialStyles::plain(),
            reset: Style::none(),
            symbol: Style::none(),
        }
    }

    #[must_use]
    pub fn key_style(&self, key: &str) -> &Style {
        self.key.keys.get(key).unwrap_or(&self.key.default)
    }

    #[must_use]
    pub fn group_style(&self, name: &str) -> &Style {
        self.key.groups.get(name).unwrap_or(&self.key.default)
    }

    /// The three-letter marker and style for a named level, `None` for any
    /// other value.
    #[must_use]
    pub fn level_marker(&self, level: Level) -> Option<(&'static str, &Style)> {
        match level {
            Level::DEBUG => Some(("DBG", &self.level.debug)),
            Level::INFO => Some(("INF", &self.level.info)),
            Level::WARN => Some(("WRN", &self.level.warn)),
            Level::ERROR => Some(("ERR", &self.level.error)),
            _ => None,
        }
    }
}
