//! Construction-time settings for [`TextHandler`](super::TextHandler).

use crate::fmt::{KeyStyles, LevelStyles, SpecialStyles, Style, StyleOverrides, ValueStyles};
use crate::level::{Level, Leveler};
use std::fmt;
use std::sync::Arc;

/// Separator used between the message and attributes, and between attributes,
/// when none is configured.
pub const DEFAULT_SEPARATOR: &str = "\n\t";

/// Environment variable whose non-empty value turns color off.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Everything a root handler needs to know up front. Built fluently:
///
/// ```
/// use prismlog::{HandlerOptions, Level};
///
/// let opts = HandlerOptions::new()
///     .level(Level::DEBUG)
///     .no_color(true)
///     .attr_separator(" ");
/// assert!(!opts.color_enabled());
/// ```
#[derive(Clone)]
pub struct HandlerOptions {
    level: Arc<dyn Leveler>,
    no_color: bool,
    color_env: Option<String>,
    message_separator: String,
    attr_separator: String,
    styles: StyleOverrides,
}

impl Default for HandlerOptions {
    /// Info level, color on unless `NO_COLOR` is set, tab-indented attribute lines.
    fn default() -> Self {
        Self {
            level: Arc::new(Level::INFO),
            no_color: false,
            color_env: std::env::var(NO_COLOR_ENV).ok(),
            message_separator: DEFAULT_SEPARATOR.to_string(),
            attr_separator: DEFAULT_SEPARATOR.to_string(),
            styles: StyleOverrides::default(),
        }
    }
}

impl fmt::Debug for HandlerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerOptions")
            .field("level", &self.level.level())
            .field("no_color", &self.no_color)
            .field("color_env", &self.color_env)
            .field("message_separator", &self.message_separator)
            .field("attr_separator", &self.attr_separator)
            .field("styles", &self.styles)
            .finish()
    }
}

impl HandlerOptions {
    /// Same as [`Default::default`]; reads `NO_COLOR` once, here.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed minimum level.
    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.level = Arc::new(level);
        self
    }

    /// Minimum level read on every `enabled` call, e.g. a shared [`crate::LevelVar`].
    #[must_use]
    pub fn leveler(mut self, leveler: Arc<dyn Leveler>) -> Self {
        self.level = leveler;
        self
    }

    /// Turns color off locally. Typically driven by a tty check.
    #[must_use]
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    /// Replaces the captured `NO_COLOR` value. Any non-empty value disables
    /// color regardless of [`no_color`](Self::no_color).
    #[must_use]
    pub fn color_env(mut self, value: Option<impl Into<String>>) -> Self {
        self.color_env = value.map(Into::into);
        self
    }

    /// Text between the message and the first attribute. Empty keeps the default.
    #[must_use]
    pub fn message_separator(mut self, sep: impl Into<String>) -> Self {
        let sep = sep.into();
        if !sep.is_empty() {
            self.message_separator = sep;
        }
        self
    }

    /// Text between attributes. Empty keeps the default.
    #[must_use]
    pub fn attr_separator(mut self, sep: impl Into<String>) -> Self {
        let sep = sep.into();
        if !sep.is_empty() {
            self.attr_separator = sep;
        }
        self
    }

    #[must_use]
    pub fn level_styles(mut self, styles: LevelStyles) -> Self {
        self.styles.level = Some(styles);
        self
    }

    #[must_use]
    pub fn value_styles(mut self, styles: ValueStyles) -> Self {
        self.styles.value = Some(styles);
        self
    }

    #[must_use]
    pub fn key_styles(mut self, styles: KeyStyles) -> Self {
        self.styles.key = Some(styles);
        self
    }

    #[must_use]
    pub fn special_styles(mut self, styles: SpecialStyles) -> Self {
        self.styles.special = Some(styles);
        self
    }

    #[must_use]
    pub fn reset_style(mut self, style: Style) -> Self {
        self.styles.reset = Some(style);
        self
    }

    #[must_use]
    pub fn symbol_style(mut self, style: Style) -> Self {
        self.styles.symbol = Some(style);
        self
    }

    /// Replaces all style overrides at once.
    #[must_use]
    pub fn styles(mut self, styles: StyleOverrides) -> Self {
        self.styles = styles;
        self
    }

    #[must_use]
    pub fn min_level(&self) -> Level {
        self.level.level()
    }

    pub(crate) fn leveler_arc(&self) -> Arc<dyn Leveler> {
        Arc::clone(&self.level)
    }

    /// Color is on unless turned off locally or by the environment value.
    #[must_use]
    pub fn color_enabled(&self) -> bool {
        !self.no_color && self.color_env.as_deref().is_none_or(str::is_empty)
    }

    #[must_use]
    pub fn message_sep(&self) -> &str {
        &self.message_separator
    }

    #[must_use]
    pub fn attr_sep(&self) -> &str {
        &self.attr_separator
    }

    #[must_use]
    pub const fn style_overrides(&self) -> &StyleOverrides {
        &self.styles
    }
}
