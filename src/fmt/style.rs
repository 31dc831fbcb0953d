//! Style tokens: precomposed escape sequences handed around as plain text.

use super::ansi::{Code, sgr};
use std::fmt;

/// Zero or more display attributes already joined into one escape sequence,
/// or the empty string for "no styling". Rendering always inserts the token,
/// so disabling color only needs to empty the tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Style(String);

impl Style {
    #[must_use]
    pub const fn none() -> Self {
        Self(String::new())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds a style from config code names, e.g. `["faint", "hi_white"]`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidStyle`] naming the first unknown code.
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self, crate::Error> {
        let codes = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                Code::from_name(name).ok_or_else(|| crate::Error::InvalidStyle(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(sgr(&codes))
    }
}

impl From<String> for Style {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Style {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for Style {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
