//! Severity levels and the thresholds handlers compare them against.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicI32, Ordering};

/// An integer severity. Gaps between the named levels leave room for custom
/// severities; anything other than the four named values renders as invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Level(i32);

impl Level {
    /// Startup, teardown, and state-change details useful for diagnosing issues.
    pub const DEBUG: Self = Self(-4);
    /// Normal operational milestones.
    pub const INFO: Self = Self(0);
    /// Non-fatal anomalies that may need attention.
    pub const WARN: Self = Self(4);
    /// Failures that prevent an operation from completing.
    pub const ERROR: Self = Self(8);

    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Lowercase because config files and CLI args use lowercase level strings.
    /// Returns `None` for values outside the four named levels.
    #[must_use]
    pub const fn as_str(self) -> Option<&'static str> {
        match self.0 {
            -4 => Some("debug"),
            0 => Some("info"),
            4 => Some("warn"),
            8 => Some("error"),
            _ => None,
        }
    }

    /// The named levels, lowest first.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::DEBUG, Self::INFO, Self::WARN, Self::ERROR]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(name) => f.write_str(name),
            None => write!(f, "level({})", self.0),
        }
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl ParseLevelError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::DEBUG),
            "info" => Ok(Self::INFO),
            "warn" | "warning" => Ok(Self::WARN),
            "error" | "err" => Ok(Self::ERROR),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// Anything that can report a minimum level. Handlers ask on every
/// `enabled` call, so implementations must be cheap.
pub trait Leveler: Send + Sync {
    fn level(&self) -> Level;
}

impl Leveler for Level {
    fn level(&self) -> Level {
        *self
    }
}

/// A minimum level that can be changed while handlers holding it are live.
#[derive(Debug, Default)]
pub struct LevelVar(AtomicI32);

impl LevelVar {
    #[must_use]
    pub const fn new(level: Level) -> Self {
        Self(AtomicI32::new(level.0))
    }

    pub fn set(&self, level: Level) {
        self.0.store(level.0, Ordering::Relaxed);
    }
}

impl Leveler for LevelVar {
    fn level(&self) -> Level {
        Level(self.0.load(Ordering::Relaxed))
    }
}
