//! Unified error type for all prismlog operations.

use std::path::PathBuf;

/// Error type for prismlog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error, either from the output sink or from reading a config file.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Cyclic include detected in config sources.
    CyclicInclude(PathBuf),
    /// Invalid log level string.
    InvalidLevel(String),
    /// Unknown style code name in a config style list.
    InvalidStyle(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::CyclicInclude(p) => write!(f, "cyclic include: {}", p.display()),
            Self::InvalidLevel(level) => write!(f, "invalid level: {level}"),
            Self::InvalidStyle(name) => write!(f, "invalid style code: {name}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<crate::level::ParseLevelError> for Error {
    fn from(e: crate::level::ParseLevelError) -> Self {
        Self::InvalidLevel(e.input().to_string())
    }
}
