//! `prismlog` - colorful single-line structured log handler.
//!
//! Renders structured records (timestamp, level, message, key/value
//! attributes and nested groups) as one human-readable, optionally
//! ANSI-colored line per record:
//! - Handlers fork cheaply with [`TextHandler::with_attrs`] and
//!   [`TextHandler::with_group`]; forks never affect each other
//! - Per-role style overrides, with `NO_COLOR` honored at construction
//! - Pooled render buffers and one locked write per line
//! - TOML configuration with `source = "..."` includes
//!
//! # Example
//!
//! ```
//! use prismlog::{Attr, HandlerOptions, Level, Logger, TextHandler};
//!
//! let opts = HandlerOptions::new().level(Level::DEBUG).no_color(true);
//! let logger = Logger::new(TextHandler::new(std::io::sink(), &opts));
//!
//! let req = logger.with_group("req").with(&[Attr::string("id", "42")]);
//! req.info("handled", &[Attr::int64("status", 200)]);
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `prismlog` command-line tool

pub mod attr;
pub mod config;
mod error;
pub mod fmt;
pub mod handler;
pub mod internal;
pub mod level;
pub mod logger;
pub mod record;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

pub use attr::{AnyValue, Attr, Kind, LogValuer, Value};
pub use config::Config;
pub use error::Error;
pub use fmt::{Code, Color, Style, sgr};
pub use handler::{Handler, HandlerOptions, HandlerState, TextHandler};
pub use level::{Level, LevelVar, Leveler};
pub use logger::Logger;
pub use record::Record;
