//! prismlog's own diagnostic logger, rendered through the same handler it
//! provides so config warnings look like every other line on stderr.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if
//! multiple entry points (CLI, tests) race to call `init`.

use crate::attr::Attr;
use crate::config::Config;
use crate::handler::{HandlerOptions, TextHandler};
use crate::level::Level;
use crate::logger::Logger;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Initializes with default options at `level`. Only the first call takes effect.
pub fn init(level: Level) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| build_internal_logger(&HandlerOptions::new().level(level)));
    if !was_init {
        debug("Internal logger ready", &[]);
    }
}

/// Initializes from an already-loaded config. Falls back to defaults when the
/// config's level or styles don't parse, reporting why once ready.
pub fn init_with_config(config: &Config) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    let mut problem = None;
    INTERNAL_LOGGER.get_or_init(|| {
        let options = config.handler_options().unwrap_or_else(|e| {
            problem = Some(e.to_string());
            HandlerOptions::new()
        });
        build_internal_logger(&options)
    });
    if was_init {
        return;
    }
    if let Some(problem) = problem {
        warn(
            "Invalid config, using defaults",
            &[Attr::string("reason", problem)],
        );
    }
    debug(
        "Internal logger ready",
        &[Attr::string("level", config.general.level.clone())],
    );
}

fn build_internal_logger(options: &HandlerOptions) -> Logger {
    let handler = TextHandler::stderr(options).with_group("prismlog");
    Logger::new(handler)
}

/// Pre-init calls silently vanish rather than failing.
fn log(level: Level, msg: &str, attrs: &[Attr]) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        logger.log(level, msg, attrs);
    }
}

pub fn debug(msg: &str, attrs: &[Attr]) {
    log(Level::DEBUG, msg, attrs);
}

pub fn info(msg: &str, attrs: &[Attr]) {
    log(Level::INFO, msg, attrs);
}

pub fn warn(msg: &str, attrs: &[Attr]) {
    log(Level::WARN, msg, attrs);
}

pub fn error(msg: &str, attrs: &[Attr]) {
    log(Level::ERROR, msg, attrs);
}
