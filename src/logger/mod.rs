//! A thin front-end over any [`Handler`]: builds records and forwards them.
//!
//! Front-ends usually have nowhere to report a failed write, so the leveled
//! methods drop handler errors; [`Logger::try_log`] surfaces them.

use crate::attr::Attr;
use crate::handler::Handler;
use crate::level::Level;
use crate::record::Record;
use std::fmt;
use std::sync::Arc;

/// Cheap to clone; clones share the handler.
#[derive(Clone)]
pub struct Logger {
    handler: Arc<dyn Handler>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}

impl Logger {
    pub fn new(handler: impl Handler + 'static) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    #[must_use]
    pub const fn from_handler(handler: Arc<dyn Handler>) -> Self {
        Self { handler }
    }

    #[must_use]
    pub fn handler(&self) -> &Arc<dyn Handler> {
        &self.handler
    }

    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        self.handler.enabled(level)
    }

    /// Logs at `level` if enabled, returning the handler's error.
    ///
    /// # Errors
    /// Whatever the handler returns, typically a sink write failure.
    pub fn try_log(&self, level: Level, msg: &str, attrs: &[Attr]) -> Result<(), crate::Error> {
        if !self.handler.enabled(level) {
            return Ok(());
        }
        let mut record = Record::new(level, msg);
        record.add_attrs(attrs.iter().cloned());
        self.handler.handle(&record)
    }

    /// Logs at `level` if enabled. Write failures are dropped.
    pub fn log(&self, level: Level, msg: &str, attrs: &[Attr]) {
        let _ = self.try_log(level, msg, attrs);
    }

    pub fn debug(&self, msg: &str, attrs: &[Attr]) {
        self.log(Level::DEBUG, msg, attrs);
    }

    pub fn info(&self, msg: &str, attrs: &[Attr]) {
        self.log(Level::INFO, msg, attrs);
    }

    pub fn warn(&self, msg: &str, attrs: &[Attr]) {
        self.log(Level::WARN, msg, attrs);
    }

    pub fn error(&self, msg: &str, attrs: &[Attr]) {
        self.log(Level::ERROR, msg, attrs);
    }

    /// A logger whose records all carry `attrs`.
    #[must_use]
    pub fn with(&self, attrs: &[Attr]) -> Self {
        if attrs.is_empty() {
            return self.clone();
        }
        Self::from_handler(self.handler.with_attrs(attrs))
    }

    /// A logger whose later attributes are qualified with `name.`.
    #[must_use]
    pub fn with_group(&self, name: &str) -> Self {
        if name.is_empty() {
            return self.clone();
        }
        Self::from_handler(self.handler.with_group(name))
    }
}
