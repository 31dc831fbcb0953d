//! The handler capability and its single-line text implementation.
//!
//! A [`TextHandler`] is two reference-counted halves: configuration shared by
//! the whole derivation tree (palette, separators, level, sink) and the
//! immutable [`HandlerState`] of this particular derivation. Forking copies the
//! two pointers and allocates one new state; the shared half is read-only
//! except for the sink, which sits behind the only lock.

mod options;
mod pool;
mod render;
mod state;

pub use options::{DEFAULT_SEPARATOR, HandlerOptions, NO_COLOR_ENV};
pub use pool::{BufferPool, INITIAL_CAPACITY, MAX_POOLED_CAPACITY, PooledBuffer};
pub use render::TIME_FORMAT;
pub use state::HandlerState;

use crate::attr::Attr;
use crate::fmt::Palette;
use crate::level::{Level, Leveler};
use crate::record::Record;
use pool::POOL;
use render::LineFormatter;
use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// What a logging front-end calls into. Derivations return new handlers and
/// leave the receiver unchanged.
pub trait Handler: Send + Sync {
    /// Cheap pre-check so front-ends can skip building records nobody renders.
    fn enabled(&self, level: Level) -> bool;

    /// Renders and writes one record.
    ///
    /// # Errors
    /// Only a failed write to the sink; the line may have been partially written.
    fn handle(&self, record: &Record) -> Result<(), crate::Error>;

    /// A handler that renders `attrs` on every record after the message.
    fn with_attrs(&self, attrs: &[Attr]) -> Arc<dyn Handler>;

    /// A handler that qualifies every later attribute key with `name.`.
    fn with_group(&self, name: &str) -> Arc<dyn Handler>;
}

struct Shared {
    sink: Mutex<Box<dyn Write + Send>>,
    level: Arc<dyn Leveler>,
    formatter: LineFormatter,
}

/// Renders each record as one optionally colored line on a shared writer.
#[derive(Clone)]
pub struct TextHandler {
    shared: Arc<Shared>,
    state: Arc<HandlerState>,
}

impl fmt::Debug for TextHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextHandler")
            .field("level", &self.shared.level.level())
            .field("palette", self.shared.formatter.palette())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl TextHandler {
    /// Resolves the palette (color on or off, overrides applied) once for
    /// this handler and everything derived from it.
    pub fn new(out: impl Write + Send + 'static, options: &HandlerOptions) -> Self {
        let palette = Palette::resolve(options.style_overrides(), options.color_enabled());
        let formatter = LineFormatter::new(palette, options.message_sep(), options.attr_sep());
        Self {
            shared: Arc::new(Shared {
                sink: Mutex::new(Box::new(out)),
                level: options.leveler_arc(),
                formatter,
            }),
            state: Arc::new(HandlerState::default()),
        }
    }

    /// Handler writing to standard error.
    #[must_use]
    pub fn stderr(options: &HandlerOptions) -> Self {
        Self::new(io::stderr(), options)
    }

    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.shared.level.level()
    }

    /// Renders `record` into a pooled buffer and writes it under the sink lock.
    ///
    /// # Errors
    /// Returns [`crate::Error::Io`] when the sink write fails. Nothing is retried.
    pub fn handle(&self, record: &Record) -> Result<(), crate::Error> {
        let mut buf = POOL.acquire();
        self.shared
            .formatter
            .write_record(&mut buf, record, &self.state);

        let mut sink = self
            .shared
            .sink
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        sink.write_all(buf.as_bytes())?;
        Ok(())
    }

    /// Renders `attrs` now, under the current group path, and carries the
    /// text on the returned handler. An empty slice returns a handler that
    /// shares this one's state.
    #[must_use]
    pub fn with_attrs(&self, attrs: &[Attr]) -> Self {
        if attrs.is_empty() {
            return self.clone();
        }

        let mut buf = POOL.acquire();
        buf.push_str(self.state.preformatted());
        self.shared.formatter.write_attrs(
            &mut buf,
            attrs,
            self.state.group_prefix(),
            !self.state.preformatted().is_empty(),
        );
        self.derive(self.state.with_preformatted(&buf))
    }

    /// Opens a group for attributes added later, by either `with_attrs` or
    /// the record. An empty name returns a handler that shares this one's state.
    #[must_use]
    pub fn with_group(&self, name: &str) -> Self {
        if name.is_empty() {
            return self.clone();
        }

        let prefix = self.state.group_prefix();
        let mut group_prefix = String::with_capacity(prefix.len() + name.len() + 16);
        group_prefix.push_str(prefix);
        self.shared
            .formatter
            .write_group_segment(&mut group_prefix, name);
        self.derive(self.state.with_group_prefix(group_prefix))
    }

    /// Flushes the sink.
    ///
    /// # Errors
    /// I/O errors from the underlying writer.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.shared
            .sink
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()?;
        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> &HandlerState {
        &self.state
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        self.shared.formatter.palette()
    }

    /// True when both handlers carry the very same state allocation.
    #[must_use]
    pub fn shares_state_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }

    fn derive(&self, state: HandlerState) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            state: Arc::new(state),
        }
    }
}

impl Handler for TextHandler {
    fn enabled(&self, level: Level) -> bool {
        Self::enabled(self, level)
    }

    fn handle(&self, record: &Record) -> Result<(), crate::Error> {
        Self::handle(self, record)
    }

    fn with_attrs(&self, attrs: &[Attr]) -> Arc<dyn Handler> {
        Arc::new(Self::with_attrs(self, attrs))
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handler> {
        Arc::new(Self::with_group(self, name))
    }
}
