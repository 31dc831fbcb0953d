//! The unit of work a handler renders: one event with its attributes.

use crate::attr::Attr;
use crate::level::Level;
use chrono::{DateTime, FixedOffset, Local};

/// A log event as built by the front-end. Handlers only read it.
#[derive(Debug, Clone)]
pub struct Record {
    /// `None` leaves the timestamp out of the rendered line.
    pub time: Option<DateTime<FixedOffset>>,
    pub level: Level,
    pub message: String,
    attrs: Vec<Attr>,
}

impl Record {
    /// A record stamped with the current local time.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self::at(Some(Local::now().fixed_offset()), level, message)
    }

    /// A record with an explicit, possibly absent, timestamp.
    pub fn at(
        time: Option<DateTime<FixedOffset>>,
        level: Level,
        message: impl Into<String>,
    ) -> Self {
        Self {
            time,
            level,
            message: message.into(),
            attrs: Vec::new(),
        }
    }

    pub fn add_attrs(&mut self, attrs: impl IntoIterator<Item = Attr>) {
        self.attrs.extend(attrs);
    }

    #[must_use]
    pub fn with_attr(mut self, attr: Attr) -> Self {
        self.attrs.push(attr);
        self
    }

    #[must_use]
    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    #[must_use]
    pub fn num_attrs(&self) -> usize {
        self.attrs.len()
    }
}
