//! Key/value attributes carried by records and attached to handlers.

use chrono::{DateTime, FixedOffset, TimeZone};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Upper bound on chained lazy values before resolution gives up.
const MAX_RESOLVE_DEPTH: usize = 100;

/// A value computed only when a handler actually renders it.
pub trait LogValuer: Send + Sync {
    fn log_value(&self) -> Value;
}

impl<F> LogValuer for F
where
    F: Fn() -> Value + Send + Sync,
{
    fn log_value(&self) -> Value {
        self()
    }
}

/// Payload of an "any" value.
#[derive(Clone, Default)]
pub enum AnyValue {
    /// The zero value; renders as `<nil>`.
    #[default]
    Nil,
    /// Rendered through its `Display` text with the error style.
    Error(Arc<dyn std::error::Error + Send + Sync>),
    /// Rendered through its `Debug` text with the any style.
    Other(Arc<dyn fmt::Debug + Send + Sync>),
}

impl fmt::Debug for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("<nil>"),
            Self::Error(e) => write!(f, "{e}"),
            Self::Other(v) => write!(f, "{v:?}"),
        }
    }
}

/// The kind of a [`Value`], for dispatch without borrowing the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    String,
    Int64,
    Uint64,
    Float64,
    Bool,
    Time,
    Duration,
    Group,
    Any,
    LogValuer,
}

/// An attribute value. The set of kinds is closed; anything else goes
/// through [`AnyValue`].
#[derive(Clone)]
pub enum Value {
    String(String),
    Int64(i64),
    Uint64(u64),
    Float64(f64),
    Bool(bool),
    Time(DateTime<FixedOffset>),
    Duration(Duration),
    Group(Vec<Attr>),
    Any(AnyValue),
    Lazy(Arc<dyn LogValuer>),
}

impl Default for Value {
    fn default() -> Self {
        Self::Any(AnyValue::Nil)
    }
}

impl Value {
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::String(_) => Kind::String,
            Self::Int64(_) => Kind::Int64,
            Self::Uint64(_) => Kind::Uint64,
            Self::Float64(_) => Kind::Float64,
            Self::Bool(_) => Kind::Bool,
            Self::Time(_) => Kind::Time,
            Self::Duration(_) => Kind::Duration,
            Self::Group(_) => Kind::Group,
            Self::Any(_) => Kind::Any,
            Self::Lazy(_) => Kind::LogValuer,
        }
    }

    pub fn time<Tz: TimeZone>(t: &DateTime<Tz>) -> Self {
        Self::Time(t.fixed_offset())
    }

    pub fn any<T: fmt::Debug + Send + Sync + 'static>(v: T) -> Self {
        Self::Any(AnyValue::Other(Arc::new(v)))
    }

    pub fn error<E: std::error::Error + Send + Sync + 'static>(e: E) -> Self {
        Self::Any(AnyValue::Error(Arc::new(e)))
    }

    pub fn lazy<L: LogValuer + 'static>(l: L) -> Self {
        Self::Lazy(Arc::new(l))
    }

    /// Forces lazy values until a concrete one is reached. Non-lazy values
    /// are returned borrowed.
    #[must_use]
    pub fn resolve(&self) -> Cow<'_, Self> {
        let Self::Lazy(first) = self else {
            return Cow::Borrowed(self);
        };

        let mut value = first.log_value();
        for _ in 1..MAX_RESOLVE_DEPTH {
            let Self::Lazy(next) = &value else {
                return Cow::Owned(value);
            };
            value = next.log_value();
        }
        if matches!(value, Self::Lazy(_)) {
            return Cow::Owned(Self::error(ResolveLoop));
        }
        Cow::Owned(value)
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Any(AnyValue::Nil))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s:?}"),
            Self::Int64(n) => write!(f, "{n}"),
            Self::Uint64(n) => write!(f, "{n}"),
            Self::Float64(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Time(t) => write!(f, "{t}"),
            Self::Duration(d) => write!(f, "{d:?}"),
            Self::Group(attrs) => f.debug_list().entries(attrs).finish(),
            Self::Any(v) => write!(f, "{v:?}"),
            Self::Lazy(_) => f.write_str("<lazy>"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int64(n)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Self::Uint64(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float64(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Duration> for Value {
    fn from(d: Duration) -> Self {
        Self::Duration(d)
    }
}

/// Returned in place of a value whose lazy chain never bottoms out.
#[derive(Debug)]
struct ResolveLoop;

impl fmt::Display for ResolveLoop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LogValue called too many times on Value of type {:?}",
            Kind::LogValuer
        )
    }
}

impl std::error::Error for ResolveLoop {}

/// A key/value pair. The zero `Attr` (empty key, nil value) is skipped
/// wherever it appears.
#[derive(Debug, Clone, Default)]
pub struct Attr {
    pub key: String,
    pub value: Value,
}

impl Attr {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, Value::String(value.into()))
    }

    pub fn int64(key: impl Into<String>, value: i64) -> Self {
        Self::new(key, Value::Int64(value))
    }

    /// Any integer that fits in `i64`.
    pub fn int(key: impl Into<String>, value: impl Into<i64>) -> Self {
        Self::new(key, Value::Int64(value.into()))
    }

    pub fn uint64(key: impl Into<String>, value: u64) -> Self {
        Self::new(key, Value::Uint64(value))
    }

    pub fn float64(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, Value::Float64(value))
    }

    pub fn bool(key: impl Into<String>, value: bool) -> Self {
        Self::new(key, Value::Bool(value))
    }

    pub fn time<Tz: TimeZone>(key: impl Into<String>, value: &DateTime<Tz>) -> Self {
        Self::new(key, Value::time(value))
    }

    pub fn duration(key: impl Into<String>, value: Duration) -> Self {
        Self::new(key, Value::Duration(value))
    }

    /// A named group of attributes. An empty key inlines the members.
    pub fn group(key: impl Into<String>, attrs: Vec<Self>) -> Self {
        Self::new(key, Value::Group(attrs))
    }

    pub fn any<T: fmt::Debug + Send + Sync + 'static>(key: impl Into<String>, value: T) -> Self {
        Self::new(key, Value::any(value))
    }

    pub fn error<E: std::error::Error + Send + Sync + 'static>(
        key: impl Into<String>,
        err: E,
    ) -> Self {
        Self::new(key, Value::error(err))
    }

    pub fn lazy<L: LogValuer + 'static>(key: impl Into<String>, valuer: L) -> Self {
        Self::new(key, Value::lazy(valuer))
    }

    /// True only for the zero attribute.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.key.is_empty() && self.value.is_nil()
    }
}
