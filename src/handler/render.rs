//! Line rendering: attributes (recursively, through groups) and whole records.
//!
//! Every styled fragment is written as `style + text + reset`. With color off
//! the palette tokens are empty strings, so the same code produces plain text.

use super::pool::POOL;
use super::state::HandlerState;
use crate::attr::{AnyValue, Attr, Value};
use crate::fmt::{Palette, Style, write_duration, write_float, write_quoted};
use crate::record::Record;
use std::fmt::Write;

/// Millisecond precision, no zone suffix.
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Palette plus the two separators, pre-wrapped in the symbol style.
#[derive(Debug)]
pub(crate) struct LineFormatter {
    palette: Palette,
    message_separator: String,
    attr_separator: String,
}

impl LineFormatter {
    pub(crate) fn new(palette: Palette, message_separator: &str, attr_separator: &str) -> Self {
        let wrap = |sep: &str| format!("{}{sep}{}", palette.symbol, palette.reset);
        Self {
            message_separator: wrap(message_separator),
            attr_separator: wrap(attr_separator),
            palette,
        }
    }

    pub(crate) const fn palette(&self) -> &Palette {
        &self.palette
    }

    fn styled(&self, buf: &mut String, style: &Style, write: impl FnOnce(&mut String)) {
        buf.push_str(style.as_str());
        write(buf);
        buf.push_str(self.palette.reset.as_str());
    }

    /// Appends one `name.` segment for a group path.
    pub(crate) fn write_group_segment(&self, buf: &mut String, name: &str) {
        let p = &self.palette;
        self.styled(buf, p.group_style(name), |b| b.push_str(name));
        self.styled(buf, &p.symbol, |b| b.push('.'));
    }

    /// Appends `attrs` joined by the attribute separator. Attributes that
    /// render to nothing leave no separator behind. `preceded` says whether
    /// `buf` already ends in an attribute, in which case the first one
    /// written gets a leading separator. Returns whether `buf` now ends in
    /// an attribute.
    pub(crate) fn write_attrs(
        &self,
        buf: &mut String,
        attrs: &[Attr],
        prefix: &str,
        mut preceded: bool,
    ) -> bool {
        for attr in attrs {
            let mark = buf.len();
            if preceded {
                buf.push_str(&self.attr_separator);
            }
            let start = buf.len();
            self.write_attr(buf, attr, prefix);
            if buf.len() == start {
                buf.truncate(mark);
            } else {
                preceded = true;
            }
        }
        preceded
    }

    /// Appends a single attribute under the group path `prefix`.
    pub(crate) fn write_attr(&self, buf: &mut String, attr: &Attr, prefix: &str) {
        let value = attr.value.resolve();
        if attr.key.is_empty() && value.is_nil() {
            return;
        }

        if let Value::Group(members) = value.as_ref() {
            if members.is_empty() {
                return;
            }
            if attr.key.is_empty() {
                self.write_attrs(buf, members, prefix, false);
                return;
            }
            let mut nested = POOL.acquire();
            nested.push_str(prefix);
            self.write_group_segment(&mut nested, &attr.key);
            self.write_attrs(buf, members, &nested, false);
            return;
        }

        let p = &self.palette;
        buf.push_str(prefix);
        self.styled(buf, p.key_style(&attr.key), |b| b.push_str(&attr.key));
        self.styled(buf, &p.symbol, |b| b.push('='));
        self.write_value(buf, &value);
    }

    fn write_value(&self, buf: &mut String, value: &Value) {
        let v = &self.palette.value;
        match value {
            Value::String(s) => self.styled(buf, &v.string, |b| write_quoted(b, s)),
            Value::Int64(n) => self.styled(buf, &v.int, |b| {
                let _ = write!(b, "{n}");
            }),
            Value::Uint64(n) => self.styled(buf, &v.uint, |b| {
                let _ = write!(b, "{n}");
            }),
            Value::Float64(n) => self.styled(buf, &v.float, |b| write_float(b, *n)),
            Value::Bool(flag) => self.styled(buf, &v.bool, |b| {
                b.push_str(if *flag { "true" } else { "false" });
            }),
            Value::Time(t) => self.styled(buf, &v.time, |b| {
                let _ = write!(b, "{}", t.format(TIME_FORMAT));
            }),
            Value::Duration(d) => self.styled(buf, &v.duration, |b| write_duration(b, *d)),
            Value::Any(AnyValue::Error(e)) => self.styled(buf, &v.error, |b| {
                let _ = write!(b, "{e}");
            }),
            Value::Any(other) => self.styled(buf, &v.any, |b| {
                let _ = write!(b, "{other:?}");
            }),
            // Groups are expanded by the caller and lazies are resolved
            // before we get here.
            Value::Group(_) | Value::Lazy(_) => {
                let _ = write!(buf, "{value:?}");
            }
        }
    }

    /// Appends one complete, newline-terminated line for `record`.
    pub(crate) fn write_record(&self, buf: &mut String, record: &Record, state: &HandlerState) {
        let p = &self.palette;

        if let Some(time) = record.time {
            self.styled(buf, &p.special.time, |b| {
                let _ = write!(b, "{}", time.format(TIME_FORMAT));
            });
        }

        match p.level_marker(record.level) {
            Some((tag, style)) => self.styled(buf, style, |b| {
                b.push('|');
                b.push_str(tag);
                b.push(' ');
            }),
            None => buf.push_str("|INVALID "),
        }

        self.styled(buf, &p.special.message, |b| b.push_str(&record.message));

        let mark = buf.len();
        buf.push_str(&self.message_separator);
        let body = buf.len();
        buf.push_str(state.preformatted());
        self.write_attrs(
            buf,
            record.attrs(),
            state.group_prefix(),
            !state.preformatted().is_empty(),
        );
        if buf.len() == body {
            buf.truncate(mark);
        }

        buf.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fmt::StyleOverrides;

    fn plain() -> LineFormatter {
        LineFormatter::new(Palette::plain(), " | ", " ")
    }

    fn render(f: &LineFormatter, attr: &Attr, prefix: &str) -> String {
        let mut buf = String::new();
        f.write_attr(&mut buf, attr, prefix);
        buf
    }

    #[test]
    fn scalar_attr_with_prefix() {
        let f = plain();
        assert_eq!(render(&f, &Attr::int64("n", -3), "g."), "g.n=-3");
        assert_eq!(render(&f, &Attr::float64("f", 324.2), ""), "f=324.2");
        assert_eq!(render(&f, &Attr::uint64("u", 7), ""), "u=7");
    }

    #[test]
    fn extreme_floats_stay_short() {
        let f = plain();
        assert_eq!(render(&f, &Attr::float64("f", 1e300), ""), "f=1e+300");
        assert_eq!(render(&f, &Attr::float64("f", 5e-324), ""), "f=5e-324");
        assert_eq!(render(&f, &Attr::float64("f", f64::INFINITY), ""), "f=+Inf");
    }

    #[test]
    fn nested_groups_chain_prefixes() {
        let f = plain();
        let attr = Attr::group(
            "outer",
            vec![
                Attr::bool("a", true),
                Attr::group("inner", vec![Attr::string("b", "x")]),
            ],
        );
        assert_eq!(render(&f, &attr, ""), "outer.a=true outer.inner.b=\"x\"");
    }

    #[test]
    fn empty_members_leave_no_separator() {
        let f = plain();
        let attr = Attr::group(
            "g",
            vec![
                Attr::default(),
                Attr::int64("a", 1),
                Attr::group("empty", vec![]),
                Attr::default(),
            ],
        );
        assert_eq!(render(&f, &attr, ""), "g.a=1");
        assert_eq!(render(&f, &Attr::group("g", vec![Attr::default()]), ""), "");
    }

    #[test]
    fn unnamed_group_is_inlined() {
        let f = plain();
        let attr = Attr::group("", vec![Attr::int64("a", 1), Attr::int64("b", 2)]);
        assert_eq!(render(&f, &attr, "p."), "p.a=1 p.b=2");
    }

    #[test]
    fn styled_group_segments_resolve_by_name() {
        let mut overrides = StyleOverrides::default();
        overrides.key = Some(crate::fmt::KeyStyles {
            default: Style::from("<kd>"),
            keys: std::collections::HashMap::new(),
            groups: std::collections::HashMap::from([("g".to_string(), Style::from("<g>"))]),
        });
        overrides.value = Some(crate::fmt::ValueStyles::plain());
        overrides.reset = Some(Style::from("<r>"));
        overrides.symbol = Some(Style::from("<s>"));
        let f = LineFormatter::new(Palette::resolve(&overrides, true), "", "");

        let attr = Attr::group("g", vec![Attr::group("g", vec![Attr::bool("k", true)])]);
        assert_eq!(
            render(&f, &attr, ""),
            "<g>g<r><s>.<r><g>g<r><s>.<r><kd>k<r><s>=<r>true<r>"
        );
    }

    #[test]
    fn invalid_level_marker() {
        let f = plain();
        let record = Record::at(None, crate::Level::new(3), "m");
        let mut buf = String::new();
        f.write_record(&mut buf, &record, &HandlerState::default());
        assert_eq!(buf, "|INVALID m\n");
    }
}
