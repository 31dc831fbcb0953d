//! Double-quoted string rendering for string attribute values.
//!
//! Printable characters pass through, including non-ASCII text. Quotes,
//! backslashes and everything outside the letter, mark, number, punctuation
//! and symbol categories are escaped, so a value can never break the line,
//! hide text, or smuggle in its own escape sequences. ASCII space is the
//! only separator that stays raw.

use std::fmt::Write;
use unicode_general_category::{GeneralCategory, get_general_category};

/// Appends `s` to `buf` wrapped in double quotes with escapes applied.
pub fn write_quoted(buf: &mut String, s: &str) {
    buf.reserve(s.len() + 2);
    buf.push('"');
    for c in s.chars() {
        match c {
            '"' => buf.push_str("\\\""),
            '\\' => buf.push_str("\\\\"),
            '\x07' => buf.push_str("\\a"),
            '\x08' => buf.push_str("\\b"),
            '\x0c' => buf.push_str("\\f"),
            '\n' => buf.push_str("\\n"),
            '\r' => buf.push_str("\\r"),
            '\t' => buf.push_str("\\t"),
            '\x0b' => buf.push_str("\\v"),
            c if c.is_ascii_control() => {
                let _ = write!(buf, "\\x{:02x}", c as u32);
            }
            c if !is_printable(c) => {
                let cp = c as u32;
                if cp > 0xFFFF {
                    let _ = write!(buf, "\\U{cp:08x}");
                } else {
                    let _ = write!(buf, "\\u{cp:04x}");
                }
            }
            c => buf.push(c),
        }
    }
    buf.push('"');
}

/// Convenience for callers that want an owned quoted string.
#[must_use]
pub fn quote(s: &str) -> String {
    let mut buf = String::with_capacity(s.len() + 2);
    write_quoted(&mut buf, s);
    buf
}

/// Letters, marks, numbers, punctuation, symbols and the ASCII space.
/// Other separators, controls, format characters, private-use and
/// unassigned code points are not.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
            | GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::PrivateUse
            | GeneralCategory::Surrogate
            | GeneralCategory::Unassigned
    )
}

#[cfg(test)]
mod tests {
    use super::quote;

    #[test]
    fn plain_text_is_only_wrapped() {
        assert_eq!(quote("attribute"), "\"attribute\"");
        assert_eq!(quote(""), "\"\"");
    }

    #[test]
    fn quotes_and_backslashes_are_escaped() {
        assert_eq!(quote(r#"say "hi"\now"#), r#""say \"hi\"\\now""#);
    }

    #[test]
    fn control_characters_are_escaped() {
        assert_eq!(quote("a\nb\tc\r"), r#""a\nb\tc\r""#);
        assert_eq!(quote("\x1b[31m"), r#""\x1b[31m""#);
        assert_eq!(quote("\x7f"), r#""\x7f""#);
        assert_eq!(quote("\u{85}"), r#""\u0085""#);
        assert_eq!(quote("a\u{a0}b"), r#""a\u00a0b""#);
        assert_eq!(quote("a\u{3000}b"), r#""a\u3000b""#);
        assert_eq!(quote("a\u{e000}b"), r#""a\ue000b""#);
        assert_eq!(quote("a\u{600}b"), r#""a\u0600b""#);
        assert_eq!(quote("a\u{e0001}b"), r#""a\U000e0001b""#);
        assert_eq!(quote("a\u{2028}b"), r#""a\u2028b""#);
    }

    #[test]
    fn unassigned_code_points_are_escaped() {
        assert_eq!(quote("\u{378}"), r#""\u0378""#);
        assert_eq!(quote("\u{10ffff}"), r#""\U0010ffff""#);
    }

    #[test]
    fn printable_unicode_passes_through_invisible_is_escaped() {
        assert_eq!(quote("héllo 世界"), "\"héllo 世界\"");
        assert_eq!(quote("e\u{301} €→😀"), "\"e\u{301} €→😀\"");
        assert_eq!(quote("a\u{200b}b"), r#""a\u200bb""#);
    }
}
