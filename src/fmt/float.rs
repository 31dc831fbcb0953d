//! Float text: shortest round-trip digits, switching to exponent form for
//! very large or very small magnitudes so one value can't flood the line.
//!
//! `324.2`, `0.0001`, `1e-05`, `1.5e+21`, `5e-324`, `+Inf`, `NaN`.

use std::fmt::Write;

/// Decimal exponents in this range print positionally.
const PLAIN_EXPONENTS: std::ops::Range<i32> = -4..21;

/// Appends the text form of `v` to `buf`.
pub fn write_float(buf: &mut String, v: f64) {
    if v.is_nan() {
        buf.push_str("NaN");
        return;
    }
    if v.is_infinite() {
        buf.push_str(if v.is_sign_positive() { "+Inf" } else { "-Inf" });
        return;
    }

    let sci = format!("{v:e}");
    let exponent = sci
        .split_once('e')
        .and_then(|(mantissa, exp)| Some((mantissa, exp.parse::<i32>().ok()?)));
    match exponent {
        Some((mantissa, exp)) if !PLAIN_EXPONENTS.contains(&exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            let _ = write!(buf, "{mantissa}e{sign}{:02}", exp.unsigned_abs());
        }
        _ => {
            let _ = write!(buf, "{v}");
        }
    }
}

/// Convenience for callers that want an owned string.
#[must_use]
pub fn format_float(v: f64) -> String {
    let mut buf = String::new();
    write_float(&mut buf, v);
    buf
}
