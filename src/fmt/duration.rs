//! Compact duration text: `0s`, `750ns`, `1.5µs`, `12ms`, `12s`, `1m30s`, `2h0m5.25s`.
//!
//! Sub-second durations use the largest unit that keeps the integer part
//! non-zero; longer ones are split into hours, minutes and fractional seconds.

use std::fmt::Write;
use std::time::Duration;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Appends the text form of `d` to `buf`.
pub fn write_duration(buf: &mut String, d: Duration) {
    let nanos = d.as_nanos();
    if nanos == 0 {
        buf.push_str("0s");
        return;
    }

    if nanos < NANOS_PER_SEC {
        let (unit, suffix) = if nanos < 1_000 {
            (1, "ns")
        } else if nanos < 1_000_000 {
            (1_000, "µs")
        } else {
            (1_000_000, "ms")
        };
        write_fraction(buf, nanos, unit);
        buf.push_str(suffix);
        return;
    }

    let total_secs = d.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs / 60) % 60;
    let seconds = u128::from(total_secs % 60);

    if hours > 0 {
        let _ = write!(buf, "{hours}h{minutes}m");
    } else if minutes > 0 {
        let _ = write!(buf, "{minutes}m");
    }
    let sub_nanos = seconds * NANOS_PER_SEC + u128::from(d.subsec_nanos());
    write_fraction(buf, sub_nanos, NANOS_PER_SEC);
    buf.push('s');
}

/// Convenience for callers that want an owned string.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let mut buf = String::new();
    write_duration(&mut buf, d);
    buf
}

/// Writes `value / unit` with the remainder as a decimal fraction,
/// trailing zeros removed.
fn write_fraction(buf: &mut String, value: u128, unit: u128) {
    let whole = value / unit;
    let rem = value % unit;
    let _ = write!(buf, "{whole}");
    if rem == 0 {
        return;
    }

    let width = unit.ilog10() as usize;
    let digits = format!("{rem:0width$}");
    buf.push('.');
    buf.push_str(digits.trim_end_matches('0'));
}

#[cfg(test)]
mod tests {
    use super::format_duration;
    use std::time::Duration;

    #[test]
    fn zero_is_zero_seconds() {
        assert_eq!(format_duration(Duration::ZERO), "0s");
    }

    #[test]
    fn sub_second_units() {
        assert_eq!(format_duration(Duration::from_nanos(750)), "750ns");
        assert_eq!(format_duration(Duration::from_nanos(1_500)), "1.5µs");
        assert_eq!(format_duration(Duration::from_millis(12)), "12ms");
        assert_eq!(format_duration(Duration::from_micros(12_345)), "12.345ms");
    }

    #[test]
    fn seconds_minutes_hours() {
        assert_eq!(format_duration(Duration::from_secs(12)), "12s");
        assert_eq!(format_duration(Duration::from_millis(2_500)), "2.5s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m30s");
        assert_eq!(format_duration(Duration::from_secs(3600)), "1h0m0s");
        assert_eq!(
            format_duration(Duration::from_millis(7_205_250)),
            "2h0m5.25s"
        );
    }
}
