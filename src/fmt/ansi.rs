//! SGR parameter codes and the builder that joins them into one escape sequence.
//!
//! Codes are kept as text so named constants, 24-bit colors, and codes read
//! from config all flow through the same [`sgr`] call.

use super::{Color, Style};
use std::borrow::Cow;

const ESCAPE: char = '\x1b';

/// One SGR parameter (or a `;`-joined parameter group such as `38;2;R;G;B`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code(Cow<'static, str>);

impl Code {
    #[must_use]
    pub const fn from_static(code: &'static str) -> Self {
        Self(Cow::Borrowed(code))
    }

    /// 24-bit foreground color.
    #[must_use]
    pub fn fg_rgb(color: Color) -> Self {
        Self(Cow::Owned(format!("38;2;{};{};{}", color.r, color.g, color.b)))
    }

    /// 24-bit background color.
    #[must_use]
    pub fn bg_rgb(color: Color) -> Self {
        Self(Cow::Owned(format!("48;2;{};{};{}", color.r, color.g, color.b)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves a config name to a code.
    ///
    /// Accepts formatting names (`bold`, `faint`, ...), foreground colors
    /// (`red`, `hi_red`, ...), background colors with a `bg_` prefix, and hex
    /// colors as `#rrggbb` (foreground) or `bg#rrggbb` (background).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if let Some(hex) = name.strip_prefix("bg#") {
            return Color::from_hex(hex).map(Self::bg_rgb);
        }
        if let Some(hex) = name.strip_prefix('#') {
            return Color::from_hex(hex).map(Self::fg_rgb);
        }

        let lower = name.to_lowercase();
        let code = match lower.as_str() {
            "reset" => fmt::RESET,
            "bold" => fmt::BOLD,
            "faint" | "dim" => fmt::FAINT,
            "italic" => fmt::ITALIC,
            "underline" => fmt::UNDERLINE,
            "blink" => fmt::BLINK,
            "crossed_out" | "strikethrough" => fmt::CROSSED_OUT,
            other => {
                let (table, color) = other
                    .strip_prefix("bg_")
                    .map_or((&FG_NAMES, other), |rest| (&BG_NAMES, rest));
                return table
                    .iter()
                    .find(|(n, _)| *n == color)
                    .map(|(_, code)| code.clone());
            }
        };
        Some(code)
    }
}

/// Text attributes.
pub mod fmt {
    use super::Code;

    pub const RESET: Code = Code::from_static("0");
    pub const BOLD: Code = Code::from_static("1");
    pub const FAINT: Code = Code::from_static("2");
    pub const ITALIC: Code = Code::from_static("3");
    pub const UNDERLINE: Code = Code::from_static("4");
    pub const BLINK: Code = Code::from_static("5");
    pub const CROSSED_OUT: Code = Code::from_static("9");
}

/// Foreground colors.
pub mod fg {
    use super::Code;

    pub const BLACK: Code = Code::from_static("30");
    pub const RED: Code = Code::from_static("31");
    pub const GREEN: Code = Code::from_static("32");
    pub const YELLOW: Code = Code::from_static("33");
    pub const BLUE: Code = Code::from_static("34");
    pub const MAGENTA: Code = Code::from_static("35");
    pub const CYAN: Code = Code::from_static("36");
    pub const WHITE: Code = Code::from_static("37");
    pub const HI_BLACK: Code = Code::from_static("90");
    pub const HI_RED: Code = Code::from_static("91");
    pub const HI_GREEN: Code = Code::from_static("92");
    pub const HI_YELLOW: Code = Code::from_static("93");
    pub const HI_BLUE: Code = Code::from_static("94");
    pub const HI_MAGENTA: Code = Code::from_static("95");
    pub const HI_CYAN: Code = Code::from_static("96");
    pub const HI_WHITE: Code = Code::from_static("97");
}

/// Background colors.
pub mod bg {
    use super::Code;

    pub const BLACK: Code = Code::from_static("40");
    pub const RED: Code = Code::from_static("41");
    pub const GREEN: Code = Code::from_static("42");
    pub const YELLOW: Code = Code::from_static("43");
    pub const BLUE: Code = Code::from_static("44");
    pub const MAGENTA: Code = Code::from_static("45");
    pub const CYAN: Code = Code::from_static("46");
    pub const WHITE: Code = Code::from_static("47");
    pub const HI_BLACK: Code = Code::from_static("100");
    pub const HI_RED: Code = Code::from_static("101");
    pub const HI_GREEN: Code = Code::from_static("102");
    pub const HI_YELLOW: Code = Code::from_static("103");
    pub const HI_BLUE: Code = Code::from_static("104");
    pub const HI_MAGENTA: Code = Code::from_static("105");
    pub const HI_CYAN: Code = Code::from_static("106");
    pub const HI_WHITE: Code = Code::from_static("107");
}

static FG_NAMES: [(&str, Code); 16] = [
    ("black", fg::BLACK),
    ("red", fg::RED),
    ("green", fg::GREEN),
    ("yellow", fg::YELLOW),
    ("blue", fg::BLUE),
    ("magenta", fg::MAGENTA),
    ("cyan", fg::CYAN),
    ("white", fg::WHITE),
    ("hi_black", fg::HI_BLACK),
    ("hi_red", fg::HI_RED),
    ("hi_green", fg::HI_GREEN),
    ("hi_yellow", fg::HI_YELLOW),
    ("hi_blue", fg::HI_BLUE),
    ("hi_magenta", fg::HI_MAGENTA),
    ("hi_cyan", fg::HI_CYAN),
    ("hi_white", fg::HI_WHITE),
];

static BG_NAMES: [(&str, Code); 16] = [
    ("black", bg::BLACK),
    ("red", bg::RED),
    ("green", bg::GREEN),
    ("yellow", bg::YELLOW),
    ("blue", bg::BLUE),
    ("magenta", bg::MAGENTA),
    ("cyan", bg::CYAN),
    ("white", bg::WHITE),
    ("hi_black", bg::HI_BLACK),
    ("hi_red", bg::HI_RED),
    ("hi_green", bg::HI_GREEN),
    ("hi_yellow", bg::HI_YELLOW),
    ("hi_blue", bg::HI_BLUE),
    ("hi_magenta", bg::HI_MAGENTA),
    ("hi_cyan", bg::HI_CYAN),
    ("hi_white", bg::HI_WHITE),
];

/// Joins codes into a single `ESC [ c1 ; c2 ... m` sequence, preserving order.
/// No codes yields the empty style rather than a bare `ESC[m`, which
/// terminals would read as a reset.
#[must_use]
pub fn sgr(codes: &[Code]) -> Style {
    let Some((first, rest)) = codes.split_first() else {
        return Style::none();
    };

    let mut seq = String::with_capacity(3 + codes.len() * 3);
    seq.push(ESCAPE);
    seq.push('[');
    seq.push_str(first.as_str());
    for code in rest {
        seq.push(';');
        seq.push_str(code.as_str());
    }
    seq.push('m');
    Style::from(seq)
}
