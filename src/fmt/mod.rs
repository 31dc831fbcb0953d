//! Text primitives the handler renders with: escape codes, style tokens,
//! the role-to-style tables, and value-specific text formats.

pub mod ansi;
mod color;
pub mod duration;
pub mod float;
pub mod palette;
pub mod quote;
mod style;

pub use ansi::{Code, sgr};
pub use color::Color;
pub use duration::{format_duration, write_duration};
pub use float::{format_float, write_float};
pub use palette::{
    KeyStyles, LevelStyles, Palette, SpecialStyles, StyleOverrides, ValueStyles,
};
pub use quote::{quote, write_quoted};
pub use style::Style;
