//! Palette colors
//!
//! [`Color`] is the value object every other component trades in: an
//! immutable bundle of hex, RGB, HSL and XYZ plus the derived WCAG
//! luminance and [`InkColor`].

mod color;
mod error;
mod ink;

pub use color::Color;
pub use error::{ColorError, ParseColorError};
pub use ink::{InkColor, ParseInkError};
