//! Public API: the [`PaletteGenerator`] builder and [`GenerateError`].

mod builder;
mod error;

pub use builder::{PaletteGenerator, DEFAULT_COLOR_COUNT};
pub use error::GenerateError;
