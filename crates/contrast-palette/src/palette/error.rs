//! Error types for palette construction

use thiserror::Error;

use crate::color::ColorError;

/// Error type for palette validation.
///
/// Returned when the requested palette configuration is invalid. Search
/// exhaustion during generation is not an error: the distinct-set search
/// and the luminance solver both fall back to a best-effort color.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// Target contrast ratio is NaN, infinite, or outside 1.0..=21.0
    #[error("target contrast ratio must be between 1 and 21, got {0}")]
    InvalidRatio(f64),
    /// Zero colors requested
    #[error("palette must contain at least one color")]
    EmptyPalette,
    /// More seed colors than palette slots
    #[error("{seeds} seed colors do not fit in a palette of {requested}")]
    TooManySeeds {
        /// Number of seed colors supplied
        seeds: usize,
        /// Requested palette size
        requested: usize,
    },
    /// A color could not be constructed
    #[error("invalid color: {0}")]
    Color(#[from] ColorError),
}
