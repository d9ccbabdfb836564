//! Unified error type for the contrast-palette public API.
//!
//! [`GenerateError`] wraps the crate's error types into a single enum for
//! convenient `?` propagation in application code.

use thiserror::Error;

use crate::color::{ColorError, ParseColorError};
use crate::palette::PaletteError;

/// Unified error type for the contrast-palette public API.
///
/// # Example
///
/// ```
/// use contrast_palette::{Color, GenerateError};
///
/// fn parse(hex: &str) -> Result<Color, GenerateError> {
///     Ok(hex.parse::<Color>()?)
/// }
///
/// assert!(parse("#000000").is_ok());
/// assert!(parse("nope").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateError {
    /// Palette validation error (ratio, size or seed count)
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),
    /// Color construction error (hex, HSL or luminance input)
    #[error("color error: {0}")]
    Color(#[from] ColorError),
}

impl From<ParseColorError> for GenerateError {
    fn from(err: ParseColorError) -> Self {
        GenerateError::Color(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        let err: GenerateError = PaletteError::EmptyPalette.into();
        assert_eq!(
            err.to_string(),
            "palette error: palette must contain at least one color"
        );

        let err: GenerateError = ParseColorError::InvalidLength(1).into();
        assert!(matches!(err, GenerateError::Color(ColorError::Parse(_))));
    }
}
