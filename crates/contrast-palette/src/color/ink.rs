//! Ink (foreground) color selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::{Rgb, INK_THRESHOLD};

/// Foreground color that stays legible on top of a given background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InkColor {
    Black,
    White,
}

impl InkColor {
    /// Ink for a background of the given relative luminance.
    ///
    /// Black above [`INK_THRESHOLD`], white at or below it.
    ///
    /// # Example
    /// ```
    /// use contrast_palette::InkColor;
    /// assert_eq!(InkColor::for_luminance(0.9), InkColor::Black);
    /// assert_eq!(InkColor::for_luminance(0.02), InkColor::White);
    /// ```
    pub fn for_luminance(luminance: f64) -> Self {
        if luminance > INK_THRESHOLD {
            InkColor::Black
        } else {
            InkColor::White
        }
    }

    /// The ink as an sRGB color.
    pub fn rgb(self) -> Rgb {
        match self {
            InkColor::Black => Rgb::BLACK,
            InkColor::White => Rgb::WHITE,
        }
    }

    /// Lowercase name used in JSON and CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            InkColor::Black => "black",
            InkColor::White => "white",
        }
    }
}

impl fmt::Display for InkColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an ink name is neither "black" nor "white".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown ink color: {0:?}")]
pub struct ParseInkError(pub String);

impl FromStr for InkColor {
    type Err = ParseInkError;

    /// Parse "black"/"white" (case-insensitive) or their hex forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "#000000" | "000000" => Ok(InkColor::Black),
            "white" | "#ffffff" | "ffffff" => Ok(InkColor::White),
            _ => Err(ParseInkError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(InkColor::for_luminance(INK_THRESHOLD), InkColor::White);
        assert_eq!(InkColor::for_luminance(INK_THRESHOLD + 1e-6), InkColor::Black);
        assert_eq!(InkColor::for_luminance(INK_THRESHOLD - 1e-6), InkColor::White);
    }

    #[test]
    fn test_parse() {
        assert_eq!("black".parse::<InkColor>().unwrap(), InkColor::Black);
        assert_eq!("White".parse::<InkColor>().unwrap(), InkColor::White);
        assert_eq!("#FFFFFF".parse::<InkColor>().unwrap(), InkColor::White);
        assert!("grey".parse::<InkColor>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&InkColor::Black).unwrap(), "\"black\"");
        let ink: InkColor = serde_json::from_str("\"white\"").unwrap();
        assert_eq!(ink, InkColor::White);
    }

    #[test]
    fn test_display_and_rgb() {
        assert_eq!(InkColor::White.to_string(), "white");
        assert_eq!(InkColor::Black.rgb(), Rgb::BLACK);
    }
}
