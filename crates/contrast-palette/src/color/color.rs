//! The palette color value object.
//!
//! A [`Color`] carries every representation the palette algorithms need
//! (hex, RGB, HSL, XYZ) together with its WCAG luminance and ink color.
//! Everything is derived once at construction from the RGB triple and never
//! changes afterwards.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::Serialize;

use super::error::ColorError;
use super::ink::InkColor;
use crate::model::{contrast_ratio, Hsl, Rgb, Xyz};
use crate::solver::iterate_rgb_for_luminance;

/// Hue range for randomly seeded colors (a full turn).
const RANDOM_HUE: std::ops::Range<f64> = 0.0..1.0;
/// Saturation range for randomly seeded colors; avoids near-greys.
const RANDOM_SATURATION: std::ops::RangeInclusive<f64> = 0.6..=1.0;
/// Lightness range for randomly seeded colors; avoids near-black and near-white.
const RANDOM_LIGHTNESS: std::ops::RangeInclusive<f64> = 0.3..=0.7;

/// An immutable palette color.
///
/// Built from exactly one of:
///
/// - a hex string ([`Color::from_hex`] / [`FromStr`])
/// - a random source ([`Color::random`])
/// - an HSL triple ([`Color::from_hsl`])
/// - a target luminance ([`Color::from_luminance`])
///
/// # Example
///
/// ```
/// use contrast_palette::{Color, InkColor};
/// use contrast_palette::model::Rgb;
///
/// let lavender = Color::from_hex("#979ac4").unwrap();
/// assert_eq!(lavender.hex(), "#979AC4");
/// assert_eq!(lavender.rgb(), Rgb::new(151, 154, 196));
/// assert_eq!(lavender.ink(), InkColor::Black);
/// assert!(lavender.name().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Color {
    hex: String,
    rgb: Rgb,
    hsl: Hsl,
    xyz: Xyz,
    luminance: f64,
    ink: InkColor,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Color {
    /// Build a color from an RGB triple, deriving HSL from it.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self::derive(rgb, rgb.to_hsl())
    }

    /// Parse a `#RRGGBB` hex string.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let rgb: Rgb = hex.parse()?;
        Ok(Self::from_rgb(rgb))
    }

    /// A random, clearly chromatic mid-tone color.
    ///
    /// Hue is uniform over the full turn, saturation over 0.6..=1.0 and
    /// lightness over 0.3..=0.7.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let hsl = Hsl::new(
            rng.gen_range(RANDOM_HUE),
            rng.gen_range(RANDOM_SATURATION),
            rng.gen_range(RANDOM_LIGHTNESS),
        );
        Self::derive(hsl.to_rgb(), hsl)
    }

    /// Build a color from an HSL triple. The triple is kept verbatim.
    ///
    /// # Errors
    ///
    /// [`ColorError::HslOutOfRange`] if any component is not a finite
    /// number in 0.0..=1.0.
    pub fn from_hsl(hsl: Hsl) -> Result<Self, ColorError> {
        for (component, value) in [('h', hsl.h), ('s', hsl.s), ('l', hsl.l)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ColorError::HslOutOfRange { component, value });
            }
        }
        Ok(Self::derive(hsl.to_rgb(), hsl))
    }

    /// Synthesize a color whose luminance is at or beyond `target`.
    ///
    /// Targets outside 0.0..=1.0 are accepted and produce the closest
    /// reachable color on a best-effort basis (see [`crate::solver`]).
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidLuminance`] if `target` is NaN or infinite.
    pub fn from_luminance<R: Rng + ?Sized>(target: f64, rng: &mut R) -> Result<Self, ColorError> {
        if !target.is_finite() {
            return Err(ColorError::InvalidLuminance(target));
        }
        let outcome = iterate_rgb_for_luminance(target, rng);
        Ok(Self::from_rgb(outcome.rgb))
    }

    fn derive(rgb: Rgb, hsl: Hsl) -> Self {
        let luminance = rgb.luminance();
        Self {
            hex: rgb.to_hex(),
            rgb,
            hsl,
            xyz: rgb.to_xyz(),
            luminance,
            ink: InkColor::for_luminance(luminance),
            name: None,
        }
    }

    /// A copy carrying the results of an external naming lookup.
    ///
    /// `ink` overrides the computed ink color when present.
    pub fn enriched(&self, name: Option<String>, ink: Option<InkColor>) -> Self {
        Self {
            name,
            ink: ink.unwrap_or(self.ink),
            ..self.clone()
        }
    }

    /// Canonical `#RRGGBB` form (uppercase).
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// 8-bit sRGB channels.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Hue, saturation and lightness, each in 0.0..=1.0.
    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// CIE XYZ coordinates used for distinctness checks.
    pub fn xyz(&self) -> Xyz {
        self.xyz
    }

    /// WCAG relative luminance (0.0..=1.0).
    pub fn luminance(&self) -> f64 {
        self.luminance
    }

    /// Text color that reads best on this color.
    pub fn ink(&self) -> InkColor {
        self.ink
    }

    /// Human-readable name, if an enrichment step provided one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Euclidean distance to `other` in XYZ.
    pub fn distance(&self, other: &Color) -> f64 {
        self.xyz.distance(&other.xyz)
    }

    /// WCAG contrast ratio against `other`.
    pub fn contrast_with(&self, other: &Color) -> f64 {
        contrast_ratio(self.luminance, other.luminance)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} ({name})", self.hex),
            None => f.write_str(&self.hex),
        }
    }
}
