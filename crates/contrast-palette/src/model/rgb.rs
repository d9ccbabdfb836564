//! 8-bit sRGB color type
//!
//! `Rgb` is the canonical representation of every color in the crate:
//! hex, HSL, XYZ and luminance are all derived from it.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::hsl::Hsl;
use super::transfer::srgb_to_linear;
use super::wcag::LUMINANCE_COEFFICIENTS;
use super::xyz::Xyz;
use crate::color::ParseColorError;

/// A color as three 8-bit sRGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from 8-bit channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as encoded sRGB fractions (0.0..=1.0).
    #[inline]
    pub fn to_unit(self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }

    /// Channels as linear light (0.0..=1.0).
    #[inline]
    pub fn to_linear(self) -> [f64; 3] {
        self.to_unit().map(srgb_to_linear)
    }

    /// Canonical hex form: `#` followed by six uppercase digits.
    ///
    /// # Example
    /// ```
    /// use contrast_palette::model::Rgb;
    /// assert_eq!(Rgb::new(151, 154, 196).to_hex(), "#979AC4");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// WCAG relative luminance (0.0..=1.0).
    pub fn luminance(self) -> f64 {
        let [r, g, b] = self.to_linear();
        let [kr, kg, kb] = LUMINANCE_COEFFICIENTS;
        kr * r + kg * g + kb * b
    }

    /// CIE XYZ (D65, 2° observer) on the 0..100 scale.
    pub fn to_xyz(self) -> Xyz {
        let [r, g, b] = self.to_linear().map(|c| c * 100.0);
        Xyz {
            x: r * 0.4124 + g * 0.3576 + b * 0.1805,
            y: r * 0.2126 + g * 0.7152 + b * 0.0722,
            z: r * 0.0193 + g * 0.1192 + b * 0.9505,
        }
    }

    /// Convert to HSL with every component in 0.0..=1.0 (hue in 0.0..1.0).
    pub fn to_hsl(self) -> Hsl {
        let [r, g, b] = self.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl::new(0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let sector = if max == r {
            ((g - b) / d + if g < b { 6.0 } else { 0.0 }) % 6.0
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl::new(sector / 6.0, s, l)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a `#RRGGBB` (or `RRGGBB`) hex string.
    ///
    /// Parsing is case-insensitive and trims surrounding whitespace. Only the
    /// six-digit form is accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use contrast_palette::model::Rgb;
    ///
    /// let c: Rgb = "#979ac4".parse().unwrap();
    /// assert_eq!(c, Rgb::new(151, 154, 196));
    /// assert!("#FFF".parse::<Rgb>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if s.len() != 6 {
            return Err(ParseColorError::InvalidLength(s.len()));
        }
        // from_str_radix accepts a leading '+', which is not a hex digit
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(s.to_string()));
        }

        let r = u8::from_str_radix(&s[0..2], 16)?;
        let g = u8::from_str_radix(&s[2..4], 16)?;
        let b = u8::from_str_radix(&s[4..6], 16)?;
        Ok(Self::new(r, g, b))
    }
}
