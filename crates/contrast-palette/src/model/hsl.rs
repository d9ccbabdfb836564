//! HSL color type
//!
//! Hue, saturation and lightness, each expressed as a fraction. Hue is a
//! fraction of a full turn, so `0.5` is the complement of `0.0`.

use serde::Serialize;

use super::rgb::Rgb;

/// A color in HSL cylindrical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hsl {
    /// Hue as a fraction of a turn (0.0..1.0)
    pub h: f64,
    /// Saturation (0.0..=1.0)
    pub s: f64,
    /// Lightness (0.0..=1.0)
    pub l: f64,
}

impl Hsl {
    /// Create a new HSL triple. No range checking is done here; see
    /// [`Hsl::is_valid`] and [`crate::Color::from_hsl`].
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// True when every component is finite and within 0.0..=1.0.
    pub fn is_valid(&self) -> bool {
        [self.h, self.s, self.l]
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
    }

    /// The same color with its hue rotated by `turns`, wrapped into 0.0..1.0.
    ///
    /// # Example
    /// ```
    /// use contrast_palette::model::Hsl;
    /// let hsl = Hsl::new(0.75, 1.0, 0.5).rotate_hue(0.5);
    /// assert!((hsl.h - 0.25).abs() < 1e-12);
    /// ```
    pub fn rotate_hue(self, turns: f64) -> Self {
        Self {
            h: (self.h + turns).rem_euclid(1.0),
            ..self
        }
    }

    /// Convert to 8-bit sRGB, rounding each channel half-up.
    pub fn to_rgb(self) -> Rgb {
        let Self { h, s, l } = self;

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_channel(p, q, h + 1.0 / 3.0),
                hue_to_channel(p, q, h),
                hue_to_channel(p, q, h - 1.0 / 3.0),
            )
        };

        Rgb::new(to_byte(r), to_byte(g), to_byte(b))
    }
}

/// One channel of the HSL to RGB transform for a hue offset `t`.
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[inline]
fn to_byte(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}
