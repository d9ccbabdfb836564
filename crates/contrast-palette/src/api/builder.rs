//! PaletteGenerator builder -- the primary ergonomic entry point for the crate.
//!
//! [`PaletteGenerator`] wraps [`Palette::new`] with fluent configuration and
//! hex-string seeds.

use rand::Rng;

use super::error::GenerateError;
use crate::color::Color;
use crate::palette::Palette;

/// Palette size used when `.colors()` is not called.
pub const DEFAULT_COLOR_COUNT: usize = 5;

/// High-level palette builder.
///
/// # Design
///
/// - Constructor takes the target contrast ratio; it is validated when
///   generating
/// - Configuration methods consume and return `self`
/// - [`generate()`](Self::generate) takes `&self` so the builder is
///   **reusable**: "keep these colors, regenerate the rest" is one builder
///   called repeatedly
///
/// # Example
///
/// ```
/// use contrast_palette::PaletteGenerator;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let generator = PaletteGenerator::new(4.5)
///     .colors(4)
///     .keep_hex(&["#979AC4"])
///     .unwrap();
///
/// let mut rng = StdRng::seed_from_u64(3);
/// let first = generator.generate(&mut rng).unwrap();
/// let second = generator.generate(&mut rng).unwrap();
///
/// assert_eq!(first.len(), 4);
/// assert!(second.colors().iter().any(|c| c.hex() == "#979AC4"));
/// ```
#[derive(Debug, Clone)]
pub struct PaletteGenerator {
    ratio: f64,
    count: usize,
    keep: Vec<Color>,
}

impl PaletteGenerator {
    /// Create a generator for the given target contrast ratio.
    pub fn new(ratio: f64) -> Self {
        Self {
            ratio,
            count: DEFAULT_COLOR_COUNT,
            keep: Vec::new(),
        }
    }

    /// Set the number of palette colors (seeds included).
    #[inline]
    pub fn colors(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Colors every generated palette must contain.
    #[inline]
    pub fn keep(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.keep = colors.into_iter().collect();
        self
    }

    /// Like [`keep()`](Self::keep), parsing `#RRGGBB` strings.
    pub fn keep_hex<S: AsRef<str>>(self, hexes: &[S]) -> Result<Self, GenerateError> {
        let colors = hexes
            .iter()
            .map(|h| Color::from_hex(h.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.keep(colors))
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn kept(&self) -> &[Color] {
        &self.keep
    }

    /// Generate a fresh palette.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Palette, GenerateError> {
        Ok(Palette::new(self.ratio, self.count, self.keep.clone(), rng)?)
    }
}
