//! The `Palette` orchestrator.
//!
//! Composes the distinct-set search and contrast planning into one
//! immutable result. Regenerating means building a new `Palette`.

use rand::Rng;
use serde::Serialize;

use super::contrast::{plan_contrasts, unachievable_range, LuminanceRange};
use super::distinct::DistinctSetBuilder;
use super::error::PaletteError;
use crate::color::Color;
use crate::model::MAX_CONTRAST_RATIO;

/// A generated palette: distinct colors plus their contrast colors.
///
/// # Invariants
///
/// - `colors` is sorted by ascending luminance and never empty
/// - `contrasts` holds one color per ink group present in `colors`
///   (dark-leaning group first), so 1 or 2 entries
/// - every seed color appears in `colors`
///
/// # Example
///
/// ```
/// use contrast_palette::{Color, Palette};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let seeds = vec![Color::from_hex("#979AC4").unwrap()];
/// let palette = Palette::new(4.5, 5, seeds, &mut rng).unwrap();
///
/// assert_eq!(palette.len(), 5);
/// assert!(palette.colors().iter().any(|c| c.hex() == "#979AC4"));
/// assert!(matches!(palette.contrasts().len(), 1 | 2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    target_ratio: f64,
    unachievable: LuminanceRange,
    colors: Vec<Color>,
    contrasts: Vec<Color>,
}

impl Palette {
    /// Generate a palette of `count` colors that includes every seed.
    ///
    /// With no seeds the palette starts from a random color.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::InvalidRatio`] if `ratio` is not a finite number in
    ///   1.0..=21.0
    /// - [`PaletteError::EmptyPalette`] if `count` is zero
    /// - [`PaletteError::TooManySeeds`] if there are more seeds than `count`
    pub fn new<R: Rng + ?Sized>(
        ratio: f64,
        count: usize,
        seeds: Vec<Color>,
        rng: &mut R,
    ) -> Result<Self, PaletteError> {
        if !ratio.is_finite() || !(1.0..=MAX_CONTRAST_RATIO).contains(&ratio) {
            return Err(PaletteError::InvalidRatio(ratio));
        }
        if count == 0 {
            return Err(PaletteError::EmptyPalette);
        }
        if seeds.len() > count {
            return Err(PaletteError::TooManySeeds {
                seeds: seeds.len(),
                requested: count,
            });
        }

        let unachievable = unachievable_range(ratio);
        let seeded = seeds.len();

        let mut colors: Vec<Color> = DistinctSetBuilder::new(seeds, unachievable)
            .build(count, rng)?
            .into_iter()
            .map(|member| member.color)
            .collect();

        let contrasts = plan_contrasts(ratio, &colors, rng)?;
        colors.sort_by(|a, b| a.luminance().total_cmp(&b.luminance()));

        tracing::debug!(
            ratio,
            count,
            seeded,
            contrasts = contrasts.len(),
            "Palette generated"
        );

        Ok(Self {
            target_ratio: ratio,
            unachievable,
            colors,
            contrasts,
        })
    }

    pub fn target_ratio(&self) -> f64 {
        self.target_ratio
    }

    /// Luminances no palette color was allowed to take.
    pub fn unachievable_range(&self) -> LuminanceRange {
        self.unachievable
    }

    /// Palette colors, darkest first.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Contrast colors, dark-leaning group's first.
    pub fn contrasts(&self) -> &[Color] {
        &self.contrasts
    }

    /// Number of palette colors (contrast colors not included).
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Palette colors followed by contrast colors.
    pub fn all_colors(&self) -> impl Iterator<Item = &Color> {
        self.colors.iter().chain(self.contrasts.iter())
    }

    /// A copy with every color (palette and contrast) passed through `f`.
    ///
    /// Order and counts are preserved; `f` sees colors in
    /// [`all_colors`](Self::all_colors) order.
    pub fn enriched<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&Color) -> Color,
    {
        Self {
            target_ratio: self.target_ratio,
            unachievable: self.unachievable,
            colors: self.colors.iter().map(&mut f).collect(),
            contrasts: self.contrasts.iter().map(&mut f).collect(),
        }
    }
}
