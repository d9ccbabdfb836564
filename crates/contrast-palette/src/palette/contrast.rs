//! Contrast planning.
//!
//! Two pieces of WCAG arithmetic drive palette generation:
//!
//! - the **unachievable range**: background luminances for which *neither*
//!   black nor white reaches the target ratio. Palette members are kept out
//!   of it so every member has at least one legible ink.
//! - the **contrast targets**: luminances a contrast color must reach (or
//!   stay under) to meet the ratio against a whole group of colors.
//!
//! ```text
//! ratio(L, black) = (L + 0.05) / 0.05        >= r  <=>  L >= 0.05r - 0.05
//! ratio(white, L) = 1.05 / (L + 0.05)        >= r  <=>  L <= 1.05/r - 0.05
//! ```

use rand::Rng;
use serde::Serialize;

use crate::color::{Color, ColorError, InkColor};

/// Closed luminance interval. Empty when `min > max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LuminanceRange {
    pub min: f64,
    pub max: f64,
}

impl LuminanceRange {
    /// Canonical empty range.
    pub const EMPTY: LuminanceRange = LuminanceRange { min: 1.0, max: 0.0 };

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// True if `luminance` lies within `min..=max`. Always false when empty.
    #[inline]
    pub fn contains(&self, luminance: f64) -> bool {
        self.min <= luminance && luminance <= self.max
    }
}

/// Luminances at which neither black nor white ink reaches `ratio`.
///
/// # Example
///
/// ```
/// use contrast_palette::unachievable_range;
///
/// let range = unachievable_range(7.0);
/// assert!((range.min - 0.1).abs() < 1e-12);
/// assert!((range.max - 0.3).abs() < 1e-12);
///
/// // Below sqrt(21) one of the two inks always works
/// assert!(unachievable_range(4.5).is_empty());
/// ```
pub fn unachievable_range(ratio: f64) -> LuminanceRange {
    let upper = ratio * 0.05 - 0.05;
    let lower = 1.05 / ratio - 0.05;
    if lower >= upper {
        LuminanceRange::EMPTY
    } else {
        LuminanceRange::new(lower, upper)
    }
}

/// Target luminances for the contrast colors of a palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastTargets {
    /// Target against the colors that take white ink
    pub dark: Option<f64>,
    /// Target against the colors that take black ink
    pub light: Option<f64>,
}

impl ContrastTargets {
    /// Targets in synthesis order, dark-leaning group first.
    pub fn iter(&self) -> impl Iterator<Item = f64> {
        self.dark.into_iter().chain(self.light)
    }
}

/// Luminances that reach `ratio` against every color of each ink group.
///
/// For the dark-leaning group (white ink) the contrast color must be at
/// least `ratio * max(L) + 0.05 * (ratio - 1)`; for the light-leaning group
/// (black ink) at most `(min(L) + 0.05 - 0.05 * ratio) / ratio`. A group
/// with no members yields `None`.
pub fn contrast_targets(ratio: f64, colors: &[Color]) -> ContrastTargets {
    let brightest_dark = colors
        .iter()
        .filter(|c| c.ink() == InkColor::White)
        .map(Color::luminance)
        .reduce(f64::max);
    let dimmest_light = colors
        .iter()
        .filter(|c| c.ink() == InkColor::Black)
        .map(Color::luminance)
        .reduce(f64::min);

    ContrastTargets {
        dark: brightest_dark.map(|l| ratio * l + 0.05 * (ratio - 1.0)),
        light: dimmest_light.map(|l| (l + 0.05 - 0.05 * ratio) / ratio),
    }
}

/// Synthesize the contrast colors for `colors`.
///
/// Returns one color per non-empty ink group, dark-leaning group first.
pub fn plan_contrasts<R: Rng + ?Sized>(
    ratio: f64,
    colors: &[Color],
    rng: &mut R,
) -> Result<Vec<Color>, ColorError> {
    let targets = contrast_targets(ratio, colors);
    tracing::debug!(ratio, dark = ?targets.dark, light = ?targets.light, "Contrast targets");
    targets
        .iter()
        .map(|target| Color::from_luminance(target, rng))
        .collect()
}
