//! Distinct color set construction.
//!
//! Grows a set of colors by rotating the hue of the most recently added
//! member. A candidate is accepted when it is far enough (in XYZ) from every
//! member and its luminance lies outside the unachievable range. Saturation
//! and lightness are inherited unchanged.

use rand::seq::SliceRandom;
use rand::Rng;

use super::contrast::LuminanceRange;
use crate::color::{Color, ColorError};
use crate::model::Hsl;

/// Candidates tried per slot before falling back.
pub const MAX_DISTINCT_ATTEMPTS: usize = 50;

/// Minimum XYZ distance to every existing member (exclusive).
pub const MIN_XYZ_DISTANCE: f64 = 8.0;

/// Hue rotations (fractions of a turn) candidates are drawn from.
pub const HUE_STEPS: [f64; 13] = [
    0.1,
    0.2,
    0.3,
    0.4,
    0.5,
    0.6,
    0.7,
    0.8,
    0.9,
    0.25,
    0.75,
    1.0 / 3.0,
    2.0 / 3.0,
];

/// Hue rotation used once the attempt budget is spent.
const FALLBACK_HUE_STEP: f64 = 0.5;

/// How a member entered the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Supplied by the caller, or the random starting color
    Seed,
    /// Passed the distance and luminance checks
    Distinct,
    /// Forced in after [`MAX_DISTINCT_ATTEMPTS`] rejections; unchecked
    Fallback,
}

/// A color in a distinct set.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub color: Color,
    pub origin: Origin,
}

/// Builder for a set of mutually distinguishable colors.
///
/// # Example
///
/// ```
/// use contrast_palette::{Color, DistinctSetBuilder, LuminanceRange};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let seed = Color::from_hex("#2E86AB").unwrap();
/// let members = DistinctSetBuilder::new(vec![seed], LuminanceRange::EMPTY)
///     .build(4, &mut rng)
///     .unwrap();
///
/// assert_eq!(members.len(), 4);
/// assert_eq!(members[0].color.hex(), "#2E86AB");
/// ```
#[derive(Debug, Clone)]
pub struct DistinctSetBuilder {
    seeds: Vec<Color>,
    unachievable: LuminanceRange,
}

impl DistinctSetBuilder {
    /// Start from `seeds` (may be empty), avoiding `unachievable` luminances.
    pub fn new(seeds: Vec<Color>, unachievable: LuminanceRange) -> Self {
        Self {
            seeds,
            unachievable,
        }
    }

    /// Grow the set to `count` members.
    ///
    /// Seeds are kept in order. With no seeds a single random color starts
    /// the set. If there are already `count` or more seeds they are returned
    /// as they are.
    pub fn build<R: Rng + ?Sized>(
        self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Member>, ColorError> {
        let mut members: Vec<Member> = self
            .seeds
            .into_iter()
            .map(|color| Member {
                color,
                origin: Origin::Seed,
            })
            .collect();

        if members.is_empty() && count > 0 {
            members.push(Member {
                color: Color::random(rng),
                origin: Origin::Seed,
            });
        }

        while members.len() < count {
            let Some(base) = members.last().map(|m| m.color.hsl()) else {
                break;
            };
            let member = next_member(base, &members, self.unachievable, rng)?;
            members.push(member);
        }

        Ok(members)
    }
}

/// Next member grown from `base`, the most recently added color.
fn next_member<R: Rng + ?Sized>(
    base: Hsl,
    members: &[Member],
    unachievable: LuminanceRange,
    rng: &mut R,
) -> Result<Member, ColorError> {
    for attempt in 1..=MAX_DISTINCT_ATTEMPTS {
        let step = HUE_STEPS.choose(rng).copied().unwrap_or(FALLBACK_HUE_STEP);
        let candidate = rotated(base, step)?;

        let nearest = min_distance(&candidate, members);
        if nearest <= MIN_XYZ_DISTANCE {
            tracing::trace!(attempt, hex = candidate.hex(), nearest, "Candidate too close");
            continue;
        }
        if unachievable.contains(candidate.luminance()) {
            tracing::trace!(
                attempt,
                hex = candidate.hex(),
                luminance = candidate.luminance(),
                "Candidate in unachievable range"
            );
            continue;
        }

        return Ok(Member {
            color: candidate,
            origin: Origin::Distinct,
        });
    }

    let color = rotated(base, FALLBACK_HUE_STEP)?;
    tracing::debug!(
        hex = color.hex(),
        attempts = MAX_DISTINCT_ATTEMPTS,
        "No distinct candidate found, using complementary hue"
    );
    Ok(Member {
        color,
        origin: Origin::Fallback,
    })
}

fn rotated(base: Hsl, step: f64) -> Result<Color, ColorError> {
    Color::from_hsl(base.rotate_hue(step))
}

/// Smallest XYZ distance from `candidate` to any member.
fn min_distance(candidate: &Color, members: &[Member]) -> f64 {
    members
        .iter()
        .map(|m| candidate.distance(&m.color))
        .fold(f64::INFINITY, f64::min)
}
