//! Luminance-targeted color synthesis.
//!
//! Given a WCAG relative luminance, produce an 8-bit sRGB color whose
//! luminance lands on the correct side of it:
//!
//! - **dark branch** (target <= [`INK_THRESHOLD`]): luminance at or below
//!   the target
//! - **light branch** (target above the threshold): luminance at or above
//!   the target
//!
//! # Per-attempt solve
//!
//! Luminance is linear in the three linearized channels:
//!
//! ```text
//! L = 0.2126 * lin(r) + 0.7152 * lin(g) + 0.0722 * lin(b)
//! ```
//!
//! so fixing two channels leaves one linear equation for the third. Each
//! attempt picks the solved channel at random, draws the first fixed channel
//! uniformly over 0.0..=1.0, draws the second inside the sub-range that keeps
//! the solved channel reachable, inverts the equation and re-encodes. Channels are clamped to 0.0..=1.0 before
//! quantizing. The dark branch floors all three channels and the light
//! branch ceils them, so quantization can only move the result further to
//! the safe side of the target.
//!
//! # Refinement loop
//!
//! [`iterate_rgb_for_luminance`] retries up to [`MAX_SOLVE_ATTEMPTS`]
//! times, walking the requested luminance a tenth of the remaining distance
//! toward 0 (dark) or 1 (light) after every miss. It never fails: when all
//! attempts miss, the last color is returned with `converged: false`.
//! Targets outside 0.0..=1.0 can never converge and always end that way.

use rand::Rng;

use crate::model::{
    clamp, linear_to_srgb, srgb_to_linear, Rgb, INK_THRESHOLD, LUMINANCE_COEFFICIENTS,
};

/// Upper bound on solve attempts per color.
pub const MAX_SOLVE_ATTEMPTS: usize = 30;

/// Result of [`iterate_rgb_for_luminance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOutcome {
    /// Best color found (the last attempt when not converged)
    pub rgb: Rgb,
    /// Number of attempts used (1..=MAX_SOLVE_ATTEMPTS)
    pub attempts: usize,
    /// Whether the luminance ended up on the requested side of the target
    pub converged: bool,
}

/// Which channel is derived from the other two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Solved {
    Red,
    Green,
    Blue,
}

/// True when `target` is handled by the dark (floor) branch.
#[inline]
pub fn is_dark_target(target: f64) -> bool {
    target <= INK_THRESHOLD
}

/// Luminance requested from the solver after `misses` failed attempts.
///
/// Walks a tenth of the distance to 0 (dark) or 1 (light) per miss.
///
/// # Example
/// ```
/// use contrast_palette::solver::adjusted_target;
/// assert_eq!(adjusted_target(0.6, 0), 0.6);
/// assert!((adjusted_target(0.6, 2) - 0.68).abs() < 1e-12);
/// assert!((adjusted_target(0.05, 3) - 0.035).abs() < 1e-12);
/// ```
pub fn adjusted_target(target: f64, misses: usize) -> f64 {
    let increment = if is_dark_target(target) {
        -target / 10.0
    } else {
        (1.0 - target) / 10.0
    };
    target + increment * misses as f64
}

/// Synthesize a color for `target`, retrying until the achieved luminance
/// is on the correct side of it or the attempt budget runs out.
pub fn iterate_rgb_for_luminance<R: Rng + ?Sized>(target: f64, rng: &mut R) -> SolveOutcome {
    let dark = is_dark_target(target);
    let mut rgb = Rgb::BLACK;

    for attempt in 1..=MAX_SOLVE_ATTEMPTS {
        let requested = adjusted_target(target, attempt - 1);
        rgb = generate_rgb_from_luminance(requested, rng);
        let achieved = rgb.luminance();

        let converged = if dark {
            achieved <= target
        } else {
            achieved >= target
        };
        if converged {
            return SolveOutcome {
                rgb,
                attempts: attempt,
                converged: true,
            };
        }

        tracing::trace!(
            attempt,
            target,
            requested,
            achieved,
            "Luminance attempt missed target"
        );
    }

    tracing::debug!(target, rgb = %rgb, "Luminance solver exhausted attempts");
    SolveOutcome {
        rgb,
        attempts: MAX_SOLVE_ATTEMPTS,
        converged: false,
    }
}

/// Single solve attempt for `target`.
pub fn generate_rgb_from_luminance<R: Rng + ?Sized>(target: f64, rng: &mut R) -> Rgb {
    let solved = match rng.gen_range(0..3) {
        0 => Solved::Red,
        1 => Solved::Green,
        _ => Solved::Blue,
    };
    solve_for_channel(target, solved, rng)
}

fn solve_for_channel<R: Rng + ?Sized>(target: f64, solved: Solved, rng: &mut R) -> Rgb {
    let dark = is_dark_target(target);
    let [kr, kg, kb] = LUMINANCE_COEFFICIENTS;

    // (first fixed, second fixed, solved) weights
    let (first_k, second_k, solved_k) = match solved {
        Solved::Blue => (kr, kg, kb),
        Solved::Green => (kr, kb, kg),
        Solved::Red => (kg, kb, kr),
    };

    let first = random_in_range(rng, 0.0, 1.0);
    let remaining = target - first_k * srgb_to_linear(first);

    // Second channel is drawn in linear light so the solved channel stays
    // within 0.0..=1.0 whenever possible.
    let bound = remaining / second_k;
    let second_linear = if dark {
        random_in_range(rng, 0.0, bound)
    } else {
        random_in_range(rng, bound, 1.0)
    };
    let second = clamp(linear_to_srgb(second_linear), 0.0, 1.0);

    let third = clamp(
        linear_to_srgb((remaining - second_k * srgb_to_linear(second)) / solved_k),
        0.0,
        1.0,
    );

    let [r, g, b] = match solved {
        Solved::Blue => [first, second, third],
        Solved::Green => [first, third, second],
        Solved::Red => [third, first, second],
    };

    Rgb::new(quantize(r, dark), quantize(g, dark), quantize(b, dark))
}

/// Uniform draw between `min` and `max`. The bounds may be inverted (or
/// equal); the draw then lands between them all the same.
#[inline]
fn random_in_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    min + rng.gen::<f64>() * (max - min)
}

/// Floor (dark) or ceil (light) a 0.0..=1.0 channel into 0..=255.
#[inline]
fn quantize(channel: f64, dark: bool) -> u8 {
    let scaled = channel * 255.0;
    let rounded = if dark { scaled.floor() } else { scaled.ceil() };
    rounded.clamp(0.0, 255.0) as u8
}
