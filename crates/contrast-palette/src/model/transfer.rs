//! sRGB transfer functions
//!
//! Exact IEC 61966-2-1 piecewise companding in `f64`. The luminance solver
//! floors or ceils its output channels, so it needs the exact curve rather
//! than an interpolated table.

/// Breakpoint of the encoded (gamma) side of the sRGB curve.
const SRGB_BREAKPOINT: f64 = 0.04045;

/// Breakpoint of the linear side of the sRGB curve.
const LINEAR_BREAKPOINT: f64 = 0.0031308;

/// Convert an encoded sRGB channel (0.0..=1.0) to linear light.
#[inline]
pub fn srgb_to_linear(srgb: f64) -> f64 {
    if srgb <= SRGB_BREAKPOINT {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a linear light value back to an encoded sRGB channel.
///
/// Values outside 0.0..=1.0 are passed through the curve unchanged
/// (negative values stay negative, values above 1.0 exceed 1.0); callers
/// clamp afterwards.
#[inline]
pub fn linear_to_srgb(linear: f64) -> f64 {
    if linear <= LINEAR_BREAKPOINT {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// Clamp `value` into `min..=max`.
///
/// Unlike [`f64::clamp`] this never panics when `min > max`; the lower
/// bound wins.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    min.max(max.min(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_to_linear_boundaries() {
        assert!((srgb_to_linear(0.0) - 0.0).abs() < 1e-12);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_linear_to_srgb_boundaries() {
        assert!((linear_to_srgb(0.0) - 0.0).abs() < 1e-12);
        assert!((linear_to_srgb(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_known_gamma_values() {
        // ((0.5 + 0.055) / 1.055)^2.4 = 0.214041...
        assert!((srgb_to_linear(0.5) - 0.214041).abs() < 1e-6);
        // 1.055 * 0.5^(1/2.4) - 0.055 = 0.735356...
        assert!((linear_to_srgb(0.5) - 0.735356).abs() < 1e-6);
    }

    #[test]
    fn test_round_trip() {
        for i in 0..=1000 {
            let v = i as f64 / 1000.0;
            let back = linear_to_srgb(srgb_to_linear(v));
            assert!((back - v).abs() < 1e-9, "round trip drifted at {v}: {back}");
        }
    }

    #[test]
    fn test_monotonicity() {
        let mut prev = srgb_to_linear(0.0);
        for i in 1..=1000 {
            let curr = srgb_to_linear(i as f64 / 1000.0);
            assert!(curr >= prev, "srgb_to_linear not monotonic at {i}");
            prev = curr;
        }

        let mut prev = linear_to_srgb(0.0);
        for i in 1..=1000 {
            let curr = linear_to_srgb(i as f64 / 1000.0);
            assert!(curr >= prev, "linear_to_srgb not monotonic at {i}");
            prev = curr;
        }
    }

    #[test]
    fn test_out_of_range_inputs_pass_through() {
        assert!(linear_to_srgb(-0.5) < 0.0);
        assert!(linear_to_srgb(1.5) > 1.0);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
        // Inverted bounds: lower bound wins
        assert_eq!(clamp(0.5, 1.0, 0.0), 1.0);
    }

    #[test]
    fn test_transfer_matches_palette_crate() {
        use palette::{LinSrgb, Srgb};

        for step in 0..=255u8 {
            let v = step as f64 / 255.0;
            let theirs: LinSrgb<f64> = Srgb::new(v, v, v).into_linear();
            assert!(
                (srgb_to_linear(v) - theirs.red).abs() < 1e-7,
                "linearize {step}: ours={}, palette={}",
                srgb_to_linear(v),
                theirs.red
            );
            assert!((linear_to_srgb(theirs.red) - v).abs() < 1e-7);
        }
    }
}
