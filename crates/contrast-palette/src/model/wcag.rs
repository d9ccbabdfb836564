//! WCAG 2.x luminance and contrast helpers.

/// Rec. 709 / sRGB luminance weights for the red, green and blue channels.
///
/// Identical to the Y row of the sRGB to XYZ (D65) matrix.
pub const LUMINANCE_COEFFICIENTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Luminance at which contrast against black equals contrast against white.
///
/// Solves `(L + 0.05) / 0.05 == 1.05 / (L + 0.05)`, i.e. `sqrt(0.0525) - 0.05`.
/// Colors above this get black ink, colors at or below get white ink. The
/// luminance solver uses the same split to pick its dark/light strategy.
pub const INK_THRESHOLD: f64 = 0.1791;

/// Highest contrast ratio WCAG can express (white on black).
pub const MAX_CONTRAST_RATIO: f64 = 21.0;

/// WCAG contrast ratio between two relative luminances.
///
/// Order-independent; always in `1.0..=21.0` for luminances in `0.0..=1.0`.
///
/// # Example
/// ```
/// use contrast_palette::model::contrast_ratio;
/// assert!((contrast_ratio(1.0, 0.0) - 21.0).abs() < 1e-9);
/// assert!((contrast_ratio(0.0, 1.0) - 21.0).abs() < 1e-9);
/// ```
pub fn contrast_ratio(a: f64, b: f64) -> f64 {
    let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
    (lighter + 0.05) / (darker + 0.05)
}
