//! Stateless color model
//!
//! Conversions between the representations a palette color carries:
//!
//! - [`Rgb`]: 8-bit sRGB, the source of truth for every color
//! - [`Hsl`]: hue/saturation/lightness fractions, used for hue rotation
//! - [`Xyz`]: CIE XYZ (D65), used for perceptual distance only
//!
//! plus the sRGB transfer curve and the WCAG luminance/contrast formulas.
//!
//! # Example
//!
//! ```
//! use contrast_palette::model::{contrast_ratio, Rgb};
//!
//! let lavender: Rgb = "#979AC4".parse().unwrap();
//! let ratio = contrast_ratio(lavender.luminance(), Rgb::BLACK.luminance());
//! assert!(ratio > 7.0);
//! ```

mod hsl;
mod rgb;
mod transfer;
mod wcag;
mod xyz;

pub use hsl::Hsl;
pub use rgb::Rgb;
pub use transfer::{clamp, linear_to_srgb, srgb_to_linear};
pub use wcag::{contrast_ratio, INK_THRESHOLD, LUMINANCE_COEFFICIENTS, MAX_CONTRAST_RATIO};
pub use xyz::Xyz;
