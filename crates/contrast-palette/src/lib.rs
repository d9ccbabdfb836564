#![allow(clippy::module_inception)]

//! contrast-palette: distinct, accessibility-aware color palettes
//!
//! This library grows sets of visually distinct colors and synthesizes
//! contrast colors that meet a WCAG contrast ratio against them.
//!
//! # Quick Start
//!
//! The [`PaletteGenerator`] builder is the primary entry point:
//!
//! ```
//! use contrast_palette::PaletteGenerator;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let palette = PaletteGenerator::new(4.5).colors(5).generate(&mut rng).unwrap();
//!
//! assert_eq!(palette.len(), 5);
//! for color in palette.colors() {
//!     println!("{} ink={} contrast={:.2}", color.hex(), color.ink(),
//!         color.contrast_with(&palette.contrasts()[0]));
//! }
//! ```
//!
//! All randomness comes from a caller-supplied [`rand::Rng`]; a seeded rng
//! gives reproducible palettes.
//!
//! # Color Model
//!
//! | Representation | Used For |
//! |----------------|----------|
//! | **sRGB** ([`model::Rgb`]) | Source of truth, hex input/output, quantization |
//! | **HSL** ([`model::Hsl`]) | Hue rotation when growing a distinct set |
//! | **XYZ** ([`model::Xyz`]) | Euclidean distance between palette members |
//! | **WCAG luminance** | Ink choice, contrast ratios, the unachievable range |
//!
//! Luminance is computed on linearized channels:
//!
//! ```text
//! L = 0.2126 * lin(r) + 0.7152 * lin(g) + 0.0722 * lin(b)
//! ratio(a, b) = (max(La, Lb) + 0.05) / (min(La, Lb) + 0.05)
//! ```
//!
//! Each color carries an [`InkColor`]: black when its luminance is above
//! [`model::INK_THRESHOLD`] (0.1791), white otherwise.
//!
//! # Palette Generation
//!
//! ```text
//! seeds (or one random color)
//!     |
//!     v
//! DistinctSetBuilder        (hue rotation, XYZ distance > 8,
//!     |                      luminance outside the unachievable range)
//!     v
//! contrast_targets          (per ink group)
//!     |
//!     v
//! solver                    (luminance -> RGB, floor/ceil quantization)
//!     |
//!     v
//! Palette                   (colors sorted by luminance + contrasts)
//! ```
//!
//! Neither search can fail: the distinct-set builder falls back to the
//! complementary hue after [`MAX_DISTINCT_ATTEMPTS`] rejections, and the
//! luminance solver returns its last attempt after
//! [`solver::MAX_SOLVE_ATTEMPTS`].

pub mod api;
pub mod color;
pub mod model;
pub mod palette;
pub mod solver;


pub use api::{GenerateError, PaletteGenerator, DEFAULT_COLOR_COUNT};
pub use color::{Color, ColorError, InkColor, ParseColorError, ParseInkError};
pub use palette::{
    contrast_targets, plan_contrasts, unachievable_range, ContrastTargets, DistinctSetBuilder,
    LuminanceRange, Member, Origin, Palette, PaletteError, MAX_DISTINCT_ATTEMPTS,
};
