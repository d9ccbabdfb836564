//! Palette generation
//!
//! This module grows a set of distinct colors, plans the contrast colors
//! that go with them and combines both into a [`Palette`].

mod contrast;
mod distinct;
mod error;
mod palette;

pub use contrast::{
    contrast_targets, plan_contrasts, unachievable_range, ContrastTargets, LuminanceRange,
};
pub use distinct::{
    DistinctSetBuilder, Member, Origin, HUE_STEPS, MAX_DISTINCT_ATTEMPTS, MIN_XYZ_DISTANCE,
};
pub use error::PaletteError;
pub use palette::Palette;
