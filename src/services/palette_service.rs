//! Palette service: request defaults, rng seeding and naming.
//!
//! Shared by the CLI and the HTTP handlers. Every call builds its own rng
//! and palette; the service only holds immutable configuration.

use contrast_palette::{Color, GenerateError, Palette, PaletteGenerator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use thiserror::Error;

use super::naming::{enrich_color, enrich_palette, namer_from_config, ColorNamer, Enrichment};
use crate::models::AppConfig;

/// Upper bound on palette size per request
pub const MAX_PALETTE_COLORS: usize = 64;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("at most {max} colors per palette, got {requested}")]
    TooManyColors { requested: usize, max: usize },

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Palette request; unset fields fall back to the config
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaletteRequest {
    pub ratio: Option<f64>,
    pub count: Option<usize>,
    /// Colors to keep, `#RRGGBB`
    pub keep: Vec<String>,
    /// Seed for reproducible palettes
    pub seed: Option<u64>,
    /// Look up color names
    pub names: bool,
}

/// A generated palette and how it was named
#[derive(Debug, Clone)]
pub struct PaletteOutcome {
    pub palette: Palette,
    /// `None` when names were not requested
    pub naming: Option<Enrichment>,
}

/// An inspected color and how it was named
#[derive(Debug, Clone)]
pub struct ColorOutcome {
    pub color: Color,
    pub naming: Option<Enrichment>,
}

pub struct PaletteService {
    config: Arc<AppConfig>,
    namer: Arc<dyn ColorNamer>,
}

impl PaletteService {
    /// Service with the namer described by the config
    pub fn new(config: Arc<AppConfig>) -> Self {
        let namer: Arc<dyn ColorNamer> = Arc::from(namer_from_config(&config.naming));
        Self { config, namer }
    }

    /// Service with an explicit namer
    pub fn with_namer(config: Arc<AppConfig>, namer: Arc<dyn ColorNamer>) -> Self {
        Self { config, namer }
    }

    /// Generate a palette. Blocks when names are requested.
    pub fn generate(&self, request: &PaletteRequest) -> Result<PaletteOutcome, ServiceError> {
        let ratio = request.ratio.unwrap_or(self.config.target_ratio);
        let count = request.count.unwrap_or(self.config.colors);
        if count > MAX_PALETTE_COLORS {
            return Err(ServiceError::TooManyColors {
                requested: count,
                max: MAX_PALETTE_COLORS,
            });
        }

        let generator = PaletteGenerator::new(ratio)
            .colors(count)
            .keep_hex(request.keep.as_slice())?;

        let mut rng = match request.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let palette = generator.generate(&mut rng)?;

        tracing::info!(
            ratio,
            count,
            kept = request.keep.len(),
            seed = ?request.seed,
            contrasts = palette.contrasts().len(),
            "Generated palette"
        );

        if !request.names {
            return Ok(PaletteOutcome {
                palette,
                naming: None,
            });
        }

        let enriched = enrich_palette(palette, self.namer.as_ref());
        Ok(PaletteOutcome {
            palette: enriched.value,
            naming: Some(enriched.outcome),
        })
    }

    /// Parse and describe a single color. Blocks when names are requested.
    pub fn inspect(&self, hex: &str, names: bool) -> Result<ColorOutcome, ServiceError> {
        let color = Color::from_hex(hex).map_err(GenerateError::from)?;

        if !names {
            return Ok(ColorOutcome {
                color,
                naming: None,
            });
        }

        let enriched = enrich_color(color, self.namer.as_ref());
        Ok(ColorOutcome {
            color: enriched.value,
            naming: Some(enriched.outcome),
        })
    }
}
