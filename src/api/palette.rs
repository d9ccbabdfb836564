use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use contrast_palette::{Color, LuminanceRange};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::services::{Enrichment, PaletteOutcome, PaletteRequest, PaletteService};

/// Query parameters for palette generation
#[derive(Debug, Default, Deserialize)]
pub struct PaletteQuery {
    #[serde(default)]
    pub ratio: Option<f64>,
    #[serde(default)]
    pub count: Option<usize>,
    /// Comma-separated hex colors to keep
    #[serde(default)]
    pub keep: Option<String>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub names: bool,
}

impl PaletteQuery {
    pub fn into_request(self) -> PaletteRequest {
        let keep = self
            .keep
            .as_deref()
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        PaletteRequest {
            ratio: self.ratio,
            count: self.count,
            keep,
            seed: self.seed,
            names: self.names,
        }
    }
}

/// A single color as returned by the API
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ColorDto {
    /// `#RRGGBB`
    pub hex: String,
    /// Red, green, blue (0-255)
    pub rgb: [u8; 3],
    /// Hue, saturation, lightness (0-1)
    pub hsl: [f64; 3],
    /// WCAG relative luminance
    pub luminance: f64,
    /// Legible text color on this background ("black" or "white")
    pub ink: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl From<&Color> for ColorDto {
    fn from(color: &Color) -> Self {
        let rgb = color.rgb();
        let hsl = color.hsl();
        Self {
            hex: color.hex().to_string(),
            rgb: [rgb.r, rgb.g, rgb.b],
            hsl: [hsl.h, hsl.s, hsl.l],
            luminance: color.luminance(),
            ink: color.ink().to_string(),
            name: color.name().map(str::to_string),
        }
    }
}

/// Luminance interval no color may fall into
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RangeDto {
    pub min: f64,
    pub max: f64,
    /// True when every luminance is allowed
    pub empty: bool,
}

impl From<LuminanceRange> for RangeDto {
    fn from(range: LuminanceRange) -> Self {
        Self {
            min: range.min,
            max: range.max,
            empty: range.is_empty(),
        }
    }
}

/// Generated palette
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaletteResponse {
    pub target_ratio: f64,
    pub unachievable_range: RangeDto,
    /// Palette colors, sorted by luminance
    pub colors: Vec<ColorDto>,
    /// Contrast colors: at most one dark and one light
    pub contrasts: Vec<ColorDto>,
    /// Present when names were requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub naming: Option<Enrichment>,
    /// RFC 3339 timestamp
    pub generated_at: String,
}

impl PaletteResponse {
    pub fn from_outcome(outcome: &PaletteOutcome) -> Self {
        let palette = &outcome.palette;
        Self {
            target_ratio: palette.target_ratio(),
            unachievable_range: palette.unachievable_range().into(),
            colors: palette.colors().iter().map(ColorDto::from).collect(),
            contrasts: palette.contrasts().iter().map(ColorDto::from).collect(),
            naming: outcome.naming.clone(),
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Generate a palette
///
/// Returns palette colors that all avoid the luminance band where neither
/// contrast color could reach the target ratio, plus the contrast colors.
#[utoipa::path(
    get,
    path = "/api/palette",
    responses(
        (status = 200, description = "Palette generated", body = PaletteResponse),
        (status = 400, description = "Invalid ratio, count or kept color"),
    ),
    params(
        ("ratio" = Option<f64>, Query, description = "Target contrast ratio, 1 to 21 (default from config)"),
        ("count" = Option<usize>, Query, description = "Number of palette colors (default from config)"),
        ("keep" = Option<String>, Query, description = "Comma-separated #RRGGBB colors to keep"),
        ("seed" = Option<u64>, Query, description = "Seed for a reproducible palette"),
        ("names" = Option<bool>, Query, description = "Look up color names"),
    ),
    tag = "Palette"
)]
pub async fn handle_palette(
    State(service): State<Arc<PaletteService>>,
    query: Result<Query<PaletteQuery>, QueryRejection>,
) -> Result<Json<PaletteResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let request = query.into_request();

    let outcome = tokio::task::spawn_blocking(move || service.generate(&request)).await??;

    Ok(Json(PaletteResponse::from_outcome(&outcome)))
}
