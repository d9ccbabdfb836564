use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::Json,
};
use contrast_palette::model::contrast_ratio;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::palette::ColorDto;
use crate::error::ApiError;
use crate::services::{ColorOutcome, Enrichment, PaletteService};

#[derive(Debug, Default, Deserialize)]
pub struct ColorQuery {
    #[serde(default)]
    pub names: bool,
}

/// A single inspected color
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ColorResponse {
    pub color: ColorDto,
    /// WCAG contrast ratio against black text
    pub contrast_with_black: f64,
    /// WCAG contrast ratio against white text
    pub contrast_with_white: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub naming: Option<Enrichment>,
}

impl From<&ColorOutcome> for ColorResponse {
    fn from(outcome: &ColorOutcome) -> Self {
        let luminance = outcome.color.luminance();
        Self {
            color: ColorDto::from(&outcome.color),
            contrast_with_black: contrast_ratio(luminance, 0.0),
            contrast_with_white: contrast_ratio(luminance, 1.0),
            naming: outcome.naming.clone(),
        }
    }
}

/// Describe a color
///
/// Returns every representation of the color, its ink color and its
/// contrast against black and white.
#[utoipa::path(
    get,
    path = "/api/color/{hex}",
    responses(
        (status = 200, description = "Color description", body = ColorResponse),
        (status = 400, description = "Not a #RRGGBB color"),
    ),
    params(
        ("hex" = String, Path, description = "Six hex digits, without '#'"),
        ("names" = Option<bool>, Query, description = "Look up the color name"),
    ),
    tag = "Palette"
)]
pub async fn handle_color(
    State(service): State<Arc<PaletteService>>,
    Path(hex): Path<String>,
    query: Result<Query<ColorQuery>, QueryRejection>,
) -> Result<Json<ColorResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let outcome =
        tokio::task::spawn_blocking(move || service.inspect(&hex, query.names)).await??;

    Ok(Json(ColorResponse::from(&outcome)))
}
