//! Color naming lookup.
//!
//! Names come from an external service (color.pizza by default). A lookup
//! is best effort: enrichment never fails, it reports what happened in an
//! [`Enrichment`] next to the (possibly unchanged) value.

use contrast_palette::{Color, InkColor, Palette};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use utoipa::ToSchema;

use crate::models::NamingConfig;

#[derive(Debug, Error)]
pub enum NamingError {
    #[error("color naming is disabled")]
    Disabled,

    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("naming request failed: {0}")]
    Request(String),

    #[error("naming service returned HTTP {0}")]
    Status(u16),

    #[error("invalid naming response: {0}")]
    InvalidResponse(String),

    #[error("naming service returned no colors")]
    NoColors,
}

/// One lookup result, matched to its input by position
#[derive(Debug, Clone, PartialEq)]
pub struct ColorName {
    pub name: String,
    /// Ink the service recommends on this color
    pub best_contrast: Option<InkColor>,
}

/// Source of human-readable color names.
///
/// Implementations block; call them from `spawn_blocking` inside async code.
pub trait ColorNamer: Send + Sync {
    /// Look up names for `hexes` (`#RRGGBB`) in one batch
    fn lookup(&self, hexes: &[String]) -> Result<Vec<ColorName>, NamingError>;
}

/// Namer used when lookups are switched off in the config
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledNamer;

impl ColorNamer for DisabledNamer {
    fn lookup(&self, _hexes: &[String]) -> Result<Vec<ColorName>, NamingError> {
        Err(NamingError::Disabled)
    }
}

/// Client for the color.pizza API
#[derive(Debug, Clone)]
pub struct ColorPizzaClient {
    base_url: String,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    colors: Vec<LookupEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupEntry {
    name: String,
    #[serde(default)]
    best_contrast: Option<String>,
}

impl ColorPizzaClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }
}

impl ColorNamer for ColorPizzaClient {
    fn lookup(&self, hexes: &[String]) -> Result<Vec<ColorName>, NamingError> {
        if hexes.is_empty() {
            return Ok(Vec::new());
        }

        let values = hexes
            .iter()
            .map(|h| h.trim_start_matches('#'))
            .collect::<Vec<_>>()
            .join(",");

        tracing::debug!(url = %self.base_url, values = %values, "Color name lookup");

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| NamingError::Client(e.to_string()))?;

        let response = client
            .get(&self.base_url)
            .query(&[("values", values.as_str())])
            .send()
            .map_err(|e| NamingError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NamingError::Status(status.as_u16()));
        }

        let text = response
            .text()
            .map_err(|e| NamingError::Request(e.to_string()))?;
        let parsed: LookupResponse =
            serde_json::from_str(&text).map_err(|e| NamingError::InvalidResponse(e.to_string()))?;

        if parsed.colors.is_empty() {
            return Err(NamingError::NoColors);
        }

        Ok(parsed
            .colors
            .into_iter()
            .map(|entry| ColorName {
                best_contrast: entry.best_contrast.and_then(|s| s.parse().ok()),
                name: entry.name,
            })
            .collect())
    }
}

/// Build the namer described by `config`
pub fn namer_from_config(config: &NamingConfig) -> Box<dyn ColorNamer> {
    if config.enabled {
        Box::new(ColorPizzaClient::new(
            config.base_url.clone(),
            Duration::from_secs(config.timeout_secs),
        ))
    } else {
        Box::new(DisabledNamer)
    }
}

/// What an enrichment step achieved
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Enrichment {
    /// `named` colors received a name
    Enriched { named: usize },
    /// Nothing was changed
    NotEnriched { reason: String },
}

impl Enrichment {
    pub fn is_enriched(&self) -> bool {
        matches!(self, Enrichment::Enriched { .. })
    }
}

/// A value together with the outcome of enriching it
#[derive(Debug, Clone)]
pub struct Enriched<T> {
    pub value: T,
    pub outcome: Enrichment,
}

impl<T> Enriched<T> {
    fn unchanged(value: T, err: NamingError) -> Self {
        match err {
            NamingError::Disabled => tracing::debug!("Color naming disabled"),
            _ => tracing::warn!(error = %err, "Color naming failed, continuing without names"),
        }
        Self {
            value,
            outcome: Enrichment::NotEnriched {
                reason: err.to_string(),
            },
        }
    }
}

/// Name every palette and contrast color in one batch lookup.
///
/// Only names are applied: the ink colors stay the ones computed from
/// luminance, which the contrast colors were planned against. Results are
/// matched by position; surplus inputs stay unnamed.
pub fn enrich_palette(palette: Palette, namer: &dyn ColorNamer) -> Enriched<Palette> {
    let hexes: Vec<String> = palette.all_colors().map(|c| c.hex().to_string()).collect();

    let names = match namer.lookup(&hexes) {
        Ok(names) => names,
        Err(e) => return Enriched::unchanged(palette, e),
    };

    let mut names = names.into_iter();
    let mut named = 0;
    let value = palette.enriched(|color| match names.next() {
        Some(found) => {
            named += 1;
            color.enriched(Some(found.name), None)
        }
        None => color.clone(),
    });

    tracing::debug!(named, total = hexes.len(), "Palette enriched");
    Enriched {
        value,
        outcome: Enrichment::Enriched { named },
    }
}

/// Name a single color, taking the service's ink recommendation as well.
pub fn enrich_color(color: Color, namer: &dyn ColorNamer) -> Enriched<Color> {
    let hexes = [color.hex().to_string()];
    match namer.lookup(&hexes) {
        Ok(names) => match names.into_iter().next() {
            Some(found) => Enriched {
                value: color.enriched(Some(found.name), found.best_contrast),
                outcome: Enrichment::Enriched { named: 1 },
            },
            None => Enriched::unchanged(color, NamingError::NoColors),
        },
        Err(e) => Enriched::unchanged(color, e),
    }
}
