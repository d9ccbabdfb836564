//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::PaletteService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PaletteService>,
}

/// Create application state from a loaded config.
pub fn create_app_state(config: AppConfig) -> AppState {
    AppState {
        service: Arc::new(PaletteService::new(Arc::new(config))),
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/palette", get(handle_palette))
        .route("/api/color/:hex", get(handle_color))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_palette(
    axum::extract::State(state): axum::extract::State<AppState>,
    query: Result<
        axum::extract::Query<api::PaletteQuery>,
        axum::extract::rejection::QueryRejection,
    >,
) -> Result<axum::Json<api::PaletteResponse>, ApiError> {
    api::handle_palette(axum::extract::State(state.service), query).await
}

async fn handle_color(
    axum::extract::State(state): axum::extract::State<AppState>,
    path: axum::extract::Path<String>,
    query: Result<axum::extract::Query<api::ColorQuery>, axum::extract::rejection::QueryRejection>,
) -> Result<axum::Json<api::ColorResponse>, ApiError> {
    api::handle_color(axum::extract::State(state.service), path, query).await
}
