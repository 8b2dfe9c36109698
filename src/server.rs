//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{DefaultBodyLimit, State},
    http::{header::CACHE_CONTROL, HeaderValue},
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::api;
use crate::error::ApiError;
use crate::models::{AnalyzeRequest, AppConfig, ComposeRequest, LogoAnalysis};
use crate::rendering::{FrameBuilder, FrameSettings, TextRenderer};
use crate::services::{ComposeService, ImageFetcher, InMemoryDirectory, LogoAnalyzer};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub compose: Arc<ComposeService>,
    pub analyzer: Arc<LogoAnalyzer>,
    pub fetcher: Arc<ImageFetcher>,
    pub directory: Arc<InMemoryDirectory>,
    pub config: Arc<AppConfig>,
}

/// Create application state from configuration and an optional fonts directory.
pub fn create_app_state(config: AppConfig, fonts_dir: Option<&Path>) -> anyhow::Result<AppState> {
    let text = Arc::new(TextRenderer::with_fonts_dir(fonts_dir));
    create_app_state_with_text(config, text)
}

/// Create application state around an existing text renderer.
pub fn create_app_state_with_text(
    config: AppConfig,
    text: Arc<TextRenderer>,
) -> anyhow::Result<AppState> {
    let builder = Arc::new(FrameBuilder::new(text, FrameSettings::from(&config.framer)));
    let directory = Arc::new(InMemoryDirectory::from_map(config.companies.clone()));
    let compose = Arc::new(ComposeService::new(
        builder.clone(),
        directory.clone(),
        config.service.max_concurrent_builds,
        config.framer.fallback_overlay.clone(),
    ));
    let analyzer = Arc::new(LogoAnalyzer::new(builder));
    let fetcher = Arc::new(
        ImageFetcher::new(
            Duration::from_secs(config.service.fetch_timeout_secs),
            config.service.max_body_bytes,
        )
        .map_err(|e| anyhow::anyhow!("Failed to create image fetcher: {e}"))?,
    );

    Ok(AppState {
        compose,
        analyzer,
        fetcher,
        directory,
        config: Arc::new(config),
    })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.service.max_body_bytes;

    Router::new()
        .route("/api/compose", post(handle_compose))
        .route("/api/logo/analyze", post(handle_analyze))
        .route("/api/platforms", get(api::handle_platforms))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        // Every composition is unique to its request body
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_compose(
    State(state): State<AppState>,
    request: Json<ComposeRequest>,
) -> Result<Response, ApiError> {
    api::handle_compose(State(state.compose), State(state.fetcher), request).await
}

async fn handle_analyze(
    State(state): State<AppState>,
    request: Json<AnalyzeRequest>,
) -> Result<Json<LogoAnalysis>, ApiError> {
    api::handle_analyze(State(state.analyzer), State(state.fetcher), request).await
}
