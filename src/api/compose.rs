use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderName, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::{ComposeRequest, ImageSource};
use crate::services::{ComposeService, ImageFetcher, PostInput};

pub const X_CANVAS_SIZE: HeaderName = HeaderName::from_static("x-canvas-size");
pub const X_BRAND_DOMINANT: HeaderName = HeaderName::from_static("x-brand-dominant");
pub const X_BRAND_SECONDARY: HeaderName = HeaderName::from_static("x-brand-secondary");

/// Error body returned by every endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status code
    pub status: u16,
    /// Error message
    pub error: String,
}

/// Compose a branded social media post
///
/// Fits the main image into a frame painted in the logo's brand colors,
/// optionally burns in overlay text and returns the finished PNG.
#[utoipa::path(
    post,
    path = "/api/compose",
    request_body = ComposeRequest,
    responses(
        (status = 200, description = "Composed PNG", content_type = "image/png"),
        (status = 400, description = "Missing field or invalid base64", body = ErrorResponse),
        (status = 422, description = "Image could not be decoded", body = ErrorResponse),
        (status = 502, description = "Image URL could not be fetched", body = ErrorResponse),
    ),
    tag = "Compose"
)]
pub async fn handle_compose(
    State(compose): State<Arc<ComposeService>>,
    State(fetcher): State<Arc<ImageFetcher>>,
    Json(request): Json<ComposeRequest>,
) -> Result<Response, ApiError> {
    if request.platform.trim().is_empty() {
        return Err(ApiError::MissingField("platform"));
    }

    let main_source = ImageSource::from_fields(
        "main_image",
        request.main_image.as_deref(),
        request.main_image_url.as_deref(),
    )?;
    let logo_source = ImageSource::from_fields(
        "logo_image",
        request.logo_image.as_deref(),
        request.logo_url.as_deref(),
    )?;

    tracing::info!(
        platform = %request.platform,
        content_type = %request.content_type,
        company_id = ?request.company_id,
        "Compose request received"
    );

    let (main_bytes, logo_bytes) =
        tokio::try_join!(fetcher.resolve(main_source), fetcher.resolve(logo_source))?;

    let output = compose
        .compose(PostInput {
            main_bytes,
            logo_bytes,
            platform: request.platform,
            content_type: request.content_type,
            company_id: request.company_id,
            overlay_text: request.overlay_text,
            website: None,
        })
        .await?;

    let secondary = output
        .secondary
        .map(|c| c.to_hex())
        .unwrap_or_default();

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (header::CONTENT_LENGTH, output.png.len().to_string()),
            (X_CANVAS_SIZE, output.canvas.to_string()),
            (X_BRAND_DOMINANT, output.dominant.to_hex()),
            (X_BRAND_SECONDARY, secondary),
        ],
        Bytes::from(output.png),
    )
        .into_response())
}
