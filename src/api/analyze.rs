use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{AnalyzeRequest, ImageSource, LogoAnalysis};
use crate::services::{ImageFetcher, LogoAnalyzer};

/// Analyze the colors of a company logo
///
/// Returns up to five named colors by coverage and a one-sentence
/// description suitable for copywriting prompts.
#[utoipa::path(
    post,
    path = "/api/logo/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Logo colors", body = LogoAnalysis),
        (status = 400, description = "Missing logo or invalid base64", body = super::ErrorResponse),
        (status = 422, description = "Logo could not be decoded", body = super::ErrorResponse),
        (status = 502, description = "Logo URL could not be fetched", body = super::ErrorResponse),
    ),
    tag = "Analyze"
)]
pub async fn handle_analyze(
    State(analyzer): State<Arc<LogoAnalyzer>>,
    State(fetcher): State<Arc<ImageFetcher>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<LogoAnalysis>, ApiError> {
    let source = ImageSource::from_fields(
        "logo_image",
        request.logo_image.as_deref(),
        request.logo_url.as_deref(),
    )?;
    let bytes = fetcher.resolve(source).await?;
    Ok(Json(analyzer.analyze(bytes).await?))
}
