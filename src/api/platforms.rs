use axum::response::Json;
use frame_kit::{CanvasSize, ContentCategory, Platform};

use crate::models::PlatformSize;

/// Every platform and content type pair with a canonical canvas size.
///
/// Pairs not listed render at the default size.
pub fn canonical_sizes() -> Vec<PlatformSize> {
    Platform::ALL
        .iter()
        .flat_map(|&platform| {
            ContentCategory::ALL.iter().filter_map(move |&category| {
                let size = CanvasSize::for_pair(Some(platform), Some(category));
                (size != CanvasSize::DEFAULT).then(|| PlatformSize {
                    platform: platform.to_string(),
                    content_type: category.to_string(),
                    width: size.width,
                    height: size.height,
                })
            })
        })
        .collect()
}

/// List canonical canvas sizes
#[utoipa::path(
    get,
    path = "/api/platforms",
    responses(
        (status = 200, description = "Canonical canvas sizes", body = Vec<PlatformSize>),
    ),
    tag = "Compose"
)]
pub async fn handle_platforms() -> Json<Vec<PlatformSize>> {
    Json(canonical_sizes())
}
