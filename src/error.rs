use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use frame_kit::LayoutError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Image fetch failed: {0}")]
    Fetch(String),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to decode {which} image: {message}")]
    Decode {
        which: &'static str,
        message: String,
    },

    #[error("The {which} image has zero size")]
    EmptyImage { which: &'static str },

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Render task failed: {0}")]
    Task(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    /// True when the caller sent an image we cannot use.
    pub fn is_bad_input(&self) -> bool {
        matches!(
            self,
            RenderError::Decode { .. } | RenderError::EmptyImage { .. }
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MissingField(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::InvalidPayload(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Fetch(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
            ApiError::Render(e) if e.is_bad_input() => {
                (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
            }
            ApiError::Render(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        if status.is_server_error() {
            tracing::error!(error = %message, "Request failed");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": message,
        }));

        (status, body).into_response()
    }
}
