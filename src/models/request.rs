use base64::Engine;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;

/// Request body for composing a branded post
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ComposeRequest {
    /// Main image, base64 encoded (plain or `data:` URL)
    #[serde(default)]
    pub main_image: Option<String>,
    /// Main image URL, used when `main_image` is absent
    #[serde(default)]
    pub main_image_url: Option<String>,
    /// Logo image, base64 encoded (plain or `data:` URL)
    #[serde(default)]
    pub logo_image: Option<String>,
    /// Logo URL, used when `logo_image` is absent
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Target platform, e.g. "Instagram"
    #[serde(default)]
    pub platform: String,
    /// Content type, e.g. "Feed Image Posts" or "Instagram Stories"
    #[serde(default)]
    pub content_type: String,
    /// Company whose website is printed in the caption
    #[serde(default)]
    pub company_id: Option<String>,
    /// Short phrase burned into the main image
    #[serde(default)]
    pub overlay_text: Option<String>,
}

/// Request body for logo color analysis
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Logo image, base64 encoded (plain or `data:` URL)
    #[serde(default)]
    pub logo_image: Option<String>,
    /// Logo URL, used when `logo_image` is absent
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Where image bytes come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Inline(Vec<u8>),
    Url(String),
}

impl ImageSource {
    /// Pick the inline payload if present, otherwise the URL.
    pub fn from_fields(
        field: &'static str,
        inline: Option<&str>,
        url: Option<&str>,
    ) -> Result<Self, ApiError> {
        if let Some(data) = inline.map(str::trim).filter(|s| !s.is_empty()) {
            return decode_base64(data)
                .map(ImageSource::Inline)
                .map_err(|e| ApiError::InvalidPayload(format!("{field}: {e}")));
        }
        match url.map(str::trim).filter(|s| !s.is_empty()) {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                Ok(ImageSource::Url(url.to_string()))
            }
            Some(url) => Err(ApiError::InvalidPayload(format!(
                "{field}: unsupported URL scheme in {url:?}"
            ))),
            None => Err(ApiError::MissingField(field)),
        }
    }
}

/// Decode standard base64, accepting a `data:<mime>;base64,` prefix.
pub fn decode_base64(data: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let payload = match data.split_once(";base64,") {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => data,
    };
    let cleaned: String = payload.split_whitespace().collect();
    base64::engine::general_purpose::STANDARD.decode(cleaned)
}

/// One named color in a logo analysis
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NamedColor {
    /// Human-readable name, e.g. "Light Vibrant Red"
    pub name: String,
    /// `#RRGGBB`
    pub hex: String,
    pub rgb: [u8; 3],
    /// Share of sampled logo pixels, one decimal
    pub percentage: f32,
}

/// Response from the logo analysis endpoint
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LogoAnalysis {
    /// Colors by descending coverage
    pub colors: Vec<NamedColor>,
    /// Natural language summary for downstream prompts
    pub description: String,
    /// True when the logo could not be clustered and fallback colors are shown
    pub fallback: bool,
}

/// One canonical canvas size
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlatformSize {
    pub platform: String,
    pub content_type: String,
    pub width: u32,
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;

    #[test]
    fn test_inline_wins_over_url() {
        let encoded = STANDARD.encode(b"abc");
        let source =
            ImageSource::from_fields("main_image", Some(&encoded), Some("https://x/y.png"))
                .unwrap();
        assert_eq!(source, ImageSource::Inline(b"abc".to_vec()));
    }

    #[test]
    fn test_url_used_when_inline_missing() {
        let source = ImageSource::from_fields("logo_image", None, Some(" https://x/y.png ")).unwrap();
        assert_eq!(source, ImageSource::Url("https://x/y.png".to_string()));
    }

    #[test]
    fn test_missing_both_is_missing_field() {
        let err = ImageSource::from_fields("logo_image", Some("  "), None).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: logo_image");
    }

    #[test]
    fn test_bad_scheme_rejected() {
        let err = ImageSource::from_fields("logo_image", None, Some("file:///etc/passwd")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidPayload(_)));
    }

    #[test]
    fn test_invalid_base64_is_invalid_payload() {
        let err = ImageSource::from_fields("main_image", Some("***"), None).unwrap_err();
        assert!(err.to_string().starts_with("Invalid payload: main_image:"));
    }

    #[test]
    fn test_data_url_and_whitespace() {
        let encoded = STANDARD.encode(b"hello world");
        let (a, b) = encoded.split_at(4);
        let data_url = format!("data:image/png;base64,{a}\n{b}");
        assert_eq!(decode_base64(&data_url).unwrap(), b"hello world");
    }

    #[test]
    fn test_compose_request_defaults() {
        let req: ComposeRequest = serde_json::from_str(r#"{"platform":"Instagram"}"#).unwrap();
        assert_eq!(req.platform, "Instagram");
        assert_eq!(req.content_type, "");
        assert!(req.overlay_text.is_none());
    }
}
