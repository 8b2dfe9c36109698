use crate::error::{ApiError, RenderError};
use crate::rendering::{decode_image, encode_png, FrameBuilder, FrameRequest, OverlayOutcome};
use crate::services::company_directory::CompanyDirectory;
use crate::services::overlay_text::normalize_overlay;
use frame_kit::{CanvasSize, ColorRgba};
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Inputs for one branded post.
#[derive(Debug, Clone, Default)]
pub struct PostInput {
    pub main_bytes: Vec<u8>,
    pub logo_bytes: Vec<u8>,
    pub platform: String,
    pub content_type: String,
    pub company_id: Option<String>,
    pub overlay_text: Option<String>,
    /// Overrides the website found through `company_id`
    pub website: Option<String>,
}

/// Encoded post plus the facts callers report back.
#[derive(Debug, Clone)]
pub struct ComposeOutput {
    pub png: Vec<u8>,
    pub canvas: CanvasSize,
    pub dominant: ColorRgba,
    pub secondary: Option<ColorRgba>,
    pub overlay: OverlayOutcome,
}

/// Composes branded posts on the blocking pool, a bounded number at a time.
pub struct ComposeService {
    builder: Arc<FrameBuilder>,
    directory: Arc<dyn CompanyDirectory>,
    permits: Arc<Semaphore>,
    fallback_overlay: Option<String>,
}

impl ComposeService {
    pub fn new(
        builder: Arc<FrameBuilder>,
        directory: Arc<dyn CompanyDirectory>,
        max_concurrent_builds: usize,
        fallback_overlay: Option<String>,
    ) -> Self {
        Self {
            builder,
            directory,
            permits: Arc::new(Semaphore::new(max_concurrent_builds.max(1))),
            fallback_overlay,
        }
    }

    pub fn builder(&self) -> &Arc<FrameBuilder> {
        &self.builder
    }

    /// Compose a branded post from raw image bytes and return PNG bytes.
    pub async fn compose_branded_post(
        &self,
        main_bytes: Vec<u8>,
        logo_bytes: Vec<u8>,
        platform: &str,
        content_type: &str,
        company_id: Option<&str>,
        overlay_text: Option<&str>,
    ) -> Result<Vec<u8>, ApiError> {
        let output = self
            .compose(PostInput {
                main_bytes,
                logo_bytes,
                platform: platform.to_string(),
                content_type: content_type.to_string(),
                company_id: company_id.map(str::to_string),
                overlay_text: overlay_text.map(str::to_string),
                website: None,
            })
            .await?;
        Ok(output.png)
    }

    pub async fn compose(&self, input: PostInput) -> Result<ComposeOutput, ApiError> {
        if input.platform.trim().is_empty() {
            return Err(ApiError::MissingField("platform"));
        }

        let company = match input.company_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => {
                let found = self.directory.find(id).await?;
                if found.is_none() {
                    tracing::info!(company_id = %id, "Unknown company");
                }
                found
            }
            _ => None,
        };
        let company_name = company.as_ref().map(|c| c.name.as_str());

        let website = input
            .website
            .clone()
            .or_else(|| company.as_ref().and_then(|c| c.website().map(str::to_string)));

        let overlay_text = input
            .overlay_text
            .as_deref()
            .and_then(|t| normalize_overlay(t, company_name))
            .or_else(|| {
                self.fallback_overlay
                    .as_deref()
                    .and_then(|t| normalize_overlay(t, company_name))
            });

        // Held by the blocking task, so a dropped request cannot free its
        // slot while the build is still running.
        let permit = self
            .permits
            .clone()
            .acquire_owned()
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))?;

        let builder = self.builder.clone();
        let PostInput {
            main_bytes,
            logo_bytes,
            platform,
            content_type,
            ..
        } = input;

        let output = tokio::task::spawn_blocking(move || {
            let _permit = permit;
            let main_image = decode_image(&main_bytes, "main")?;
            let logo_image = decode_image(&logo_bytes, "logo")?;
            let frame = builder.build(FrameRequest {
                main_image,
                logo_image,
                platform,
                content_type,
                overlay_text,
                website,
            })?;
            let png = encode_png(&frame.image)?;
            Ok::<_, RenderError>(ComposeOutput {
                png,
                canvas: frame.canvas,
                dominant: frame.brand.dominant(),
                secondary: frame.brand.secondary(),
                overlay: frame.overlay,
            })
        })
        .await
        .map_err(|e| RenderError::Task(e.to_string()))??;

        tracing::info!(
            canvas = %output.canvas,
            dominant = %output.dominant,
            size = output.png.len(),
            "Composed branded post"
        );
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CompanyProfile;
    use crate::rendering::{FrameSettings, TextRenderer};
    use crate::services::company_directory::InMemoryDirectory;
    use image::{Rgba, RgbaImage};

    fn png_bytes(w: u32, h: u32, color: [u8; 4]) -> Vec<u8> {
        encode_png(&RgbaImage::from_pixel(w, h, Rgba(color))).unwrap()
    }

    async fn service() -> ComposeService {
        let directory = InMemoryDirectory::new();
        directory
            .upsert(
                "acme".into(),
                CompanyProfile::new("Acme", Some("acme.example".into())),
            )
            .await
            .unwrap();
        let builder = FrameBuilder::new(Arc::new(TextRenderer::new()), FrameSettings::default());
        ComposeService::new(Arc::new(builder), Arc::new(directory), 2, None)
    }

    #[tokio::test]
    async fn test_compose_returns_png_of_canvas_size() {
        let svc = service().await;
        let output = svc
            .compose(PostInput {
                main_bytes: png_bytes(400, 200, [0, 0, 255, 255]),
                logo_bytes: png_bytes(50, 50, [255, 0, 0, 255]),
                platform: "Instagram".into(),
                content_type: "Instagram Stories".into(),
                company_id: Some("acme".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(output.canvas, CanvasSize::STORY);
        assert_eq!(output.dominant, ColorRgba::opaque(255, 0, 0));
        let decoded = decode_image(&output.png, "main").unwrap();
        assert_eq!(decoded.dimensions(), (1080, 1920));
    }

    #[tokio::test]
    async fn test_blank_platform_is_missing_field() {
        let svc = service().await;
        let err = svc
            .compose_branded_post(Vec::new(), Vec::new(), "  ", "Feed", None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingField("platform")));
    }

    #[tokio::test]
    async fn test_undecodable_main_is_bad_input() {
        let svc = service().await;
        let err = svc
            .compose_branded_post(
                b"nope".to_vec(),
                png_bytes(10, 10, [255, 0, 0, 255]),
                "Facebook",
                "Image Posts",
                None,
                None,
            )
            .await
            .unwrap_err();
        match err {
            ApiError::Render(e) => assert!(e.is_bad_input()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_blank_overlay_matches_absent_overlay() {
        let svc = service().await;
        let main = png_bytes(300, 300, [0, 128, 0, 255]);
        let logo = png_bytes(30, 30, [255, 0, 0, 255]);

        let without = svc
            .compose_branded_post(main.clone(), logo.clone(), "LinkedIn", "Image Posts", None, None)
            .await
            .unwrap();
        let blank = svc
            .compose_branded_post(main, logo, "LinkedIn", "Image Posts", None, Some("   "))
            .await
            .unwrap();
        assert_eq!(without, blank);
    }

    #[tokio::test]
    async fn test_cancelled_request_keeps_build_slot_until_done() {
        let directory = InMemoryDirectory::new();
        let builder = FrameBuilder::new(Arc::new(TextRenderer::new()), FrameSettings::default());
        let svc = ComposeService::new(Arc::new(builder), Arc::new(directory), 1, None);

        let compose = svc.compose(PostInput {
            main_bytes: png_bytes(3000, 3000, [0, 0, 255, 255]),
            logo_bytes: png_bytes(400, 400, [255, 0, 0, 255]),
            platform: "Instagram".into(),
            content_type: "Instagram Stories".into(),
            ..Default::default()
        });
        // Polled once, which starts the blocking build, then dropped
        let cancelled = tokio::time::timeout(std::time::Duration::ZERO, compose).await;
        assert!(cancelled.is_err());

        assert_eq!(svc.permits.available_permits(), 0);
        let released =
            tokio::time::timeout(std::time::Duration::from_secs(120), svc.permits.acquire()).await;
        assert!(released.is_ok(), "build slot was never released");
    }
}
