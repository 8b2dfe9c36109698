use crate::error::RenderError;
use crate::models::FramerConfig;
use crate::rendering::overlay::{OverlayOutcome, OverlayStyle, TextOverlayRenderer};
use crate::rendering::text::{TextDraw, TextRenderer, TextStyle};
use frame_kit::{
    dimensions_for, fit_inside_box, paint_rect, paste_with_alpha, regions_for, round_corners,
    CanvasSize, ColorExtractor, ColorRgba, DominantColorSet, FrameMetrics, LayoutRegion,
};
use image::RgbaImage;
use std::sync::Arc;

/// Everything needed for one branded post.
#[derive(Debug, Clone)]
pub struct FrameRequest {
    pub main_image: RgbaImage,
    pub logo_image: RgbaImage,
    pub platform: String,
    pub content_type: String,
    pub overlay_text: Option<String>,
    /// Website for the caption; the configured placeholder is used when `None`
    pub website: Option<String>,
}

/// A finished frame and what went into it.
#[derive(Debug, Clone)]
pub struct ComposedFrame {
    pub image: RgbaImage,
    pub canvas: CanvasSize,
    pub brand: DominantColorSet,
    pub overlay: OverlayOutcome,
    pub website: String,
}

/// Immutable settings shared by every build.
#[derive(Debug, Clone)]
pub struct FrameSettings {
    pub metrics: FrameMetrics,
    pub corner_radius: u32,
    pub brand_clusters: usize,
    pub fallback_colors: (ColorRgba, ColorRgba),
    pub fallback_website: String,
    pub font_family: String,
    pub website_font_size: f32,
    pub overlay: OverlayStyle,
}

impl Default for FrameSettings {
    fn default() -> Self {
        Self::from(&FramerConfig::default())
    }
}

impl From<&FramerConfig> for FrameSettings {
    fn from(config: &FramerConfig) -> Self {
        Self {
            metrics: config.metrics(),
            corner_radius: config.corner_radius,
            brand_clusters: config.brand_clusters.max(1),
            fallback_colors: config.fallback_pair(),
            fallback_website: config.fallback_website.clone(),
            font_family: config.font_family.clone(),
            website_font_size: config.website_font_size,
            overlay: OverlayStyle {
                family: config.font_family.clone(),
                corner_radius: config.corner_radius as f32,
                ..Default::default()
            },
        }
    }
}

/// Builds branded posts: brand colors from the logo, rails in the dominant
/// color, the main image fitted and rounded, an optional caption overlay,
/// the logo in the top band and the website in the bottom strip.
///
/// Stateless between calls; safe to share across threads.
pub struct FrameBuilder {
    text: Arc<TextRenderer>,
    overlay: TextOverlayRenderer,
    extractor: ColorExtractor,
    settings: FrameSettings,
}

impl FrameBuilder {
    pub fn new(text: Arc<TextRenderer>, settings: FrameSettings) -> Self {
        let (dominant, secondary) = settings.fallback_colors;
        Self {
            overlay: TextOverlayRenderer::new(text.clone()),
            text,
            extractor: ColorExtractor::new().fallback(dominant, secondary),
            settings,
        }
    }

    pub fn settings(&self) -> &FrameSettings {
        &self.settings
    }

    /// Brand colors for a logo, `k` clusters.
    pub fn analyze_logo(&self, logo: &RgbaImage, k: usize) -> DominantColorSet {
        self.extractor.extract(logo, k)
    }

    pub fn build(&self, request: FrameRequest) -> Result<ComposedFrame, RenderError> {
        ensure_non_empty(&request.main_image, "main")?;
        ensure_non_empty(&request.logo_image, "logo")?;

        let brand = self.analyze_logo(&request.logo_image, self.settings.brand_clusters);
        if brand.is_fallback() {
            tracing::info!(
                dominant = %brand.dominant(),
                "Logo has too few opaque pixels, using fallback brand colors"
            );
        }
        let dominant = brand.dominant();

        let canvas = dimensions_for(&request.platform, &request.content_type);
        let regions = regions_for(canvas, &self.settings.metrics)?;
        tracing::debug!(
            platform = %request.platform,
            content_type = %request.content_type,
            canvas = %canvas,
            dominant = %dominant,
            "Planned frame"
        );

        let mut image = RgbaImage::from_pixel(canvas.width, canvas.height, ColorRgba::WHITE.into());
        paint_rect(&mut image, regions.rail_left, dominant);
        paint_rect(&mut image, regions.rail_right, dominant);

        let main = round_corners(
            fit_inside_box(
                &request.main_image,
                regions.content.width,
                regions.content.height,
            ),
            self.settings.corner_radius,
        );
        let (main_x, main_y) = regions.content.center_offset(main.width(), main.height());
        paste_with_alpha(&mut image, &main, main_x, main_y);

        let overlay = match request.overlay_text.as_deref() {
            Some(text) => self.overlay.render(
                &mut image,
                LayoutRegion::new(main_x, main_y, main.width(), main.height()),
                text,
                &self.settings.overlay,
            )?,
            None => OverlayOutcome::Skipped,
        };

        let logo = fit_inside_box(&request.logo_image, regions.logo.width, regions.logo.height);
        paste_with_alpha(&mut image, &logo, regions.logo.x, regions.logo.y);

        let website = match request.website.as_deref().map(str::trim) {
            Some(w) if !w.is_empty() => w.to_string(),
            _ => {
                tracing::info!(
                    fallback = %self.settings.fallback_website,
                    "No website on record, using placeholder"
                );
                self.settings.fallback_website.clone()
            }
        };
        self.draw_caption(&mut image, regions.caption, &website, dominant)?;

        Ok(ComposedFrame {
            image,
            canvas,
            brand,
            overlay,
            website,
        })
    }

    /// Right-align `website` in the caption strip, ink top on the strip top.
    fn draw_caption(
        &self,
        image: &mut RgbaImage,
        caption: LayoutRegion,
        website: &str,
        color: ColorRgba,
    ) -> Result<(), RenderError> {
        let style = TextStyle {
            family: self.settings.font_family.clone(),
            size: self.settings.website_font_size,
            bold: false,
        };
        let Some(metrics) = self.text.measure(website, &style) else {
            tracing::warn!(website = %website, "No font available for website caption");
            return Ok(());
        };

        const PAD: u32 = 2;
        let (tw, th) = (metrics.width_px(), metrics.height_px());
        let layer = self.text.render_layer(
            website,
            &style,
            &metrics,
            &[TextDraw {
                ink_x: PAD as f32,
                ink_y: PAD as f32,
                fill: color,
                stroke: None,
            }],
            tw + 2 * PAD,
            th + 2 * PAD,
        )?;

        let x = caption.right() - tw as i64 - PAD as i64;
        let y = caption.y - PAD as i64;
        paste_with_alpha(image, &layer, x, y);
        Ok(())
    }
}

fn ensure_non_empty(image: &RgbaImage, which: &'static str) -> Result<(), RenderError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(RenderError::EmptyImage { which });
    }
    Ok(())
}
