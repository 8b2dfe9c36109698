//! Caption overlay burned into the main image: a faint rounded scrim, three
//! blurred drop shadows, a dark outline and white text, sharpened as a
//! single layer before being composited onto the frame.

use crate::error::RenderError;
use crate::rendering::text::{TextDraw, TextRenderer, TextStyle};
use frame_kit::{fill_rounded_rect, gaussian_blur, paste_with_alpha, unsharp_mask, ColorRgba, LayoutRegion};
use image::RgbaImage;
use std::sync::Arc;

/// One drop shadow pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowPass {
    /// Offset to the right and down, in pixels
    pub offset: i32,
    /// Gaussian sigma
    pub blur: f32,
    pub color: ColorRgba,
}

/// Look of the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    pub family: String,
    pub scrim_color: ColorRgba,
    pub corner_radius: f32,
    pub min_font_size: u32,
    /// Font size is `min(width, height) / font_divisor`, floored at `min_font_size`
    pub font_divisor: u32,
    /// Drawn in order, farthest first
    pub shadows: Vec<ShadowPass>,
    pub stroke_color: ColorRgba,
    pub min_stroke: u32,
    /// Stroke width is `font_size / stroke_divisor`, floored at `min_stroke`
    pub stroke_divisor: u32,
    pub fill: ColorRgba,
    pub sharpen_sigma: f32,
    pub sharpen_percent: u32,
    pub sharpen_threshold: u8,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            scrim_color: ColorRgba::new(241, 238, 233, 25),
            corner_radius: 15.0,
            min_font_size: 32,
            font_divisor: 18,
            shadows: vec![
                ShadowPass {
                    offset: 7,
                    blur: 5.0,
                    color: ColorRgba::new(0, 0, 0, 180),
                },
                ShadowPass {
                    offset: 5,
                    blur: 3.0,
                    color: ColorRgba::new(0, 0, 0, 200),
                },
                ShadowPass {
                    offset: 3,
                    blur: 2.0,
                    color: ColorRgba::new(0, 0, 0, 220),
                },
            ],
            stroke_color: ColorRgba::BLACK,
            min_stroke: 3,
            stroke_divisor: 12,
            fill: ColorRgba::WHITE,
            sharpen_sigma: 1.0,
            sharpen_percent: 150,
            sharpen_threshold: 2,
        }
    }
}

impl OverlayStyle {
    pub fn font_size(&self, region: &LayoutRegion) -> u32 {
        (region.width.min(region.height) / self.font_divisor.max(1)).max(self.min_font_size)
    }

    pub fn stroke_width(&self, font_size: u32) -> u32 {
        (font_size / self.stroke_divisor.max(1)).max(self.min_stroke)
    }

    /// Padding around the ink box so offsets, blur and stroke are not clipped.
    fn layer_margin(&self, stroke: u32) -> u32 {
        let shadow = self
            .shadows
            .iter()
            .map(|s| s.offset.unsigned_abs() + (3.0 * s.blur).ceil() as u32)
            .max()
            .unwrap_or(0);
        shadow + stroke + 2
    }
}

/// What the overlay stage did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayOutcome {
    /// Text was empty; frame untouched
    Skipped,
    /// No font could shape the text; only the scrim was drawn
    ScrimOnly,
    Rendered,
}

pub struct TextOverlayRenderer {
    text: Arc<TextRenderer>,
}

impl TextOverlayRenderer {
    pub fn new(text: Arc<TextRenderer>) -> Self {
        Self { text }
    }

    /// Burn `text` into `frame`, centered in `region`.
    pub fn render(
        &self,
        frame: &mut RgbaImage,
        region: LayoutRegion,
        text: &str,
        style: &OverlayStyle,
    ) -> Result<OverlayOutcome, RenderError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(OverlayOutcome::Skipped);
        }

        fill_rounded_rect(frame, region, style.corner_radius, style.scrim_color);

        let font_size = style.font_size(&region);
        let text_style = TextStyle {
            family: style.family.clone(),
            size: font_size as f32,
            bold: true,
        };
        let Some(metrics) = self.text.measure(text, &text_style) else {
            tracing::warn!(text = %text, family = %style.family, "No font available for overlay text");
            return Ok(OverlayOutcome::ScrimOnly);
        };

        let (tw, th) = (metrics.width_px(), metrics.height_px());
        let text_x = region.x + (region.width as i64 - tw as i64) / 2;
        let text_y = region.y + (region.height as i64 - th as i64) / 2;

        let stroke = style.stroke_width(font_size);
        let margin = style.layer_margin(stroke);
        let layer_w = tw + 2 * margin;
        let layer_h = th + 2 * margin;
        let origin = margin as f32;

        let mut accumulated = RgbaImage::new(layer_w, layer_h);
        for shadow in &style.shadows {
            let draw = TextDraw {
                ink_x: origin + shadow.offset as f32,
                ink_y: origin + shadow.offset as f32,
                fill: shadow.color,
                stroke: None,
            };
            let layer =
                self.text
                    .render_layer(text, &text_style, &metrics, &[draw], layer_w, layer_h)?;
            paste_with_alpha(&mut accumulated, &gaussian_blur(&layer, shadow.blur), 0, 0);
        }

        // SVG strokes are centered on the outline, so double the width to
        // get `stroke` pixels outside the glyph.
        let body = [
            TextDraw {
                ink_x: origin,
                ink_y: origin,
                fill: style.stroke_color,
                stroke: Some((style.stroke_color, (stroke * 2) as f32)),
            },
            TextDraw {
                ink_x: origin,
                ink_y: origin,
                fill: style.fill,
                stroke: None,
            },
        ];
        let layer = self
            .text
            .render_layer(text, &text_style, &metrics, &body, layer_w, layer_h)?;
        paste_with_alpha(&mut accumulated, &layer, 0, 0);

        let sharpened = unsharp_mask(
            &accumulated,
            style.sharpen_sigma,
            style.sharpen_percent,
            style.sharpen_threshold,
        );
        paste_with_alpha(
            frame,
            &sharpened,
            text_x - margin as i64,
            text_y - margin as i64,
        );

        tracing::debug!(
            text = %text,
            font_size = font_size,
            stroke = stroke,
            "Rendered overlay text"
        );
        Ok(OverlayOutcome::Rendered)
    }
}
