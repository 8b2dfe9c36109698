//! Frame geometry: rails, logo band, content area and caption strip.

use super::error::LayoutError;
use super::platform::CanvasSize;

/// Axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutRegion {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl LayoutRegion {
    pub const fn new(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i64 {
        self.x + self.width as i64
    }

    pub fn bottom(&self) -> i64 {
        self.y + self.height as i64
    }

    /// Top-left offset that centers an item of the given size in this region.
    pub fn center_offset(&self, width: u32, height: u32) -> (i64, i64) {
        (
            self.x + (self.width as i64 - width as i64) / 2,
            self.y + (self.height as i64 - height as i64) / 2,
        )
    }
}

/// Fixed frame measurements in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMetrics {
    /// Width of each vertical brand-color rail
    pub rail_width: u32,
    /// Gap above the logo band
    pub top_margin: u32,
    /// Strip below the content area that holds the website caption
    pub bottom_margin: u32,
    /// Horizontal padding between a rail and the content
    pub inner_pad_x: u32,
    /// Height reserved for the logo
    pub logo_band_height: u32,
    /// Extra space kept free above the bottom margin
    pub caption_reserve: u32,
    /// Maximum logo width as a fraction of the canvas width
    pub logo_width_ratio: f32,
}

impl Default for FrameMetrics {
    fn default() -> Self {
        Self {
            rail_width: 44,
            top_margin: 20,
            bottom_margin: 60,
            inner_pad_x: 40,
            logo_band_height: 160,
            caption_reserve: 40,
            logo_width_ratio: 0.55,
        }
    }
}

/// Every region of a branded frame for one canvas size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRegions {
    pub canvas: CanvasSize,
    pub rail_left: LayoutRegion,
    pub rail_right: LayoutRegion,
    /// Box the main image is fitted and centered into
    pub content: LayoutRegion,
    /// Box the logo is fitted into, anchored at its top-left corner
    pub logo: LayoutRegion,
    /// Strip the website text is right-aligned in
    pub caption: LayoutRegion,
}

/// Compute frame regions for a canvas.
///
/// Fails with [`LayoutError::EmptyContentArea`] when the metrics leave a
/// non-positive content width or height; the area is never clamped.
///
/// # Example
/// ```
/// use frame_kit::{regions_for, CanvasSize, FrameMetrics};
/// let regions = regions_for(CanvasSize::new(1080, 1080), &FrameMetrics::default()).unwrap();
/// assert_eq!((regions.content.width, regions.content.height), (912, 800));
/// ```
pub fn regions_for(canvas: CanvasSize, metrics: &FrameMetrics) -> Result<FrameRegions, LayoutError> {
    let w = canvas.width as i64;
    let h = canvas.height as i64;
    let rail = metrics.rail_width as i64;
    let side = rail + metrics.inner_pad_x as i64;
    let content_y = metrics.top_margin as i64 + metrics.logo_band_height as i64;

    let content_w = w - 2 * side;
    let content_h = h - content_y - metrics.bottom_margin as i64 - metrics.caption_reserve as i64;
    if content_w <= 0 || content_h <= 0 || rail > w {
        return Err(LayoutError::EmptyContentArea {
            width: canvas.width,
            height: canvas.height,
        });
    }

    let logo_w = ((canvas.width as f64 * metrics.logo_width_ratio as f64).floor() as u32).max(1);
    let caption_h = metrics.bottom_margin.saturating_sub(10).max(1);

    Ok(FrameRegions {
        canvas,
        rail_left: LayoutRegion::new(0, 0, metrics.rail_width, canvas.height),
        rail_right: LayoutRegion::new(w - rail, 0, metrics.rail_width, canvas.height),
        content: LayoutRegion::new(side, content_y, content_w as u32, content_h as u32),
        logo: LayoutRegion::new(
            side,
            metrics.top_margin as i64,
            logo_w,
            metrics.logo_band_height.max(1),
        ),
        caption: LayoutRegion::new(
            side,
            h - metrics.bottom_margin as i64 + 10,
            content_w as u32,
            caption_h,
        ),
    })
}
