//! Anti-aliased rounded-rectangle masks.

use image::{GrayImage, Luma, RgbaImage};

/// Coverage of pixel `(px, py)` by a `w` x `h` rounded rectangle anchored
/// at the origin, in `0.0..=1.0`.
///
/// `radius` is clamped to half the shorter side. Pixels outside the corner
/// squares are fully covered; inside them coverage falls off over one pixel
/// around the arc.
pub fn rounded_rect_coverage(px: u32, py: u32, w: u32, h: u32, radius: f32) -> f32 {
    if px >= w || py >= h {
        return 0.0;
    }
    let r = radius.min(w.min(h) as f32 / 2.0).max(0.0);
    if r <= 0.0 {
        return 1.0;
    }

    let cx = px as f32 + 0.5;
    let cy = py as f32 + 0.5;
    let (w, h) = (w as f32, h as f32);

    let dx = if cx < r {
        r - cx
    } else if cx > w - r {
        cx - (w - r)
    } else {
        return 1.0;
    };
    let dy = if cy < r {
        r - cy
    } else if cy > h - r {
        cy - (h - r)
    } else {
        return 1.0;
    };

    let dist = (dx * dx + dy * dy).sqrt();
    (r - dist + 0.5).clamp(0.0, 1.0)
}

/// Single-channel rounded-rectangle mask covering exactly `w` x `h`.
pub fn rounded_rect_mask(w: u32, h: u32, radius: f32) -> GrayImage {
    GrayImage::from_fn(w, h, |x, y| {
        Luma([(rounded_rect_coverage(x, y, w, h, radius) * 255.0).round() as u8])
    })
}

/// Replace the alpha channel with a rounded-rectangle mask over the image
/// bounds.
///
/// Existing transparency is overwritten, not combined, so the operation is
/// idempotent.
///
/// # Example
/// ```
/// use frame_kit::round_corners;
/// use image::{Rgba, RgbaImage};
///
/// let img = RgbaImage::from_pixel(100, 60, Rgba([0, 0, 255, 255]));
/// let rounded = round_corners(img, 15);
/// assert_eq!(rounded.get_pixel(0, 0).0[3], 0);
/// assert_eq!(rounded.get_pixel(50, 30).0[3], 255);
/// ```
pub fn round_corners(mut image: RgbaImage, radius: u32) -> RgbaImage {
    let (w, h) = image.dimensions();
    let mask = rounded_rect_mask(w, h, radius as f32);
    for (px, m) in image.pixels_mut().zip(mask.pixels()) {
        px.0[3] = m.0[0];
    }
    image
}
