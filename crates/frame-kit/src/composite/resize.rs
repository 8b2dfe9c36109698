//! Aspect-preserving resize.

use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Scale `image` with Lanczos3 so it fits entirely inside `box_w` x `box_h`.
///
/// When the image is relatively wider than the box the width is pinned to
/// `box_w`, otherwise the height is pinned to `box_h`. The free side is
/// truncated and never drops below one pixel. Upscaling happens when the
/// image is smaller than the box. Zero-sized images are returned as-is;
/// a zero box side is treated as one pixel.
///
/// # Example
/// ```
/// use frame_kit::fit_inside_box;
/// use image::RgbaImage;
///
/// let wide = RgbaImage::new(2000, 1000);
/// let fitted = fit_inside_box(&wide, 912, 800);
/// assert_eq!(fitted.dimensions(), (912, 456));
/// ```
pub fn fit_inside_box(image: &RgbaImage, box_w: u32, box_h: u32) -> RgbaImage {
    let (w, h) = image.dimensions();
    if w == 0 || h == 0 {
        return image.clone();
    }

    let (new_w, new_h) = fitted_size(w, h, box_w.max(1), box_h.max(1));
    if (new_w, new_h) == (w, h) {
        return image.clone();
    }
    imageops::resize(image, new_w, new_h, FilterType::Lanczos3)
}

/// Target size for [`fit_inside_box`], exposed for layout math.
pub fn fitted_size(w: u32, h: u32, box_w: u32, box_h: u32) -> (u32, u32) {
    let (w, h, bw, bh) = (w as u64, h as u64, box_w as u64, box_h as u64);
    // w/h > bw/bh without floating point
    if w * bh > bw * h {
        (bw as u32, ((bw * h) / w).max(1) as u32)
    } else {
        (((bh * w) / h).max(1) as u32, bh as u32)
    }
}
