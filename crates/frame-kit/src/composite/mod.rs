//! Raster compositing primitives
//!
//! All images are `image::RgbaImage` with straight (non-premultiplied)
//! alpha. Filters premultiply internally.

mod blend;
mod filter;
mod mask;
mod resize;

pub use blend::{fill_rounded_rect, over, paint_rect, paste_with_alpha};
pub use filter::{gaussian_blur, unsharp_mask};
pub use mask::{round_corners, rounded_rect_coverage, rounded_rect_mask};
pub use resize::{fit_inside_box, fitted_size};
