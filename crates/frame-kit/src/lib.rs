//! frame-kit: pixel building blocks for branded social media frames
//!
//! This crate holds the font-free half of the compositor: everything that
//! can be expressed directly on RGBA buffers. Text rendering lives in the
//! service crate, which owns the font database.
//!
//! # Quick Start
//!
//! ```
//! use frame_kit::{
//!     dimensions_for, extract_dominant, fit_inside_box, paint_rect, paste_with_alpha,
//!     regions_for, round_corners, ColorRgba, FrameMetrics,
//! };
//! use image::{Rgba, RgbaImage};
//!
//! let logo = RgbaImage::from_pixel(300, 300, Rgba([255, 0, 0, 255]));
//! let photo = RgbaImage::from_pixel(200, 100, Rgba([0, 0, 255, 255]));
//!
//! let brand = extract_dominant(&logo, 2);
//! let canvas_size = dimensions_for("Instagram", "Feed Image Posts");
//! let regions = regions_for(canvas_size, &FrameMetrics::default()).unwrap();
//!
//! let mut canvas = RgbaImage::from_pixel(
//!     canvas_size.width,
//!     canvas_size.height,
//!     Rgba([255, 255, 255, 255]),
//! );
//! paint_rect(&mut canvas, regions.rail_left, brand.dominant());
//! paint_rect(&mut canvas, regions.rail_right, brand.dominant());
//!
//! let fitted = round_corners(
//!     fit_inside_box(&photo, regions.content.width, regions.content.height),
//!     15,
//! );
//! let (x, y) = regions.content.center_offset(fitted.width(), fitted.height());
//! paste_with_alpha(&mut canvas, &fitted, x, y);
//!
//! assert_eq!(ColorRgba::from(*canvas.get_pixel(0, 0)), ColorRgba::opaque(255, 0, 0));
//! ```
//!
//! # Modules
//!
//! - [`color`]: [`ColorRgba`], HSV and [`name_for`]
//! - [`palette`]: k-means dominant colors with a deterministic fallback
//! - [`layout`]: platform canvas sizes and frame regions
//! - [`composite`]: fit, round, paste, fill, blur and sharpen
//!
//! # Determinism
//!
//! Every function here is pure. Clustering uses a fixed RNG seed, so the
//! same logo always produces the same brand colors, and the same inputs
//! always produce byte-identical canvases.

pub mod color;
pub mod composite;
pub mod layout;
pub mod palette;


pub use color::{name_for, ColorRgba, Hsv};
pub use composite::{
    fill_rounded_rect, fit_inside_box, fitted_size, gaussian_blur, over, paint_rect,
    paste_with_alpha, round_corners, rounded_rect_coverage, rounded_rect_mask, unsharp_mask,
};
pub use layout::{
    dimensions_for, regions_for, CanvasSize, ContentCategory, FrameMetrics, FrameRegions,
    LayoutError, LayoutRegion, Platform,
};
pub use palette::{
    extract_dominant, ColorExtractor, DominantColorSet, ExtractOptions, PaletteEntry,
    ParseColorError, FALLBACK_DOMINANT, FALLBACK_SECONDARY,
};
