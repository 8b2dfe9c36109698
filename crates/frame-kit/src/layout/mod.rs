//! Canvas sizing and frame geometry
//!
//! [`dimensions_for`] maps free-form platform and content-type strings to a
//! [`CanvasSize`]; [`regions_for`] splits a canvas into the rails, logo
//! band, content area and caption strip of a branded frame.

mod error;
mod platform;
mod regions;

pub use error::LayoutError;
pub use platform::{dimensions_for, CanvasSize, ContentCategory, Platform};
pub use regions::{regions_for, FrameMetrics, FrameRegions, LayoutRegion};
