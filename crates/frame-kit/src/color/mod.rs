//! Color types and naming
//!
//! - [`ColorRgba`]: straight-alpha 8-bit color, parsed from and printed as hex
//! - [`Hsv`]: hue/saturation/value view used by [`name_for`]
//!
//! # Example
//!
//! ```
//! use frame_kit::{name_for, ColorRgba};
//!
//! let brand: ColorRgba = "#2C1B47".parse().unwrap();
//! assert_eq!(name_for(brand), "Dark Purple");
//! ```

mod hsv;
mod naming;
mod rgba;

pub use hsv::Hsv;
pub use naming::name_for;
pub use rgba::ColorRgba;
