//! Dominant color extraction
//!
//! [`ColorExtractor`] clusters a logo into a [`DominantColorSet`]. When the
//! image has too few opaque pixels to cluster, the set holds a fixed
//! fallback pair and reports [`DominantColorSet::is_fallback`].

mod dominant;
mod error;
mod extractor;

pub use dominant::{DominantColorSet, PaletteEntry};
pub use error::ParseColorError;
pub use extractor::{
    extract_dominant, ColorExtractor, ExtractOptions, FALLBACK_DOMINANT, FALLBACK_SECONDARY,
};
