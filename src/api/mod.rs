pub mod analyze;
pub mod compose;
pub mod platforms;

pub use analyze::{handle_analyze, __path_handle_analyze};
pub use compose::{handle_compose, ErrorResponse, __path_handle_compose};
pub use compose::{X_BRAND_DOMINANT, X_BRAND_SECONDARY, X_CANVAS_SIZE};
pub use platforms::{canonical_sizes, handle_platforms, __path_handle_platforms};
