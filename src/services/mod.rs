pub mod company_directory;
pub mod compose;
pub mod image_fetcher;
pub mod logo_analysis;
pub mod overlay_text;

pub use company_directory::{CompanyDirectory, InMemoryDirectory};
pub use compose::{ComposeOutput, ComposeService, PostInput};
pub use image_fetcher::ImageFetcher;
pub use logo_analysis::{describe_palette, LogoAnalyzer, ANALYSIS_COLORS};
pub use overlay_text::normalize_overlay;
