pub mod frame_builder;
pub mod overlay;
pub mod png;
pub mod text;

pub use frame_builder::{ComposedFrame, FrameBuilder, FrameRequest, FrameSettings};
pub use overlay::{OverlayOutcome, OverlayStyle, ShadowPass, TextOverlayRenderer};
pub use png::{decode_image, encode_png};
pub use text::{TextDraw, TextMetrics, TextRenderer, TextStyle};
