//! Platform and content-type normalization and canonical canvas sizes.

use std::fmt;

/// Social platform a post targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Instagram,
    Facebook,
    LinkedIn,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Instagram, Platform::Facebook, Platform::LinkedIn];

    /// Case-insensitive parse. Unknown platforms return `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match normalize(s).as_str() {
            "instagram" => Some(Platform::Instagram),
            "facebook" => Some(Platform::Facebook),
            "linkedin" => Some(Platform::LinkedIn),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::LinkedIn => "LinkedIn",
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::LinkedIn => "linkedin",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of post, independent of platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentCategory {
    Feed,
    Story,
    ImagePost,
}

impl ContentCategory {
    pub const ALL: [ContentCategory; 3] = [
        ContentCategory::Feed,
        ContentCategory::Story,
        ContentCategory::ImagePost,
    ];

    /// Parse a platform-neutral content type such as `"Feed Image Posts"`,
    /// `"stories"` or `"image post"`.
    ///
    /// Input is lowercased, trimmed and whitespace-collapsed before matching.
    pub fn parse(s: &str) -> Option<Self> {
        Self::from_key(&normalize(s))
    }

    /// Parse a content type as written for `platform`.
    ///
    /// Only that platform's own name is stripped as a prefix, so
    /// `"Instagram Stories"` is a story on Instagram but nothing on LinkedIn.
    /// Instagram does not accept a bare `"image"`.
    pub fn parse_for(platform: Platform, s: &str) -> Option<Self> {
        let normalized = normalize(s);
        let key = match normalized.strip_prefix(platform.prefix()) {
            Some(rest) if rest.is_empty() || rest.starts_with(' ') => rest.trim_start(),
            _ => normalized.as_str(),
        };

        if platform == Platform::Instagram && key == "image" {
            return None;
        }
        Self::from_key(key)
    }

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "feed" | "feed image post" | "feed image posts" => Some(ContentCategory::Feed),
            "story" | "stories" => Some(ContentCategory::Story),
            "image" | "post" | "image post" | "image posts" => Some(ContentCategory::ImagePost),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContentCategory::Feed => "Feed",
            ContentCategory::Story => "Story",
            ContentCategory::ImagePost => "Image Post",
        }
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    /// Instagram square feed post
    pub const SQUARE: Self = Self::new(1080, 1080);
    /// Instagram story, 9:16
    pub const STORY: Self = Self::new(1080, 1920);
    /// Facebook portrait image post, 4:5
    pub const FACEBOOK_PORTRAIT: Self = Self::new(1200, 1500);
    /// LinkedIn portrait image post
    pub const LINKEDIN_PORTRAIT: Self = Self::new(1200, 1350);
    /// Used for any pair without a canonical size
    pub const DEFAULT: Self = Self::new(1200, 1200);

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Canonical size for a parsed pair. `None` on either side gets the default.
    pub fn for_pair(platform: Option<Platform>, category: Option<ContentCategory>) -> Self {
        match (platform, category) {
            (Some(Platform::Instagram), Some(ContentCategory::Feed))
            | (Some(Platform::Instagram), Some(ContentCategory::ImagePost)) => Self::SQUARE,
            (Some(Platform::Instagram), Some(ContentCategory::Story)) => Self::STORY,
            (Some(Platform::Facebook), Some(ContentCategory::ImagePost)) => {
                Self::FACEBOOK_PORTRAIT
            }
            (Some(Platform::LinkedIn), Some(ContentCategory::ImagePost)) => {
                Self::LINKEDIN_PORTRAIT
            }
            _ => Self::DEFAULT,
        }
    }
}

impl fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Resolve free-form platform and content-type strings to a canvas size.
///
/// Always succeeds; unrecognized input falls back to 1200x1200.
///
/// # Example
/// ```
/// use frame_kit::{dimensions_for, CanvasSize};
/// assert_eq!(dimensions_for("Instagram", "Instagram Stories"), CanvasSize::new(1080, 1920));
/// assert_eq!(dimensions_for("Unknown", "Unknown"), CanvasSize::new(1200, 1200));
/// ```
pub fn dimensions_for(platform: &str, content_type: &str) -> CanvasSize {
    let platform = Platform::parse(platform);
    let category = platform.and_then(|p| ContentCategory::parse_for(p, content_type));
    CanvasSize::for_pair(platform, category)
}

fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
