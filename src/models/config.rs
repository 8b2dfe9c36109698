use frame_kit::{ColorRgba, FrameMetrics, FALLBACK_DOMINANT, FALLBACK_SECONDARY};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use super::CompanyProfile;

/// Default config path checked when `CONFIG_FILE` is not set
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Frame geometry, fallbacks and typography
    #[serde(default)]
    pub framer: FramerConfig,

    /// Request handling limits
    #[serde(default)]
    pub service: ServiceConfig,

    /// Company id to profile mappings
    #[serde(default)]
    pub companies: HashMap<String, CompanyProfile>,
}

/// Settings for building a branded frame
#[derive(Debug, Deserialize, Clone)]
pub struct FramerConfig {
    #[serde(default = "default_rail_width")]
    pub rail_width: u32,

    #[serde(default = "default_top_margin")]
    pub top_margin: u32,

    #[serde(default = "default_bottom_margin")]
    pub bottom_margin: u32,

    #[serde(default = "default_inner_pad_x")]
    pub inner_pad_x: u32,

    #[serde(default = "default_logo_band_height")]
    pub logo_band_height: u32,

    #[serde(default = "default_caption_reserve")]
    pub caption_reserve: u32,

    #[serde(default = "default_logo_width_ratio")]
    pub logo_width_ratio: f32,

    /// Corner radius for the main image and the overlay scrim
    #[serde(default = "default_corner_radius")]
    pub corner_radius: u32,

    /// Number of clusters used to find the brand color
    #[serde(default = "default_brand_clusters")]
    pub brand_clusters: usize,

    /// Dominant and secondary colors used when a logo cannot be clustered
    #[serde(default = "default_fallback_colors")]
    pub fallback_colors: Vec<String>,

    /// Website printed when the company has none on record
    #[serde(default = "default_fallback_website")]
    pub fallback_website: String,

    /// Overlay text used when a request carries none
    #[serde(default)]
    pub fallback_overlay: Option<String>,

    /// CSS-style font family list for overlay and caption text
    #[serde(default = "default_font_family")]
    pub font_family: String,

    #[serde(default = "default_website_font_size")]
    pub website_font_size: f32,
}

fn default_rail_width() -> u32 {
    44
}

fn default_top_margin() -> u32 {
    20
}

fn default_bottom_margin() -> u32 {
    60
}

fn default_inner_pad_x() -> u32 {
    40
}

fn default_logo_band_height() -> u32 {
    160
}

fn default_caption_reserve() -> u32 {
    40
}

fn default_logo_width_ratio() -> f32 {
    0.55
}

fn default_corner_radius() -> u32 {
    15
}

fn default_brand_clusters() -> usize {
    2
}

fn default_fallback_colors() -> Vec<String> {
    vec![FALLBACK_DOMINANT.to_hex(), FALLBACK_SECONDARY.to_hex()]
}

fn default_fallback_website() -> String {
    "CompanySite.com".to_string()
}

fn default_font_family() -> String {
    "Arial, Helvetica, DejaVu Sans, Liberation Sans, sans-serif".to_string()
}

fn default_website_font_size() -> f32 {
    30.0
}

impl Default for FramerConfig {
    fn default() -> Self {
        Self {
            rail_width: default_rail_width(),
            top_margin: default_top_margin(),
            bottom_margin: default_bottom_margin(),
            inner_pad_x: default_inner_pad_x(),
            logo_band_height: default_logo_band_height(),
            caption_reserve: default_caption_reserve(),
            logo_width_ratio: default_logo_width_ratio(),
            corner_radius: default_corner_radius(),
            brand_clusters: default_brand_clusters(),
            fallback_colors: default_fallback_colors(),
            fallback_website: default_fallback_website(),
            fallback_overlay: None,
            font_family: default_font_family(),
            website_font_size: default_website_font_size(),
        }
    }
}

impl FramerConfig {
    pub fn metrics(&self) -> FrameMetrics {
        FrameMetrics {
            rail_width: self.rail_width,
            top_margin: self.top_margin,
            bottom_margin: self.bottom_margin,
            inner_pad_x: self.inner_pad_x,
            logo_band_height: self.logo_band_height,
            caption_reserve: self.caption_reserve,
            logo_width_ratio: self.logo_width_ratio,
        }
    }

    /// Parsed fallback pair. Missing or malformed entries keep the built-in
    /// color for that slot.
    pub fn fallback_pair(&self) -> (ColorRgba, ColorRgba) {
        let parse = |idx: usize, default: ColorRgba| {
            match self.fallback_colors.get(idx).map(|s| s.parse::<ColorRgba>()) {
                Some(Ok(color)) => color,
                Some(Err(e)) => {
                    tracing::warn!(
                        value = %self.fallback_colors[idx],
                        error = %e,
                        "Invalid fallback color, using built-in"
                    );
                    default
                }
                None => default,
            }
        };
        (
            parse(0, FALLBACK_DOMINANT),
            parse(1, FALLBACK_SECONDARY),
        )
    }
}

/// Request handling limits
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    /// Frames composed at the same time
    #[serde(default = "default_max_concurrent_builds")]
    pub max_concurrent_builds: usize,

    /// Timeout for fetching images by URL
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// Largest accepted request body
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_max_concurrent_builds() -> usize {
    4
}

fn default_fetch_timeout_secs() -> u64 {
    30
}

fn default_max_body_bytes() -> usize {
    25 * 1024 * 1024
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_concurrent_builds: default_max_concurrent_builds(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl AppConfig {
    /// Load configuration from an explicit path, or from `config.yaml` in the
    /// working directory when it exists. Falls back to defaults on any error.
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(p) => p,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Path::new(DEFAULT_CONFIG_PATH),
            None => {
                tracing::info!("No config file, using defaults");
                return Self::default();
            }
        };

        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_yaml_str(&content),
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse YAML content, falling back to defaults on error.
    pub fn from_yaml_str(content: &str) -> Self {
        match serde_yaml::from_str::<Option<Self>>(content) {
            Ok(config) => {
                let config = config.unwrap_or_default();
                tracing::info!(
                    companies = config.companies.len(),
                    max_concurrent_builds = config.service.max_concurrent_builds,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to parse config, using defaults");
                Self::default()
            }
        }
    }
}
