use crate::error::{ApiError, RenderError};
use crate::models::{LogoAnalysis, NamedColor};
use crate::rendering::{decode_image, FrameBuilder};
use frame_kit::{name_for, DominantColorSet};
use std::sync::Arc;

/// Colors reported by the analysis endpoint.
pub const ANALYSIS_COLORS: usize = 5;

/// Colors darker than this in every channel...
const NEAR_BLACK_MAX_CHANNEL: u8 = 10;
/// ...and covering less than this percentage are treated as noise.
const NEAR_BLACK_MIN_PERCENT: f32 = 5.0;

/// Names the colors of a logo and summarizes them in a sentence.
#[derive(Clone)]
pub struct LogoAnalyzer {
    builder: Arc<FrameBuilder>,
}

impl LogoAnalyzer {
    pub fn new(builder: Arc<FrameBuilder>) -> Self {
        Self { builder }
    }

    /// Decode and analyze logo bytes on the blocking pool.
    pub async fn analyze(&self, logo_bytes: Vec<u8>) -> Result<LogoAnalysis, ApiError> {
        let builder = self.builder.clone();
        let analysis = tokio::task::spawn_blocking(move || {
            let logo = decode_image(&logo_bytes, "logo")?;
            Ok::<_, RenderError>(describe_palette(
                &builder.analyze_logo(&logo, ANALYSIS_COLORS),
            ))
        })
        .await
        .map_err(|e| RenderError::Task(e.to_string()))??;

        tracing::info!(
            colors = analysis.colors.len(),
            fallback = analysis.fallback,
            "Analyzed logo"
        );
        Ok(analysis)
    }
}

/// Named colors and a description for an extracted palette.
pub fn describe_palette(palette: &DominantColorSet) -> LogoAnalysis {
    let colors: Vec<NamedColor> = palette
        .entries()
        .iter()
        .zip(palette.coverage_percent())
        .filter(|(entry, percent)| {
            let c = entry.color;
            palette.is_fallback()
                || c.r.max(c.g).max(c.b) >= NEAR_BLACK_MAX_CHANNEL
                || *percent >= NEAR_BLACK_MIN_PERCENT
        })
        .map(|(entry, percent)| NamedColor {
            name: name_for(entry.color),
            hex: entry.color.to_hex(),
            rgb: entry.color.rgb(),
            percentage: (percent * 10.0).round() / 10.0,
        })
        .collect();

    LogoAnalysis {
        description: describe(&colors),
        colors,
        fallback: palette.is_fallback(),
    }
}

fn describe(colors: &[NamedColor]) -> String {
    let Some((primary, rest)) = colors.split_first() else {
        return "Unable to analyze logo design".to_string();
    };

    let mut description = format!(
        "Logo design analysis: Primary color is {} ({})",
        primary.name, primary.hex
    );
    if rest.is_empty() {
        description.push('.');
    } else {
        let secondary: Vec<String> = rest
            .iter()
            .take(2)
            .map(|c| format!("{} ({})", c.name, c.hex))
            .collect();
        description.push_str(", with secondary colors ");
        description.push_str(&secondary.join(", "));
        description.push('.');
    }
    description
}
