//! Human-readable color names from HSV thresholds.

use super::{ColorRgba, Hsv};

/// Below this saturation a color is named on the gray ladder.
const GRAY_SATURATION: f32 = 0.15;

/// Gray ladder keyed on value, first match wins.
const GRAY_LADDER: [(f32, &str); 4] = [
    (0.15, "Black"),
    (0.30, "Dark Gray"),
    (0.60, "Gray"),
    (0.85, "Light Gray"),
];

/// Hue buckets in degrees, inclusive on both ends, first match wins.
const HUE_BUCKETS: [(f32, f32, &str); 8] = [
    (0.0, 15.0, "Red"),
    (15.0, 45.0, "Orange"),
    (45.0, 70.0, "Yellow"),
    (70.0, 160.0, "Green"),
    (160.0, 200.0, "Cyan"),
    (200.0, 260.0, "Blue"),
    (260.0, 320.0, "Purple"),
    (320.0, 360.0, "Pink"),
];

/// Name an RGB color, e.g. `"Vibrant Red"`, `"Dark Pale Blue"` or `"Gray"`.
///
/// The result is `brightness qualifier + saturation qualifier + hue name`.
/// Brightness: value < 0.3 gives "Dark ", > 0.7 gives "Light ".
/// Saturation: > 0.7 gives "Vibrant ", < 0.4 gives "Pale ".
///
/// # Example
/// ```
/// use frame_kit::{name_for, ColorRgba};
/// assert_eq!(name_for(ColorRgba::opaque(255, 0, 0)), "Light Vibrant Red");
/// assert_eq!(name_for(ColorRgba::opaque(128, 128, 128)), "Gray");
/// ```
pub fn name_for(color: ColorRgba) -> String {
    let hsv = Hsv::from(color);

    if hsv.s < GRAY_SATURATION {
        return GRAY_LADDER
            .iter()
            .find(|(limit, _)| hsv.v < *limit)
            .map(|(_, name)| *name)
            .unwrap_or("White")
            .to_string();
    }

    let Some(hue) = HUE_BUCKETS
        .iter()
        .find(|(lo, hi, _)| *lo <= hsv.h && hsv.h <= *hi)
        .map(|(_, _, name)| *name)
    else {
        return "Unknown".to_string();
    };

    let saturation = if hsv.s > 0.7 {
        "Vibrant "
    } else if hsv.s < 0.4 {
        "Pale "
    } else {
        ""
    };
    let brightness = if hsv.v < 0.3 {
        "Dark "
    } else if hsv.v > 0.7 {
        "Light "
    } else {
        ""
    };

    format!("{brightness}{saturation}{hue}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_ladder() {
        assert_eq!(name_for(ColorRgba::opaque(0, 0, 0)), "Black");
        assert_eq!(name_for(ColorRgba::opaque(60, 60, 60)), "Dark Gray");
        assert_eq!(name_for(ColorRgba::opaque(128, 128, 128)), "Gray");
        assert_eq!(name_for(ColorRgba::opaque(200, 200, 200)), "Light Gray");
        assert_eq!(name_for(ColorRgba::opaque(255, 255, 255)), "White");
    }

    #[test]
    fn test_hue_buckets() {
        assert_eq!(name_for(ColorRgba::opaque(255, 0, 0)), "Light Vibrant Red");
        assert_eq!(name_for(ColorRgba::opaque(0, 0, 255)), "Light Vibrant Blue");
        assert_eq!(name_for(ColorRgba::opaque(0, 128, 0)), "Vibrant Green");
        assert_eq!(name_for(ColorRgba::opaque(255, 165, 0)), "Light Vibrant Orange");
        assert_eq!(name_for(ColorRgba::opaque(0, 200, 200)), "Light Vibrant Cyan");
    }

    #[test]
    fn test_qualifiers() {
        // s = 0.25, v ~ 0.2
        assert_eq!(name_for(ColorRgba::opaque(51, 38, 38)), "Dark Pale Red");
        // s = 0.5, v ~ 0.5: no qualifiers
        assert_eq!(name_for(ColorRgba::opaque(128, 64, 64)), "Red");
    }

    #[test]
    fn test_fallback_brand_colors() {
        assert_eq!(name_for(ColorRgba::opaque(0, 179, 173)), "Light Vibrant Cyan");
        assert_eq!(name_for(ColorRgba::opaque(44, 27, 71)), "Dark Purple");
    }

    #[test]
    fn test_unknown_is_unreachable() {
        for r in (0..=255u16).step_by(17) {
            for g in (0..=255u16).step_by(17) {
                for b in (0..=255u16).step_by(17) {
                    let name = name_for(ColorRgba::opaque(r as u8, g as u8, b as u8));
                    assert_ne!(name, "Unknown", "rgb({r},{g},{b})");
                }
            }
        }
    }
}
