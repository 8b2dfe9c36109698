//! HSV representation used for color naming.

use super::ColorRgba;

/// Hue/saturation/value triple.
///
/// `h` is in degrees `0.0..360.0`; `s` and `v` are in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    /// Convert 8-bit RGB to HSV. Achromatic colors get hue 0.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let r = r as f32 / 255.0;
        let g = g as f32 / 255.0;
        let b = b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let v = max;
        if max <= 0.0 || delta <= 0.0 {
            return Self { h: 0.0, s: 0.0, v };
        }
        let s = delta / max;

        let sector = if max == r {
            (g - b) / delta
        } else if max == g {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };
        let h = (sector * 60.0).rem_euclid(360.0);

        Self { h, s, v }
    }
}

impl From<ColorRgba> for Hsv {
    fn from(c: ColorRgba) -> Self {
        Self::from_rgb(c.r, c.g, c.b)
    }
}
