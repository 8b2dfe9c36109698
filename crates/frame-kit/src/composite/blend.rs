//! Straight-alpha "over" compositing and rectangle fills.

use image::RgbaImage;

use super::mask::rounded_rect_coverage;
use crate::color::ColorRgba;
use crate::layout::LayoutRegion;

/// Porter-Duff "over" for straight-alpha pixels.
pub fn over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    match src[3] {
        0 => return dst,
        255 => return src,
        _ => {}
    }

    let sa = src[3] as u32;
    let da = mul_div255(dst[3] as u32, 255 - sa);
    let out_a = sa + da;
    if out_a == 0 {
        return [0, 0, 0, 0];
    }

    let mut out = [0u8; 4];
    for i in 0..3 {
        let c = src[i] as u32 * sa + dst[i] as u32 * da;
        out[i] = ((c + out_a / 2) / out_a).min(255) as u8;
    }
    out[3] = out_a.min(255) as u8;
    out
}

/// Composite `overlay` onto `base` with its top-left corner at `(x, y)`.
///
/// Offsets may be negative or extend past the base; the overlay is
/// clipped to the base bounds.
pub fn paste_with_alpha(base: &mut RgbaImage, overlay: &RgbaImage, x: i64, y: i64) {
    let (bw, bh) = (base.width() as i64, base.height() as i64);
    let (ow, oh) = (overlay.width() as i64, overlay.height() as i64);

    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + ow).min(bw);
    let y1 = (y + oh).min(bh);
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    for by in y0..y1 {
        for bx in x0..x1 {
            let src = overlay.get_pixel((bx - x) as u32, (by - y) as u32).0;
            let dst = base.get_pixel_mut(bx as u32, by as u32);
            dst.0 = over(dst.0, src);
        }
    }
}

/// Fill a region with a solid color, replacing what is underneath.
pub fn paint_rect(base: &mut RgbaImage, region: LayoutRegion, color: ColorRgba) {
    let Some((x0, y0, x1, y1)) = clip(base, region) else {
        return;
    };
    let px = color.to_array();
    for y in y0..y1 {
        for x in x0..x1 {
            base.get_pixel_mut(x, y).0 = px;
        }
    }
}

/// Blend a rounded rectangle of `color` over the region.
///
/// The color's alpha is scaled by the anti-aliased corner coverage.
pub fn fill_rounded_rect(base: &mut RgbaImage, region: LayoutRegion, radius: f32, color: ColorRgba) {
    let Some((x0, y0, x1, y1)) = clip(base, region) else {
        return;
    };
    for y in y0..y1 {
        for x in x0..x1 {
            let local_x = (x as i64 - region.x) as u32;
            let local_y = (y as i64 - region.y) as u32;
            let coverage =
                rounded_rect_coverage(local_x, local_y, region.width, region.height, radius);
            if coverage <= 0.0 {
                continue;
            }
            let a = (color.a as f32 * coverage).round() as u8;
            let dst = base.get_pixel_mut(x, y);
            dst.0 = over(dst.0, color.with_alpha(a).to_array());
        }
    }
}

fn clip(base: &RgbaImage, region: LayoutRegion) -> Option<(u32, u32, u32, u32)> {
    let x0 = region.x.max(0);
    let y0 = region.y.max(0);
    let x1 = region.right().min(base.width() as i64);
    let y1 = region.bottom().min(base.height() as i64);
    if x0 >= x1 || y0 >= y1 {
        return None;
    }
    Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
}

fn mul_div255(x: u32, y: u32) -> u32 {
    (x * y + 127) / 255
}
