//! Gaussian blur and unsharp mask for RGBA layers.
//!
//! Both filters work on premultiplied data so transparent pixels do not
//! bleed their (meaningless) color into neighbours.

use image::RgbaImage;

/// Separable Gaussian blur with kernel radius `ceil(3 * sigma)`.
///
/// `sigma <= 0` returns a copy of the input.
pub fn gaussian_blur(image: &RgbaImage, sigma: f32) -> RgbaImage {
    let (w, h) = image.dimensions();
    if !sigma.is_finite() || sigma <= 0.0 || w == 0 || h == 0 {
        return image.clone();
    }

    let radius = (3.0 * sigma).ceil() as u32;
    let kernel = gaussian_kernel_q16(radius, sigma);

    let src = premultiply(image.as_raw());
    let mut tmp = vec![0u8; src.len()];
    let mut out = vec![0u8; src.len()];
    convolve(&src, &mut tmp, w, h, &kernel, Axis::Horizontal);
    convolve(&tmp, &mut out, w, h, &kernel, Axis::Vertical);

    from_premultiplied(w, h, out)
}

/// Sharpen by adding back `percent` of the difference to a blurred copy.
///
/// Channels whose difference is below `threshold` are left untouched.
pub fn unsharp_mask(image: &RgbaImage, sigma: f32, percent: u32, threshold: u8) -> RgbaImage {
    let (w, h) = image.dimensions();
    let blurred = premultiply(gaussian_blur(image, sigma).as_raw());
    let original = premultiply(image.as_raw());

    let mut out = vec![0u8; original.len()];
    for ((dst, o), b) in out
        .chunks_exact_mut(4)
        .zip(original.chunks_exact(4))
        .zip(blurred.chunks_exact(4))
    {
        for c in 0..4 {
            let diff = o[c] as i32 - b[c] as i32;
            dst[c] = if diff.unsigned_abs() >= threshold as u32 {
                (o[c] as i32 + diff * percent as i32 / 100).clamp(0, 255) as u8
            } else {
                o[c]
            };
        }
        // keep the premultiplied invariant
        let a = dst[3];
        for c in dst.iter_mut().take(3) {
            *c = (*c).min(a);
        }
    }

    from_premultiplied(w, h, out)
}

fn gaussian_kernel_q16(radius: u32, sigma: f32) -> Vec<u32> {
    let r = radius as i32;
    let sigma = sigma as f64;
    let denom = 2.0 * sigma * sigma;
    let weights_f: Vec<f64> = (-r..=r)
        .map(|i| {
            let x = i as f64;
            (-x * x / denom).exp()
        })
        .collect();
    let sum: f64 = weights_f.iter().sum();

    let mut weights: Vec<u32> = weights_f
        .iter()
        .map(|wf| ((wf / sum) * 65536.0).round().clamp(0.0, 65536.0) as u32)
        .collect();

    // put rounding drift on the center tap so weights sum to exactly 1.0
    let acc: i64 = weights.iter().map(|&w| w as i64).sum();
    let mid = weights.len() / 2;
    weights[mid] = (weights[mid] as i64 + 65536 - acc).clamp(0, 65536) as u32;
    weights
}

#[derive(Debug, Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

/// One 1-D pass of a Q16 kernel along `axis`, edges clamped.
fn convolve(src: &[u8], dst: &mut [u8], width: u32, height: u32, kernel: &[u32], axis: Axis) {
    let (w, h) = (width as usize, height as usize);
    let radius = kernel.len() / 2;
    let (len, stride) = match axis {
        Axis::Horizontal => (w, 4),
        Axis::Vertical => (h, 4 * w),
    };

    for (i, out) in dst.chunks_exact_mut(4).enumerate() {
        let (x, y) = (i % w, i / w);
        let (pos, line_start) = match axis {
            Axis::Horizontal => (x, 4 * y * w),
            Axis::Vertical => (y, 4 * x),
        };

        let mut acc = [0u64; 4];
        for (k, &weight) in kernel.iter().enumerate() {
            let sample = (pos + k).saturating_sub(radius).min(len - 1);
            let idx = line_start + sample * stride;
            for (a, &v) in acc.iter_mut().zip(&src[idx..idx + 4]) {
                *a += weight as u64 * v as u64;
            }
        }
        for (o, a) in out.iter_mut().zip(acc) {
            *o = ((a + 32768) >> 16).min(255) as u8;
        }
    }
}

fn premultiply(straight: &[u8]) -> Vec<u8> {
    let mut out = straight.to_vec();
    for px in out.chunks_exact_mut(4) {
        let a = px[3] as u32;
        for c in px.iter_mut().take(3) {
            *c = ((*c as u32 * a + 127) / 255) as u8;
        }
    }
    out
}

fn from_premultiplied(width: u32, height: u32, mut data: Vec<u8>) -> RgbaImage {
    for px in data.chunks_exact_mut(4) {
        let a = px[3] as u32;
        if a == 0 {
            px[..3].fill(0);
            continue;
        }
        for c in px.iter_mut().take(3) {
            *c = ((*c as u32 * 255 + a / 2) / a).min(255) as u8;
        }
    }
    // buffer length is width * height * 4 by construction
    RgbaImage::from_raw(width, height, data).unwrap_or_else(|| RgbaImage::new(width, height))
}
