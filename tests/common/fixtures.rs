//! Test fixtures: synthesized images and request bodies.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;

pub const RED: [u8; 4] = [255, 0, 0, 255];
pub const BLUE: [u8; 4] = [0, 0, 255, 255];
pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

/// Solid color PNG
pub fn png_bytes(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba(color));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .expect("Failed to encode PNG fixture");
    buf.into_inner()
}

/// Solid color JPEG (JPEG has no alpha channel)
pub fn jpeg_bytes(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb(color));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Jpeg)
        .expect("Failed to encode JPEG fixture");
    buf.into_inner()
}

pub fn b64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Blue 2000x1000 JPEG main image and red 300x300 PNG logo
pub fn brand_pair() -> (Vec<u8>, Vec<u8>) {
    (jpeg_bytes(2000, 1000, [0, 0, 255]), png_bytes(300, 300, RED))
}

/// JSON body for /api/compose with inline images
pub fn compose_body(
    main: &[u8],
    logo: &[u8],
    platform: &str,
    content_type: &str,
    overlay_text: Option<&str>,
) -> String {
    serde_json::json!({
        "main_image": b64(main),
        "logo_image": b64(logo),
        "platform": platform,
        "content_type": content_type,
        "overlay_text": overlay_text,
    })
    .to_string()
}
