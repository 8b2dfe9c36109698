use crate::error::RenderError;
use image::RgbaImage;
use std::io::Cursor;

/// Encode an RGBA image as an 8-bit RGBA PNG
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(image.as_raw())
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Decode image bytes in any supported format into RGBA.
///
/// `which` names the image in error messages ("main", "logo").
pub fn decode_image(bytes: &[u8], which: &'static str) -> Result<RgbaImage, RenderError> {
    let decoded = image::load_from_memory(bytes).map_err(|e| RenderError::Decode {
        which,
        message: e.to_string(),
    })?;
    let rgba = decoded.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(RenderError::EmptyImage { which });
    }
    Ok(rgba)
}
