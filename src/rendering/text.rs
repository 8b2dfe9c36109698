use crate::error::RenderError;
use frame_kit::ColorRgba;
use image::RgbaImage;
use resvg::tiny_skia::Pixmap;
use resvg::usvg::{self, fontdb, Transform};
use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;

/// Font settings for one piece of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// CSS font-family list
    pub family: String,
    pub size: f32,
    pub bold: bool,
}

/// Ink bounding box of shaped text relative to its pen position
/// (left edge of the baseline).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl TextMetrics {
    pub fn width_px(&self) -> u32 {
        self.width.ceil().max(1.0) as u32
    }

    pub fn height_px(&self) -> u32 {
        self.height.ceil().max(1.0) as u32
    }
}

/// One text draw inside a layer.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDraw {
    /// Where the ink box's top-left corner lands, in layer pixels
    pub ink_x: f32,
    pub ink_y: f32,
    pub fill: ColorRgba,
    /// Outline color and width in pixels
    pub stroke: Option<(ColorRgba, f32)>,
}

/// Shapes and rasterizes text through usvg/resvg.
///
/// Text is expressed as a tiny SVG document so layout, font fallback and
/// anti-aliasing all come from resvg.
pub struct TextRenderer {
    fontdb: Arc<fontdb::Database>,
}

impl TextRenderer {
    /// Create a renderer with fonts loaded from the provided data
    pub fn with_fonts(fonts: Vec<(String, Vec<u8>)>) -> Self {
        let mut db = fontdb::Database::new();
        for (name, data) in fonts {
            db.load_font_data(data);
            tracing::debug!(font = %name, "Loaded font");
        }
        db.load_system_fonts();
        Self::finish(db)
    }

    /// Create a renderer with fonts from a directory plus system fonts
    pub fn with_fonts_dir(dir: Option<&Path>) -> Self {
        let mut db = fontdb::Database::new();
        if let Some(dir) = dir {
            db.load_fonts_dir(dir);
            tracing::debug!(dir = %dir.display(), faces = db.len(), "Loaded fonts directory");
        }
        db.load_system_fonts();
        Self::finish(db)
    }

    /// Create a renderer with system fonts only
    pub fn new() -> Self {
        Self::with_fonts(Vec::new())
    }

    fn finish(mut db: fontdb::Database) -> Self {
        // Generic families default to Arial/Times; point them at something
        // that is actually installed.
        let has_family = |db: &fontdb::Database, name: &str| {
            db.faces()
                .any(|f| f.families.iter().any(|(n, _)| n.eq_ignore_ascii_case(name)))
        };
        if !has_family(&db, "Arial") {
            let first = db
                .faces()
                .find_map(|f| f.families.first().map(|(name, _)| name.clone()));
            if let Some(family) = first {
                tracing::debug!(family = %family, "Using fallback sans-serif family");
                db.set_sans_serif_family(family);
            }
        }

        tracing::info!(font_count = db.len(), "Loaded fonts for text rendering");

        Self {
            fontdb: Arc::new(db),
        }
    }

    pub fn font_count(&self) -> usize {
        self.fontdb.len()
    }

    /// Ink box of `text` in `style`, or `None` when no installed font can
    /// shape it.
    pub fn measure(&self, text: &str, style: &TextStyle) -> Option<TextMetrics> {
        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1">"#
        );
        push_text(&mut svg, text, style, 0.0, 0.0, ColorRgba::BLACK, None);
        svg.push_str("</svg>");

        let tree = self.parse(&svg).ok()?;
        if !tree.root().has_children() {
            return None;
        }
        let bbox = tree.root().abs_bounding_box();
        if bbox.width() <= 0.0 || bbox.height() <= 0.0 {
            return None;
        }
        Some(TextMetrics {
            x: bbox.x(),
            y: bbox.y(),
            width: bbox.width(),
            height: bbox.height(),
        })
    }

    /// Rasterize one or more draws of the same text onto a transparent
    /// `width` x `height` layer.
    pub fn render_layer(
        &self,
        text: &str,
        style: &TextStyle,
        metrics: &TextMetrics,
        draws: &[TextDraw],
        width: u32,
        height: u32,
    ) -> Result<RgbaImage, RenderError> {
        let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::PixmapAllocation)?;

        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );
        for draw in draws {
            push_text(
                &mut svg,
                text,
                style,
                draw.ink_x - metrics.x,
                draw.ink_y - metrics.y,
                draw.fill,
                draw.stroke,
            );
        }
        svg.push_str("</svg>");

        let tree = self.parse(&svg)?;
        resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

        Ok(pixmap_to_image(&pixmap))
    }

    fn parse(&self, svg: &str) -> Result<usvg::Tree, RenderError> {
        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        usvg::Tree::from_str(svg, &options).map_err(|e| RenderError::SvgParse(e.to_string()))
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn push_text(
    svg: &mut String,
    text: &str,
    style: &TextStyle,
    x: f32,
    y: f32,
    fill: ColorRgba,
    stroke: Option<(ColorRgba, f32)>,
) {
    let _ = write!(
        svg,
        r#"<text x="{x:.2}" y="{y:.2}" font-family="{}" font-size="{:.2}" font-weight="{}" fill="{}" fill-opacity="{:.4}""#,
        escape_xml(&style.family),
        style.size,
        if style.bold { "bold" } else { "normal" },
        fill.to_hex(),
        fill.a as f32 / 255.0,
    );
    if let Some((color, width)) = stroke {
        let _ = write!(
            svg,
            r#" stroke="{}" stroke-opacity="{:.4}" stroke-width="{width:.2}" stroke-linejoin="round""#,
            color.to_hex(),
            color.a as f32 / 255.0,
        );
    }
    let _ = write!(
        svg,
        r#" xml:space="preserve">{}</text>"#,
        escape_xml(text)
    );
}

/// Escape text for use in XML content and attribute values
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if c.is_control() => out.push(' '),
            c => out.push(c),
        }
    }
    out
}

/// Convert a premultiplied pixmap into a straight-alpha image.
pub fn pixmap_to_image(pixmap: &Pixmap) -> RgbaImage {
    let mut image = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        dst.0 = [c.red(), c.green(), c.blue(), c.alpha()];
    }
    image
}
