//! PNG export: paint to SVG, rasterize with resvg, write atomically.

use std::io::Write;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use log::{info, warn};

use crate::error::{FigureError, Result};
use crate::figure::FigureSpec;
use crate::render::paint;
use crate::render::svg::SvgBackend;

/// Rasterizes composed figures to PNG files.
///
/// Holds the parsed font database so several figures share one system font scan.
pub struct Exporter {
    options: usvg::Options<'static>,
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter {
    pub fn new() -> Self {
        let mut options = usvg::Options::default();
        options.fontdb_mut().load_system_fonts();
        warn_if_fontless(&options.fontdb);
        Self { options }
    }

    /// The figure as an SVG document.
    pub fn render_svg(&self, figure: &FigureSpec) -> Result<String> {
        let mut backend = SvgBackend::new();
        paint(figure, &mut backend)?;
        Ok(backend.finish())
    }

    /// The figure as PNG bytes of `round(size_in × dpi)` pixels.
    pub fn render_png(&self, figure: &FigureSpec, dpi: u32) -> Result<Vec<u8>> {
        if dpi == 0 {
            return Err(FigureError::InvalidParameter(
                "dpi must be positive".to_string(),
            ));
        }
        let svg = self.render_svg(figure)?;
        let (width, height) = figure.pixel_size(dpi);

        let tree = usvg::Tree::from_str(&svg, &self.options)
            .map_err(|e| FigureError::Render(format!("SVG parse failed: {e}")))?;
        let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
            FigureError::Render(format!("cannot allocate a {width}x{height} canvas"))
        })?;
        pixmap.fill(tiny_skia::Color::WHITE);
        let size = tree.size();
        let transform = tiny_skia::Transform::from_scale(
            width as f32 / size.width(),
            height as f32 / size.height(),
        );
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        // The canvas is opaque, so premultiplied and straight RGBA coincide.
        let rgba = pixmap.take();
        let mut png = Vec::new();
        PngEncoder::new(&mut png)
            .write_image(&rgba, width, height, ExtendedColorType::Rgba8)
            .map_err(|e| FigureError::Render(format!("PNG encoding failed: {e}")))?;
        Ok(png)
    }

    /// Render `figure` and write it to `path` in a single attempt.
    ///
    /// Bytes go to a temporary file beside `path` that is renamed into place
    /// only once complete, so a failed export never leaves a partial image at `path`.
    pub fn export(&self, figure: &FigureSpec, path: &Path, dpi: u32) -> Result<()> {
        let png = self.render_png(figure, dpi)?;
        write_atomic(path, &png)?;
        let (w, h) = figure.pixel_size(dpi);
        info!("exported {} ({w}x{h} px at {dpi} dpi)", path.display());
        Ok(())
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| FigureError::io(path, e))?;
    tmp.write_all(bytes).map_err(|e| FigureError::io(path, e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| FigureError::io(path, e))?;
    tmp.persist(path)
        .map_err(|e| FigureError::io(path, e.error))?;
    Ok(())
}

/// resvg drops text without a matching face; returns whether `fonts` is empty.
fn warn_if_fontless(fonts: &usvg::fontdb::Database) -> bool {
    let empty = fonts.is_empty();
    if empty {
        warn!("no system fonts found; exported figures will have no text");
    }
    empty
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_font_database_is_reported() {
        assert!(warn_if_fontless(&usvg::fontdb::Database::new()));
    }
}
