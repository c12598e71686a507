// File: crates/plot-render-skia/src/lib.rs
// Summary: Skia CPU raster Surface implementation with PNG output helpers.

use log::debug;
use skia_safe as skia;

use plot_core::{Align, Chart, Error, Path, Result, Rgba, Surface, SurfaceConfig};

/// Raster backend over a Skia CPU surface. Drawing accumulates on the
/// in-memory surface; `finish` snapshots and PNG-encodes it, so a failed
/// render never exposes partial output.
pub struct SkiaSurface {
    surface: skia::Surface,
}

impl SkiaSurface {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidConfig(format!(
                "surface size must be positive, got {width}x{height}"
            )));
        }
        let surface = skia::surfaces::raster_n32_premul((width, height)).ok_or_else(|| {
            Error::Render(format!("failed to create {width}x{height} raster surface"))
        })?;
        Ok(Self { surface })
    }

    /// Surface sized to match `opts`.
    pub fn for_config(opts: &SurfaceConfig) -> Result<Self> {
        Self::new(opts.width, opts.height)
    }
}

impl Surface for SkiaSurface {
    fn width(&self) -> i32 {
        self.surface.width()
    }

    fn height(&self) -> i32 {
        self.surface.height()
    }

    fn clear(&mut self, color: Rgba) {
        self.surface.canvas().clear(to_skia(color));
    }

    fn stroke_path(&mut self, path: &Path, color: Rgba, width: f32) -> Result<()> {
        if path.len() < 2 {
            return Ok(());
        }
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(width);
        paint.set_color(to_skia(color));

        self.surface.canvas().draw_path(&to_skia_path(path), &paint);
        Ok(())
    }

    fn fill_circle(&mut self, center: (f32, f32), radius: f32, color: Rgba) -> Result<()> {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(to_skia(color));

        self.surface.canvas().draw_circle(center, radius, &paint);
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        pos: (f32, f32),
        size: f32,
        color: Rgba,
        align: Align,
    ) -> Result<()> {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(to_skia(color));

        let mut font = skia::Font::default();
        font.set_size(size);

        let (advance, _bounds) = font.measure_str(text, Some(&paint));
        let x = match align {
            Align::Left => pos.0,
            Align::Center => pos.0 - advance * 0.5,
            Align::Right => pos.0 - advance,
        };
        self.surface.canvas().draw_str(text, (x, pos.1), &font, &paint);
        Ok(())
    }

    fn finish(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| Error::Render("PNG encode failed".to_string()))?;
        debug!("encoded {} byte PNG", data.as_bytes().len());
        Ok(data.as_bytes().to_vec())
    }
}

/// Render `chart` on a fresh raster surface and return PNG bytes.
pub fn render_png_bytes(chart: &Chart, opts: &SurfaceConfig) -> Result<Vec<u8>> {
    let mut surface = SkiaSurface::for_config(opts)?;
    chart.render(opts, &mut surface)
}

/// Render `chart` to a PNG file. The encoded bytes land in a sibling
/// temp file first and are renamed into place, so a failure leaves no
/// half-written artifact at `path`.
pub fn render_png_file(
    chart: &Chart,
    opts: &SurfaceConfig,
    path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_png_bytes(chart, opts)?;
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::Render(format!("create dir for {}: {e}", path.display())))?;
    }
    let tmp = path.with_extension("png.partial");
    std::fs::write(&tmp, &bytes)
        .map_err(|e| Error::Render(format!("write {}: {e}", tmp.display())))?;
    std::fs::rename(&tmp, path)
        .map_err(|e| Error::Render(format!("rename into {}: {e}", path.display())))?;
    Ok(())
}

fn to_skia(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_skia_path(path: &Path) -> skia::Path {
    let mut out = skia::Path::new();
    let first = path.points[0];
    out.move_to(first);
    for &p in path.points.iter().skip(1) {
        out.line_to(p);
    }
    out
}
