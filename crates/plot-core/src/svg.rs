// File: crates/plot-core/src/svg.rs
// Summary: Vector Surface implementation emitting standalone SVG.

use crate::error::Result;
use crate::path::Path;
use crate::surface::{Align, Surface};
use crate::types::Rgba;

/// Dependency-free vector backend. Elements are accumulated as they are
/// drawn; `finish` wraps them in an `<svg>` document.
pub struct SvgSurface {
    width: i32,
    height: i32,
    body: String,
}

impl SvgSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, body: String::new() }
    }
}

impl Surface for SvgSurface {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn clear(&mut self, color: Rgba) {
        self.body.clear();
        self.body.push_str(&format!(
            "  <rect width=\"{}\" height=\"{}\" fill=\"{}\"{}/>\n",
            self.width,
            self.height,
            hex(color),
            opacity_attr("fill-opacity", color),
        ));
    }

    fn stroke_path(&mut self, path: &Path, color: Rgba, width: f32) -> Result<()> {
        if path.len() < 2 {
            return Ok(());
        }
        let mut points = String::with_capacity(path.len() * 12);
        for &(x, y) in &path.points {
            if !points.is_empty() {
                points.push(' ');
            }
            points.push_str(&format!("{x:.2},{y:.2}"));
        }
        self.body.push_str(&format!(
            "  <polyline points=\"{}\" fill=\"none\" stroke=\"{}\"{} stroke-width=\"{:.2}\"/>\n",
            points,
            hex(color),
            opacity_attr("stroke-opacity", color),
            width,
        ));
        Ok(())
    }

    fn fill_circle(&mut self, center: (f32, f32), radius: f32, color: Rgba) -> Result<()> {
        self.body.push_str(&format!(
            "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\"{}/>\n",
            center.0,
            center.1,
            radius,
            hex(color),
            opacity_attr("fill-opacity", color),
        ));
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
        let anchor = match align {
            Align::Left => "start",
            Align::Center => "middle",
            Align::Right => "end",
        };
        self.body.push_str(&format!(
            "  <text x=\"{:.2}\" y=\"{:.2}\" font-family=\"sans-serif\" font-size=\"{:.1}\" \
             fill=\"{}\" text-anchor=\"{}\">{}</text>\n",
            pos.0,
            pos.1,
            size,
            hex(color),
            anchor,
            escape(text),
        ));
        Ok(())
    }

    fn finish(&mut self) -> Result<Vec<u8>> {
        let doc = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
             viewBox=\"0 0 {} {}\">\n{}</svg>\n",
            self.width, self.height, self.width, self.height, self.body,
        );
        Ok(doc.into_bytes())
    }
}

fn hex(c: Rgba) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn opacity_attr(name: &str, c: Rgba) -> String {
    if c.a == 255 {
        String::new()
    } else {
        format!(" {}=\"{:.3}\"", name, c.a as f32 / 255.0)
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
