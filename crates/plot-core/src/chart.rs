// File: crates/plot-core/src/chart.rs
// Summary: Chart model, surface configuration, and the render pipeline.

use log::debug;

use crate::error::{Error, Result};
use crate::path::{build_data_path, build_frame_path, build_grid_paths};
use crate::scale::AxisScale;
use crate::series::DataSeries;
use crate::surface::{Align, Surface};
use crate::theme::Theme;
use crate::transform::Transform;
use crate::types::{Insets, Rgba, HEIGHT, WIDTH};

const TICK_FONT_SIZE: f32 = 11.0;
const TITLE_FONT_SIZE: f32 = 14.0;
const LABEL_PAD: f32 = 4.0;
const GRID_STROKE_WIDTH: f32 = 1.0;
const FRAME_STROKE_WIDTH: f32 = 1.5;

/// How the series is drawn inside the plot area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlotStyle {
    Line,
    Scatter,
}

/// Output surface configuration. Every field has a default; `validate`
/// rejects bad values before any scale or surface work happens.
#[derive(Clone, Debug)]
pub struct SurfaceConfig {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub line_color: Rgba,
    pub line_width: f32,
    pub marker_radius: f32,
    /// Gridline/tick count along x. Minimum 2 (the plot edges).
    pub x_gridlines: usize,
    /// Gridline/tick count along y. Minimum 2.
    pub y_gridlines: usize,
    pub style: PlotStyle,
    pub draw_labels: bool,
    pub theme: Theme,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        let theme = Theme::dark();
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            line_color: theme.line_stroke,
            line_width: 2.0,
            marker_radius: 3.0,
            x_gridlines: 10,
            y_gridlines: 6,
            style: PlotStyle::Line,
            draw_labels: true,
            theme,
        }
    }
}

impl SurfaceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(Error::InvalidConfig(format!(
                "surface size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.insets.hsum() as i32 >= self.width || self.insets.vsum() as i32 >= self.height {
            return Err(Error::InvalidConfig(format!(
                "insets {:?} leave no plot area on a {}x{} surface",
                self.insets, self.width, self.height
            )));
        }
        if self.x_gridlines < 2 || self.y_gridlines < 2 {
            return Err(Error::InvalidConfig(format!(
                "gridline counts must be at least 2 per axis, got {}x{}",
                self.x_gridlines, self.y_gridlines
            )));
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "line width must be positive, got {}",
                self.line_width
            )));
        }
        if !self.marker_radius.is_finite() || self.marker_radius <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "marker radius must be positive, got {}",
                self.marker_radius
            )));
        }
        Ok(())
    }
}

/// One validated series plus optional axis titles.
pub struct Chart {
    pub series: DataSeries,
    pub x_title: String,
    pub y_title: String,
}

impl Chart {
    pub fn new(series: DataSeries) -> Self {
        Self { series, x_title: String::new(), y_title: String::new() }
    }

    pub fn with_titles(mut self, x_title: impl Into<String>, y_title: impl Into<String>) -> Self {
        self.x_title = x_title.into();
        self.y_title = y_title.into();
        self
    }

    /// Render onto `surface` and return the encoded artifact bytes.
    ///
    /// Scales are autoscaled from the series extents; the vertical pixel
    /// range is inverted because device y grows downward. All validation
    /// happens before the first drawing call, and surface failures come
    /// back as `Error::Render` with the backend's diagnostic attached.
    pub fn render<S: Surface>(&self, opts: &SurfaceConfig, surface: &mut S) -> Result<Vec<u8>> {
        opts.validate()?;
        if surface.width() != opts.width || surface.height() != opts.height {
            return Err(Error::InvalidConfig(format!(
                "surface is {}x{} but config wants {}x{}",
                surface.width(),
                surface.height(),
                opts.width,
                opts.height
            )));
        }

        // Plot rectangle inside the label margins.
        let left = opts.insets.left as f32;
        let right = (opts.width - opts.insets.right as i32) as f32;
        let top = opts.insets.top as f32;
        let bottom = (opts.height - opts.insets.bottom as i32) as f32;

        let x_scale = AxisScale::new(self.series.extent_x(), left, right);
        let y_scale = AxisScale::new(self.series.extent_y(), bottom, top);
        let transform = Transform::new(x_scale, y_scale);

        let x_ticks = x_scale.tick_values(opts.x_gridlines)?;
        let y_ticks = y_scale.tick_values(opts.y_gridlines)?;

        debug!(
            "render: {} samples into {:.0}x{:.0} plot area, {}x{} gridlines",
            self.series.len(),
            right - left,
            bottom - top,
            x_ticks.len(),
            y_ticks.len()
        );

        surface.clear(opts.theme.background);

        for grid in build_grid_paths(&transform, &x_ticks, &y_ticks) {
            surface.stroke_path(&grid, opts.theme.grid, GRID_STROKE_WIDTH)?;
        }
        surface.stroke_path(&build_frame_path(&transform), opts.theme.axis_line, FRAME_STROKE_WIDTH)?;

        let data = build_data_path(&self.series, &transform);
        // A one-point polyline has nothing to stroke; fall back to markers.
        if opts.style == PlotStyle::Scatter || data.len() < 2 {
            for &p in &data.points {
                surface.fill_circle(p, opts.marker_radius, opts.line_color)?;
            }
        } else {
            surface.stroke_path(&data, opts.line_color, opts.line_width)?;
        }

        if opts.draw_labels {
            self.draw_labels(opts, surface, &transform, &x_ticks, &y_ticks)?;
        }

        surface.finish()
    }

    fn draw_labels<S: Surface>(
        &self,
        opts: &SurfaceConfig,
        surface: &mut S,
        transform: &Transform,
        x_ticks: &[f64],
        y_ticks: &[f64],
    ) -> Result<()> {
        let color = opts.theme.axis_label;
        let (left, right) = transform.x_scale().pixel_range();
        let (bottom, top) = transform.y_scale().pixel_range();

        // Tick labels: centered under the x ticks, right-aligned beside
        // the y ticks.
        let x_label_y = bottom + LABEL_PAD + TICK_FONT_SIZE;
        for &t in x_ticks {
            let x = transform.x_scale().to_px(t);
            surface.draw_text(&format_tick(t), (x, x_label_y), TICK_FONT_SIZE, color, Align::Center)?;
        }
        for &t in y_ticks {
            let y = transform.y_scale().to_px(t) + TICK_FONT_SIZE * 0.35;
            surface.draw_text(
                &format_tick(t),
                (left - LABEL_PAD, y),
                TICK_FONT_SIZE,
                color,
                Align::Right,
            )?;
        }

        if !self.x_title.is_empty() {
            let y = bottom + LABEL_PAD * 2.0 + TICK_FONT_SIZE + TITLE_FONT_SIZE;
            surface.draw_text(
                &self.x_title,
                ((left + right) * 0.5, y),
                TITLE_FONT_SIZE,
                color,
                Align::Center,
            )?;
        }
        if !self.y_title.is_empty() {
            surface.draw_text(
                &self.y_title,
                (LABEL_PAD, top - LABEL_PAD * 2.0),
                TITLE_FONT_SIZE,
                color,
                Align::Left,
            )?;
        }
        Ok(())
    }
}

/// Tick values are labeled with one decimal place.
fn format_tick(value: f64) -> String {
    format!("{value:.1}")
}
