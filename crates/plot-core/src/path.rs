// File: crates/plot-core/src/path.rs
// Summary: Device-space path construction for the data curve, gridlines, and axis frame.

use crate::series::DataSeries;
use crate::transform::Transform;

/// Ordered device-space points forming one polyline.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    pub points: Vec<(f32, f32)>,
}

impl Path {
    pub fn with_capacity(n: usize) -> Self {
        Self { points: Vec::with_capacity(n) }
    }

    pub fn push(&mut self, p: (f32, f32)) {
        self.points.push(p);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One device point per sample, in input order. Order is load-bearing:
/// the points form the plotted curve.
pub fn build_data_path(series: &DataSeries, transform: &Transform) -> Path {
    let mut path = Path::with_capacity(series.len());
    for (x, y) in series.points() {
        path.push(transform.project(x, y));
    }
    path
}

/// One two-point path per tick: vertical lines at x ticks, horizontal
/// lines at y ticks, each spanning the plot rectangle. The rectangle is
/// the pixel range of the two scales.
pub fn build_grid_paths(transform: &Transform, x_ticks: &[f64], y_ticks: &[f64]) -> Vec<Path> {
    let (left, right) = transform.x_scale().pixel_range();
    let (bottom, top) = transform.y_scale().pixel_range();

    let mut paths = Vec::with_capacity(x_ticks.len() + y_ticks.len());
    for &t in x_ticks {
        let x = transform.x_scale().to_px(t);
        paths.push(Path { points: vec![(x, top), (x, bottom)] });
    }
    for &t in y_ticks {
        let y = transform.y_scale().to_px(t);
        paths.push(Path { points: vec![(left, y), (right, y)] });
    }
    paths
}

/// Axis frame: one open polyline down the left edge of the plot area and
/// across its bottom edge.
pub fn build_frame_path(transform: &Transform) -> Path {
    let (left, right) = transform.x_scale().pixel_range();
    let (bottom, top) = transform.y_scale().pixel_range();
    Path { points: vec![(left, top), (left, bottom), (right, bottom)] }
}
