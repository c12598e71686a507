// File: crates/plot-core/src/transform.rs
// Summary: Composed 2D data-to-device transform over two axis scales.

use crate::scale::AxisScale;

/// Pure composition of an x and a y scale. No state of its own and no
/// error paths; invalid data was rejected at series construction.
#[derive(Clone, Copy, Debug)]
pub struct Transform {
    x: AxisScale,
    y: AxisScale,
}

impl Transform {
    pub fn new(x: AxisScale, y: AxisScale) -> Self {
        Self { x, y }
    }

    pub fn x_scale(&self) -> &AxisScale {
        &self.x
    }

    pub fn y_scale(&self) -> &AxisScale {
        &self.y
    }

    /// Map a data point into device space.
    #[inline]
    pub fn project(&self, x: f64, y: f64) -> (f32, f32) {
        (self.x.to_px(x), self.y.to_px(y))
    }

    /// Map a device point back into data space.
    #[inline]
    pub fn unproject(&self, px: f32, py: f32) -> (f64, f64) {
        (self.x.from_px(px), self.y.from_px(py))
    }
}
