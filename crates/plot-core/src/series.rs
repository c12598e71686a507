// File: crates/plot-core/src/series.rs
// Summary: Validated single-series data model with cached extents.

use crate::error::{Error, Result};
use crate::scale::Extent;

/// Two index-aligned columns of finite samples. Immutable after
/// construction; extents are scanned once and cached.
#[derive(Clone, Debug)]
pub struct DataSeries {
    xs: Vec<f64>,
    ys: Vec<f64>,
    extent_x: Extent,
    extent_y: Extent,
}

impl DataSeries {
    /// Validate and take ownership of the two columns.
    /// Fails when the lengths differ, either column is empty, or any
    /// value is NaN or infinite.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(Error::InvalidInput(format!(
                "column lengths differ: x has {}, y has {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.is_empty() {
            return Err(Error::InvalidInput("series is empty".to_string()));
        }
        check_finite("x", &xs)?;
        check_finite("y", &ys)?;

        let extent_x = Extent::of(&xs);
        let extent_y = Extent::of(&ys);
        Ok(Self { xs, ys, extent_x, extent_y })
    }

    pub fn len(&self) -> usize { self.xs.len() }

    pub fn x(&self, i: usize) -> f64 { self.xs[i] }

    pub fn y(&self, i: usize) -> f64 { self.ys[i] }

    /// Samples in input order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    pub fn extent_x(&self) -> Extent { self.extent_x }

    pub fn extent_y(&self) -> Extent { self.extent_y }
}

fn check_finite(column: &str, values: &[f64]) -> Result<()> {
    for (i, v) in values.iter().enumerate() {
        if !v.is_finite() {
            return Err(Error::InvalidInput(format!(
                "non-finite {column} value at index {i}: {v}"
            )));
        }
    }
    Ok(())
}
