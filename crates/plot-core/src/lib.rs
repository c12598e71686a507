// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and rendering.

pub mod chart;
pub mod series;
pub mod scale;
pub mod transform;
pub mod path;
pub mod grid;
pub mod surface;
pub mod svg;
pub mod types;
pub mod theme;
pub mod error;

pub use chart::{Chart, PlotStyle, SurfaceConfig};
pub use series::DataSeries;
pub use scale::{AxisScale, Extent};
pub use transform::Transform;
pub use path::Path;
pub use surface::{Align, Surface};
pub use svg::SvgSurface;
pub use types::{Insets, Rgba};
pub use theme::Theme;
pub use error::{Error, Result};
