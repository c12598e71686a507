// File: crates/plot-core/src/grid.rs
// Summary: Evenly spaced gridline/tick value generation.

/// `steps` evenly spaced values from `start` to `end` inclusive.
/// Requires `steps >= 2`; both endpoints are emitted exactly.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    debug_assert!(steps >= 2);
    let step = (end - start) / (steps as f64 - 1.0);
    let mut values: Vec<f64> = (0..steps).map(|i| start + step * i as f64).collect();
    values[0] = start;
    values[steps - 1] = end;
    values
}
