// File: crates/plot-core/tests/paths.rs
// Purpose: Path construction for the data curve, gridlines, and axis frame.

use plot_core::path::{build_data_path, build_frame_path, build_grid_paths};
use plot_core::{AxisScale, DataSeries, Transform};

fn sample_series() -> DataSeries {
    let xs = (0..11).map(|i| 250.0 + 100.0 * i as f64).collect();
    let ys = vec![10.1, 20.2, 10.1, 35.1, 40.2, 45.3, 30.35, 20.4, 10.35, 5.3, 1.0];
    DataSeries::new(xs, ys).expect("sample data is valid")
}

fn sample_transform(series: &DataSeries) -> Transform {
    Transform::new(
        AxisScale::new(series.extent_x(), 72.0, 1000.0),
        AxisScale::new(series.extent_y(), 584.0, 24.0),
    )
}

#[test]
fn data_path_has_one_point_per_sample_in_order() {
    let series = sample_series();
    let transform = sample_transform(&series);
    let path = build_data_path(&series, &transform);

    assert_eq!(path.len(), 11);
    // x is strictly increasing in the input, so device x must be too.
    for pair in path.points.windows(2) {
        assert!(pair[1].0 > pair[0].0, "device order broke: {pair:?}");
    }
    assert_eq!(path.points[0], transform.project(250.0, 10.1));
    assert_eq!(path.points[10], transform.project(1250.0, 1.0));
}

#[test]
fn single_sample_yields_single_point_path() {
    let series = DataSeries::new(vec![3.0], vec![4.0]).expect("valid");
    let transform = sample_transform(&sample_series());
    let path = build_data_path(&series, &transform);
    assert_eq!(path.len(), 1);
}

#[test]
fn grid_paths_one_segment_per_tick() {
    let series = sample_series();
    let transform = sample_transform(&series);
    let x_ticks = transform.x_scale().tick_values(10).expect("x ticks");
    let y_ticks = transform.y_scale().tick_values(6).expect("y ticks");

    let paths = build_grid_paths(&transform, &x_ticks, &y_ticks);
    assert_eq!(paths.len(), 16);
    for p in &paths {
        assert_eq!(p.len(), 2);
    }

    // Vertical gridlines span the full plot height.
    let first = &paths[0];
    assert_eq!(first.points[0].1, 24.0);
    assert_eq!(first.points[1].1, 584.0);
    // First x tick sits on the left plot edge.
    assert!((first.points[0].0 - 72.0).abs() < 1e-3);

    // Horizontal gridlines span the full plot width.
    let last = paths.last().expect("non-empty");
    assert_eq!(last.points[0].0, 72.0);
    assert_eq!(last.points[1].0, 1000.0);
}

#[test]
fn project_round_trips_through_unproject() {
    let series = sample_series();
    let transform = sample_transform(&series);
    let (px, py) = transform.project(650.0, 40.2);
    let (x, y) = transform.unproject(px, py);
    assert!((x - 650.0).abs() < 1e-2, "x came back as {x}");
    assert!((y - 40.2).abs() < 1e-2, "y came back as {y}");
}

#[test]
fn frame_runs_left_edge_then_bottom_edge() {
    let series = sample_series();
    let transform = sample_transform(&series);
    let frame = build_frame_path(&transform);
    assert_eq!(
        frame.points,
        vec![(72.0, 24.0), (72.0, 584.0), (1000.0, 584.0)]
    );
}
