// File: crates/plot-core/tests/series.rs
// Purpose: Validate series construction rules and cached extents.

use plot_core::{DataSeries, Error};

#[test]
fn rejects_mismatched_lengths() {
    let err = DataSeries::new(vec![1.0, 2.0, 3.0], vec![1.0, 2.0]).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)), "got {err:?}");
}

#[test]
fn rejects_empty_columns() {
    let err = DataSeries::new(vec![], vec![]).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)), "got {err:?}");
}

#[test]
fn rejects_non_finite_values() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = DataSeries::new(vec![0.0, bad], vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)), "x={bad} got {err:?}");

        let err = DataSeries::new(vec![0.0, 1.0], vec![bad, 2.0]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)), "y={bad} got {err:?}");
    }
}

#[test]
fn error_names_offending_index() {
    let err = DataSeries::new(vec![0.0, 1.0], vec![1.0, f64::NAN]).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("y") && msg.contains("index 1"), "got {msg}");
}

#[test]
fn single_sample_is_valid() {
    let s = DataSeries::new(vec![5.0], vec![-3.0]).expect("one sample is enough");
    assert_eq!(s.len(), 1);
    assert_eq!(s.extent_x().min, 5.0);
    assert_eq!(s.extent_x().max, 5.0);
}

#[test]
fn extents_cover_data() {
    let s = DataSeries::new(vec![3.0, -1.0, 2.0], vec![10.0, 4.0, 7.5]).expect("valid series");
    assert_eq!(s.extent_x().min, -1.0);
    assert_eq!(s.extent_x().max, 3.0);
    assert_eq!(s.extent_y().min, 4.0);
    assert_eq!(s.extent_y().max, 10.0);

    assert_eq!(s.len(), 3);
    assert_eq!(s.x(1), -1.0);
    assert_eq!(s.y(2), 7.5);
    let collected: Vec<_> = s.points().collect();
    assert_eq!(collected, vec![(3.0, 10.0), (-1.0, 4.0), (2.0, 7.5)]);
}
