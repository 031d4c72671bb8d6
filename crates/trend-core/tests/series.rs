// File: crates/trend-core/tests/series.rs
// Purpose: Series construction, category labels and indicator-derived lines.

use trend_core::indicator::compute_all;
use trend_core::{Indicator, MeanIndicator, Series, TrendError, TrendIndicator};

fn years() -> Vec<String> {
    (2010..=2014).map(|y| y.to_string()).collect()
}

#[test]
fn categories_must_match_values() {
    let err = Series::with_categories("Days", years(), vec![1.0, 2.0]).unwrap_err();
    assert_eq!(err, TrendError::LengthMismatch { expected: 5, got: 2 });
}

#[test]
fn category_falls_back_to_index() {
    let s = Series::new("Plain", vec![1.0, 2.0, 3.0]);
    assert_eq!(s.category(2), "2");

    let s = Series::with_categories("Days", years(), vec![1.0, 2.0, 3.0, 4.0, 5.0]).expect("series");
    assert_eq!(s.category(0), "2010");
    let pts: Vec<_> = s.points().collect();
    assert_eq!(pts[4], ("2014".to_string(), 5.0));
}

#[test]
fn series_statistics() {
    let s = Series::new("Linear", vec![50.0, 60.0, 70.0]);
    assert_eq!(s.total(), 180.0);
    assert_eq!(s.average().expect("avg"), 60.0);
    assert_eq!(s.slope().expect("slope"), 10.0);
    assert_eq!(s.fitted().expect("fitted"), vec![50.0, 60.0, 70.0]);
    assert_eq!(s.trend().expect("trend").origin, 50.0);
}

#[test]
fn trend_indicator_keeps_categories() {
    let s = Series::with_categories("Days", years(), vec![10.0, 20.0, 30.0, 20.0, 40.0]).expect("series");
    let t = TrendIndicator.compute(&s).expect("trend");
    assert_eq!(t.label, "Days (trend)");
    assert_eq!(t.categories, s.categories);
    assert_eq!(t.len(), s.len());
    assert_eq!(t.values[0], 10.0);
}

#[test]
fn mean_indicator_is_flat() {
    let s = Series::new("Rain", vec![1.0, 2.0, 6.0]);
    let m = MeanIndicator.compute(&s).expect("mean");
    assert_eq!(m.values, vec![3.0, 3.0, 3.0]);
    assert_eq!(m.label, "Rain (mean)");
}

#[test]
fn indicators_surface_degenerate_input() {
    let one = Series::new("One", vec![7.0]);
    assert_eq!(
        TrendIndicator.compute(&one).unwrap_err(),
        TrendError::InsufficientData { required: 2, got: 1 }
    );
    let empty = Series::new("Empty", Vec::new());
    assert!(empty.is_empty());
    assert_eq!(MeanIndicator.compute(&empty).unwrap_err(), TrendError::EmptyData);

    let both: [&dyn Indicator; 2] = [&TrendIndicator, &MeanIndicator];
    assert!(compute_all(&both, &one).is_err());
    let ok = compute_all(&both, &Series::new("Two", vec![1.0, 3.0])).expect("both");
    assert_eq!(ok[0].values, vec![1.0, 3.0]);
    assert_eq!(ok[1].values, vec![2.0, 2.0]);
}
