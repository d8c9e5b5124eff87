use notecalc::{trend_line, DataPoint, TrendLine};

#[test]
fn empty_input_gives_zero_line() {
    assert_eq!(trend_line(&[]), TrendLine { slope: 0.0, intercept: 0.0 });
}

#[test]
fn exact_fit_through_collinear_points() {
    let points: Vec<DataPoint> = [(0.0, 1.0), (1.0, 3.0), (2.0, 5.0), (3.0, 7.0)]
        .into_iter()
        .map(DataPoint::from)
        .collect();
    let line = trend_line(&points);
    assert!((line.slope - 2.0).abs() < 1e-12);
    assert!((line.intercept - 1.0).abs() < 1e-12);
    assert!((line.at(10.0) - 21.0).abs() < 1e-9);
}

#[test]
fn least_squares_fit() {
    let points = [
        DataPoint::new(1.0, 2.0),
        DataPoint::new(2.0, 3.0),
        DataPoint::new(3.0, 5.0),
    ];
    let line = trend_line(&points);
    // slope = (3*23 - 6*10) / (3*14 - 36) = 9 / 6
    assert!((line.slope - 1.5).abs() < 1e-12);
    // intercept = (10 - 1.5*6) / 3
    assert!((line.intercept - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn vertical_data_has_undefined_slope() {
    let points = [DataPoint::new(2.0, 1.0), DataPoint::new(2.0, 4.0)];
    let line = trend_line(&points);
    assert!(line.slope.is_nan());
    assert!(line.intercept.is_nan());
}

#[test]
fn single_point_has_undefined_slope() {
    let line = trend_line(&[DataPoint::new(1.0, 1.0)]);
    assert!(line.slope.is_nan());
}
