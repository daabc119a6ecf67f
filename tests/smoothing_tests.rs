use approx::assert_relative_eq;
use proptest::prelude::*;
use sheet_chart::core::{SmoothingMethod, apply_smoothing, moving_average};

#[test]
fn moving_average_of_constant_series_is_constant() {
    let smoothed = moving_average(&[7.5; 12], 5);
    assert!(smoothed.iter().all(|value| (*value - 7.5).abs() < 1e-12));
}

#[test]
fn five_point_window_matches_hand_computed_means() {
    let smoothed = apply_smoothing(
        &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        SmoothingMethod::MovingAverage,
        5,
    );
    let expected = [2.0, 2.5, 3.0, 4.0, 4.5, 5.0];
    for (value, expected) in smoothed.iter().zip(expected) {
        assert_relative_eq!(*value, expected, epsilon = 1e-12);
    }
}

proptest! {
    #[test]
    fn smoothing_preserves_length_and_bounds(
        values in prop::collection::vec(-1.0e6f64..1.0e6, 0..80),
        window in 0usize..30
    ) {
        let smoothed = apply_smoothing(&values, SmoothingMethod::MovingAverage, window);
        prop_assert_eq!(smoothed.len(), values.len());
        if let (Some(min), Some(max)) = (
            values.iter().copied().reduce(f64::min),
            values.iter().copied().reduce(f64::max),
        ) {
            for value in &smoothed {
                prop_assert!(*value >= min - 1e-6 && *value <= max + 1e-6);
            }
        }
    }

    #[test]
    fn window_of_one_is_identity(values in prop::collection::vec(-1.0e3f64..1.0e3, 0..40)) {
        prop_assert_eq!(moving_average(&values, 1), values);
    }
}
