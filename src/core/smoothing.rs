use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmoothingMethod {
    #[default]
    None,
    MovingAverage,
}

/// Applies `method` with `window`; a window of 0 behaves like 1.
#[must_use]
pub fn apply_smoothing(values: &[f64], method: SmoothingMethod, window: usize) -> Vec<f64> {
    match method {
        SmoothingMethod::None => values.to_vec(),
        SmoothingMethod::MovingAverage => moving_average(values, window),
    }
}

/// Centred rolling mean. Windows at the edges shrink to the neighbours that
/// exist, so the output keeps the input length. Non-finite values (gaps) are
/// left out of each mean; a window holding only gaps stays a gap.
///
/// For window `w` the mean at index `i` covers
/// `i + (w-1)/2 + 1 - w ..= i + (w-1)/2`, clamped to the slice. Even windows
/// therefore lean one element towards the past.
#[must_use]
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    if window == 1 {
        return values.to_vec();
    }

    let ahead = (window - 1) / 2;
    (0..values.len())
        .map(|index| {
            let end = (index + ahead + 1).min(values.len());
            let start = (index + ahead + 1).saturating_sub(window);
            let (sum, count) = values[start..end]
                .iter()
                .filter(|value| value.is_finite())
                .fold((0.0_f64, 0usize), |(sum, count), value| (sum + value, count + 1));
            if count == 0 { f64::NAN } else { sum / count as f64 }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{SmoothingMethod, apply_smoothing, moving_average};

    #[test]
    fn window_one_and_zero_are_identity() {
        let values = [3.0, 1.0, 4.0, 1.0, 5.0];
        assert_eq!(moving_average(&values, 1), values);
        assert_eq!(moving_average(&values, 0), values);
        assert_eq!(apply_smoothing(&values, SmoothingMethod::None, 9), values);
    }

    #[test]
    fn centred_window_shrinks_at_edges() {
        assert_eq!(
            moving_average(&[1.0, 2.0, 3.0, 4.0, 5.0], 3),
            vec![1.5, 2.0, 3.0, 4.0, 4.5]
        );
    }

    #[test]
    fn even_window_leans_backwards() {
        assert_eq!(moving_average(&[2.0, 4.0, 6.0], 2), vec![2.0, 3.0, 5.0]);
    }

    #[test]
    fn window_larger_than_input_averages_available_values() {
        assert_eq!(moving_average(&[1.0, 3.0], 25), vec![2.0, 2.0]);
    }

    #[test]
    fn gaps_are_skipped_inside_the_window() {
        let smoothed = moving_average(&[1.0, f64::NAN, 3.0], 3);
        assert_eq!(smoothed, vec![1.0, 2.0, 3.0]);
        assert!(moving_average(&[f64::NAN], 3)[0].is_nan());
    }
}
