use crate::core::ScaleKind;
use crate::error::{ChartError, ChartResult};

/// Upper bound on ticks an explicit step may produce before it is rejected.
pub const MAX_TICKS: usize = 1000;

pub const AXIS_X_TARGET_SPACING_PX: f64 = 90.0;
pub const AXIS_Y_TARGET_SPACING_PX: f64 = 60.0;

const NICE_MULTIPLES: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];
const INTEGER_MULTIPLES: [f64; 4] = [1.0, 2.0, 5.0, 10.0];

/// Number of ticks an axis of `axis_span_px` can carry at the target spacing.
#[must_use]
pub fn tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min_ticks, max_ticks)
}

/// Step used by `nice_ticks` for this range and tick budget.
#[must_use]
pub fn nice_step(start: f64, end: f64, target_count: usize) -> f64 {
    step_from_multiples(start, end, target_count, &NICE_MULTIPLES)
}

/// Round-number ticks (1, 2, 2.5, 5 × 10ⁿ) covering `[start, end]`.
#[must_use]
pub fn nice_ticks(start: f64, end: f64, target_count: usize) -> Vec<f64> {
    let step = nice_step(start, end, target_count);
    ticks_for_step(start, end, step)
}

/// Like `nice_ticks` but never steps by less than one.
#[must_use]
pub fn integer_ticks(start: f64, end: f64, target_count: usize) -> Vec<f64> {
    let step = step_from_multiples(start, end, target_count, &INTEGER_MULTIPLES).max(1.0);
    ticks_for_step(start, end, step.round())
}

/// Ticks at every multiple of `step` inside `[start, end]`.
pub fn multiple_ticks(start: f64, end: f64, step: f64) -> ChartResult<Vec<f64>> {
    if !step.is_finite() || step <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "tick step must be finite and > 0, got {step}"
        )));
    }
    let (low, high) = ordered(start, end);
    let count = ((high - low) / step).floor() + 1.0;
    if !count.is_finite() || count > MAX_TICKS as f64 {
        return Err(ChartError::InvalidData(format!(
            "tick step {step} would produce more than {MAX_TICKS} ticks"
        )));
    }
    Ok(ticks_for_step(start, end, step))
}

/// Decade ticks (10ⁿ) inside `[start, end]`; falls back to linear nice ticks
/// when the range holds fewer than two decades.
#[must_use]
pub fn log_ticks(start: f64, end: f64, target_count: usize) -> Vec<f64> {
    let (low, high) = ordered(start, end);
    if low <= 0.0 || !high.is_finite() {
        return Vec::new();
    }
    let first = low.log10().floor() as i32;
    let last = high.log10().ceil() as i32;
    let decades: Vec<f64> = (first..=last)
        .map(|exponent| 10f64.powi(exponent))
        .filter(|value| *value >= low * (1.0 - 1e-9) && *value <= high * (1.0 + 1e-9))
        .collect();
    if decades.len() >= 2 {
        decades
    } else {
        nice_ticks(low, high, target_count)
    }
}

/// Axis range for data spanning `[min, max]`, padded by `margin` of the span
/// on each side (in log space for log scales).
#[must_use]
pub fn auto_range(min: f64, max: f64, kind: ScaleKind, margin: f64) -> (f64, f64) {
    let (low, high) = ordered(min, max);
    match kind {
        ScaleKind::Linear => {
            if low == high {
                let pad = if low == 0.0 { 1.0 } else { low.abs() * margin.max(0.05) };
                (low - pad, high + pad)
            } else {
                let pad = (high - low) * margin;
                (low - pad, high + pad)
            }
        }
        ScaleKind::Log => {
            let (log_low, log_high) = (low.log10(), high.log10());
            let pad = if log_low == log_high {
                0.5
            } else {
                (log_high - log_low) * margin
            };
            (10f64.powf(log_low - pad), 10f64.powf(log_high + pad))
        }
    }
}

/// Minimum and maximum of the finite values, if any.
pub fn data_bounds(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|value| value.is_finite())
        .fold(None, |bounds, value| match bounds {
            None => Some((value, value)),
            Some((low, high)) => Some((low.min(value), high.max(value))),
        })
}

fn ordered(start: f64, end: f64) -> (f64, f64) {
    if start <= end { (start, end) } else { (end, start) }
}

fn step_from_multiples(start: f64, end: f64, target_count: usize, multiples: &[f64]) -> f64 {
    let (low, high) = ordered(start, end);
    let span = high - low;
    if !span.is_finite() || span <= 0.0 {
        return 1.0;
    }
    let intervals = target_count.saturating_sub(1).max(1) as f64;
    let raw = span / intervals;
    let magnitude = 10f64.powf(raw.log10().floor());
    multiples
        .iter()
        .map(|multiple| multiple * magnitude)
        .find(|step| *step >= raw * (1.0 - 1e-9))
        .unwrap_or(10.0 * magnitude)
}

fn ticks_for_step(start: f64, end: f64, step: f64) -> Vec<f64> {
    let (low, high) = ordered(start, end);
    if !step.is_finite() || step <= 0.0 || !low.is_finite() || !high.is_finite() {
        return Vec::new();
    }
    let tolerance = step * 1e-9;
    let first = ((low - tolerance) / step).ceil() as i64;
    let last = ((high + tolerance) / step).floor() as i64;
    (first..=last)
        .map(|index| {
            let value = index as f64 * step;
            if value == 0.0 { 0.0 } else { value }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        auto_range, integer_ticks, log_ticks, multiple_ticks, nice_ticks, tick_target_count,
    };
    use crate::core::ScaleKind;

    #[test]
    fn nice_ticks_pick_round_steps() {
        assert_eq!(nice_ticks(0.0, 10.0, 6), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(nice_ticks(-0.3, 1.2, 4), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn integer_ticks_never_step_below_one() {
        assert_eq!(integer_ticks(0.2, 3.8, 20), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn multiple_ticks_reject_bad_or_dense_steps() {
        assert!(multiple_ticks(0.0, 10.0, 0.0).is_err());
        assert!(multiple_ticks(0.0, 10.0, f64::NAN).is_err());
        assert!(multiple_ticks(0.0, 10_000.0, 1.0).is_err());
        assert_eq!(
            multiple_ticks(0.0, 10.0, 2.5).expect("valid step"),
            vec![0.0, 2.5, 5.0, 7.5, 10.0]
        );
    }

    #[test]
    fn log_ticks_use_decades() {
        assert_eq!(log_ticks(0.5, 2_000.0, 5), vec![1.0, 10.0, 100.0, 1000.0]);
    }

    #[test]
    fn auto_range_pads_span_and_degenerate_ranges() {
        let (low, high) = auto_range(0.0, 10.0, ScaleKind::Linear, 0.05);
        assert!((low + 0.5).abs() < 1e-12 && (high - 10.5).abs() < 1e-12);
        let (low, high) = auto_range(0.0, 0.0, ScaleKind::Linear, 0.05);
        assert!(low < 0.0 && high > 0.0);
    }

    #[test]
    fn target_count_is_clamped() {
        assert_eq!(tick_target_count(600.0, 60.0, 2, 8), 8);
        assert_eq!(tick_target_count(0.0, 60.0, 2, 8), 2);
        assert_eq!(tick_target_count(180.0, 60.0, 2, 8), 4);
    }
}
