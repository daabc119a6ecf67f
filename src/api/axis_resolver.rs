use tracing::{debug, warn};

use crate::core::ticks::{integer_ticks, log_ticks, multiple_ticks, tick_target_count};
use crate::core::{
    AxisScale, Categories, ScaleKind, ValueFormat, auto_range, data_bounds,
    format_tick_value, group_category_labels, nice_ticks,
};
use crate::error::ChartResult;

use super::AxisConfig;

const AUTO_MARGIN: f64 = 0.05;
const MIN_TICKS: usize = 2;
const MAX_AUTO_TICKS: usize = 12;

/// One tick on a resolved axis. `label` is `None` when labels are hidden.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: Option<String>,
}

/// Final scale and ticks of one axis, as drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAxis {
    pub scale: AxisScale,
    pub major_ticks: Vec<AxisTick>,
    pub minor_ticks: Vec<f64>,
    pub categorical: bool,
}

impl ResolvedAxis {
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        self.scale.domain()
    }

    #[must_use]
    pub fn kind(&self) -> ScaleKind {
        self.scale.kind()
    }

    pub fn tick_labels(&self) -> impl Iterator<Item = &str> {
        self.major_ticks
            .iter()
            .filter_map(|tick| tick.label.as_deref())
    }

    #[must_use]
    pub fn tick_positions(&self) -> Vec<f64> {
        self.major_ticks.iter().map(|tick| tick.position).collect()
    }
}

/// Scale kind and domain for `values` under `config`.
///
/// Recovers from unusable settings instead of failing: a log scale without
/// positive data or with non-positive limits becomes linear, and limits that
/// collapse the range fall back to the automatic range.
pub(super) fn resolve_domain(
    config: &AxisConfig,
    values: &[f64],
    axis: &'static str,
) -> (ScaleKind, (f64, f64)) {
    let mut kind = config.scale;
    if kind == ScaleKind::Log {
        let positive = values.iter().any(|value| value.is_finite() && *value > 0.0);
        let bad_limit = [config.min, config.max]
            .iter()
            .flatten()
            .any(|limit| *limit <= 0.0);
        if !positive || bad_limit {
            warn!(axis, positive, bad_limit, "log scale unusable; falling back to linear");
            kind = ScaleKind::Linear;
        }
    }

    let bounds = match kind {
        ScaleKind::Log => data_bounds(values.iter().copied().filter(|value| *value > 0.0)),
        ScaleKind::Linear => data_bounds(values.iter().copied()),
    };
    let auto = match (bounds, kind) {
        (Some((low, high)), _) => auto_range(low, high, kind, AUTO_MARGIN),
        (None, ScaleKind::Linear) => (0.0, 1.0),
        (None, ScaleKind::Log) => (1.0, 10.0),
    };

    let low = config.min.filter(|value| value.is_finite()).unwrap_or(auto.0);
    let high = config.max.filter(|value| value.is_finite()).unwrap_or(auto.1);
    if low == high {
        warn!(axis, low, high, "axis limits collapse the range; using automatic range");
        return (kind, auto);
    }
    (kind, (low, high))
}

/// Ticks of a category axis. Tick steps never apply here.
pub(super) fn resolve_categorical_axis(
    config: &AxisConfig,
    categories: &Categories,
    domain: (f64, f64),
    pixels: (f64, f64),
) -> ChartResult<ResolvedAxis> {
    let scale = AxisScale::new(ScaleKind::Linear, domain, pixels)?;
    let (positions, labels, minor_ticks) = if config.grouped_categorical {
        let grouped = group_category_labels(categories.labels());
        (
            grouped.major_positions,
            grouped.major_labels,
            grouped.minor_positions,
        )
    } else {
        (
            (0..categories.len()).map(|index| index as f64).collect(),
            categories.labels().to_vec(),
            Vec::new(),
        )
    };

    let major_ticks = positions
        .into_iter()
        .zip(labels)
        .filter(|(position, _)| scale.contains(*position))
        .map(|(position, label)| AxisTick {
            position,
            label: (!config.hide_labels && !label.is_empty()).then_some(label),
        })
        .collect();
    let minor_ticks = minor_ticks
        .into_iter()
        .filter(|position| scale.contains(*position))
        .collect();

    Ok(ResolvedAxis {
        scale,
        major_ticks,
        minor_ticks,
        categorical: true,
    })
}

/// Ticks of a numeric axis: explicit step, then integer, log or round-number
/// locators.
pub(super) fn resolve_numeric_axis(
    config: &AxisConfig,
    kind: ScaleKind,
    domain: (f64, f64),
    pixels: (f64, f64),
    target_spacing_px: f64,
    axis: &'static str,
) -> ChartResult<ResolvedAxis> {
    let scale = AxisScale::new(kind, domain, pixels)?;
    let (low, high) = if domain.0 <= domain.1 {
        domain
    } else {
        (domain.1, domain.0)
    };
    let target = tick_target_count(
        (pixels.1 - pixels.0).abs(),
        target_spacing_px,
        MIN_TICKS,
        MAX_AUTO_TICKS,
    );

    let stepped = config.tick_step.and_then(|step| match multiple_ticks(low, high, step) {
        Ok(ticks) => Some(ticks),
        Err(err) => {
            warn!(axis, step, error = %err, "tick step rejected; using automatic ticks");
            None
        }
    });
    let values = stepped.unwrap_or_else(|| match (config.format, kind) {
        (_, ScaleKind::Log) => log_ticks(low, high, target),
        (ValueFormat::Integer, ScaleKind::Linear) => integer_ticks(low, high, target),
        _ => nice_ticks(low, high, target),
    });
    let values: Vec<f64> = values
        .into_iter()
        .filter(|value| scale.contains(*value))
        .collect();

    let linear_step = match values.as_slice() {
        [first, second, ..] => (second - first).abs(),
        _ => config.tick_step.unwrap_or(0.0),
    };
    let major_ticks = values
        .iter()
        .map(|&position| {
            let step = match kind {
                ScaleKind::Log => position.abs(),
                ScaleKind::Linear => linear_step,
            };
            AxisTick {
                position,
                label: (!config.hide_labels)
                    .then(|| format_tick_value(position, config.format, step)),
            }
        })
        .collect::<Vec<_>>();

    debug!(axis, ?kind, low, high, ticks = major_ticks.len(), "axis resolved");
    Ok(ResolvedAxis {
        scale,
        major_ticks,
        minor_ticks: Vec::new(),
        categorical: false,
    })
}

#[cfg(test)]
mod tests {
    use super::{resolve_categorical_axis, resolve_domain, resolve_numeric_axis};
    use crate::api::AxisConfig;
    use crate::core::{Categories, ScaleKind, ValueFormat};
    use crate::data::CellValue;
    use approx::assert_relative_eq;

    #[test]
    fn auto_domain_pads_five_percent() {
        let (kind, (low, high)) = resolve_domain(&AxisConfig::default(), &[0.0, 10.0], "y");
        assert_eq!(kind, ScaleKind::Linear);
        assert_relative_eq!(low, -0.5);
        assert_relative_eq!(high, 10.5);
    }

    #[test]
    fn partial_limits_keep_the_automatic_side() {
        let config = AxisConfig::default().with_limits(Some(0.0), None);
        let (_, (low, high)) = resolve_domain(&config, &[2.0, 12.0], "y");
        assert_relative_eq!(low, 0.0);
        assert_relative_eq!(high, 12.5);
    }

    #[test]
    fn log_without_positive_data_falls_back_to_linear() {
        let config = AxisConfig::default().with_scale(ScaleKind::Log);
        assert_eq!(resolve_domain(&config, &[-1.0, 0.0], "y").0, ScaleKind::Linear);
        let limited = config.with_limits(Some(0.0), None);
        assert_eq!(resolve_domain(&limited, &[1.0, 10.0], "y").0, ScaleKind::Linear);
    }

    #[test]
    fn collapsed_limits_use_automatic_range() {
        let config = AxisConfig::default().with_limits(Some(5.0), Some(5.0));
        let (_, (low, high)) = resolve_domain(&config, &[0.0, 10.0], "y");
        assert!(low < high);
    }

    #[test]
    fn oversized_tick_step_falls_back_to_auto_ticks() {
        let config = AxisConfig::default().with_tick_step(1e-9);
        let axis = resolve_numeric_axis(&config, ScaleKind::Linear, (0.0, 100.0), (0.0, 500.0), 60.0, "y")
            .expect("axis");
        assert!(!axis.major_ticks.is_empty());
        assert!(axis.major_ticks.len() < 20);
    }

    #[test]
    fn explicit_step_and_integer_format() {
        let stepped = AxisConfig::default().with_tick_step(25.0);
        let axis = resolve_numeric_axis(&stepped, ScaleKind::Linear, (0.0, 100.0), (0.0, 500.0), 60.0, "y")
            .expect("axis");
        assert_eq!(axis.tick_positions(), vec![0.0, 25.0, 50.0, 75.0, 100.0]);

        let integer = AxisConfig::default().with_format(ValueFormat::Integer);
        let axis = resolve_numeric_axis(&integer, ScaleKind::Linear, (0.0, 3.0), (0.0, 800.0), 60.0, "y")
            .expect("axis");
        assert!(axis.tick_positions().iter().all(|tick| tick.fract() == 0.0));
    }

    #[test]
    fn hidden_labels_keep_ticks() {
        let config = AxisConfig {
            hide_labels: true,
            ..AxisConfig::default()
        };
        let axis = resolve_numeric_axis(&config, ScaleKind::Linear, (0.0, 10.0), (0.0, 400.0), 60.0, "x")
            .expect("axis");
        assert!(!axis.major_ticks.is_empty());
        assert_eq!(axis.tick_labels().count(), 0);
    }

    #[test]
    fn grouped_categories_put_major_ticks_at_group_starts() {
        let x: Vec<CellValue> = ["2006 Q1", "2006 Q2", "2007 Q1", "2007 Q2"]
            .into_iter()
            .map(CellValue::from)
            .collect();
        let categories = Categories::resolve(&x);
        let config = AxisConfig::default().categorical(true);
        let axis = resolve_categorical_axis(&config, &categories, (-0.15, 3.15), (0.0, 400.0))
            .expect("axis");
        assert_eq!(axis.tick_positions(), vec![0.0, 2.0]);
        assert_eq!(axis.tick_labels().collect::<Vec<_>>(), vec!["2006", "2007"]);
        assert_eq!(axis.minor_ticks, vec![0.0, 1.0, 2.0, 3.0]);
    }
}
