use serde::{Deserialize, Serialize};

/// How numeric tick labels are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFormat {
    /// Just enough decimals to tell neighbouring ticks apart.
    #[default]
    Auto,
    /// Two decimals.
    Decimal,
    /// Mantissa and power of ten, e.g. `1.5e3`.
    Scientific,
    /// Values are already percentages; appends `%`.
    Percent,
    /// Whole numbers; also restricts ticks to integers.
    Integer,
}

/// Formats one tick value. `step` is the distance between neighbouring ticks
/// and drives the decimal count of `Auto` and `Percent`.
#[must_use]
pub fn format_tick_value(value: f64, format: ValueFormat, step: f64) -> String {
    match format {
        ValueFormat::Auto => format_auto(value, step),
        ValueFormat::Decimal => normalize_negative_zero(format!("{value:.2}")),
        ValueFormat::Scientific => format_scientific(value),
        ValueFormat::Percent => {
            let decimals = decimals_for_step(step);
            normalize_negative_zero(format!("{value:.decimals$}")) + "%"
        }
        ValueFormat::Integer => normalize_negative_zero(format!("{:.0}", value.round())),
    }
}

/// Plain notation with the decimal count implied by `step`; very large or
/// very small magnitudes switch to scientific notation.
#[must_use]
pub fn format_auto(value: f64, step: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let magnitude = value.abs();
    if magnitude >= 1e9 || (magnitude > 0.0 && magnitude < 1e-5) {
        return format_scientific(value);
    }
    let decimals = decimals_for_step(step);
    normalize_negative_zero(format!("{value:.decimals$}"))
}

#[must_use]
pub fn format_scientific(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return if value == 0.0 { "0".to_owned() } else { value.to_string() };
    }
    let mut exponent = value.abs().log10().floor() as i32;
    let mut mantissa = value / 10f64.powi(exponent);
    // Rounding the mantissa can carry into the next power (9.96 -> 10.0).
    if (mantissa.abs() * 10.0).round() >= 100.0 {
        exponent += 1;
        mantissa = value / 10f64.powi(exponent);
    }
    format!("{mantissa:.1}e{exponent}")
}

/// Fewest decimals (up to 10) that represent multiples of `step` exactly.
#[must_use]
pub fn decimals_for_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 2;
    }
    (0..=10)
        .find(|&decimals| {
            let scaled = step * 10f64.powi(decimals as i32);
            (scaled - scaled.round()).abs() <= 1e-6 * scaled.abs().max(1.0)
        })
        .unwrap_or(10)
}

fn normalize_negative_zero(text: String) -> String {
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|ch| ch == '0' || ch == '.') => rest.to_owned(),
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::{ValueFormat, decimals_for_step, format_tick_value};

    #[test]
    fn auto_uses_step_precision() {
        assert_eq!(format_tick_value(2.0, ValueFormat::Auto, 0.5), "2.0");
        assert_eq!(format_tick_value(2006.0, ValueFormat::Auto, 2.0), "2006");
        assert_eq!(format_tick_value(0.30000000000000004, ValueFormat::Auto, 0.1), "0.3");
    }

    #[test]
    fn fixed_formats() {
        assert_eq!(format_tick_value(1.0, ValueFormat::Decimal, 1.0), "1.00");
        assert_eq!(format_tick_value(25.0, ValueFormat::Percent, 5.0), "25%");
        assert_eq!(format_tick_value(2.5, ValueFormat::Percent, 0.5), "2.5%");
        assert_eq!(format_tick_value(3.0, ValueFormat::Integer, 1.0), "3");
        assert_eq!(format_tick_value(1500.0, ValueFormat::Scientific, 500.0), "1.5e3");
        assert_eq!(format_tick_value(0.0, ValueFormat::Scientific, 1.0), "0");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(format_tick_value(-0.0001, ValueFormat::Decimal, 1.0), "0.00");
    }

    #[test]
    fn decimals_follow_step() {
        assert_eq!(decimals_for_step(1.0), 0);
        assert_eq!(decimals_for_step(0.25), 2);
        assert_eq!(decimals_for_step(0.1), 1);
    }
}
