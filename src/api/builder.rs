use tracing::debug;

use crate::core::SmoothingMethod;
use crate::data::DataSelection;
use crate::error::ChartResult;
use crate::render::MarkerShape;
use crate::theme::{self, PeriodPreset, StylePreset, Theme};

use super::{AxisConfig, AxisSide, ChartConfig, SeriesStyle, SubtitleConfig};

/// Assembles a [`ChartConfig`] from a column selection and named presets.
///
/// Precedence, lowest first: config defaults, theme, style preset, explicit
/// builder calls. The secondary axis never draws grid lines.
#[derive(Debug, Clone)]
pub struct ChartConfigBuilder {
    selection: DataSelection,
    theme: &'static Theme,
    style: Option<&'static StylePreset>,
    periods: Option<&'static PeriodPreset>,
    title: String,
    subtitle: Option<SubtitleConfig>,
    show_grid: bool,
    marker: Option<(MarkerShape, f64)>,
    smoothing: Option<usize>,
    categorical_x: Option<bool>,
}

impl ChartConfigBuilder {
    #[must_use]
    pub fn new(selection: DataSelection) -> Self {
        Self {
            selection,
            theme: theme::default_theme(),
            style: None,
            periods: None,
            title: String::new(),
            subtitle: None,
            show_grid: true,
            marker: None,
            smoothing: None,
            categorical_x: None,
        }
    }

    pub fn with_theme(mut self, name: &str) -> ChartResult<Self> {
        self.theme = theme::theme(name)?;
        Ok(self)
    }

    pub fn with_style_preset(mut self, name: &str) -> ChartResult<Self> {
        self.style = Some(theme::style_preset(name)?);
        Ok(self)
    }

    pub fn with_period_preset(mut self, name: &str) -> ChartResult<Self> {
        self.periods = Some(theme::period_preset(name)?);
        Ok(self)
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(SubtitleConfig::new(subtitle));
        self
    }

    /// Grid flag for both primary axes; a style preset's grid policy wins.
    #[must_use]
    pub fn with_grid(mut self, show: bool) -> Self {
        self.show_grid = show;
        self
    }

    #[must_use]
    pub fn with_markers(mut self, shape: MarkerShape, size: f64) -> Self {
        self.marker = Some((shape, size));
        self
    }

    /// Moving-average smoothing for every series.
    #[must_use]
    pub fn with_moving_average(mut self, window: usize) -> Self {
        self.smoothing = Some(window);
        self
    }

    /// Plots the X column as categories, optionally grouped by first token.
    #[must_use]
    pub fn with_categorical_x(mut self, grouped: bool) -> Self {
        self.categorical_x = Some(grouped);
        self
    }

    #[must_use]
    pub fn build(&self) -> ChartConfig {
        let selection = &self.selection;
        let mut config = ChartConfig::default().with_title(self.title.clone());
        config.subtitle = self.subtitle.clone();

        for column in selection.y_columns() {
            let axis = if selection.is_secondary(column) {
                AxisSide::Secondary
            } else {
                AxisSide::Primary
            };
            let mut series = SeriesStyle::new(column)
                .with_label(column)
                .with_axis(axis);
            if let Some((shape, size)) = self.marker {
                series = series.with_marker(shape, size);
            }
            if let Some(window) = self.smoothing {
                series = series.with_smoothing(SmoothingMethod::MovingAverage, window);
            }
            config.series.push(series);
        }

        config.x_axis = AxisConfig::labeled(selection.x_column.clone()).with_grid(self.show_grid);
        if let Some(grouped) = self.categorical_x {
            config.x_axis = config.x_axis.categorical(grouped);
        }
        config.y_axis = AxisConfig::labeled(single_label(config.primary_series()))
            .with_grid(self.show_grid);
        if config.has_secondary_axis() {
            config.y2_axis = Some(
                AxisConfig::labeled(single_label(config.secondary_series())).with_grid(false),
            );
        }

        self.theme.apply_to(&mut config);
        if let Some(style) = self.style {
            style.apply_to(&mut config);
        }
        if let Some(periods) = self.periods {
            config.period_highlights.extend(periods.highlights());
        }

        debug!(
            series = config.series.len(),
            secondary = config.has_secondary_axis(),
            theme = self.theme.name,
            style = self.style.map(|style| style.name),
            "chart config built"
        );
        config
    }
}

/// Axis label when exactly one series uses the axis.
fn single_label<'a>(mut series: impl Iterator<Item = &'a SeriesStyle>) -> String {
    match (series.next(), series.next()) {
        (Some(only), None) => only.column.clone(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::ChartConfigBuilder;
    use crate::data::DataSelection;

    fn selection() -> DataSelection {
        DataSelection::new("Year")
            .with_primary(["GDP"])
            .with_secondary(["Rate"])
    }

    #[test]
    fn labels_follow_single_series_per_axis() {
        let config = ChartConfigBuilder::new(selection()).build();
        assert_eq!(config.x_axis.label, "Year");
        assert_eq!(config.y_axis.label, "GDP");
        assert_eq!(config.y2_axis.as_ref().expect("y2").label, "Rate");
        assert!(!config.y2_axis.as_ref().expect("y2").grid);
    }

    #[test]
    fn unknown_preset_is_rejected() {
        assert!(ChartConfigBuilder::new(selection()).with_style_preset("Neon").is_err());
    }
}
