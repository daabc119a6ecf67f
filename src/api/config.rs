use serde::{Deserialize, Serialize};

use crate::core::{ScaleKind, SmoothingMethod, ValueFormat};
use crate::data::AxisValue;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, FontWeight, LineStrokeStyle, MarkerShape};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleAlign {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleConfig {
    pub text: String,
    pub font_size: f64,
    pub weight: FontWeight,
    pub align: TitleAlign,
    /// Baseline position in axes fractions: 1.0 is the top edge of the plot.
    pub y_offset: f64,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_size: 16.0,
            weight: FontWeight::Bold,
            align: TitleAlign::Center,
            y_offset: 1.0,
        }
    }
}

impl TitleConfig {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// Where a subtitle is anchored horizontally. `Chart*` anchors are relative to
/// the plot area, `Figure*` anchors to the whole canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubtitleAnchor {
    ChartLeft,
    #[default]
    ChartCenter,
    ChartRight,
    FigureLeft,
    FigureRight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubtitleConfig {
    pub text: String,
    pub font_size: f64,
    pub weight: FontWeight,
    pub anchor: SubtitleAnchor,
    /// Added to the title offset; the subtitle hangs from the resulting line.
    pub y_offset: f64,
}

impl Default for SubtitleConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_size: 12.0,
            weight: FontWeight::Normal,
            anchor: SubtitleAnchor::ChartCenter,
            y_offset: -0.06,
        }
    }
}

impl SubtitleConfig {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisSide {
    #[default]
    Primary,
    Secondary,
}

/// Visual style of one plotted column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesStyle {
    pub column: String,
    pub label: Option<String>,
    pub color: Color,
    pub line_style: LineStrokeStyle,
    /// Points.
    pub line_width: f64,
    pub marker: Option<MarkerShape>,
    /// Points.
    pub marker_size: f64,
    pub axis: AxisSide,
    pub smoothing: SmoothingMethod,
    pub smoothing_window: usize,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            column: String::new(),
            label: None,
            color: Color::from_rgb_u32(0x1F77B4),
            line_style: LineStrokeStyle::Solid,
            line_width: 2.0,
            marker: None,
            marker_size: 6.0,
            axis: AxisSide::Primary,
            smoothing: SmoothingMethod::None,
            smoothing_window: 1,
        }
    }
}

impl SeriesStyle {
    #[must_use]
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_line_style(mut self, style: LineStrokeStyle, width: f64) -> Self {
        self.line_style = style;
        self.line_width = width;
        self
    }

    #[must_use]
    pub fn with_marker(mut self, shape: MarkerShape, size: f64) -> Self {
        self.marker = Some(shape);
        self.marker_size = size;
        self
    }

    #[must_use]
    pub fn with_axis(mut self, axis: AxisSide) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn on_secondary_axis(self) -> Self {
        self.with_axis(AxisSide::Secondary)
    }

    #[must_use]
    pub fn with_smoothing(mut self, method: SmoothingMethod, window: usize) -> Self {
        self.smoothing = method;
        self.smoothing_window = window;
        self
    }

    /// Legend text: the explicit label, or the column name when the label is
    /// absent or blank.
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.label
            .as_deref()
            .filter(|label| !label.trim().is_empty())
            .unwrap_or(&self.column)
    }

    /// Smoothing window with 0 treated as 1.
    #[must_use]
    pub fn effective_window(&self) -> usize {
        self.smoothing_window.max(1)
    }

    #[must_use]
    pub fn is_secondary(&self) -> bool {
        self.axis == AxisSide::Secondary
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    pub label: String,
    pub label_weight: FontWeight,
    pub color: Color,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Degrees, counter-clockwise.
    pub tick_rotation: f64,
    pub tick_step: Option<f64>,
    pub scale: ScaleKind,
    pub format: ValueFormat,
    pub grid: bool,
    pub grid_color: Color,
    pub grid_alpha: f64,
    pub grid_style: LineStrokeStyle,
    /// X axis only: plot rows at category positions instead of values.
    pub categorical: bool,
    /// Keep ticks and grid, suppress tick labels.
    pub hide_labels: bool,
    /// X axis only: label runs of categories by their first token.
    pub grouped_categorical: bool,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            label_weight: FontWeight::Normal,
            color: Color::BLACK,
            min: None,
            max: None,
            tick_rotation: 0.0,
            tick_step: None,
            scale: ScaleKind::Linear,
            format: ValueFormat::Auto,
            grid: true,
            grid_color: Color::from_rgb_u32(0xCCCCCC),
            grid_alpha: 0.5,
            grid_style: LineStrokeStyle::Dashed,
            categorical: false,
            hide_labels: false,
            grouped_categorical: false,
        }
    }
}

impl AxisConfig {
    #[must_use]
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_limits(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: ScaleKind) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: ValueFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_tick_step(mut self, step: f64) -> Self {
        self.tick_step = Some(step);
        self
    }

    #[must_use]
    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    #[must_use]
    pub fn categorical(mut self, grouped: bool) -> Self {
        self.categorical = true;
        self.grouped_categorical = grouped;
        self
    }
}

/// Legend anchor inside the plot area. `Best` picks the anchor that covers
/// the fewest plotted points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LegendLocation {
    #[default]
    #[serde(rename = "best")]
    Best,
    #[serde(rename = "upper right", alias = "upper_right")]
    UpperRight,
    #[serde(rename = "upper left", alias = "upper_left")]
    UpperLeft,
    #[serde(rename = "lower left", alias = "lower_left")]
    LowerLeft,
    #[serde(rename = "lower right", alias = "lower_right")]
    LowerRight,
    #[serde(rename = "right")]
    Right,
    #[serde(rename = "center left", alias = "center_left")]
    CenterLeft,
    #[serde(rename = "center right", alias = "center_right")]
    CenterRight,
    #[serde(rename = "lower center", alias = "lower_center")]
    LowerCenter,
    #[serde(rename = "upper center", alias = "upper_center")]
    UpperCenter,
    #[serde(rename = "center")]
    Center,
}

impl LegendLocation {
    /// Fixed anchors in the order `Best` tries them.
    pub const CANDIDATES: [LegendLocation; 10] = [
        LegendLocation::UpperRight,
        LegendLocation::UpperLeft,
        LegendLocation::LowerLeft,
        LegendLocation::LowerRight,
        LegendLocation::Right,
        LegendLocation::CenterLeft,
        LegendLocation::CenterRight,
        LegendLocation::LowerCenter,
        LegendLocation::UpperCenter,
        LegendLocation::Center,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    pub show: bool,
    pub location: LegendLocation,
    pub frame: bool,
    pub shadow: bool,
    pub frame_alpha: f64,
    pub fancy_box: bool,
    pub columns: usize,
    /// Points.
    pub font_size: f64,
    pub title: Option<String>,
    /// Vertical gap between entries, in font sizes.
    pub label_spacing: f64,
    /// Length of the line sample, in font sizes.
    pub handle_length: f64,
    /// Gap between line sample and text, in font sizes.
    pub handle_text_pad: f64,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            show: true,
            location: LegendLocation::Best,
            frame: true,
            shadow: false,
            frame_alpha: 0.8,
            fancy_box: true,
            columns: 1,
            font_size: 10.0,
            title: None,
            label_spacing: 0.5,
            handle_length: 2.0,
            handle_text_pad: 0.8,
        }
    }
}

/// Shaded X range, e.g. a recession.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodHighlight {
    pub name: String,
    pub start: Option<AxisValue>,
    pub end: Option<AxisValue>,
    pub color: Color,
    pub alpha: f64,
    pub label: Option<String>,
}

impl Default for PeriodHighlight {
    fn default() -> Self {
        Self {
            name: "Period".to_owned(),
            start: None,
            end: None,
            color: Color::from_rgb_u32(0xFF0000),
            alpha: 0.1,
            label: None,
        }
    }
}

impl PeriodHighlight {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        start: impl Into<AxisValue>,
        end: impl Into<AxisValue>,
    ) -> Self {
        Self {
            name: name.into(),
            start: Some(start.into()),
            end: Some(end.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color, alpha: f64) -> Self {
        self.color = color;
        self.alpha = alpha;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Complete description of one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub title: TitleConfig,
    pub subtitle: Option<SubtitleConfig>,
    pub series: Vec<SeriesStyle>,
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
    pub y2_axis: Option<AxisConfig>,
    pub background_color: Color,
    pub font_family: String,
    /// Points; used for axis labels and tick labels.
    pub font_size: f64,
    pub text_color: Color,
    pub legend: LegendConfig,
    pub period_highlights: Vec<PeriodHighlight>,
    /// Inches.
    pub figure_width: f64,
    /// Inches.
    pub figure_height: f64,
    pub dpi: u32,
    pub tight_layout: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: TitleConfig::default(),
            subtitle: None,
            series: Vec::new(),
            x_axis: AxisConfig::default(),
            y_axis: AxisConfig::default(),
            y2_axis: None,
            background_color: Color::WHITE,
            font_family: "sans-serif".to_owned(),
            font_size: 10.0,
            text_color: Color::BLACK,
            legend: LegendConfig::default(),
            period_highlights: Vec::new(),
            figure_width: 10.0,
            figure_height: 6.0,
            dpi: 100,
            tight_layout: true,
        }
    }
}

impl ChartConfig {
    pub fn from_json(json: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title.text = title.into();
        self
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: SubtitleConfig) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    #[must_use]
    pub fn with_series(mut self, series: SeriesStyle) -> Self {
        self.series.push(series);
        self
    }

    #[must_use]
    pub fn with_highlight(mut self, highlight: PeriodHighlight) -> Self {
        self.period_highlights.push(highlight);
        self
    }

    pub fn primary_series(&self) -> impl Iterator<Item = &SeriesStyle> {
        self.series.iter().filter(|series| !series.is_secondary())
    }

    pub fn secondary_series(&self) -> impl Iterator<Item = &SeriesStyle> {
        self.series.iter().filter(|series| series.is_secondary())
    }

    #[must_use]
    pub fn has_secondary_axis(&self) -> bool {
        self.series.iter().any(SeriesStyle::is_secondary)
    }

    /// Canvas size in pixels (`inches × dpi`).
    #[must_use]
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        (
            (self.figure_width * dpi).round().max(0.0) as u32,
            (self.figure_height * dpi).round().max(0.0) as u32,
        )
    }

    /// Structural checks that make a render impossible.
    pub fn validate(&self) -> ChartResult<()> {
        if self.dpi == 0 {
            return Err(ChartError::InvalidChartInput(
                "dpi must be greater than zero".to_owned(),
            ));
        }
        if !self.figure_width.is_finite()
            || !self.figure_height.is_finite()
            || self.figure_width <= 0.0
            || self.figure_height <= 0.0
        {
            return Err(ChartError::InvalidChartInput(format!(
                "figure size must be positive, got {}x{} in",
                self.figure_width, self.figure_height
            )));
        }
        let subtitle_size = self
            .subtitle
            .as_ref()
            .map(|subtitle| ("subtitle.font_size", subtitle.font_size));
        for (name, size) in [
            ("font_size", self.font_size),
            ("title.font_size", self.title.font_size),
            ("legend.font_size", self.legend.font_size),
        ]
        .into_iter()
        .chain(subtitle_size)
        {
            if !size.is_finite() || size <= 0.0 {
                return Err(ChartError::InvalidChartInput(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        for series in &self.series {
            if !series.line_width.is_finite() || series.line_width <= 0.0 {
                return Err(ChartError::InvalidChartInput(format!(
                    "series `{}` line width must be finite and > 0",
                    series.column
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisSide, ChartConfig, LegendLocation, SeriesStyle, SubtitleConfig};
    use crate::error::ChartError;
    use crate::render::Color;

    #[test]
    fn defaults_match_documented_surface() {
        let config = ChartConfig::default();
        assert_eq!(config.pixel_size(), (1000, 600));
        assert_eq!(config.title.font_size, 16.0);
        assert!(config.tight_layout);
        assert_eq!(config.legend.location, LegendLocation::Best);
        assert!(config.x_axis.grid);
    }

    #[test]
    fn empty_json_object_yields_defaults() {
        let config = ChartConfig::from_json("{}").expect("parse");
        assert_eq!(config, ChartConfig::default());
    }

    #[test]
    fn json_uses_readable_enum_names() {
        let config = ChartConfig::from_json(
            r##"{
                "series": [{"column": "GDP", "axis": "secondary", "line_style": "dash_dot",
                            "marker": "diamond", "color": "#FF7F0E"}],
                "legend": {"location": "upper left"},
                "y_axis": {"scale": "log", "format": "percent"}
            }"##,
        )
        .expect("parse");
        assert_eq!(config.series[0].axis, AxisSide::Secondary);
        assert_eq!(config.series[0].color, Color::from_rgb_u32(0xFF7F0E));
        assert_eq!(config.legend.location, LegendLocation::UpperLeft);
        assert!(config.has_secondary_axis());
    }

    #[test]
    fn blank_label_falls_back_to_column() {
        assert_eq!(SeriesStyle::new("GDP").display_label(), "GDP");
        assert_eq!(SeriesStyle::new("GDP").with_label(" ").display_label(), "GDP");
        assert_eq!(SeriesStyle::new("GDP").with_label("Output").display_label(), "Output");
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = ChartConfig::default()
            .with_title("Output")
            .with_series(SeriesStyle::new("GDP").on_secondary_axis());
        let json = config.to_json().expect("serialize");
        assert_eq!(ChartConfig::from_json(&json).expect("parse"), config);
    }

    #[test]
    fn zero_dpi_is_rejected() {
        let config = ChartConfig {
            dpi: 0,
            ..ChartConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_subtitle_font_size_is_rejected_up_front() {
        let config = ChartConfig::default().with_subtitle(SubtitleConfig {
            font_size: 0.0,
            ..SubtitleConfig::new("Quarterly")
        });
        let err = config.validate().expect_err("subtitle size 0");
        assert!(matches!(err, ChartError::InvalidChartInput(ref message) if message.contains("subtitle.font_size")));
        assert!(ChartConfig::default().validate().is_ok());
    }
}
