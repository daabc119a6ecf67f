//! Named bundles of visual defaults.
//!
//! Three static tables: colour themes, style presets (themes plus grid and
//! legend policy) and period presets (ready-made highlight spans). Lookups
//! are by exact name, then case-insensitive; unknown names fail with
//! [`ChartError::NotFound`] listing every valid name.

mod periods;
mod styles;
mod themes;

use std::iter;

use serde::{Deserialize, Serialize};

use crate::api::{AxisConfig, ChartConfig, LegendLocation};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, FontWeight, LineStrokeStyle};

pub use periods::{PERIOD_PRESETS, PeriodPreset, PeriodSpan};
pub use styles::STYLE_PRESETS;
pub use themes::THEMES;

/// Theme applied when the caller names none.
pub const DEFAULT_THEME: &str = "Light";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub text: Color,
    pub axis: Color,
    pub font_family: &'static str,
    pub font_size: f64,
    pub title_font_size: f64,
    pub title_weight: FontWeight,
    pub line_colors: &'static [Color],
}

impl Theme {
    /// Palette colour for the `index`-th series, cycling.
    #[must_use]
    pub fn line_color(&self, index: usize) -> Color {
        palette_color(self.line_colors, index)
    }

    /// Overwrites colours and fonts of `config` and recolours its series in order.
    pub fn apply_to(&self, config: &mut ChartConfig) {
        config.background_color = self.background;
        config.text_color = self.text;
        config.font_family = self.font_family.to_owned();
        config.font_size = self.font_size;
        config.title.font_size = self.title_font_size;
        config.title.weight = self.title_weight;
        for axis in axes_mut(config) {
            axis.color = self.axis;
            axis.grid_color = self.grid;
        }
        for (index, series) in config.series.iter_mut().enumerate() {
            series.color = self.line_color(index);
        }
    }
}

/// Which families of grid lines a style draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridLines {
    /// Lines across the plot at Y ticks.
    Horizontal,
    /// Lines up the plot at X ticks.
    Vertical,
    #[default]
    Both,
    None,
}

impl GridLines {
    #[must_use]
    pub fn horizontal(self) -> bool {
        matches!(self, GridLines::Horizontal | GridLines::Both)
    }

    #[must_use]
    pub fn vertical(self) -> bool {
        matches!(self, GridLines::Vertical | GridLines::Both)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StylePreset {
    pub name: &'static str,
    pub description: &'static str,
    pub background: Color,
    pub text: Color,
    pub axis: Color,
    pub grid: Color,
    pub grid_lines: GridLines,
    pub grid_alpha: f64,
    pub grid_style: LineStrokeStyle,
    pub font_family: &'static str,
    pub font_size: f64,
    pub title_font_size: f64,
    pub title_weight: FontWeight,
    pub legend_location: LegendLocation,
    pub legend_columns: usize,
    pub legend_frame_alpha: f64,
    pub line_colors: &'static [Color],
}

impl StylePreset {
    #[must_use]
    pub fn line_color(&self, index: usize) -> Color {
        palette_color(self.line_colors, index)
    }

    /// Overwrites colours, fonts, grid policy and legend placement of `config`.
    ///
    /// The secondary axis never gets grid lines, whatever the preset says.
    pub fn apply_to(&self, config: &mut ChartConfig) {
        config.background_color = self.background;
        config.text_color = self.text;
        config.font_family = self.font_family.to_owned();
        config.font_size = self.font_size;
        config.title.font_size = self.title_font_size;
        config.title.weight = self.title_weight;
        for axis in axes_mut(config) {
            axis.color = self.axis;
            axis.grid_color = self.grid;
            axis.grid_alpha = self.grid_alpha;
            axis.grid_style = self.grid_style;
        }
        config.x_axis.grid = self.grid_lines.vertical();
        config.y_axis.grid = self.grid_lines.horizontal();
        if let Some(y2) = config.y2_axis.as_mut() {
            y2.grid = false;
        }
        config.legend.location = self.legend_location;
        config.legend.columns = self.legend_columns.max(1);
        config.legend.frame_alpha = self.legend_frame_alpha;
        for (index, series) in config.series.iter_mut().enumerate() {
            series.color = self.line_color(index);
        }
    }
}

fn palette_color(colors: &[Color], index: usize) -> Color {
    if colors.is_empty() {
        return Color::BLACK;
    }
    colors[index % colors.len()]
}

fn axes_mut(config: &mut ChartConfig) -> impl Iterator<Item = &mut AxisConfig> {
    iter::once(&mut config.x_axis)
        .chain(iter::once(&mut config.y_axis))
        .chain(config.y2_axis.as_mut())
}

fn lookup<T>(
    kind: &'static str,
    name: &str,
    table: &'static [T],
    name_of: impl Fn(&T) -> &'static str,
) -> ChartResult<&'static T> {
    let wanted = name.trim();
    table
        .iter()
        .find(|entry| name_of(entry) == wanted)
        .or_else(|| {
            table
                .iter()
                .find(|entry| name_of(entry).eq_ignore_ascii_case(wanted))
        })
        .ok_or_else(|| ChartError::NotFound {
            kind,
            name: name.to_owned(),
            available: table.iter().map(|entry| name_of(entry).to_owned()).collect(),
        })
}

pub fn theme(name: &str) -> ChartResult<&'static Theme> {
    lookup("theme", name, &THEMES, |theme| theme.name)
}

#[must_use]
pub fn theme_names() -> Vec<&'static str> {
    THEMES.iter().map(|theme| theme.name).collect()
}

#[must_use]
pub fn default_theme() -> &'static Theme {
    &THEMES[0]
}

pub fn style_preset(name: &str) -> ChartResult<&'static StylePreset> {
    lookup("style preset", name, &STYLE_PRESETS, |preset| preset.name)
}

#[must_use]
pub fn style_preset_names() -> Vec<&'static str> {
    STYLE_PRESETS.iter().map(|preset| preset.name).collect()
}

pub fn period_preset(name: &str) -> ChartResult<&'static PeriodPreset> {
    lookup("period preset", name, &PERIOD_PRESETS, |preset| preset.name)
}

#[must_use]
pub fn period_preset_names() -> Vec<&'static str> {
    PERIOD_PRESETS.iter().map(|preset| preset.name).collect()
}

#[cfg(test)]
mod tests {
    use super::{
        DEFAULT_THEME, GridLines, default_theme, period_preset, style_preset, theme, theme_names,
    };
    use crate::api::{AxisConfig, ChartConfig, SeriesStyle};
    use crate::error::ChartError;
    use crate::render::Color;

    #[test]
    fn lookup_is_exact_then_case_insensitive() {
        assert_eq!(theme("Dark").expect("dark").name, "Dark");
        assert_eq!(theme("imf professional").expect("imf").name, "IMF Professional");
        assert_eq!(default_theme().name, DEFAULT_THEME);
    }

    #[test]
    fn unknown_theme_lists_every_name() {
        match theme("Neon").expect_err("unknown") {
            ChartError::NotFound {
                kind,
                name,
                available,
            } => {
                assert_eq!(kind, "theme");
                assert_eq!(name, "Neon");
                assert_eq!(available.len(), theme_names().len());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn palette_cycles() {
        let light = default_theme();
        assert_eq!(light.line_color(0), light.line_color(light.line_colors.len()));
    }

    #[test]
    fn preset_grid_policy_reaches_axes_but_not_secondary() {
        let preset = style_preset("Professional Clean").expect("preset");
        assert_eq!(preset.grid_lines, GridLines::Horizontal);
        let mut config = ChartConfig {
            y2_axis: Some(AxisConfig::default()),
            ..ChartConfig::default()
        }
        .with_series(SeriesStyle::new("A"))
        .with_series(SeriesStyle::new("B"));
        preset.apply_to(&mut config);
        assert!(!config.x_axis.grid);
        assert!(config.y_axis.grid);
        assert!(!config.y2_axis.as_ref().expect("y2").grid);
        assert_eq!(config.series[1].color, preset.line_color(1));
        assert_eq!(config.font_family, "Arial");
    }

    #[test]
    fn period_preset_converts_to_highlights() {
        let highlights = period_preset("Interest Rate Hikes")
            .expect("preset")
            .highlights();
        assert_eq!(highlights.len(), 1);
        assert_eq!(highlights[0].name, "Rate Hikes");
        assert_eq!(highlights[0].color, Color::from_rgb_u32(0xFFD700));
        assert_eq!(highlights[0].label.as_deref(), Some("Rate Increase Period"));
    }
}
