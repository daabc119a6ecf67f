use tracing::warn;

use crate::core::{PlotArea, Viewport};

use super::axis_resolver::ResolvedAxis;
use super::layout_helpers::{estimate_text_height_px, max_text_extent_px, pt_to_px};
use super::{AxisConfig, ChartConfig, SubtitleAnchor};

/// Subplot fractions used when tight layout is off.
const SUBPLOT_LEFT: f64 = 0.125;
const SUBPLOT_RIGHT: f64 = 0.9;
const SUBPLOT_BOTTOM: f64 = 0.11;
const SUBPLOT_TOP: f64 = 0.88;

/// Smallest share of the canvas a tightened plot area may keep per side.
const MIN_PLOT_FRACTION: f64 = 0.2;

/// Point sizes of axis furniture, converted to pixels for one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct LayoutMetrics {
    pub dpi: f64,
    pub font_px: f64,
    pub tick_length_px: f64,
    pub minor_tick_length_px: f64,
    pub tick_width_px: f64,
    pub tick_pad_px: f64,
    pub label_pad_px: f64,
    pub title_pad_px: f64,
    pub spine_width_px: f64,
    pub grid_width_px: f64,
}

impl LayoutMetrics {
    pub fn new(config: &ChartConfig) -> Self {
        let dpi = f64::from(config.dpi);
        Self {
            dpi,
            font_px: pt_to_px(config.font_size, dpi),
            tick_length_px: pt_to_px(3.5, dpi),
            minor_tick_length_px: pt_to_px(4.0, dpi),
            tick_width_px: pt_to_px(0.8, dpi),
            tick_pad_px: pt_to_px(3.5, dpi),
            label_pad_px: pt_to_px(4.0, dpi),
            title_pad_px: pt_to_px(6.0, dpi),
            spine_width_px: pt_to_px(0.8, dpi),
            grid_width_px: pt_to_px(0.8, dpi),
        }
    }

    /// Distance from a spine to the outer edge of its tick labels.
    pub fn tick_label_offset_px(&self) -> f64 {
        self.tick_length_px + self.tick_pad_px
    }
}

/// One axis as seen by the layout pass.
pub(super) struct AxisExtentInput<'a> {
    pub config: &'a AxisConfig,
    pub resolved: &'a ResolvedAxis,
}

impl AxisExtentInput<'_> {
    fn label_extent(&self, font_px: f64) -> (f64, f64) {
        max_text_extent_px(self.resolved.tick_labels(), font_px, self.config.tick_rotation)
    }

    fn has_title(&self) -> bool {
        !self.config.label.trim().is_empty()
    }
}

pub(super) fn default_plot_area(viewport: Viewport) -> PlotArea {
    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    PlotArea::new(
        width * SUBPLOT_LEFT,
        height * (1.0 - SUBPLOT_TOP),
        width * SUBPLOT_RIGHT,
        height * (1.0 - SUBPLOT_BOTTOM),
    )
}

/// Plot area whose margins just fit tick labels, axis labels and the title.
///
/// Falls back to the default subplot area when the text would leave too
/// little room for the plot.
pub(super) fn tight_plot_area(
    viewport: Viewport,
    config: &ChartConfig,
    metrics: &LayoutMetrics,
    x: AxisExtentInput<'_>,
    y: AxisExtentInput<'_>,
    y2: Option<AxisExtentInput<'_>>,
) -> PlotArea {
    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    let pad = 1.08 * metrics.font_px;
    let text_height = estimate_text_height_px(metrics.font_px);
    let offset = metrics.tick_label_offset_px();

    let (x_label_width, x_label_height) = x.label_extent(metrics.font_px);
    let mut bottom = pad + offset + x_label_height;
    if x.has_title() {
        bottom += metrics.label_pad_px + text_height;
    }

    let (y_label_width, _) = y.label_extent(metrics.font_px);
    let mut left = pad + offset + y_label_width;
    if y.has_title() {
        left += metrics.label_pad_px + text_height;
    }

    let mut right = pad;
    if let Some(y2) = y2.as_ref() {
        let (y2_label_width, _) = y2.label_extent(metrics.font_px);
        right += offset + y2_label_width;
        if y2.has_title() {
            right += metrics.label_pad_px + text_height;
        }
    }

    // Unrotated X labels overhang the plot edges by half their width.
    if x.config.tick_rotation == 0.0 {
        let overhang = pad + x_label_width * 0.5;
        left = left.max(overhang);
        right = right.max(overhang);
    }

    let mut top = pad;
    if !config.title.text.trim().is_empty() {
        let title_px = pt_to_px(config.title.font_size, metrics.dpi);
        top += estimate_text_height_px(title_px) + metrics.title_pad_px;
    }
    top = subtitle_top_margin(config, metrics, height, top);

    let area = PlotArea::new(left, top, width - right, height - bottom);
    if !area.is_valid()
        || area.width() < width * MIN_PLOT_FRACTION
        || area.height() < height * MIN_PLOT_FRACTION
    {
        warn!(
            left,
            top,
            right,
            bottom,
            "tight layout leaves no room for the plot; using default margins"
        );
        return default_plot_area(viewport);
    }
    area
}

/// Top margin that also clears a subtitle hanging above the plot.
///
/// Chart-anchored subtitles at or above the plot top add their height.
/// Figure-anchored ones sit at a fixed canvas height, so the plot starts
/// below their bottom edge when they fall inside the top margin band.
fn subtitle_top_margin(config: &ChartConfig, metrics: &LayoutMetrics, height: f64, top: f64) -> f64 {
    let Some(subtitle) = config.subtitle.as_ref() else {
        return top;
    };
    if subtitle.text.trim().is_empty() {
        return top;
    }
    let subtitle_height =
        estimate_text_height_px(pt_to_px(subtitle.font_size, metrics.dpi)) + metrics.title_pad_px;
    let fraction = config.title.y_offset + subtitle.y_offset;
    match subtitle.anchor {
        SubtitleAnchor::ChartLeft | SubtitleAnchor::ChartCenter | SubtitleAnchor::ChartRight => {
            if fraction >= 1.0 {
                top + subtitle_height
            } else {
                top
            }
        }
        SubtitleAnchor::FigureLeft | SubtitleAnchor::FigureRight => {
            let hang_y = height * (1.0 - fraction);
            if hang_y < top {
                top.max(hang_y + subtitle_height)
            } else {
                top
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LayoutMetrics, default_plot_area, subtitle_top_margin};
    use crate::api::{ChartConfig, SubtitleAnchor, SubtitleConfig};
    use crate::core::Viewport;
    use approx::assert_relative_eq;

    fn subtitled(anchor: SubtitleAnchor, y_offset: f64) -> ChartConfig {
        ChartConfig::default()
            .with_title("Output")
            .with_subtitle(SubtitleConfig {
                anchor,
                y_offset,
                ..SubtitleConfig::new("Annual, percent")
            })
    }

    #[test]
    fn subtitle_inside_plot_reserves_nothing() {
        let config = subtitled(SubtitleAnchor::ChartCenter, -0.06);
        let metrics = LayoutMetrics::new(&config);
        assert_relative_eq!(subtitle_top_margin(&config, &metrics, 600.0, 40.0), 40.0);
    }

    #[test]
    fn chart_subtitle_above_plot_adds_its_height() {
        let config = subtitled(SubtitleAnchor::ChartLeft, 0.08);
        let metrics = LayoutMetrics::new(&config);
        let top = subtitle_top_margin(&config, &metrics, 600.0, 40.0);
        assert!(top > 40.0 + metrics.title_pad_px);
    }

    #[test]
    fn figure_subtitle_in_top_band_pushes_plot_below_it() {
        // Hangs from 2% below the canvas top.
        let config = subtitled(SubtitleAnchor::FigureRight, -0.02);
        let metrics = LayoutMetrics::new(&config);
        let top = subtitle_top_margin(&config, &metrics, 600.0, 20.0);
        assert!(top > 20.0);
        assert!(top > 12.0 + metrics.title_pad_px);

        let low = subtitled(SubtitleAnchor::FigureRight, -0.5);
        assert_relative_eq!(subtitle_top_margin(&low, &metrics, 600.0, 20.0), 20.0);
    }

    #[test]
    fn default_area_uses_subplot_fractions() {
        let area = default_plot_area(Viewport::new(1000, 600));
        assert_relative_eq!(area.left, 125.0);
        assert_relative_eq!(area.right, 900.0);
        assert_relative_eq!(area.top, 72.0, epsilon = 1e-9);
        assert_relative_eq!(area.bottom, 534.0, epsilon = 1e-9);
    }
}
