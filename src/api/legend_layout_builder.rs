use tracing::debug;

use crate::core::PlotArea;
use crate::render::{
    CanvasLayerKind, Color, LinePrimitive, LineStrokeStyle, MarkerPrimitive, MarkerShape,
    Primitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive, TextVAlign,
};

use super::layout_helpers::{estimate_label_text_width_px, estimate_text_height_px, pt_to_px};
use super::{AxisSide, LegendConfig, LegendLocation, SeriesStyle};

const BORDER_PAD: f64 = 0.4;
const BORDER_AXES_PAD: f64 = 0.5;
const COLUMN_SPACING: f64 = 2.0;
const FANCY_BOX_RADIUS: f64 = 0.2;
const SHADOW_OFFSET_PT: f64 = 2.0;
const FRAME_BORDER_PT: f64 = 1.0;
const FRAME_BORDER_COLOR: Color = Color::from_rgb_u32(0xCCCCCC);

/// One legend row: the handle sample and its text.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
    pub line_style: LineStrokeStyle,
    pub line_width_px: f64,
    pub marker: Option<MarkerShape>,
    pub marker_size_px: f64,
    pub axis: AxisSide,
}

impl LegendEntry {
    pub(super) fn from_series(style: &SeriesStyle, dpi: f64) -> Self {
        Self {
            label: style.display_label().to_owned(),
            color: style.color,
            line_style: style.line_style,
            line_width_px: pt_to_px(style.line_width, dpi),
            marker: style.marker,
            marker_size_px: pt_to_px(style.marker_size, dpi),
            axis: style.axis,
        }
    }
}

/// Placed legend box.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendLayout {
    /// Anchor actually used; never `Best`.
    pub location: LegendLocation,
    pub bounds: PlotArea,
    pub title: Option<String>,
    pub entries: Vec<LegendEntry>,
}

/// Pixel measurements of a legend box, independent of where it goes.
struct LegendMetrics {
    font_px: f64,
    border_pad: f64,
    row_height: f64,
    row_gap: f64,
    handle_length: f64,
    handle_pad: f64,
    column_gap: f64,
    title_height: f64,
    rows: usize,
    column_widths: Vec<f64>,
    width: f64,
    height: f64,
}

impl LegendMetrics {
    fn measure(config: &LegendConfig, title: Option<&str>, entries: &[LegendEntry], dpi: f64) -> Self {
        let font_px = pt_to_px(config.font_size, dpi);
        let border_pad = BORDER_PAD * font_px;
        let row_height = estimate_text_height_px(font_px);
        let row_gap = config.label_spacing.max(0.0) * font_px;
        let handle_length = config.handle_length.max(0.0) * font_px;
        let handle_pad = config.handle_text_pad.max(0.0) * font_px;
        let column_gap = COLUMN_SPACING * font_px;

        let columns = config.columns.clamp(1, entries.len().max(1));
        let rows = entries.len().div_ceil(columns);
        let column_widths: Vec<f64> = entries
            .chunks(rows.max(1))
            .map(|column| {
                let text = column
                    .iter()
                    .map(|entry| estimate_label_text_width_px(&entry.label, font_px))
                    .fold(0.0_f64, f64::max);
                handle_length + handle_pad + text
            })
            .collect();

        let title_height = if title.is_some() {
            row_height + row_gap
        } else {
            0.0
        };
        let body_width = column_widths.iter().sum::<f64>()
            + column_gap * column_widths.len().saturating_sub(1) as f64;
        let title_width = title.map_or(0.0, |title| estimate_label_text_width_px(title, font_px));
        let width = 2.0 * border_pad + body_width.max(title_width);
        let height = 2.0 * border_pad
            + title_height
            + rows as f64 * row_height
            + rows.saturating_sub(1) as f64 * row_gap;

        Self {
            font_px,
            border_pad,
            row_height,
            row_gap,
            handle_length,
            handle_pad,
            column_gap,
            title_height,
            rows,
            column_widths,
            width,
            height,
        }
    }
}

fn anchored_bounds(location: LegendLocation, plot: PlotArea, width: f64, height: f64, inset: f64) -> PlotArea {
    let left = plot.left + inset;
    let right = plot.right - inset - width;
    let center_x = plot.center_x() - width * 0.5;
    let top = plot.top + inset;
    let bottom = plot.bottom - inset - height;
    let center_y = plot.center_y() - height * 0.5;
    let (x, y) = match location {
        LegendLocation::Best | LegendLocation::UpperRight => (right, top),
        LegendLocation::UpperLeft => (left, top),
        LegendLocation::LowerLeft => (left, bottom),
        LegendLocation::LowerRight => (right, bottom),
        LegendLocation::Right | LegendLocation::CenterRight => (right, center_y),
        LegendLocation::CenterLeft => (left, center_y),
        LegendLocation::LowerCenter => (center_x, bottom),
        LegendLocation::UpperCenter => (center_x, top),
        LegendLocation::Center => (center_x, center_y),
    };
    PlotArea::new(x, y, x + width, y + height)
}

/// Candidate covering the fewest plotted points; earlier candidates win ties.
fn best_location(plot: PlotArea, width: f64, height: f64, inset: f64, points: &[(f64, f64)]) -> LegendLocation {
    let mut best = (LegendLocation::UpperRight, usize::MAX);
    for location in LegendLocation::CANDIDATES {
        let bounds = anchored_bounds(location, plot, width, height, inset);
        let covered = points
            .iter()
            .filter(|(x, y)| bounds.contains(*x, *y))
            .count();
        if covered < best.1 {
            best = (location, covered);
        }
        if covered == 0 {
            break;
        }
    }
    debug!(location = ?best.0, covered = best.1, "legend location chosen");
    best.0
}

/// Places the legend, or `None` when it is hidden or has nothing to show.
pub(super) fn build_legend_layout(
    config: &LegendConfig,
    entries: Vec<LegendEntry>,
    plot: PlotArea,
    dpi: f64,
    points: &[(f64, f64)],
) -> Option<LegendLayout> {
    if !config.show || entries.is_empty() {
        return None;
    }
    let title = config
        .title
        .as_deref()
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(str::to_owned);
    let metrics = LegendMetrics::measure(config, title.as_deref(), &entries, dpi);
    let inset = BORDER_AXES_PAD * metrics.font_px;
    let location = match config.location {
        LegendLocation::Best => best_location(plot, metrics.width, metrics.height, inset, points),
        fixed => fixed,
    };
    Some(LegendLayout {
        location,
        bounds: anchored_bounds(location, plot, metrics.width, metrics.height, inset),
        title,
        entries,
    })
}

pub(super) struct LegendStyle<'a> {
    pub background: Color,
    pub text_color: Color,
    pub font_family: &'a str,
    pub dpi: f64,
}

/// Frame, shadow, title and column-major entries of a placed legend.
pub(super) fn push_legend(
    frame: &mut RenderFrame,
    layout: &LegendLayout,
    config: &LegendConfig,
    style: &LegendStyle<'_>,
) {
    let metrics = LegendMetrics::measure(config, layout.title.as_deref(), &layout.entries, style.dpi);
    let bounds = layout.bounds;
    let radius = if config.fancy_box {
        FANCY_BOX_RADIUS * metrics.font_px
    } else {
        0.0
    };

    if config.frame {
        if config.shadow {
            let offset = pt_to_px(SHADOW_OFFSET_PT, style.dpi);
            frame.push(
                CanvasLayerKind::Legend,
                Primitive::Rect(
                    RectPrimitive::new(
                        bounds.left + offset,
                        bounds.top + offset,
                        bounds.width(),
                        bounds.height(),
                        Color::BLACK.with_alpha(0.5),
                    )
                    .with_corner_radius(radius),
                ),
            );
        }
        frame.push(
            CanvasLayerKind::Legend,
            Primitive::Rect(
                RectPrimitive::new(
                    bounds.left,
                    bounds.top,
                    bounds.width(),
                    bounds.height(),
                    style.background.with_alpha(config.frame_alpha),
                )
                .with_border(
                    pt_to_px(FRAME_BORDER_PT, style.dpi),
                    FRAME_BORDER_COLOR.with_alpha(config.frame_alpha),
                )
                .with_corner_radius(radius),
            ),
        );
    }

    let content_top = bounds.top + metrics.border_pad;
    if let Some(title) = layout.title.as_deref() {
        frame.push(
            CanvasLayerKind::Legend,
            Primitive::Text(
                TextPrimitive::new(
                    title,
                    bounds.center_x(),
                    content_top,
                    metrics.font_px,
                    style.text_color,
                    TextHAlign::Center,
                )
                .with_v_align(TextVAlign::Top)
                .with_font_family(style.font_family),
            ),
        );
    }

    let rows_top = content_top + metrics.title_height;
    let mut column_left = bounds.left + metrics.border_pad;
    for (column, entries) in layout.entries.chunks(metrics.rows.max(1)).enumerate() {
        for (row, entry) in entries.iter().enumerate() {
            let center_y = rows_top
                + row as f64 * (metrics.row_height + metrics.row_gap)
                + metrics.row_height * 0.5;
            push_entry(frame, entry, column_left, center_y, &metrics, style);
        }
        column_left += metrics.column_widths.get(column).copied().unwrap_or(0.0) + metrics.column_gap;
    }
}

fn push_entry(
    frame: &mut RenderFrame,
    entry: &LegendEntry,
    left: f64,
    center_y: f64,
    metrics: &LegendMetrics,
    style: &LegendStyle<'_>,
) {
    if metrics.handle_length > 0.0 && entry.line_width_px > 0.0 {
        frame.push(
            CanvasLayerKind::Legend,
            Primitive::Line(
                LinePrimitive::new(
                    left,
                    center_y,
                    left + metrics.handle_length,
                    center_y,
                    entry.line_width_px,
                    entry.color,
                )
                .with_style(entry.line_style),
            ),
        );
    }
    if let Some(shape) = entry.marker.filter(|_| entry.marker_size_px > 0.0) {
        frame.push(
            CanvasLayerKind::Legend,
            Primitive::Marker(MarkerPrimitive::new(
                left + metrics.handle_length * 0.5,
                center_y,
                shape,
                entry.marker_size_px,
                entry.color,
            )),
        );
    }
    if !entry.label.is_empty() {
        frame.push(
            CanvasLayerKind::Legend,
            Primitive::Text(
                TextPrimitive::new(
                    entry.label.as_str(),
                    left + metrics.handle_length + metrics.handle_pad,
                    center_y,
                    metrics.font_px,
                    style.text_color,
                    TextHAlign::Left,
                )
                .with_v_align(TextVAlign::Middle)
                .with_font_family(style.font_family),
            ),
        );
    }
}
