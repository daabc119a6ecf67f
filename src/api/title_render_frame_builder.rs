use crate::core::{PlotArea, Viewport};
use crate::render::{
    CanvasLayerKind, Color, Primitive, RenderFrame, TextHAlign, TextPrimitive, TextVAlign,
};

use super::layout_helpers::pt_to_px;
use super::plot_layout_resolver::LayoutMetrics;
use super::{SubtitleAnchor, SubtitleConfig, TitleAlign, TitleConfig};

pub(super) struct TitleContext<'a> {
    pub plot: PlotArea,
    pub viewport: Viewport,
    pub metrics: &'a LayoutMetrics,
    pub color: Color,
    pub font_family: &'a str,
}

/// Title above the plot, `y_offset` axes-heights up from the plot bottom.
pub(super) fn push_title(frame: &mut RenderFrame, title: &TitleConfig, ctx: &TitleContext<'_>) {
    let plot = ctx.plot;
    let text = title.text.trim();
    if text.is_empty() {
        return;
    }
    let (x, h_align) = match title.align {
        TitleAlign::Left => (plot.left, TextHAlign::Left),
        TitleAlign::Center => (plot.center_x(), TextHAlign::Center),
        TitleAlign::Right => (plot.right, TextHAlign::Right),
    };
    let y = plot.bottom - title.y_offset * plot.height() - ctx.metrics.title_pad_px;
    let size = pt_to_px(title.font_size, ctx.metrics.dpi);
    frame.push(
        CanvasLayerKind::Annotation,
        Primitive::Text(
            TextPrimitive::new(text, x, y, size, ctx.color, h_align)
                .with_v_align(TextVAlign::Bottom)
                .with_weight(title.weight)
                .with_font_family(ctx.font_family),
        ),
    );
}

/// Subtitle hanging from `title.y_offset + subtitle.y_offset`.
///
/// Chart anchors measure that height in plot fractions; figure anchors
/// measure it in canvas fractions and align to the canvas edges.
pub(super) fn push_subtitle(
    frame: &mut RenderFrame,
    title: &TitleConfig,
    subtitle: &SubtitleConfig,
    ctx: &TitleContext<'_>,
) {
    let plot = ctx.plot;
    let text = subtitle.text.trim();
    if text.is_empty() {
        return;
    }
    let fraction = title.y_offset + subtitle.y_offset;
    let canvas_width = f64::from(ctx.viewport.width);
    let canvas_height = f64::from(ctx.viewport.height);
    let edge_pad = ctx.metrics.font_px * 0.5;

    let (x, y, h_align) = match subtitle.anchor {
        SubtitleAnchor::ChartLeft => (plot.left, plot_y(plot, fraction), TextHAlign::Left),
        SubtitleAnchor::ChartCenter => (plot.center_x(), plot_y(plot, fraction), TextHAlign::Center),
        SubtitleAnchor::ChartRight => (plot.right, plot_y(plot, fraction), TextHAlign::Right),
        SubtitleAnchor::FigureLeft => (
            edge_pad,
            canvas_height * (1.0 - fraction),
            TextHAlign::Left,
        ),
        SubtitleAnchor::FigureRight => (
            canvas_width - edge_pad,
            canvas_height * (1.0 - fraction),
            TextHAlign::Right,
        ),
    };
    let size = pt_to_px(subtitle.font_size, ctx.metrics.dpi);
    frame.push(
        CanvasLayerKind::Annotation,
        Primitive::Text(
            TextPrimitive::new(text, x, y, size, ctx.color, h_align)
                .with_v_align(TextVAlign::Top)
                .with_weight(subtitle.weight)
                .with_font_family(ctx.font_family),
        ),
    );
}

fn plot_y(plot: PlotArea, fraction: f64) -> f64 {
    plot.bottom - fraction * plot.height()
}
