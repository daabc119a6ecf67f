use crate::core::PlotArea;
use crate::render::{
    CanvasLayerKind, Color, LinePrimitive, LineStrokeStyle, Primitive, RenderFrame, TextHAlign,
    TextPrimitive, TextVAlign,
};

use super::AxisConfig;
use super::axis_resolver::ResolvedAxis;
use super::layout_helpers::max_text_extent_px;
use super::plot_layout_resolver::LayoutMetrics;

/// Plot edge an axis is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum AxisEdge {
    Bottom,
    Left,
    Right,
}

pub(super) struct AxisDrawInput<'a> {
    pub config: &'a AxisConfig,
    pub resolved: &'a ResolvedAxis,
    pub edge: AxisEdge,
    /// False for the secondary axis, which never draws a grid.
    pub allow_grid: bool,
}

/// Spines around the plot area; the right spine takes the secondary axis
/// colour when there is one.
pub(super) fn push_spines(
    frame: &mut RenderFrame,
    plot: PlotArea,
    metrics: &LayoutMetrics,
    x_color: Color,
    left_color: Color,
    right_color: Color,
) {
    let width = metrics.spine_width_px;
    let spines = [
        (plot.left, plot.bottom, plot.right, plot.bottom, x_color),
        (plot.left, plot.top, plot.right, plot.top, x_color),
        (plot.left, plot.top, plot.left, plot.bottom, left_color),
        (plot.right, plot.top, plot.right, plot.bottom, right_color),
    ];
    for (x1, y1, x2, y2, color) in spines {
        frame.push(
            CanvasLayerKind::Axis,
            Primitive::Line(LinePrimitive::new(x1, y1, x2, y2, width, color)),
        );
    }
}

/// Grid lines, tick marks, tick labels and the axis label of one axis.
pub(super) fn push_axis(
    frame: &mut RenderFrame,
    input: &AxisDrawInput<'_>,
    plot: PlotArea,
    metrics: &LayoutMetrics,
    font_family: &str,
) {
    let config = input.config;
    let resolved = input.resolved;
    let major: Vec<(f64, Option<&str>)> = resolved
        .major_ticks
        .iter()
        .filter_map(|tick| {
            resolved
                .scale
                .to_pixel(tick.position)
                .filter(|pixel| pixel.is_finite())
                .map(|pixel| (pixel, tick.label.as_deref()))
        })
        .collect();
    let minor: Vec<f64> = resolved
        .minor_ticks
        .iter()
        .filter_map(|position| resolved.scale.to_pixel(*position))
        .filter(|pixel| pixel.is_finite())
        .collect();

    if input.allow_grid && config.grid {
        let major_color = config.grid_color.with_alpha(config.grid_alpha);
        for (pixel, _) in &major {
            push_grid_line(frame, input.edge, plot, *pixel, metrics, major_color, config.grid_style);
        }
        let minor_color = config.grid_color.with_alpha(config.grid_alpha * 0.5);
        for pixel in &minor {
            push_grid_line(frame, input.edge, plot, *pixel, metrics, minor_color, LineStrokeStyle::Dotted);
        }
    }

    for (pixel, _) in &major {
        push_tick_mark(frame, input.edge, plot, *pixel, metrics.tick_length_px, metrics, config.color);
    }
    for pixel in &minor {
        push_tick_mark(frame, input.edge, plot, *pixel, metrics.minor_tick_length_px, metrics, config.color);
    }

    let offset = metrics.tick_label_offset_px();
    for (pixel, label) in &major {
        let Some(label) = label.filter(|label| !label.is_empty()) else {
            continue;
        };
        let text = tick_label(input.edge, plot, *pixel, offset, config.tick_rotation);
        frame.push(
            CanvasLayerKind::Axis,
            Primitive::Text(
                TextPrimitive::new(label, text.x, text.y, metrics.font_px, config.color, text.h_align)
                    .with_v_align(text.v_align)
                    .with_rotation(config.tick_rotation)
                    .with_font_family(font_family),
            ),
        );
    }

    push_axis_label(frame, input, plot, metrics, font_family);
}

fn push_grid_line(
    frame: &mut RenderFrame,
    edge: AxisEdge,
    plot: PlotArea,
    pixel: f64,
    metrics: &LayoutMetrics,
    color: Color,
    style: LineStrokeStyle,
) {
    let line = match edge {
        AxisEdge::Bottom => LinePrimitive::new(pixel, plot.top, pixel, plot.bottom, metrics.grid_width_px, color),
        AxisEdge::Left | AxisEdge::Right => {
            LinePrimitive::new(plot.left, pixel, plot.right, pixel, metrics.grid_width_px, color)
        }
    };
    frame.push(CanvasLayerKind::Grid, Primitive::Line(line.with_style(style)));
}

fn push_tick_mark(
    frame: &mut RenderFrame,
    edge: AxisEdge,
    plot: PlotArea,
    pixel: f64,
    length: f64,
    metrics: &LayoutMetrics,
    color: Color,
) {
    let (x1, y1, x2, y2) = match edge {
        AxisEdge::Bottom => (pixel, plot.bottom, pixel, plot.bottom + length),
        AxisEdge::Left => (plot.left - length, pixel, plot.left, pixel),
        AxisEdge::Right => (plot.right, pixel, plot.right + length, pixel),
    };
    frame.push(
        CanvasLayerKind::Axis,
        Primitive::Line(LinePrimitive::new(x1, y1, x2, y2, metrics.tick_width_px, color)),
    );
}

struct TextAnchor {
    x: f64,
    y: f64,
    h_align: TextHAlign,
    v_align: TextVAlign,
}

fn tick_label(edge: AxisEdge, plot: PlotArea, pixel: f64, offset: f64, rotation: f64) -> TextAnchor {
    match edge {
        AxisEdge::Bottom => {
            let (h_align, v_align) = if rotation > 0.0 {
                (TextHAlign::Right, TextVAlign::Middle)
            } else if rotation < 0.0 {
                (TextHAlign::Left, TextVAlign::Middle)
            } else {
                (TextHAlign::Center, TextVAlign::Top)
            };
            TextAnchor {
                x: pixel,
                y: plot.bottom + offset,
                h_align,
                v_align,
            }
        }
        AxisEdge::Left => TextAnchor {
            x: plot.left - offset,
            y: pixel,
            h_align: TextHAlign::Right,
            v_align: TextVAlign::Middle,
        },
        AxisEdge::Right => TextAnchor {
            x: plot.right + offset,
            y: pixel,
            h_align: TextHAlign::Left,
            v_align: TextVAlign::Middle,
        },
    }
}

fn push_axis_label(
    frame: &mut RenderFrame,
    input: &AxisDrawInput<'_>,
    plot: PlotArea,
    metrics: &LayoutMetrics,
    font_family: &str,
) {
    let config = input.config;
    let label = config.label.trim();
    if label.is_empty() {
        return;
    }

    let (tick_width, tick_height) = max_text_extent_px(
        input.resolved.tick_labels(),
        metrics.font_px,
        config.tick_rotation,
    );
    let offset = metrics.tick_label_offset_px() + metrics.label_pad_px;
    let text = match input.edge {
        AxisEdge::Bottom => TextPrimitive::new(
            label,
            plot.center_x(),
            plot.bottom + offset + tick_height,
            metrics.font_px,
            config.color,
            TextHAlign::Center,
        )
        .with_v_align(TextVAlign::Top),
        AxisEdge::Left => TextPrimitive::new(
            label,
            plot.left - offset - tick_width,
            plot.center_y(),
            metrics.font_px,
            config.color,
            TextHAlign::Center,
        )
        .with_v_align(TextVAlign::Bottom)
        .with_rotation(90.0),
        AxisEdge::Right => TextPrimitive::new(
            label,
            plot.right + offset + tick_width,
            plot.center_y(),
            metrics.font_px,
            config.color,
            TextHAlign::Center,
        )
        .with_v_align(TextVAlign::Top)
        .with_rotation(90.0),
    };
    frame.push(
        CanvasLayerKind::Axis,
        Primitive::Text(
            text.with_weight(config.label_weight)
                .with_font_family(font_family),
        ),
    );
}
