use crate::core::AxisScale;
use crate::render::{
    CanvasLayerKind, MarkerPrimitive, PolylinePrimitive, Primitive, RenderFrame,
};

use super::SeriesStyle;
use super::layout_helpers::pt_to_px;

/// One configured series with its (possibly smoothed) Y values.
#[derive(Debug, Clone)]
pub(super) struct PlottedSeries<'a> {
    pub style: &'a SeriesStyle,
    pub values: Vec<f64>,
}

/// Pixel position of every row; `None` where X or Y has no position.
pub(super) fn project_series_points(
    x_values: &[f64],
    x_scale: AxisScale,
    y_values: &[f64],
    y_scale: AxisScale,
) -> Vec<Option<(f64, f64)>> {
    x_values
        .iter()
        .zip(y_values)
        .map(|(&x, &y)| {
            let px = x_scale.to_pixel(x)?;
            let py = y_scale.to_pixel(y)?;
            (px.is_finite() && py.is_finite()).then_some((px, py))
        })
        .collect()
}

/// Line runs split at gaps, then one marker per finite point.
pub(super) fn push_line_series(
    frame: &mut RenderFrame,
    layer: CanvasLayerKind,
    style: &SeriesStyle,
    points: &[Option<(f64, f64)>],
    dpi: f64,
) {
    let width_px = pt_to_px(style.line_width, dpi);
    for run in points.split(Option::is_none) {
        if run.len() < 2 {
            continue;
        }
        let run: Vec<(f64, f64)> = run.iter().flatten().copied().collect();
        frame.push(
            layer,
            Primitive::Polyline(PolylinePrimitive::new(
                run,
                width_px,
                style.color,
                style.line_style,
            )),
        );
    }

    let Some(shape) = style.marker else {
        return;
    };
    let size_px = pt_to_px(style.marker_size, dpi);
    if !size_px.is_finite() || size_px <= 0.0 {
        return;
    }
    for &(x, y) in points.iter().flatten() {
        frame.push(
            layer,
            Primitive::Marker(MarkerPrimitive::new(x, y, shape, size_px, style.color)),
        );
    }
}
