use tracing::warn;

use crate::core::{AxisScale, Categories, PlotArea};
use crate::data::AxisValue;
use crate::render::{
    CanvasLayerKind, Primitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive, TextVAlign,
};

use super::PeriodHighlight;
use super::layout_helpers::pt_to_px;

const LABEL_FONT_PT: f64 = 9.0;
const LABEL_ALPHA: f64 = 0.6;
/// Label sits this far below the top of the Y range, as a share of it.
const LABEL_TOP_INSET: f64 = 0.05;

/// A period band that made it onto the chart, in X axis units.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedHighlight {
    pub name: String,
    pub start: f64,
    pub end: f64,
    pub label: Option<String>,
}

/// Position of one highlight bound on the X axis.
pub(super) fn resolve_bound(value: &AxisValue, categories: Option<&Categories>) -> Option<f64> {
    match categories {
        Some(categories) => categories.position_of(value).map(|position| position as f64),
        None => value.as_f64(),
    }
}

pub(super) struct HighlightOutcome {
    pub rendered: Vec<RenderedHighlight>,
    pub skipped: Vec<String>,
}

/// Shades every resolvable highlight across the full plot height.
///
/// Highlights with a missing or unresolvable bound are skipped and named in
/// the outcome; they never fail the render.
pub(super) fn push_highlights(
    frame: &mut RenderFrame,
    highlights: &[PeriodHighlight],
    categories: Option<&Categories>,
    x_scale: AxisScale,
    plot: PlotArea,
    dpi: f64,
    font_family: &str,
) -> HighlightOutcome {
    let mut outcome = HighlightOutcome {
        rendered: Vec::new(),
        skipped: Vec::new(),
    };

    for highlight in highlights {
        let bounds = highlight
            .start
            .as_ref()
            .zip(highlight.end.as_ref())
            .and_then(|(start, end)| {
                Some((resolve_bound(start, categories)?, resolve_bound(end, categories)?))
            });
        let pixels = bounds.and_then(|(start, end)| {
            let start_px = x_scale.to_pixel(start).filter(|pixel| pixel.is_finite())?;
            let end_px = x_scale.to_pixel(end).filter(|pixel| pixel.is_finite())?;
            // Finite but huge bounds can still overflow the band width.
            let span_is_finite =
                (start_px - end_px).is_finite() && (start_px + end_px).is_finite();
            span_is_finite.then_some((start_px, end_px))
        });
        let (Some((start, end)), Some((start_px, end_px))) = (bounds, pixels) else {
            warn!(
                highlight = %highlight.name,
                start = ?highlight.start,
                end = ?highlight.end,
                "period highlight bounds unresolvable; skipping"
            );
            outcome.skipped.push(highlight.name.clone());
            continue;
        };

        let left = start_px.min(end_px).clamp(plot.left, plot.right);
        let right = start_px.max(end_px).clamp(plot.left, plot.right);
        let color = highlight.color.with_alpha(highlight.alpha);
        frame.push(
            CanvasLayerKind::Highlight,
            Primitive::Rect(RectPrimitive::new(
                left,
                plot.top,
                right - left,
                plot.height(),
                color,
            )),
        );

        let label = highlight
            .label
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty());
        if let Some(label) = label {
            frame.push(
                CanvasLayerKind::Annotation,
                Primitive::Text(
                    TextPrimitive::new(
                        label,
                        (start_px + end_px) * 0.5,
                        plot.top + plot.height() * LABEL_TOP_INSET,
                        pt_to_px(LABEL_FONT_PT, dpi),
                        highlight.color.with_alpha(LABEL_ALPHA),
                        TextHAlign::Center,
                    )
                    .with_v_align(TextVAlign::Top)
                    .with_italic(true)
                    .with_font_family(font_family),
                ),
            );
        }

        outcome.rendered.push(RenderedHighlight {
            name: highlight.name.clone(),
            start,
            end,
            label: label.map(str::to_owned),
        });
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::resolve_bound;
    use crate::core::Categories;
    use crate::data::{AxisValue, CellValue};

    #[test]
    fn numeric_axis_coerces_numbers_and_numeric_text() {
        assert_eq!(resolve_bound(&AxisValue::from(2008), None), Some(2008.0));
        assert_eq!(resolve_bound(&AxisValue::from("2009"), None), Some(2009.0));
        assert_eq!(resolve_bound(&AxisValue::from("late"), None), None);
    }

    #[test]
    fn categorical_axis_matches_number_then_label_then_last() {
        let x = vec![
            CellValue::from(2007.0),
            CellValue::from(2008.0),
            CellValue::from("2009 Q1"),
        ];
        let categories = Categories::resolve(&x);
        assert_eq!(resolve_bound(&AxisValue::from(2008), Some(&categories)), Some(1.0));
        assert_eq!(resolve_bound(&AxisValue::from("2009 Q1"), Some(&categories)), Some(2.0));
        assert_eq!(resolve_bound(&AxisValue::from("2031"), Some(&categories)), Some(2.0));
    }
}
