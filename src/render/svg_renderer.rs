use std::fmt::Write as _;

use crate::error::ChartResult;
use crate::render::{
    Color, FontWeight, LineStrokeStyle, MarkerPrimitive, MarkerShape, Primitive, RenderFrame,
    Renderer, TextHAlign, TextPrimitive, TextVAlign,
};

/// Pure-Rust SVG backend.
///
/// Output is a function of the frame alone: the same frame always produces
/// byte-identical documents.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    physical_size_pt: Option<(f64, f64)>,
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares the physical document size in points; the drawing keeps its
    /// pixel coordinates through `viewBox`.
    #[must_use]
    pub fn with_physical_size(mut self, width_pt: f64, height_pt: f64) -> Self {
        self.physical_size_pt = Some((width_pt, height_pt));
        self
    }

    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.document = frame_to_svg(frame, self.physical_size_pt);
        Ok(())
    }
}

/// Serializes a frame to an SVG document without validating it first.
#[must_use]
pub fn frame_to_svg(frame: &RenderFrame, physical_size_pt: Option<(f64, f64)>) -> String {
    let width = f64::from(frame.viewport.width);
    let height = f64::from(frame.viewport.height);
    let (width_attr, height_attr) = match physical_size_pt {
        Some((width_pt, height_pt)) => (format!("{}pt", num(width_pt)), format!("{}pt", num(height_pt))),
        None => (num(width), num(height)),
    };

    let mut svg = String::with_capacity(16 * 1024);
    svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    svg.push('\n');
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width_attr}" height="{height_attr}" viewBox="0 0 {} {}">"#,
        num(width),
        num(height)
    );

    let clipped: Vec<_> = frame
        .layers
        .iter()
        .enumerate()
        .filter_map(|(index, layer)| layer.clip.map(|clip| (index, clip)))
        .collect();
    if !clipped.is_empty() {
        svg.push_str("<defs>\n");
        for (index, clip) in &clipped {
            let _ = writeln!(
                svg,
                r#"<clipPath id="clip-{index}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath>"#,
                num(clip.left),
                num(clip.top),
                num(clip.width()),
                num(clip.height())
            );
        }
        svg.push_str("</defs>\n");
    }

    let _ = writeln!(
        svg,
        r#"<rect x="0" y="0" width="{}" height="{}"{}/>"#,
        num(width),
        num(height),
        fill_attrs(frame.background)
    );

    for (index, layer) in frame.layers.iter().enumerate() {
        if layer.primitives.is_empty() {
            continue;
        }
        if layer.clip.is_some() {
            let _ = writeln!(svg, r#"<g clip-path="url(#clip-{index})">"#);
        } else {
            svg.push_str("<g>\n");
        }
        for primitive in &layer.primitives {
            write_primitive(&mut svg, primitive);
            svg.push('\n');
        }
        svg.push_str("</g>\n");
    }

    svg.push_str("</svg>\n");
    svg
}

fn write_primitive(svg: &mut String, primitive: &Primitive) {
    match primitive {
        Primitive::Line(line) => {
            let _ = write!(
                svg,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
                num(line.x1),
                num(line.y1),
                num(line.x2),
                num(line.y2),
                stroke_attrs(line.color, line.stroke_width, line.style)
            );
        }
        Primitive::Polyline(polyline) => {
            let points = polyline
                .points
                .iter()
                .map(|(x, y)| format!("{},{}", num(*x), num(*y)))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = write!(
                svg,
                r#"<polyline points="{points}" fill="none" stroke-linejoin="round" stroke-linecap="round"{}/>"#,
                stroke_attrs(polyline.color, polyline.stroke_width, polyline.style)
            );
        }
        Primitive::Rect(rect) => {
            let _ = write!(
                svg,
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                num(rect.x),
                num(rect.y),
                num(rect.width),
                num(rect.height)
            );
            if rect.corner_radius > 0.0 {
                let radius = rect
                    .corner_radius
                    .min(rect.width * 0.5)
                    .min(rect.height * 0.5);
                let _ = write!(svg, r#" rx="{0}" ry="{0}""#, num(radius));
            }
            svg.push_str(&fill_attrs(rect.fill_color));
            if rect.border_width > 0.0 {
                svg.push_str(&stroke_attrs(
                    rect.border_color,
                    rect.border_width,
                    LineStrokeStyle::Solid,
                ));
            }
            svg.push_str("/>");
        }
        Primitive::Text(text) => write_text(svg, text),
        Primitive::Marker(marker) => write_marker(svg, *marker),
    }
}

fn write_text(svg: &mut String, text: &TextPrimitive) {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    let baseline = match text.v_align {
        TextVAlign::Top => "hanging",
        TextVAlign::Middle => "central",
        TextVAlign::Bottom => "text-after-edge",
    };
    let _ = write!(
        svg,
        r#"<text x="{}" y="{}" font-family="{}" font-size="{}""#,
        num(text.x),
        num(text.y),
        escape_xml(&text.font_family),
        num(text.font_size_px)
    );
    if text.weight == FontWeight::Bold {
        svg.push_str(r#" font-weight="bold""#);
    }
    if text.italic {
        svg.push_str(r#" font-style="italic""#);
    }
    let _ = write!(
        svg,
        r#" text-anchor="{anchor}" dominant-baseline="{baseline}"{}"#,
        fill_attrs(text.color)
    );
    if text.rotation_deg != 0.0 {
        let _ = write!(
            svg,
            r#" transform="rotate({} {} {})""#,
            num(-text.rotation_deg),
            num(text.x),
            num(text.y)
        );
    }
    let _ = write!(svg, ">{}</text>", escape_xml(&text.text));
}

fn write_marker(svg: &mut String, marker: MarkerPrimitive) {
    if let Some(points) = marker.polygon_points() {
        let points = points
            .iter()
            .map(|(x, y)| format!("{},{}", num(*x), num(*y)))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = write!(svg, r#"<polygon points="{points}"{}/>"#, fill_attrs(marker.color));
        return;
    }
    if let Some(segments) = marker.stroke_segments() {
        let path = segments
            .iter()
            .map(|(x1, y1, x2, y2)| format!("M{},{} L{},{}", num(*x1), num(*y1), num(*x2), num(*y2)))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = write!(
            svg,
            r#"<path d="{path}" fill="none"{}/>"#,
            stroke_attrs(marker.color, marker.stroke_width(), LineStrokeStyle::Solid)
        );
        return;
    }
    debug_assert_eq!(marker.shape, MarkerShape::Circle);
    let _ = write!(
        svg,
        r#"<circle cx="{}" cy="{}" r="{}"{}/>"#,
        num(marker.x),
        num(marker.y),
        num(marker.size_px * 0.5),
        fill_attrs(marker.color)
    );
}

fn fill_attrs(color: Color) -> String {
    let mut attrs = format!(r#" fill="{}""#, color.to_rgb_hex());
    if color.alpha < 1.0 {
        let _ = write!(attrs, r#" fill-opacity="{}""#, num(color.alpha));
    }
    attrs
}

fn stroke_attrs(color: Color, width: f64, style: LineStrokeStyle) -> String {
    let mut attrs = format!(
        r#" stroke="{}" stroke-width="{}""#,
        color.to_rgb_hex(),
        num(width)
    );
    if color.alpha < 1.0 {
        let _ = write!(attrs, r#" stroke-opacity="{}""#, num(color.alpha));
    }
    let pattern = style.dash_pattern(width);
    if !pattern.is_empty() {
        let dashes = pattern.iter().map(|len| num(*len)).collect::<Vec<_>>().join(",");
        let _ = write!(attrs, r#" stroke-dasharray="{dashes}""#);
    }
    attrs
}

/// Fixed three-decimal output with trailing zeros removed.
fn num(value: f64) -> String {
    let text = format!("{value:.3}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_owned(),
        _ => trimmed.to_owned(),
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::{SvgRenderer, escape_xml, num};
    use crate::core::{PlotArea, Viewport};
    use crate::render::{
        CanvasLayerKind, Color, LineStrokeStyle, MarkerPrimitive, MarkerShape, PolylinePrimitive,
        Primitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
    };

    fn sample_frame() -> RenderFrame {
        let mut frame = RenderFrame::new(Viewport::new(200, 100), Color::WHITE);
        frame.set_clip(CanvasLayerKind::Series, PlotArea::new(10.0, 10.0, 190.0, 90.0));
        frame.push(
            CanvasLayerKind::Series,
            Primitive::Polyline(PolylinePrimitive::new(
                vec![(10.0, 90.0), (100.0, 50.0), (190.0, 10.0)],
                2.0,
                Color::from_rgb_u32(0x1F77B4),
                LineStrokeStyle::Dashed,
            )),
        );
        frame.push(
            CanvasLayerKind::Series,
            Primitive::Marker(MarkerPrimitive::new(
                100.0,
                50.0,
                MarkerShape::Diamond,
                6.0,
                Color::BLACK,
            )),
        );
        frame.push(
            CanvasLayerKind::Annotation,
            Primitive::Text(
                TextPrimitive::new("A & B", 100.0, 5.0, 12.0, Color::BLACK, TextHAlign::Center)
                    .with_rotation(90.0),
            ),
        );
        frame
    }

    #[test]
    fn renders_clip_paths_dashes_and_escaped_text() {
        let mut renderer = SvgRenderer::new();
        renderer.render(&sample_frame()).expect("render svg");
        let svg = renderer.document();
        assert!(svg.contains("<svg"));
        assert!(svg.contains(r#"clip-path="url(#clip-3)""#));
        assert!(svg.contains("stroke-dasharray"));
        assert!(svg.contains("<polygon"));
        assert!(svg.contains("A &amp; B"));
        assert!(svg.contains("rotate(-90 100 5)"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn physical_size_is_written_in_points() {
        let mut renderer = SvgRenderer::new().with_physical_size(720.0, 432.0);
        renderer.render(&sample_frame()).expect("render svg");
        assert!(renderer.document().contains(r#"width="720pt""#));
        assert!(renderer.document().contains(r#"viewBox="0 0 200 100""#));
    }

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(num(1.5), "1.5");
        assert_eq!(num(2.0), "2");
        assert_eq!(num(-0.0001), "0");
        assert_eq!(escape_xml("<a>"), "&lt;a&gt;");
    }
}
