use std::f64::consts::{FRAC_PI_2, PI};
use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface, LineCap, LineJoin, PdfSurface, SvgSurface};
use pango::FontDescription;
use pango::prelude::*;
use tracing::debug;

use crate::api::FontCatalog;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, FontWeight, LineStrokeStyle, MarkerPrimitive, Primitive, RectPrimitive, RenderFrame,
    Renderer, TextHAlign, TextPrimitive, TextVAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub polylines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
    pub markers_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
///
/// `scale` multiplies every coordinate, which is how a DPI override enlarges
/// a raster export without re-running layout.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    scale: f64,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        Self::with_scale(width, height, 1.0)
    }

    /// Surface of `width × height` frame pixels, drawn at `scale` device
    /// pixels per frame pixel.
    pub fn with_scale(width: i32, height: i32, scale: f64) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ChartError::InvalidData(
                "cairo render scale must be finite and > 0".to_owned(),
            ));
        }

        let device_width = (f64::from(width) * scale).round().max(1.0) as i32;
        let device_height = (f64::from(height) * scale).round().max(1.0) as i32;
        let surface = ImageSurface::create(Format::ARgb32, device_width, device_height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            scale,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    pub fn write_png(&self, path: &Path) -> ChartResult<()> {
        let mut file = File::create(path)?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| ChartError::Backend(format!("failed to write png: {err}")))
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        context.scale(self.scale, self.scale);
        self.last_stats = draw_frame(&context, frame)?;
        Ok(())
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.last_stats = draw_frame(context, frame)?;
        Ok(())
    }
}

/// Writes a PNG of `frame` enlarged by `scale`.
pub fn write_png(frame: &RenderFrame, path: &Path, scale: f64) -> ChartResult<()> {
    let width = viewport_dimension(frame.viewport.width)?;
    let height = viewport_dimension(frame.viewport.height)?;
    let mut renderer = CairoRenderer::with_scale(width, height, scale)?;
    renderer.render(frame)?;
    renderer.write_png(path)
}

/// Writes a vector PDF with a page of `points_per_px` points per frame pixel.
pub fn write_pdf(frame: &RenderFrame, path: &Path, points_per_px: f64) -> ChartResult<()> {
    let width = f64::from(frame.viewport.width) * points_per_px;
    let height = f64::from(frame.viewport.height) * points_per_px;
    let surface = PdfSurface::new(width, height, path)
        .map_err(|err| map_backend_error("failed to create pdf surface", err))?;
    {
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        context.scale(points_per_px, points_per_px);
        draw_frame(&context, frame)?;
    }
    surface.finish();
    Ok(())
}

/// Writes an SVG through cairo, with text converted to outlines by cairo.
pub fn write_cairo_svg(frame: &RenderFrame, path: &Path, points_per_px: f64) -> ChartResult<()> {
    let width = f64::from(frame.viewport.width) * points_per_px;
    let height = f64::from(frame.viewport.height) * points_per_px;
    let surface = SvgSurface::new(width, height, Some(path))
        .map_err(|err| map_backend_error("failed to create svg surface", err))?;
    {
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        context.scale(points_per_px, points_per_px);
        draw_frame(&context, frame)?;
    }
    surface.finish();
    Ok(())
}

fn viewport_dimension(value: u32) -> ChartResult<i32> {
    i32::try_from(value)
        .map_err(|_| ChartError::InvalidData(format!("surface dimension {value} is too large")))
}

fn draw_frame(context: &Context, frame: &RenderFrame) -> ChartResult<CairoRenderStats> {
    frame.validate()?;

    apply_color(context, frame.background);
    context
        .paint()
        .map_err(|err| map_backend_error("failed to clear surface", err))?;
    context.set_line_cap(LineCap::Round);
    context.set_line_join(LineJoin::Round);

    let mut stats = CairoRenderStats::default();
    for layer in &frame.layers {
        if layer.primitives.is_empty() {
            continue;
        }
        context
            .save()
            .map_err(|err| map_backend_error("failed to save cairo state", err))?;
        if let Some(clip) = layer.clip {
            context.rectangle(clip.left, clip.top, clip.width(), clip.height());
            context.clip();
        }
        for primitive in &layer.primitives {
            draw_primitive(context, primitive, &mut stats)?;
        }
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore cairo state", err))?;
    }

    debug!(
        lines = stats.lines_drawn,
        polylines = stats.polylines_drawn,
        texts = stats.texts_drawn,
        "cairo frame drawn"
    );
    Ok(stats)
}

fn draw_primitive(
    context: &Context,
    primitive: &Primitive,
    stats: &mut CairoRenderStats,
) -> ChartResult<()> {
    match primitive {
        Primitive::Line(line) => {
            apply_stroke(context, line.color, line.stroke_width, line.style);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }
        Primitive::Polyline(polyline) => {
            apply_stroke(context, polyline.color, polyline.stroke_width, polyline.style);
            let mut points = polyline.points.iter();
            if let Some((x, y)) = points.next() {
                context.move_to(*x, *y);
            }
            for (x, y) in points {
                context.line_to(*x, *y);
            }
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke polyline", err))?;
            stats.polylines_drawn += 1;
        }
        Primitive::Rect(rect) => {
            draw_rect(context, *rect)?;
            stats.rects_drawn += 1;
        }
        Primitive::Text(text) => {
            draw_text(context, text)?;
            stats.texts_drawn += 1;
        }
        Primitive::Marker(marker) => {
            draw_marker(context, *marker)?;
            stats.markers_drawn += 1;
        }
    }
    Ok(())
}

fn draw_rect(context: &Context, rect: RectPrimitive) -> ChartResult<()> {
    append_rect_path(context, rect);
    apply_color(context, rect.fill_color);
    if rect.border_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        apply_stroke(
            context,
            rect.border_color,
            rect.border_width,
            LineStrokeStyle::Solid,
        );
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke rectangle border", err))?;
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
    }
    Ok(())
}

fn draw_text(context: &Context, text: &TextPrimitive) -> ChartResult<()> {
    let layout = pangocairo::functions::create_layout(context);
    let mut font_description = FontDescription::new();
    font_description.set_family(&text.font_family);
    font_description.set_absolute_size(text.font_size_px * f64::from(pango::SCALE));
    if text.weight == FontWeight::Bold {
        font_description.set_weight(pango::Weight::Bold);
    }
    if text.italic {
        font_description.set_style(pango::Style::Italic);
    }
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, text_height) = layout.pixel_size();
    let (text_width, text_height) = (f64::from(text_width), f64::from(text_height));
    let dx = match text.h_align {
        TextHAlign::Left => 0.0,
        TextHAlign::Center => -text_width / 2.0,
        TextHAlign::Right => -text_width,
    };
    let dy = match text.v_align {
        TextVAlign::Top => 0.0,
        TextVAlign::Middle => -text_height / 2.0,
        TextVAlign::Bottom => -text_height,
    };

    context
        .save()
        .map_err(|err| map_backend_error("failed to save cairo state", err))?;
    context.translate(text.x, text.y);
    if text.rotation_deg != 0.0 {
        context.rotate(-text.rotation_deg.to_radians());
    }
    apply_color(context, text.color);
    context.move_to(dx, dy);
    pangocairo::functions::show_layout(context, &layout);
    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore cairo state", err))
}

fn draw_marker(context: &Context, marker: MarkerPrimitive) -> ChartResult<()> {
    apply_color(context, marker.color);
    if let Some(segments) = marker.stroke_segments() {
        apply_stroke(
            context,
            marker.color,
            marker.stroke_width(),
            LineStrokeStyle::Solid,
        );
        for (x1, y1, x2, y2) in segments {
            context.move_to(x1, y1);
            context.line_to(x2, y2);
        }
        return context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke marker", err));
    }

    context.new_path();
    match marker.polygon_points() {
        Some(points) => {
            for (index, (x, y)) in points.into_iter().enumerate() {
                if index == 0 {
                    context.move_to(x, y);
                } else {
                    context.line_to(x, y);
                }
            }
            context.close_path();
        }
        None => context.arc(marker.x, marker.y, marker.size_px * 0.5, 0.0, 2.0 * PI),
    }
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill marker", err))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn apply_stroke(context: &Context, color: Color, width: f64, style: LineStrokeStyle) {
    apply_color(context, color);
    context.set_line_width(width);
    context.set_dash(&style.dash_pattern(width), 0.0);
}

fn append_rect_path(context: &Context, rect: RectPrimitive) {
    if rect.corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}

/// Font catalog backed by the families fontconfig exposes to Pango.
#[derive(Debug, Clone, Default)]
pub struct PangoFontCatalog {
    families: Vec<String>,
}

impl PangoFontCatalog {
    #[must_use]
    pub fn from_system() -> Self {
        let font_map = pangocairo::FontMap::default();
        let mut families: Vec<String> = font_map
            .list_families()
            .iter()
            .map(|family| family.name().to_string())
            .collect();
        families.sort();
        debug!(count = families.len(), "loaded system font families");
        Self { families }
    }
}

impl FontCatalog for PangoFontCatalog {
    fn has_family(&self, family: &str) -> bool {
        self.families
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(family))
    }
}
