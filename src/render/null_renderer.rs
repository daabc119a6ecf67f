use crate::error::ChartResult;
use crate::render::{Primitive, RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// without a drawing backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_line_count: usize,
    pub last_polyline_count: usize,
    pub last_text_count: usize,
    pub last_rect_count: usize,
    pub last_marker_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        *self = NullRenderer::default();
        for primitive in frame.primitives() {
            match primitive {
                Primitive::Line(_) => self.last_line_count += 1,
                Primitive::Polyline(_) => self.last_polyline_count += 1,
                Primitive::Text(_) => self.last_text_count += 1,
                Primitive::Rect(_) => self.last_rect_count += 1,
                Primitive::Marker(_) => self.last_marker_count += 1,
            }
        }
        Ok(())
    }
}
