mod export;
mod frame;
mod layer_stack;
mod null_renderer;
mod primitives;
mod svg_renderer;

pub use export::{ExportFormat, ExportScale, export_frame};
pub use frame::{FrameLayer, Primitive, RenderFrame};
pub use layer_stack::CanvasLayerKind;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, FontWeight, LinePrimitive, LineStrokeStyle, MarkerPrimitive, MarkerShape,
    PolylinePrimitive, RectPrimitive, TextHAlign, TextPrimitive, TextVAlign,
};
pub use svg_renderer::{SvgRenderer, frame_to_svg};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart configuration and layout logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{
    CairoContextRenderer, CairoRenderStats, CairoRenderer, PangoFontCatalog, write_cairo_svg,
};
