use crate::core::{PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CanvasLayerKind, Color, LinePrimitive, MarkerPrimitive, PolylinePrimitive, RectPrimitive,
    TextPrimitive,
};

/// One drawable item of a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line(LinePrimitive),
    Polyline(PolylinePrimitive),
    Rect(RectPrimitive),
    Text(TextPrimitive),
    Marker(MarkerPrimitive),
}

impl Primitive {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Primitive::Line(line) => line.validate(),
            Primitive::Polyline(polyline) => polyline.validate(),
            Primitive::Rect(rect) => rect.validate(),
            Primitive::Text(text) => text.validate(),
            Primitive::Marker(marker) => marker.validate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayer {
    pub kind: CanvasLayerKind,
    pub clip: Option<PlotArea>,
    pub primitives: Vec<Primitive>,
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Layers are kept in `CanvasLayerKind::CANONICAL_ORDER`; primitives inside a
/// layer draw in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub background: Color,
    pub layers: Vec<FrameLayer>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, background: Color) -> Self {
        Self {
            viewport,
            background,
            layers: CanvasLayerKind::CANONICAL_ORDER
                .iter()
                .map(|&kind| FrameLayer {
                    kind,
                    clip: None,
                    primitives: Vec::new(),
                })
                .collect(),
        }
    }

    pub fn push(&mut self, kind: CanvasLayerKind, primitive: Primitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.primitives.push(primitive);
        }
    }

    #[must_use]
    pub fn with_primitive(mut self, kind: CanvasLayerKind, primitive: Primitive) -> Self {
        self.push(kind, primitive);
        self
    }

    pub fn set_clip(&mut self, kind: CanvasLayerKind, clip: PlotArea) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.clip = Some(clip);
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&FrameLayer> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    fn layer_mut(&mut self, kind: CanvasLayerKind) -> Option<&mut FrameLayer> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }

    /// Every primitive in draw order.
    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.layers.iter().flat_map(|layer| layer.primitives.iter())
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.primitives().filter_map(|primitive| match primitive {
            Primitive::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = &PolylinePrimitive> {
        self.primitives().filter_map(|primitive| match primitive {
            Primitive::Polyline(polyline) => Some(polyline),
            _ => None,
        })
    }

    #[must_use]
    pub fn layer_len(&self, kind: CanvasLayerKind) -> usize {
        self.layer(kind).map_or(0, |layer| layer.primitives.len())
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.background.validate()?;

        for layer in &self.layers {
            if let Some(clip) = layer.clip {
                if !clip.is_valid() {
                    return Err(ChartError::InvalidData(format!(
                        "clip region of {:?} layer must be finite and non-empty",
                        layer.kind
                    )));
                }
            }
            for primitive in &layer.primitives {
                primitive.validate()?;
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(|layer| layer.primitives.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::{Primitive, RenderFrame};
    use crate::core::{PlotArea, Viewport};
    use crate::render::{CanvasLayerKind, Color, LinePrimitive, TextHAlign, TextPrimitive};

    #[test]
    fn primitives_follow_layer_order_not_insertion_order() {
        let mut frame = RenderFrame::new(Viewport::new(100, 100), Color::WHITE);
        frame.push(
            CanvasLayerKind::Axis,
            Primitive::Text(TextPrimitive::new("a", 1.0, 1.0, 10.0, Color::BLACK, TextHAlign::Left)),
        );
        frame.push(
            CanvasLayerKind::Grid,
            Primitive::Line(LinePrimitive::new(0.0, 0.0, 1.0, 1.0, 1.0, Color::BLACK)),
        );
        let first = frame.primitives().next().expect("primitive");
        assert!(matches!(first, Primitive::Line(_)));
    }

    #[test]
    fn invalid_clip_fails_validation() {
        let mut frame = RenderFrame::new(Viewport::new(100, 100), Color::WHITE);
        frame.set_clip(CanvasLayerKind::Series, PlotArea::new(10.0, 10.0, 10.0, 50.0));
        assert!(frame.validate().is_err());
    }
}
