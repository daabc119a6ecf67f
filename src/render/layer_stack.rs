use serde::{Deserialize, Serialize};

/// Draw layers of one chart, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Background,
    Highlight,
    Grid,
    Series,
    SecondarySeries,
    Axis,
    Annotation,
    Legend,
}

impl CanvasLayerKind {
    /// Canonical back-to-front order used by every frame.
    pub const CANONICAL_ORDER: [CanvasLayerKind; 8] = [
        CanvasLayerKind::Background,
        CanvasLayerKind::Highlight,
        CanvasLayerKind::Grid,
        CanvasLayerKind::Series,
        CanvasLayerKind::SecondarySeries,
        CanvasLayerKind::Axis,
        CanvasLayerKind::Annotation,
        CanvasLayerKind::Legend,
    ];

    /// Layers whose content is clipped to the plot area.
    #[must_use]
    pub fn clips_to_plot_area(self) -> bool {
        matches!(
            self,
            CanvasLayerKind::Highlight
                | CanvasLayerKind::Grid
                | CanvasLayerKind::Series
                | CanvasLayerKind::SecondarySeries
        )
    }
}

#[cfg(test)]
mod tests {
    use super::CanvasLayerKind;

    #[test]
    fn highlights_sit_below_grid_and_series() {
        let order = CanvasLayerKind::CANONICAL_ORDER;
        let position = |kind| order.iter().position(|layer| *layer == kind).expect("layer");
        assert!(position(CanvasLayerKind::Highlight) < position(CanvasLayerKind::Grid));
        assert!(position(CanvasLayerKind::Grid) < position(CanvasLayerKind::Series));
        assert!(position(CanvasLayerKind::Series) < position(CanvasLayerKind::Legend));
    }
}
