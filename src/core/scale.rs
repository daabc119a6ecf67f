use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Value-to-position transform of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleKind {
    #[default]
    Linear,
    Log,
}

impl ScaleKind {
    fn transform(self, value: f64) -> Option<f64> {
        match self {
            ScaleKind::Linear => value.is_finite().then_some(value),
            ScaleKind::Log => (value.is_finite() && value > 0.0).then(|| value.log10()),
        }
    }

    fn inverse(self, value: f64) -> f64 {
        match self {
            ScaleKind::Linear => value,
            ScaleKind::Log => 10f64.powf(value),
        }
    }
}

/// Maps a data domain onto a pixel range.
///
/// The pixel range may be inverted (`pixel_start > pixel_end`), which is how
/// vertical axes grow upward in a y-down canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    kind: ScaleKind,
    domain_start: f64,
    domain_end: f64,
    pixel_start: f64,
    pixel_end: f64,
}

impl AxisScale {
    pub fn new(kind: ScaleKind, domain: (f64, f64), pixels: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        let (pixel_start, pixel_end) = pixels;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if kind == ScaleKind::Log && (domain_start <= 0.0 || domain_end <= 0.0) {
            return Err(ChartError::InvalidData(
                "log scale domain must be strictly positive".to_owned(),
            ));
        }
        if !pixel_start.is_finite() || !pixel_end.is_finite() || pixel_start == pixel_end {
            return Err(ChartError::InvalidData(
                "scale pixel range must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            kind,
            domain_start,
            domain_end,
            pixel_start,
            pixel_end,
        })
    }

    #[must_use]
    pub fn kind(self) -> ScaleKind {
        self.kind
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn pixel_range(self) -> (f64, f64) {
        (self.pixel_start, self.pixel_end)
    }

    /// Pixel position of `value`, or `None` when the value has no position on
    /// this scale (non-finite, or non-positive on a log scale).
    #[must_use]
    pub fn to_pixel(self, value: f64) -> Option<f64> {
        let start = self.kind.transform(self.domain_start)?;
        let end = self.kind.transform(self.domain_end)?;
        let value = self.kind.transform(value)?;
        let normalized = (value - start) / (end - start);
        Some(self.pixel_start + normalized * (self.pixel_end - self.pixel_start))
    }

    pub fn from_pixel(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        let start = self.kind.transform(self.domain_start).unwrap_or(self.domain_start);
        let end = self.kind.transform(self.domain_end).unwrap_or(self.domain_end);
        let normalized = (pixel - self.pixel_start) / (self.pixel_end - self.pixel_start);
        Ok(self.kind.inverse(start + normalized * (end - start)))
    }

    /// Inclusive domain check with a small relative tolerance.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        let low = self.domain_start.min(self.domain_end);
        let high = self.domain_start.max(self.domain_end);
        let tolerance = (high - low).abs() * 1e-9;
        value >= low - tolerance && value <= high + tolerance
    }
}
