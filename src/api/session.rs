use std::path::Path;

use tracing::{debug, warn};

use crate::data::AlignedSeriesData;
use crate::error::{ChartError, ChartResult};
use crate::render::{ExportFormat, ExportScale, export_frame};

use super::{ChartConfig, ChartEngine, Figure};

/// Caller-owned state of an interactive chart: the engine and the last
/// successfully rendered figure.
#[derive(Debug, Default)]
pub struct ChartSession {
    engine: ChartEngine,
    figure: Option<Figure>,
}

impl ChartSession {
    #[must_use]
    pub fn new(engine: ChartEngine) -> Self {
        Self {
            engine,
            figure: None,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &ChartEngine {
        &self.engine
    }

    /// Renders and keeps the figure. On error the previous figure stays.
    pub fn render(&mut self, data: &AlignedSeriesData, config: &ChartConfig) -> ChartResult<&Figure> {
        match self.engine.render_chart(data, config) {
            Ok(figure) => Ok(&*self.figure.insert(figure)),
            Err(err) => {
                warn!(error = %err, kept_previous = self.figure.is_some(), "render failed");
                Err(err)
            }
        }
    }

    #[must_use]
    pub fn figure(&self) -> Option<&Figure> {
        self.figure.as_ref()
    }

    /// Writes the current figure. `format` is `png`, `svg` or `pdf` in any
    /// case; `dpi` overrides the figure DPI for PNG only.
    pub fn export(&self, path: impl AsRef<Path>, format: &str, dpi: Option<u32>) -> ChartResult<()> {
        let figure = self.figure.as_ref().ok_or(ChartError::NoChartRendered)?;
        export_figure(figure, path.as_ref(), format, dpi)
    }

    /// Releases the current figure.
    pub fn clear(&mut self) {
        if self.figure.take().is_some() {
            debug!("chart session cleared");
        }
    }
}

/// Writes `figure` to `path`, creating parent directories as needed.
pub fn export_figure(
    figure: &Figure,
    path: &Path,
    format: &str,
    dpi: Option<u32>,
) -> ChartResult<()> {
    let format: ExportFormat = format.parse()?;
    if dpi == Some(0) {
        return Err(ChartError::InvalidChartInput(
            "export dpi must be greater than zero".to_owned(),
        ));
    }
    let figure_dpi = f64::from(figure.dpi.max(1));
    let raster_scale = match (format.is_raster(), dpi) {
        (true, Some(dpi)) => f64::from(dpi) / figure_dpi,
        _ => 1.0,
    };
    let scale = ExportScale {
        raster_scale,
        points_per_px: 72.0 / figure_dpi,
    };
    export_frame(&figure.frame, path, format, scale)
}

#[cfg(test)]
mod tests {
    use super::ChartSession;
    use crate::error::ChartError;

    #[test]
    fn export_before_render_reports_missing_chart() {
        let session = ChartSession::default();
        let err = session.export("out.gif", "gif", None).expect_err("no chart");
        assert!(matches!(err, ChartError::NoChartRendered));
    }
}
