use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, frame_to_svg};

/// Output formats a rendered figure can be written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Png,
    Svg,
    Pdf,
}

impl ExportFormat {
    pub const SUPPORTED: [&'static str; 3] = ["png", "svg", "pdf"];

    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Svg => "svg",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// Raster formats honour a DPI override; vector formats ignore it.
    #[must_use]
    pub fn is_raster(self) -> bool {
        self == ExportFormat::Png
    }

    /// Format implied by a path's extension, if recognised.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|extension| extension.to_str())
            .and_then(|extension| extension.parse().ok())
    }
}

impl FromStr for ExportFormat {
    type Err = ChartError;

    fn from_str(tag: &str) -> ChartResult<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(ExportFormat::Png),
            "svg" => Ok(ExportFormat::Svg),
            "pdf" => Ok(ExportFormat::Pdf),
            _ => Err(ChartError::UnsupportedFormat {
                format: tag.to_owned(),
                supported: ExportFormat::SUPPORTED.to_vec(),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Device mapping for one export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportScale {
    /// Raster pixels per frame pixel.
    pub raster_scale: f64,
    /// Vector points per frame pixel.
    pub points_per_px: f64,
}

impl ExportScale {
    #[must_use]
    pub fn identity() -> Self {
        Self {
            raster_scale: 1.0,
            points_per_px: 1.0,
        }
    }
}

/// Writes `frame` to `path`, creating missing parent directories first.
pub fn export_frame(
    frame: &RenderFrame,
    path: &Path,
    format: ExportFormat,
    scale: ExportScale,
) -> ChartResult<()> {
    frame.validate()?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    debug!(
        path = %path.display(),
        %format,
        raster_scale = scale.raster_scale,
        points_per_px = scale.points_per_px,
        "exporting frame"
    );

    match format {
        ExportFormat::Svg => {
            let width_pt = f64::from(frame.viewport.width) * scale.points_per_px;
            let height_pt = f64::from(frame.viewport.height) * scale.points_per_px;
            fs::write(path, frame_to_svg(frame, Some((width_pt, height_pt))))?;
        }
        ExportFormat::Png => write_png(frame, path, scale.raster_scale)?,
        ExportFormat::Pdf => write_pdf(frame, path, scale.points_per_px)?,
    }

    info!(path = %path.display(), %format, "chart exported");
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn write_png(frame: &RenderFrame, path: &Path, raster_scale: f64) -> ChartResult<()> {
    crate::render::cairo_backend::write_png(frame, path, raster_scale)
}

#[cfg(not(feature = "cairo-backend"))]
fn write_png(_frame: &RenderFrame, _path: &Path, _raster_scale: f64) -> ChartResult<()> {
    Err(ChartError::BackendUnavailable("png".to_owned()))
}

#[cfg(feature = "cairo-backend")]
fn write_pdf(frame: &RenderFrame, path: &Path, points_per_px: f64) -> ChartResult<()> {
    crate::render::cairo_backend::write_pdf(frame, path, points_per_px)
}

#[cfg(not(feature = "cairo-backend"))]
fn write_pdf(_frame: &RenderFrame, _path: &Path, _points_per_px: f64) -> ChartResult<()> {
    Err(ChartError::BackendUnavailable("pdf".to_owned()))
}
