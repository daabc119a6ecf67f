//! sheet-chart: configuration-driven line charts from spreadsheet columns.
//!
//! The pipeline is split into a data adapter (`data`), pure scale and tick
//! math (`core`), the chart configuration and render engine (`api`), named
//! presets (`theme`) and backend-agnostic drawing (`render`).

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod render;
pub mod telemetry;
pub mod theme;

pub use api::{ChartConfig, ChartConfigBuilder, ChartEngine, ChartSession, Figure};
pub use data::{AlignedSeriesData, DataSelection, Sheet, Workbook};
pub use error::{ChartError, ChartResult};
