mod axis_render_frame_builder;
mod axis_resolver;
mod builder;
mod config;
mod engine;
mod fonts;
mod highlight_resolver;
mod layout_helpers;
mod legend_layout_builder;
mod line_series_render_frame_builder;
mod plot_layout_resolver;
mod session;
mod title_render_frame_builder;

pub use axis_resolver::{AxisTick, ResolvedAxis};
pub use builder::ChartConfigBuilder;
pub use config::{
    AxisConfig, AxisSide, ChartConfig, LegendConfig, LegendLocation, PeriodHighlight,
    SeriesStyle, SubtitleAnchor, SubtitleConfig, TitleAlign, TitleConfig,
};
pub use engine::{ChartEngine, Figure};
pub use fonts::{
    FALLBACK_FONT_FAMILIES, FontCatalog, GENERIC_FONT_FAMILY, StaticFontCatalog,
    is_generic_family, resolve_font_family,
};
pub use highlight_resolver::RenderedHighlight;
pub use legend_layout_builder::{LegendEntry, LegendLayout};
pub use session::{ChartSession, export_figure};
