pub mod categorical;
pub mod format;
pub mod scale;
pub mod smoothing;
pub mod ticks;
pub mod types;

pub use categorical::{Categories, GroupedTicks, group_category_labels, group_token};
pub use format::{ValueFormat, format_tick_value};
pub use scale::{AxisScale, ScaleKind};
pub use smoothing::{SmoothingMethod, apply_smoothing, moving_average};
pub use ticks::{MAX_TICKS, auto_range, data_bounds, nice_ticks};
pub use types::{PlotArea, Viewport};
