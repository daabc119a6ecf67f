//! Data source adapter: loaded sheets, column selection and row alignment.

mod aligned;
mod selection;
mod sheet;
mod value;

pub use aligned::{AlignedSeriesData, align_columns, align_selection};
pub use selection::DataSelection;
pub use sheet::{ColumnKind, ColumnSummary, Sheet, SheetSummary, Workbook};
pub use value::{AxisValue, CellValue};

pub(crate) use value::CategoryKey;
