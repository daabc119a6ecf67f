use indexmap::IndexMap;
use tracing::debug;

use crate::data::{CellValue, DataSelection, Sheet};
use crate::error::{ChartError, ChartResult};

/// Row-aligned X and Y sequences ready for plotting.
///
/// Every sequence has the same length and index `i` of each refers to the
/// same source row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlignedSeriesData {
    x_key: String,
    x: Option<Vec<CellValue>>,
    series: IndexMap<String, Vec<CellValue>>,
}

impl AlignedSeriesData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_x(mut self, key: impl Into<String>, values: Vec<CellValue>) -> Self {
        self.x_key = key.into();
        self.x = Some(values);
        self
    }

    #[must_use]
    pub fn with_series(mut self, name: impl Into<String>, values: Vec<CellValue>) -> Self {
        self.series.insert(name.into(), values);
        self
    }

    /// Convenience for numeric series.
    #[must_use]
    pub fn with_numeric_series(self, name: impl Into<String>, values: &[f64]) -> Self {
        self.with_series(name, values.iter().copied().map(CellValue::Number).collect())
    }

    #[must_use]
    pub fn x_key(&self) -> &str {
        &self.x_key
    }

    #[must_use]
    pub fn x(&self) -> Option<&[CellValue]> {
        self.x.as_deref()
    }

    #[must_use]
    pub fn series(&self, name: &str) -> Option<&[CellValue]> {
        self.series.get(name).map(Vec::as_slice)
    }

    pub fn series_names(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x
            .as_ref()
            .map(Vec::len)
            .or_else(|| self.series.values().next().map(Vec::len))
            .unwrap_or(0)
    }

    /// True when there is neither an X sequence nor any series.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.series.is_empty()
    }

    pub fn validate(&self) -> ChartResult<()> {
        let expected = self.len();
        for (name, values) in &self.series {
            if values.len() != expected {
                return Err(ChartError::InvalidData(format!(
                    "series `{name}` has {} values, expected {expected}",
                    values.len()
                )));
            }
        }
        Ok(())
    }
}

/// Selects `x_column` and `y_columns` from `sheet` and drops every row in
/// which any requested column is missing.
///
/// Fails with `ColumnNotFound` naming each requested column the sheet lacks.
pub fn align_columns<S>(
    sheet: &Sheet,
    x_column: &str,
    y_columns: &[S],
) -> ChartResult<AlignedSeriesData>
where
    S: AsRef<str>,
{
    let mut requested: Vec<&str> = Vec::with_capacity(y_columns.len() + 1);
    for name in std::iter::once(x_column).chain(y_columns.iter().map(|name| name.as_ref())) {
        if !requested.contains(&name) {
            requested.push(name);
        }
    }

    let missing: Vec<String> = requested
        .iter()
        .filter(|name| !sheet.has_column(name))
        .map(|name| (*name).to_owned())
        .collect();
    if !missing.is_empty() {
        return Err(ChartError::ColumnNotFound { missing });
    }

    let columns: Vec<&[CellValue]> = requested
        .iter()
        .filter_map(|name| sheet.column(name))
        .collect();
    let row_count = sheet.row_count();
    let keep: Vec<usize> = (0..row_count)
        .filter(|&row| columns.iter().all(|column| !column[row].is_missing()))
        .collect();

    debug!(
        sheet = sheet.name(),
        original_rows = row_count,
        aligned_rows = keep.len(),
        columns = requested.len(),
        "aligned sheet columns"
    );

    let pick = |name: &str| -> Vec<CellValue> {
        sheet
            .column(name)
            .map(|column| keep.iter().map(|&row| column[row].clone()).collect())
            .unwrap_or_default()
    };

    let mut aligned = AlignedSeriesData::new().with_x(x_column, pick(x_column));
    for name in y_columns {
        let name = name.as_ref();
        if !aligned.series.contains_key(name) {
            let values = pick(name);
            aligned.series.insert(name.to_owned(), values);
        }
    }
    Ok(aligned)
}

/// Aligns the X column and the deduplicated Y columns of a selection.
pub fn align_selection(sheet: &Sheet, selection: &DataSelection) -> ChartResult<AlignedSeriesData> {
    align_columns(sheet, &selection.x_column, &selection.y_columns())
}
