use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::CellValue;
use crate::error::{ChartError, ChartResult};

/// Kind of a column inferred from its non-missing cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Numeric,
    Text,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    pub kind: ColumnKind,
    pub missing: usize,
}

/// Shape of a loaded sheet, as shown in a file panel before charting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSummary {
    pub name: String,
    pub rows: usize,
    pub columns: Vec<ColumnSummary>,
}

impl SheetSummary {
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }
}

#[derive(Debug, Deserialize)]
struct RawSheet {
    #[serde(default)]
    name: String,
    #[serde(default)]
    columns: IndexMap<String, Vec<CellValue>>,
}

/// One table of named columns, every column holding the same number of rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSheet")]
pub struct Sheet {
    name: String,
    columns: IndexMap<String, Vec<CellValue>>,
}

impl TryFrom<RawSheet> for Sheet {
    type Error = ChartError;

    fn try_from(raw: RawSheet) -> ChartResult<Self> {
        Self::from_columns(raw.name, raw.columns)
    }
}

impl Sheet {
    /// Builds a sheet from named columns. Names are trimmed; columns must all
    /// have the same length and names must stay unique after trimming.
    pub fn from_columns<N, I>(name: impl Into<String>, columns: I) -> ChartResult<Self>
    where
        N: AsRef<str>,
        I: IntoIterator<Item = (N, Vec<CellValue>)>,
    {
        let mut map = IndexMap::new();
        let mut expected_len = None;

        for (column_name, values) in columns {
            let column_name = column_name.as_ref().trim().to_owned();
            if column_name.is_empty() {
                return Err(ChartError::InvalidData(
                    "column names must not be empty".to_owned(),
                ));
            }
            match expected_len {
                None => expected_len = Some(values.len()),
                Some(len) if len != values.len() => {
                    return Err(ChartError::InvalidData(format!(
                        "column `{column_name}` has {} rows, expected {len}",
                        values.len()
                    )));
                }
                Some(_) => {}
            }
            if map.insert(column_name.clone(), values).is_some() {
                return Err(ChartError::InvalidData(format!(
                    "duplicate column `{column_name}`"
                )));
            }
        }

        Ok(Self {
            name: name.into(),
            columns: map,
        })
    }

    /// Builds a sheet from a header row and data rows. Short rows are padded
    /// with empty cells; long rows are an error.
    pub fn from_rows<H>(
        name: impl Into<String>,
        header: &[H],
        rows: Vec<Vec<CellValue>>,
    ) -> ChartResult<Self>
    where
        H: AsRef<str>,
    {
        let mut columns: Vec<Vec<CellValue>> = vec![Vec::with_capacity(rows.len()); header.len()];
        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() > header.len() {
                return Err(ChartError::InvalidData(format!(
                    "row {row_index} has {} cells but the header has {}",
                    row.len(),
                    header.len()
                )));
            }
            let mut cells = row.into_iter();
            for column in &mut columns {
                column.push(cells.next().unwrap_or_default());
            }
        }

        Self::from_columns(name, header.iter().zip(columns))
    }

    pub fn from_json(json: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.columns.values().next().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[CellValue]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Numeric when every non-missing cell coerces to a number, text when any
    /// does not, empty when nothing is present.
    #[must_use]
    pub fn column_kind(&self, name: &str) -> Option<ColumnKind> {
        self.column(name).map(infer_kind)
    }

    #[must_use]
    pub fn numeric_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|(_, values)| infer_kind(values) == ColumnKind::Numeric)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    #[must_use]
    pub fn summary(&self) -> SheetSummary {
        SheetSummary {
            name: self.name.clone(),
            rows: self.row_count(),
            columns: self
                .columns
                .iter()
                .map(|(name, values)| ColumnSummary {
                    name: name.clone(),
                    kind: infer_kind(values),
                    missing: values.iter().filter(|value| value.is_missing()).count(),
                })
                .collect(),
        }
    }

    /// First `rows` rows of every column, for previews.
    #[must_use]
    pub fn head(&self, rows: usize) -> Sheet {
        Sheet {
            name: self.name.clone(),
            columns: self
                .columns
                .iter()
                .map(|(name, values)| (name.clone(), values.iter().take(rows).cloned().collect()))
                .collect(),
        }
    }
}

fn infer_kind(values: &[CellValue]) -> ColumnKind {
    let mut present = values.iter().filter(|value| !value.is_missing()).peekable();
    if present.peek().is_none() {
        return ColumnKind::Empty;
    }
    if present.all(CellValue::is_numeric) {
        ColumnKind::Numeric
    } else {
        ColumnKind::Text
    }
}

#[derive(Debug, Deserialize)]
struct RawWorkbook {
    #[serde(default)]
    sheets: Vec<Sheet>,
}

/// Ordered collection of sheets addressed by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWorkbook")]
pub struct Workbook {
    #[serde(serialize_with = "serialize_sheets")]
    sheets: IndexMap<String, Sheet>,
}

impl TryFrom<RawWorkbook> for Workbook {
    type Error = ChartError;

    fn try_from(raw: RawWorkbook) -> ChartResult<Self> {
        let mut workbook = Workbook::new();
        for sheet in raw.sheets {
            workbook.add_sheet(sheet);
        }
        Ok(workbook)
    }
}

fn serialize_sheets<S>(sheets: &IndexMap<String, Sheet>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(sheets.values())
}

impl Workbook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Adds a sheet, replacing any sheet with the same name in place.
    pub fn add_sheet(&mut self, sheet: Sheet) {
        if self.sheets.contains_key(sheet.name()) {
            debug!(sheet = sheet.name(), "replacing existing sheet");
        }
        self.sheets.insert(sheet.name().to_owned(), sheet);
    }

    #[must_use]
    pub fn with_sheet(mut self, sheet: Sheet) -> Self {
        self.add_sheet(sheet);
        self
    }

    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.keys().map(String::as_str)
    }

    pub fn sheet(&self, name: &str) -> ChartResult<&Sheet> {
        self.sheets.get(name).ok_or_else(|| ChartError::NotFound {
            kind: "sheet",
            name: name.to_owned(),
            available: self.sheets.keys().cloned().collect(),
        })
    }

    /// First sheet, the one a file panel selects by default.
    #[must_use]
    pub fn first_sheet(&self) -> Option<&Sheet> {
        self.sheets.values().next()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{ColumnKind, Sheet, Workbook};
    use crate::data::CellValue;
    use crate::error::ChartError;

    fn sample() -> Sheet {
        Sheet::from_columns(
            "Data",
            [
                (" Year ", vec![2006.into(), 2007.into(), 2008.into()]),
                ("GDP", vec![1.5.into(), CellValue::Empty, 2.5.into()]),
                ("Region", vec!["A".into(), "B".into(), "C".into()]),
            ],
        )
        .expect("valid sheet")
    }

    #[test]
    fn column_names_are_trimmed() {
        let sheet = sample();
        assert!(sheet.has_column("Year"));
        assert_eq!(sheet.column_names().collect::<Vec<_>>(), ["Year", "GDP", "Region"]);
    }

    #[test]
    fn unequal_columns_are_rejected() {
        let err = Sheet::from_columns("S", [("a", vec![1.into()]), ("b", vec![])])
            .expect_err("length mismatch");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }

    #[test]
    fn summary_reports_kinds_and_missing_counts() {
        let summary = sample().summary();
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.columns[1].kind, ColumnKind::Numeric);
        assert_eq!(summary.columns[1].missing, 1);
        assert_eq!(summary.columns[2].kind, ColumnKind::Text);
    }

    #[test]
    fn rows_are_padded_to_header_width() {
        let sheet = Sheet::from_rows("S", &["x", "y"], vec![vec![1.into()], vec![2.into(), 3.into()]])
            .expect("valid rows");
        assert_eq!(sheet.column("y"), Some(&[CellValue::Empty, 3.into()][..]));
        assert_eq!(sheet.column_kind("y"), Some(ColumnKind::Numeric));
    }

    #[test]
    fn head_truncates_every_column() {
        let head = sample().head(2);
        assert_eq!(head.row_count(), 2);
        assert_eq!(head.column_count(), 3);
    }

    #[test]
    fn unknown_sheet_lists_available_names() {
        let workbook = Workbook::new().with_sheet(sample());
        let err = workbook.sheet("Other").expect_err("missing sheet");
        match err {
            ChartError::NotFound { kind, available, .. } => {
                assert_eq!(kind, "sheet");
                assert_eq!(available, vec!["Data".to_owned()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn sheet_round_trips_through_json() {
        let sheet = sample();
        let json = serde_json::to_string(&sheet).expect("serialize");
        let parsed = Sheet::from_json(&json).expect("parse");
        assert_eq!(parsed, sheet);
    }
}
