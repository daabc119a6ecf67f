use serde::{Deserialize, Serialize};

use crate::data::Sheet;

/// Columns the user picked for one chart: an X column plus primary and
/// secondary Y columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSelection {
    pub x_column: String,
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
}

impl DataSelection {
    #[must_use]
    pub fn new(x_column: impl Into<String>) -> Self {
        Self {
            x_column: x_column.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_primary<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary.extend(columns.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_secondary<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.secondary.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Selects every numeric column of `sheet` other than `x_column` as a
    /// primary series.
    #[must_use]
    pub fn auto_select_numeric(sheet: &Sheet, x_column: &str) -> Self {
        let primary = sheet
            .numeric_columns()
            .into_iter()
            .filter(|name| *name != x_column)
            .map(str::to_owned)
            .collect();
        Self {
            x_column: x_column.to_owned(),
            primary,
            secondary: Vec::new(),
        }
    }

    /// Primary then secondary columns with later duplicates removed.
    #[must_use]
    pub fn y_columns(&self) -> Vec<&str> {
        let mut columns: Vec<&str> = Vec::with_capacity(self.primary.len() + self.secondary.len());
        for name in self.primary.iter().chain(&self.secondary) {
            if !columns.contains(&name.as_str()) {
                columns.push(name);
            }
        }
        columns
    }

    /// A column listed under both axes stays on the primary axis.
    #[must_use]
    pub fn is_secondary(&self, column: &str) -> bool {
        !self.primary.iter().any(|name| name == column)
            && self.secondary.iter().any(|name| name == column)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.x_column.trim().is_empty() && !self.y_columns().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::DataSelection;
    use crate::data::{CellValue, Sheet};

    #[test]
    fn y_columns_deduplicate_preserving_first_occurrence() {
        let selection = DataSelection::new("Year")
            .with_primary(["A", "B"])
            .with_secondary(["B", "C"]);
        assert_eq!(selection.y_columns(), ["A", "B", "C"]);
        assert!(!selection.is_secondary("B"));
        assert!(selection.is_secondary("C"));
    }

    #[test]
    fn auto_select_skips_x_and_text_columns() {
        let sheet = Sheet::from_columns(
            "S",
            [
                ("Year", vec![CellValue::from(2000), 2001.into()]),
                ("Label", vec!["a".into(), "b".into()]),
                ("Value", vec![1.0.into(), 2.0.into()]),
            ],
        )
        .expect("valid sheet");
        let selection = DataSelection::auto_select_numeric(&sheet, "Year");
        assert_eq!(selection.primary, vec!["Value".to_owned()]);
        assert!(selection.is_complete());
    }
}
