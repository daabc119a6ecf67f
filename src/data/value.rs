use std::fmt;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// One spreadsheet cell as loaded from a sheet.
///
/// JSON maps `null`, numbers, strings and booleans onto the matching variant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Missing cells are dropped during alignment: empty cells, non-finite
    /// numbers and whitespace-only text.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Number(value) => !value.is_finite(),
            CellValue::Text(text) => text.trim().is_empty(),
            CellValue::Bool(_) => false,
        }
    }

    /// Numeric view of the cell. Text is never parsed here; a text cell in a
    /// numeric column is a data error, not a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(value) if value.is_finite() => Some(*value),
            CellValue::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.as_f64().is_some()
    }

    /// Text shown on a categorical axis.
    #[must_use]
    pub fn display_label(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Bool(flag) => flag.to_string(),
            CellValue::Number(value) => format_number_label(*value),
            CellValue::Text(text) => text.clone(),
        }
    }

    pub(crate) fn category_key(&self) -> CategoryKey {
        match self {
            CellValue::Empty => CategoryKey::Empty,
            CellValue::Bool(flag) => CategoryKey::Bool(*flag),
            CellValue::Number(value) => CategoryKey::Number(OrderedFloat(*value)),
            CellValue::Text(text) => CategoryKey::Text(text.clone()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_label())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Number(f64::from(value))
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<CellValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Empty, Into::into)
    }
}

/// Hashable identity of a cell used to deduplicate categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum CategoryKey {
    Empty,
    Bool(bool),
    Number(OrderedFloat<f64>),
    Text(String),
}

/// A position on an axis given either as a number or as a category label.
///
/// Period highlight bounds use this so presets can say `2008` and users can
/// say `"2008 q3"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisValue {
    Number(f64),
    Label(String),
}

impl AxisValue {
    /// Numeric coercion: numbers as-is, labels when they parse as a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AxisValue::Number(value) => value.is_finite().then_some(*value),
            AxisValue::Label(label) => label
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite()),
        }
    }

    #[must_use]
    pub fn display_label(&self) -> String {
        match self {
            AxisValue::Number(value) => format_number_label(*value),
            AxisValue::Label(label) => label.clone(),
        }
    }
}

impl From<f64> for AxisValue {
    fn from(value: f64) -> Self {
        AxisValue::Number(value)
    }
}

impl From<i32> for AxisValue {
    fn from(value: i32) -> Self {
        AxisValue::Number(f64::from(value))
    }
}

impl From<&str> for AxisValue {
    fn from(value: &str) -> Self {
        AxisValue::Label(value.to_owned())
    }
}

impl From<String> for AxisValue {
    fn from(value: String) -> Self {
        AxisValue::Label(value)
    }
}

/// Integral values print without a fractional part so year columns read
/// `2006` rather than `2006.0`.
fn format_number_label(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
