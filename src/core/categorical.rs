use indexmap::IndexMap;
use tracing::debug;

use crate::data::{AxisValue, CategoryKey, CellValue};

/// Distinct X values of a categorical axis in first-seen order, plus the
/// position of every row.
#[derive(Debug, Clone, PartialEq)]
pub struct Categories {
    values: Vec<CellValue>,
    labels: Vec<String>,
    row_positions: Vec<f64>,
}

impl Categories {
    /// Category `k` sits at position `k`; repeated values share a position.
    #[must_use]
    pub fn resolve(x: &[CellValue]) -> Self {
        let mut index: IndexMap<CategoryKey, usize> = IndexMap::new();
        let mut values = Vec::new();
        let mut row_positions = Vec::with_capacity(x.len());

        for cell in x {
            let next = index.len();
            let position = *index.entry(cell.category_key()).or_insert_with(|| {
                values.push(cell.clone());
                next
            });
            row_positions.push(position as f64);
        }

        let labels = values.iter().map(CellValue::display_label).collect();
        Self {
            values,
            labels,
            row_positions,
        }
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn row_positions(&self) -> &[f64] {
        &self.row_positions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Position of a highlight bound on this axis.
    ///
    /// Categories are scanned in order; each one is matched numerically and
    /// then by display label. Anything unmatched lands on the last category.
    /// `None` only when there are no categories.
    #[must_use]
    pub fn position_of(&self, value: &AxisValue) -> Option<usize> {
        if self.is_empty() {
            return None;
        }

        let number = value.as_f64();
        let label = value.display_label();
        let matched = self.values.iter().zip(&self.labels).position(|(cell, candidate)| {
            let numeric = number
                .zip(cell.as_f64())
                .is_some_and(|(number, candidate)| number == candidate);
            numeric || *candidate == label
        });
        if let Some(position) = matched {
            return Some(position);
        }

        let fallback = self.labels.len() - 1;
        debug!(
            value = %label,
            fallback,
            "highlight bound matches no category; using last category"
        );
        Some(fallback)
    }
}

/// Tick layout for grouped categories such as `2006 Q1, 2006 Q2, 2007 Q1`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupedTicks {
    pub major_positions: Vec<f64>,
    pub major_labels: Vec<String>,
    pub minor_positions: Vec<f64>,
}

/// Text before the first whitespace, or the whole label when it has none.
#[must_use]
pub fn group_token(label: &str) -> &str {
    label.split_whitespace().next().unwrap_or(label)
}

/// One major tick at the start of each run of labels that share a group
/// token; a minor tick at every position.
#[must_use]
pub fn group_category_labels(labels: &[String]) -> GroupedTicks {
    let mut grouped = GroupedTicks {
        minor_positions: (0..labels.len()).map(|index| index as f64).collect(),
        ..GroupedTicks::default()
    };

    let mut previous: Option<&str> = None;
    for (index, label) in labels.iter().enumerate() {
        let token = group_token(label);
        if previous != Some(token) {
            grouped.major_positions.push(index as f64);
            grouped.major_labels.push(token.to_owned());
            previous = Some(token);
        }
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::{Categories, group_category_labels, group_token};
    use crate::data::{AxisValue, CellValue};

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| (*item).to_owned()).collect()
    }

    #[test]
    fn repeated_values_share_positions() {
        let x: Vec<CellValue> = ["b", "a", "b", "c"].into_iter().map(CellValue::from).collect();
        let categories = Categories::resolve(&x);
        assert_eq!(categories.labels(), ["b", "a", "c"]);
        assert_eq!(categories.row_positions(), [0.0, 1.0, 0.0, 2.0]);
    }

    #[test]
    fn bounds_match_numbers_and_labels_per_category() {
        let x = vec![CellValue::from(2019), 2020.into(), "2021".into()];
        let categories = Categories::resolve(&x);
        assert_eq!(categories.position_of(&AxisValue::Number(2020.0)), Some(1));
        assert_eq!(categories.position_of(&AxisValue::Label("2020".to_owned())), Some(1));
        assert_eq!(categories.position_of(&AxisValue::Number(2021.0)), Some(2));
        assert_eq!(categories.position_of(&AxisValue::Label("1999".to_owned())), Some(2));
    }

    #[test]
    fn earliest_category_wins_in_mixed_columns() {
        let x = vec![CellValue::from("2008"), CellValue::from(2008)];
        let categories = Categories::resolve(&x);
        assert_eq!(categories.len(), 2);
        assert_eq!(categories.position_of(&AxisValue::Number(2008.0)), Some(0));
        assert_eq!(categories.position_of(&AxisValue::Label("2008".to_owned())), Some(0));
    }

    #[test]
    fn grouping_marks_run_starts() {
        let grouped = group_category_labels(&labels(&["2006 q1", "2006 q2", "2007 q1"]));
        assert_eq!(grouped.major_positions, vec![0.0, 2.0]);
        assert_eq!(grouped.major_labels, vec!["2006".to_owned(), "2007".to_owned()]);
        assert_eq!(grouped.minor_positions, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn group_token_without_whitespace_is_whole_label() {
        assert_eq!(group_token("2006"), "2006");
        assert_eq!(group_token("  "), "  ");
    }
}
