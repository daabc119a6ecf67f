use sheet_chart::ChartError;
use sheet_chart::data::{CellValue, DataSelection, Sheet, align_columns, align_selection};

fn sample_sheet() -> Sheet {
    Sheet::from_columns(
        "GDP",
        [
            (
                "Year",
                vec![
                    CellValue::from(2019),
                    2020.into(),
                    2021.into(),
                    2022.into(),
                ],
            ),
            (
                "Growth",
                vec![CellValue::from(2.1), CellValue::Empty, 3.0.into(), 1.5.into()],
            ),
            (
                "Rate",
                vec![CellValue::from(0.5), 0.25.into(), CellValue::from(" "), 4.0.into()],
            ),
            (
                "Note",
                vec![CellValue::from("a"), "b".into(), "c".into(), "d".into()],
            ),
        ],
    )
    .expect("valid sheet")
}

#[test]
fn alignment_drops_rows_missing_any_selected_column() {
    let sheet = sample_sheet();
    let aligned = align_columns(&sheet, "Year", &["Growth", "Rate"]).expect("aligned");

    assert_eq!(aligned.len(), 2);
    assert_eq!(aligned.x_key(), "Year");
    assert_eq!(
        aligned.x().expect("x column"),
        &[CellValue::from(2019), CellValue::from(2022)]
    );
    assert_eq!(
        aligned.series("Rate").expect("rate column"),
        &[CellValue::from(0.5), CellValue::from(4.0)]
    );
}

#[test]
fn unselected_gaps_do_not_drop_rows() {
    let sheet = sample_sheet();
    let aligned = align_columns(&sheet, "Year", &["Rate"]).expect("aligned");
    assert_eq!(aligned.len(), 3);
}

#[test]
fn duplicated_y_columns_are_kept_once() {
    let sheet = sample_sheet();
    let selection = DataSelection::new("Year")
        .with_primary(["Rate"])
        .with_secondary(["Rate", "Growth"]);
    let aligned = align_selection(&sheet, &selection).expect("aligned");

    let names: Vec<&str> = aligned.series_names().collect();
    assert_eq!(names, ["Rate", "Growth"]);
}

#[test]
fn missing_columns_are_all_reported() {
    let sheet = sample_sheet();
    let err = align_columns(&sheet, "Date", &["Growth", "Inflation"]).expect_err("must fail");
    match err {
        ChartError::ColumnNotFound { missing } => assert_eq!(missing, ["Date", "Inflation"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn auto_selection_picks_numeric_columns_except_x() {
    let sheet = sample_sheet();
    let selection = DataSelection::auto_select_numeric(&sheet, "Year");
    assert_eq!(selection.primary, ["Growth", "Rate"]);
    assert!(selection.secondary.is_empty());
}

#[test]
fn sheet_json_keeps_column_order() {
    let sheet = Sheet::from_json(
        r#"{"name":"S","columns":{"b":[1,2],"a":[null,"x"]}}"#,
    )
    .expect("valid json");
    let names: Vec<&str> = sheet.column_names().collect();
    assert_eq!(names, ["b", "a"]);
    assert_eq!(sheet.row_count(), 2);
}

mod properties {
    use proptest::prelude::*;
    use sheet_chart::data::{CellValue, Sheet, align_columns};

    fn cell() -> impl Strategy<Value = CellValue> {
        prop_oneof![
            3 => (-1.0e6f64..1.0e6).prop_map(CellValue::from),
            1 => Just(CellValue::Empty),
            1 => Just(CellValue::from(f64::NAN)),
        ]
    }

    proptest! {
        #[test]
        fn aligned_rows_never_hold_missing_cells(
            rows in prop::collection::vec((cell(), cell(), cell()), 0..40)
        ) {
            let x: Vec<CellValue> = rows.iter().map(|row| row.0.clone()).collect();
            let a: Vec<CellValue> = rows.iter().map(|row| row.1.clone()).collect();
            let b: Vec<CellValue> = rows.iter().map(|row| row.2.clone()).collect();
            let complete = rows
                .iter()
                .filter(|row| !row.0.is_missing() && !row.1.is_missing() && !row.2.is_missing())
                .count();

            let sheet = Sheet::from_columns("P", [("x", x), ("a", a), ("b", b)])
                .expect("equal length columns");
            let aligned = align_columns(&sheet, "x", &["a", "b"]).expect("columns exist");

            prop_assert_eq!(aligned.len(), complete);
            for name in ["a", "b"] {
                let column = aligned.series(name).expect("selected column");
                prop_assert_eq!(column.len(), complete);
                prop_assert!(column.iter().all(|value| !value.is_missing()));
            }
            prop_assert!(aligned.x().expect("x").iter().all(|value| !value.is_missing()));
        }
    }
}
