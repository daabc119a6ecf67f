use sheet_chart::api::{ChartConfigBuilder, ChartEngine};
use sheet_chart::data::{AlignedSeriesData, CellValue, DataSelection};
use sheet_chart::render::{Color, MarkerShape};
use sheet_chart::theme::{self, GridLines};
use sheet_chart::ChartError;

#[test]
fn theme_names_are_listed_in_table_order() {
    let names = theme::theme_names();
    assert_eq!(names.len(), 8);
    assert_eq!(names[0], theme::DEFAULT_THEME);
    assert!(names.contains(&"Accessible (Colorblind Safe)"));
}

#[test]
fn lookups_ignore_case_after_exact_match() {
    assert_eq!(theme::theme("dark").expect("dark theme").name, "Dark");
    assert_eq!(
        theme::style_preset("imf official").expect("imf preset").name,
        "IMF Official"
    );
    assert_eq!(
        theme::period_preset("covid-19").expect("covid preset").name,
        "COVID-19"
    );
}

#[test]
fn unknown_names_list_every_valid_choice() {
    let err = theme::style_preset("Neon").expect_err("unknown preset");
    match err {
        ChartError::NotFound {
            kind,
            name,
            available,
        } => {
            assert_eq!(kind, "style preset");
            assert_eq!(name, "Neon");
            assert_eq!(available.len(), theme::style_preset_names().len());
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(matches!(
        theme::theme("Solarized"),
        Err(ChartError::NotFound { kind: "theme", .. })
    ));
}

#[test]
fn every_period_preset_has_spans_with_labels() {
    for name in theme::period_preset_names() {
        let preset = theme::period_preset(name).expect("listed preset resolves");
        let highlights = preset.highlights();
        assert!(!highlights.is_empty(), "{name} has no spans");
        assert!(highlights.iter().all(|highlight| highlight.label.is_some()));
        assert!(!preset.description.is_empty());
    }
}

#[test]
fn grid_lines_map_to_axes() {
    assert!(GridLines::Horizontal.horizontal() && !GridLines::Horizontal.vertical());
    assert!(GridLines::Vertical.vertical() && !GridLines::Vertical.horizontal());
    assert!(GridLines::Both.horizontal() && GridLines::Both.vertical());
    assert!(!GridLines::None.horizontal() && !GridLines::None.vertical());
}

fn selection() -> DataSelection {
    DataSelection::new("Year")
        .with_primary(["GDP"])
        .with_secondary(["Rate"])
}

#[test]
fn builder_labels_axes_after_their_single_series() {
    let config = ChartConfigBuilder::new(selection())
        .with_title("Growth")
        .build();

    assert_eq!(config.title.text, "Growth");
    assert_eq!(config.x_axis.label, "Year");
    assert_eq!(config.y_axis.label, "GDP");
    let y2 = config.y2_axis.as_ref().expect("secondary axis");
    assert_eq!(y2.label, "Rate");
    assert!(!y2.grid);
    assert_eq!(config.series.len(), 2);
    assert!(config.series[1].is_secondary());
}

#[test]
fn style_preset_overrides_theme_and_adds_period_highlights() {
    let preset = theme::style_preset("Professional Clean").expect("preset");
    let config = ChartConfigBuilder::new(selection())
        .with_theme("Dark")
        .expect("dark theme")
        .with_style_preset("Professional Clean")
        .expect("preset")
        .with_period_preset("Great Recession")
        .expect("period preset")
        .with_markers(MarkerShape::Circle, 4.0)
        .with_moving_average(3)
        .build();

    assert_eq!(config.background_color, preset.background);
    assert_eq!(config.x_axis.grid, preset.grid_lines.vertical());
    assert_eq!(config.y_axis.grid, preset.grid_lines.horizontal());
    assert!(!config.y2_axis.as_ref().expect("y2").grid);
    assert_eq!(config.legend.location, preset.legend_location);
    assert_eq!(config.period_highlights.len(), 1);
    assert!(config.series.iter().all(|series| series.marker == Some(MarkerShape::Circle)));
    assert!(config.series.iter().all(|series| series.effective_window() == 3));
}

#[test]
fn themed_config_renders_with_theme_colors() {
    let dark = theme::theme("Dark").expect("dark theme");
    let config = ChartConfigBuilder::new(DataSelection::new("Year").with_primary(["GDP"]))
        .with_theme("Dark")
        .expect("dark theme")
        .build();
    let data = AlignedSeriesData::new()
        .with_x("Year", (2000..2005).map(CellValue::from).collect())
        .with_numeric_series("GDP", &[1.0, 2.0, 1.5, 2.5, 3.0]);

    let figure = ChartEngine::default()
        .render_chart(&data, &config)
        .expect("render");
    assert_eq!(figure.frame.background, dark.background);
    let line = figure.frame.polylines().next().expect("series line");
    assert_eq!(line.color, dark.line_color(0));
    assert_ne!(line.color, Color::BLACK);
}
