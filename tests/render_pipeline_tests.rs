use sheet_chart::api::{
    AxisConfig, ChartConfig, ChartEngine, LegendLocation, PeriodHighlight, SeriesStyle,
    StaticFontCatalog,
};
use sheet_chart::core::ScaleKind;
use sheet_chart::data::{AlignedSeriesData, AxisValue, CellValue};
use sheet_chart::render::{CanvasLayerKind, NullRenderer, Primitive};
use sheet_chart::ChartError;

fn yearly_data() -> AlignedSeriesData {
    AlignedSeriesData::new()
        .with_x("Year", (2000..2012).map(CellValue::from).collect())
        .with_numeric_series(
            "GDP",
            &[1.0, 1.4, 1.9, 2.2, 2.0, 2.6, 3.1, 3.3, 1.2, -0.5, 1.8, 2.1],
        )
        .with_numeric_series(
            "Rate",
            &[5.0, 4.5, 4.0, 3.5, 3.0, 3.0, 3.5, 4.0, 2.0, 0.5, 0.25, 0.25],
        )
}

fn two_axis_config() -> ChartConfig {
    ChartConfig::default()
        .with_title("Output and rates")
        .with_series(SeriesStyle::new("GDP").with_label("Real GDP"))
        .with_series(SeriesStyle::new("Rate").on_secondary_axis())
}

#[test]
fn numeric_chart_draws_series_axes_and_title() {
    let figure = ChartEngine::default()
        .render_chart(&yearly_data(), &two_axis_config())
        .expect("render");

    assert_eq!(figure.frame.viewport.width, 1000);
    assert_eq!(figure.frame.viewport.height, 600);
    assert_eq!(figure.frame.layer_len(CanvasLayerKind::Series), 1);
    assert_eq!(figure.frame.layer_len(CanvasLayerKind::SecondarySeries), 1);
    assert!(figure.y2_axis.is_some());
    assert!(figure.frame.texts().any(|text| text.text == "Output and rates"));

    let mut renderer = NullRenderer::default();
    figure.render_with(&mut renderer).expect("null render");
    assert_eq!(renderer.last_polyline_count, 2);
    assert!(renderer.last_text_count > 6);
}

#[test]
fn legend_lists_primary_series_before_secondary() {
    let config = ChartConfig::default()
        .with_series(SeriesStyle::new("Rate").on_secondary_axis())
        .with_series(SeriesStyle::new("GDP"));
    let figure = ChartEngine::default()
        .render_chart(&yearly_data(), &config)
        .expect("render");

    let legend = figure.legend.expect("legend shown by default");
    let labels: Vec<&str> = legend.entries.iter().map(|entry| entry.label.as_str()).collect();
    assert_eq!(labels, ["GDP", "Rate"]);
    assert_ne!(legend.location, LegendLocation::Best);
}

#[test]
fn hidden_legend_produces_no_legend_layer() {
    let mut config = two_axis_config();
    config.legend.show = false;
    let figure = ChartEngine::default()
        .render_chart(&yearly_data(), &config)
        .expect("render");
    assert!(figure.legend.is_none());
    assert_eq!(figure.frame.layer_len(CanvasLayerKind::Legend), 0);
}

#[test]
fn secondary_axis_never_draws_grid_lines() {
    let mut config = two_axis_config();
    config.x_axis = AxisConfig::default().with_grid(false);
    config.y_axis = AxisConfig::default().with_grid(false);
    config.y2_axis = Some(AxisConfig::labeled("Rate").with_grid(true));

    let figure = ChartEngine::default()
        .render_chart(&yearly_data(), &config)
        .expect("render");
    assert_eq!(figure.frame.layer_len(CanvasLayerKind::Grid), 0);
    assert!(figure.y2_axis.is_some());
}

#[test]
fn grouped_categorical_axis_labels_each_group_once() {
    let quarters = ["2006 Q1", "2006 Q2", "2006 Q3", "2007 Q1", "2007 Q2", "2008 Q1"];
    let data = AlignedSeriesData::new()
        .with_x("Quarter", quarters.iter().map(|label| CellValue::from(*label)).collect())
        .with_numeric_series("Value", &[1.0, 2.0, 3.0, 2.5, 2.0, 1.0]);
    let mut config = ChartConfig::default().with_series(SeriesStyle::new("Value"));
    config.x_axis = AxisConfig::default().categorical(true);

    let figure = ChartEngine::default()
        .render_chart(&data, &config)
        .expect("render");

    assert!(figure.x_axis.categorical);
    let labels: Vec<&str> = figure.x_axis.tick_labels().collect();
    assert_eq!(labels, ["2006", "2007", "2008"]);
    assert_eq!(figure.x_axis.tick_positions(), [0.0, 3.0, 5.0]);
    assert_eq!(figure.x_axis.minor_ticks.len(), 6);
}

#[test]
fn text_x_on_categorical_axis_is_accepted() {
    let data = AlignedSeriesData::new()
        .with_x("Region", vec!["North".into(), "South".into(), "East".into()])
        .with_numeric_series("Sales", &[3.0, 5.0, 4.0]);
    let mut config = ChartConfig::default().with_series(SeriesStyle::new("Sales"));
    config.x_axis = AxisConfig::default().categorical(false);

    let figure = ChartEngine::default()
        .render_chart(&data, &config)
        .expect("render");
    let labels: Vec<&str> = figure.x_axis.tick_labels().collect();
    assert_eq!(labels, ["North", "South", "East"]);
}

#[test]
fn unresolvable_highlights_are_skipped_by_name() {
    let config = two_axis_config()
        .with_highlight(PeriodHighlight::new("Crisis", 2008, 2009).with_label("GFC"))
        .with_highlight(PeriodHighlight::new("Someday", "late", 2010))
        .with_highlight(PeriodHighlight {
            name: "Open".to_owned(),
            start: Some(AxisValue::from(2003)),
            ..PeriodHighlight::default()
        });

    let figure = ChartEngine::default()
        .render_chart(&yearly_data(), &config)
        .expect("render");

    assert_eq!(figure.highlights.len(), 1);
    assert_eq!(figure.highlights[0].name, "Crisis");
    assert_eq!(figure.highlights[0].label.as_deref(), Some("GFC"));
    assert_eq!(figure.skipped_highlights, ["Someday", "Open"]);
    assert_eq!(figure.frame.layer_len(CanvasLayerKind::Highlight), 1);

    let band = figure
        .frame
        .layer(CanvasLayerKind::Highlight)
        .and_then(|layer| layer.primitives.first())
        .expect("highlight band");
    let Primitive::Rect(rect) = band else {
        panic!("highlight band must be a rect");
    };
    assert!((rect.height - figure.plot_area.height()).abs() < 1e-9);
    assert!(figure.frame.texts().any(|text| text.text == "GFC" && text.italic));
}

#[test]
fn extreme_highlight_bounds_are_skipped_without_failing_render() {
    let config = two_axis_config()
        .with_highlight(PeriodHighlight::new("Huge", -2.0e306, 2.0e306))
        .with_highlight(PeriodHighlight::new("Ok", 2003, 2005));

    let figure = ChartEngine::default()
        .render_chart(&yearly_data(), &config)
        .expect("render survives extreme highlight");

    assert_eq!(figure.highlights.len(), 1);
    assert_eq!(figure.highlights[0].name, "Ok");
    assert_eq!(figure.skipped_highlights, ["Huge"]);
    figure.frame.validate().expect("finite geometry");
}

#[test]
fn highlight_band_is_clipped_to_plot() {
    let config = two_axis_config().with_highlight(PeriodHighlight::new("Wide", 1990, 2005));

    let figure = ChartEngine::default()
        .render_chart(&yearly_data(), &config)
        .expect("render");

    let band = figure
        .frame
        .layer(CanvasLayerKind::Highlight)
        .and_then(|layer| layer.primitives.first())
        .expect("highlight band");
    let Primitive::Rect(rect) = band else {
        panic!("highlight band must be a rect");
    };
    let plot = figure.plot_area;
    assert!((rect.x - plot.left).abs() < 1e-9);
    assert!(rect.x + rect.width <= plot.right + 1e-9);
    assert!(rect.width > 0.0);
}

#[test]
fn log_scale_without_positive_data_falls_back_to_linear() {
    let data = AlignedSeriesData::new()
        .with_x("x", (0..4).map(CellValue::from).collect())
        .with_numeric_series("loss", &[-4.0, -2.0, -1.0, -3.0]);
    let mut config = ChartConfig::default().with_series(SeriesStyle::new("loss"));
    config.y_axis = AxisConfig::default().with_scale(ScaleKind::Log);

    let figure = ChartEngine::default()
        .render_chart(&data, &config)
        .expect("render");
    assert_eq!(figure.y_axis.kind(), ScaleKind::Linear);
}

#[test]
fn explicit_limits_and_tick_step_are_respected() {
    let mut config = ChartConfig::default().with_series(SeriesStyle::new("GDP"));
    config.y_axis = AxisConfig::default()
        .with_limits(Some(-1.0), Some(4.0))
        .with_tick_step(1.0);

    let figure = ChartEngine::default()
        .render_chart(&yearly_data(), &config)
        .expect("render");
    assert_eq!(figure.y_axis.domain(), (-1.0, 4.0));
    assert_eq!(figure.y_axis.tick_positions(), [-1.0, 0.0, 1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn text_cells_in_numeric_x_are_rejected() {
    let data = AlignedSeriesData::new()
        .with_x("Quarter", vec!["Q1".into(), "Q2".into()])
        .with_numeric_series("v", &[1.0, 2.0]);
    let config = ChartConfig::default().with_series(SeriesStyle::new("v"));

    let err = ChartEngine::default()
        .render_chart(&data, &config)
        .expect_err("text x on numeric axis");
    assert!(matches!(err, ChartError::InvalidChartInput(_)));
}

#[test]
fn series_absent_from_data_are_skipped() {
    let config = two_axis_config().with_series(SeriesStyle::new("Inflation"));
    let figure = ChartEngine::default()
        .render_chart(&yearly_data(), &config)
        .expect("render");
    let legend = figure.legend.expect("legend");
    assert_eq!(legend.entries.len(), 2);
}

#[test]
fn unknown_font_family_falls_back() {
    let mut config = two_axis_config();
    config.font_family = "Definitely Not A Font".to_owned();
    let engine = ChartEngine::with_font_catalog(StaticFontCatalog::new(["Arial"]));

    let figure = engine.render_chart(&yearly_data(), &config).expect("render");
    assert_eq!(figure.font_family, "Arial");
}

#[test]
fn svg_output_is_identical_across_renders() {
    let engine = ChartEngine::default();
    let config = two_axis_config()
        .with_highlight(PeriodHighlight::new("Crisis", 2008, 2009).with_label("GFC"));
    let first = engine
        .render_chart(&yearly_data(), &config)
        .expect("first render")
        .to_svg();
    let second = engine
        .render_chart(&yearly_data(), &config)
        .expect("second render")
        .to_svg();

    assert!(first.starts_with("<svg") || first.starts_with("<?xml"));
    assert_eq!(first, second);
}
