use criterion::{Criterion, criterion_group, criterion_main};
use sheet_chart::api::{ChartConfig, ChartEngine, PeriodHighlight, SeriesStyle};
use sheet_chart::core::{AxisScale, ScaleKind, moving_average, nice_ticks};
use sheet_chart::data::{AlignedSeriesData, CellValue, Sheet, align_columns};
use std::hint::black_box;

fn monthly_data(rows: usize) -> AlignedSeriesData {
    let x: Vec<CellValue> = (0..rows).map(|i| CellValue::from(2000.0 + i as f64 / 12.0)).collect();
    let growth: Vec<f64> = (0..rows).map(|i| (i as f64 * 0.05).sin() * 3.0 + 2.0).collect();
    let rate: Vec<f64> = (0..rows).map(|i| 5.0 - (i as f64 * 0.01).cos()).collect();
    AlignedSeriesData::new()
        .with_x("Date", x)
        .with_numeric_series("Growth", &growth)
        .with_numeric_series("Rate", &rate)
}

fn bench_render_chart_2k_rows(c: &mut Criterion) {
    let data = monthly_data(2_000);
    let config = ChartConfig::default()
        .with_title("Growth and rates")
        .with_series(SeriesStyle::new("Growth"))
        .with_series(SeriesStyle::new("Rate").on_secondary_axis())
        .with_highlight(PeriodHighlight::new("Crisis", 2008, 2009).with_label("GFC"));
    let engine = ChartEngine::default();

    c.bench_function("render_chart_2k_rows", |b| {
        b.iter(|| {
            let _ = engine
                .render_chart(black_box(&data), black_box(&config))
                .expect("render should succeed");
        })
    });
}

fn bench_svg_serialization(c: &mut Criterion) {
    let data = monthly_data(2_000);
    let config = ChartConfig::default().with_series(SeriesStyle::new("Growth"));
    let figure = ChartEngine::default()
        .render_chart(&data, &config)
        .expect("render should succeed");

    c.bench_function("svg_serialization_2k_rows", |b| {
        b.iter(|| black_box(figure.to_svg()))
    });
}

fn bench_align_10k_rows(c: &mut Criterion) {
    let rows = 10_000;
    let x: Vec<CellValue> = (0..rows).map(|i| CellValue::from(i as f64)).collect();
    let y: Vec<CellValue> = (0..rows)
        .map(|i| if i % 7 == 0 { CellValue::Empty } else { CellValue::from(i as f64 * 0.5) })
        .collect();
    let sheet = Sheet::from_columns("bench", [("x", x), ("y", y)]).expect("valid sheet");

    c.bench_function("align_columns_10k", |b| {
        b.iter(|| {
            let _ = align_columns(black_box(&sheet), "x", &["y"]).expect("aligned");
        })
    });
}

fn bench_scale_and_ticks(c: &mut Criterion) {
    let scale = AxisScale::new(ScaleKind::Log, (1.0, 1.0e6), (0.0, 1920.0)).expect("valid scale");
    let values: Vec<f64> = (0..10_000).map(|i| (i as f64 * 0.013).sin()).collect();

    c.bench_function("log_scale_projection", |b| {
        b.iter(|| black_box(scale.to_pixel(black_box(4_321.123))))
    });
    c.bench_function("nice_ticks", |b| {
        b.iter(|| black_box(nice_ticks(black_box(-3.7), black_box(1_234.5), 8)))
    });
    c.bench_function("moving_average_10k_w12", |b| {
        b.iter(|| black_box(moving_average(black_box(&values), 12)))
    });
}

criterion_group!(
    benches,
    bench_render_chart_2k_rows,
    bench_svg_serialization,
    bench_align_10k_rows,
    bench_scale_and_ticks
);
criterion_main!(benches);
