use std::fmt;

use tracing::{debug, warn};

use crate::core::ticks::{AXIS_X_TARGET_SPACING_PX, AXIS_Y_TARGET_SPACING_PX};
use crate::core::{Categories, PlotArea, ScaleKind, Viewport, apply_smoothing};
use crate::data::{AlignedSeriesData, CellValue};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CanvasLayerKind, Primitive, RectPrimitive, RenderFrame, Renderer, frame_to_svg,
};

use super::axis_render_frame_builder::{AxisDrawInput, AxisEdge, push_axis, push_spines};
use super::axis_resolver::{
    ResolvedAxis, resolve_categorical_axis, resolve_domain, resolve_numeric_axis,
};
use super::highlight_resolver::{RenderedHighlight, push_highlights};
use super::legend_layout_builder::{
    LegendEntry, LegendLayout, LegendStyle, build_legend_layout, push_legend,
};
use super::line_series_render_frame_builder::{
    PlottedSeries, project_series_points, push_line_series,
};
use super::plot_layout_resolver::{
    AxisExtentInput, LayoutMetrics, default_plot_area, tight_plot_area,
};
use super::title_render_frame_builder::{TitleContext, push_subtitle, push_title};
use super::{AxisConfig, ChartConfig, FontCatalog, StaticFontCatalog, resolve_font_family};

/// A rendered chart: the display list plus the resolved layout behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub frame: RenderFrame,
    pub dpi: u32,
    /// Family actually used after fallback.
    pub font_family: String,
    pub plot_area: PlotArea,
    pub x_axis: ResolvedAxis,
    pub y_axis: ResolvedAxis,
    pub y2_axis: Option<ResolvedAxis>,
    pub legend: Option<LegendLayout>,
    pub highlights: Vec<RenderedHighlight>,
    /// Names of highlights left out because a bound could not be resolved.
    pub skipped_highlights: Vec<String>,
}

impl Figure {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.frame.viewport
    }

    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    /// Draws the figure with any backend.
    pub fn render_with<R: Renderer>(&self, renderer: &mut R) -> ChartResult<()> {
        renderer.render(&self.frame)
    }

    /// SVG document in pixel units.
    #[must_use]
    pub fn to_svg(&self) -> String {
        frame_to_svg(&self.frame, None)
    }
}

/// Turns aligned data plus a chart configuration into a [`Figure`].
///
/// Rendering is a pure function of its inputs; the engine only holds the
/// font catalog used for family fallback.
pub struct ChartEngine {
    fonts: Box<dyn FontCatalog + Send + Sync>,
}

impl fmt::Debug for ChartEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartEngine").finish_non_exhaustive()
    }
}

impl Default for ChartEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::with_font_catalog(StaticFontCatalog::default())
    }

    #[must_use]
    pub fn with_font_catalog(fonts: impl FontCatalog + Send + Sync + 'static) -> Self {
        Self {
            fonts: Box::new(fonts),
        }
    }

    /// Font family a render with `requested` would use.
    #[must_use]
    pub fn resolve_font_family(&self, requested: &str) -> String {
        resolve_font_family(requested, self.fonts.as_ref())
    }

    pub fn render_chart(
        &self,
        data: &AlignedSeriesData,
        config: &ChartConfig,
    ) -> ChartResult<Figure> {
        config.validate()?;
        if data.is_empty() {
            return Err(ChartError::InvalidChartInput("no data provided".to_owned()));
        }
        let x_cells = data.x().ok_or_else(|| {
            ChartError::InvalidChartInput("data must contain an X sequence".to_owned())
        })?;
        if config.series.is_empty() {
            return Err(ChartError::InvalidChartInput("no series configured".to_owned()));
        }
        data.validate()?;

        let (width, height) = config.pixel_size();
        let viewport = Viewport::new(width, height);
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport { width, height });
        }
        let font_family = self.resolve_font_family(&config.font_family);

        let categories = config
            .x_axis
            .categorical
            .then(|| Categories::resolve(x_cells));
        let x_values = match &categories {
            Some(categories) => categories.row_positions().to_vec(),
            None => numeric_x(x_cells)?,
        };

        let mut primary = Vec::new();
        let mut secondary = Vec::new();
        for style in &config.series {
            let Some(cells) = data.series(&style.column) else {
                warn!(column = %style.column, "series column absent from data; skipping");
                continue;
            };
            let raw = numeric_y(&style.column, cells)?;
            let plotted = PlottedSeries {
                style,
                values: apply_smoothing(&raw, style.smoothing, style.effective_window()),
            };
            if style.is_secondary() {
                secondary.push(plotted);
            } else {
                primary.push(plotted);
            }
        }

        let plan = AxisPlan::new(config, categories.as_ref(), &x_values, &primary, &secondary);
        let metrics = LayoutMetrics::new(config);
        let mut plot = default_plot_area(viewport);
        let mut axes = plan.resolve(plot)?;
        if config.tight_layout {
            // Tick density depends on the plot size, so settle over two passes.
            for _ in 0..2 {
                plot = tight_plot_area(
                    viewport,
                    config,
                    &metrics,
                    AxisExtentInput {
                        config: &plan.x_config,
                        resolved: &axes.x,
                    },
                    AxisExtentInput {
                        config: &config.y_axis,
                        resolved: &axes.y,
                    },
                    plan.y2.as_ref().zip(axes.y2.as_ref()).map(|(y2, resolved)| {
                        AxisExtentInput {
                            config: &y2.config,
                            resolved,
                        }
                    }),
                );
                axes = plan.resolve(plot)?;
            }
        }

        let mut frame = RenderFrame::new(viewport, config.background_color);
        for kind in CanvasLayerKind::CANONICAL_ORDER {
            if kind.clips_to_plot_area() {
                frame.set_clip(kind, plot);
            }
        }
        frame.push(
            CanvasLayerKind::Background,
            Primitive::Rect(RectPrimitive::new(
                plot.left,
                plot.top,
                plot.width(),
                plot.height(),
                config.background_color,
            )),
        );

        let highlights = push_highlights(
            &mut frame,
            &config.period_highlights,
            categories.as_ref(),
            axes.x.scale,
            plot,
            metrics.dpi,
            &font_family,
        );

        let mut legend_points = Vec::new();
        for series in &primary {
            let points = project_series_points(&x_values, axes.x.scale, &series.values, axes.y.scale);
            push_line_series(&mut frame, CanvasLayerKind::Series, series.style, &points, metrics.dpi);
            legend_points.extend(points.into_iter().flatten());
        }
        if let Some(y2_axis) = axes.y2.as_ref() {
            for series in &secondary {
                let points =
                    project_series_points(&x_values, axes.x.scale, &series.values, y2_axis.scale);
                push_line_series(
                    &mut frame,
                    CanvasLayerKind::SecondarySeries,
                    series.style,
                    &points,
                    metrics.dpi,
                );
                legend_points.extend(points.into_iter().flatten());
            }
        }

        push_axis(
            &mut frame,
            &AxisDrawInput {
                config: &plan.x_config,
                resolved: &axes.x,
                edge: AxisEdge::Bottom,
                allow_grid: true,
            },
            plot,
            &metrics,
            &font_family,
        );
        push_axis(
            &mut frame,
            &AxisDrawInput {
                config: &config.y_axis,
                resolved: &axes.y,
                edge: AxisEdge::Left,
                allow_grid: true,
            },
            plot,
            &metrics,
            &font_family,
        );
        let mut right_spine = config.y_axis.color;
        if let (Some(y2), Some(resolved)) = (plan.y2.as_ref(), axes.y2.as_ref()) {
            right_spine = y2.config.color;
            push_axis(
                &mut frame,
                &AxisDrawInput {
                    config: &y2.config,
                    resolved,
                    edge: AxisEdge::Right,
                    allow_grid: false,
                },
                plot,
                &metrics,
                &font_family,
            );
        }
        push_spines(
            &mut frame,
            plot,
            &metrics,
            config.x_axis.color,
            config.y_axis.color,
            right_spine,
        );

        let title_context = TitleContext {
            plot,
            viewport,
            metrics: &metrics,
            color: config.text_color,
            font_family: &font_family,
        };
        push_title(&mut frame, &config.title, &title_context);
        if let Some(subtitle) = config.subtitle.as_ref() {
            push_subtitle(&mut frame, &config.title, subtitle, &title_context);
        }

        let entries = primary
            .iter()
            .chain(&secondary)
            .map(|series| LegendEntry::from_series(series.style, metrics.dpi))
            .collect();
        let legend = build_legend_layout(&config.legend, entries, plot, metrics.dpi, &legend_points);
        if let Some(layout) = legend.as_ref() {
            push_legend(
                &mut frame,
                layout,
                &config.legend,
                &LegendStyle {
                    background: config.background_color,
                    text_color: config.text_color,
                    font_family: &font_family,
                    dpi: metrics.dpi,
                },
            );
        }

        frame.validate()?;
        debug!(
            width,
            height,
            primary = primary.len(),
            secondary = secondary.len(),
            highlights = highlights.rendered.len(),
            skipped_highlights = highlights.skipped.len(),
            font_family = %font_family,
            "chart rendered"
        );

        Ok(Figure {
            frame,
            dpi: config.dpi,
            font_family,
            plot_area: plot,
            x_axis: axes.x,
            y_axis: axes.y,
            y2_axis: axes.y2,
            legend,
            highlights: highlights.rendered,
            skipped_highlights: highlights.skipped,
        })
    }
}

fn numeric_x(cells: &[CellValue]) -> ChartResult<Vec<f64>> {
    cells
        .iter()
        .enumerate()
        .map(|(row, cell)| {
            cell.as_f64().ok_or_else(|| {
                ChartError::InvalidChartInput(format!(
                    "X value `{}` in row {row} is not numeric; use a categorical X axis",
                    cell.display_label()
                ))
            })
        })
        .collect()
}

/// Missing cells become gaps; any other non-numeric cell is an error.
fn numeric_y(column: &str, cells: &[CellValue]) -> ChartResult<Vec<f64>> {
    cells
        .iter()
        .enumerate()
        .map(|(row, cell)| {
            if cell.is_missing() {
                return Ok(f64::NAN);
            }
            cell.as_f64().ok_or_else(|| {
                ChartError::InvalidChartInput(format!(
                    "series `{column}` value `{}` in row {row} is not numeric",
                    cell.display_label()
                ))
            })
        })
        .collect()
}

struct SecondaryAxisPlan {
    config: AxisConfig,
    kind: ScaleKind,
    domain: (f64, f64),
}

/// Scale kinds and domains of every axis; only the pixel ranges change
/// between layout passes.
struct AxisPlan<'a> {
    x_config: AxisConfig,
    x_kind: ScaleKind,
    x_domain: (f64, f64),
    categories: Option<&'a Categories>,
    y_config: &'a AxisConfig,
    y_kind: ScaleKind,
    y_domain: (f64, f64),
    y2: Option<SecondaryAxisPlan>,
}

struct AxisSet {
    x: ResolvedAxis,
    y: ResolvedAxis,
    y2: Option<ResolvedAxis>,
}

impl<'a> AxisPlan<'a> {
    fn new(
        config: &'a ChartConfig,
        categories: Option<&'a Categories>,
        x_values: &[f64],
        primary: &[PlottedSeries<'_>],
        secondary: &[PlottedSeries<'_>],
    ) -> Self {
        let mut x_config = config.x_axis.clone();
        if categories.is_some() && x_config.scale != ScaleKind::Linear {
            warn!("categorical X axis ignores its log scale");
            x_config.scale = ScaleKind::Linear;
        }
        let (x_kind, x_domain) = resolve_domain(&x_config, x_values, "x");

        let (y_kind, y_domain) = resolve_domain(&config.y_axis, &collect_values(primary), "y");

        let y2 = config.has_secondary_axis().then(|| {
            let mut y2_config = config.y2_axis.clone().unwrap_or_default();
            y2_config.grid = false;
            let (kind, domain) = resolve_domain(&y2_config, &collect_values(secondary), "y2");
            SecondaryAxisPlan {
                config: y2_config,
                kind,
                domain,
            }
        });

        Self {
            x_config,
            x_kind,
            x_domain,
            categories,
            y_config: &config.y_axis,
            y_kind,
            y_domain,
            y2,
        }
    }

    fn resolve(&self, plot: PlotArea) -> ChartResult<AxisSet> {
        let x_pixels = (plot.left, plot.right);
        let y_pixels = (plot.bottom, plot.top);
        let x = match self.categories {
            Some(categories) => {
                resolve_categorical_axis(&self.x_config, categories, self.x_domain, x_pixels)?
            }
            None => resolve_numeric_axis(
                &self.x_config,
                self.x_kind,
                self.x_domain,
                x_pixels,
                AXIS_X_TARGET_SPACING_PX,
                "x",
            )?,
        };
        let y = resolve_numeric_axis(
            self.y_config,
            self.y_kind,
            self.y_domain,
            y_pixels,
            AXIS_Y_TARGET_SPACING_PX,
            "y",
        )?;
        let y2 = self
            .y2
            .as_ref()
            .map(|plan| {
                resolve_numeric_axis(
                    &plan.config,
                    plan.kind,
                    plan.domain,
                    y_pixels,
                    AXIS_Y_TARGET_SPACING_PX,
                    "y2",
                )
            })
            .transpose()?;
        Ok(AxisSet { x, y, y2 })
    }
}

fn collect_values(series: &[PlottedSeries<'_>]) -> Vec<f64> {
    series
        .iter()
        .flat_map(|series| series.values.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::ChartEngine;
    use crate::api::{ChartConfig, SeriesStyle};
    use crate::data::{AlignedSeriesData, CellValue};
    use crate::error::ChartError;

    fn data() -> AlignedSeriesData {
        AlignedSeriesData::new()
            .with_x("Year", (2000..2010).map(CellValue::from).collect())
            .with_numeric_series("GDP", &[1.0, 2.0, 3.0, 2.5, 4.0, 5.0, 4.5, 6.0, 7.0, 8.0])
    }

    #[test]
    fn renders_numeric_chart() {
        let config = ChartConfig::default()
            .with_title("Output")
            .with_series(SeriesStyle::new("GDP"));
        let figure = ChartEngine::new().render_chart(&data(), &config).expect("render");
        assert_eq!(figure.viewport().width, 1000);
        assert_eq!(figure.frame.polylines().count(), 1);
        assert!(figure.frame.texts().any(|text| text.text == "Output"));
        assert!(figure.y2_axis.is_none());
    }

    #[test]
    fn empty_series_list_is_invalid_input() {
        let err = ChartEngine::new()
            .render_chart(&data(), &ChartConfig::default())
            .expect_err("no series");
        assert!(matches!(err, ChartError::InvalidChartInput(_)));
    }

    #[test]
    fn text_x_on_numeric_axis_is_invalid_input() {
        let data = AlignedSeriesData::new()
            .with_x("Quarter", vec![CellValue::from("Q1"), CellValue::from("Q2")])
            .with_numeric_series("GDP", &[1.0, 2.0]);
        let config = ChartConfig::default().with_series(SeriesStyle::new("GDP"));
        let err = ChartEngine::new().render_chart(&data, &config).expect_err("text x");
        assert!(matches!(err, ChartError::InvalidChartInput(_)));
    }
}
