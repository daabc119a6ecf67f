use std::fs;
use std::path::{Path, PathBuf};

use sheet_chart::api::{ChartConfig, ChartConfigBuilder, ChartSession};
use sheet_chart::data::{DataSelection, Sheet, Workbook, align_columns};
use sheet_chart::render::ExportFormat;

const USAGE: &str = "usage: render_chart --sheet <json> --x <column> --out <path> \
[--config <json>] [--sheet-name <name>] [--format png|svg|pdf] [--dpi <n>] \
[--theme <name>] [--style <name>] [--periods <name>] [--title <text>]";

#[derive(Debug, Default)]
struct CliArgs {
    sheet: PathBuf,
    sheet_name: Option<String>,
    x_column: String,
    config: Option<PathBuf>,
    out: PathBuf,
    format: Option<String>,
    dpi: Option<u32>,
    theme: Option<String>,
    style: Option<String>,
    periods: Option<String>,
    title: Option<String>,
}

fn main() {
    let _ = sheet_chart::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let sheet = load_sheet(&args.sheet, args.sheet_name.as_deref())?;
    let config = match &args.config {
        Some(path) => {
            let raw = read(path)?;
            ChartConfig::from_json(&raw).map_err(|err| err.to_string())?
        }
        None => build_config(&args, &sheet)?,
    };
    if config.series.is_empty() {
        return Err(format!(
            "no series to plot; sheet `{}` has no numeric columns besides `{}`",
            sheet.name(),
            args.x_column
        ));
    }

    let y_columns: Vec<&str> = config
        .series
        .iter()
        .map(|series| series.column.as_str())
        .collect();
    let data = align_columns(&sheet, &args.x_column, &y_columns).map_err(|err| err.to_string())?;

    let format = match &args.format {
        Some(format) => format.clone(),
        None => ExportFormat::from_path(&args.out)
            .unwrap_or(ExportFormat::Png)
            .to_string(),
    };

    let mut session = ChartSession::default();
    let figure = session
        .render(&data, &config)
        .map_err(|err| err.to_string())?;
    for name in &figure.skipped_highlights {
        eprintln!("warning: period highlight `{name}` skipped");
    }
    session
        .export(&args.out, &format, args.dpi)
        .map_err(|err| err.to_string())?;
    println!("{}", args.out.display());
    Ok(())
}

fn build_config(args: &CliArgs, sheet: &Sheet) -> Result<ChartConfig, String> {
    let selection = DataSelection::auto_select_numeric(sheet, &args.x_column);
    let mut builder = ChartConfigBuilder::new(selection);
    if let Some(name) = &args.theme {
        builder = builder.with_theme(name).map_err(|err| err.to_string())?;
    }
    if let Some(name) = &args.style {
        builder = builder
            .with_style_preset(name)
            .map_err(|err| err.to_string())?;
    }
    if let Some(name) = &args.periods {
        builder = builder
            .with_period_preset(name)
            .map_err(|err| err.to_string())?;
    }
    if let Some(title) = &args.title {
        builder = builder.with_title(title.clone());
    }
    Ok(builder.build())
}

fn load_sheet(path: &Path, sheet_name: Option<&str>) -> Result<Sheet, String> {
    let raw = read(path)?;
    match sheet_name {
        Some(name) => {
            let workbook = Workbook::from_json(&raw).map_err(|err| err.to_string())?;
            workbook.sheet(name).cloned().map_err(|err| err.to_string())
        }
        None => Sheet::from_json(&raw).or_else(|sheet_err| {
            let workbook = Workbook::from_json(&raw).map_err(|_| sheet_err.to_string())?;
            workbook
                .first_sheet()
                .cloned()
                .ok_or_else(|| format!("workbook `{}` has no sheets", path.display()))
        }),
    }
}

fn read(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut parsed = CliArgs::default();
    let mut sheet = None::<PathBuf>;
    let mut x_column = None::<String>;
    let mut out = None::<PathBuf>;

    while let Some(flag) = args.next() {
        let mut value = || {
            args.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match flag.as_str() {
            "--sheet" => sheet = Some(PathBuf::from(value()?)),
            "--sheet-name" => parsed.sheet_name = Some(value()?),
            "--x" => x_column = Some(value()?),
            "--config" => parsed.config = Some(PathBuf::from(value()?)),
            "--out" => out = Some(PathBuf::from(value()?)),
            "--format" => parsed.format = Some(value()?),
            "--dpi" => {
                let raw = value()?;
                let dpi = raw
                    .parse::<u32>()
                    .map_err(|err| format!("invalid --dpi `{raw}`: {err}"))?;
                parsed.dpi = Some(dpi);
            }
            "--theme" => parsed.theme = Some(value()?),
            "--style" => parsed.style = Some(value()?),
            "--periods" => parsed.periods = Some(value()?),
            "--title" => parsed.title = Some(value()?),
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`\n{USAGE}")),
        }
    }

    parsed.sheet = sheet.ok_or_else(|| format!("missing --sheet\n{USAGE}"))?;
    parsed.x_column = x_column.ok_or_else(|| format!("missing --x\n{USAGE}"))?;
    parsed.out = out.ok_or_else(|| format!("missing --out\n{USAGE}"))?;
    Ok(parsed)
}
