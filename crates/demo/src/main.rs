// File: crates/demo/src/main.rs
// Summary: Demo loads a CSV/TSV/JSON file (or the built-in sample) and prints the
// inferred schema, summary statistics, chart points and one preview page.

use anyhow::{Context, Result};
use clap::Parser;
use glimpse_core::{format_cell, format_number, ChartKind, ChartPoint, Classification, LoadOutcome, ViewState};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "glimpse", version, about = "Inspect a small CSV, TSV or JSON file: schema, stats and chart data")]
struct Args {
    /// Input file (.csv, .tsv or .json)
    #[arg(required_unless_present = "sample")]
    file: Option<PathBuf>,

    /// Use the built-in 7-row sample instead of a file
    #[arg(long, conflicts_with = "file")]
    sample: bool,

    /// Chart kind: bar, line or scatter
    #[arg(long, default_value = "bar")]
    chart: ChartKind,

    /// X field (defaults to the first numeric column, else the first column)
    #[arg(short = 'x', long = "x-field")]
    x: Option<String>,

    /// Y field (defaults to the second numeric column, else the first)
    #[arg(short = 'y', long = "y-field")]
    y: Option<String>,

    /// Preview page to print (1-based)
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Print one JSON document instead of text
    #[arg(long)]
    json: bool,

    /// Also write the chart points as CSV (x,y) to this path
    #[arg(long)]
    out: Option<PathBuf>,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct ChartRow {
    x: String,
    y: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut view = ViewState::new();
    let source = load(&mut view, &args)?;

    view.set_chart_kind(args.chart);
    if args.x.is_some() {
        view.set_x_field(args.x.clone());
    }
    if args.y.is_some() {
        view.set_y_field(args.y.clone());
    }
    view.set_page(args.page);

    let cls = view.classification();
    let points = view.chart_data();

    if let Some(out) = &args.out {
        write_chart_csv(out, &points).with_context(|| format!("failed to write chart CSV '{}'", out.display()))?;
        tracing::info!(path = %out.display(), points = points.len(), "wrote chart points");
    }

    if args.json {
        print_json(&view, &cls, &points)?;
    } else {
        print_text(&view, &source, &cls, &points);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "glimpse=debug,glimpse_core=debug" } else { "glimpse=info,glimpse_core=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Read the input through the controller's read/complete cycle. Returns a display name.
fn load(view: &mut ViewState, args: &Args) -> Result<String> {
    if args.sample {
        view.load_sample();
        return Ok("built-in sample".to_string());
    }
    let path = args.file.as_deref().context("no input file given")?;
    let ticket = view.begin_read();
    let content = std::fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))?;
    let name = file_name(path);
    match view.complete_read(ticket, &content, &name) {
        LoadOutcome::Loaded { rows } => {
            tracing::info!(file = %path.display(), rows, "loaded");
            Ok(path.display().to_string())
        }
        LoadOutcome::Failed(msg) => anyhow::bail!("{msg}"),
        LoadOutcome::Stale => anyhow::bail!("read of '{}' was superseded", path.display()),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
}

fn write_chart_csv(path: &Path, points: &[ChartPoint]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("failed to create '{}'", parent.display()))?;
    }
    let mut wtr = csv::Writer::from_path(path)?;
    for p in points {
        wtr.serialize(ChartRow { x: p.x.to_string(), y: p.y })?;
    }
    wtr.flush()?;
    Ok(())
}

fn print_json(view: &ViewState, cls: &Classification, points: &[ChartPoint]) -> Result<()> {
    let columns: Vec<_> = view
        .dataset()
        .columns()
        .iter()
        .map(|c| json!({ "name": c, "kind": cls.kind_of(c) }))
        .collect();
    let doc = json!({
        "rows": view.dataset().len(),
        "columns": columns,
        "statistics": view.statistics(),
        "chart": {
            "kind": view.chart_kind(),
            "x": view.x_field(),
            "y": view.y_field(),
            "points": points,
        },
        "preview": {
            "page": view.page(),
            "total_pages": view.total_pages(),
            "rows": view.page_rows().iter().map(|r| r.cells()).collect::<Vec<_>>(),
        },
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn print_text(view: &ViewState, source: &str, cls: &Classification, points: &[ChartPoint]) {
    let ds = view.dataset();
    println!("Source: {source}");
    println!("Rows: {}", ds.len());

    println!("\nColumns:");
    let width = ds.columns().iter().map(|c| c.len()).max().unwrap_or(0);
    for c in ds.columns() {
        let kind = if cls.numeric.contains(c) { "numeric" } else { "categorical" };
        println!("  {c:<width$}  {kind}");
    }

    match view.statistics() {
        Some(s) => println!(
            "\nStatistics ({}): count {}, mean {}, min {}, max {}, std {}",
            s.column,
            s.count,
            format_number(s.mean),
            format_number(s.min),
            format_number(s.max),
            format_number(s.std)
        ),
        None => println!("\nStatistics: no numeric data"),
    }

    println!(
        "\nChart ({:?}, x={}, y={}): {} points",
        view.chart_kind(),
        view.x_field().unwrap_or("-"),
        view.y_field().unwrap_or("-"),
        points.len()
    );
    if points.is_empty() {
        println!("  No data to display");
    }
    for p in points {
        println!("  {:>16}  {}", p.x.to_string(), format_number(p.y));
    }

    println!("\nPreview page {} of {}:", view.page(), view.total_pages());
    if ds.is_empty() {
        println!("  (empty)");
        return;
    }
    println!("  {}", ds.columns().join(" | "));
    for r in view.page_rows() {
        let cells: Vec<String> = r.cells().iter().map(format_cell).collect();
        println!("  {}", cells.join(" | "));
    }
}
