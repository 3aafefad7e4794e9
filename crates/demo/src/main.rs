// File: crates/demo/src/main.rs
// Summary: Demo loads a label/value CSV, prints the ordered legend and the info view for each touch.

use anyhow::{Context, Result};
use chart_touch::{
    theme, ChartData, ChartMetadata, ChartState, DataPoint, DataSet, InfoViewConfig, LegendStyle, PieDataSet,
    Point, Rect, StateChange, StateObserver, TouchEvent,
};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    Pie,
    Doughnut,
    Line,
    Bar,
}

#[derive(Parser, Debug)]
#[command(name = "chart-touch-demo", about = "Resolve touches against a chart built from CSV data")]
struct Args {
    /// CSV file with `label,value[,date]` columns
    #[arg(default_value = "crates/demo/data/weekly.csv")]
    input: PathBuf,
    #[arg(long, value_enum, default_value_t = Kind::Pie)]
    kind: Kind,
    /// Chart width in points
    #[arg(long, default_value_t = 400.0)]
    width: f64,
    /// Chart height in points
    #[arg(long, default_value_t = 300.0)]
    height: f64,
    /// Touch location as `x,y`; repeatable. Defaults to the chart centre.
    #[arg(long = "touch", value_parser = parse_point)]
    touches: Vec<Point>,
    #[arg(long, default_value = "dark")]
    theme: String,
    /// Digits after the decimal point in the info view
    #[arg(long, default_value_t = 0)]
    decimals: usize,
}

/// Logs every state change.
struct LogObserver;

impl StateObserver for LogObserver {
    fn state_changed(&self, change: StateChange, state: &ChartState) {
        tracing::info!(?change, revision = state.revision(), matches = state.info_view().touch_overlay_info.len(), "state");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let points = load_points_csv(&args.input)
        .with_context(|| format!("failed to load CSV '{}'", args.input.display()))?;
    tracing::info!(count = points.len(), path = %args.input.display(), "loaded points");

    let chart = build_chart(args.kind, points)?;
    if !chart.has_enough_points() {
        anyhow::bail!("not enough points for a {} chart", chart.chart_type().name());
    }

    let title = args.input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart").to_string();
    let mut state = ChartState::new(chart)
        .with_metadata(ChartMetadata::new(title))
        .with_theme(theme::find(&args.theme));
    state.subscribe(Box::new(LogObserver));

    println!("{} ({})", state.metadata().title, state.data().chart_type().name());
    println!("Legend:");
    for l in state.legends() {
        let swatch = match &l.style {
            LegendStyle::Colour(c) => c.to_hex(),
            LegendStyle::Stroke(s) => format!("{} {}pt", s.colour.to_hex(), s.width),
        };
        println!("  [{}] {} ({})", l.priority, l.legend, swatch);
    }

    let bounds = Rect::from_ltwh(0.0, 0.0, args.width, args.height);
    let touches = if args.touches.is_empty() { vec![bounds.center()] } else { args.touches.clone() };
    let cfg = InfoViewConfig { decimals: args.decimals, ..InfoViewConfig::default() };

    for (i, &touch) in touches.iter().enumerate() {
        let event = if i == 0 { TouchEvent::Began(touch) } else { TouchEvent::Moved(touch) };
        let info = state.handle_touch(event, bounds);
        println!("Touch ({:.1}, {:.1}):", touch.x, touch.y);
        if info.is_empty() {
            println!("  (no data point)");
        }
        for line in info.lines(&cfg) {
            println!("  {line}");
        }
        if let Some(m) = info.position_of_marker {
            println!("  marker at ({:.1}, {:.1})", m.x, m.y);
        }
    }
    state.handle_touch(TouchEvent::Ended, bounds);
    Ok(())
}

fn build_chart(kind: Kind, points: Vec<DataPoint>) -> Result<ChartData> {
    Ok(match kind {
        Kind::Pie => ChartData::Pie(PieDataSet::try_new(points)?),
        Kind::Doughnut => ChartData::doughnut(PieDataSet::try_new(points)?, 0.5)?,
        Kind::Line => ChartData::line(DataSet::new(points)),
        Kind::Bar => ChartData::Bar(DataSet::new(points)),
    })
}

fn parse_point(s: &str) -> std::result::Result<Point, String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected x,y but got '{s}'"))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("bad x '{x}': {e}"))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("bad y '{y}': {e}"))?;
    Ok(Point::new(x, y))
}

/// Load `label,value[,date]` rows; rows without a numeric value are skipped.
fn load_points_csv(path: &Path) -> Result<Vec<DataPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_label = idx(&["label", "name", "description"]);
    let i_value = idx(&["value", "amount", "y"]).context("no value column")?;
    let i_date = idx(&["date", "time", "timestamp"]);

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let Some(value) = rec.get(i_value).and_then(|s| s.trim().parse::<f64>().ok()) else {
            tracing::warn!(row, "skipping row without a numeric value");
            continue;
        };
        let mut point = DataPoint::try_new(value)?;
        if let Some(label) = i_label.and_then(|i| rec.get(i)).filter(|s| !s.trim().is_empty()) {
            point = point.with_description(label.trim());
        }
        if let Some(date) = i_date.and_then(|i| rec.get(i)).and_then(parse_date) {
            point = point.with_date(date);
        }
        out.push(point);
    }
    Ok(out)
}

fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(d) = DateTime::parse_from_rfc3339(s) {
        return Some(d.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
