// File: crates/chart-touch/src/legend.rs
// Summary: Legend builder; derives display-ready legend entries from chart data.

use uuid::Uuid;

use crate::chart::ChartData;
use crate::data::{DataPoint, DataSet, PieDataSet};
use crate::theme::{Rgba, StrokeStyle, Theme};
use crate::types::ChartType;

/// Priority given to every entry by the current chart types.
pub const DEFAULT_PRIORITY: i32 = 1;

#[derive(Clone, Debug, PartialEq)]
pub enum LegendStyle {
    Colour(Rgba),
    /// Line charts show a stroke sample instead of a swatch.
    Stroke(StrokeStyle),
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendData {
    /// Id of the data point or data set this entry describes.
    pub id: Uuid,
    pub legend: String,
    pub style: LegendStyle,
    /// Lower sorts first.
    pub priority: i32,
    pub chart_type: ChartType,
}

/// Build legend entries in data order. Points (single-series charts) or sets
/// (multi-series charts) without a label are skipped.
pub fn build(chart: &ChartData, theme: &Theme) -> Vec<LegendData> {
    let chart_type = chart.chart_type();
    let legends: Vec<LegendData> = match chart {
        ChartData::Pie(data) | ChartData::Doughnut { data, .. } => pie_entries(data, theme, chart_type),
        ChartData::Line { data, .. } => {
            let stroke = series_stroke(data, 0, theme);
            data.points
                .iter()
                .filter_map(|p| {
                    let style = match p.colour {
                        Some(colour) => StrokeStyle { colour, ..stroke.clone() },
                        None => stroke.clone(),
                    };
                    entry(p, LegendStyle::Stroke(style), chart_type)
                })
                .collect()
        }
        ChartData::Bar(data) => data
            .points
            .iter()
            .enumerate()
            .filter_map(|(i, p)| {
                let colour = p.colour.or(data.colour).unwrap_or_else(|| theme.colour_at(i));
                entry(p, LegendStyle::Colour(colour), chart_type)
            })
            .collect(),
        ChartData::MultiLine { data, .. } => data
            .sets
            .iter()
            .enumerate()
            .filter_map(|(i, set)| set_entry(set, LegendStyle::Stroke(series_stroke(set, i, theme)), chart_type))
            .collect(),
        ChartData::GroupedBar(data) => data
            .sets
            .iter()
            .enumerate()
            .filter_map(|(i, set)| {
                let colour = set.colour.unwrap_or_else(|| theme.colour_at(i));
                set_entry(set, LegendStyle::Colour(colour), chart_type)
            })
            .collect(),
    };
    tracing::debug!(chart = chart_type.name(), entries = legends.len(), "built legend");
    legends
}

/// Stable sort by priority; equal priorities keep build order.
pub fn order(mut legends: Vec<LegendData>) -> Vec<LegendData> {
    legends.sort_by_key(|l| l.priority);
    legends
}

fn pie_entries(data: &PieDataSet, theme: &Theme, chart_type: ChartType) -> Vec<LegendData> {
    data.points
        .iter()
        .enumerate()
        .filter_map(|(i, seg)| {
            let colour = seg.point.colour.unwrap_or_else(|| theme.colour_at(i));
            entry(&seg.point, LegendStyle::Colour(colour), chart_type)
        })
        .collect()
}

fn series_stroke(set: &DataSet, index: usize, theme: &Theme) -> StrokeStyle {
    set.stroke
        .clone()
        .unwrap_or_else(|| StrokeStyle::solid(set.colour.unwrap_or_else(|| theme.colour_at(index)), theme.line_width))
}

fn entry(point: &DataPoint, style: LegendStyle, chart_type: ChartType) -> Option<LegendData> {
    Some(LegendData {
        id: point.id,
        legend: point.label()?.to_string(),
        style,
        priority: DEFAULT_PRIORITY,
        chart_type,
    })
}

fn set_entry(set: &DataSet, style: LegendStyle, chart_type: ChartType) -> Option<LegendData> {
    let title = set.legend_title.as_deref().filter(|t| !t.trim().is_empty())?;
    Some(LegendData { id: set.id, legend: title.to_string(), style, priority: DEFAULT_PRIORITY, chart_type })
}
