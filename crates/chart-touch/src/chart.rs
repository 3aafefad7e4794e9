// File: crates/chart-touch/src/chart.rs
// Summary: Closed set of chart variants and their metadata.

use crate::data::{DataSet, MultiDataSet, PieDataSet};
use crate::error::{ChartError, Result};
use crate::types::{Baseline, ChartType};

#[derive(Clone, Debug, PartialEq)]
pub enum ChartData {
    Pie(PieDataSet),
    Doughnut { data: PieDataSet, inner_radius_fraction: f64 },
    Line { data: DataSet, baseline: Baseline },
    MultiLine { data: MultiDataSet, baseline: Baseline },
    Bar(DataSet),
    GroupedBar(MultiDataSet),
}

impl ChartData {
    pub fn line(data: DataSet) -> Self {
        ChartData::Line { data, baseline: Baseline::default() }
    }

    pub fn multi_line(data: MultiDataSet) -> Self {
        ChartData::MultiLine { data, baseline: Baseline::default() }
    }

    /// Doughnut with a hole of `inner_radius_fraction` of the outer radius.
    pub fn doughnut(data: PieDataSet, inner_radius_fraction: f64) -> Result<Self> {
        if !(0.0..1.0).contains(&inner_radius_fraction) {
            return Err(ChartError::InnerRadius(inner_radius_fraction));
        }
        Ok(ChartData::Doughnut { data, inner_radius_fraction })
    }

    /// Builder-style baseline override; no effect on non-line charts.
    pub fn with_baseline(mut self, value: Baseline) -> Self {
        match &mut self {
            ChartData::Line { baseline, .. } | ChartData::MultiLine { baseline, .. } => *baseline = value,
            _ => {}
        }
        self
    }

    pub fn chart_type(&self) -> ChartType {
        match self {
            ChartData::Pie(_) => ChartType::Pie,
            ChartData::Doughnut { .. } => ChartType::Doughnut,
            ChartData::Line { .. } => ChartType::Line,
            ChartData::MultiLine { .. } => ChartType::MultiLine,
            ChartData::Bar(_) => ChartType::Bar,
            ChartData::GroupedBar(_) => ChartType::GroupedBar,
        }
    }

    /// Whether there is enough data to draw something meaningful. Hosts check
    /// this before rendering or forwarding touches.
    pub fn has_enough_points(&self) -> bool {
        match self {
            ChartData::Pie(d) | ChartData::Doughnut { data: d, .. } => !d.is_empty(),
            ChartData::Line { data, .. } => data.len() >= 2,
            ChartData::Bar(data) => !data.is_empty(),
            ChartData::MultiLine { data, .. } => {
                !data.sets.is_empty() && data.sets.iter().all(|s| s.len() >= 2)
            }
            ChartData::GroupedBar(data) => data.category_count() > 0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartMetadata {
    pub title: String,
    pub subtitle: String,
}

impl ChartMetadata {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), subtitle: String::new() }
    }
}
