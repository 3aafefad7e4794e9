// File: crates/chart-touch/src/touch.rs
// Summary: Touch resolution; maps a touch in host coordinates to the data point(s) under it.
// Notes:
// - Angular charts (pie/doughnut) test the touch angle against half-open segment
//   intervals and reject touches outside the ring.
// - Linear charts (line/bar) map the x coordinate onto point slots; multi-series
//   charts resolve each series on its own and return one match per series.
// - Resolution is pure: identical inputs give identical output.

use crate::chart::ChartData;
use crate::data::{DataPoint, DataSet, MultiDataSet, PieDataSet};
use crate::geometry::{clockwise_degrees, Point, Rect};
use crate::types::{Baseline, TouchConfig};

#[derive(Clone, Debug, PartialEq)]
pub struct TouchMatch {
    /// Series index; always 0 for single-series charts.
    pub series: usize,
    /// Point index within the series.
    pub index: usize,
    pub point: DataPoint,
    /// Where a renderer should draw the point indicator. `None` for pie and
    /// doughnut charts, which highlight the wedge instead.
    pub marker: Option<Point>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TouchResolution {
    pub matches: Vec<TouchMatch>,
}

impl TouchResolution {
    pub fn is_empty(&self) -> bool { self.matches.is_empty() }

    /// Marker of the first match that has one.
    pub fn marker(&self) -> Option<Point> {
        self.matches.iter().find_map(|m| m.marker)
    }
}

/// Resolve with default options.
pub fn resolve(location: Point, bounds: Rect, chart: &ChartData) -> TouchResolution {
    resolve_with(location, bounds, chart, &TouchConfig::default())
}

pub fn resolve_with(location: Point, bounds: Rect, chart: &ChartData, config: &TouchConfig) -> TouchResolution {
    let matches = match chart {
        ChartData::Pie(data) => resolve_angular(location, bounds, data, 0.0),
        ChartData::Doughnut { data, inner_radius_fraction } => {
            resolve_angular(location, bounds, data, *inner_radius_fraction)
        }
        ChartData::Line { data, baseline } => {
            let Some(x) = touch_x(location, bounds, config) else { return TouchResolution::default() };
            let range = line_value_range(data.min_value(), data.max_value(), *baseline);
            resolve_line(x, bounds, data, range, 0).into_iter().collect()
        }
        ChartData::MultiLine { data, baseline } => {
            let Some(x) = touch_x(location, bounds, config) else { return TouchResolution::default() };
            let range = line_value_range(data.min_value(), data.max_value(), *baseline);
            data.sets
                .iter()
                .enumerate()
                .filter_map(|(series, set)| resolve_line(x, bounds, set, range, series))
                .collect()
        }
        ChartData::Bar(data) => {
            let Some(x) = touch_x(location, bounds, config) else { return TouchResolution::default() };
            resolve_bar(x, bounds, data, data.max_value().unwrap_or(0.0))
                .into_iter()
                .collect()
        }
        ChartData::GroupedBar(data) => {
            let Some(x) = touch_x(location, bounds, config) else { return TouchResolution::default() };
            resolve_grouped_bar(x, bounds, data)
        }
    };
    tracing::trace!(
        chart = chart.chart_type().name(),
        x = location.x,
        y = location.y,
        matches = matches.len(),
        "resolved touch"
    );
    TouchResolution { matches }
}

// ---- angular ----------------------------------------------------------------

fn resolve_angular(location: Point, bounds: Rect, data: &PieDataSet, inner_fraction: f64) -> Vec<TouchMatch> {
    if data.is_empty() || bounds.is_empty() {
        return Vec::new();
    }
    let center = bounds.center();
    let radius = bounds.width.min(bounds.height) * 0.5;
    let dist = center.distance(location);
    // the exact centre has no angle
    if dist <= 0.0 || dist > radius || dist < radius * inner_fraction {
        return Vec::new();
    }
    let angle = clockwise_degrees(center, location);
    // segments never overlap, so the first hit is the only hit
    data.points
        .iter()
        .enumerate()
        .find(|(_, seg)| seg.contains_degrees(angle))
        .map(|(index, seg)| TouchMatch { series: 0, index, point: seg.point.clone(), marker: None })
        .into_iter()
        .collect()
}

// ---- linear -----------------------------------------------------------------

/// Horizontal touch position, or `None` when the touch is rejected.
fn touch_x(location: Point, bounds: Rect, config: &TouchConfig) -> Option<f64> {
    if bounds.width <= 0.0 {
        return None;
    }
    if config.reject_outside_bounds && !bounds.contains(location) {
        return None;
    }
    Some(location.x.clamp(bounds.left, bounds.right()))
}

/// Value range mapped onto the chart height: (low, high).
fn line_value_range(min: Option<f64>, max: Option<f64>, baseline: Baseline) -> (f64, f64) {
    let (Some(min), Some(max)) = (min, max) else { return (0.0, 1.0) };
    let low = match baseline {
        Baseline::Zero => min.min(0.0),
        Baseline::MinimumValue => min,
    };
    (low, max)
}

#[inline]
fn value_to_y(value: f64, (low, high): (f64, f64), bounds: Rect) -> f64 {
    let span = (high - low).max(1e-9);
    bounds.bottom() - (value - low) / span * bounds.height
}

fn resolve_line(x: f64, bounds: Rect, set: &DataSet, range: (f64, f64), series: usize) -> Option<TouchMatch> {
    let n = set.len();
    if n == 0 {
        return None;
    }
    let (index, marker_x) = match set.timestamps() {
        Some(ts) => nearest_by_time(x, bounds, &ts)?,
        None => nearest_by_index(x, bounds, n),
    };
    let point = &set.points[index];
    Some(TouchMatch {
        series,
        index,
        point: point.clone(),
        marker: Some(Point::new(marker_x, value_to_y(point.value, range, bounds))),
    })
}

/// Points spread evenly from the left to the right edge.
fn nearest_by_index(x: f64, bounds: Rect, n: usize) -> (usize, f64) {
    if n == 1 {
        return (0, bounds.center().x);
    }
    let step = bounds.width / (n - 1) as f64;
    let index = (((x - bounds.left) / step).round().max(0.0) as usize).min(n - 1);
    (index, bounds.left + index as f64 * step)
}

/// Points placed by date; the touch maps onto the date span.
fn nearest_by_time(x: f64, bounds: Rect, ts: &[f64]) -> Option<(usize, f64)> {
    let t_min = ts.iter().copied().reduce(f64::min)?;
    let t_max = ts.iter().copied().reduce(f64::max)?;
    let span = t_max - t_min;
    if span <= 0.0 {
        // all on one date: fall back to even spacing
        return Some(nearest_by_index(x, bounds, ts.len()));
    }
    let t = t_min + (x - bounds.left) / bounds.width * span;
    let mut best = 0usize;
    for (i, &ti) in ts.iter().enumerate() {
        // strict `<` keeps the earliest index on ties
        if (ti - t).abs() < (ts[best] - t).abs() {
            best = i;
        }
    }
    Some((best, bounds.left + (ts[best] - t_min) / span * bounds.width))
}

fn bar_top(value: f64, max: f64, bounds: Rect) -> f64 {
    value_to_y(value.max(0.0), (0.0, max.max(0.0)), bounds)
}

/// Bars occupy equal slots; the touched slot wins.
fn slot_index(x: f64, bounds: Rect, n: usize) -> usize {
    let slot = bounds.width / n as f64;
    (((x - bounds.left) / slot).floor().max(0.0) as usize).min(n - 1)
}

fn resolve_bar(x: f64, bounds: Rect, set: &DataSet, max: f64) -> Option<TouchMatch> {
    let n = set.len();
    if n == 0 {
        return None;
    }
    let index = slot_index(x, bounds, n);
    let slot = bounds.width / n as f64;
    let point = &set.points[index];
    Some(TouchMatch {
        series: 0,
        index,
        point: point.clone(),
        marker: Some(Point::new(bounds.left + (index as f64 + 0.5) * slot, bar_top(point.value, max, bounds))),
    })
}

/// Categories share slots; inside a slot each series takes an equal sub-slot.
fn resolve_grouped_bar(x: f64, bounds: Rect, data: &MultiDataSet) -> Vec<TouchMatch> {
    let categories = data.category_count();
    if categories == 0 {
        return Vec::new();
    }
    let index = slot_index(x, bounds, categories);
    let slot = bounds.width / categories as f64;
    let sub = slot / data.sets.len() as f64;
    let max = data.max_value().unwrap_or(0.0);
    data.sets
        .iter()
        .enumerate()
        .filter_map(|(series, set)| {
            let point = set.points.get(index)?;
            let cx = bounds.left + index as f64 * slot + (series as f64 + 0.5) * sub;
            Some(TouchMatch {
                series,
                index,
                point: point.clone(),
                marker: Some(Point::new(cx, bar_top(point.value, max, bounds))),
            })
        })
        .collect()
}
