// File: crates/chart-touch/src/data.rs
// Summary: Data point and data set models for linear (line/bar) and angular (pie) charts.
// Notes:
// - Points are immutable once a chart is built; replace the whole set to change data.
// - Pie angles are stored in radians, clockwise from 12 o'clock.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{ChartError, Result};
use crate::theme::{Rgba, StrokeStyle};
use crate::geometry::normalize_degrees;

#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub id: Uuid,
    pub value: f64,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub colour: Option<Rgba>,
}

impl DataPoint {
    pub fn new(value: f64) -> Self {
        Self { id: Uuid::new_v4(), value, description: None, date: None, colour: None }
    }

    /// Construct a point rejecting NaN and infinities.
    pub fn try_new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(ChartError::NonFiniteValue(value));
        }
        Ok(Self::new(value))
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_colour(mut self, colour: Rgba) -> Self {
        self.colour = Some(colour);
        self
    }

    /// Description if present and not blank.
    pub fn label(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.trim().is_empty())
    }
}

/// Ordered series of points; insertion order is the plotting order.
#[derive(Clone, Debug, PartialEq)]
pub struct DataSet {
    pub id: Uuid,
    pub points: Vec<DataPoint>,
    /// Series title used by multi-series legends.
    pub legend_title: Option<String>,
    pub stroke: Option<StrokeStyle>,
    pub colour: Option<Rgba>,
}

impl DataSet {
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { id: Uuid::new_v4(), points, legend_title: None, stroke: None, colour: None }
    }

    pub fn with_legend_title(mut self, title: impl Into<String>) -> Self {
        self.legend_title = Some(title.into());
        self
    }

    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn with_colour(mut self, colour: Rgba) -> Self {
        self.colour = Some(colour);
        self
    }

    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn min_value(&self) -> Option<f64> {
        self.points.iter().map(|p| p.value).reduce(f64::min)
    }

    pub fn max_value(&self) -> Option<f64> {
        self.points.iter().map(|p| p.value).reduce(f64::max)
    }

    pub fn average(&self) -> Option<f64> {
        if self.points.is_empty() { return None; }
        Some(self.points.iter().map(|p| p.value).sum::<f64>() / self.points.len() as f64)
    }

    /// max - min, or `None` for an empty set.
    pub fn range(&self) -> Option<f64> {
        Some(self.max_value()? - self.min_value()?)
    }

    /// Epoch seconds for every point, or `None` if any point lacks a date.
    pub fn timestamps(&self) -> Option<Vec<f64>> {
        if self.points.is_empty() { return None; }
        self.points
            .iter()
            .map(|p| p.date.map(|d| d.timestamp_millis() as f64 / 1000.0))
            .collect()
    }
}

/// Several series sharing one set of axes (multi-line, grouped bar).
#[derive(Clone, Debug, PartialEq)]
pub struct MultiDataSet {
    pub id: Uuid,
    pub sets: Vec<DataSet>,
}

impl MultiDataSet {
    pub fn new(sets: Vec<DataSet>) -> Self {
        Self { id: Uuid::new_v4(), sets }
    }

    pub fn min_value(&self) -> Option<f64> {
        self.sets.iter().filter_map(DataSet::min_value).reduce(f64::min)
    }

    pub fn max_value(&self) -> Option<f64> {
        self.sets.iter().filter_map(DataSet::max_value).reduce(f64::max)
    }

    /// Longest series length; grouped bars lay out this many categories.
    pub fn category_count(&self) -> usize {
        self.sets.iter().map(DataSet::len).max().unwrap_or(0)
    }
}

/// Pie segment: a data point plus its angular placement.
#[derive(Clone, Debug, PartialEq)]
pub struct PieDataPoint {
    pub point: DataPoint,
    /// Radians, clockwise from 12 o'clock.
    pub start_angle: f64,
    /// Angular extent in radians.
    pub amount: f64,
}

/// Slack in degrees for round-off between stored angles and `atan2`.
const ANGLE_EPSILON: f64 = 1e-9;

impl PieDataPoint {
    pub fn start_degrees(&self) -> f64 { self.start_angle.to_degrees() }
    pub fn amount_degrees(&self) -> f64 { self.amount.to_degrees() }

    /// Half-open `[start, start + amount)` test; wraps past 360. Angles within
    /// `ANGLE_EPSILON` of a boundary are treated as on it.
    pub fn contains_degrees(&self, angle: f64) -> bool {
        let amount = self.amount_degrees();
        if amount <= ANGLE_EPSILON { return false; }
        if amount >= 360.0 - ANGLE_EPSILON { return true; }
        let mut offset = normalize_degrees(angle - self.start_degrees());
        // a hair below the start wraps to ~360
        if offset >= 360.0 - ANGLE_EPSILON {
            offset = 0.0;
        }
        offset < amount - ANGLE_EPSILON
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieDataSet {
    pub id: Uuid,
    pub points: Vec<PieDataPoint>,
}

impl PieDataSet {
    /// Lay segments out clockwise from 12 o'clock by share of the total.
    /// A zero total yields zero-width segments, which never match a touch.
    pub fn new(points: Vec<DataPoint>) -> Self {
        let total: f64 = points.iter().map(|p| p.value).sum();
        let mut start = 0.0f64;
        let points = points
            .into_iter()
            .map(|point| {
                let amount = if total > 0.0 { point.value / total * std::f64::consts::TAU } else { 0.0 };
                let seg = PieDataPoint { point, start_angle: start, amount };
                start += amount;
                seg
            })
            .collect();
        Self { id: Uuid::new_v4(), points }
    }

    /// Validating constructor: values must be finite, non-negative, and not all zero.
    pub fn try_new(points: Vec<DataPoint>) -> Result<Self> {
        for p in &points {
            if !p.value.is_finite() { return Err(ChartError::NonFiniteValue(p.value)); }
            if p.value < 0.0 { return Err(ChartError::NegativeSegment(p.value)); }
        }
        if points.iter().map(|p| p.value).sum::<f64>() <= 0.0 {
            return Err(ChartError::ZeroTotal);
        }
        Ok(Self::new(points))
    }

    /// Segments with caller-supplied placement, `(point, start_deg, amount_deg)`.
    pub fn from_degrees(segments: Vec<(DataPoint, f64, f64)>) -> Self {
        let points = segments
            .into_iter()
            .map(|(point, start, amount)| PieDataPoint {
                point,
                start_angle: start.to_radians(),
                amount: amount.to_radians(),
            })
            .collect();
        Self { id: Uuid::new_v4(), points }
    }

    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn total(&self) -> f64 {
        self.points.iter().map(|p| p.point.value).sum()
    }

    /// Each segment starts where the previous one ended, within `eps` radians.
    pub fn is_contiguous(&self, eps: f64) -> bool {
        self.points
            .windows(2)
            .all(|w| ((w[0].start_angle + w[0].amount) - w[1].start_angle).abs() <= eps)
    }
}
