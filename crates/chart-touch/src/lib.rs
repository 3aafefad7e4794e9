// File: crates/chart-touch/src/lib.rs
// Summary: Core library entry point; exports chart data models, touch resolution and legends.

pub mod chart;
pub mod data;
pub mod error;
pub mod geometry;
pub mod info;
pub mod legend;
pub mod state;
pub mod theme;
pub mod touch;
pub mod types;

pub use chart::{ChartData, ChartMetadata};
pub use data::{DataPoint, DataSet, MultiDataSet, PieDataPoint, PieDataSet};
pub use error::ChartError;
pub use geometry::{Point, Rect};
pub use info::{InfoViewConfig, InfoViewData};
pub use legend::{LegendData, LegendStyle};
pub use state::{ChartState, StateChange, StateObserver, TouchEvent};
pub use theme::{Rgba, StrokeStyle, Theme};
pub use touch::{resolve, resolve_with, TouchMatch, TouchResolution};
pub use types::{Baseline, ChartType, TouchConfig};
