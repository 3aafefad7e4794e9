// File: crates/chart-touch/src/types.rs
// Summary: Shared tags and option structs (chart type tag, baseline, touch options).

/// Which chart variant produced a value; carried on legend entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartType {
    Pie,
    Doughnut,
    Line,
    MultiLine,
    Bar,
    GroupedBar,
}

impl ChartType {
    pub fn name(&self) -> &'static str {
        match self {
            ChartType::Pie => "pie",
            ChartType::Doughnut => "doughnut",
            ChartType::Line => "line",
            ChartType::MultiLine => "multi-line",
            ChartType::Bar => "bar",
            ChartType::GroupedBar => "grouped-bar",
        }
    }
}

/// Lower bound of the value axis for line charts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Baseline {
    #[default]
    Zero,
    MinimumValue,
}

/// Options for touch resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchConfig {
    /// Linear charts: ignore touches outside the chart rectangle. When false the
    /// x coordinate is clamped into the rectangle, so drags past an edge keep
    /// selecting the outermost point.
    pub reject_outside_bounds: bool,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self { reject_outside_bounds: true }
    }
}
