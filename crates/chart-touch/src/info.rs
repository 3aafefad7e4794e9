// File: crates/chart-touch/src/info.rs
// Summary: Info view payload (currently touched points) and its text formatting.

use chrono::format::{Item, StrftimeItems};

use crate::geometry::Point;
use crate::touch::{TouchMatch, TouchResolution};

/// Formatting options for the info box text.
#[derive(Clone, Debug, PartialEq)]
pub struct InfoViewConfig {
    /// Digits after the decimal point.
    pub decimals: usize,
    /// Appended after the value, separated by a space.
    pub unit: Option<String>,
    /// `chrono` strftime pattern; dates are omitted when `None` or when the
    /// pattern does not parse.
    pub date_format: Option<String>,
}

impl Default for InfoViewConfig {
    fn default() -> Self {
        Self { decimals: 0, unit: None, date_format: Some("%Y-%m-%d".to_string()) }
    }
}

/// Transient state for the currently touched point(s). Overwritten on every
/// touch event, cleared when the touch ends or hits nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InfoViewData {
    pub touch_overlay_info: Vec<TouchMatch>,
    pub touch_location: Option<Point>,
    /// Marker of the first match, for a single indicator.
    pub position_of_marker: Option<Point>,
    pub is_touch_current: bool,
}

impl InfoViewData {
    /// Replace the contents with the latest resolution.
    pub fn apply(&mut self, location: Point, resolution: TouchResolution) {
        self.position_of_marker = resolution.marker();
        self.touch_overlay_info = resolution.matches;
        self.touch_location = Some(location);
        self.is_touch_current = true;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.touch_overlay_info.is_empty()
    }

    /// One line per match: `description: value unit (date)`.
    pub fn lines(&self, config: &InfoViewConfig) -> Vec<String> {
        self.touch_overlay_info
            .iter()
            .map(|m| {
                let p = &m.point;
                let mut line = String::new();
                if let Some(label) = p.label() {
                    line.push_str(label);
                    line.push_str(": ");
                }
                line.push_str(&format!("{:.*}", config.decimals, p.value));
                if let Some(unit) = &config.unit {
                    line.push(' ');
                    line.push_str(unit);
                }
                if let (Some(fmt), Some(date)) = (&config.date_format, p.date) {
                    if is_valid_date_format(fmt) {
                        line.push_str(&format!(" ({})", date.format(fmt)));
                    } else {
                        tracing::warn!(format = %fmt, "invalid date format, date omitted");
                    }
                }
                line
            })
            .collect()
    }
}

/// chrono reports bad patterns only when formatting, which `format!` turns into a panic.
fn is_valid_date_format(fmt: &str) -> bool {
    !StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error))
}
