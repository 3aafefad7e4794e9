// File: crates/chart-touch/src/state.rs
// Summary: Shared chart state (data, legends, info view) with explicit change notification.
// Notes:
// - Every mutation goes through a method that bumps `revision` and notifies observers.
// - Observers receive `&ChartState`; observers that record something use interior
//   mutability (`Cell`/`RefCell`).

use crate::chart::{ChartData, ChartMetadata};
use crate::geometry::{Point, Rect};
use crate::info::InfoViewData;
use crate::legend::{self, LegendData};
use crate::theme::Theme;
use crate::touch;
use crate::types::TouchConfig;

/// Touch input from the host, in the same space as the chart bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TouchEvent {
    Began(Point),
    Moved(Point),
    Ended,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateChange {
    /// Info view replaced by a new resolution.
    Touch,
    /// Info view cleared after the touch was released.
    TouchEnded,
    /// Data replaced and legends rebuilt.
    Data,
}

pub trait StateObserver {
    fn state_changed(&self, change: StateChange, state: &ChartState);
}

pub struct ChartState {
    data: ChartData,
    metadata: ChartMetadata,
    theme: Theme,
    touch_config: TouchConfig,
    legends: Vec<LegendData>,
    info_view: InfoViewData,
    revision: u64,
    observers: Vec<Box<dyn StateObserver>>,
}

impl ChartState {
    pub fn new(data: ChartData) -> Self {
        let theme = Theme::default();
        let legends = legend::order(legend::build(&data, &theme));
        Self {
            data,
            metadata: ChartMetadata::default(),
            theme,
            touch_config: TouchConfig::default(),
            legends,
            info_view: InfoViewData::default(),
            revision: 0,
            observers: Vec::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: ChartMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Legend colours come from the theme palette, so the legend is rebuilt.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self.legends = legend::order(legend::build(&self.data, &self.theme));
        self
    }

    pub fn with_touch_config(mut self, config: TouchConfig) -> Self {
        self.touch_config = config;
        self
    }

    pub fn subscribe(&mut self, observer: Box<dyn StateObserver>) {
        self.observers.push(observer);
    }

    pub fn data(&self) -> &ChartData { &self.data }
    pub fn metadata(&self) -> &ChartMetadata { &self.metadata }
    pub fn theme(&self) -> &Theme { &self.theme }
    pub fn legends(&self) -> &[LegendData] { &self.legends }
    pub fn info_view(&self) -> &InfoViewData { &self.info_view }
    /// Incremented once per notified change.
    pub fn revision(&self) -> u64 { self.revision }

    /// Resolve a touch against `bounds` and publish the result.
    pub fn handle_touch(&mut self, event: TouchEvent, bounds: Rect) -> &InfoViewData {
        match event {
            TouchEvent::Began(location) | TouchEvent::Moved(location) => {
                let resolution = touch::resolve_with(location, bounds, &self.data, &self.touch_config);
                self.info_view.apply(location, resolution);
                self.notify(StateChange::Touch);
            }
            TouchEvent::Ended => {
                self.info_view.clear();
                self.notify(StateChange::TouchEnded);
            }
        }
        &self.info_view
    }

    /// Swap in new data; legends are rebuilt wholesale and any touch is dropped.
    pub fn replace_data(&mut self, data: ChartData) {
        self.data = data;
        self.legends = legend::order(legend::build(&self.data, &self.theme));
        self.info_view.clear();
        self.notify(StateChange::Data);
    }

    fn notify(&mut self, change: StateChange) {
        self.revision += 1;
        tracing::debug!(?change, revision = self.revision, "chart state changed");
        for observer in &self.observers {
            observer.state_changed(change, self);
        }
    }
}

impl std::fmt::Debug for ChartState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartState")
            .field("chart_type", &self.data.chart_type())
            .field("legends", &self.legends.len())
            .field("info_view", &self.info_view)
            .field("revision", &self.revision)
            .field("observers", &self.observers.len())
            .finish()
    }
}
