// File: crates/chart-touch/tests/state.rs
// Purpose: Chart state container: touch events, legends and observer notification.

use std::cell::RefCell;
use std::rc::Rc;

use chart_touch::{
    ChartData, ChartMetadata, ChartState, DataPoint, DataSet, InfoViewConfig, PieDataSet, Point, Rect,
    StateChange, StateObserver, Theme, TouchEvent,
};

struct Recorder {
    seen: Rc<RefCell<Vec<(StateChange, u64, usize)>>>,
}

impl StateObserver for Recorder {
    fn state_changed(&self, change: StateChange, state: &ChartState) {
        self.seen.borrow_mut().push((change, state.revision(), state.info_view().touch_overlay_info.len()));
    }
}

fn bar_state() -> ChartState {
    let points = vec![
        DataPoint::new(3.0).with_description("Mon"),
        DataPoint::new(5.0),
        DataPoint::new(4.0).with_description("Wed"),
    ];
    ChartState::new(ChartData::Bar(DataSet::new(points))).with_metadata(ChartMetadata::new("Week"))
}

fn bounds() -> Rect {
    Rect::from_ltwh(0.0, 0.0, 300.0, 100.0)
}

#[test]
fn legends_built_on_construction() {
    let state = bar_state();
    let labels: Vec<&str> = state.legends().iter().map(|l| l.legend.as_str()).collect();
    assert_eq!(labels, vec!["Mon", "Wed"]);
    assert_eq!(state.metadata().title, "Week");
    assert_eq!(state.revision(), 0);
    assert!(state.info_view().is_empty());
}

#[test]
fn touch_events_update_info_view_and_notify() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut state = bar_state();
    state.subscribe(Box::new(Recorder { seen: seen.clone() }));

    let info = state.handle_touch(TouchEvent::Began(Point::new(150.0, 50.0)), bounds());
    assert_eq!(info.touch_overlay_info.len(), 1);
    assert_eq!(info.touch_overlay_info[0].index, 1);
    assert!(info.is_touch_current);
    assert_eq!(info.position_of_marker, info.touch_overlay_info[0].marker);

    let info = state.handle_touch(TouchEvent::Moved(Point::new(250.0, 50.0)), bounds());
    assert_eq!(info.touch_overlay_info.len(), 1);
    assert_eq!(info.touch_overlay_info[0].index, 2);

    state.handle_touch(TouchEvent::Ended, bounds());
    assert!(state.info_view().is_empty());
    assert!(!state.info_view().is_touch_current);
    assert_eq!(state.revision(), 3);

    let seen = seen.borrow();
    assert_eq!(
        *seen,
        vec![(StateChange::Touch, 1, 1), (StateChange::Touch, 2, 1), (StateChange::TouchEnded, 3, 0)]
    );
}

#[test]
fn touch_without_match_clears_previous_matches() {
    let mut state = bar_state();
    state.handle_touch(TouchEvent::Began(Point::new(10.0, 10.0)), bounds());
    assert_eq!(state.info_view().touch_overlay_info.len(), 1);

    let info = state.handle_touch(TouchEvent::Moved(Point::new(-20.0, 10.0)), bounds());
    assert!(info.touch_overlay_info.is_empty());
    assert!(info.position_of_marker.is_none());
}

#[test]
fn replace_data_rebuilds_legend_and_drops_touch() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut state = bar_state().with_theme(Theme::light());
    state.subscribe(Box::new(Recorder { seen: seen.clone() }));
    state.handle_touch(TouchEvent::Began(Point::new(10.0, 10.0)), bounds());

    let pie = PieDataSet::new(vec![DataPoint::new(1.0).with_description("Only")]);
    state.replace_data(ChartData::Pie(pie));

    assert_eq!(state.legends().len(), 1);
    assert_eq!(state.legends()[0].legend, "Only");
    assert!(state.info_view().is_empty());
    assert_eq!(seen.borrow().last().map(|s| s.0), Some(StateChange::Data));
    assert_eq!(state.theme().name, "light");
}

#[test]
fn info_lines_format_matches() {
    let mut state = bar_state();
    state.handle_touch(TouchEvent::Began(Point::new(10.0, 10.0)), bounds());
    let cfg = InfoViewConfig { decimals: 1, unit: Some("kg".into()), date_format: None };
    assert_eq!(state.info_view().lines(&cfg), vec!["Mon: 3.0 kg".to_string()]);

    state.handle_touch(TouchEvent::Moved(Point::new(150.0, 10.0)), bounds());
    assert_eq!(state.info_view().lines(&InfoViewConfig::default()), vec!["5".to_string()]);
}
