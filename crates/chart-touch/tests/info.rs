// File: crates/chart-touch/tests/info.rs
// Purpose: Info view text lines, including date formatting.

use chart_touch::{resolve, ChartData, DataPoint, DataSet, InfoViewConfig, InfoViewData, Point, Rect};
use chrono::{TimeZone, Utc};

fn touched_dated_bar() -> InfoViewData {
    let date = Utc.with_ymd_and_hms(2024, 6, 3, 12, 0, 0).unwrap();
    let chart = ChartData::Bar(DataSet::new(vec![DataPoint::new(7.0).with_description("Mon").with_date(date)]));
    let bounds = Rect::from_ltwh(0.0, 0.0, 100.0, 100.0);
    let touch = Point::new(50.0, 50.0);
    let mut info = InfoViewData::default();
    info.apply(touch, resolve(touch, bounds, &chart));
    info
}

#[test]
fn default_format_appends_date() {
    let info = touched_dated_bar();
    assert_eq!(info.lines(&InfoViewConfig::default()), vec!["Mon: 7 (2024-06-03)".to_string()]);
}

#[test]
fn custom_format_and_unit() {
    let info = touched_dated_bar();
    let cfg = InfoViewConfig { decimals: 2, unit: Some("h".into()), date_format: Some("%d/%m %H:%M".into()) };
    assert_eq!(info.lines(&cfg), vec!["Mon: 7.00 h (03/06 12:00)".to_string()]);
}

#[test]
fn invalid_format_omits_date() {
    let info = touched_dated_bar();
    let cfg = InfoViewConfig { date_format: Some("%Q".into()), ..InfoViewConfig::default() };
    assert_eq!(info.lines(&cfg), vec!["Mon: 7".to_string()]);
}
