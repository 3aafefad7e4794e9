// File: crates/chart-touch/tests/legend.rs
// Purpose: Legend building and priority ordering.

use chart_touch::legend::{build, order, DEFAULT_PRIORITY};
use chart_touch::{
    ChartData, ChartType, DataPoint, DataSet, LegendStyle, MultiDataSet, PieDataSet, Rgba, StrokeStyle, Theme,
};

#[test]
fn undescribed_points_are_skipped_in_order() {
    let a = DataPoint::new(1.0).with_description("Alpha");
    let b = DataPoint::new(2.0);
    let c = DataPoint::new(3.0).with_description("Gamma");
    let (a_id, c_id) = (a.id, c.id);
    let chart = ChartData::Pie(PieDataSet::new(vec![a, b, c]));

    let legends = build(&chart, &Theme::dark());
    assert_eq!(legends.len(), 2);
    assert_eq!(legends[0].legend, "Alpha");
    assert_eq!(legends[0].id, a_id);
    assert_eq!(legends[1].legend, "Gamma");
    assert_eq!(legends[1].id, c_id);
    assert!(legends.iter().all(|l| l.priority == DEFAULT_PRIORITY && l.chart_type == ChartType::Pie));
}

#[test]
fn entry_count_is_points_minus_blank_descriptions() {
    let points: Vec<DataPoint> = (0..10)
        .map(|i| {
            let p = DataPoint::new(i as f64);
            match i % 3 {
                0 => p,
                1 => p.with_description("  "),
                _ => p.with_description(format!("p{i}")),
            }
        })
        .collect();
    let legends = build(&ChartData::Bar(DataSet::new(points)), &Theme::dark());
    let labels: Vec<&str> = legends.iter().map(|l| l.legend.as_str()).collect();
    assert_eq!(labels, vec!["p2", "p5", "p8"]);
}

#[test]
fn pie_colours_follow_point_then_palette() {
    let theme = Theme::light();
    let red = Rgba::rgb(255, 0, 0);
    let chart = ChartData::Pie(PieDataSet::new(vec![
        DataPoint::new(1.0).with_description("a").with_colour(red),
        DataPoint::new(1.0).with_description("b"),
    ]));
    let legends = build(&chart, &theme);
    assert_eq!(legends[0].style, LegendStyle::Colour(red));
    assert_eq!(legends[1].style, LegendStyle::Colour(theme.colour_at(1)));
}

#[test]
fn line_legends_carry_stroke() {
    let stroke = StrokeStyle { colour: Rgba::rgb(1, 2, 3), width: 4.0, dash: vec![2.0, 1.0] };
    let data = DataSet::new(vec![DataPoint::new(1.0).with_description("Mon"), DataPoint::new(2.0)])
        .with_stroke(stroke.clone());
    let legends = build(&ChartData::line(data), &Theme::dark());
    assert_eq!(legends.len(), 1);
    assert_eq!(legends[0].style, LegendStyle::Stroke(stroke));
    assert_eq!(legends[0].chart_type, ChartType::Line);
}

#[test]
fn multi_series_legends_use_set_titles() {
    let theme = Theme::dark();
    let first = DataSet::new(vec![DataPoint::new(1.0).with_description("ignored")]).with_legend_title("Sales");
    let untitled = DataSet::new(vec![DataPoint::new(2.0)]);
    let third = DataSet::new(vec![DataPoint::new(3.0)]).with_legend_title("Costs");
    let (first_id, third_id) = (first.id, third.id);

    let chart = ChartData::multi_line(MultiDataSet::new(vec![first.clone(), untitled.clone(), third.clone()]));
    let legends = build(&chart, &theme);
    assert_eq!(legends.len(), 2);
    assert_eq!((legends[0].id, legends[0].legend.as_str()), (first_id, "Sales"));
    assert_eq!((legends[1].id, legends[1].legend.as_str()), (third_id, "Costs"));
    assert_eq!(legends[1].style, LegendStyle::Stroke(StrokeStyle::solid(theme.colour_at(2), theme.line_width)));

    let chart = ChartData::GroupedBar(MultiDataSet::new(vec![first, untitled, third]));
    let legends = build(&chart, &theme);
    assert_eq!(legends.len(), 2);
    assert_eq!(legends[0].style, LegendStyle::Colour(theme.colour_at(0)));
    assert_eq!(legends[1].chart_type, ChartType::GroupedBar);
}

#[test]
fn order_is_stable_by_priority() {
    let points = ["a", "b", "c", "d", "e"]
        .iter()
        .map(|d| DataPoint::new(1.0).with_description(*d))
        .collect();
    let mut legends = build(&ChartData::Bar(DataSet::new(points)), &Theme::dark());
    legends[0].priority = 3;
    legends[1].priority = 1;
    legends[2].priority = 2;
    legends[3].priority = 1;
    legends[4].priority = 3;

    let ordered = order(legends);
    let labels: Vec<&str> = ordered.iter().map(|l| l.legend.as_str()).collect();
    assert_eq!(labels, vec!["b", "d", "c", "a", "e"]);
}

#[test]
fn empty_chart_has_empty_legend() {
    assert!(build(&ChartData::Pie(PieDataSet::new(Vec::new())), &Theme::dark()).is_empty());
}
