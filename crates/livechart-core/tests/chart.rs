// File: crates/livechart-core/tests/chart.rs
// Purpose: LiveChart configuration, deferred/coalesced rebuilds, baseline policy and styling.

use std::cell::Cell;
use std::rc::Rc;

use livechart_core::{
    Dataset, DrawOp, HostView, Insets, LiveChart, RecordingSurface, StyleConfig,
};

#[derive(Default)]
struct HostLog {
    posts: Cell<usize>,
    invalidations: Cell<usize>,
}

struct TestHost(Rc<HostLog>);

impl HostView for TestHost {
    fn post_rebuild(&self) {
        self.0.posts.set(self.0.posts.get() + 1);
    }
    fn invalidate(&self) {
        self.0.invalidations.set(self.0.invalidations.get() + 1);
    }
}

fn chart_with_host() -> (LiveChart, Rc<HostLog>) {
    let log = Rc::new(HostLog::default());
    let mut chart = LiveChart::default();
    chart.set_host(Box::new(TestHost(log.clone()))).resize(400, 200, Insets::default());
    (chart, log)
}

#[test]
fn nothing_is_drawn_before_the_first_commit() {
    let (mut chart, log) = chart_with_host();
    chart.set_dataset(Dataset::from(vec![(0.0, 1.0), (1.0, 2.0)])).draw_fill();
    assert_eq!(log.posts.get(), 0);
    assert!(!chart.is_rebuild_scheduled());
    assert!(!chart.run_scheduled_rebuild());

    let mut surface = RecordingSurface::new();
    chart.draw(&mut surface);
    assert!(surface.ops.is_empty());
}

#[test]
fn draw_dataset_defers_the_rebuild_to_the_host_tick() {
    let (mut chart, log) = chart_with_host();
    chart.set_dataset(Dataset::from(vec![(0.0, 1.0), (1.0, 2.0)])).draw_dataset();

    assert_eq!(log.posts.get(), 1);
    assert!(chart.is_rebuild_scheduled());
    assert!(chart.geometry().is_none());

    assert!(chart.run_scheduled_rebuild());
    assert!(!chart.is_rebuild_scheduled());
    assert_eq!(log.invalidations.get(), 1);
    assert!(chart.geometry().is_some());
    assert!(!chart.run_scheduled_rebuild());
}

#[test]
fn pending_rebuilds_coalesce_and_use_latest_state() {
    let (mut chart, log) = chart_with_host();
    chart
        .set_dataset(Dataset::from(vec![(0.0, 1.0), (1.0, 2.0)]))
        .draw_dataset()
        .set_dataset(Dataset::from(vec![(0.0, 3.0), (1.0, 4.0), (2.0, 5.0), (3.0, 1.0)]))
        .draw_baseline()
        .set_style(StyleConfig::dark())
        .draw_dataset();

    assert_eq!(log.posts.get(), 1);
    assert!(chart.run_scheduled_rebuild());
    let g = chart.geometry().unwrap();
    assert_eq!(g.main_line.segment_count(), 3);
    assert_eq!(chart.baseline(), 3.0);
    assert_eq!(chart.paints().main_line.color, StyleConfig::dark().main_color);
    assert_eq!(log.invalidations.get(), 1);
}

#[test]
fn configuration_after_commit_schedules_again() {
    let (mut chart, log) = chart_with_host();
    chart.set_dataset(Dataset::from(vec![(0.0, 1.0), (1.0, 2.0)])).draw_dataset();
    chart.run_scheduled_rebuild();

    chart.set_dataset(Dataset::from(vec![(0.0, 9.0), (2.0, 4.0)]));
    assert_eq!(log.posts.get(), 2);
    chart.draw_fill().draw_y_bounds();
    assert_eq!(log.posts.get(), 2);
    chart.run_scheduled_rebuild();
    assert_eq!(chart.baseline(), 9.0);
}

#[test]
fn host_attached_late_still_receives_the_pending_request() {
    let log = Rc::new(HostLog::default());
    let mut chart = LiveChart::default();
    chart.set_dataset(Dataset::from(vec![(0.0, 1.0), (1.0, 2.0)])).draw_dataset();
    chart.set_host(Box::new(TestHost(log.clone())));
    assert_eq!(log.posts.get(), 1);
}

#[test]
fn auto_baseline_tracks_first_point() {
    let (mut chart, _log) = chart_with_host();
    chart.set_dataset(Dataset::from(vec![(0.0, 4.0), (1.0, 6.0)])).draw_dataset();
    chart.run_scheduled_rebuild();
    assert_eq!(chart.baseline(), 4.0);
    assert!(!chart.is_baseline_manual());

    chart.set_dataset(Dataset::from(vec![(0.0, -2.0), (1.0, 6.0)]));
    chart.run_scheduled_rebuild();
    assert_eq!(chart.baseline(), -2.0);
}

#[test]
fn manual_baseline_is_sticky() {
    let (mut chart, _log) = chart_with_host();
    chart
        .set_dataset(Dataset::from(vec![(0.0, 1.0), (1.0, 10.0)]))
        .set_baseline_manually(7.0)
        .draw_baseline()
        .draw_dataset();
    chart.run_scheduled_rebuild();
    assert_eq!(chart.baseline(), 7.0);

    chart.set_dataset(Dataset::from(vec![(0.0, 3.0), (1.0, 12.0)]));
    chart.run_scheduled_rebuild();
    assert_eq!(chart.baseline(), 7.0);
    assert!(chart.is_baseline_manual());

    let want_y = chart.mapper().y_to_px(7.0);
    let seg = chart.geometry().unwrap().baseline;
    assert!((seg.from.y - want_y).abs() < 1e-3);
}

fn highlight_colors(last_y: f64) -> (livechart_core::Color, livechart_core::Color) {
    let (mut chart, _log) = chart_with_host();
    chart
        .set_dataset(Dataset::from(vec![(0.0, 1.0), (1.0, last_y)]))
        .set_baseline_manually(5.0)
        .draw_baseline_conditional_color()
        .draw_dataset();
    chart.run_scheduled_rebuild();
    (chart.paints().main_line.color, chart.paints().fill_color)
}

#[test]
fn conditional_color_picks_positive_or_negative() {
    let style = StyleConfig::default();
    assert_eq!(highlight_colors(10.0), (style.positive_color, style.positive_fill_color));
    assert_eq!(highlight_colors(3.0), (style.negative_color, style.negative_fill_color));
    assert_eq!(highlight_colors(5.0), (style.negative_color, style.negative_fill_color));
}

#[test]
fn without_conditional_color_main_color_is_used() {
    let (mut chart, _log) = chart_with_host();
    chart.set_dataset(Dataset::from(vec![(0.0, 1.0), (1.0, 10.0)])).draw_dataset();
    chart.run_scheduled_rebuild();
    let style = StyleConfig::default();
    assert_eq!(chart.paints().main_line.color, style.main_color);
    assert_eq!(chart.paints().fill_color, style.main_fill_color);
}

#[test]
fn style_swap_rederives_paints_without_a_rebuild() {
    let (mut chart, _log) = chart_with_host();
    chart.set_dataset(Dataset::from(vec![(0.0, 1.0), (1.0, 2.0)])).draw_dataset();
    chart.run_scheduled_rebuild();

    chart.set_style(StyleConfig::light());
    assert!(chart.is_rebuild_scheduled());
    let paints = chart.paints();
    assert_eq!(paints.main_line.color, StyleConfig::light().main_color);
    assert!(paints.baseline.dash.is_none());

    chart.set_second_dataset_color(livechart_core::Color::from_rgb(1, 2, 3));
    assert_eq!(chart.paints().second_line.color, livechart_core::Color::from_rgb(1, 2, 3));
}

#[test]
fn resize_is_picked_up_by_the_next_draw() {
    let (mut chart, log) = chart_with_host();
    chart.set_dataset(Dataset::from(vec![(0.0, 0.0), (10.0, 10.0)])).draw_dataset();
    chart.run_scheduled_rebuild();
    assert_eq!(chart.geometry().unwrap().bounds.end, 400.0);

    chart.resize(800, 300, Insets::uniform(10));
    assert_eq!(log.posts.get(), 1);
    assert!(!chart.is_rebuild_scheduled());

    let mut surface = RecordingSurface::new();
    chart.draw(&mut surface);
    let g = chart.geometry().unwrap();
    assert_eq!(g.bounds, chart.bounds());
    assert_eq!(g.bounds.end, 790.0);
    let last = g.main_line.vertices().last().unwrap();
    assert!((last.x - 790.0).abs() < 1e-3);
    assert!(!surface.ops.is_empty());
}

#[test]
fn empty_dataset_draw_is_a_no_op() {
    let (mut chart, _log) = chart_with_host();
    chart.draw_baseline().draw_fill().draw_y_bounds().draw_dataset();
    assert!(chart.run_scheduled_rebuild());
    assert!(chart.geometry().is_none());

    let mut surface = RecordingSurface::new();
    chart.draw(&mut surface);
    assert!(surface.ops.is_empty());
}

#[test]
fn zero_area_view_draws_nothing() {
    let (mut chart, _log) = chart_with_host();
    chart.set_dataset(Dataset::from(vec![(0.0, 0.0), (1.0, 1.0)])).draw_dataset();
    chart.run_scheduled_rebuild();
    chart.resize(0, 0, Insets::default());

    let mut surface = RecordingSurface::new();
    chart.draw(&mut surface);
    assert!(surface.ops.is_empty());
}

#[test]
fn second_dataset_is_drawn_before_main_line() {
    let (mut chart, _log) = chart_with_host();
    chart
        .set_dataset(Dataset::from(vec![(0.0, 0.0), (10.0, 10.0)]))
        .set_second_dataset(Dataset::from(vec![(0.0, 5.0), (10.0, 20.0)]))
        .draw_dataset();
    chart.run_scheduled_rebuild();

    let mut surface = RecordingSurface::new();
    chart.draw(&mut surface);
    let strokes: Vec<_> = surface
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::StrokePath { stroke, .. } => Some(stroke.color),
            _ => None,
        })
        .collect();
    assert_eq!(strokes, [chart.second_dataset_color(), StyleConfig::default().main_color]);
}
