// File: crates/demo/src/main.rs
// Summary: Demo loads an (x, y) CSV (or a generated series), wires a headless host and renders chart PNGs,
// including one taken mid-drag with the sticky overlay showing.

use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use livechart_core::{
    style, Color, DataPoint, Dataset, GestureArbiter, HostView, LiveChart, PointerEvent, StyleConfig, TouchListener,
};
use livechart_render_skia::{render_to_png, RenderOptions};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Usage: livechart-demo [csv-path|-] [style-name] [out-dir]
    let mut args = std::env::args().skip(1);
    let csv_path = args.next().filter(|p| p != "-");
    let style_name = args.next().unwrap_or_else(|| StyleConfig::DEFAULT.name.to_string());
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "target/demo_out".to_string()));

    let dataset = match &csv_path {
        Some(p) => {
            let path = Path::new(p);
            load_xy_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => sample_walk(120),
    };
    if dataset.is_empty() {
        anyhow::bail!("no points loaded; expected two numeric columns x,y");
    }
    info!(points = dataset.len(), source = csv_path.as_deref().unwrap_or("sample"), "dataset loaded");

    let style = style::find(&style_name);
    if !style.name.eq_ignore_ascii_case(&style_name) {
        warn!(requested = %style_name, "unknown style; using default");
    }
    let opts = RenderOptions { background: background_for(&style), ..RenderOptions::default() };

    let host = DemoHost::default();
    let mut chart = LiveChart::new(style);
    chart
        .set_host(Box::new(host.clone()))
        .set_gesture_arbiter(Box::new(DemoArbiter))
        .set_touch_listener(Box::new(PrintTouch))
        .set_second_dataset(moving_average(&dataset, 10))
        .set_dataset(dataset)
        .draw_y_bounds()
        .draw_baseline()
        .draw_fill()
        .draw_last_point_label()
        .draw_baseline_conditional_color()
        .sticky_overlay()
        .draw_dataset();

    // One host loop tick: run whatever rebuild was posted, then draw if a redraw was requested.
    let tick = |chart: &mut LiveChart, name: &str| -> Result<()> {
        if host.posted.replace(false) {
            chart.run_scheduled_rebuild();
        }
        if host.invalidated.replace(false) {
            debug!(frame = name, "redraw requested");
        }
        let out = out_dir.join(format!("{name}.png"));
        render_to_png(chart, &opts, &out)?;
        println!("Wrote {}", out.display());
        Ok(())
    };

    tick(&mut chart, "chart")?;

    // Drag across the plot: down near the left, move to two thirds, render while held, release.
    let bounds = chart.bounds();
    let y = bounds.center_y();
    chart.on_pointer_event(PointerEvent::Down { x: bounds.start + 10.0, y });
    chart.on_pointer_event(PointerEvent::Move { x: bounds.start + bounds.width() * 0.66, y });
    tick(&mut chart, "chart_touch")?;
    chart.on_pointer_event(PointerEvent::Up { x: bounds.start + bounds.width() * 0.66, y });

    Ok(())
}

/// Headless host: remembers rebuild and redraw requests until the next loop tick.
#[derive(Clone, Default)]
struct DemoHost {
    posted: Rc<Cell<bool>>,
    invalidated: Rc<Cell<bool>>,
}

impl HostView for DemoHost {
    fn post_rebuild(&self) {
        self.posted.set(true);
    }

    fn invalidate(&self) {
        self.invalidated.set(true);
    }
}

struct DemoArbiter;

impl GestureArbiter for DemoArbiter {
    fn suppress_ancestor_gestures(&mut self, suppress: bool) {
        debug!(suppress, "ancestor gestures");
    }
}

struct PrintTouch;

impl TouchListener for PrintTouch {
    fn on_touch_point(&mut self, point: DataPoint) {
        println!("({:.2}, {:.2})", point.x, point.y);
    }

    fn on_touch_finished(&mut self) {
        println!("touch finished");
    }
}

fn background_for(style: &StyleConfig) -> Color {
    match style.name {
        "dark" | "high-contrast" => Color::from_rgb(18, 18, 20), // near-black
        _ => Color::WHITE,
    }
}

/// Load a two-column x,y CSV. A header row is detected and skipped; rows that
/// fail to parse are skipped with a warning.
fn load_xy_csv(path: &Path) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut points = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading row {}", line + 1))?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.parse::<f64>().ok());
        match (parse(0), parse(1)) {
            (Some(x), Some(y)) => points.push(DataPoint::new(x, y)),
            _ if line == 0 => debug!(row = ?rec, "skipping header"),
            _ => warn!(row = line + 1, "skipping unparsable row"),
        }
    }
    Dataset::try_new(points).context("CSV contains non-finite values")
}

/// Deterministic walk used when no CSV is given.
fn sample_walk(n: usize) -> Dataset {
    (0..n)
        .map(|i| {
            let x = i as f64;
            let y = 50.0 + (x * 0.15).sin() * 10.0 + (x * 0.7).cos() * 3.0 - x * 0.05;
            DataPoint::new(x, y)
        })
        .collect()
}

/// Trailing moving average, drawn as the comparison series.
fn moving_average(ds: &Dataset, window: usize) -> Dataset {
    let pts = ds.points();
    let window = window.max(1);
    (0..pts.len())
        .map(|i| {
            let from = i.saturating_sub(window - 1);
            let slice = &pts[from..=i];
            let mean = slice.iter().map(|p| p.y).sum::<f64>() / slice.len() as f64;
            DataPoint::new(pts[i].x, mean)
        })
        .collect()
}
