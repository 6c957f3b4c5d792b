// File: crates/livechart-render-skia/tests/smoke.rs
// Purpose: End-to-end render smoke test writing a PNG with every layer enabled.

use livechart_core::{Dataset, LiveChart, PointerEvent};
use livechart_render_skia::{render_to_png, render_to_png_bytes, RenderOptions};

#[test]
fn render_smoke_png() {
    let mut chart = LiveChart::default();
    chart
        .set_dataset(Dataset::from(vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)]))
        .set_second_dataset(Dataset::from(vec![(0.0, 1.0), (4.0, 1.5)]))
        .draw_baseline()
        .draw_fill()
        .draw_y_bounds()
        .draw_last_point_label()
        .draw_baseline_conditional_color()
        .sticky_overlay()
        .draw_dataset();

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    render_to_png(&mut chart, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
    assert!(chart.geometry().is_some());

    // In-memory API, with a touch in progress
    chart.on_pointer_event(PointerEvent::Down { x: 300.0, y: 100.0 });
    let bytes = render_to_png_bytes(&mut chart, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn zero_sized_surface_is_an_error() {
    let mut chart = LiveChart::default();
    chart.set_dataset(Dataset::from(vec![(0.0, 0.0), (1.0, 1.0)])).draw_dataset();
    let opts = RenderOptions { width: 0, height: 0, ..RenderOptions::default() };
    assert!(render_to_png_bytes(&mut chart, &opts).is_err());
}
