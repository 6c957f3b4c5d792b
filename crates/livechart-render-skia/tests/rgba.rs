// File: crates/livechart-render-skia/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use livechart_core::{Color, Dataset, Insets, LiveChart, StyleConfig};
use livechart_render_skia::{render_to_rgba8, RenderOptions};

fn opts() -> RenderOptions {
    RenderOptions { width: 200, height: 100, insets: Insets::default(), background: Color::WHITE }
}

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    let mut chart = LiveChart::default();
    chart.set_dataset(Dataset::from(vec![(0.0, 0.0), (4.0, 4.0)])).draw_dataset();

    let (px, w, h, stride) = render_to_rgba8(&mut chart, &opts()).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Background in the top-left corner, away from the line
    assert_eq!(pixel(&px, stride, 2, 2), [255, 255, 255, 255]);

    // Line passes through the view center
    let main = StyleConfig::default().main_color;
    let [r, g, b, a] = pixel(&px, stride, 100, 50);
    assert_eq!(a, 255);
    assert!((r as i32 - main.r as i32).abs() <= 8, "r={r}");
    assert!((g as i32 - main.g as i32).abs() <= 8, "g={g}");
    assert!((b as i32 - main.b as i32).abs() <= 8, "b={b}");
}

#[test]
fn uncommitted_chart_renders_only_background() {
    let mut chart = LiveChart::default();
    chart.set_dataset(Dataset::from(vec![(0.0, 0.0), (4.0, 4.0)]));

    let (px, _, _, _) = render_to_rgba8(&mut chart, &opts()).expect("rgba render");
    assert!(px.chunks_exact(4).all(|p| p == [255, 255, 255, 255]));
}
