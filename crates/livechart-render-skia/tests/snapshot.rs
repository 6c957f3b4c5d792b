// File: crates/livechart-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small chart (no text layers) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use livechart_core::{Dataset, Insets, LiveChart};
use livechart_render_skia::{render_to_png_bytes, RenderOptions};

fn render_bytes() -> Vec<u8> {
    let mut chart = LiveChart::default();
    chart
        .set_dataset(Dataset::from(vec![(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 1.5), (4.0, 1.0)]))
        .set_second_dataset(Dataset::from(vec![(0.0, 0.5), (4.0, 0.8)]))
        .draw_baseline()
        .draw_fill()
        .draw_baseline_conditional_color()
        .draw_dataset();

    let opts = RenderOptions { width: 320, height: 200, insets: Insets::uniform(8), ..RenderOptions::default() };
    render_to_png_bytes(&mut chart, &opts).expect("render bytes")
}

#[test]
fn golden_basic_chart() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("basic_chart.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

#[test]
fn rendering_is_deterministic() {
    let a = image::load_from_memory(&render_bytes()).expect("decode a").to_rgba8();
    let b = image::load_from_memory(&render_bytes()).expect("decode b").to_rgba8();
    assert_eq!(a.dimensions(), (320, 200));
    assert_eq!(a.as_raw(), b.as_raw());
}
