// File: crates/livechart-render-skia/src/lib.rs
// Summary: Skia drawing surface for LiveChart and headless PNG/RGBA rendering on CPU raster surfaces.

pub mod text;

use anyhow::{Context, Result};
use livechart_core::{Color, Fill, Insets, LineCap, LiveChart, Path, PathCommand, Point, Rect, Stroke, Surface, TextStyle};
use skia_safe as skia;
use tracing::debug;

pub use text::TextShaper;

/// Default surface width in pixels.
pub const WIDTH: u32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 640;

/// Output size, view padding and clear color for headless rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    pub background: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::uniform(16),
            background: Color::WHITE,
        }
    }
}

impl RenderOptions {
    fn dimensions(&self) -> Result<(i32, i32)> {
        let w = i32::try_from(self.width).context("surface width out of range")?;
        let h = i32::try_from(self.height).context("surface height out of range")?;
        Ok((w, h))
    }
}

/// [`Surface`] over a Skia canvas.
pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    text: &'a TextShaper,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas, text: &'a TextShaper) -> Self {
        Self { canvas, text }
    }
}

impl Surface for SkiaSurface<'_> {
    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
        self.canvas.draw_path(&to_sk_path(path), &stroke_paint(stroke));
    }

    fn fill_path(&mut self, path: &Path, fill: &Fill) {
        self.canvas.draw_path(&to_sk_path(path), &fill_paint(fill));
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.canvas.draw_line(to_sk_point(from), to_sk_point(to), &stroke_paint(stroke));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
        self.canvas.draw_rect(r, &fill_paint(&Fill::Solid(color)));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.canvas.draw_circle(to_sk_point(center), radius, &fill_paint(&Fill::Solid(color)));
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        self.text.draw_left(self.canvas, text, origin.x, origin.y, style.size, to_sk_color(style.color), style.bold);
    }
}

/// Lay the chart out at the requested size and draw one frame to a PNG at `output_png_path`.
///
/// A pending rebuild is run first, the same way a host loop would before drawing.
pub fn render_to_png(
    chart: &mut LiveChart,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_to_png_bytes(chart, opts)?;
    let path = output_png_path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Like [`render_to_png`], returning the encoded bytes.
pub fn render_to_png_bytes(chart: &mut LiveChart, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = render_surface(chart, opts)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Draw one frame and read it back as unpremultiplied RGBA8.
/// Returns `(pixels, width, height, row_stride)`.
pub fn render_to_rgba8(chart: &mut LiveChart, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = render_surface(chart, opts)?;
    let (w, h) = opts.dimensions()?;
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = opts.width as usize * 4;
    let mut pixels = vec![0u8; stride * opts.height as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        anyhow::bail!("read_pixels failed");
    }
    Ok((pixels, opts.width, opts.height, stride))
}

fn render_surface(chart: &mut LiveChart, opts: &RenderOptions) -> Result<skia::Surface> {
    let dims = opts.dimensions()?;
    let mut surface = skia::surfaces::raster_n32_premul(dims)
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface ({}x{})", opts.width, opts.height))?;

    chart.resize(opts.width, opts.height, opts.insets);
    chart.run_scheduled_rebuild();

    let shaper = TextShaper::new();
    let canvas = surface.canvas();
    canvas.clear(to_sk_color(opts.background));
    chart.draw(&mut SkiaSurface::new(canvas, &shaper));
    debug!(width = opts.width, height = opts.height, "frame rendered");
    Ok(surface)
}

// ---- conversions -------------------------------------------------------------

fn to_sk_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_sk_point(p: Point) -> skia::Point {
    skia::Point::new(p.x, p.y)
}

fn to_sk_path(path: &Path) -> skia::Path {
    let mut out = skia::Path::new();
    for cmd in path.commands() {
        match *cmd {
            PathCommand::MoveTo(p) => {
                out.move_to(to_sk_point(p));
            }
            PathCommand::LineTo(p) => {
                out.line_to(to_sk_point(p));
            }
            PathCommand::Close => {
                out.close();
            }
        }
    }
    out
}

fn stroke_paint(stroke: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::PaintStyle::Stroke);
    paint.set_color(to_sk_color(stroke.color));
    paint.set_stroke_width(stroke.width);
    paint.set_stroke_cap(match stroke.cap {
        LineCap::Butt => skia::paint::Cap::Butt,
        LineCap::Square => skia::paint::Cap::Square,
        LineCap::Round => skia::paint::Cap::Round,
    });
    if let Some(dash) = stroke.dash {
        paint.set_path_effect(skia::PathEffect::dash(&[dash.on, dash.off], 0.0));
    }
    paint
}

fn fill_paint(fill: &Fill) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::PaintStyle::Fill);
    match fill {
        Fill::Solid(color) => {
            paint.set_color(to_sk_color(*color));
        }
        Fill::Linear(g) => {
            paint.set_color(to_sk_color(g.start));
            let colors = [to_sk_color(g.start), to_sk_color(g.end)];
            let shader = skia::Shader::linear_gradient(
                (to_sk_point(g.from), to_sk_point(g.to)),
                &colors[..],
                None,
                skia::TileMode::Clamp,
                None,
                None,
            );
            paint.set_shader(shader);
        }
    }
    paint
}
