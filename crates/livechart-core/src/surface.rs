// File: crates/livechart-core/src/surface.rs
// Summary: Drawing-surface collaborator trait and a recording implementation.

use crate::geometry::{Path, Point, Rect};
use crate::paint::{Color, Fill, Stroke, TextStyle};

/// Low-level 2D primitives a backend provides to the renderer.
pub trait Surface {
    fn stroke_path(&mut self, path: &Path, stroke: &Stroke);
    fn fill_path(&mut self, path: &Path, fill: &Fill);
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);
    /// `origin` is the left end of the text baseline.
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle);
}

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    StrokePath { path: Path, stroke: Stroke },
    FillPath { path: Path, fill: Fill },
    Line { from: Point, to: Point, stroke: Stroke },
    Rect { rect: Rect, color: Color },
    Circle { center: Point, radius: f32, color: Color },
    Text { text: String, origin: Point, style: TextStyle },
}

/// Surface that keeps every call in order; used by tests and headless hosts.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
        self.ops.push(DrawOp::StrokePath { path: path.clone(), stroke: *stroke });
    }

    fn fill_path(&mut self, path: &Path, fill: &Fill) {
        self.ops.push(DrawOp::FillPath { path: path.clone(), fill: *fill });
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.ops.push(DrawOp::Line { from, to, stroke: *stroke });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::Rect { rect, color });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.ops.push(DrawOp::Circle { center, radius, color });
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        self.ops.push(DrawOp::Text { text: text.to_string(), origin, style: *style });
    }
}
