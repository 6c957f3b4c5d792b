// File: crates/livechart-core/src/view.rs
// Summary: Pixel-space draw rectangle derived from the host view size and padding.

use crate::types::Insets;

/// Draw rectangle in pixels.
/// Invariant: `end >= start` and `bottom >= top`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub start: f32,
    pub top: f32,
    pub end: f32,
    pub bottom: f32,
}

impl Bounds {
    /// Build bounds from edges, collapsing inverted edges onto `start`/`top`.
    pub fn new(start: f32, top: f32, end: f32, bottom: f32) -> Self {
        Self { start, top, end: end.max(start), bottom: bottom.max(top) }
    }

    /// Bounds of a `width` x `height` view minus its padding.
    pub fn from_view(width: u32, height: u32, insets: Insets) -> Self {
        let start = insets.left as f32;
        let top = insets.top as f32;
        let end = width.saturating_sub(insets.right) as f32;
        let bottom = height.saturating_sub(insets.bottom) as f32;
        Self::new(start, top, end, bottom)
    }

    pub fn width(&self) -> f32 { self.end - self.start }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center_y(&self) -> f32 { self.top + self.height() * 0.5 }

    /// Zero-area bounds suppress drawing.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }
}
