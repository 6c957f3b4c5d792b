// File: crates/livechart-core/src/types.rs
// Summary: Shared layout types and constants (view padding, label gutter metrics).

/// View padding, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    pub const fn uniform(v: u32) -> Self {
        Self::new(v, v, v, v)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(0)
    }
}

/// Fixed pixel metrics of the bound-label gutter and the last-point tag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelMetrics {
    /// Width reserved at the right edge for bound labels and the tag.
    pub end_padding: f32,
    pub tag_width: f32,
    pub tag_padding: f32,
    /// Label text size; also the tag rectangle's text row height.
    pub text_height: f32,
}

impl LabelMetrics {
    pub const DEFAULT: Self = Self {
        end_padding: 100.0,
        tag_width: 90.0,
        tag_padding: 10.0,
        text_height: 30.0,
    };
}

impl Default for LabelMetrics {
    fn default() -> Self {
        Self::DEFAULT
    }
}
