// File: crates/livechart-core/src/paint.rs
// Summary: Colors, stroke/fill brushes and the brush set derived from a style.

use crate::builder::Highlight;
use crate::error::{ChartError, ChartResult};
use crate::geometry::Point;
use crate::style::StyleConfig;

/// Non-premultiplied ARGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::from_argb(0, 0, 0, 0);
    pub const BLACK: Self = Self::from_argb(255, 0, 0, 0);
    pub const WHITE: Self = Self::from_argb(255, 255, 255, 255);
    pub const GRAY: Self = Self::from_argb(255, 0x88, 0x88, 0x88);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// Parse `#RRGGBB` or `#AARRGGBB`.
    pub fn from_hex(s: &str) -> ChartResult<Self> {
        let invalid = || ChartError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let v = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        match hex.len() {
            6 => Ok(Self::from_argb(255, (v >> 16) as u8, (v >> 8) as u8, v as u8)),
            8 => Ok(Self::from_argb((v >> 24) as u8, (v >> 16) as u8, (v >> 8) as u8, v as u8)),
            _ => Err(invalid()),
        }
    }
}

/// Dash interval: `on` pixels drawn, `off` pixels skipped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dash {
    pub on: f32,
    pub off: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Square,
    Round,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    pub cap: LineCap,
    pub dash: Option<Dash>,
}

impl Stroke {
    pub const fn solid(color: Color, width: f32, cap: LineCap) -> Self {
        Self { color, width, cap, dash: None }
    }
}

/// Two-stop linear gradient, clamped outside `[from, to]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearGradient {
    pub from: Point,
    pub to: Point,
    pub start: Color,
    pub end: Color,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fill {
    Solid(Color),
    Linear(LinearGradient),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub size: f32,
    pub bold: bool,
}

/// Brush set used by the renderer.
///
/// Always derived from scratch by [`Paints::derive`]; nothing here is mutated
/// across frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paints {
    pub main_line: Stroke,
    pub second_line: Stroke,
    pub baseline: Stroke,
    pub bound_line: Stroke,
    pub tag_line: Stroke,
    pub tag_fill: Color,
    pub tag_text: TextStyle,
    pub bound_text: TextStyle,
    /// Top stop of the fill gradient; the bottom stop is transparent.
    pub fill_color: Color,
    pub overlay_line: Stroke,
    pub overlay_dot: Color,
}

impl Paints {
    pub fn derive(style: &StyleConfig, second_color: Color, highlight: Highlight) -> Self {
        let (line_color, fill_color) = match highlight {
            Highlight::Main => (style.main_color, style.main_fill_color),
            Highlight::Positive => (style.positive_color, style.positive_fill_color),
            Highlight::Negative => (style.negative_color, style.negative_fill_color),
        };

        let dash = (style.baseline_dash_gap > 0.0).then_some(Dash {
            on: style.baseline_dash_width,
            off: style.baseline_dash_gap,
        });
        let text_size = style.labels.text_height;

        Self {
            main_line: Stroke::solid(line_color, style.path_stroke_width, LineCap::Butt),
            second_line: Stroke::solid(second_color, style.path_stroke_width, LineCap::Butt),
            baseline: Stroke {
                color: style.baseline_color,
                width: style.baseline_stroke_width,
                cap: LineCap::Square,
                dash,
            },
            bound_line: Stroke::solid(Color::GRAY, 1.0, LineCap::Square),
            tag_line: Stroke::solid(line_color, 3.0, LineCap::Square),
            tag_fill: line_color,
            tag_text: TextStyle { color: Color::WHITE, size: text_size, bold: true },
            bound_text: TextStyle { color: style.text_color, size: text_size, bold: false },
            fill_color,
            overlay_line: Stroke::solid(style.text_color, 1.0, LineCap::Butt),
            overlay_dot: line_color,
        }
    }
}
