// File: crates/livechart-core/src/style.rs
// Summary: Chart style bundle and built-in presets.

use crate::paint::Color;
use crate::types::LabelMetrics;

/// Appearance of a chart. Assigned as a whole; brushes are re-derived from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleConfig {
    pub name: &'static str,
    pub main_color: Color,
    pub main_fill_color: Color,
    pub positive_color: Color,
    pub negative_color: Color,
    pub positive_fill_color: Color,
    pub negative_fill_color: Color,
    pub baseline_color: Color,
    pub text_color: Color,
    pub path_stroke_width: f32,
    pub baseline_stroke_width: f32,
    pub baseline_dash_width: f32,
    /// A gap of 0 draws a solid baseline.
    pub baseline_dash_gap: f32,
    pub labels: LabelMetrics,
}

impl StyleConfig {
    pub const DEFAULT: Self = Self {
        name: "default",
        main_color: Color::from_rgb(0x3e, 0x5b, 0xa9),
        main_fill_color: Color::from_argb(0x80, 0x3e, 0x5b, 0xa9),
        positive_color: Color::from_rgb(0x2b, 0xc4, 0x8a),
        negative_color: Color::from_rgb(0xe6, 0x4c, 0x4c),
        positive_fill_color: Color::from_argb(0x66, 0x2b, 0xc4, 0x8a),
        negative_fill_color: Color::from_argb(0x66, 0xe6, 0x4c, 0x4c),
        baseline_color: Color::GRAY,
        text_color: Color::from_rgb(0x44, 0x44, 0x44),
        path_stroke_width: 4.0,
        baseline_stroke_width: 3.0,
        baseline_dash_width: 10.0,
        baseline_dash_gap: 10.0,
        labels: LabelMetrics::DEFAULT,
    };

    pub fn dark() -> Self {
        Self {
            name: "dark",
            main_color: Color::from_rgb(64, 160, 255),
            main_fill_color: Color::from_argb(96, 64, 160, 255),
            positive_color: Color::from_rgb(40, 200, 120),
            negative_color: Color::from_rgb(220, 80, 80),
            positive_fill_color: Color::from_argb(96, 40, 200, 120),
            negative_fill_color: Color::from_argb(96, 220, 80, 80),
            baseline_color: Color::from_rgb(150, 150, 160),
            text_color: Color::from_rgb(235, 235, 245),
            ..Self::DEFAULT
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            main_color: Color::from_rgb(32, 120, 200),
            main_fill_color: Color::from_argb(80, 32, 120, 200),
            positive_color: Color::from_rgb(20, 160, 90),
            negative_color: Color::from_rgb(200, 60, 60),
            positive_fill_color: Color::from_argb(80, 20, 160, 90),
            negative_fill_color: Color::from_argb(80, 200, 60, 60),
            baseline_color: Color::from_rgb(100, 100, 110),
            text_color: Color::from_rgb(20, 20, 30),
            baseline_dash_gap: 0.0,
            ..Self::DEFAULT
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            main_color: Color::from_rgb(0x00, 0xff, 0xff),
            main_fill_color: Color::from_argb(120, 0x00, 0xaa, 0xff),
            positive_color: Color::from_rgb(0x00, 0xff, 0x00),
            negative_color: Color::from_rgb(0xff, 0x00, 0x00),
            positive_fill_color: Color::from_argb(120, 0x00, 0xff, 0x00),
            negative_fill_color: Color::from_argb(120, 0xff, 0x00, 0x00),
            baseline_color: Color::WHITE,
            text_color: Color::WHITE,
            path_stroke_width: 5.0,
            ..Self::DEFAULT
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Return a list of built-in style presets.
pub fn presets() -> Vec<StyleConfig> {
    vec![
        StyleConfig::DEFAULT,
        StyleConfig::dark(),
        StyleConfig::light(),
        StyleConfig::high_contrast(),
    ]
}

/// Find a preset by its `name`, falling back to the default style.
pub fn find(name: &str) -> StyleConfig {
    presets()
        .into_iter()
        .find(|s| s.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
