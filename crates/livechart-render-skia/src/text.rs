// File: crates/livechart-render-skia/src/text.rs
// Summary: Label text shaping with Skia textlayout, drawn from the baseline origin.

use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};
use skia_safe as skia;

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // System manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        // Tabular digits keep bound labels from jittering as values change.
        ts.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color, bold));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// `(x, y)` is the left end of the baseline.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, bold: bool) {
        let p = self.layout(text, size, color, bold);
        // Paragraph draws from top-left; shift up by the ascent
        let ascent = p.alphabetic_baseline();
        p.paint(canvas, (x, y - ascent));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
