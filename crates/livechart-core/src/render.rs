// File: crates/livechart-core/src/render.rs
// Summary: Issues draw calls for built geometry in a fixed z-order.

use crate::builder::ChartGeometry;
use crate::chart::DrawFlags;
use crate::geometry::{Point, Segment};
use crate::paint::{Color, Fill, LinearGradient, Paints, Stroke};
use crate::surface::Surface;

const OVERLAY_DOT_RADIUS: f32 = 8.0;

/// Stateless draw pass over one [`ChartGeometry`].
pub struct Renderer<'a> {
    geometry: &'a ChartGeometry,
    paints: &'a Paints,
    flags: DrawFlags,
}

impl<'a> Renderer<'a> {
    pub fn new(geometry: &'a ChartGeometry, paints: &'a Paints, flags: DrawFlags) -> Self {
        Self { geometry, paints, flags }
    }

    /// Draw one frame. `touched` is the pixel position of the tracked point, if any.
    pub fn render(&self, surface: &mut dyn Surface, touched: Option<Point>) {
        let g = self.geometry;
        let p = self.paints;
        if g.bounds.is_empty() {
            return;
        }

        if self.flags.baseline {
            line(surface, g.baseline, &p.baseline);
        }

        if let Some(comparison) = &g.comparison_line {
            surface.stroke_path(comparison, &p.second_line);
        }

        surface.stroke_path(&g.main_line, &p.main_line);

        if self.flags.fill {
            surface.fill_path(&g.fill, &self.fill_brush());
        }

        if self.flags.y_bounds {
            let labels = &g.bound_labels;
            line(surface, labels.gutter, &p.bound_line);
            surface.draw_text(&labels.lower.text, labels.lower.origin, &p.bound_text);
            surface.draw_text(&labels.upper.text, labels.upper.origin, &p.bound_text);

            if self.flags.last_point_label {
                let tag = &g.tag;
                line(surface, tag.guide, &p.tag_line);
                surface.fill_rect(tag.rect, p.tag_fill);
                surface.draw_text(&tag.label.text, tag.label.origin, &p.tag_text);
            }
        }

        if let (true, Some(at)) = (self.flags.sticky_overlay, touched) {
            line(surface, Segment::vertical(at.x, g.bounds.top, g.bounds.bottom), &p.overlay_line);
            surface.fill_circle(at, OVERLAY_DOT_RADIUS, p.overlay_dot);
        }
    }

    /// Vertical gradient from the resolved fill color to transparent at the bottom edge.
    pub fn fill_brush(&self) -> Fill {
        let g = self.geometry;
        let x = g.bounds.start;
        Fill::Linear(LinearGradient {
            from: Point::new(x, g.fill_span.0),
            to: Point::new(x, g.fill_span.1),
            start: self.paints.fill_color,
            end: Color::TRANSPARENT,
        })
    }
}

fn line(surface: &mut dyn Surface, segment: Segment, stroke: &Stroke) {
    surface.draw_line(segment.from, segment.to, stroke);
}
