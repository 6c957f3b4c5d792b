// File: crates/livechart-core/src/builder.rs
// Summary: Builds pixel-space chart geometry (lines, fill, baseline, labels, tag) from datasets.

use crate::dataset::Dataset;
use crate::geometry::{Path, Point, Rect, Segment};
use crate::scale::CoordinateMapper;
use crate::types::LabelMetrics;
use crate::view::Bounds;

/// Color set selected for the main series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Highlight {
    #[default]
    Main,
    Positive,
    Negative,
}

/// Compare the last value against the baseline. Ties resolve to negative.
pub fn resolve_highlight(conditional: bool, last_y: f64, baseline: f64) -> Highlight {
    if !conditional {
        Highlight::Main
    } else if last_y > baseline {
        Highlight::Positive
    } else {
        Highlight::Negative
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    /// Left end of the text baseline.
    pub origin: Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoundLabels {
    pub gutter: Segment,
    pub lower: Label,
    pub upper: Label,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LastPointTag {
    pub guide: Segment,
    pub rect: Rect,
    pub label: Label,
}

/// Everything the renderer needs for one chart state.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    /// Bounds the geometry was built for.
    pub bounds: Bounds,
    pub main_line: Path,
    /// Present only when the second dataset has at least two points.
    pub comparison_line: Option<Path>,
    pub fill: Path,
    /// Pixel rows of the fill gradient: resolved fill color at `.0`, transparent at `.1`.
    pub fill_span: (f32, f32),
    pub baseline: Segment,
    pub bound_labels: BoundLabels,
    pub tag: LastPointTag,
    pub highlight: Highlight,
}

pub struct GeometryBuilder<'a> {
    mapper: CoordinateMapper<'a>,
    labels: LabelMetrics,
    /// Label gutter width, 0 when bound labels are hidden.
    gutter: f32,
}

impl<'a> GeometryBuilder<'a> {
    pub fn new(
        bounds: Bounds,
        dataset: &'a Dataset,
        second: &'a Dataset,
        labels: LabelMetrics,
        show_y_bounds: bool,
    ) -> Self {
        let gutter = if show_y_bounds { labels.end_padding } else { 0.0 };
        Self { mapper: CoordinateMapper::new(bounds, dataset, second, gutter), labels, gutter }
    }

    pub fn mapper(&self) -> &CoordinateMapper<'a> {
        &self.mapper
    }

    /// Build the full geometry; `None` when the main dataset is empty.
    pub fn build(&self, baseline: f64, conditional: bool) -> Option<ChartGeometry> {
        let dataset = self.mapper.dataset();
        let last = dataset.last()?;
        let upper = dataset.upper_bound()?;
        let lower = dataset.lower_bound()?;
        let bounds = self.mapper.bounds();

        let second = self.mapper.second_dataset();
        let comparison_line = (second.len() > 1).then(|| self.line_path(second));

        Some(ChartGeometry {
            bounds,
            main_line: self.line_path(dataset),
            comparison_line,
            fill: self.fill_path(),
            fill_span: (self.mapper.y_to_px(upper), bounds.bottom),
            baseline: self.baseline_segment(baseline),
            bound_labels: self.bound_labels(lower, upper),
            tag: self.last_point_tag(last.y),
            highlight: resolve_highlight(conditional, last.y, baseline),
        })
    }

    /// Move to the first mapped point, then one segment per following point.
    pub fn line_path(&self, dataset: &Dataset) -> Path {
        let mut path = Path::with_capacity(dataset.len());
        for (i, p) in dataset.points().iter().enumerate() {
            let px = self.mapper.to_px(*p);
            if i == 0 {
                path.move_to(px);
            } else {
                path.line_to(px);
            }
        }
        path
    }

    /// Main line closed down to the bottom edge and back to the start.
    pub fn fill_path(&self) -> Path {
        let dataset = self.mapper.dataset();
        let mut path = self.line_path(dataset);
        if let Some(last) = dataset.last() {
            let bottom = self.mapper.bounds().bottom;
            path.line_to(Point::new(self.mapper.x_to_px(last.x), bottom))
                .line_to(Point::new(self.mapper.bounds().start, bottom))
                .close();
        }
        path
    }

    /// Right edge of the plotting area (left edge of the label gutter).
    pub fn plot_end(&self) -> f32 {
        self.mapper.bounds().end - self.gutter
    }

    pub fn baseline_segment(&self, baseline: f64) -> Segment {
        Segment::horizontal(self.mapper.bounds().start, self.plot_end(), self.mapper.y_to_px(baseline))
    }

    pub fn bound_labels(&self, lower: f64, upper: f64) -> BoundLabels {
        let b = self.mapper.bounds();
        let gutter_x = b.end - self.labels.end_padding;
        let text_x = b.end - self.labels.tag_width;
        BoundLabels {
            gutter: Segment::vertical(gutter_x, b.top, b.bottom),
            lower: Label { text: format!("{lower:.2}"), origin: Point::new(text_x, b.bottom) },
            upper: Label { text: format!("{upper:.2}"), origin: Point::new(text_x, b.top) },
        }
    }

    pub fn last_point_tag(&self, last_y: f64) -> LastPointTag {
        let b = self.mapper.bounds();
        let m = self.labels;
        let y = self.mapper.y_to_px(last_y);
        let left = b.end - m.end_padding;
        LastPointTag {
            guide: Segment::horizontal(b.start, left, y),
            rect: Rect::from_ltrb(left, y - m.text_height - m.tag_padding, left + m.tag_width, y),
            label: Label {
                text: format!("{last_y:.2}"),
                origin: Point::new(left + m.tag_padding, y - m.tag_padding),
            },
        }
    }
}
