// File: crates/livechart-core/src/scale.rs
// Summary: Data-space <-> pixel-space mapping for both axes, with zero-range guards.

use crate::dataset::{DataPoint, Dataset};
use crate::geometry::Point;
use crate::view::Bounds;

/// Maps data values to pixels for the current bounds and datasets.
///
/// A mapper is a snapshot: the chart builds a fresh one from its current
/// bounds, datasets and gutter setting for every rebuild and touch event, so
/// nothing derived here outlives the state it came from.
#[derive(Clone, Copy, Debug)]
pub struct CoordinateMapper<'a> {
    bounds: Bounds,
    dataset: &'a Dataset,
    second: &'a Dataset,
    /// Right-hand gutter subtracted from the usable width (0 when bound labels are hidden).
    end_padding: f32,
    /// Shared (min, max) y of the main and second dataset.
    y_range: Option<(f64, f64)>,
}

impl<'a> CoordinateMapper<'a> {
    pub fn new(bounds: Bounds, dataset: &'a Dataset, second: &'a Dataset, end_padding: f32) -> Self {
        let lower = min_opt(dataset.lower_bound(), second.lower_bound());
        let upper = max_opt(dataset.upper_bound(), second.upper_bound());
        Self { bounds, dataset, second, end_padding, y_range: lower.zip(upper) }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    pub fn second_dataset(&self) -> &'a Dataset {
        self.second
    }

    /// Shared y range of the main and (when it has data) second dataset.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.y_range
    }

    /// Data units per vertical pixel; 0 for a flat series or a zero-height view.
    pub fn y_scale(&self) -> f64 {
        let height = self.bounds.height() as f64;
        match self.y_range() {
            Some((min, max)) if height > 0.0 => guard((max - min) / height),
            _ => 0.0,
        }
    }

    /// Larger y maps to a smaller pixel row. A zero scale maps to the vertical center.
    pub fn y_to_px(&self, y: f64) -> f32 {
        let scale = self.y_scale();
        match self.y_range() {
            Some((min, _)) if scale != 0.0 => (self.bounds.bottom as f64 - (y - min) / scale) as f32,
            _ => self.bounds.center_y(),
        }
    }

    /// Width left for the series once the label gutter is taken out.
    pub fn usable_width(&self) -> f32 {
        (self.bounds.width() - self.end_padding).max(0.0)
    }

    /// Data units per horizontal pixel, anchored on the last point's x.
    pub fn x_scale(&self) -> f64 {
        let width = self.usable_width() as f64;
        match self.dataset.last() {
            Some(last) if width > 0.0 => guard(last.x / width),
            _ => 0.0,
        }
    }

    /// A zero scale maps every x to `bounds.start`.
    pub fn x_to_px(&self, x: f64) -> f32 {
        let scale = self.x_scale();
        if scale == 0.0 {
            return self.bounds.start;
        }
        self.bounds.start + (x / scale) as f32
    }

    pub fn to_px(&self, p: DataPoint) -> Point {
        Point::new(self.x_to_px(p.x), self.y_to_px(p.y))
    }

    /// Inverse of [`Self::x_to_px`]; `None` when the x scale is degenerate.
    pub fn px_to_x(&self, px: f32) -> Option<f64> {
        let scale = self.x_scale();
        (scale != 0.0).then(|| (px - self.bounds.start) as f64 * scale)
    }

    /// Inverse of [`Self::y_to_px`]; `None` when the y scale is degenerate.
    pub fn px_to_y(&self, py: f32) -> Option<f64> {
        let scale = self.y_scale();
        let (min, _) = self.y_range()?;
        (scale != 0.0).then(|| min + (self.bounds.bottom - py) as f64 * scale)
    }

    /// Index of the point whose mapped x is closest to `px`; first match wins ties.
    pub fn nearest_index(&self, px: f32) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (i, p) in self.dataset.points().iter().enumerate() {
            let d = (self.x_to_px(p.x) - px).abs();
            match best {
                Some((_, bd)) if d >= bd => {}
                _ => best = Some((i, d)),
            }
        }
        best.map(|(i, _)| i)
    }

    pub fn nearest_point(&self, px: f32) -> Option<DataPoint> {
        self.nearest_index(px).map(|i| self.dataset.points()[i])
    }
}

#[inline]
fn guard(scale: f64) -> f64 {
    if scale.is_finite() { scale } else { 0.0 }
}

fn min_opt(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

fn max_opt(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    }
}
