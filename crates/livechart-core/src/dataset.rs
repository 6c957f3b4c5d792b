// File: crates/livechart-core/src/dataset.rs
// Summary: DataPoint and Dataset model with derived y-bound queries.
// Notes:
// - Points are expected to be non-decreasing in x. This is not checked; an
//   unordered dataset renders a self-intersecting line but never panics.

use crate::error::{ChartError, ChartResult};

/// A single (x, y) sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Ordered series of points; insertion order is rendering order.
///
/// A dataset is handed to the chart by value and replaced wholesale, so a host
/// may keep mutating its own source data without touching an assigned dataset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    points: Vec<DataPoint>,
}

impl Dataset {
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a dataset, rejecting NaN or infinite coordinates.
    pub fn try_new(points: Vec<DataPoint>) -> ChartResult<Self> {
        if let Some((index, p)) = points
            .iter()
            .enumerate()
            .find(|(_, p)| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(ChartError::NonFinitePoint { index, x: p.x, y: p.y });
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn has_data(&self) -> bool {
        !self.points.is_empty()
    }

    pub fn first(&self) -> Option<DataPoint> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<DataPoint> {
        self.points.last().copied()
    }

    /// Largest y over all points.
    pub fn upper_bound(&self) -> Option<f64> {
        self.points.iter().map(|p| p.y).reduce(f64::max)
    }

    /// Smallest y over all points.
    pub fn lower_bound(&self) -> Option<f64> {
        self.points.iter().map(|p| p.y).reduce(f64::min)
    }
}

impl From<Vec<DataPoint>> for Dataset {
    fn from(points: Vec<DataPoint>) -> Self {
        Self::new(points)
    }
}

impl From<Vec<(f64, f64)>> for Dataset {
    fn from(data: Vec<(f64, f64)>) -> Self {
        data.into_iter().map(DataPoint::from).collect()
    }
}

impl FromIterator<DataPoint> for Dataset {
    fn from_iter<I: IntoIterator<Item = DataPoint>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}
