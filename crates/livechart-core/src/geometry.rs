// File: crates/livechart-core/src/geometry.rs
// Summary: Lightweight pixel-space primitives (points, rects, segments, paths).

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}

/// Straight line between two pixel positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
    pub fn horizontal(x0: f32, x1: f32, y: f32) -> Self {
        Self::new(Point::new(x0, y), Point::new(x1, y))
    }
    pub fn vertical(x: f32, y0: f32, y1: f32) -> Self {
        Self::new(Point::new(x, y0), Point::new(x, y1))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// Backend-neutral polyline path.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self { commands: Vec::with_capacity(n) }
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of explicit `LineTo` segments.
    pub fn segment_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, PathCommand::LineTo(_))).count()
    }

    /// Every vertex in command order (move and line targets).
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::Close => None,
        })
    }
}
