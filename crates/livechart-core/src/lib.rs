// File: crates/livechart-core/src/lib.rs
// Summary: Core library entry point; exports the chart component and its collaborators.

pub mod builder;
pub mod chart;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod host;
pub mod paint;
pub mod render;
pub mod scale;
pub mod style;
pub mod surface;
pub mod touch;
pub mod types;
pub mod view;

pub use builder::{resolve_highlight, ChartGeometry, GeometryBuilder, Highlight};
pub use chart::{DrawFlags, LiveChart};
pub use dataset::{DataPoint, Dataset};
pub use error::{ChartError, ChartResult};
pub use geometry::{Path, PathCommand, Point, Rect, Segment};
pub use host::{GestureArbiter, HostView, PointerEvent, TouchListener};
pub use paint::{Color, Dash, Fill, LineCap, LinearGradient, Paints, Stroke, TextStyle};
pub use render::Renderer;
pub use scale::CoordinateMapper;
pub use style::StyleConfig;
pub use surface::{DrawOp, RecordingSurface, Surface};
pub use touch::{TouchController, TouchState};
pub use types::{Insets, LabelMetrics};
pub use view::Bounds;
