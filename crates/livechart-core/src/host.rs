// File: crates/livechart-core/src/host.rs
// Summary: Host-side collaborator traits (view scheduling, gesture arbitration, touch callbacks).

use crate::dataset::DataPoint;

/// The view hosting a chart, driven by a single-threaded event loop.
pub trait HostView {
    /// Queue a call to `LiveChart::run_scheduled_rebuild` on the next loop tick.
    fn post_rebuild(&self);
    /// Ask for `LiveChart::draw` on the next frame.
    fn invalidate(&self);
}

/// Parent container able to stop intercepting gestures while the chart is dragged.
pub trait GestureArbiter {
    fn suppress_ancestor_gestures(&mut self, suppress: bool);
}

/// Touch notifications delivered to the host. Called on the event loop; must not block.
pub trait TouchListener {
    fn on_touch_point(&mut self, _point: DataPoint) {}
    fn on_touch_finished(&mut self) {}
}

/// No-op collaborators used when the host wires nothing.
impl GestureArbiter for () {
    fn suppress_ancestor_gestures(&mut self, _suppress: bool) {}
}

impl TouchListener for () {}

/// Pointer input in view pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up { x: f32, y: f32 },
    Cancel,
}
