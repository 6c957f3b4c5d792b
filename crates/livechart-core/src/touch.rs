// File: crates/livechart-core/src/touch.rs
// Summary: Idle/tracking touch state machine resolving pointer positions to data points.

use tracing::trace;

use crate::dataset::DataPoint;
use crate::host::{GestureArbiter, PointerEvent, TouchListener};
use crate::scale::CoordinateMapper;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TouchState {
    #[default]
    Idle,
    Tracking,
}

#[derive(Clone, Debug, Default)]
pub struct TouchController {
    state: TouchState,
    last_point: Option<DataPoint>,
}

impl TouchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TouchState {
        self.state
    }

    pub fn is_tracking(&self) -> bool {
        self.state == TouchState::Tracking
    }

    /// Last point reported to the listener. Kept after the touch ends.
    pub fn last_point(&self) -> Option<DataPoint> {
        self.last_point
    }

    /// Feed one pointer event. Returns `true` when the event was consumed.
    ///
    /// The mapper is read-only here; touch handling never triggers a rebuild.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        mapper: &CoordinateMapper<'_>,
        listener: &mut dyn TouchListener,
        arbiter: &mut dyn GestureArbiter,
    ) -> bool {
        match (self.state, event) {
            (TouchState::Idle, PointerEvent::Down { x, .. }) => {
                trace!(x, "touch started");
                arbiter.suppress_ancestor_gestures(true);
                self.state = TouchState::Tracking;
                self.emit_nearest(x, mapper, listener);
                true
            }
            (TouchState::Tracking, PointerEvent::Down { x, .. } | PointerEvent::Move { x, .. }) => {
                self.emit_nearest(x, mapper, listener);
                true
            }
            (TouchState::Tracking, PointerEvent::Up { .. } | PointerEvent::Cancel) => {
                trace!("touch finished");
                arbiter.suppress_ancestor_gestures(false);
                self.state = TouchState::Idle;
                listener.on_touch_finished();
                true
            }
            (TouchState::Idle, _) => false,
        }
    }

    fn emit_nearest(&mut self, x: f32, mapper: &CoordinateMapper<'_>, listener: &mut dyn TouchListener) {
        if let Some(point) = mapper.nearest_point(x) {
            self.last_point = Some(point);
            listener.on_touch_point(point);
        }
    }
}
