// File: crates/livechart-core/src/chart.rs
// Summary: LiveChart component: fluent configuration, deferred rebuild, draw and touch entry points.

use tracing::{debug, trace};

use crate::builder::{ChartGeometry, GeometryBuilder, Highlight};
use crate::dataset::{DataPoint, Dataset};
use crate::host::{GestureArbiter, HostView, PointerEvent, TouchListener};
use crate::paint::{Color, Paints};
use crate::render::Renderer;
use crate::scale::CoordinateMapper;
use crate::style::StyleConfig;
use crate::surface::Surface;
use crate::touch::{TouchController, TouchState};
use crate::types::Insets;
use crate::view::Bounds;

pub const DEFAULT_SECOND_DATASET_COLOR: Color = Color::from_rgb(0x9e, 0x9e, 0x9e);

/// Optional chart layers. All off by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawFlags {
    pub baseline: bool,
    pub fill: bool,
    pub y_bounds: bool,
    /// Only drawn together with `y_bounds`.
    pub last_point_label: bool,
    pub conditional_color: bool,
    pub sticky_overlay: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RebuildState {
    Idle,
    Scheduled,
}

/// Embeddable line chart.
///
/// Configuration calls mutate state right away and return `&mut Self` for
/// chaining. Their visual effect is deferred: [`LiveChart::draw_dataset`]
/// asks the host to run [`LiveChart::run_scheduled_rebuild`] on its next
/// loop tick, and the rebuild reads whatever state is current at that moment.
/// Requests made while one is pending are coalesced.
pub struct LiveChart {
    bounds: Bounds,
    style: StyleConfig,
    dataset: Dataset,
    second_dataset: Dataset,
    second_dataset_color: Color,
    flags: DrawFlags,
    baseline: f64,
    manual_baseline: bool,
    committed: bool,
    rebuild: RebuildState,
    geometry: Option<ChartGeometry>,
    paints: Paints,
    touch: TouchController,
    host: Option<Box<dyn HostView>>,
    arbiter: Option<Box<dyn GestureArbiter>>,
    listener: Option<Box<dyn TouchListener>>,
}

impl LiveChart {
    pub fn new(style: StyleConfig) -> Self {
        Self {
            bounds: Bounds::default(),
            style,
            dataset: Dataset::empty(),
            second_dataset: Dataset::empty(),
            second_dataset_color: DEFAULT_SECOND_DATASET_COLOR,
            flags: DrawFlags::default(),
            baseline: 0.0,
            manual_baseline: false,
            committed: false,
            rebuild: RebuildState::Idle,
            geometry: None,
            paints: Paints::derive(&style, DEFAULT_SECOND_DATASET_COLOR, Highlight::Main),
            touch: TouchController::new(),
            host: None,
            arbiter: None,
            listener: None,
        }
    }

    // ---- host wiring --------------------------------------------------------

    pub fn set_host(&mut self, host: Box<dyn HostView>) -> &mut Self {
        if self.rebuild == RebuildState::Scheduled {
            host.post_rebuild();
        }
        self.host = Some(host);
        self
    }

    pub fn set_gesture_arbiter(&mut self, arbiter: Box<dyn GestureArbiter>) -> &mut Self {
        self.arbiter = Some(arbiter);
        self
    }

    pub fn set_touch_listener(&mut self, listener: Box<dyn TouchListener>) -> &mut Self {
        self.listener = Some(listener);
        self
    }

    /// Update bounds for a new view size. Schedules nothing; the next draw picks it up.
    pub fn resize(&mut self, width: u32, height: u32, insets: Insets) -> &mut Self {
        self.set_bounds(Bounds::from_view(width, height, insets))
    }

    pub fn set_bounds(&mut self, bounds: Bounds) -> &mut Self {
        trace!(?bounds, "bounds updated");
        self.bounds = bounds;
        self
    }

    // ---- configuration ------------------------------------------------------

    pub fn set_dataset(&mut self, dataset: Dataset) -> &mut Self {
        self.dataset = dataset;
        self.changed()
    }

    pub fn set_second_dataset(&mut self, dataset: Dataset) -> &mut Self {
        self.second_dataset = dataset;
        self.changed()
    }

    /// Replace the style; brushes are re-derived immediately.
    pub fn set_style(&mut self, style: StyleConfig) -> &mut Self {
        self.style = style;
        self.derive_paints();
        self.changed()
    }

    pub fn set_second_dataset_color(&mut self, color: Color) -> &mut Self {
        self.second_dataset_color = color;
        self.derive_paints();
        self.changed()
    }

    pub fn draw_baseline(&mut self) -> &mut Self {
        self.flags.baseline = true;
        self.changed()
    }

    pub fn draw_fill(&mut self) -> &mut Self {
        self.flags.fill = true;
        self.changed()
    }

    pub fn draw_y_bounds(&mut self) -> &mut Self {
        self.flags.y_bounds = true;
        self.changed()
    }

    pub fn draw_last_point_label(&mut self) -> &mut Self {
        self.flags.last_point_label = true;
        self.changed()
    }

    pub fn draw_baseline_conditional_color(&mut self) -> &mut Self {
        self.flags.conditional_color = true;
        self.changed()
    }

    /// Draw a guide line and dot at the touched point while a touch is tracked.
    pub fn sticky_overlay(&mut self) -> &mut Self {
        self.flags.sticky_overlay = true;
        self.changed()
    }

    /// Replace all layer flags at once (the only way to switch one off).
    pub fn set_draw_flags(&mut self, flags: DrawFlags) -> &mut Self {
        self.flags = flags;
        self.changed()
    }

    /// Pin the baseline; later datasets no longer move it.
    pub fn set_baseline_manually(&mut self, baseline: f64) -> &mut Self {
        self.manual_baseline = true;
        self.baseline = baseline;
        self.changed()
    }

    /// Commit the configuration and schedule the next rebuild + redraw.
    pub fn draw_dataset(&mut self) -> &mut Self {
        self.committed = true;
        self.schedule_rebuild();
        self
    }

    // ---- deferred rebuild ---------------------------------------------------

    fn changed(&mut self) -> &mut Self {
        if self.committed {
            self.schedule_rebuild();
        }
        self
    }

    fn schedule_rebuild(&mut self) {
        if self.rebuild == RebuildState::Scheduled {
            trace!("rebuild already pending; coalescing");
            return;
        }
        self.rebuild = RebuildState::Scheduled;
        debug!("rebuild scheduled");
        if let Some(host) = &self.host {
            host.post_rebuild();
        }
    }

    pub fn is_rebuild_scheduled(&self) -> bool {
        self.rebuild == RebuildState::Scheduled
    }

    /// Run a pending rebuild against the current state, then request a redraw.
    /// Returns `false` when nothing was pending.
    pub fn run_scheduled_rebuild(&mut self) -> bool {
        if self.rebuild != RebuildState::Scheduled {
            return false;
        }
        self.rebuild = RebuildState::Idle;
        self.rebuild_now();
        if let Some(host) = &self.host {
            host.invalidate();
        }
        true
    }

    fn rebuild_now(&mut self) {
        let Some(first) = self.dataset.first() else {
            debug!("dataset empty; skipping rebuild");
            self.geometry = None;
            return;
        };
        if !self.manual_baseline {
            self.baseline = first.y;
        }

        let builder = GeometryBuilder::new(
            self.bounds,
            &self.dataset,
            &self.second_dataset,
            self.style.labels,
            self.flags.y_bounds,
        );
        self.geometry = builder.build(self.baseline, self.flags.conditional_color);
        self.derive_paints();
        debug!(
            points = self.dataset.len(),
            second_points = self.second_dataset.len(),
            baseline = self.baseline,
            highlight = ?self.highlight(),
            "geometry rebuilt"
        );
    }

    fn highlight(&self) -> Highlight {
        self.geometry.as_ref().map(|g| g.highlight).unwrap_or_default()
    }

    fn derive_paints(&mut self) {
        self.paints = Paints::derive(&self.style, self.second_dataset_color, self.highlight());
    }

    fn gutter(&self) -> f32 {
        if self.flags.y_bounds { self.style.labels.end_padding } else { 0.0 }
    }

    // ---- frame & input ------------------------------------------------------

    /// Draw the last built geometry. A no-op for an empty dataset or zero-area bounds.
    pub fn draw(&mut self, surface: &mut dyn Surface) {
        if self.dataset.is_empty() || self.bounds.is_empty() {
            return;
        }
        if self.geometry.as_ref().is_some_and(|g| g.bounds != self.bounds) {
            trace!("bounds changed since last rebuild; rebuilding inline");
            self.rebuild_now();
        }

        let touched = if self.touch.is_tracking() {
            self.touch.last_point().map(|p| self.mapper().to_px(p))
        } else {
            None
        };
        if let Some(geometry) = &self.geometry {
            Renderer::new(geometry, &self.paints, self.flags).render(surface, touched);
        }
    }

    /// Route a pointer event to the touch controller. Returns `true` when consumed.
    pub fn on_pointer_event(&mut self, event: PointerEvent) -> bool {
        let gutter = self.gutter();
        let mapper = CoordinateMapper::new(self.bounds, &self.dataset, &self.second_dataset, gutter);
        let mut no_listener = ();
        let mut no_arbiter = ();
        let listener: &mut dyn TouchListener = match self.listener.as_deref_mut() {
            Some(l) => l,
            None => &mut no_listener,
        };
        let arbiter: &mut dyn GestureArbiter = match self.arbiter.as_deref_mut() {
            Some(a) => a,
            None => &mut no_arbiter,
        };

        let handled = self.touch.handle(event, &mapper, listener, arbiter);
        if handled && self.flags.sticky_overlay {
            if let Some(host) = &self.host {
                host.invalidate();
            }
        }
        handled
    }

    // ---- accessors ----------------------------------------------------------

    /// Mapper over the current bounds and datasets.
    pub fn mapper(&self) -> CoordinateMapper<'_> {
        CoordinateMapper::new(self.bounds, &self.dataset, &self.second_dataset, self.gutter())
    }

    pub fn bounds(&self) -> Bounds { self.bounds }
    pub fn style(&self) -> &StyleConfig { &self.style }
    pub fn dataset(&self) -> &Dataset { &self.dataset }
    pub fn second_dataset(&self) -> &Dataset { &self.second_dataset }
    pub fn second_dataset_color(&self) -> Color { self.second_dataset_color }
    pub fn flags(&self) -> DrawFlags { self.flags }
    pub fn baseline(&self) -> f64 { self.baseline }
    pub fn is_baseline_manual(&self) -> bool { self.manual_baseline }
    pub fn geometry(&self) -> Option<&ChartGeometry> { self.geometry.as_ref() }
    pub fn paints(&self) -> &Paints { &self.paints }
    pub fn touch_state(&self) -> TouchState { self.touch.state() }
    pub fn last_touched_point(&self) -> Option<DataPoint> { self.touch.last_point() }
}

impl Default for LiveChart {
    fn default() -> Self {
        Self::new(StyleConfig::default())
    }
}
