//! Gesture state machine — which handle is grabbed and how pointer
//! movement turns into range updates.
//!
//! ```text
//!   Idle ──begin(hit min)──▶ DraggingMin ──update──▶ DraggingMin
//!     │  ──begin(hit max)──▶ DraggingMax ──update──▶ DraggingMax
//!     │  ──begin(tie)──────▶ Contested  ──update──▶ DraggingMin | DraggingMax
//!     ◀──────────────────────────── end ─────────────────────────┘
//! ```
//!
//! `end()` reports the settled range exactly once for every gesture that
//! grabbed a handle. Gestures that start away from both knobs never move
//! anything and report nothing.

use tracing::{debug, info};

use crate::domain::{Bounds, Handle, Point, Range};
use crate::layout::Geometry;

/// Which handle, if any, is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    DraggingMin,
    DraggingMax,
    /// Both knobs were hit at exactly the same distance (typically
    /// `min == max`). The first update picks a handle by direction.
    Contested,
}

impl DragState {
    pub fn handle(self) -> Option<Handle> {
        match self {
            DragState::DraggingMin => Some(Handle::Min),
            DragState::DraggingMax => Some(Handle::Max),
            DragState::Idle | DragState::Contested => None,
        }
    }

    pub fn is_active(self) -> bool {
        self != DragState::Idle
    }

    fn dragging(handle: Handle) -> Self {
        match handle {
            Handle::Min => DragState::DraggingMin,
            Handle::Max => DragState::DraggingMax,
        }
    }
}

/// Live state of one hysteresis control: the current range plus the
/// transient drag state.
#[derive(Debug, Clone, PartialEq)]
pub struct HysteresisControl {
    bounds: Bounds,
    seed: Range,
    range: Range,
    drag: DragState,
}

impl HysteresisControl {
    /// Seed the control. `initial` is ordered and clamped into the bounds.
    pub fn new(bounds: Bounds, initial: Range) -> Self {
        let range = seed_range(bounds, initial);
        Self {
            bounds,
            seed: initial,
            range,
            drag: DragState::Idle,
        }
    }

    pub fn range(&self) -> Range {
        self.range
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Handle whose value label should be visible.
    pub fn active_handle(&self) -> Option<Handle> {
        self.drag.handle()
    }

    /// Re-seed when the bounds or the initial values change. An in-flight
    /// drag is cancelled without a report. Returns true when a reset
    /// happened.
    pub fn sync(&mut self, bounds: Bounds, initial: Range) -> bool {
        if bounds == self.bounds && initial == self.seed {
            return false;
        }
        debug!(?bounds, ?initial, "bounds or initial values changed; resetting");
        *self = Self::new(bounds, initial);
        true
    }

    /// Return to the seeded range, cancelling any drag. Returns the range
    /// when it changed.
    pub fn reset(&mut self) -> Option<Range> {
        let before = self.range;
        *self = Self::new(self.bounds, self.seed);
        (self.range != before).then_some(self.range)
    }

    /// Gesture start. Grabs the knob under `point`, if any.
    pub fn begin(&mut self, geometry: &Geometry, point: Point) -> DragState {
        self.drag = DragState::Idle;
        let hit = geometry.hit_test(self.range, point);

        self.drag = if hit.both() {
            let d_min = (point.x - geometry.value_to_x(self.range.min)).abs();
            let d_max = (point.x - geometry.value_to_x(self.range.max)).abs();
            if d_min < d_max {
                DragState::DraggingMin
            } else if d_max < d_min {
                DragState::DraggingMax
            } else {
                DragState::Contested
            }
        } else {
            match hit.single() {
                Some(handle) => DragState::dragging(handle),
                None => DragState::Idle,
            }
        };

        if self.drag.is_active() {
            debug!(state = ?self.drag, x = point.x, y = point.y, "handle grabbed");
        }
        self.drag
    }

    /// Gesture update. Moves the grabbed handle to the value under
    /// `point.x` when that keeps the range strictly ordered. Returns true
    /// when the range changed.
    pub fn update(&mut self, geometry: &Geometry, point: Point) -> bool {
        if !self.drag.is_active() || geometry.is_degenerate() {
            return false;
        }
        let candidate = geometry.x_to_value(point.x);

        if self.drag == DragState::Contested {
            if candidate < self.range.min {
                self.drag = DragState::DraggingMin;
            } else if candidate > self.range.max {
                self.drag = DragState::DraggingMax;
            } else {
                return false;
            }
            debug!(state = ?self.drag, "contested grab resolved");
        }

        match self.drag.handle() {
            Some(handle) => self.apply(handle, candidate),
            None => false,
        }
    }

    /// Gesture end. Returns the settled range when this gesture grabbed a
    /// handle; `None` otherwise.
    pub fn end(&mut self) -> Option<Range> {
        let was = std::mem::take(&mut self.drag);
        if !was.is_active() {
            return None;
        }
        info!(min = self.range.min, max = self.range.max, "range settled");
        Some(self.range)
    }

    /// Move `handle` by `steps` whole steps, as a complete one-shot change.
    /// Returns the new range when it changed.
    pub fn nudge(&mut self, handle: Handle, steps: i64) -> Option<Range> {
        if self.drag.is_active() || self.bounds.is_degenerate() || steps == 0 {
            return None;
        }
        let current = self.range.get(handle);
        let target = self.bounds.snap(current + steps as f64 * self.bounds.step);
        if self.apply(handle, target) {
            info!(handle = handle.label(), min = self.range.min, max = self.range.max, "range nudged");
            Some(self.range)
        } else {
            None
        }
    }

    /// Accept `candidate` for `handle` if it stays within the bounds and
    /// strictly on its own side of the other handle.
    fn apply(&mut self, handle: Handle, candidate: f64) -> bool {
        let accepted = match handle {
            Handle::Min => candidate >= self.bounds.min() && candidate < self.range.max,
            Handle::Max => candidate > self.range.min && candidate <= self.bounds.max(),
        };
        if !accepted || candidate == self.range.get(handle) {
            return false;
        }
        match handle {
            Handle::Min => self.range.min = candidate,
            Handle::Max => self.range.max = candidate,
        }
        debug!(handle = handle.label(), value = candidate, "handle moved");
        true
    }
}

fn seed_range(bounds: Bounds, initial: Range) -> Range {
    let (lo, hi) = if initial.min <= initial.max {
        (initial.min, initial.max)
    } else {
        (initial.max, initial.min)
    };
    Range::new(bounds.clamp(lo), bounds.clamp(hi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ControlConfig;
    use crate::layout::{FontSizeMetrics, Viewport};

    fn setup(min: f64, max: f64) -> (HysteresisControl, Geometry) {
        let config = ControlConfig {
            bounds: Range::new(0.0, 50.0),
            step: 5.0,
            initial: Range::new(min, max),
            ..Default::default()
        };
        let geometry = Geometry::compute(&config, Viewport::new(540.0, 200.0), &FontSizeMetrics);
        let control = HysteresisControl::new(config.value_bounds(), config.initial);
        (control, geometry)
    }

    fn at(geometry: &Geometry, value: f64) -> Point {
        geometry.knob_center(value)
    }

    #[test]
    fn grab_min_and_drag() {
        let (mut c, g) = setup(10.0, 40.0);
        assert_eq!(c.begin(&g, at(&g, 10.0)), DragState::DraggingMin);
        assert_eq!(c.active_handle(), Some(Handle::Min));
        assert!(c.update(&g, at(&g, 20.0)));
        assert_eq!(c.range(), Range::new(20.0, 40.0));
        assert_eq!(c.end(), Some(Range::new(20.0, 40.0)));
        assert_eq!(c.drag_state(), DragState::Idle);
    }

    #[test]
    fn miss_does_nothing_and_reports_nothing() {
        let (mut c, g) = setup(10.0, 40.0);
        assert_eq!(c.begin(&g, at(&g, 25.0)), DragState::Idle);
        assert!(!c.update(&g, at(&g, 30.0)));
        assert_eq!(c.end(), None);
        assert_eq!(c.range(), Range::new(10.0, 40.0));
    }

    #[test]
    fn max_snaps_down_to_step() {
        let (mut c, g) = setup(10.0, 40.0);
        c.begin(&g, at(&g, 40.0));
        assert!(c.update(&g, Point::new(g.value_to_x(37.0), 0.0)));
        assert_eq!(c.range().max, 35.0);
    }

    #[test]
    fn min_cannot_reach_or_cross_max() {
        let (mut c, g) = setup(10.0, 40.0);
        c.begin(&g, at(&g, 10.0));
        assert!(!c.update(&g, at(&g, 45.0)));
        assert!(!c.update(&g, at(&g, 40.0)));
        assert_eq!(c.range().min, 10.0);
        assert!(c.update(&g, at(&g, 35.0)));
        assert_eq!(c.range().min, 35.0);
    }

    #[test]
    fn max_cannot_reach_or_cross_min() {
        let (mut c, g) = setup(10.0, 40.0);
        c.begin(&g, at(&g, 40.0));
        assert!(!c.update(&g, at(&g, 5.0)));
        assert!(!c.update(&g, at(&g, 10.0)));
        assert_eq!(c.range().max, 40.0);
    }

    #[test]
    fn drag_survives_leaving_touch_radius() {
        let (mut c, g) = setup(10.0, 40.0);
        c.begin(&g, at(&g, 40.0));
        assert!(c.update(&g, Point::new(g.value_to_x(50.0), 0.0)));
        assert_eq!(c.range().max, 50.0);
    }

    #[test]
    fn pointer_past_the_axis_clamps_to_bounds() {
        let (mut c, g) = setup(10.0, 40.0);
        c.begin(&g, at(&g, 10.0));
        assert!(c.update(&g, Point::new(-500.0, g.control_y)));
        assert_eq!(c.range().min, 0.0);
    }

    #[test]
    fn end_reports_once() {
        let (mut c, g) = setup(10.0, 40.0);
        c.begin(&g, at(&g, 10.0));
        c.update(&g, at(&g, 15.0));
        assert!(c.end().is_some());
        assert!(c.end().is_none());
    }

    #[test]
    fn end_reports_last_accepted_values() {
        let (mut c, g) = setup(10.0, 40.0);
        c.begin(&g, at(&g, 10.0));
        c.update(&g, at(&g, 20.0));
        c.update(&g, at(&g, 45.0)); // rejected
        assert_eq!(c.end(), Some(Range::new(20.0, 40.0)));
    }

    #[test]
    fn tie_resolves_by_direction() {
        let (mut c, g) = setup(20.0, 20.0);
        assert_eq!(c.begin(&g, at(&g, 20.0)), DragState::Contested);
        assert_eq!(c.active_handle(), None);
        assert!(!c.update(&g, at(&g, 20.0)));
        assert!(c.update(&g, at(&g, 30.0)));
        assert_eq!(c.drag_state(), DragState::DraggingMax);
        assert_eq!(c.range(), Range::new(20.0, 30.0));
    }

    #[test]
    fn tie_resolves_to_min_when_moving_left() {
        let (mut c, g) = setup(20.0, 20.0);
        c.begin(&g, at(&g, 20.0));
        assert!(c.update(&g, at(&g, 10.0)));
        assert_eq!(c.drag_state(), DragState::DraggingMin);
        assert_eq!(c.range(), Range::new(10.0, 20.0));
    }

    #[test]
    fn overlap_prefers_nearer_knob() {
        let (mut c, g) = setup(20.0, 25.0);
        // knobs are 50 units apart, touch radius 20 each: no overlap
        assert_eq!(c.begin(&g, at(&g, 25.0)), DragState::DraggingMax);
        c.end();

        let mut wide = g.clone();
        wide.touch_radius = 60.0;
        let p = Point::new(g.value_to_x(20.0) + 10.0, g.control_y);
        assert_eq!(c.begin(&wide, p), DragState::DraggingMin);
    }

    #[test]
    fn sync_resets_only_on_change() {
        let (mut c, g) = setup(10.0, 40.0);
        c.begin(&g, at(&g, 10.0));
        c.update(&g, at(&g, 20.0));
        assert!(!c.sync(c.bounds(), Range::new(10.0, 40.0)));
        assert_eq!(c.range().min, 20.0);

        assert!(c.sync(c.bounds(), Range::new(15.0, 30.0)));
        assert_eq!(c.range(), Range::new(15.0, 30.0));
        assert_eq!(c.drag_state(), DragState::Idle);
        assert_eq!(c.end(), None);
    }

    #[test]
    fn seed_is_ordered_and_clamped() {
        let bounds = Bounds::new(Range::new(0.0, 50.0), 5.0);
        let c = HysteresisControl::new(bounds, Range::new(70.0, -10.0));
        assert_eq!(c.range(), Range::new(0.0, 50.0));
    }

    #[test]
    fn nudge_moves_by_steps() {
        let (mut c, _) = setup(10.0, 40.0);
        assert_eq!(c.nudge(Handle::Min, 2), Some(Range::new(20.0, 40.0)));
        assert_eq!(c.nudge(Handle::Max, -1), Some(Range::new(20.0, 35.0)));
        assert_eq!(c.nudge(Handle::Min, 3), None);
        assert_eq!(c.nudge(Handle::Max, 10), Some(Range::new(20.0, 50.0)));
        assert_eq!(c.nudge(Handle::Max, 1), None);
    }

    #[test]
    fn reset_returns_to_seed() {
        let (mut c, _) = setup(10.0, 40.0);
        assert_eq!(c.reset(), None);
        c.nudge(Handle::Min, 1);
        assert_eq!(c.reset(), Some(Range::new(10.0, 40.0)));
    }

    #[test]
    fn degenerate_bounds_disable_dragging() {
        let config = ControlConfig {
            bounds: Range::new(5.0, 5.0),
            step: 1.0,
            initial: Range::new(5.0, 5.0),
            ..Default::default()
        };
        let g = Geometry::compute(&config, Viewport::new(540.0, 200.0), &FontSizeMetrics);
        let mut c = HysteresisControl::new(config.value_bounds(), config.initial);
        assert_eq!(c.begin(&g, g.knob_center(5.0)), DragState::Idle);
        assert_eq!(c.nudge(Handle::Max, 1), None);
        assert_eq!(c.end(), None);
    }
}
