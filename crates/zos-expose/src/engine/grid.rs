//! Grid configuration and relayout

use std::collections::HashMap;
use tracing::{debug, trace};
use crate::animation::{AnimationKind, Easing, TransitionPlan};
use crate::layout::{self, SlotGeometry};
use crate::math::Size;
use crate::registry::SurfaceId;
use super::ExposeController;

impl ExposeController {
    /// Change the row count; a no-op when unchanged
    pub fn set_num_rows(&mut self, rows: usize, animated: bool, now_ms: f64) {
        if self.config.grid.rows == rows {
            trace!(rows, "row count unchanged");
            return;
        }
        self.config.grid.rows = rows;
        self.relayout(animated, now_ms);
    }

    /// Change the column count; a no-op when unchanged
    pub fn set_num_cols(&mut self, cols: usize, animated: bool, now_ms: f64) {
        if self.config.grid.cols == cols {
            trace!(cols, "column count unchanged");
            return;
        }
        self.config.grid.cols = cols;
        self.relayout(animated, now_ms);
    }

    /// Vertical gutter between rows (px)
    pub fn set_row_offset(&mut self, row_offset: f32, animated: bool, now_ms: f64) {
        self.config.grid.row_offset = row_offset.max(0.0);
        self.relayout(animated, now_ms);
    }

    /// Thumbnail shrink factor, clamped to (0, 1]
    pub fn set_scale_factor(&mut self, scale_factor: f32, animated: bool, now_ms: f64) {
        self.config.grid.scale_factor = scale_factor.clamp(f32::EPSILON, 1.0);
        self.relayout(animated, now_ms);
    }

    pub fn set_corner_radius(&mut self, corner_radius: f32, animated: bool, now_ms: f64) {
        self.config.grid.corner_radius = corner_radius.max(0.0);
        self.relayout(animated, now_ms);
    }

    /// Duration of animations started from now on
    pub fn set_animation_duration_ms(&mut self, duration_ms: u32) {
        self.config.grid.animation_duration_ms = duration_ms;
        self.animation.set_duration_ms(duration_ms);
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.config.easing = easing;
        self.animation.set_easing(easing);
    }

    /// Whether a pressed slot shows a momentary shrink
    pub fn set_shows_touch_down(&mut self, shows: bool) {
        self.config.shows_touch_down = shows;
        self.animation.set_shows_touch_down(shows);
    }

    #[inline]
    pub fn shows_touch_down(&self) -> bool {
        self.config.shows_touch_down
    }

    /// Host viewport changed; geometry follows without animating
    pub fn resize(&mut self, viewport: Size, now_ms: f64) {
        self.config.viewport = viewport;
        self.relayout(false, now_ms);
    }

    /// Move surfaces from where they are shown now to fresh resting geometry
    pub(super) fn relayout(&mut self, animated: bool, now_ms: f64) {
        let previous = self.displayed_geometry(now_ms);
        self.relayout_from(previous, animated, now_ms);
    }

    /// Relayout starting from explicit per-surface geometry
    ///
    /// While an animation is in flight the request is coalesced: resting
    /// geometry is refreshed so it stays aligned with the registry, and the
    /// animated move is re-issued when the in-flight animation completes.
    pub(super) fn relayout_from(
        &mut self,
        previous: HashMap<SurfaceId, SlotGeometry>,
        animated: bool,
        now_ms: f64,
    ) {
        let target = self.resting_slots();
        if !self.animation.request_relayout(animated) {
            self.slots = target;
            return;
        }

        let tracks = self.tracks_to(&previous, &target);
        let plan = TransitionPlan::new(AnimationKind::Relayout, animated, tracks);
        if !plan.moves_anything() {
            self.slots = target;
            return;
        }

        debug!(count = self.registry.count(), animated, "relayout");
        self.run_plan(plan, target, now_ms);
    }

    /// Keep the scroll offset within the grid's scrollable extent
    pub(super) fn clamp_scroll(&mut self) {
        let max = self.max_scroll();
        self.gestures.clamp_scroll(max);
    }

    pub(super) fn max_scroll(&mut self) -> f32 {
        let frame = self.grid_frame();
        let slot_count = self.registry.count() + usize::from(self.shows_add_affordance());
        let height = layout::content_height(slot_count, frame, &self.config.grid);
        (height - frame.height).max(0.0)
    }
}
