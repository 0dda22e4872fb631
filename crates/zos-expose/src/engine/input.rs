//! Pointer, gesture and scroll handling

use tracing::trace;
use crate::error::Result;
use crate::input::{Gesture, HitTarget, Intent};
use crate::layout::{self, SlotGeometry};
use crate::math::Vec2;
use super::ExposeController;

impl ExposeController {
    /// Find the target under a viewport point; only the grid is hit-testable
    ///
    /// Tests against the geometry presented at `now_ms`, so a thumbnail
    /// still moving in a relayout is hit where it is drawn.
    pub fn hit_test(&mut self, point: Vec2, now_ms: f64) -> Option<HitTarget> {
        if !self.machine.state().is_expanded() {
            return None;
        }
        let add = self.add_affordance_slot();
        let presented = self.presented_slots(now_ms);
        self.gestures.hit_test(point, &presented, add.as_ref())
    }

    /// Pointer pressed; returns the target under it
    pub fn pointer_down(&mut self, point: Vec2, now_ms: f64) -> Option<HitTarget> {
        let target = self.hit_test(point, now_ms);
        self.gestures.pointer_down(target);

        if let Some(HitTarget::Slot(index)) = target {
            if let Some(id) = self.registry.get(index).map(|s| s.id) {
                self.animation.press(id);
            }
        }
        target
    }

    /// Pointer released; a tap on the pressed target is handled as a gesture
    ///
    /// Returns the intent that was carried out, if any.
    pub fn pointer_up(&mut self, point: Vec2, now_ms: f64) -> Result<Option<Intent>> {
        let target = self.hit_test(point, now_ms);
        self.animation.release();
        match self.gestures.pointer_up(target) {
            Some(gesture) => self.handle_gesture(gesture, now_ms),
            None => Ok(None),
        }
    }

    /// Pointer left or the gesture layer gave up on the press
    pub fn pointer_cancel(&mut self) {
        self.gestures.cancel();
        self.animation.release();
    }

    /// Handle a gesture recognized by the host's gesture layer
    ///
    /// Dropped during transitions and when vetoed by the delegate; returns
    /// the intent that was carried out. An index that does not address a
    /// surface is an error.
    pub fn handle_gesture(&mut self, gesture: Gesture, now_ms: f64) -> Result<Option<Intent>> {
        let Some(intent) = self.gestures.resolve(
            gesture,
            self.machine.state(),
            self.delegate.as_deref(),
            &self.registry,
        )?
        else {
            return Ok(None);
        };

        let handled = match intent {
            Intent::Select(index) => self.select(index, now_ms)?,
            Intent::RequestAdd => {
                if let Some(delegate) = self.delegate.as_deref_mut() {
                    delegate.should_add_view_controller();
                }
                true
            }
            Intent::Delete(index) => {
                self.delete_surface(index, now_ms)?;
                true
            }
        };

        if !handled {
            trace!(?intent, "intent not applied");
            return Ok(None);
        }
        Ok(Some(intent))
    }

    /// Scroll the grid by `dy` (px); only while the grid is shown
    pub fn scroll_by(&mut self, dy: f32) {
        if !self.machine.state().is_expanded() {
            trace!(dy, "scroll ignored outside the grid");
            return;
        }
        let max = self.max_scroll();
        self.gestures.scroll_by(dy, max);
    }

    #[inline]
    pub fn scroll_offset(&self) -> f32 {
        self.gestures.scroll_offset()
    }

    /// Grid geometry of the add affordance cell, after the last surface
    pub fn add_affordance_slot(&mut self) -> Option<SlotGeometry> {
        if !self.shows_add_affordance() {
            return None;
        }
        let frame = self.grid_frame();
        Some(layout::slot_for(self.registry.count(), frame, &self.config.grid))
    }
}
