//! Zoom transitions and completion delivery

use std::collections::HashMap;
use tracing::{trace, warn};
use crate::animation::{AnimationKind, Completion, LifecycleHook, TransitionPlan};
use crate::error::{ExposeError, Result};
use crate::registry::SurfaceId;
use crate::transition::Zoom;
use super::ExposeController;

impl ExposeController {
    /// Toggle between the full-frame surface and the grid
    ///
    /// Returns false when the request was dropped because a zoom is still
    /// in flight. A running relayout is superseded: the zoom starts from
    /// wherever the surfaces are shown at `now_ms`.
    pub fn toggle_expose(&mut self, animated: bool, now_ms: f64) -> bool {
        let Some(zoom) = self.machine.toggle(self.registry.count()) else {
            return false;
        };
        self.begin_zoom(zoom, animated, now_ms);
        true
    }

    /// Zoom into the surface at `index` (animated)
    ///
    /// Only meaningful while the grid is shown; otherwise `Ok(false)`.
    pub fn select(&mut self, index: usize, now_ms: f64) -> Result<bool> {
        let count = self.registry.count();
        if index >= count {
            let err = ExposeError::out_of_range(index, count);
            warn!(%err, "select rejected");
            return Err(err);
        }
        match self.machine.select(index, count)? {
            Some(zoom) => {
                self.begin_zoom(zoom, true, now_ms);
                Ok(true)
            }
            None => {
                trace!(index, state = ?self.state(), "select not started");
                Ok(false)
            }
        }
    }

    /// Advance time; delivers completion of the in-flight animation
    ///
    /// Returns true while an animation is still running.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if let Some(completion) = self.animation.tick(now_ms) {
            self.finish(completion, now_ms);
        }
        self.animation.is_active()
    }

    /// Build and run the plan for a zoom the state machine accepted
    fn begin_zoom(&mut self, zoom: Zoom, animated: bool, now_ms: f64) {
        let previous = self.displayed_geometry(now_ms);
        let target = self.resting_slots();
        let tracks = self.tracks_to(&previous, &target);

        let (kind, pre_hooks, post_hooks) = self.zoom_hooks(zoom);
        let mut plan = TransitionPlan::new(kind, animated, tracks);
        plan.pre_hooks = pre_hooks;
        plan.post_hooks = post_hooks;

        self.run_plan(plan, target, now_ms);
    }

    fn zoom_hooks(&self, zoom: Zoom) -> (AnimationKind, Vec<LifecycleHook>, Vec<LifecycleHook>) {
        let id_at = |index: Option<usize>| -> Option<SurfaceId> {
            index.and_then(|i| self.registry.get(i)).map(|s| s.id)
        };

        match zoom {
            Zoom::Out { from } => {
                let shrinking = id_at(from);
                let mut pre = vec![LifecycleHook::WillZoomOut];
                let mut post = Vec::new();
                if let Some(id) = shrinking {
                    pre.push(LifecycleHook::WillShrink(id));
                    post.push(LifecycleHook::DidShrink(id));
                }
                post.push(LifecycleHook::DidZoomOut);
                (AnimationKind::ZoomOut, pre, post)
            }
            Zoom::In { from, to, via_select } => {
                let old = id_at(from);
                let new = id_at(to);
                let mut pre = Vec::new();
                let mut post = Vec::new();

                if let Some(to) = new.filter(|id| Some(*id) != old) {
                    pre.push(LifecycleHook::WillSwitch { from: old, to });
                }
                pre.push(LifecycleHook::WillZoomIn);
                if let Some(id) = new {
                    pre.push(LifecycleHook::WillExpand(id));
                    post.push(LifecycleHook::DidExpand(id));
                }
                post.push(LifecycleHook::DidZoomIn);
                if let Some(id) = new.filter(|_| via_select) {
                    post.push(LifecycleHook::DidSelect(id));
                }
                (AnimationKind::ZoomIn, pre, post)
            }
        }
    }

    /// Settle a finished animation: commit state, dispatch did-hooks, and
    /// re-issue a relayout that was coalesced behind it
    pub(super) fn finish(&mut self, completion: Completion, now_ms: f64) {
        if completion.kind.is_zoom() {
            self.machine.complete();
        }
        self.dispatch(&completion.post_hooks, completion.animated);

        if let Some(animated) = completion.reissue {
            let mut previous: HashMap<SurfaceId, _> = self.displayed_geometry(now_ms);
            for (id, geometry) in completion.settled {
                if let Some(slot) = previous.get_mut(&id) {
                    *slot = geometry;
                }
            }
            self.relayout_from(previous, animated, now_ms);
        }
    }
}
