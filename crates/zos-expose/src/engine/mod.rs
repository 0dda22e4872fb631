//! Expose controller coordinating all components
//!
//! This module is split into focused submodules:
//! - `zoom`: Toggle/select transitions and animation completion
//! - `content`: Adding and removing surfaces
//! - `grid`: Grid setters and relayout
//! - `input`: Pointer events, gestures and scrolling
//! - `decorations`: Lazily cached data-source views
//! - `rendering`: Presented frames for the host

mod content;
mod decorations;
mod grid;
mod input;
mod rendering;
mod zoom;

use std::collections::HashMap;
use tracing::debug;
use crate::animation::{AnimationCoordinator, LifecycleHook, Track, TransitionPlan};
use crate::config::ExposeConfig;
use crate::delegate::{Cached, ChildLifecycle, Decoration, ExposeDataSource, ExposeDelegate};
use crate::input::GestureCoordinator;
use crate::layout::{self, GridSpec, SlotGeometry};
use crate::math::{Rect, Size, Vec2};
use crate::registry::{ContentRegistry, ContentSurface, ControllerId, SurfaceId};
use crate::transition::{TransitionState, TransitionStateMachine};

pub use rendering::SurfaceFrame;

/// Expose controller
///
/// Main entry point for the host, managing:
/// - Zoom state and selection (state machine)
/// - Surface order (registry)
/// - Resting slot geometry (layout engine)
/// - The single in-flight animation (animation coordinator)
/// - Taps, add and delete gestures (gesture coordinator)
///
/// Time is supplied by the host as `now_ms`; completions are delivered
/// from [`tick`](Self::tick).
pub struct ExposeController {
    id: ControllerId,
    config: ExposeConfig,
    machine: TransitionStateMachine,
    registry: ContentRegistry,
    animation: AnimationCoordinator,
    gestures: GestureCoordinator,
    /// Resting geometry in grid coordinates, index-aligned with `registry`
    slots: Vec<SlotGeometry>,
    delegate: Option<Box<dyn ExposeDelegate>>,
    data_source: Option<Box<dyn ExposeDataSource>>,
    header: Cached<Decoration>,
    footer: Cached<Decoration>,
    background: Cached<Decoration>,
    add_view: Cached<Decoration>,
}

impl Default for ExposeController {
    fn default() -> Self {
        Self::new(ExposeConfig::default())
    }
}

impl ExposeController {
    /// Create a collapsed controller with no surfaces
    pub fn new(config: ExposeConfig) -> Self {
        let animation = AnimationCoordinator::new(
            config.grid.animation_duration_ms,
            config.easing,
            config.shows_touch_down,
        );
        Self {
            id: ControllerId::next(),
            config,
            machine: TransitionStateMachine::new(),
            registry: ContentRegistry::new(),
            animation,
            gestures: GestureCoordinator::new(),
            slots: Vec::new(),
            delegate: None,
            data_source: None,
            header: Cached::default(),
            footer: Cached::default(),
            background: Cached::default(),
            add_view: Cached::default(),
        }
    }

    /// Install the delegate
    pub fn set_delegate(&mut self, delegate: Box<dyn ExposeDelegate>) {
        self.delegate = Some(delegate);
    }

    /// Install the data source; cached decorations are dropped
    pub fn set_data_source(&mut self, data_source: Box<dyn ExposeDataSource>) {
        self.data_source = Some(data_source);
        self.clear_decoration_caches();
        self.recompute_slots();
    }

    #[inline]
    pub fn id(&self) -> ControllerId {
        self.id
    }

    #[inline]
    pub fn config(&self) -> &ExposeConfig {
        &self.config
    }

    #[inline]
    pub fn grid_spec(&self) -> &GridSpec {
        &self.config.grid
    }

    #[inline]
    pub fn viewport(&self) -> Size {
        self.config.viewport
    }

    #[inline]
    pub fn state(&self) -> TransitionState {
        self.machine.state()
    }

    /// True while the grid is shown or being zoomed out to
    #[inline]
    pub fn is_zoomed_out(&self) -> bool {
        self.machine.is_zoomed_out()
    }

    #[inline]
    pub fn selected_index(&self) -> Option<usize> {
        self.machine.selected_index()
    }

    /// Selected surface; `None` while the grid is shown
    pub fn selected_surface(&self) -> Option<&ContentSurface> {
        self.selected_index().and_then(|index| self.registry.get(index))
    }

    #[inline]
    pub fn surfaces(&self) -> &ContentRegistry {
        &self.registry
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.registry.count()
    }

    /// Controller that owns the surface with this identity
    ///
    /// Only surfaces registered here resolve; there is no global lookup.
    pub fn owner_of(&self, id: SurfaceId) -> Option<ControllerId> {
        self.registry.get_by_id(id).and_then(|surface| surface.owner())
    }

    /// Resting geometry (grid coordinates), one per surface
    #[inline]
    pub fn slots(&self) -> &[SlotGeometry] {
        &self.slots
    }

    /// Check if a zoom or relayout animation is in flight
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_active()
    }

    /// Area the grid is laid out in: the viewport minus header and footer
    fn grid_frame(&mut self) -> Rect {
        let viewport = self.config.viewport;
        let header = self.header_view().map_or(0.0, |d| d.height);
        let footer = self.footer_view().map_or(0.0, |d| d.height);
        Rect::new(0.0, header, viewport.width, (viewport.height - header - footer).max(0.0))
    }

    /// Resting geometry for the current state and registry
    ///
    /// While collapsed (or zooming in) the selected surface takes the full
    /// viewport at the current scroll position, above every other slot.
    fn resting_slots(&mut self) -> Vec<SlotGeometry> {
        self.clamp_scroll();
        let frame = self.grid_frame();
        let spec = self.config.grid;
        let count = self.registry.count();
        let mut slots = layout::compute_slots_in(count, frame, &spec);

        if !self.machine.is_zoomed_out() {
            if let Some(index) = self.machine.selected_index() {
                let full = Rect::from_size(self.config.viewport)
                    .translate(Vec2::new(0.0, self.gestures.scroll_offset()));
                if let Some(slot) = slots.get_mut(index) {
                    *slot = layout::full_frame(index, full, &spec, count as u32);
                }
            }
        }
        slots
    }

    /// Recompute resting geometry without animating
    fn recompute_slots(&mut self) {
        self.slots = self.resting_slots();
    }

    /// Geometry currently presented for each surface (grid coordinates)
    ///
    /// Index-aligned with the registry. Surfaces the in-flight animation
    /// does not track sit at their resting geometry.
    fn presented_slots(&self, now_ms: f64) -> Vec<SlotGeometry> {
        let in_flight = self.animation.in_flight();
        self.registry
            .iter()
            .zip(self.slots.iter())
            .map(|(surface, resting)| {
                in_flight
                    .and_then(|animation| animation.geometry_for(surface.id, now_ms))
                    .unwrap_or(*resting)
            })
            .collect()
    }

    /// Presented geometry keyed by surface, for starting a new animation
    fn displayed_geometry(&self, now_ms: f64) -> HashMap<SurfaceId, SlotGeometry> {
        self.registry
            .iter()
            .map(|surface| surface.id)
            .zip(self.presented_slots(now_ms))
            .collect()
    }

    /// Pair previous geometry with a new target, per surface
    fn tracks_to(&self, previous: &HashMap<SurfaceId, SlotGeometry>, target: &[SlotGeometry]) -> Vec<Track> {
        self.registry
            .iter()
            .zip(target.iter())
            .map(|(surface, to)| Track {
                id: surface.id,
                from: previous.get(&surface.id).copied().unwrap_or(*to),
                to: *to,
            })
            .collect()
    }

    /// Dispatch pre-hooks, apply geometry, and finish at once when not animated
    fn run_plan(&mut self, mut plan: TransitionPlan, target: Vec<SlotGeometry>, now_ms: f64) {
        let pre_hooks = plan.take_pre_hooks();
        self.dispatch(&pre_hooks, plan.animated);

        self.slots = target;
        debug!(kind = ?plan.kind, animated = plan.animated, count = self.slots.len(), "geometry changed");

        if let Some(completion) = self.animation.apply(plan, now_ms) {
            self.finish(completion, now_ms);
        }
    }

    fn dispatch(&mut self, hooks: &[LifecycleHook], animated: bool) {
        for hook in hooks {
            self.dispatch_hook(*hook, animated);
        }
    }

    fn dispatch_hook(&mut self, hook: LifecycleHook, animated: bool) {
        match hook {
            LifecycleHook::WillShrink(id) => self.with_child(id, |c| c.will_shrink(animated)),
            LifecycleHook::DidShrink(id) => self.with_child(id, |c| c.did_shrink(animated)),
            LifecycleHook::WillExpand(id) => self.with_child(id, |c| c.will_expand(animated)),
            LifecycleHook::DidExpand(id) => self.with_child(id, |c| c.did_expand(animated)),
            _ => {
                let Some(delegate) = self.delegate.as_deref_mut() else {
                    return;
                };
                match hook {
                    LifecycleHook::WillZoomOut => delegate.will_zoom_out(animated),
                    LifecycleHook::DidZoomOut => delegate.did_zoom_out(animated),
                    LifecycleHook::WillZoomIn => delegate.will_zoom_in(animated),
                    LifecycleHook::DidZoomIn => delegate.did_zoom_in(animated),
                    LifecycleHook::WillSwitch { from, to } => {
                        if let Some(new) = self.registry.get_by_id(to) {
                            let old = from.and_then(|id| self.registry.get_by_id(id));
                            delegate.will_switch(old, new);
                        }
                    }
                    LifecycleHook::DidSelect(id) => {
                        if let Some(surface) = self.registry.get_by_id(id) {
                            delegate.did_select(surface);
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    fn with_child(&mut self, id: SurfaceId, f: impl FnOnce(&mut (dyn ChildLifecycle + 'static))) {
        if let Some(child) = self
            .registry
            .get_by_id_mut(id)
            .and_then(|surface| surface.lifecycle_mut())
        {
            f(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_controller_is_collapsed_and_empty() {
        let controller = ExposeController::default();

        assert_eq!(controller.state(), TransitionState::Collapsed);
        assert!(!controller.is_zoomed_out());
        assert_eq!(controller.selected_index(), None);
        assert!(controller.selected_surface().is_none());
        assert_eq!(controller.count(), 0);
        assert!(controller.slots().is_empty());
    }

    #[test]
    fn test_controllers_get_distinct_ids() {
        let a = ExposeController::default();
        let b = ExposeController::default();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_owner_of_added_surface() {
        let mut controller = ExposeController::default();
        let other = ExposeController::default();
        controller.add_surface(ContentSurface::new(5), false, 0.0).unwrap();

        assert_eq!(controller.owner_of(5), Some(controller.id()));
        assert_eq!(other.owner_of(5), None);
        assert_eq!(controller.owner_of(6), None);
    }
}
