//! Presented frames and viewport coordinates

use serde::Serialize;
use crate::layout::SlotGeometry;
use crate::math::{Rect, Vec2};
use crate::registry::SurfaceId;
use crate::transition::TransitionState;
use super::ExposeController;

/// Surface with its presented geometry for the current frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SurfaceFrame {
    pub id: SurfaceId,
    /// Registry index
    pub index: usize,
    /// Interpolated geometry in viewport coordinates
    pub geometry: SlotGeometry,
    /// Whether the host needs to draw it at all
    pub visible: bool,
    /// Showing the touch-down shrink
    pub pressed: bool,
}

impl ExposeController {
    /// Frames for every surface at `now_ms`, in registry order
    ///
    /// Mid-animation surfaces are interpolated between their start and
    /// target geometry; everything else sits at its resting geometry.
    /// Sort by `geometry.z_order` to paint back to front.
    pub fn frames(&self, now_ms: f64) -> Vec<SurfaceFrame> {
        let viewport = Rect::from_size(self.config.viewport);
        let scroll = Vec2::new(0.0, -self.gestures.scroll_offset());
        let covering = self.covering_surface();

        self.registry
            .iter()
            .zip(self.slots.iter())
            .enumerate()
            .map(|(index, (surface, resting))| {
                let mut geometry = self.animation.frame_for(surface.id, *resting, now_ms);
                geometry.rect = geometry.rect.translate(scroll);

                let hidden = covering.is_some_and(|selected| selected != index);
                SurfaceFrame {
                    id: surface.id,
                    index,
                    geometry,
                    visible: !hidden && geometry.rect.intersects(&viewport),
                    pressed: self.animation.is_pressed(surface.id),
                }
            })
            .collect()
    }

    /// Add affordance geometry in viewport coordinates, while the grid is shown
    pub fn add_affordance_frame(&mut self) -> Option<SlotGeometry> {
        if !self.machine.state().is_expanded() {
            return None;
        }
        let scroll = Vec2::new(0.0, -self.gestures.scroll_offset());
        self.add_affordance_slot().map(|mut slot| {
            slot.rect = slot.rect.translate(scroll);
            slot
        })
    }

    /// Index of the surface hiding all others (collapsed and at rest)
    fn covering_surface(&self) -> Option<usize> {
        if self.machine.state() != TransitionState::Collapsed || self.animation.is_active() {
            return None;
        }
        self.machine.selected_index()
    }
}
