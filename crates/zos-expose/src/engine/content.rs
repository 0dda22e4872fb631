//! Surface insertion and removal

use tracing::{debug, warn};
use crate::error::Result;
use crate::registry::ContentSurface;
use super::ExposeController;

impl ExposeController {
    /// Append a surface, returning its index
    pub fn add_surface(&mut self, surface: ContentSurface, animated: bool, now_ms: f64) -> Result<usize> {
        self.insert_surface(surface, true, animated, now_ms)
    }

    /// Insert a surface at the end or at the front, returning its index
    ///
    /// Applied even while an animation is in flight; the relayout is then
    /// deferred until that animation completes. The first surface added to
    /// a collapsed controller with nothing selected becomes the selection.
    pub fn insert_surface(
        &mut self,
        mut surface: ContentSurface,
        at_end: bool,
        animated: bool,
        now_ms: f64,
    ) -> Result<usize> {
        surface.owner = Some(self.id);
        surface.decorations_loaded = false;

        let previous = self.displayed_geometry(now_ms);
        let index = self
            .registry
            .insert(surface, at_end)
            .inspect_err(|err| warn!(%err, "add rejected"))?;

        self.machine.on_inserted(index);
        if self.registry.count() == 1 && self.machine.adopt(index) {
            debug!(index, "first surface adopted as selection");
        }
        self.gestures.cancel();
        self.animation.release();

        self.relayout_from(previous, animated, now_ms);
        Ok(index)
    }

    /// Remove the surface at `index` and hand it back to the host
    ///
    /// A removed selection becomes `None`; nothing else is selected in its
    /// place.
    pub fn remove_surface(&mut self, index: usize, animated: bool, now_ms: f64) -> Result<ContentSurface> {
        let previous = self.displayed_geometry(now_ms);
        let surface = self
            .registry
            .remove(index)
            .inspect_err(|err| warn!(%err, "remove rejected"))?;

        self.machine.on_removed(index);
        self.gestures.cancel();
        self.animation.release();

        self.relayout_from(previous, animated, now_ms);
        Ok(surface)
    }

    /// Replace every surface in one step, relaying out once
    ///
    /// The previous surfaces are handed back detached. Selection starts over:
    /// while collapsed the first new surface is adopted, and the grid
    /// scrolls back to the top. Surfaces kept across the replacement move
    /// from where they are shown now.
    pub fn set_surfaces(
        &mut self,
        surfaces: Vec<ContentSurface>,
        animated: bool,
        now_ms: f64,
    ) -> Result<Vec<ContentSurface>> {
        let owner = self.id;
        let surfaces = surfaces
            .into_iter()
            .map(|mut surface| {
                surface.owner = Some(owner);
                surface.decorations_loaded = false;
                surface
            })
            .collect();

        let previous_geometry = self.displayed_geometry(now_ms);
        let previous = self
            .registry
            .replace(surfaces)
            .inspect_err(|err| warn!(%err, "surface list rejected"))?;

        self.machine.clear_selection();
        if !self.registry.is_empty() && self.machine.adopt(0) {
            debug!("first surface adopted as selection");
        }
        self.gestures.cancel();
        self.gestures.reset_scroll();
        self.animation.release();

        self.relayout_from(previous_geometry, animated, now_ms);
        Ok(previous)
    }

    /// Remove through the delete gesture and notify the delegate
    pub(super) fn delete_surface(&mut self, index: usize, now_ms: f64) -> Result<ContentSurface> {
        let surface = self.remove_surface(index, true, now_ms)?;
        if let Some(delegate) = self.delegate.as_deref_mut() {
            delegate.did_delete(&surface, index);
        }
        Ok(surface)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ExposeError;
    use super::*;

    #[test]
    fn test_add_appends_and_adopts_first() {
        let mut controller = ExposeController::default();

        assert_eq!(controller.add_surface(ContentSurface::new(1), false, 0.0), Ok(0));
        assert_eq!(controller.add_surface(ContentSurface::new(2), false, 0.0), Ok(1));

        assert_eq!(controller.selected_index(), Some(0));
        assert_eq!(controller.slots().len(), 2);
        assert_eq!(controller.surfaces().get(1).and_then(|s| s.slot()), Some(1));
    }

    #[test]
    fn test_front_insert_keeps_selection_on_same_surface() {
        let mut controller = ExposeController::default();
        controller.add_surface(ContentSurface::new(1), false, 0.0).unwrap();

        controller.insert_surface(ContentSurface::new(2), false, false, 0.0).unwrap();

        assert_eq!(controller.selected_index(), Some(1));
        assert_eq!(controller.selected_surface().map(|s| s.id), Some(1));
    }

    #[test]
    fn test_duplicate_add_rejected() {
        let mut controller = ExposeController::default();
        controller.add_surface(ContentSurface::new(1), false, 0.0).unwrap();

        let result = controller.add_surface(ContentSurface::new(1), false, 0.0);

        assert_eq!(result, Err(ExposeError::DuplicateSurface(1)));
        assert_eq!(controller.count(), 1);
    }

    #[test]
    fn test_remove_detaches_and_realigns_slots() {
        let mut controller = ExposeController::default();
        for id in 1..=3 {
            controller.add_surface(ContentSurface::new(id), false, 0.0).unwrap();
        }

        let removed = controller.remove_surface(1, false, 0.0).unwrap();

        assert_eq!(removed.id, 2);
        assert!(!removed.is_attached());
        assert_eq!(removed.owner(), None);
        assert_eq!(controller.slots().len(), 2);
        assert_eq!(controller.owner_of(2), None);
    }

    #[test]
    fn test_set_surfaces_replaces_and_adopts_first() {
        let mut controller = ExposeController::default();
        controller.add_surface(ContentSurface::new(1), false, 0.0).unwrap();
        controller.add_surface(ContentSurface::new(2), false, 0.0).unwrap();

        let previous = controller
            .set_surfaces(vec![ContentSurface::new(7), ContentSurface::new(8), ContentSurface::new(9)], false, 0.0)
            .unwrap();

        assert_eq!(previous.len(), 2);
        assert!(previous.iter().all(|s| s.owner().is_none()));
        assert_eq!(controller.surfaces().ids(), vec![7, 8, 9]);
        assert_eq!(controller.slots().len(), 3);
        assert_eq!(controller.selected_surface().map(|s| s.id), Some(7));
        assert_eq!(controller.owner_of(9), Some(controller.id()));
    }

    #[test]
    fn test_set_surfaces_rejects_duplicates() {
        let mut controller = ExposeController::default();
        controller.add_surface(ContentSurface::new(1), false, 0.0).unwrap();

        let result = controller.set_surfaces(vec![ContentSurface::new(3), ContentSurface::new(3)], false, 0.0);

        assert_eq!(result.unwrap_err(), ExposeError::DuplicateSurface(3));
        assert_eq!(controller.surfaces().ids(), vec![1]);
        assert_eq!(controller.selected_index(), Some(0));
    }

    #[test]
    fn test_set_surfaces_while_expanded_resets_scroll() {
        let mut controller = ExposeController::default();
        for id in 1..=12 {
            controller.add_surface(ContentSurface::new(id), false, 0.0).unwrap();
        }
        controller.toggle_expose(false, 0.0);
        controller.scroll_by(500.0);
        assert!(controller.scroll_offset() > 0.0);

        controller.set_surfaces(vec![ContentSurface::new(20)], false, 0.0).unwrap();

        assert!((controller.scroll_offset() - 0.0).abs() < 0.001);
        assert_eq!(controller.selected_index(), None);

        controller.toggle_expose(false, 0.0);
        assert_eq!(controller.selected_surface().map(|s| s.id), Some(20));
    }

    #[test]
    fn test_remove_animates_followers_from_their_own_slots() {
        let mut controller = ExposeController::default();
        for id in 1..=3 {
            controller.add_surface(ContentSurface::new(id), false, 0.0).unwrap();
        }
        controller.toggle_expose(false, 0.0);
        let third = controller.slots()[2];

        controller.remove_surface(0, true, 0.0).unwrap();

        let start = controller.frames(0.0)[1].geometry;
        assert!((start.rect.x - third.rect.x).abs() < 0.001);
        assert!((start.rect.y - third.rect.y).abs() < 0.001);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut controller = ExposeController::default();
        let err = controller.remove_surface(0, true, 0.0).unwrap_err();
        assert_eq!(err, ExposeError::IndexOutOfRange { index: 0, len: 0 });
    }
}
