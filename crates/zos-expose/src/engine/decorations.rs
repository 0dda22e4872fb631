//! Data-source decorations, queried lazily and cached

use tracing::debug;
use crate::delegate::Decoration;
use super::ExposeController;

impl ExposeController {
    /// Header shown above the grid; its height is reserved in the layout
    pub fn header_view(&mut self) -> Option<Decoration> {
        let source = self.data_source.as_deref();
        self.header.get_or_load(|| source.and_then(|s| s.header_view()))
    }

    /// Footer shown below the grid; its height is reserved in the layout
    pub fn footer_view(&mut self) -> Option<Decoration> {
        let source = self.data_source.as_deref();
        self.footer.get_or_load(|| source.and_then(|s| s.footer_view()))
    }

    pub fn background_view(&mut self) -> Option<Decoration> {
        let source = self.data_source.as_deref();
        self.background.get_or_load(|| source.and_then(|s| s.background_view()))
    }

    /// View for the add affordance cell; no view means no cell
    pub fn add_affordance_view(&mut self) -> Option<Decoration> {
        let source = self.data_source.as_deref();
        self.add_view.get_or_load(|| source.and_then(|s| s.add_affordance_view()))
    }

    pub(super) fn shows_add_affordance(&mut self) -> bool {
        self.add_affordance_view().is_some()
    }

    /// Label of the surface at `index`, cached on the surface
    pub fn label_for(&mut self, index: usize) -> Option<String> {
        self.load_surface_decorations(index);
        self.registry.get(index).and_then(|s| s.label.clone())
    }

    /// Overlay of the surface at `index`, cached on the surface
    pub fn overlay_for(&mut self, index: usize) -> Option<Decoration> {
        self.load_surface_decorations(index);
        self.registry.get(index).and_then(|s| s.overlay)
    }

    /// Drop every cached decoration and re-query on next access
    ///
    /// Header and footer heights may change, so the grid is laid out again.
    pub fn invalidate_decorations(&mut self, now_ms: f64) {
        self.clear_decoration_caches();
        debug!("decorations invalidated");
        self.relayout(false, now_ms);
    }

    pub(super) fn clear_decoration_caches(&mut self) {
        self.header.invalidate();
        self.footer.invalidate();
        self.background.invalidate();
        self.add_view.invalidate();
        for surface in self.registry.iter_mut() {
            surface.label = None;
            surface.overlay = None;
            surface.decorations_loaded = false;
        }
    }

    fn load_surface_decorations(&mut self, index: usize) {
        let source = self.data_source.as_deref();
        let Some(surface) = self.registry.get_mut(index) else {
            return;
        };
        if surface.decorations_loaded {
            return;
        }
        let (label, overlay) = {
            let view = &*surface;
            (
                source.and_then(|s| s.label(view)),
                source.and_then(|s| s.overlay_view(view)),
            )
        };
        surface.label = label;
        surface.overlay = overlay;
        surface.decorations_loaded = true;
    }
}
