//! Content surface handle

use std::fmt;
use crate::delegate::{ChildLifecycle, Decoration};
use super::{ControllerId, SurfaceId};

/// Host-owned content unit shown full-frame or as a thumbnail
///
/// The host picks the identity; everything else is filled in by the
/// registry and the controller once the surface is added.
pub struct ContentSurface {
    /// Stable identity chosen by the host
    pub id: SurfaceId,
    /// Current slot index (None while detached)
    pub(crate) slot: Option<usize>,
    /// Controller this surface belongs to (relation only)
    pub(crate) owner: Option<ControllerId>,
    /// Label from the data source, cached until invalidated
    pub(crate) label: Option<String>,
    /// Overlay from the data source, cached until invalidated
    pub(crate) overlay: Option<Decoration>,
    /// Whether label/overlay have been queried since the last invalidation
    pub(crate) decorations_loaded: bool,
    /// Optional receiver for shrink/expand notifications
    lifecycle: Option<Box<dyn ChildLifecycle>>,
}

impl ContentSurface {
    /// Create a detached surface
    pub fn new(id: SurfaceId) -> Self {
        Self {
            id,
            slot: None,
            owner: None,
            label: None,
            overlay: None,
            decorations_loaded: false,
            lifecycle: None,
        }
    }

    /// Attach a lifecycle receiver
    pub fn with_lifecycle(mut self, lifecycle: Box<dyn ChildLifecycle>) -> Self {
        self.lifecycle = Some(lifecycle);
        self
    }

    /// Current slot index
    #[inline]
    pub fn slot(&self) -> Option<usize> {
        self.slot
    }

    /// Owning controller, if attached
    #[inline]
    pub fn owner(&self) -> Option<ControllerId> {
        self.owner
    }

    /// Cached label
    #[inline]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Cached overlay view
    #[inline]
    pub fn overlay(&self) -> Option<Decoration> {
        self.overlay
    }

    /// Check if the surface is attached to a controller
    #[inline]
    pub fn is_attached(&self) -> bool {
        self.slot.is_some()
    }

    pub(crate) fn lifecycle_mut(&mut self) -> Option<&mut (dyn ChildLifecycle + 'static)> {
        self.lifecycle.as_deref_mut()
    }

    pub(crate) fn detach(&mut self) {
        self.slot = None;
        self.owner = None;
    }
}

impl fmt::Debug for ContentSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentSurface")
            .field("id", &self.id)
            .field("slot", &self.slot)
            .field("owner", &self.owner)
            .field("label", &self.label)
            .field("overlay", &self.overlay)
            .field("has_lifecycle", &self.lifecycle.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_surface_is_detached() {
        let surface = ContentSurface::new(42);
        assert_eq!(surface.id, 42);
        assert!(!surface.is_attached());
        assert!(surface.owner().is_none());
        assert!(surface.label().is_none());
    }

    #[test]
    fn test_detach_clears_relation() {
        let mut surface = ContentSurface::new(1);
        surface.slot = Some(3);
        surface.owner = Some(ControllerId(9));

        surface.detach();

        assert_eq!(surface.slot(), None);
        assert_eq!(surface.owner(), None);
    }
}
