//! Collaborator interfaces
//!
//! Every method has a default, so hosts implement only what they need.
//! Veto hooks return `Option<bool>`: `None` means "no opinion" and the
//! controller falls back to allowing the operation. Notification hooks
//! default to no-ops.

mod decoration;

pub use decoration::{Decoration, DecorationId};
pub(crate) use decoration::Cached;

use crate::registry::ContentSurface;

/// Receives controller-level notifications and answers veto queries
pub trait ExposeDelegate {
    /// Whether the add affordance may request a new surface
    fn can_add_view_controllers(&self) -> Option<bool> {
        None
    }

    /// The user tapped the add affordance; the host should call `add_surface`
    fn should_add_view_controller(&mut self) {}

    fn will_zoom_out(&mut self, _animated: bool) {}

    fn did_zoom_out(&mut self, _animated: bool) {}

    fn will_zoom_in(&mut self, _animated: bool) {}

    fn did_zoom_in(&mut self, _animated: bool) {}

    /// Selection is about to move from `old` to `new`
    fn will_switch(&mut self, _old: Option<&ContentSurface>, _new: &ContentSurface) {}

    fn did_select(&mut self, _surface: &ContentSurface) {}

    /// Whether a delete gesture may remove `surface`
    fn can_delete_view_controller(&self, _surface: &ContentSurface) -> Option<bool> {
        None
    }

    /// `surface` was removed from `index` (its index before removal)
    fn did_delete(&mut self, _surface: &ContentSurface, _index: usize) {}
}

/// Supplies decoration views
pub trait ExposeDataSource {
    fn header_view(&self) -> Option<Decoration> {
        None
    }

    fn footer_view(&self) -> Option<Decoration> {
        None
    }

    fn background_view(&self) -> Option<Decoration> {
        None
    }

    /// View shown in the add-affordance slot
    fn add_affordance_view(&self) -> Option<Decoration> {
        None
    }

    fn label(&self, _surface: &ContentSurface) -> Option<String> {
        None
    }

    fn overlay_view(&self, _surface: &ContentSurface) -> Option<Decoration> {
        None
    }
}

/// Optional per-surface lifecycle receiver
///
/// Fire-and-forget: animations never wait on these.
pub trait ChildLifecycle {
    fn will_shrink(&mut self, _animated: bool) {}

    fn did_shrink(&mut self, _animated: bool) {}

    fn will_expand(&mut self, _animated: bool) {}

    fn did_expand(&mut self, _animated: bool) {}
}
