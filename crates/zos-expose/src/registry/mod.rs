//! Content registry module
//!
//! Provides the ordered surface collection and the surface handle type.

#[allow(clippy::module_inception)]
mod registry;
mod surface;

pub use registry::ContentRegistry;
pub use surface::ContentSurface;

use std::sync::atomic::{AtomicU64, Ordering};
use serde::{Deserialize, Serialize};

/// Unique surface identifier (chosen by the host)
pub type SurfaceId = u64;

/// Identifier of an expose controller
///
/// Surfaces store this instead of a reference so the relation never keeps
/// a controller alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControllerId(pub u64);

static NEXT_CONTROLLER_ID: AtomicU64 = AtomicU64::new(1);

impl ControllerId {
    /// Allocate a fresh identifier
    pub fn next() -> Self {
        Self(NEXT_CONTROLLER_ID.fetch_add(1, Ordering::Relaxed))
    }
}
