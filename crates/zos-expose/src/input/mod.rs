//! Input routing module
//!
//! Hit testing, tap recognition from pointer down/up pairs, and the
//! mapping from gestures to vetoed intents.

mod result;
mod router;

pub use result::{Gesture, HitTarget, Intent};
pub use router::{delete_badge, GestureCoordinator, DELETE_BADGE_SIZE};
