//! Animation coordination
//!
//! Geometry changes run as two-phase [`TransitionPlan`]s: will-hooks are
//! dispatched first, then the coordinator applies the geometry (animated
//! or not), and the did-hooks come back in a [`Completion`] once the
//! geometry has settled.

mod coordinator;
mod easing;
mod plan;

pub use coordinator::{Animation, AnimationCoordinator, PRESSED_SCALE};
pub use easing::{ease_in_out, ease_out_cubic, Easing};
pub use plan::{AnimationKind, Completion, LifecycleHook, Track, TransitionPlan};
