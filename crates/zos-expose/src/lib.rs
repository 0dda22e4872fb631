//! Zero OS Expose
//!
//! Layout engine and transition state machine for presenting a set of
//! content surfaces either as one full-frame surface or as a scrollable
//! grid of thumbnails:
//!
//! - **Layout**: pure slot geometry for any grid size and item count
//! - **Registry**: ordered surfaces; insertion order is visual order
//! - **Transition**: guarded collapsed/expanded state and the selection
//! - **Input**: hit testing, taps and delegate vetoes
//! - **Animation**: will-hooks, one in-flight animation, did-hooks
//! - **Engine**: [`ExposeController`], the orchestrator the host drives
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                        ExposeController                        │
//! │                                                                │
//! │   gesture ──► GestureCoordinator ──► TransitionStateMachine    │
//! │                     │ (vetoes)              │ (legality)       │
//! │                     ▼                       ▼                  │
//! │             ContentRegistry ───────► Layout (slot geometry)    │
//! │                                             │                  │
//! │                                             ▼                  │
//! │                              AnimationCoordinator              │
//! │                         will-hooks → geometry → did-hooks      │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! The crate never draws. The host feeds time in as `now_ms`, calls
//! [`ExposeController::tick`] from its frame loop and paints whatever
//! [`ExposeController::frames`] returns.

pub mod animation;
pub mod config;
pub mod delegate;
pub mod engine;
pub mod error;
pub mod input;
pub mod layout;
pub mod math;
pub mod registry;
pub mod transition;

pub use animation::{AnimationKind, Easing, LifecycleHook};
pub use config::ExposeConfig;
pub use delegate::{ChildLifecycle, Decoration, DecorationId, ExposeDataSource, ExposeDelegate};
pub use engine::{ExposeController, SurfaceFrame};
pub use error::{ExposeError, Result};
pub use input::{Gesture, HitTarget, Intent};
pub use layout::{compute_slots, GridSpec, SlotGeometry};
pub use math::{Rect, Size, Vec2};
pub use registry::{ContentRegistry, ContentSurface, ControllerId, SurfaceId};
pub use transition::TransitionState;
