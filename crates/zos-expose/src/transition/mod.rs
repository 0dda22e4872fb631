//! Transition state machine module
//!
//! Owns the collapsed/expanded state and the selection. Nothing else
//! writes either.

mod machine;
mod state;

pub use machine::{TransitionStateMachine, Zoom};
pub use state::TransitionState;
