//! Gesture and intent types

use serde::Serialize;

/// What a point in the grid landed on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "index", rename_all = "snake_case")]
pub enum HitTarget {
    /// Body of the slot at this index
    Slot(usize),
    /// Delete badge of the slot at this index
    DeleteBadge(usize),
    /// Add affordance cell after the last slot
    AddAffordance,
}

/// Gesture recognized by the external gesture layer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    /// Tap on a slot
    TapSlot(usize),
    /// Tap on the add affordance
    TapAdd,
    /// Delete gesture on a slot
    Delete(usize),
}

impl Gesture {
    /// Gesture produced by a completed tap on `target`
    pub fn tap_on(target: HitTarget) -> Self {
        match target {
            HitTarget::Slot(index) => Gesture::TapSlot(index),
            HitTarget::DeleteBadge(index) => Gesture::Delete(index),
            HitTarget::AddAffordance => Gesture::TapAdd,
        }
    }
}

/// Semantic request forwarded to the controller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Zoom into a slot
    Select(usize),
    /// Ask the host for a new surface
    RequestAdd,
    /// Remove a slot
    Delete(usize),
}
