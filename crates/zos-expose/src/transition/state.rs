//! Zoom state

use serde::Serialize;

/// Presentation state of the controller
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionState {
    /// One surface shown full-frame
    #[default]
    Collapsed,
    /// Zooming out to the grid
    EnteringExpanded,
    /// Grid of thumbnails
    Expanded,
    /// Zooming in to a single surface
    ExitingExpanded,
}

impl TransitionState {
    /// True while the grid is shown or being zoomed out to
    #[inline]
    pub fn is_zoomed_out(self) -> bool {
        matches!(self, Self::Expanded | Self::EnteringExpanded)
    }

    /// True while a zoom animation is in flight
    #[inline]
    pub fn is_transitioning(self) -> bool {
        matches!(self, Self::EnteringExpanded | Self::ExitingExpanded)
    }

    #[inline]
    pub fn is_expanded(self) -> bool {
        self == Self::Expanded
    }

    #[inline]
    pub fn is_collapsed(self) -> bool {
        self == Self::Collapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoomed_out_states() {
        assert!(!TransitionState::Collapsed.is_zoomed_out());
        assert!(TransitionState::EnteringExpanded.is_zoomed_out());
        assert!(TransitionState::Expanded.is_zoomed_out());
        assert!(!TransitionState::ExitingExpanded.is_zoomed_out());
    }

    #[test]
    fn test_transitioning_states() {
        assert!(!TransitionState::Collapsed.is_transitioning());
        assert!(TransitionState::EnteringExpanded.is_transitioning());
        assert!(!TransitionState::Expanded.is_transitioning());
        assert!(TransitionState::ExitingExpanded.is_transitioning());
    }
}
