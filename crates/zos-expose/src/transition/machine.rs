//! Guarded zoom state machine
//!
//! ```text
//!   Collapsed ──toggle──► EnteringExpanded ──complete──► Expanded
//!       ▲                                                  │
//!       └──complete── ExitingExpanded ◄──toggle/select─────┘
//! ```
//!
//! Requests arriving while a zoom is in flight are dropped, not queued.

use tracing::{debug, trace};
use crate::error::{ExposeError, Result};
use super::TransitionState;

/// Zoom accepted by the state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zoom {
    /// Collapsed to grid; `from` was shown full-frame
    Out {
        from: Option<usize>,
    },
    /// Grid to collapsed; `to` becomes full-frame
    In {
        from: Option<usize>,
        to: Option<usize>,
        /// Started by an explicit selection rather than a toggle
        via_select: bool,
    },
}

/// Owner of the single [`TransitionState`] and the selection
#[derive(Clone, Debug, Default)]
pub struct TransitionStateMachine {
    state: TransitionState,
    /// Committed selection; kept while expanded as the toggle-back target
    selected: Option<usize>,
    /// Selection that commits when the zoom in completes
    pending: Option<usize>,
}

impl TransitionStateMachine {
    /// Create a collapsed machine with no selection
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> TransitionState {
        self.state
    }

    #[inline]
    pub fn is_zoomed_out(&self) -> bool {
        self.state.is_zoomed_out()
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    /// Selection visible to the host
    ///
    /// Defined only around the collapsed state: the committed index while
    /// collapsed or zooming out of it, the pending index while zooming in,
    /// and `None` while the grid is shown.
    pub fn selected_index(&self) -> Option<usize> {
        match self.state {
            TransitionState::Collapsed | TransitionState::EnteringExpanded => self.selected,
            TransitionState::ExitingExpanded => self.pending,
            TransitionState::Expanded => None,
        }
    }

    /// Toggle between collapsed and expanded
    pub fn toggle(&mut self, count: usize) -> Option<Zoom> {
        match self.state {
            TransitionState::Collapsed => {
                self.state = TransitionState::EnteringExpanded;
                debug!(state = ?self.state, selected = ?self.selected, "zoom out started");
                Some(Zoom::Out { from: self.selected })
            }
            TransitionState::Expanded => {
                let to = self.return_target(count);
                Some(self.begin_zoom_in(to, false))
            }
            state => {
                trace!(?state, "toggle dropped during transition");
                None
            }
        }
    }

    /// Zoom into `index`
    ///
    /// Fails for an index outside the registry. Outside the expanded state
    /// the request is a no-op.
    pub fn select(&mut self, index: usize, count: usize) -> Result<Option<Zoom>> {
        if index >= count {
            return Err(ExposeError::out_of_range(index, count));
        }
        if !self.state.is_expanded() {
            trace!(state = ?self.state, index, "select ignored outside expanded state");
            return Ok(None);
        }
        Ok(Some(self.begin_zoom_in(Some(index), true)))
    }

    /// Finish the in-flight zoom, returning the new state
    pub fn complete(&mut self) -> Option<TransitionState> {
        match self.state {
            TransitionState::EnteringExpanded => {
                self.state = TransitionState::Expanded;
            }
            TransitionState::ExitingExpanded => {
                self.selected = self.pending.take();
                self.state = TransitionState::Collapsed;
            }
            _ => return None,
        }
        debug!(state = ?self.state, selected = ?self.selected, "zoom completed");
        Some(self.state)
    }

    /// Select `index` without a transition (collapsed with nothing selected)
    pub fn adopt(&mut self, index: usize) -> bool {
        if self.state.is_collapsed() && self.selected.is_none() {
            self.selected = Some(index);
            return true;
        }
        false
    }

    /// Forget the selection and any pending zoom-in target
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.pending = None;
    }

    /// Keep indices pointing at the same surfaces after an insertion
    pub fn on_inserted(&mut self, index: usize) {
        shift_up(&mut self.selected, index);
        shift_up(&mut self.pending, index);
    }

    /// Keep indices pointing at the same surfaces after a removal
    ///
    /// A removed selection becomes `None`; nothing is implicitly selected.
    pub fn on_removed(&mut self, index: usize) {
        shift_down(&mut self.selected, index);
        shift_down(&mut self.pending, index);
    }

    fn begin_zoom_in(&mut self, to: Option<usize>, via_select: bool) -> Zoom {
        self.pending = to;
        self.state = TransitionState::ExitingExpanded;
        debug!(state = ?self.state, ?to, via_select, "zoom in started");
        Zoom::In {
            from: self.selected,
            to,
            via_select,
        }
    }

    fn return_target(&self, count: usize) -> Option<usize> {
        match self.selected {
            Some(index) if index < count => Some(index),
            _ if count > 0 => Some(0),
            _ => None,
        }
    }
}

fn shift_up(slot: &mut Option<usize>, inserted: usize) {
    if let Some(index) = slot {
        if *index >= inserted {
            *index += 1;
        }
    }
}

fn shift_down(slot: &mut Option<usize>, removed: usize) {
    *slot = match *slot {
        Some(index) if index == removed => None,
        Some(index) if index > removed => Some(index - 1),
        other => other,
    };
}
