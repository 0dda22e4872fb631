//! Two-phase transition descriptors

use crate::layout::SlotGeometry;
use crate::registry::SurfaceId;

/// What an animation is for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationKind {
    /// Collapsed to grid
    ZoomOut,
    /// Grid to collapsed
    ZoomIn,
    /// Geometry change without a state change (grid resize, add, delete)
    Relayout,
}

impl AnimationKind {
    /// Whether completion advances the state machine
    #[inline]
    pub fn is_zoom(self) -> bool {
        matches!(self, Self::ZoomOut | Self::ZoomIn)
    }
}

/// Lifecycle callback to dispatch
///
/// Surfaces are named by identity since indices can shift while an
/// animation is in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleHook {
    WillZoomOut,
    DidZoomOut,
    WillZoomIn,
    DidZoomIn,
    WillSwitch {
        from: Option<SurfaceId>,
        to: SurfaceId,
    },
    DidSelect(SurfaceId),
    WillShrink(SurfaceId),
    DidShrink(SurfaceId),
    WillExpand(SurfaceId),
    DidExpand(SurfaceId),
}

/// Movement of one surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track {
    pub id: SurfaceId,
    pub from: SlotGeometry,
    pub to: SlotGeometry,
}

/// Pre-hooks, geometry, post-hooks
///
/// The controller dispatches `pre_hooks`, hands the rest to the
/// coordinator (which applies the geometry), and dispatches the post-hooks
/// it gets back on completion.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionPlan {
    pub kind: AnimationKind,
    pub animated: bool,
    pub pre_hooks: Vec<LifecycleHook>,
    pub tracks: Vec<Track>,
    pub post_hooks: Vec<LifecycleHook>,
}

impl TransitionPlan {
    /// Create a plan with no hooks
    pub fn new(kind: AnimationKind, animated: bool, tracks: Vec<Track>) -> Self {
        Self {
            kind,
            animated,
            pre_hooks: Vec::new(),
            tracks,
            post_hooks: Vec::new(),
        }
    }

    /// Detach the pre-hooks for dispatch
    pub fn take_pre_hooks(&mut self) -> Vec<LifecycleHook> {
        std::mem::take(&mut self.pre_hooks)
    }

    /// Whether any surface actually moves
    pub fn moves_anything(&self) -> bool {
        self.tracks.iter().any(|t| t.from != t.to)
    }
}

/// Result of a finished animation
#[derive(Clone, Debug, PartialEq)]
pub struct Completion {
    pub kind: AnimationKind,
    pub animated: bool,
    pub post_hooks: Vec<LifecycleHook>,
    /// Where each tracked surface came to rest
    pub settled: Vec<(SurfaceId, SlotGeometry)>,
    /// Relayout requested while in flight (`Some(animated)`), to re-issue now
    pub reissue: Option<bool>,
}
