//! Single-slot animation driver

use tracing::{debug, trace};
use crate::layout::SlotGeometry;
use crate::registry::SurfaceId;
use super::{AnimationKind, Completion, Easing, LifecycleHook, Track, TransitionPlan};

/// Shrink applied to a slot while it is pressed
pub const PRESSED_SCALE: f32 = 0.95;

/// In-flight animation
#[derive(Clone, Debug)]
pub struct Animation {
    /// Start time (ms timestamp)
    pub start_ms: f64,
    /// Duration (ms)
    pub duration_ms: f64,
    pub kind: AnimationKind,
    pub animated: bool,
    easing: Easing,
    tracks: Vec<Track>,
    post_hooks: Vec<LifecycleHook>,
}

impl Animation {
    /// Get the progress (0.0 to 1.0)
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let elapsed = (now_ms - self.start_ms) as f32;
        (elapsed / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Check if the animation has run its full duration
    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Interpolated geometry of a tracked surface
    pub fn geometry_for(&self, id: SurfaceId, now_ms: f64) -> Option<SlotGeometry> {
        let t = self.easing.apply(self.progress(now_ms));
        self.tracks
            .iter()
            .find(|track| track.id == id)
            .map(|track| SlotGeometry::lerp(&track.from, &track.to, t))
    }

    fn into_completion(self, reissue: Option<bool>) -> Completion {
        Completion {
            kind: self.kind,
            animated: self.animated,
            post_hooks: self.post_hooks,
            settled: self.tracks.iter().map(|t| (t.id, t.to)).collect(),
            reissue,
        }
    }
}

/// Drives at most one animation at a time
///
/// Relayout requests that arrive while an animation is in flight are
/// coalesced into a single pending flag; the running animation finishes
/// at the target it started with and the controller re-issues the relayout from
/// the returned [`Completion`].
#[derive(Clone, Debug)]
pub struct AnimationCoordinator {
    in_flight: Option<Animation>,
    pending_relayout: Option<bool>,
    duration_ms: u32,
    easing: Easing,
    shows_touch_down: bool,
    pressed: Option<SurfaceId>,
}

impl AnimationCoordinator {
    /// Create an idle coordinator
    pub fn new(duration_ms: u32, easing: Easing, shows_touch_down: bool) -> Self {
        Self {
            in_flight: None,
            pending_relayout: None,
            duration_ms,
            easing,
            shows_touch_down,
            pressed: None,
        }
    }

    /// Check if an animation is in flight
    #[inline]
    pub fn is_active(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Current in-flight animation
    #[inline]
    pub fn in_flight(&self) -> Option<&Animation> {
        self.in_flight.as_ref()
    }

    /// Check if a relayout is waiting for the in-flight animation
    #[inline]
    pub fn has_pending_relayout(&self) -> bool {
        self.pending_relayout.is_some()
    }

    #[inline]
    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Duration for animations started from now on
    pub fn set_duration_ms(&mut self, duration_ms: u32) {
        self.duration_ms = duration_ms;
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    #[inline]
    pub fn shows_touch_down(&self) -> bool {
        self.shows_touch_down
    }

    pub fn set_shows_touch_down(&mut self, shows: bool) {
        self.shows_touch_down = shows;
        if !shows {
            self.pressed = None;
        }
    }

    /// Ask to relayout; returns false when coalesced behind the in-flight animation
    pub fn request_relayout(&mut self, animated: bool) -> bool {
        if self.in_flight.is_none() {
            return true;
        }
        let merged = self.pending_relayout.unwrap_or(false) || animated;
        self.pending_relayout = Some(merged);
        trace!(animated = merged, "relayout coalesced behind in-flight animation");
        false
    }

    /// Apply a plan whose pre-hooks have already been dispatched
    ///
    /// Non-animated plans (or a zero duration) complete immediately and
    /// their completion is returned; otherwise the animation becomes the
    /// in-flight one and completes on a later [`tick`](Self::tick).
    ///
    /// An in-flight relayout is superseded; it carries no post-hooks. A
    /// relayout coalesced behind it stays pending.
    pub fn apply(&mut self, plan: TransitionPlan, now_ms: f64) -> Option<Completion> {
        debug_assert!(plan.pre_hooks.is_empty(), "pre-hooks must be dispatched before apply");

        if let Some(superseded) = self.in_flight.take() {
            debug_assert!(!superseded.kind.is_zoom(), "a zoom is never superseded");
            debug!(kind = ?superseded.kind, by = ?plan.kind, "in-flight animation superseded");
        }

        let animation = Animation {
            start_ms: now_ms,
            duration_ms: f64::from(self.duration_ms),
            kind: plan.kind,
            animated: plan.animated,
            easing: self.easing,
            tracks: plan.tracks,
            post_hooks: plan.post_hooks,
        };

        if !plan.animated || self.duration_ms == 0 {
            debug!(kind = ?animation.kind, "geometry applied without animation");
            return Some(animation.into_completion(self.pending_relayout.take()));
        }

        debug!(kind = ?animation.kind, duration_ms = self.duration_ms, "animation started");
        self.in_flight = Some(animation);
        None
    }

    /// Complete the in-flight animation once its duration has elapsed
    pub fn tick(&mut self, now_ms: f64) -> Option<Completion> {
        if !self.in_flight.as_ref()?.is_complete(now_ms) {
            return None;
        }
        let animation = self.in_flight.take()?;
        debug!(kind = ?animation.kind, "animation completed");
        Some(animation.into_completion(self.pending_relayout.take()))
    }

    /// Presented geometry for a surface whose resting geometry is `resting`
    pub fn frame_for(&self, id: SurfaceId, resting: SlotGeometry, now_ms: f64) -> SlotGeometry {
        let mut geometry = self
            .in_flight
            .as_ref()
            .and_then(|animation| animation.geometry_for(id, now_ms))
            .unwrap_or(resting);

        if self.is_pressed(id) {
            geometry.rect = geometry.rect.scaled_about_center(PRESSED_SCALE);
        }
        geometry
    }

    /// Mark a surface as pressed (no-op when touch-down visuals are off)
    pub fn press(&mut self, id: SurfaceId) {
        if self.shows_touch_down {
            self.pressed = Some(id);
        }
    }

    pub fn release(&mut self) {
        self.pressed = None;
    }

    #[inline]
    pub fn is_pressed(&self, id: SurfaceId) -> bool {
        self.pressed == Some(id)
    }
}
