//! Gesture coordinator

use tracing::trace;
use crate::delegate::ExposeDelegate;
use crate::error::{ExposeError, Result};
use crate::layout::SlotGeometry;
use crate::math::{Rect, Vec2};
use crate::registry::{ContentRegistry, ContentSurface};
use crate::transition::TransitionState;
use super::{Gesture, HitTarget, Intent};

/// Side of the square delete badge centered on a slot's top-left corner
pub const DELETE_BADGE_SIZE: f32 = 30.0;

/// Turns gestures into intents
///
/// Holds the pressed target between pointer down and up, and the grid's
/// scroll offset. Gestures are resolved synchronously; nothing is queued.
#[derive(Clone, Debug, Default)]
pub struct GestureCoordinator {
    pressed: Option<HitTarget>,
    scroll_offset: f32,
}

impl GestureCoordinator {
    /// Create a new gesture coordinator
    pub fn new() -> Self {
        Self::default()
    }

    /// Target under the pointer since the last pointer down
    #[inline]
    pub fn pressed(&self) -> Option<HitTarget> {
        self.pressed
    }

    /// Vertical scroll of the grid (px, >= 0)
    #[inline]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Scroll by `dy`, keeping the offset within `[0, max_offset]`
    pub fn scroll_by(&mut self, dy: f32, max_offset: f32) {
        self.scroll_offset = (self.scroll_offset + dy).clamp(0.0, max_offset.max(0.0));
    }

    /// Re-clamp after the content height changed
    pub fn clamp_scroll(&mut self, max_offset: f32) {
        self.scroll_by(0.0, max_offset);
    }

    /// Back to the top of the grid
    pub fn reset_scroll(&mut self) {
        self.scroll_offset = 0.0;
    }

    /// Find the target under a viewport point
    ///
    /// `slots` are in grid coordinates; the scroll offset is applied here.
    /// Delete badges win over slot bodies, and higher slots over lower.
    pub fn hit_test(
        &self,
        point: Vec2,
        slots: &[SlotGeometry],
        add_slot: Option<&SlotGeometry>,
    ) -> Option<HitTarget> {
        let grid_point = point + Vec2::new(0.0, self.scroll_offset);

        let mut by_z: Vec<(usize, &SlotGeometry)> = slots.iter().enumerate().collect();
        by_z.sort_by_key(|(_, slot)| std::cmp::Reverse(slot.z_order));

        if let Some((index, _)) = by_z
            .iter()
            .find(|(_, slot)| delete_badge(slot).contains(grid_point))
        {
            return Some(HitTarget::DeleteBadge(*index));
        }
        if let Some((index, _)) = by_z.iter().find(|(_, slot)| slot.rect.contains(grid_point)) {
            return Some(HitTarget::Slot(*index));
        }
        add_slot
            .filter(|slot| slot.rect.contains(grid_point))
            .map(|_| HitTarget::AddAffordance)
    }

    /// Pointer went down on `target`
    pub fn pointer_down(&mut self, target: Option<HitTarget>) {
        self.pressed = target;
    }

    /// Pointer went up on `target`; a tap when it matches the pressed target
    pub fn pointer_up(&mut self, target: Option<HitTarget>) -> Option<Gesture> {
        let pressed = self.pressed.take()?;
        if target != Some(pressed) {
            trace!(?pressed, ?target, "pointer released off the pressed target");
            return None;
        }
        Some(Gesture::tap_on(pressed))
    }

    /// Abandon the current press
    pub fn cancel(&mut self) {
        self.pressed = None;
    }

    /// Map a gesture to an intent, applying delegate vetoes
    ///
    /// `Ok(None)` when the gesture is dropped (transition in flight, grid
    /// not shown) or vetoed. An index outside the registry is an error and
    /// is reported before the delegate is consulted.
    pub fn resolve(
        &self,
        gesture: Gesture,
        state: TransitionState,
        delegate: Option<&dyn ExposeDelegate>,
        registry: &ContentRegistry,
    ) -> Result<Option<Intent>> {
        if state.is_transitioning() {
            trace!(?gesture, ?state, "gesture dropped during transition");
            return Ok(None);
        }
        if !state.is_expanded() {
            trace!(?gesture, ?state, "gesture ignored outside the grid");
            return Ok(None);
        }

        match gesture {
            Gesture::TapSlot(index) => {
                check_index(index, registry)?;
                Ok(Some(Intent::Select(index)))
            }
            Gesture::TapAdd => {
                let allowed = delegate
                    .and_then(|d| d.can_add_view_controllers())
                    .unwrap_or(true);
                if !allowed {
                    trace!("add vetoed by delegate");
                    return Ok(None);
                }
                Ok(Some(Intent::RequestAdd))
            }
            Gesture::Delete(index) => {
                let surface = check_index(index, registry)?;
                let allowed = delegate
                    .and_then(|d| d.can_delete_view_controller(surface))
                    .unwrap_or(true);
                if !allowed {
                    trace!(index, "delete vetoed by delegate");
                    return Ok(None);
                }
                Ok(Some(Intent::Delete(index)))
            }
        }
    }
}

fn check_index(index: usize, registry: &ContentRegistry) -> Result<&ContentSurface> {
    registry
        .get(index)
        .ok_or_else(|| ExposeError::out_of_range(index, registry.count()))
}

/// Delete badge rectangle of a slot (grid coordinates)
pub fn delete_badge(slot: &SlotGeometry) -> Rect {
    let half = DELETE_BADGE_SIZE / 2.0;
    Rect::new(
        slot.rect.x - half,
        slot.rect.y - half,
        DELETE_BADGE_SIZE,
        DELETE_BADGE_SIZE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{compute_slots, slot_for, GridSpec};
    use crate::math::Size;

    struct Vetoing;

    impl ExposeDelegate for Vetoing {
        fn can_add_view_controllers(&self) -> Option<bool> {
            Some(false)
        }

        fn can_delete_view_controller(&self, surface: &ContentSurface) -> Option<bool> {
            Some(surface.id != 2)
        }
    }

    struct Silent;

    impl ExposeDelegate for Silent {}

    fn registry(count: u64) -> ContentRegistry {
        let mut registry = ContentRegistry::new();
        for id in 1..=count {
            registry.insert(ContentSurface::new(id), true).unwrap();
        }
        registry
    }

    fn spec() -> GridSpec {
        GridSpec {
            row_offset: 0.0,
            scale_factor: 0.5,
            ..GridSpec::new(2, 2)
        }
    }

    #[test]
    fn test_tap_selects_only_when_expanded() {
        let router = GestureCoordinator::new();
        let reg = registry(3);

        let expanded = router.resolve(Gesture::TapSlot(1), TransitionState::Expanded, None, &reg);
        let collapsed = router.resolve(Gesture::TapSlot(1), TransitionState::Collapsed, None, &reg);

        assert_eq!(expanded, Ok(Some(Intent::Select(1))));
        assert_eq!(collapsed, Ok(None));
    }

    #[test]
    fn test_delete_ignored_when_collapsed() {
        let router = GestureCoordinator::new();
        let reg = registry(3);

        let result = router.resolve(Gesture::Delete(0), TransitionState::Collapsed, None, &reg);

        assert_eq!(result, Ok(None));
    }

    #[test]
    fn test_out_of_range_reported_before_veto() {
        let router = GestureCoordinator::new();
        let reg = registry(3);
        let delegate = Vetoing;
        let state = TransitionState::Expanded;

        assert_eq!(
            router.resolve(Gesture::TapSlot(99), state, None, &reg),
            Err(ExposeError::out_of_range(99, 3))
        );
        assert_eq!(
            router.resolve(Gesture::Delete(99), state, Some(&delegate), &reg),
            Err(ExposeError::out_of_range(99, 3))
        );
    }

    #[test]
    fn test_gestures_dropped_while_transitioning() {
        let router = GestureCoordinator::new();
        let reg = registry(3);

        for state in [TransitionState::EnteringExpanded, TransitionState::ExitingExpanded] {
            assert_eq!(router.resolve(Gesture::TapSlot(0), state, None, &reg), Ok(None));
            assert_eq!(router.resolve(Gesture::TapAdd, state, None, &reg), Ok(None));
            assert_eq!(router.resolve(Gesture::Delete(0), state, None, &reg), Ok(None));
        }
    }

    #[test]
    fn test_missing_veto_hooks_allow() {
        let router = GestureCoordinator::new();
        let reg = registry(3);
        let delegate = Silent;

        let add = router.resolve(Gesture::TapAdd, TransitionState::Expanded, Some(&delegate), &reg);
        let delete = router.resolve(Gesture::Delete(1), TransitionState::Expanded, None, &reg);

        assert_eq!(add, Ok(Some(Intent::RequestAdd)));
        assert_eq!(delete, Ok(Some(Intent::Delete(1))));
    }

    #[test]
    fn test_vetoes() {
        let router = GestureCoordinator::new();
        let reg = registry(3);
        let delegate = Vetoing;
        let state = TransitionState::Expanded;

        assert_eq!(router.resolve(Gesture::TapAdd, state, Some(&delegate), &reg), Ok(None));
        assert_eq!(router.resolve(Gesture::Delete(1), state, Some(&delegate), &reg), Ok(None));
        assert_eq!(
            router.resolve(Gesture::Delete(0), state, Some(&delegate), &reg),
            Ok(Some(Intent::Delete(0)))
        );
    }

    #[test]
    fn test_hit_test_slots_badges_and_add() {
        let router = GestureCoordinator::new();
        let viewport = Size::new(400.0, 400.0);
        let slots = compute_slots(3, viewport, &spec());
        let add = slot_for(3, Rect::from_size(viewport), &spec());

        // slot 1 spans x 250..350, y 50..150
        assert_eq!(router.hit_test(Vec2::new(300.0, 100.0), &slots, Some(&add)), Some(HitTarget::Slot(1)));
        assert_eq!(router.hit_test(Vec2::new(252.0, 52.0), &slots, Some(&add)), Some(HitTarget::DeleteBadge(1)));
        assert_eq!(router.hit_test(Vec2::new(300.0, 300.0), &slots, Some(&add)), Some(HitTarget::AddAffordance));
        assert_eq!(router.hit_test(Vec2::new(300.0, 300.0), &slots, None), None);
        assert_eq!(router.hit_test(Vec2::new(10.0, 10.0), &slots, Some(&add)), None);
    }

    #[test]
    fn test_hit_test_applies_scroll() {
        let mut router = GestureCoordinator::new();
        let slots = compute_slots(4, Size::new(400.0, 400.0), &spec());

        router.scroll_by(200.0, 400.0);

        // viewport y 100 is grid y 300: second row
        assert_eq!(router.hit_test(Vec2::new(100.0, 100.0), &slots, None), Some(HitTarget::Slot(2)));
    }

    #[test]
    fn test_scroll_clamped() {
        let mut router = GestureCoordinator::new();
        router.scroll_by(-50.0, 100.0);
        assert!((router.scroll_offset() - 0.0).abs() < 0.001);

        router.scroll_by(500.0, 100.0);
        assert!((router.scroll_offset() - 100.0).abs() < 0.001);

        router.clamp_scroll(40.0);
        assert!((router.scroll_offset() - 40.0).abs() < 0.001);

        router.reset_scroll();
        assert!((router.scroll_offset() - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_pointer_down_up_produces_tap() {
        let mut router = GestureCoordinator::new();

        router.pointer_down(Some(HitTarget::Slot(2)));
        assert_eq!(router.pointer_up(Some(HitTarget::Slot(2))), Some(Gesture::TapSlot(2)));
        assert_eq!(router.pressed(), None);

        router.pointer_down(Some(HitTarget::Slot(2)));
        assert_eq!(router.pointer_up(Some(HitTarget::Slot(1))), None);

        router.pointer_down(Some(HitTarget::AddAffordance));
        router.cancel();
        assert_eq!(router.pointer_up(Some(HitTarget::AddAffordance)), None);
    }
}
