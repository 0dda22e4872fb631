//! Computed slot geometry

use serde::Serialize;
use crate::math::Rect;

/// Geometry assigned to one surface
///
/// Derived from the grid spec, viewport and item count; never stored
/// beyond the next relayout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SlotGeometry {
    /// Frame in grid coordinates (before scroll offset)
    pub rect: Rect,
    /// Corner radius the renderer should apply
    pub corner_radius: f32,
    /// Scale of the surface relative to the full frame
    pub scale: f32,
    /// Stacking order (higher draws on top)
    pub z_order: u32,
    /// Grid row
    pub row: usize,
    /// Grid column
    pub col: usize,
}

impl SlotGeometry {
    /// Interpolate between two geometries
    ///
    /// Row and column snap to the target. The higher z-order is kept until
    /// the end so a shrinking surface stays on top while it moves.
    pub fn lerp(from: &SlotGeometry, to: &SlotGeometry, t: f32) -> SlotGeometry {
        SlotGeometry {
            rect: Rect::lerp(from.rect, to.rect, t),
            corner_radius: from.corner_radius + (to.corner_radius - from.corner_radius) * t,
            scale: from.scale + (to.scale - from.scale) * t,
            z_order: if t >= 1.0 { to.z_order } else { from.z_order.max(to.z_order) },
            row: to.row,
            col: to.col,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let from = SlotGeometry {
            rect: Rect::new(0.0, 0.0, 300.0, 200.0),
            corner_radius: 0.0,
            scale: 1.0,
            z_order: 9,
            row: 0,
            col: 0,
        };
        let to = SlotGeometry {
            rect: Rect::new(10.0, 10.0, 90.0, 60.0),
            corner_radius: 8.0,
            scale: 0.3,
            z_order: 1,
            row: 0,
            col: 1,
        };

        assert_eq!(SlotGeometry::lerp(&from, &to, 1.0), to);

        let mid = SlotGeometry::lerp(&from, &to, 0.5);
        assert!((mid.rect.x - 5.0).abs() < 0.001);
        assert!((mid.corner_radius - 4.0).abs() < 0.001);
        assert!((mid.scale - 0.65).abs() < 0.001);
        assert_eq!(mid.col, 1);
        assert_eq!(mid.z_order, 9);
    }
}
