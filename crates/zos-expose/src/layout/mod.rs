//! Grid layout engine
//!
//! Pure functions mapping an item count, a [`GridSpec`] and a viewport to
//! slot geometry. Index `i` lands in row `i / cols`, column `i % cols`;
//! insertion order is visual order. The viewport is partitioned into
//! `rows x cols` cells separated vertically by `row_offset`, and each cell
//! is shrunk around its center by `scale_factor`. Items past
//! `rows * cols` continue on further rows below the viewport.

mod grid;
mod slot;

pub use grid::{GridSpec, DEFAULT_ANIMATION_DURATION_MS};
pub use slot::SlotGeometry;

use crate::math::{Rect, Size};

/// Compute one slot per item in a viewport anchored at the origin
pub fn compute_slots(item_count: usize, viewport: Size, spec: &GridSpec) -> Vec<SlotGeometry> {
    compute_slots_in(item_count, Rect::from_size(viewport), spec)
}

/// Compute one slot per item inside `frame`
pub fn compute_slots_in(item_count: usize, frame: Rect, spec: &GridSpec) -> Vec<SlotGeometry> {
    (0..item_count).map(|index| slot_for(index, frame, spec)).collect()
}

/// Size of a single (unscaled) grid cell
pub fn cell_size(viewport: Size, spec: &GridSpec) -> Size {
    let rows = spec.effective_rows() as f32;
    let cols = spec.effective_cols() as f32;
    let gutters = spec.row_offset * (rows - 1.0);

    Size::new(
        (viewport.width / cols).max(0.0),
        ((viewport.height - gutters) / rows).max(0.0),
    )
}

/// Geometry of the slot at `index`
///
/// Also used for the add affordance, which sits at `index == item_count`.
pub fn slot_for(index: usize, frame: Rect, spec: &GridSpec) -> SlotGeometry {
    let cell = cell_size(frame.size(), spec);
    let (row, col) = spec.position_of(index);

    let cell_rect = Rect::new(
        frame.x + col as f32 * cell.width,
        frame.y + row as f32 * (cell.height + spec.row_offset),
        cell.width,
        cell.height,
    );
    let rect = cell_rect.scaled_about_center(spec.scale_factor);

    SlotGeometry {
        rect,
        corner_radius: spec.corner_radius,
        scale: relative_scale(rect.size(), frame.size()),
        z_order: index as u32,
        row,
        col,
    }
}

/// Geometry of a surface presented full-frame (collapsed mode)
///
/// Row and column keep the surface's grid position so zooming out starts
/// from the right cell.
pub fn full_frame(index: usize, frame: Rect, spec: &GridSpec, z_order: u32) -> SlotGeometry {
    let (row, col) = spec.position_of(index);
    SlotGeometry {
        rect: frame,
        corner_radius: 0.0,
        scale: 1.0,
        z_order,
        row,
        col,
    }
}

/// Total height of the grid for `slot_count` slots (scrollable extent)
pub fn content_height(slot_count: usize, frame: Rect, spec: &GridSpec) -> f32 {
    let rows = spec.rows_for(slot_count);
    if rows == 0 {
        return 0.0;
    }
    let cell = cell_size(frame.size(), spec);
    rows as f32 * cell.height + (rows - 1) as f32 * spec.row_offset
}

fn relative_scale(slot: Size, frame: Size) -> f32 {
    if frame.is_empty() {
        return 0.0;
    }
    (slot.width / frame.width).min(slot.height / frame.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn plain_spec(rows: usize, cols: usize) -> GridSpec {
        GridSpec {
            rows,
            cols,
            row_offset: 0.0,
            scale_factor: 1.0,
            corner_radius: 4.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_item_count() {
        let slots = compute_slots(0, Size::new(300.0, 200.0), &GridSpec::default());
        assert!(slots.is_empty());
    }

    #[test]
    fn test_cells_partition_viewport() {
        let slots = compute_slots(6, Size::new(300.0, 200.0), &plain_spec(2, 3));

        assert_eq!(slots.len(), 6);
        let last = slots[5].rect;
        assert!((last.x - 200.0).abs() < 0.001);
        assert!((last.y - 100.0).abs() < 0.001);
        assert!((last.width - 100.0).abs() < 0.001);
        assert!((last.height - 100.0).abs() < 0.001);
        assert!((slots[0].corner_radius - 4.0).abs() < 0.001);
    }

    #[test]
    fn test_row_offset_is_gutter_between_rows() {
        let spec = GridSpec {
            row_offset: 20.0,
            ..plain_spec(2, 2)
        };
        let slots = compute_slots(4, Size::new(200.0, 220.0), &spec);

        // (220 - 20) / 2 = 100 per row
        assert!((slots[0].rect.height - 100.0).abs() < 0.001);
        assert!((slots[2].rect.y - 120.0).abs() < 0.001);
        assert!((slots[3].rect.bottom() - 220.0).abs() < 0.001);
    }

    #[test]
    fn test_scale_factor_shrinks_around_cell_center() {
        let spec = GridSpec {
            scale_factor: 0.5,
            ..plain_spec(1, 2)
        };
        let slots = compute_slots(2, Size::new(200.0, 100.0), &spec);

        let second = slots[1].rect;
        assert!((second.width - 50.0).abs() < 0.001);
        assert!((second.x - 125.0).abs() < 0.001);
        assert!((second.y - 25.0).abs() < 0.001);
        assert!((slots[1].scale - 0.25).abs() < 0.001);
    }

    #[test]
    fn test_overflow_extends_rows_past_viewport() {
        let slots = compute_slots(5, Size::new(200.0, 100.0), &plain_spec(1, 2));

        assert_eq!(slots.len(), 5);
        assert_eq!(slots[4].row, 2);
        assert!(slots[4].rect.y >= 200.0 - 0.001);
    }

    #[test]
    fn test_frame_origin_offsets_grid() {
        let frame = Rect::new(0.0, 40.0, 300.0, 200.0);
        let slots = compute_slots_in(1, frame, &plain_spec(2, 3));
        assert!((slots[0].rect.y - 40.0).abs() < 0.001);
    }

    #[test]
    fn test_content_height() {
        let spec = GridSpec {
            row_offset: 10.0,
            ..plain_spec(2, 2)
        };
        let frame = Rect::from_size(Size::new(200.0, 210.0));

        assert!((content_height(0, frame, &spec) - 0.0).abs() < 0.001);
        assert!((content_height(2, frame, &spec) - 100.0).abs() < 0.001);
        assert!((content_height(5, frame, &spec) - 320.0).abs() < 0.001);
    }

    #[test]
    fn test_full_frame_keeps_grid_position() {
        let frame = Rect::from_size(Size::new(300.0, 200.0));
        let geometry = full_frame(4, frame, &plain_spec(2, 3), 99);

        assert_eq!(geometry.rect, frame);
        assert_eq!((geometry.row, geometry.col), (1, 1));
        assert_eq!(geometry.z_order, 99);
        assert!((geometry.scale - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_zero_viewport_does_not_panic() {
        let slots = compute_slots(3, Size::ZERO, &GridSpec::default());
        assert_eq!(slots.len(), 3);
        assert!((slots[0].scale - 0.0).abs() < 0.001);
    }

    proptest! {
        #[test]
        fn prop_one_slot_per_item_in_row_major_order(
            count in 1usize..200,
            rows in 0usize..12,
            cols in 0usize..12,
        ) {
            let spec = GridSpec::new(rows, cols);
            let slots = compute_slots(count, Size::new(1024.0, 768.0), &spec);
            let cols = cols.max(1);

            prop_assert_eq!(slots.len(), count);
            for (i, slot) in slots.iter().enumerate() {
                prop_assert_eq!(slot.row, i / cols);
                prop_assert_eq!(slot.col, i % cols);
                prop_assert_eq!(slot.z_order as usize, i);
            }
        }

        #[test]
        fn prop_layout_is_deterministic(count in 0usize..64, rows in 1usize..6, cols in 1usize..6) {
            let spec = GridSpec::new(rows, cols);
            let viewport = Size::new(800.0, 600.0);
            prop_assert_eq!(
                compute_slots(count, viewport, &spec),
                compute_slots(count, viewport, &spec)
            );
        }
    }
}
