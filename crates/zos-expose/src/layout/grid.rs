//! Grid dimensions and thumbnail styling

use serde::{Deserialize, Serialize};

/// Default animation duration (ms)
pub const DEFAULT_ANIMATION_DURATION_MS: u32 = 300;

/// Grid dimensions and thumbnail styling
///
/// `rows * cols` is the number of slots visible at once, not a capacity:
/// surfaces beyond it extend the grid downwards and scroll.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    /// Rows visible in the viewport
    pub rows: usize,
    /// Columns per row
    pub cols: usize,
    /// Vertical gutter between rows (px)
    pub row_offset: f32,
    /// Inward shrink applied to each cell (1.0 = thumbnail fills its cell)
    pub scale_factor: f32,
    /// Corner radius for thumbnails (px)
    pub corner_radius: f32,
    /// Duration of zoom and relayout animations (ms)
    pub animation_duration_ms: u32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 3,
            row_offset: 20.0,
            scale_factor: 0.85,
            corner_radius: 8.0,
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
        }
    }
}

impl GridSpec {
    /// Create a grid spec with default styling
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Default::default()
        }
    }

    /// Row count used for partitioning (never zero)
    #[inline]
    pub fn effective_rows(&self) -> usize {
        self.rows.max(1)
    }

    /// Column count used for partitioning (never zero)
    #[inline]
    pub fn effective_cols(&self) -> usize {
        self.cols.max(1)
    }

    /// Grid position (row, col) of an index
    #[inline]
    pub fn position_of(&self, index: usize) -> (usize, usize) {
        let cols = self.effective_cols();
        (index / cols, index % cols)
    }

    /// Number of rows needed to hold `count` slots
    #[inline]
    pub fn rows_for(&self, count: usize) -> usize {
        count.div_ceil(self.effective_cols())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimensions_partition_as_one() {
        let spec = GridSpec::new(0, 0);
        assert_eq!(spec.effective_rows(), 1);
        assert_eq!(spec.effective_cols(), 1);
        assert_eq!(spec.position_of(3), (3, 0));
    }

    #[test]
    fn test_position_is_row_major() {
        let spec = GridSpec::new(2, 3);
        assert_eq!(spec.position_of(0), (0, 0));
        assert_eq!(spec.position_of(2), (0, 2));
        assert_eq!(spec.position_of(3), (1, 0));
        assert_eq!(spec.position_of(7), (2, 1));
    }

    #[test]
    fn test_rows_for() {
        let spec = GridSpec::new(2, 3);
        assert_eq!(spec.rows_for(0), 0);
        assert_eq!(spec.rows_for(3), 1);
        assert_eq!(spec.rows_for(4), 2);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let spec: GridSpec = serde_json::from_str(r#"{"rows": 2}"#).unwrap();
        assert_eq!(spec.rows, 2);
        assert_eq!(spec.cols, 3);
        assert_eq!(spec.animation_duration_ms, DEFAULT_ANIMATION_DURATION_MS);
    }
}
