//! Controller configuration

use serde::{Deserialize, Serialize};
use crate::animation::Easing;
use crate::error::{ExposeError, Result};
use crate::layout::GridSpec;
use crate::math::Size;

/// Configuration for creating an expose controller
///
/// Every field has a default, so partial JSON documents are accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExposeConfig {
    /// Grid dimensions and thumbnail styling
    pub grid: GridSpec,
    /// Whether a pressed slot shows a momentary shrink
    pub shows_touch_down: bool,
    /// Initial viewport size
    pub viewport: Size,
    /// Easing curve for zoom and relayout animations
    pub easing: Easing,
}

impl Default for ExposeConfig {
    fn default() -> Self {
        Self {
            grid: GridSpec::default(),
            shows_touch_down: true,
            viewport: Size::new(1024.0, 768.0),
            easing: Easing::default(),
        }
    }
}

impl ExposeConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ExposeError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| ExposeError::InvalidConfig(e.to_string()))
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        let grid = &self.grid;
        if grid.rows == 0 || grid.cols == 0 {
            return Err(ExposeError::InvalidConfig(format!(
                "grid must have at least one row and column, got {}x{}",
                grid.rows, grid.cols
            )));
        }
        if !(grid.scale_factor > 0.0 && grid.scale_factor <= 1.0) {
            return Err(ExposeError::InvalidConfig(format!(
                "scale_factor must be in (0, 1], got {}",
                grid.scale_factor
            )));
        }
        if grid.row_offset < 0.0 || grid.corner_radius < 0.0 {
            return Err(ExposeError::InvalidConfig(
                "row_offset and corner_radius must be non-negative".to_string(),
            ));
        }
        if self.viewport.width < 0.0 || self.viewport.height < 0.0 {
            return Err(ExposeError::InvalidConfig("viewport must be non-negative".to_string()));
        }
        Ok(())
    }
}
