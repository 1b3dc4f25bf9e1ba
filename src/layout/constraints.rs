//! Fixed cell-size limits and the centimeter-to-pixel scale.

use serde::{Deserialize, Serialize};

use crate::error::{PanelGridError, Result};

/// Narrowest allowed cell, in centimeters.
pub const MIN_CELL_WIDTH_CM: f64 = 10.0;
/// Widest allowed cell, in centimeters.
pub const MAX_CELL_WIDTH_CM: f64 = 80.0;
/// Shortest allowed row, in centimeters.
pub const MIN_ROW_HEIGHT_CM: f64 = 16.0;
/// Tallest allowed row, in centimeters.
pub const MAX_ROW_HEIGHT_CM: f64 = 60.0;
/// On-surface pixels per centimeter.
pub const PIXELS_PER_CM: f64 = 2.7;

/// Size bounds the grid must respect, plus the drawing scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConstraints {
    pub min_cell_width_cm: f64,
    pub max_cell_width_cm: f64,
    pub min_row_height_cm: f64,
    pub max_row_height_cm: f64,
    pub pixels_per_cm: f64,
}

impl Default for GridConstraints {
    fn default() -> Self {
        Self {
            min_cell_width_cm: MIN_CELL_WIDTH_CM,
            max_cell_width_cm: MAX_CELL_WIDTH_CM,
            min_row_height_cm: MIN_ROW_HEIGHT_CM,
            max_row_height_cm: MAX_ROW_HEIGHT_CM,
            pixels_per_cm: PIXELS_PER_CM,
        }
    }
}

impl GridConstraints {
    /// Check every bound is a positive finite number and each min/max pair is ordered.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("minCellWidthCm", self.min_cell_width_cm),
            ("maxCellWidthCm", self.max_cell_width_cm),
            ("minRowHeightCm", self.min_row_height_cm),
            ("maxRowHeightCm", self.max_row_height_cm),
            ("pixelsPerCm", self.pixels_per_cm),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(PanelGridError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if self.min_cell_width_cm > self.max_cell_width_cm {
            return Err(PanelGridError::InvalidConfig(format!(
                "minCellWidthCm ({}) exceeds maxCellWidthCm ({})",
                self.min_cell_width_cm, self.max_cell_width_cm
            )));
        }
        if self.min_row_height_cm > self.max_row_height_cm {
            return Err(PanelGridError::InvalidConfig(format!(
                "minRowHeightCm ({}) exceeds maxRowHeightCm ({})",
                self.min_row_height_cm, self.max_row_height_cm
            )));
        }
        Ok(())
    }

    /// Convert centimeters to surface pixels.
    pub fn to_px(&self, cm: f64) -> f64 {
        cm * self.pixels_per_cm
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_panel_limits() {
        let c = GridConstraints::default();
        assert_eq!(c.min_cell_width_cm, 10.0);
        assert_eq!(c.max_cell_width_cm, 80.0);
        assert_eq!(c.min_row_height_cm, 16.0);
        assert_eq!(c.max_row_height_cm, 60.0);
        assert_eq!(c.pixels_per_cm, 2.7);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_inverted_bounds() {
        let c = GridConstraints {
            min_cell_width_cm: 90.0,
            ..GridConstraints::default()
        };
        assert!(c.validate().is_err());

        let c = GridConstraints {
            max_row_height_cm: 12.0,
            ..GridConstraints::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_scale() {
        let c = GridConstraints {
            pixels_per_cm: 0.0,
            ..GridConstraints::default()
        };
        assert!(c.validate().is_err());

        let c = GridConstraints {
            pixels_per_cm: f64::NAN,
            ..GridConstraints::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn to_px_uses_scale() {
        let c = GridConstraints::default();
        assert!((c.to_px(100.0) - 270.0).abs() < 1e-9);
    }
}
