//! User-adjustable panel parameters.

use serde::{Deserialize, Serialize};

use super::constraints::GridConstraints;
use super::grid::{compute_row_bounds, RowBounds};
use crate::error::{PanelGridError, Result};

/// Upper end of the density knob.
pub const MAX_DENSITY: u32 = 100;

/// Panel dimensions and grid knobs as chosen by the user.
///
/// Values are validated on construction; `row_count` is only guaranteed to be
/// feasible after [`Parameters::clamp_rows`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameters {
    /// Overall panel width in centimeters (> 0)
    pub width_cm: f64,
    /// Overall panel height in centimeters (> 0)
    pub height_cm: f64,
    /// Requested number of rows (>= 1)
    pub row_count: u32,
    /// Column density, 0 = fewest/widest columns, 100 = most/narrowest
    pub density: u32,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            width_cm: 240.0,
            height_cm: 180.0,
            row_count: 4,
            density: 50,
        }
    }
}

impl Parameters {
    /// Build a parameter set, rejecting non-finite or non-positive dimensions.
    ///
    /// Density above 100 is clamped and a zero row count is raised to one,
    /// mirroring the slider ranges these values come from.
    ///
    /// # Errors
    /// Returns [`PanelGridError::InvalidParameter`] if `width_cm` or
    /// `height_cm` is not a positive finite number.
    pub fn new(width_cm: f64, height_cm: f64, row_count: u32, density: u32) -> Result<Self> {
        Ok(Self {
            width_cm: check_dimension("widthCm", width_cm)?,
            height_cm: check_dimension("heightCm", height_cm)?,
            row_count: row_count.max(1),
            density: density.min(MAX_DENSITY),
        })
    }

    /// Copy with a new width.
    ///
    /// # Errors
    /// Returns [`PanelGridError::InvalidParameter`] for a non-positive or non-finite width.
    pub fn with_width_cm(self, width_cm: f64) -> Result<Self> {
        Ok(Self {
            width_cm: check_dimension("widthCm", width_cm)?,
            ..self
        })
    }

    /// Copy with a new height.
    ///
    /// # Errors
    /// Returns [`PanelGridError::InvalidParameter`] for a non-positive or non-finite height.
    pub fn with_height_cm(self, height_cm: f64) -> Result<Self> {
        Ok(Self {
            height_cm: check_dimension("heightCm", height_cm)?,
            ..self
        })
    }

    /// Copy with a new requested row count (raised to at least one).
    pub fn with_row_count(self, row_count: u32) -> Self {
        Self {
            row_count: row_count.max(1),
            ..self
        }
    }

    /// Copy with a new density (clamped to 0..=100).
    pub fn with_density(self, density: u32) -> Self {
        Self {
            density: density.min(MAX_DENSITY),
            ..self
        }
    }

    /// Pull `row_count` into the feasible range for the current height.
    ///
    /// This must run before any grid is computed: the row-height formula caps
    /// at the maximum but only this clamp keeps rows above the minimum.
    pub fn clamp_rows(self, constraints: &GridConstraints) -> (Self, RowBounds) {
        let bounds = compute_row_bounds(self.height_cm, constraints);
        let row_count = bounds.clamp(self.row_count);
        if row_count != self.row_count {
            log::debug!(
                "row count {} outside {}..={} for {} cm height, using {}",
                self.row_count,
                bounds.min_rows,
                bounds.max_rows,
                self.height_cm,
                row_count
            );
        }
        (Self { row_count, ..self }, bounds)
    }
}

fn check_dimension(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PanelGridError::InvalidParameter { name, value })
    }
}
