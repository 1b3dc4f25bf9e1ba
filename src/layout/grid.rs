//! Grid partition of a panel into rows and columns.
//!
//! Everything here is a pure function of [`Parameters`] and
//! [`GridConstraints`]; a [`Grid`] is rebuilt from scratch on every draw.

use serde::Serialize;

use super::constraints::GridConstraints;
use super::params::{Parameters, MAX_DENSITY};

/// Feasible row-count range for a panel height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowBounds {
    /// Fewest rows keeping each row at or below the maximum height
    pub min_rows: u32,
    /// Most rows keeping each row at or above the minimum height
    pub max_rows: u32,
}

impl RowBounds {
    /// Clamp a requested row count into `min_rows..=max_rows`.
    pub fn clamp(&self, rows: u32) -> u32 {
        rows.clamp(self.min_rows, self.max_rows)
    }

    /// Whether `rows` lies within the bounds.
    pub fn contains(&self, rows: u32) -> bool {
        (self.min_rows..=self.max_rows).contains(&rows)
    }
}

/// Saturating float-to-count conversion; inputs are already rounded.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_count(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        0
    } else if value >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        value as u32
    }
}

/// Row-count range keeping every row within the height bounds.
///
/// `min_rows = ceil(height / max_row_height)`, `max_rows = floor(height / min_row_height)`.
/// A panel shorter than the minimum row height cannot satisfy both, so the
/// range collapses to a single row instead of `1..=0`.
pub fn compute_row_bounds(height_cm: f64, constraints: &GridConstraints) -> RowBounds {
    let min_rows = to_count((height_cm / constraints.max_row_height_cm).ceil()).max(1);
    let max_rows = to_count((height_cm / constraints.min_row_height_cm).floor()).max(min_rows);
    RowBounds { min_rows, max_rows }
}

/// Row height for a (clamped) row count, capped at the maximum row height.
///
/// No floor is applied here; the minimum is only guaranteed when `row_count`
/// went through [`compute_row_bounds`] first.
pub fn compute_row_height_cm(height_cm: f64, row_count: u32, constraints: &GridConstraints) -> f64 {
    let rows = f64::from(row_count.max(1));
    constraints.max_row_height_cm.min(height_cm / rows)
}

/// Column count for a width and a 0..=100 density.
///
/// Density interpolates between the fewest columns at maximum cell width (0)
/// and the most columns at minimum cell width (100). A repair pass then nudges
/// the count until the cell width is back within bounds. Always returns >= 1.
pub fn compute_column_count(width_cm: f64, density: u32, constraints: &GridConstraints) -> u32 {
    let density = density.min(MAX_DENSITY);

    // A panel that fits in one cell stays a single cell at zero density
    if width_cm <= constraints.max_cell_width_cm && density == 0 {
        return 1;
    }

    let min_columns = (width_cm / constraints.max_cell_width_cm).ceil();
    let max_columns = (width_cm / constraints.min_cell_width_cm).floor();
    let t = f64::from(density) / f64::from(MAX_DENSITY);
    let mut columns = to_count((min_columns + (max_columns - min_columns) * t).round()).max(1);

    while width_cm / f64::from(columns) < constraints.min_cell_width_cm && columns > 1 {
        columns -= 1;
    }
    while width_cm / f64::from(columns) > constraints.max_cell_width_cm && columns < u32::MAX {
        columns += 1;
    }

    columns
}

/// Width of one column in centimeters.
pub fn compute_column_width_cm(width_cm: f64, column_count: u32) -> f64 {
    width_cm / f64::from(column_count.max(1))
}

/// Width of one column in surface pixels.
pub fn compute_column_width_px(width_cm: f64, column_count: u32, constraints: &GridConstraints) -> f64 {
    constraints.to_px(width_cm) / f64::from(column_count.max(1))
}

/// Height of one row in surface pixels.
pub fn compute_row_height_px(row_height_cm: f64, constraints: &GridConstraints) -> f64 {
    constraints.to_px(row_height_cm)
}

/// Concrete grid derived from the parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    /// Feasible row range for the panel height
    pub row_bounds: RowBounds,
    /// Effective (clamped) row count
    pub row_count: u32,
    pub row_height_cm: f64,
    pub row_height_px: f64,
    pub column_count: u32,
    pub column_width_cm: f64,
    pub column_width_px: f64,
    /// Full grid width on the surface
    pub width_px: f64,
    /// Full grid height on the surface (`row_height_px * row_count`)
    pub height_px: f64,
}

impl Grid {
    /// Compute the grid for `params`.
    ///
    /// The row count is clamped into its feasible range before the row height
    /// is derived, so callers cannot skip that step.
    pub fn compute(params: &Parameters, constraints: &GridConstraints) -> Self {
        let (params, row_bounds) = params.clamp_rows(constraints);

        let row_height_cm = compute_row_height_cm(params.height_cm, params.row_count, constraints);
        let column_count = compute_column_count(params.width_cm, params.density, constraints);

        let width_px = constraints.to_px(params.width_cm);
        let row_height_px = compute_row_height_px(row_height_cm, constraints);
        let column_width_px = compute_column_width_px(params.width_cm, column_count, constraints);

        log::debug!(
            "grid {}x{} ({:.1} x {:.1} cm cells) for {} x {} cm @ density {}",
            params.row_count,
            column_count,
            compute_column_width_cm(params.width_cm, column_count),
            row_height_cm,
            params.width_cm,
            params.height_cm,
            params.density
        );

        Self {
            row_bounds,
            row_count: params.row_count,
            row_height_cm,
            row_height_px,
            column_count,
            column_width_cm: compute_column_width_cm(params.width_cm, column_count),
            column_width_px,
            width_px,
            height_px: row_height_px * f64::from(params.row_count),
        }
    }
}
