//! Layout engine for panel grids.
//!
//! This module handles:
//! - Fixed cell-size constraints and the cm-to-px scale
//! - Validated user parameters and the mandatory row-count clamp
//! - Column-count interpolation from the density knob
//! - Placing the grid on a surface (centered, bottom-anchored)
//!
//! All of it is pure and testable without a drawing surface.

mod constraints;
mod grid;
mod params;
mod placement;

pub use constraints::{
    GridConstraints, MAX_CELL_WIDTH_CM, MAX_ROW_HEIGHT_CM, MIN_CELL_WIDTH_CM, MIN_ROW_HEIGHT_CM,
    PIXELS_PER_CM,
};
pub use grid::{
    compute_column_count, compute_column_width_cm, compute_column_width_px, compute_row_bounds,
    compute_row_height_cm, compute_row_height_px, Grid, RowBounds,
};
pub use params::{Parameters, MAX_DENSITY};
pub use placement::{CellRect, Frame, Placement};
