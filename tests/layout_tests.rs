//! Layout calculator tests for panelgrid
//!
//! Covers row bounds, row heights, the column-count interpolation and repair
//! pass, and grid placement on a surface.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic,
    clippy::cast_possible_truncation,
    clippy::cast_lossless
)]

use panelgrid::layout::{
    compute_column_count, compute_column_width_cm, compute_row_bounds, compute_row_height_cm,
    Frame, Grid, GridConstraints, Parameters, Placement,
};
use test_case::test_case;

const EPS: f64 = 1e-9;

fn constraints() -> GridConstraints {
    GridConstraints::default()
}

// ============================================================================
// Row bounds and row height
// ============================================================================

#[test_case(200.0 => (4, 12) ; "two meters")]
#[test_case(180.0 => (3, 11) ; "default height")]
#[test_case(60.0 => (1, 3) ; "one max-height row")]
#[test_case(16.0 => (1, 1) ; "one min-height row")]
#[test_case(10.0 => (1, 1) ; "shorter than one row")]
fn row_bounds(height_cm: f64) -> (u32, u32) {
    let bounds = compute_row_bounds(height_cm, &constraints());
    (bounds.min_rows, bounds.max_rows)
}

#[test_case(200.0, 5 => 40.0 ; "under the cap")]
#[test_case(200.0, 1 => 60.0 ; "capped at max")]
#[test_case(180.0, 4 => 45.0 ; "default panel")]
fn row_height(height_cm: f64, rows: u32) -> f64 {
    compute_row_height_cm(height_cm, rows, &constraints())
}

#[test]
fn test_clamped_row_count_keeps_rows_in_bounds() {
    let params = Parameters::new(200.0, 200.0, 50, 0).unwrap();
    let grid = Grid::compute(&params, &constraints());
    assert_eq!(grid.row_count, 12);
    assert!(grid.row_height_cm >= 16.0 - EPS);

    let params = Parameters::new(200.0, 200.0, 1, 0).unwrap();
    let grid = Grid::compute(&params, &constraints());
    assert_eq!(grid.row_count, 4);
    assert!(grid.row_height_cm <= 60.0 + EPS);
}

// ============================================================================
// Column count
// ============================================================================

#[test_case(80.0, 0 => 1 ; "single cell rule")]
#[test_case(45.0, 0 => 1 ; "narrow panel single cell")]
#[test_case(100.0, 0 => 2 ; "min columns")]
#[test_case(300.0, 50 => 17 ; "midpoint interpolation")]
#[test_case(300.0, 0 => 4 ; "widest cells")]
#[test_case(300.0, 100 => 30 ; "narrowest cells")]
#[test_case(5.0, 100 => 1 ; "narrower than one cell")]
fn column_count(width_cm: f64, density: u32) -> u32 {
    compute_column_count(width_cm, density, &constraints())
}

#[test]
fn test_midpoint_width_within_bounds() {
    let width = compute_column_width_cm(300.0, 17);
    assert!((width - 17.647).abs() < 1e-3);
    assert!((10.0..=80.0).contains(&width));
}

#[test]
fn test_custom_constraints_change_columns() {
    let c = GridConstraints {
        min_cell_width_cm: 20.0,
        max_cell_width_cm: 50.0,
        ..GridConstraints::default()
    };
    // min = ceil(200/50) = 4, max = floor(200/20) = 10
    assert_eq!(compute_column_count(200.0, 0, &c), 4);
    assert_eq!(compute_column_count(200.0, 100, &c), 10);
    assert_eq!(compute_column_count(200.0, 50, &c), 7);
}

// ============================================================================
// Placement
// ============================================================================

#[test]
fn test_grid_is_bottom_anchored_and_centered() {
    let params = Parameters::new(300.0, 200.0, 5, 50).unwrap();
    let frame = Frame::compute(&params, &constraints(), 1000.0, 700.0);
    assert!((frame.bottom() - 700.0).abs() < EPS);
    let left_margin = frame.left();
    let right_margin = 1000.0 - frame.right();
    assert!((left_margin - right_margin).abs() < EPS);
}

#[test]
fn test_oversized_grid_extends_past_top() {
    let params = Parameters::new(300.0, 300.0, 5, 50).unwrap();
    let frame = Frame::compute(&params, &constraints(), 400.0, 300.0);
    assert!(frame.top() < 0.0);
    assert!(frame.left() < 0.0);
    assert!((frame.bottom() - 300.0).abs() < EPS);
}

#[test]
fn test_placement_formula() {
    let p = Placement::compute(800.0, 600.0, 400.0, 100.0, 3);
    assert_eq!(p.offset_x, 200.0);
    assert_eq!(p.offset_y, 300.0);
}

#[test]
fn test_cell_rects_tile_the_grid() {
    let params = Parameters::new(240.0, 180.0, 4, 50).unwrap();
    let frame = Frame::compute(&params, &constraints(), 1200.0, 800.0);
    let grid = frame.grid;
    let last = frame.cell_rect(grid.row_count - 1, grid.column_count - 1);
    assert!((last.x + last.width - frame.right()).abs() < 1e-6);
    assert!((last.y + last.height - frame.bottom()).abs() < 1e-6);
    let first = frame.cell_rect(0, 0);
    assert!((first.x - frame.left()).abs() < EPS);
    assert!((first.y - frame.top()).abs() < EPS);
}

// ============================================================================
// Properties
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_row_bounds_respect_height_limits(height in 16.0f64..2000.0) {
            let c = constraints();
            let b = compute_row_bounds(height, &c);
            prop_assert!(b.min_rows >= 1);
            prop_assert!(b.min_rows <= b.max_rows);
            prop_assert!(height / f64::from(b.max_rows) >= c.min_row_height_cm - EPS);
            prop_assert!(height / f64::from(b.min_rows) <= c.max_row_height_cm + EPS);
        }

        #[test]
        fn prop_column_width_in_bounds(width in 10.0f64..5000.0, density in 0u32..=100) {
            let c = constraints();
            let n = compute_column_count(width, density, &c);
            prop_assert!(n >= 1);
            let cell = width / f64::from(n);
            prop_assert!(cell >= c.min_cell_width_cm - EPS, "cell {} too narrow", cell);
            prop_assert!(cell <= c.max_cell_width_cm + EPS, "cell {} too wide", cell);
        }

        #[test]
        fn prop_narrow_panels_get_one_column(width in 0.1f64..10.0, density in 0u32..=100) {
            prop_assert_eq!(compute_column_count(width, density, &constraints()), 1);
        }

        #[test]
        fn prop_density_is_monotonic(width in 1.0f64..5000.0) {
            let c = constraints();
            let mut previous = compute_column_count(width, 0, &c);
            for density in 1..=100 {
                let n = compute_column_count(width, density, &c);
                prop_assert!(n >= previous, "density {} gave {} < {}", density, n, previous);
                previous = n;
            }
        }

        #[test]
        fn prop_layout_is_idempotent(
            width in 1.0f64..1000.0,
            height in 1.0f64..1000.0,
            rows in 0u32..100,
            density in 0u32..=100,
        ) {
            let params = Parameters::new(width, height, rows, density).unwrap();
            let c = constraints();
            prop_assert_eq!(Grid::compute(&params, &c), Grid::compute(&params, &c));
        }

        #[test]
        fn prop_clamped_rows_fit_height_bounds(height in 16.0f64..2000.0, rows in 0u32..500) {
            let c = constraints();
            let params = Parameters::new(100.0, height, rows, 50).unwrap();
            let grid = Grid::compute(&params, &c);
            prop_assert!(grid.row_bounds.contains(grid.row_count));
            prop_assert!(grid.row_height_cm >= c.min_row_height_cm - EPS);
            prop_assert!(grid.row_height_cm <= c.max_row_height_cm + EPS);
        }
    }
}
