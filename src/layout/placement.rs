//! Placement of a computed grid on a drawing surface.

use serde::Serialize;

use super::constraints::GridConstraints;
use super::grid::Grid;
use super::params::Parameters;

/// Top-left corner of the grid in surface pixels.
///
/// The grid is centered horizontally and its bottom row sits on the surface
/// bottom edge. Tall grids may start above the surface top (`offset_y < 0`);
/// that is accepted as is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Rectangle representing a cell's bounds on the surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    /// X position (left edge)
    pub x: f64,
    /// Y position (top edge)
    pub y: f64,
    /// Width of the cell
    pub width: f64,
    /// Height of the cell
    pub height: f64,
}

impl CellRect {
    /// Horizontal center of the cell
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Vertical center of the cell
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

impl Placement {
    /// Center `grid_width_px` horizontally and anchor `row_count` rows to the bottom edge.
    pub fn compute(
        surface_width: f64,
        surface_height: f64,
        grid_width_px: f64,
        row_height_px: f64,
        row_count: u32,
    ) -> Self {
        Self {
            offset_x: (surface_width - grid_width_px) / 2.0,
            offset_y: surface_height - row_height_px * f64::from(row_count),
        }
    }

    /// Placement for a computed grid.
    pub fn for_grid(surface_width: f64, surface_height: f64, grid: &Grid) -> Self {
        Self::compute(
            surface_width,
            surface_height,
            grid.width_px,
            grid.row_height_px,
            grid.row_count,
        )
    }
}

/// A grid together with its placement on a specific surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub grid: Grid,
    pub placement: Placement,
}

impl Frame {
    /// Compute the grid for `params` and place it on a surface of the given size.
    pub fn compute(
        params: &Parameters,
        constraints: &GridConstraints,
        surface_width: f64,
        surface_height: f64,
    ) -> Self {
        let grid = Grid::compute(params, constraints);
        let placement = Placement::for_grid(surface_width, surface_height, &grid);
        Self { grid, placement }
    }

    /// Surface bounds of the cell at (row, col), rows counted from the top.
    pub fn cell_rect(&self, row: u32, col: u32) -> CellRect {
        CellRect {
            x: self.placement.offset_x + f64::from(col) * self.grid.column_width_px,
            y: self.placement.offset_y + f64::from(row) * self.grid.row_height_px,
            width: self.grid.column_width_px,
            height: self.grid.row_height_px,
        }
    }

    /// Y coordinate of a row's vertical center.
    pub fn row_center_y(&self, row: u32) -> f64 {
        self.placement.offset_y
            + f64::from(row) * self.grid.row_height_px
            + self.grid.row_height_px / 2.0
    }

    /// X of the grid's left edge
    pub fn left(&self) -> f64 {
        self.placement.offset_x
    }

    /// X of the grid's right edge
    pub fn right(&self) -> f64 {
        self.placement.offset_x + self.grid.width_px
    }

    /// Y of the grid's top edge
    pub fn top(&self) -> f64 {
        self.placement.offset_y
    }

    /// Y of the grid's bottom edge
    pub fn bottom(&self) -> f64 {
        self.placement.offset_y + self.grid.height_px
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn centers_and_anchors_bottom() {
        let p = Placement::compute(1000.0, 600.0, 800.0, 100.0, 3);
        assert_eq!(p.offset_x, 100.0);
        assert_eq!(p.offset_y, 300.0);
    }

    #[test]
    fn tall_grid_overflows_top() {
        let p = Placement::compute(400.0, 200.0, 500.0, 100.0, 3);
        assert_eq!(p.offset_x, -50.0);
        assert_eq!(p.offset_y, -100.0);
    }

    #[test]
    fn frame_bottom_matches_surface() {
        let params = Parameters::new(300.0, 200.0, 5, 50).unwrap();
        let frame = Frame::compute(&params, &GridConstraints::default(), 1200.0, 700.0);
        assert!((frame.bottom() - 700.0).abs() < 1e-9);
        assert!(((frame.left() + frame.right()) / 2.0 - 600.0).abs() < 1e-9);
    }

    #[test]
    fn cell_rect_steps_by_cell_size() {
        let params = Parameters::new(300.0, 200.0, 5, 50).unwrap();
        let frame = Frame::compute(&params, &GridConstraints::default(), 1200.0, 700.0);
        let a = frame.cell_rect(0, 0);
        let b = frame.cell_rect(1, 2);
        assert!((b.x - a.x - 2.0 * frame.grid.column_width_px).abs() < 1e-9);
        assert!((b.y - a.y - frame.grid.row_height_px).abs() < 1e-9);
        assert!((frame.row_center_y(0) - a.center_y()).abs() < 1e-9);
    }
}
