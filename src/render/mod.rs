//! Grid rendering with pluggable surfaces.
//!
//! This module provides:
//! - The `Surface` drawing trait and its primitive types
//! - The painter that draws an annotated grid onto any surface
//! - Canvas 2D (browser), SVG (native export) and recording (tests) surfaces
//! - Color parsing and the default style

pub mod backend;
pub mod canvas;
pub mod colors;
pub mod painter;
pub mod recording;
pub mod style;
pub mod svg;

// Re-export commonly used types
pub use backend::{Point, Rect, Surface, TextAlign, TextBaseline, TextStyle};
pub use canvas::CanvasSurface;
pub use colors::{palette, parse_color, CssColor, Rgb};
pub use painter::{
    arrow_points, clear, draw_arrow, draw_cell_labels, draw_grid_lines, draw_row_height_labels,
    format_cm, measure_line, paint_frame, ArrowEnd,
};
pub use recording::{heuristic_text_width, DrawCommand, RecordingSurface};
pub use style::{FontSpec, RenderStyle};
pub use svg::SvgSurface;
