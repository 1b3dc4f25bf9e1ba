//! Annotated grid drawing.
//!
//! Paints a [`Frame`] onto any [`Surface`]: gridlines, a width label with a
//! measurement arrow in every cell, and a height label beside every row.
//! Every redraw is a full repaint.

use crate::layout::Frame;

use super::backend::{Point, Rect, Surface, TextAlign, TextBaseline, TextStyle};
use super::style::RenderStyle;

/// Cell label sits this far above the cell's vertical center
const CELL_LABEL_RISE: f64 = 5.0;
/// Measurement line sits this far below the cell's vertical center
const MEASURE_LINE_DROP: f64 = 10.0;
/// Measurement line length as a fraction of the cell width
const MEASURE_LINE_FRACTION: f64 = 0.7;
/// Band padding left/right of the measurement line
const BAND_PAD_X: f64 = 3.0;
/// Band half-height around the measurement line
const BAND_HALF_HEIGHT: f64 = 7.0;

/// Arrowhead horizontal reach
pub const ARROW_LENGTH: f64 = 5.0;
/// Arrowhead vertical half-span
pub const ARROW_HALF_SPAN: f64 = 3.0;

/// Right edge of the row label text, measured left from the grid
const ROW_LABEL_GAP: f64 = 55.0;
/// Right edge of the row label band, measured left from the grid
const ROW_BAND_GAP: f64 = 50.0;
/// Extra band width beyond the measured text
const ROW_BAND_PAD: f64 = 6.0;
/// Row label band height
const ROW_BAND_HEIGHT: f64 = 16.0;

/// Which end of a measurement line an arrowhead marks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowEnd {
    Left,
    Right,
}

/// Format a length as shown on the drawing (`"17.6 cm"`).
///
/// Values exactly halfway between two tenths (such as 10.25) round up;
/// everything else rounds to the nearest tenth of the exact binary value.
pub fn format_cm(value: f64) -> String {
    // Only odd multiples of 0.25 are representable halfway points
    let halfway = (value * 4.0).fract() == 0.0 && (value * 2.0).fract() != 0.0;
    if halfway {
        let rounded = (value * 10.0).ceil() / 10.0;
        return format!("{rounded:.1} cm");
    }
    format!("{value:.1} cm")
}

/// Clear the surface, then draw the whole annotated grid.
pub fn paint_frame<S: Surface + ?Sized>(surface: &mut S, frame: &Frame, style: &RenderStyle) {
    clear(surface);
    draw_grid_lines(surface, frame, style);
    draw_cell_labels(surface, frame, style);
    draw_row_height_labels(surface, frame, style);
}

/// Erase the entire drawable area.
pub fn clear<S: Surface + ?Sized>(surface: &mut S) {
    surface.clear();
}

/// Draw `row_count + 1` horizontal and `column_count + 1` vertical lines.
pub fn draw_grid_lines<S: Surface + ?Sized>(surface: &mut S, frame: &Frame, style: &RenderStyle) {
    let grid = &frame.grid;
    let (left, right) = (frame.left(), frame.right());
    let (top, bottom) = (frame.top(), frame.bottom());

    for i in 0..=grid.row_count {
        let y = top + f64::from(i) * grid.row_height_px;
        surface.stroke_line(
            Point::new(left, y),
            Point::new(right, y),
            &style.grid_line_color,
            style.line_width,
        );
    }

    for i in 0..=grid.column_count {
        let x = left + f64::from(i) * grid.column_width_px;
        surface.stroke_line(
            Point::new(x, top),
            Point::new(x, bottom),
            &style.grid_line_color,
            style.line_width,
        );
    }
}

/// Label every cell with the column width and a double-headed measurement line.
pub fn draw_cell_labels<S: Surface + ?Sized>(surface: &mut S, frame: &Frame, style: &RenderStyle) {
    let grid = &frame.grid;
    let label = format_cm(grid.column_width_cm);
    let text_style = TextStyle {
        font: &style.cell_font,
        color: &style.label_color,
        align: TextAlign::Center,
        baseline: TextBaseline::Alphabetic,
    };

    for row in 0..grid.row_count {
        for col in 0..grid.column_count {
            let cell = frame.cell_rect(row, col);
            surface.fill_text(
                &label,
                Point::new(cell.center_x(), cell.center_y() - CELL_LABEL_RISE),
                &text_style,
            );
            let (start, end) = measure_line(cell.x, cell.width, cell.center_y());
            draw_measure_line(surface, start, end, style);
        }
    }
}

/// Endpoints of a cell's measurement line: 70% of the cell width, centered,
/// slightly below the cell's vertical center.
pub fn measure_line(cell_x: f64, cell_width: f64, center_y: f64) -> (Point, Point) {
    let length = cell_width * MEASURE_LINE_FRACTION;
    let start_x = cell_x + (cell_width - length) / 2.0;
    let y = center_y + MEASURE_LINE_DROP;
    (Point::new(start_x, y), Point::new(start_x + length, y))
}

fn draw_measure_line<S: Surface + ?Sized>(
    surface: &mut S,
    start: Point,
    end: Point,
    style: &RenderStyle,
) {
    let band = Rect::new(
        start.x - BAND_PAD_X,
        start.y - BAND_HALF_HEIGHT,
        (end.x - start.x) + 2.0 * BAND_PAD_X,
        2.0 * BAND_HALF_HEIGHT,
    );
    surface.fill_rect(band, &style.band_color);
    surface.stroke_line(start, end, &style.measure_line_color, style.line_width);
    draw_arrow(surface, start, ArrowEnd::Left, style);
    draw_arrow(surface, end, ArrowEnd::Right, style);
}

/// Chevron whose tip sits on `tip`, opening back along the measurement line.
pub fn arrow_points(tip: Point, end: ArrowEnd) -> [Point; 3] {
    let dx = match end {
        ArrowEnd::Left => ARROW_LENGTH,
        ArrowEnd::Right => -ARROW_LENGTH,
    };
    [
        Point::new(tip.x + dx, tip.y - ARROW_HALF_SPAN),
        tip,
        Point::new(tip.x + dx, tip.y + ARROW_HALF_SPAN),
    ]
}

/// Draw one arrowhead at the end of a measurement line.
pub fn draw_arrow<S: Surface + ?Sized>(
    surface: &mut S,
    tip: Point,
    end: ArrowEnd,
    style: &RenderStyle,
) {
    surface.stroke_polyline(
        &arrow_points(tip, end),
        &style.measure_line_color,
        style.line_width,
    );
}

/// Label every row with its height, right-aligned left of the grid.
pub fn draw_row_height_labels<S: Surface + ?Sized>(
    surface: &mut S,
    frame: &Frame,
    style: &RenderStyle,
) {
    let grid = &frame.grid;
    let label = format_cm(grid.row_height_cm);
    let text_width = surface.measure_text(&label, &style.row_font);
    let text_style = TextStyle {
        font: &style.row_font,
        color: &style.label_color,
        align: TextAlign::Right,
        baseline: TextBaseline::Middle,
    };

    for row in 0..grid.row_count {
        let y = frame.row_center_y(row);
        let band = Rect::new(
            frame.left() - ROW_BAND_GAP - text_width - ROW_BAND_PAD,
            y - ROW_BAND_HEIGHT / 2.0,
            text_width + ROW_BAND_PAD,
            ROW_BAND_HEIGHT,
        );
        surface.fill_rect(band, &style.band_color);
        surface.fill_text(
            &label,
            Point::new(frame.left() - ROW_LABEL_GAP, y),
            &text_style,
        );
    }
}
