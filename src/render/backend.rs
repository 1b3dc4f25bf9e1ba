//! Drawing surface trait for pluggable rendering implementations.
//!
//! This module defines the `Surface` trait that abstracts the handful of 2D
//! primitives the grid painter needs, allowing different surfaces (Canvas 2D,
//! SVG, an in-memory recorder for tests) to be used interchangeably.

use super::style::FontSpec;

/// A point in surface pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in surface pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether the point lies inside (edges inclusive)
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }
}

/// Horizontal anchor of text relative to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Canvas `textAlign` keyword
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Vertical anchor of text relative to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Alphabetic,
    Middle,
}

impl TextBaseline {
    /// Canvas `textBaseline` keyword
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Alphabetic => "alphabetic",
            Self::Middle => "middle",
        }
    }
}

/// Everything needed to place a run of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle<'a> {
    pub font: &'a FontSpec,
    pub color: &'a str,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

/// Trait for drawing surfaces
///
/// Implementations own the pixel buffer (or its stand-in) for the duration of
/// a redraw. Drawing never fails; a surface that cannot draw simply ignores
/// the call. Coordinates and sizes are logical pixels.
pub trait Surface {
    /// Drawable width
    fn width(&self) -> f64;

    /// Drawable height
    fn height(&self) -> f64;

    /// Erase the entire drawable area
    fn clear(&mut self);

    /// Draw a straight line
    fn stroke_line(&mut self, from: Point, to: Point, color: &str, line_width: f64);

    /// Draw connected line segments through `points` (open path)
    fn stroke_polyline(&mut self, points: &[Point], color: &str, line_width: f64);

    /// Fill a rectangle
    fn fill_rect(&mut self, rect: Rect, color: &str);

    /// Draw text anchored at `at`
    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle<'_>);

    /// Advance width of `text` in `font`
    fn measure_text(&mut self, text: &str, font: &FontSpec) -> f64;
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges_and_contains() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert!(r.contains(Point::new(10.0, 20.0)));
        assert!(r.contains(Point::new(40.0, 60.0)));
        assert!(!r.contains(Point::new(41.0, 30.0)));
    }

    #[test]
    fn css_keywords() {
        assert_eq!(TextAlign::Right.as_css(), "right");
        assert_eq!(TextBaseline::Middle.as_css(), "middle");
    }
}
