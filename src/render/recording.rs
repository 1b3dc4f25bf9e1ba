//! In-memory surface that records draw calls.
//!
//! Used for headless tests and native hosts: the recorded commands can be
//! inspected directly or replayed onto another surface.

use super::backend::{Point, Rect, Surface, TextAlign, TextBaseline, TextStyle};
use super::style::FontSpec;

/// Average glyph advance as a fraction of the font size
const HEURISTIC_GLYPH_WIDTH: f64 = 0.6;

/// One recorded drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Line {
        from: Point,
        to: Point,
        color: String,
        line_width: f64,
    },
    Polyline {
        points: Vec<Point>,
        color: String,
        line_width: f64,
    },
    FillRect {
        rect: Rect,
        color: String,
    },
    Text {
        text: String,
        at: Point,
        font: FontSpec,
        color: String,
        align: TextAlign,
        baseline: TextBaseline,
    },
}

/// Rough text width for surfaces without real font metrics.
pub fn heuristic_text_width(text: &str, font: &FontSpec) -> f64 {
    let glyphs = text.chars().count();
    #[allow(clippy::cast_precision_loss)]
    let glyphs = glyphs as f64;
    HEURISTIC_GLYPH_WIDTH * font.size_px * glyphs
}

/// Surface that stores every call in order
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Change the surface size (keeps recorded commands)
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Commands recorded since the last [`Surface::clear`]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, leaving the surface empty
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// All horizontal/vertical lines drawn in `color`
    pub fn lines_in(&self, color: &str) -> Vec<(Point, Point)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Line { from, to, color: c, .. } if c == color => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    /// All text runs, in draw order
    pub fn texts(&self) -> Vec<(&str, Point)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, at, .. } => Some((text.as_str(), *at)),
                _ => None,
            })
            .collect()
    }

    /// All filled rectangles, in draw order
    pub fn rects(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::FillRect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Play the recorded commands back onto another surface
    pub fn replay<S: Surface + ?Sized>(&self, target: &mut S) {
        for cmd in &self.commands {
            match cmd {
                DrawCommand::Clear => target.clear(),
                DrawCommand::Line {
                    from,
                    to,
                    color,
                    line_width,
                } => target.stroke_line(*from, *to, color, *line_width),
                DrawCommand::Polyline {
                    points,
                    color,
                    line_width,
                } => target.stroke_polyline(points, color, *line_width),
                DrawCommand::FillRect { rect, color } => target.fill_rect(*rect, color),
                DrawCommand::Text {
                    text,
                    at,
                    font,
                    color,
                    align,
                    baseline,
                } => target.fill_text(
                    text,
                    *at,
                    &TextStyle {
                        font,
                        color,
                        align: *align,
                        baseline: *baseline,
                    },
                ),
            }
        }
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: &str, line_width: f64) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color: color.to_string(),
            line_width,
        });
    }

    fn stroke_polyline(&mut self, points: &[Point], color: &str, line_width: f64) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            color: color.to_string(),
            line_width,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle<'_>) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            font: style.font.clone(),
            color: style.color.to_string(),
            align: style.align,
            baseline: style.baseline,
        });
    }

    fn measure_text(&mut self, text: &str, font: &FontSpec) -> f64 {
        heuristic_text_width(text, font)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn clear_drops_previous_commands() {
        let mut s = RecordingSurface::new(100.0, 100.0);
        s.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), "#000000");
        s.clear();
        assert_eq!(s.commands(), &[DrawCommand::Clear]);
    }

    #[test]
    fn heuristic_width_scales_with_font() {
        let font = FontSpec::new(10.0, "Arial");
        assert!((heuristic_text_width("40.0 cm", &font) - 42.0).abs() < 1e-9);
    }

    #[test]
    fn replay_copies_commands() {
        let mut a = RecordingSurface::new(10.0, 10.0);
        a.clear();
        a.stroke_line(Point::new(0.0, 0.0), Point::new(5.0, 0.0), "#0000FF", 1.0);
        let mut b = RecordingSurface::new(10.0, 10.0);
        a.replay(&mut b);
        assert_eq!(a.commands(), b.commands());
        assert_eq!(b.lines_in("#0000FF").len(), 1);
    }
}
