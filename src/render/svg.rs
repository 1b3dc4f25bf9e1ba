//! SVG surface for native rendering.
//!
//! Builds a standalone SVG document from the same primitives the canvas
//! receives, so a grid can be exported without a browser.

use std::fmt::Write as _;

use super::backend::{Point, Rect, Surface, TextAlign, TextBaseline, TextStyle};
use super::recording::heuristic_text_width;
use super::style::FontSpec;

/// Surface that accumulates SVG elements
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    body: String,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    /// Complete SVG document for everything drawn since the last clear
    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(self.body.len() + 256);
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = fmt_num(self.width),
            h = fmt_num(self.height),
        );
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

/// Compact number formatting (no trailing zeros beyond two decimals)
fn fmt_num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

impl Surface for SvgSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) {
        self.body.clear();
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: &str, line_width: f64) {
        let _ = writeln!(
            self.body,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            fmt_num(from.x),
            fmt_num(from.y),
            fmt_num(to.x),
            fmt_num(to.y),
            escape_xml(color),
            fmt_num(line_width),
        );
    }

    fn stroke_polyline(&mut self, points: &[Point], color: &str, line_width: f64) {
        if points.is_empty() {
            return;
        }
        let coords: Vec<String> = points
            .iter()
            .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
            .collect();
        let _ = writeln!(
            self.body,
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            coords.join(" "),
            escape_xml(color),
            fmt_num(line_width),
        );
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        let _ = writeln!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            fmt_num(rect.x),
            fmt_num(rect.y),
            fmt_num(rect.width.max(0.0)),
            fmt_num(rect.height.max(0.0)),
            escape_xml(color),
        );
    }

    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle<'_>) {
        let anchor = match style.align {
            TextAlign::Left => "start",
            TextAlign::Center => "middle",
            TextAlign::Right => "end",
        };
        let baseline = match style.baseline {
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Middle => "middle",
        };
        let _ = writeln!(
            self.body,
            r#"<text x="{}" y="{}" font-family="{}" font-size="{}" fill="{}" text-anchor="{}" dominant-baseline="{}">{}</text>"#,
            fmt_num(at.x),
            fmt_num(at.y),
            escape_xml(&style.font.family),
            fmt_num(style.font.size_px),
            escape_xml(style.color),
            anchor,
            baseline,
            escape_xml(text),
        );
    }

    fn measure_text(&mut self, text: &str, font: &FontSpec) -> f64 {
        heuristic_text_width(text, font)
    }
}
