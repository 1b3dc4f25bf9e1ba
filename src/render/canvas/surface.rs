//! Canvas 2D surface.
//!
//! Implements the `Surface` trait using the HTML Canvas 2D API via web-sys.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{PanelGridError, Result};
use crate::render::backend::{Point, Rect, Surface, TextStyle};
use crate::render::style::FontSpec;

/// Canvas 2D surface backed by an `HtmlCanvasElement`
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    /// Logical (CSS pixel) width
    width: f64,
    /// Logical (CSS pixel) height
    height: f64,
    dpr: f64,
}

impl CanvasSurface {
    /// Create a new surface from an HtmlCanvasElement
    ///
    /// # Errors
    /// Returns [`PanelGridError::Render`] if no 2D context can be obtained.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| PanelGridError::Render("Failed to get 2d context".to_string()))?
            .ok_or_else(|| PanelGridError::Render("No 2d context available".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| {
                PanelGridError::Render("Failed to cast to CanvasRenderingContext2d".to_string())
            })?;

        let width = f64::from(canvas.width());
        let height = f64::from(canvas.height());

        Ok(Self {
            canvas,
            ctx,
            width,
            height,
            dpr: 1.0,
        })
    }

    /// Resize the backing buffer (physical pixels) and rescale for `dpr`.
    ///
    /// Drawing afterwards uses logical coordinates.
    pub fn resize(&mut self, physical_width: u32, physical_height: u32, dpr: f32) {
        let dpr = if dpr.is_finite() && dpr > 0.0 {
            f64::from(dpr)
        } else {
            1.0
        };
        self.dpr = dpr;
        self.width = f64::from(physical_width) / dpr;
        self.height = f64::from(physical_height) / dpr;

        // Setting the buffer size resets the context state, transform included
        self.canvas.set_width(physical_width);
        self.canvas.set_height(physical_height);
        if self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0).is_err() {
            log::warn!("failed to apply dpr {dpr} transform");
        }

        log::info!(
            "canvas resized to {}x{} px (dpr {})",
            physical_width,
            physical_height,
            dpr
        );
    }

    /// Set the CSS dimensions of the canvas element (logical pixels).
    pub fn set_canvas_css_size(&self, css_w: f64, css_h: f64) {
        let style = self.canvas.style();
        for (name, value) in [("width", css_w), ("height", css_h)] {
            if style.set_property(name, &format!("{value}px")).is_err() {
                log::warn!("failed to set canvas css {name}");
            }
        }
    }

    /// Device pixel ratio applied to the context
    pub fn dpr(&self) -> f64 {
        self.dpr
    }

    /// The underlying canvas element
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: &str, line_width: f64) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width);
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn stroke_polyline(&mut self, points: &[Point], color: &str, line_width: f64) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width);
        self.ctx.move_to(first.x, first.y);
        for p in rest {
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.stroke();
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle<'_>) {
        self.ctx.set_font(&style.font.css());
        self.ctx.set_text_align(style.align.as_css());
        self.ctx.set_text_baseline(style.baseline.as_css());
        self.ctx.set_fill_style_str(style.color);
        let _ = self.ctx.fill_text(text, at.x, at.y);
    }

    fn measure_text(&mut self, text: &str, font: &FontSpec) -> f64 {
        self.ctx.set_font(&font.css());
        self.ctx
            .measure_text(text)
            .map(|m| m.width())
            .unwrap_or_else(|_| crate::render::recording::heuristic_text_width(text, font))
    }
}
