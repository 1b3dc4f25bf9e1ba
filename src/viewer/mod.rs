//! Main GridView struct - the primary entry point for the browser visualizer.
//!
//! This module provides the WASM-exported `GridView` struct that handles:
//! - Holding the current panel parameters and surface size
//! - Recomputing the grid and repainting the Canvas 2D surface on every change
//! - Reporting clamped row bounds back to the host controls
//!
//! DOM wiring (range inputs, readouts, window resize) lives in `controls`.

#[cfg(target_arch = "wasm32")]
mod controls;
mod state;

pub use state::{ControlKind, ControlReadout, ViewerEvent, ViewerState};

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use web_sys::HtmlCanvasElement;

use crate::config::VisualizerConfig;
use crate::error::Result;
#[cfg(not(target_arch = "wasm32"))]
use crate::layout::Frame;
use crate::layout::Parameters;
#[cfg(target_arch = "wasm32")]
use crate::render::CanvasSurface;
#[cfg(not(target_arch = "wasm32"))]
use crate::render::RecordingSurface;
use crate::render::{paint_frame, Surface};

/// State shared between the exported struct and its DOM event closures
#[cfg(target_arch = "wasm32")]
pub(crate) struct SharedState {
    pub(crate) viewer: ViewerState,
    pub(crate) surface: CanvasSurface,
    pub(crate) controls: Option<controls::ControlInputs>,
    pub(crate) readouts: controls::ReadoutElements,
}

#[cfg(target_arch = "wasm32")]
impl SharedState {
    /// Apply an event, sync the host controls, then repaint.
    ///
    /// A rejected event leaves state and image untouched.
    pub(crate) fn handle(&mut self, event: ViewerEvent) -> Result<ControlReadout> {
        let readout = self.viewer.apply(event)?;
        self.sync_controls(&readout);
        self.redraw();
        Ok(readout)
    }

    /// Resize the backing canvas (physical pixels) and repaint at the new size
    pub(crate) fn resize_canvas(&mut self, physical_width: u32, physical_height: u32, dpr: f32) {
        self.surface.resize(physical_width, physical_height, dpr);
        let (width, height) = (self.surface.width(), self.surface.height());
        self.surface.set_canvas_css_size(width, height);
        if let Err(e) = self.handle(ViewerEvent::Resize { width, height }) {
            log::error!("resize failed: {e}");
        }
    }

    pub(crate) fn redraw(&mut self) {
        let frame = self.viewer.frame();
        paint_frame(&mut self.surface, &frame, &self.viewer.config().style);
    }
}

/// The main visualizer struct exported to JavaScript
#[wasm_bindgen]
pub struct GridView {
    #[cfg(target_arch = "wasm32")]
    state: Rc<RefCell<SharedState>>,
    /// Registered `input` listeners, removed again on rebind or drop
    #[cfg(target_arch = "wasm32")]
    input_listeners: Vec<controls::Listener>,
    #[cfg(target_arch = "wasm32")]
    resize_listener: Option<controls::Listener>,

    // Non-wasm32 fields
    #[cfg(not(target_arch = "wasm32"))]
    viewer: ViewerState,
    #[cfg(not(target_arch = "wasm32"))]
    surface: RecordingSurface,
}

// ============================================================================
// WASM32 Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl GridView {
    /// Create a visualizer drawing into `canvas` with default config.
    ///
    /// The canvas's current buffer size is taken as physical pixels.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, dpr: f32) -> std::result::Result<GridView, JsValue> {
        console_error_panic_hook::set_once();
        Self::build(canvas, dpr, VisualizerConfig::default()).map_err(JsValue::from)
    }

    /// Create a visualizer with a config object (`{ constraints, style }`,
    /// every field optional).
    #[wasm_bindgen(js_name = "newWithConfig")]
    pub fn new_with_config(
        canvas: HtmlCanvasElement,
        dpr: f32,
        config: JsValue,
    ) -> std::result::Result<GridView, JsValue> {
        console_error_panic_hook::set_once();
        let config: VisualizerConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))?;
        Self::build(canvas, dpr, config.validated()?).map_err(JsValue::from)
    }

    fn build(canvas: HtmlCanvasElement, dpr: f32, config: VisualizerConfig) -> Result<GridView> {
        let physical_width = canvas.width().max(1);
        let physical_height = canvas.height().max(1);

        let mut surface = CanvasSurface::new(canvas)?;
        surface.resize(physical_width, physical_height, dpr);

        let viewer = ViewerState::new(
            Parameters::default(),
            config,
            surface.width(),
            surface.height(),
        );
        let state = Rc::new(RefCell::new(SharedState {
            viewer,
            surface,
            controls: None,
            readouts: controls::ReadoutElements::default(),
        }));
        state.borrow_mut().redraw();

        Ok(GridView {
            state,
            input_listeners: Vec::new(),
            resize_listener: None,
        })
    }

    /// Set the panel width (cm) and repaint; returns the readout.
    #[wasm_bindgen(js_name = "setWidthCm")]
    pub fn set_width_cm(&mut self, width_cm: f64) -> std::result::Result<JsValue, JsValue> {
        self.dispatch(ViewerEvent::Width(width_cm))
    }

    /// Set the panel height (cm) and repaint; returns the readout.
    #[wasm_bindgen(js_name = "setHeightCm")]
    pub fn set_height_cm(&mut self, height_cm: f64) -> std::result::Result<JsValue, JsValue> {
        self.dispatch(ViewerEvent::Height(height_cm))
    }

    /// Request a row count (clamped to the feasible range) and repaint.
    #[wasm_bindgen(js_name = "setRowCount")]
    pub fn set_row_count(&mut self, rows: u32) -> std::result::Result<JsValue, JsValue> {
        self.dispatch(ViewerEvent::Rows(rows))
    }

    /// Set the density (0..=100) and repaint.
    #[wasm_bindgen(js_name = "setDensity")]
    pub fn set_density(&mut self, density: u32) -> std::result::Result<JsValue, JsValue> {
        self.dispatch(ViewerEvent::Density(density))
    }

    /// Resize the canvas (dimensions in physical pixels) and repaint
    #[wasm_bindgen]
    pub fn resize(&mut self, physical_width: u32, physical_height: u32, dpr: f32) {
        self.state
            .borrow_mut()
            .resize_canvas(physical_width, physical_height, dpr);
    }

    /// Repaint the current state
    #[wasm_bindgen]
    pub fn render(&mut self) {
        self.state.borrow_mut().redraw();
    }

    /// Current readout (`{ widthCm, heightCm, rowCount, density, minRows, maxRows }`)
    #[wasm_bindgen]
    pub fn readout(&self) -> std::result::Result<JsValue, JsValue> {
        let readout = self.state.borrow().viewer.readout();
        to_js(&readout)
    }

    /// Current grid and placement as a JS object
    #[wasm_bindgen]
    pub fn frame(&self) -> std::result::Result<JsValue, JsValue> {
        let frame = self.state.borrow().viewer.frame();
        to_js(&frame)
    }

    fn dispatch(&mut self, event: ViewerEvent) -> std::result::Result<JsValue, JsValue> {
        let readout = self.state.borrow_mut().handle(event)?;
        to_js(&readout)
    }
}

#[cfg(target_arch = "wasm32")]
fn to_js<T: serde::Serialize>(value: &T) -> std::result::Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

// ============================================================================
// Non-WASM32 Implementation (for testing/CLI)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
impl GridView {
    /// Create a visualizer over a recording surface (logical pixels)
    pub fn new_test(width: f64, height: f64) -> Self {
        Self::with_config(width, height, VisualizerConfig::default())
    }

    /// Create a visualizer over a recording surface with `config`
    pub fn with_config(width: f64, height: f64, config: VisualizerConfig) -> Self {
        let surface = RecordingSurface::new(width, height);
        let viewer = ViewerState::new(
            Parameters::default(),
            config,
            surface.width(),
            surface.height(),
        );
        let mut view = GridView { viewer, surface };
        view.render();
        view
    }

    /// Apply an event and repaint.
    ///
    /// # Errors
    /// Returns an invalid-parameter error for a bad width or height; the
    /// previous image stays on the surface.
    pub fn handle(&mut self, event: ViewerEvent) -> Result<ControlReadout> {
        if let ViewerEvent::Resize { width, height } = event {
            self.surface.resize(width, height);
        }
        let readout = self.viewer.apply(event)?;
        self.render();
        Ok(readout)
    }

    /// # Errors
    /// Fails for a non-positive or non-finite width.
    pub fn set_width_cm(&mut self, width_cm: f64) -> Result<ControlReadout> {
        self.handle(ViewerEvent::Width(width_cm))
    }

    /// # Errors
    /// Fails for a non-positive or non-finite height.
    pub fn set_height_cm(&mut self, height_cm: f64) -> Result<ControlReadout> {
        self.handle(ViewerEvent::Height(height_cm))
    }

    /// # Errors
    /// Never fails; rows are clamped.
    pub fn set_row_count(&mut self, rows: u32) -> Result<ControlReadout> {
        self.handle(ViewerEvent::Rows(rows))
    }

    /// # Errors
    /// Never fails; density is clamped.
    pub fn set_density(&mut self, density: u32) -> Result<ControlReadout> {
        self.handle(ViewerEvent::Density(density))
    }

    /// Resize the surface (logical pixels) and repaint
    pub fn resize(&mut self, width: f64, height: f64) {
        if let Err(e) = self.handle(ViewerEvent::Resize { width, height }) {
            log::error!("resize failed: {e}");
        }
    }

    pub fn render(&mut self) {
        let frame = self.viewer.frame();
        paint_frame(&mut self.surface, &frame, &self.viewer.config().style);
    }

    pub fn readout(&self) -> ControlReadout {
        self.viewer.readout()
    }

    pub fn frame(&self) -> Frame {
        self.viewer.frame()
    }

    pub fn state(&self) -> &ViewerState {
        &self.viewer
    }

    /// The recording of the last paint
    pub fn surface(&self) -> &RecordingSurface {
        &self.surface
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::render::DrawCommand;

    #[test]
    fn construction_paints_once() {
        let view = GridView::new_test(800.0, 600.0);
        let commands = view.surface().commands();
        assert_eq!(commands.first(), Some(&DrawCommand::Clear));
        assert_eq!(
            commands
                .iter()
                .filter(|c| matches!(c, DrawCommand::Clear))
                .count(),
            1
        );
    }

    #[test]
    fn rejected_event_keeps_previous_image() {
        let mut view = GridView::new_test(800.0, 600.0);
        let before = view.surface().commands().to_vec();
        assert!(view.set_height_cm(0.0).is_err());
        assert_eq!(view.surface().commands(), before.as_slice());
    }

    #[test]
    fn resize_moves_grid_to_new_bottom() {
        let mut view = GridView::new_test(800.0, 600.0);
        view.resize(400.0, 300.0);
        let frame = view.frame();
        assert!((frame.bottom() - 300.0).abs() < 1e-9);
        assert_eq!(view.surface().width(), 400.0);
    }
}
