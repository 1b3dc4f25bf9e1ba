//! panelgrid - interactive panel grid visualizer for the web
//!
//! Divides a physical rectangular panel (width and height in centimeters)
//! into a grid of equal cells and draws it annotated on a Canvas 2D surface:
//! - Row count clamped to keep every row between the min and max row height
//! - Column count interpolated from a 0..=100 density, then repaired so every
//!   column stays between the min and max cell width
//! - Grid anchored to the bottom edge of the surface, centered horizontally
//! - Per-cell width labels with measurement arrows, per-row height labels
//!
//! The layout math is pure and target-independent; drawing goes through the
//! [`render::Surface`] trait (Canvas 2D in the browser, SVG or a recording
//! surface natively).
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridView } from 'panelgrid';
//! await init();
//! const view = new GridView(canvas, window.devicePixelRatio);
//! view.bindControls(widthSlider, heightSlider, rowsSlider, densitySlider);
//! view.bindReadouts(widthValue, heightValue, rowsValue, densityValue);
//! view.bindWindowResize(0.8);
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod render;
pub mod viewer;

use wasm_bindgen::prelude::*;

// Re-export the main viewer struct
pub use viewer::{ControlReadout, GridView, ViewerEvent, ViewerState};

pub use config::VisualizerConfig;
pub use error::{PanelGridError, Result};
pub use layout::{Frame, Grid, GridConstraints, Parameters, Placement, RowBounds};

/// Compute the grid for the given parameters with default constraints and
/// return it as a JS object.
///
/// The row count is clamped to the feasible range first; the result carries
/// the bounds used.
///
/// # Errors
/// Returns an error for a non-positive or non-finite width or height.
#[wasm_bindgen(js_name = "computeGrid")]
pub fn compute_grid_js(
    width_cm: f64,
    height_cm: f64,
    row_count: u32,
    density: u32,
) -> std::result::Result<JsValue, JsValue> {
    let params = Parameters::new(width_cm, height_cm, row_count, density)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let grid = Grid::compute(&params, &GridConstraints::default());

    serde_wasm_bindgen::to_value(&grid)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Install the browser console logger (`"error"` .. `"trace"`, `"off"`).
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = "initLogging")]
pub fn init_logging(level: &str) {
    logging::init(logging::parse_level(level));
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
