//! Structured error types for panelgrid.
//!
//! Layout and drawing are infallible; errors only come from the edges:
//! parameter validation, config parsing, canvas setup and CLI file I/O.

/// All errors that can occur at the panelgrid boundaries.
#[derive(Debug, thiserror::Error)]
pub enum PanelGridError {
    /// A panel parameter is out of its valid domain.
    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter {
        /// Parameter name as shown to the host (e.g. `widthCm`).
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Constraint or style configuration failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Drawing surface could not be set up.
    #[error("Render error: {0}")]
    Render(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PanelGridError>;

impl From<String> for PanelGridError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for PanelGridError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<PanelGridError> for wasm_bindgen::JsValue {
    fn from(e: PanelGridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
