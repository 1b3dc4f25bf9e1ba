//! Visualizer configuration: size constraints plus drawing style.
//!
//! Every field has a default, so an empty object (`{}`) is a valid config and
//! partial configs only override what they name.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::layout::GridConstraints;
use crate::render::RenderStyle;

/// Complete configuration for a visualizer instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VisualizerConfig {
    pub constraints: GridConstraints,
    pub style: RenderStyle,
}

impl VisualizerConfig {
    /// Validate constraints and normalize style colors.
    ///
    /// # Errors
    /// Returns [`crate::PanelGridError::InvalidConfig`] for the first invalid field.
    pub fn validated(self) -> Result<Self> {
        self.constraints.validate()?;
        Ok(Self {
            constraints: self.constraints,
            style: self.style.validated()?,
        })
    }

    /// Parse and validate a JSON config.
    ///
    /// # Errors
    /// Returns a JSON error for malformed input, or an invalid-config error.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    /// Serialize to pretty JSON.
    ///
    /// # Errors
    /// Returns a JSON error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::PanelGridError;

    #[test]
    fn empty_object_is_default() {
        let config = VisualizerConfig::from_json("{}").unwrap();
        assert_eq!(config, VisualizerConfig::default());
    }

    #[test]
    fn partial_override() {
        let config = VisualizerConfig::from_json(
            r##"{"constraints": {"pixelsPerCm": 4.0}, "style": {"gridLineColor": "#ff0000"}}"##,
        )
        .unwrap();
        assert_eq!(config.constraints.pixels_per_cm, 4.0);
        assert_eq!(config.constraints.max_cell_width_cm, 80.0);
        assert_eq!(config.style.grid_line_color, "#FF0000");
        assert_eq!(config.style.label_color, "#808080");
    }

    #[test]
    fn invalid_values_rejected() {
        let err = VisualizerConfig::from_json(r#"{"constraints": {"minRowHeightCm": 100}}"#)
            .unwrap_err();
        assert!(matches!(err, PanelGridError::InvalidConfig(_)));

        let err = VisualizerConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, PanelGridError::Json(_)));
    }

    #[test]
    fn json_round_trip() {
        let config = VisualizerConfig::default();
        let json = config.to_json().unwrap();
        assert_eq!(VisualizerConfig::from_json(&json).unwrap(), config);
    }
}
