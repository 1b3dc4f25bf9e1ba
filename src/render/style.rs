//! Visual styling for the grid drawing.

use serde::{Deserialize, Serialize};

use super::colors::{palette, parse_color};
use crate::error::{PanelGridError, Result};

/// A font as size + family, rendered to the CSS shorthand (`"10px Arial"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSpec {
    pub size_px: f64,
    pub family: String,
}

impl FontSpec {
    pub fn new(size_px: f64, family: impl Into<String>) -> Self {
        Self {
            size_px,
            family: family.into(),
        }
    }

    /// CSS `font` shorthand
    pub fn css(&self) -> String {
        format!("{}px {}", self.size_px, self.family)
    }
}

/// Colors, fonts and stroke width used by the painter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderStyle {
    /// Row and column separators
    pub grid_line_color: String,
    /// Cell-width and row-height label text
    pub label_color: String,
    /// Background band behind measurements
    pub band_color: String,
    /// Measurement line and its arrowheads
    pub measure_line_color: String,
    /// Font for the per-cell width labels
    pub cell_font: FontSpec,
    /// Font for the per-row height labels
    pub row_font: FontSpec,
    /// Stroke width for all lines
    pub line_width: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            grid_line_color: palette::GRID_LINE.to_string(),
            label_color: palette::LABEL_TEXT.to_string(),
            band_color: palette::HIGHLIGHT_BAND.to_string(),
            measure_line_color: palette::MEASURE_LINE.to_string(),
            cell_font: FontSpec::new(10.0, "Arial"),
            row_font: FontSpec::new(12.0, "Arial"),
            line_width: 1.0,
        }
    }
}

impl RenderStyle {
    /// Check and normalize colors, font sizes and stroke width.
    ///
    /// # Errors
    /// Returns [`PanelGridError::InvalidConfig`] naming the first bad field.
    pub fn validated(mut self) -> Result<Self> {
        for (name, color) in [
            ("gridLineColor", &mut self.grid_line_color),
            ("labelColor", &mut self.label_color),
            ("bandColor", &mut self.band_color),
            ("measureLineColor", &mut self.measure_line_color),
        ] {
            *color = parse_color(color).ok_or_else(|| {
                PanelGridError::InvalidConfig(format!("{name} is not a valid color: {color:?}"))
            })?;
        }
        for (name, font) in [("cellFont", &self.cell_font), ("rowFont", &self.row_font)] {
            if !font.size_px.is_finite() || font.size_px <= 0.0 {
                return Err(PanelGridError::InvalidConfig(format!(
                    "{name} size must be positive, got {}",
                    font.size_px
                )));
            }
            if font.family.trim().is_empty() {
                return Err(PanelGridError::InvalidConfig(format!(
                    "{name} family must not be empty"
                )));
            }
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(PanelGridError::InvalidConfig(format!(
                "lineWidth must be positive, got {}",
                self.line_width
            )));
        }
        Ok(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn font_css_shorthand() {
        assert_eq!(FontSpec::new(10.0, "Arial").css(), "10px Arial");
        assert_eq!(FontSpec::new(10.5, "monospace").css(), "10.5px monospace");
    }

    #[test]
    fn default_style_validates() {
        let style = RenderStyle::default().validated().unwrap();
        assert_eq!(style, RenderStyle::default());
    }

    #[test]
    fn validated_normalizes_colors() {
        let style = RenderStyle {
            band_color: "rgb(255, 255, 0)".to_string(),
            ..RenderStyle::default()
        }
        .validated()
        .unwrap();
        assert_eq!(style.band_color, "#FFFF00");
    }

    #[test]
    fn validated_rejects_bad_fields() {
        let bad_color = RenderStyle {
            label_color: "not-a-color".to_string(),
            ..RenderStyle::default()
        };
        assert!(bad_color.validated().is_err());

        let bad_font = RenderStyle {
            row_font: FontSpec::new(0.0, "Arial"),
            ..RenderStyle::default()
        };
        assert!(bad_font.validated().is_err());

        let bad_width = RenderStyle {
            line_width: -1.0,
            ..RenderStyle::default()
        };
        assert!(bad_width.validated().is_err());
    }
}
