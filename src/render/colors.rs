//! Color handling for grid rendering.
//!
//! Colors travel as CSS color strings, which Canvas 2D and SVG both accept
//! directly. Config-supplied colors are normalized through [`parse_color`].

/// A CSS color string (e.g., "#FF0000", "rgba(255, 0, 0, 0.5)")
pub type CssColor = String;

/// RGB color with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse from a hex string (with or without #).
    /// Returns None if the format is invalid.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Convert to CSS hex string (#RRGGBB).
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Parse a color string and normalize it to CSS format.
///
/// Supports formats:
/// - "#RRGGBB" / "RRGGBB" (normalized to upper-case "#RRGGBB")
/// - "rgb(r, g, b)"
/// - "rgba(r, g, b, a)" with `a` in 0.0..=1.0
pub fn parse_color(s: &str) -> Option<CssColor> {
    let s = s.trim();

    if let Some(inner) = s.strip_prefix("rgba(") {
        let inner = inner.strip_suffix(')')?;
        let mut parts = inner.split(',').map(str::trim);
        let r: u8 = parts.next()?.parse().ok()?;
        let g: u8 = parts.next()?.parse().ok()?;
        let b: u8 = parts.next()?.parse().ok()?;
        let a: f64 = parts.next()?.parse().ok()?;
        if parts.next().is_some() || !(0.0..=1.0).contains(&a) {
            return None;
        }
        Some(format!("rgba({r}, {g}, {b}, {a})"))
    } else if let Some(inner) = s.strip_prefix("rgb(") {
        let inner = inner.strip_suffix(')')?;
        let mut parts = inner.split(',').map(str::trim);
        let r: u8 = parts.next()?.parse().ok()?;
        let g: u8 = parts.next()?.parse().ok()?;
        let b: u8 = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Rgb::new(r, g, b).to_hex())
    } else {
        Rgb::from_hex(s).map(Rgb::to_hex)
    }
}

/// Default grid colors (CSS format)
pub mod palette {
    /// Grid lines (blue)
    pub const GRID_LINE: &str = "#0000FF";

    /// Label text (grey)
    pub const LABEL_TEXT: &str = "#808080";

    /// Highlight band behind measurements (yellow)
    pub const HIGHLIGHT_BAND: &str = "#FFFF00";

    /// Measurement line and arrowheads (light grey)
    pub const MEASURE_LINE: &str = "#D3D3D3";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip_normalizes_case() {
        assert_eq!(parse_color("#ff00aa").as_deref(), Some("#FF00AA"));
        assert_eq!(parse_color("00ff00").as_deref(), Some("#00FF00"));
    }

    #[test]
    fn rgb_becomes_hex() {
        assert_eq!(parse_color("rgb(255, 255, 0)").as_deref(), Some("#FFFF00"));
    }

    #[test]
    fn rgba_is_kept() {
        assert_eq!(
            parse_color("rgba(0,0,255,0.5)").as_deref(),
            Some("rgba(0, 0, 255, 0.5)")
        );
        assert!(parse_color("rgba(0,0,255,2)").is_none());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_color("blue").is_none());
        assert!(parse_color("#12345").is_none());
        assert!(parse_color("rgb(300, 0, 0)").is_none());
    }

    #[test]
    fn palette_is_valid() {
        for c in [
            palette::GRID_LINE,
            palette::LABEL_TEXT,
            palette::HIGHLIGHT_BAND,
            palette::MEASURE_LINE,
        ] {
            assert_eq!(parse_color(c).as_deref(), Some(c));
        }
    }
}
