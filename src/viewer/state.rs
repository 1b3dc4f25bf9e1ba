//! Host-facing viewer state, independent of any widget toolkit.
//!
//! The host delivers one [`ViewerEvent`] at a time; each is applied to the
//! single current [`Parameters`] value, the row count is re-clamped, and a
//! [`ControlReadout`] is handed back so the host can update its controls.

use serde::Serialize;

use crate::config::VisualizerConfig;
use crate::error::Result;
use crate::layout::{compute_row_bounds, Frame, Parameters, RowBounds};

/// A parameter change or surface resize
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerEvent {
    /// New panel width in centimeters
    Width(f64),
    /// New panel height in centimeters
    Height(f64),
    /// New requested row count
    Rows(u32),
    /// New density (0..=100)
    Density(u32),
    /// New logical surface size in pixels
    Resize { width: f64, height: f64 },
}

/// Which of the four host controls produced a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Width,
    Height,
    Rows,
    Density,
}

impl ViewerEvent {
    /// Build an event from a raw numeric control value.
    ///
    /// Returns `None` for values a range input can yield while being edited
    /// (empty field, NaN). Counts are rounded and negative counts become 0;
    /// width and height pass through for [`ViewerState::apply`] to validate.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_control(kind: ControlKind, value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let count = || {
            let rounded = value.round().max(0.0);
            if rounded >= f64::from(u32::MAX) {
                u32::MAX
            } else {
                rounded as u32
            }
        };
        Some(match kind {
            ControlKind::Width => Self::Width(value),
            ControlKind::Height => Self::Height(value),
            ControlKind::Rows => Self::Rows(count()),
            ControlKind::Density => Self::Density(count()),
        })
    }
}

/// Values the host shows back to the user after every event
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlReadout {
    pub width_cm: f64,
    pub height_cm: f64,
    /// Effective (clamped) row count
    pub row_count: u32,
    pub density: u32,
    /// Row-count control minimum
    pub min_rows: u32,
    /// Row-count control maximum
    pub max_rows: u32,
}

/// Current parameters, config and surface size
#[derive(Debug, Clone)]
pub struct ViewerState {
    params: Parameters,
    config: VisualizerConfig,
    surface_width: f64,
    surface_height: f64,
}

impl ViewerState {
    /// Start from `params`; the row count is clamped immediately.
    pub fn new(
        params: Parameters,
        config: VisualizerConfig,
        surface_width: f64,
        surface_height: f64,
    ) -> Self {
        let (params, _) = params.clamp_rows(&config.constraints);
        Self {
            params,
            config,
            surface_width: surface_width.max(0.0),
            surface_height: surface_height.max(0.0),
        }
    }

    /// Apply one event and return the updated readout.
    ///
    /// On error the state is left unchanged.
    ///
    /// # Errors
    /// Returns [`crate::PanelGridError::InvalidParameter`] for a non-positive
    /// or non-finite width or height.
    pub fn apply(&mut self, event: ViewerEvent) -> Result<ControlReadout> {
        let next = match event {
            ViewerEvent::Width(w) => self.params.with_width_cm(w)?,
            ViewerEvent::Height(h) => self.params.with_height_cm(h)?,
            ViewerEvent::Rows(rows) => self.params.with_row_count(rows),
            ViewerEvent::Density(d) => self.params.with_density(d),
            ViewerEvent::Resize { width, height } => {
                self.surface_width = if width.is_finite() { width.max(0.0) } else { 0.0 };
                self.surface_height = if height.is_finite() { height.max(0.0) } else { 0.0 };
                log::info!(
                    "surface resized to {:.0}x{:.0}",
                    self.surface_width,
                    self.surface_height
                );
                self.params
            }
        };
        let (clamped, _) = next.clamp_rows(&self.config.constraints);
        self.params = clamped;
        Ok(self.readout())
    }

    /// Current readout for the host controls
    pub fn readout(&self) -> ControlReadout {
        let bounds = self.row_bounds();
        ControlReadout {
            width_cm: self.params.width_cm,
            height_cm: self.params.height_cm,
            row_count: self.params.row_count,
            density: self.params.density,
            min_rows: bounds.min_rows,
            max_rows: bounds.max_rows,
        }
    }

    /// Feasible row range for the current height
    pub fn row_bounds(&self) -> RowBounds {
        compute_row_bounds(self.params.height_cm, &self.config.constraints)
    }

    /// Recompute the grid and its placement from scratch
    pub fn frame(&self) -> Frame {
        Frame::compute(
            &self.params,
            &self.config.constraints,
            self.surface_width,
            self.surface_height,
        )
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// Swap in a new (already validated) config; rows are re-clamped.
    pub fn set_config(&mut self, config: VisualizerConfig) {
        let (params, _) = self.params.clamp_rows(&config.constraints);
        self.params = params;
        self.config = config;
    }

    /// Logical surface size
    pub fn surface_size(&self) -> (f64, f64) {
        (self.surface_width, self.surface_height)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn state() -> ViewerState {
        ViewerState::new(
            Parameters::new(300.0, 200.0, 5, 50).unwrap(),
            VisualizerConfig::default(),
            1000.0,
            700.0,
        )
    }

    #[test]
    fn height_change_reclamps_rows() {
        let mut s = state();
        let readout = s.apply(ViewerEvent::Height(50.0)).unwrap();
        // 50 cm allows 1..=3 rows
        assert_eq!((readout.min_rows, readout.max_rows), (1, 3));
        assert_eq!(readout.row_count, 3);
    }

    #[test]
    fn invalid_width_leaves_state_untouched() {
        let mut s = state();
        assert!(s.apply(ViewerEvent::Width(-1.0)).is_err());
        assert_eq!(s.params().width_cm, 300.0);
    }

    #[test]
    fn resize_updates_surface_only() {
        let mut s = state();
        let before = s.readout();
        let after = s
            .apply(ViewerEvent::Resize {
                width: 640.0,
                height: 480.0,
            })
            .unwrap();
        assert_eq!(before, after);
        assert_eq!(s.surface_size(), (640.0, 480.0));
    }

    #[test]
    fn control_values_become_events() {
        assert_eq!(
            ViewerEvent::from_control(ControlKind::Rows, 3.6),
            Some(ViewerEvent::Rows(4))
        );
        assert_eq!(
            ViewerEvent::from_control(ControlKind::Density, -5.0),
            Some(ViewerEvent::Density(0))
        );
        assert_eq!(
            ViewerEvent::from_control(ControlKind::Width, 120.0),
            Some(ViewerEvent::Width(120.0))
        );
        assert_eq!(ViewerEvent::from_control(ControlKind::Height, f64::NAN), None);
    }

    #[test]
    fn constructor_clamps_rows() {
        let s = ViewerState::new(
            Parameters::new(100.0, 100.0, 50, 0).unwrap(),
            VisualizerConfig::default(),
            800.0,
            600.0,
        );
        assert_eq!(s.params().row_count, 6);
    }
}
