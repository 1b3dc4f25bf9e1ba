//! DOM wiring for the host page: four range inputs, optional numeric
//! readouts, and window-driven canvas sizing.
//!
//! Every handler runs to completion before the next: apply the event, sync
//! the controls, repaint.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlElement, HtmlInputElement};

use super::{ControlKind, ControlReadout, GridView, SharedState, ViewerEvent};

/// An event listener that stays registered while this value lives
pub(crate) struct Listener {
    target: EventTarget,
    event_type: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn register(
        target: EventTarget,
        event_type: &'static str,
        closure: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, JsValue> {
        target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target,
            event_type,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if self
            .target
            .remove_event_listener_with_callback(
                self.event_type,
                self.closure.as_ref().unchecked_ref(),
            )
            .is_err()
        {
            log::warn!("failed to remove {} listener", self.event_type);
        }
    }
}

/// The four range inputs driving the visualizer
pub(crate) struct ControlInputs {
    pub(crate) width: HtmlInputElement,
    pub(crate) height: HtmlInputElement,
    pub(crate) rows: HtmlInputElement,
    pub(crate) density: HtmlInputElement,
}

impl ControlInputs {
    fn iter(&self) -> [(ControlKind, &HtmlInputElement); 4] {
        [
            (ControlKind::Width, &self.width),
            (ControlKind::Height, &self.height),
            (ControlKind::Rows, &self.rows),
            (ControlKind::Density, &self.density),
        ]
    }
}

/// Elements whose text shows the current values
#[derive(Default)]
pub(crate) struct ReadoutElements {
    pub(crate) width: Option<HtmlElement>,
    pub(crate) height: Option<HtmlElement>,
    pub(crate) rows: Option<HtmlElement>,
    pub(crate) density: Option<HtmlElement>,
}

fn set_text(element: Option<&HtmlElement>, text: &str) {
    if let Some(element) = element {
        element.set_text_content(Some(text));
    }
}

impl SharedState {
    /// Push the readout into the row input's range and the readout elements
    pub(crate) fn sync_controls(&self, readout: &ControlReadout) {
        if let Some(controls) = &self.controls {
            controls.rows.set_min(&readout.min_rows.to_string());
            controls.rows.set_max(&readout.max_rows.to_string());
            controls.rows.set_value(&readout.row_count.to_string());
        }
        set_text(self.readouts.width.as_ref(), &readout.width_cm.to_string());
        set_text(self.readouts.height.as_ref(), &readout.height_cm.to_string());
        set_text(self.readouts.rows.as_ref(), &readout.row_count.to_string());
        set_text(self.readouts.density.as_ref(), &readout.density.to_string());
    }

    fn apply_control(&mut self, kind: ControlKind, input: &HtmlInputElement) {
        let Some(event) = ViewerEvent::from_control(kind, input.value_as_number()) else {
            return;
        };
        if let Err(e) = self.handle(event) {
            log::warn!("ignored {kind:?} input: {e}");
        }
    }
}

/// Physical canvas size for a fraction of the window's inner size
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn window_canvas_size(fraction: f64) -> Option<(u32, u32, f32)> {
    let window = web_sys::window()?;
    let inner_width = window.inner_width().ok()?.as_f64()?;
    let inner_height = window.inner_height().ok()?.as_f64()?;
    let dpr = window.device_pixel_ratio();
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let physical = |css: f64| (css * fraction * dpr).round().clamp(1.0, f64::from(u32::MAX)) as u32;
    Some((physical(inner_width), physical(inner_height), dpr as f32))
}

#[wasm_bindgen]
impl GridView {
    /// Drive the visualizer from four range inputs.
    ///
    /// The inputs' current values are applied immediately, then each `input`
    /// event applies its own value. The rows input's min/max/value follow the
    /// clamped row bounds. Calling again replaces the previous bindings.
    #[wasm_bindgen(js_name = "bindControls")]
    pub fn bind_controls(
        &mut self,
        width: HtmlInputElement,
        height: HtmlInputElement,
        rows: HtmlInputElement,
        density: HtmlInputElement,
    ) -> Result<JsValue, JsValue> {
        self.input_listeners.clear();

        let controls = ControlInputs {
            width,
            height,
            rows,
            density,
        };
        let mut listeners = Vec::with_capacity(4);
        for (kind, input) in controls.iter() {
            let state = Rc::clone(&self.state);
            let source = input.clone();
            let closure = Closure::wrap(Box::new(move |_event: Event| {
                state.borrow_mut().apply_control(kind, &source);
            }) as Box<dyn FnMut(Event)>);
            listeners.push(Listener::register(input.clone().into(), "input", closure)?);
        }
        self.input_listeners = listeners;

        let readout = {
            let mut s = self.state.borrow_mut();
            for (kind, input) in controls.iter() {
                s.apply_control(kind, input);
            }
            s.controls = Some(controls);
            let readout = s.viewer.readout();
            s.sync_controls(&readout);
            readout
        };
        super::to_js(&readout)
    }

    /// Show current values in these elements (any may be omitted)
    #[wasm_bindgen(js_name = "bindReadouts")]
    pub fn bind_readouts(
        &mut self,
        width: Option<HtmlElement>,
        height: Option<HtmlElement>,
        rows: Option<HtmlElement>,
        density: Option<HtmlElement>,
    ) {
        let mut s = self.state.borrow_mut();
        s.readouts = ReadoutElements {
            width,
            height,
            rows,
            density,
        };
        let readout = s.viewer.readout();
        s.sync_controls(&readout);
    }

    /// Keep the canvas at `fraction` of the window's inner size, repainting
    /// on every window resize. Sizes the canvas once right away.
    #[wasm_bindgen(js_name = "bindWindowResize")]
    pub fn bind_window_resize(&mut self, fraction: f64) -> Result<(), JsValue> {
        if !(fraction.is_finite() && fraction > 0.0) {
            return Err(JsValue::from_str(&format!(
                "Invalid resize fraction: {fraction}"
            )));
        }
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        self.resize_listener = None;

        let fit = {
            let state = Rc::clone(&self.state);
            move || {
                if let Some((w, h, dpr)) = window_canvas_size(fraction) {
                    state.borrow_mut().resize_canvas(w, h, dpr);
                }
            }
        };
        fit();
        let closure = Closure::wrap(Box::new(move |_event: Event| fit()) as Box<dyn FnMut(Event)>);
        self.resize_listener = Some(Listener::register(window.into(), "resize", closure)?);
        Ok(())
    }
}
