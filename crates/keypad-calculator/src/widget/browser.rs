//! Browser WASM bindings for the calculator widget
//!
//! Note: this module is already conditionally compiled via
//! `#[cfg(feature = "wasm")]` in mod.rs

use std::time::Duration;

use wasm_bindgen::prelude::*;
use web_sys::console;

use super::calculator::CalculatorWidget;
use super::{NotificationSink, RenderSurface};
use crate::config::WidgetConfig;
use crate::core::evaluator::FastEvaluator;
use crate::core::symbol::format_symbols;

/// Latest rendered state, read back by JavaScript after each call
#[derive(Debug, Default)]
struct BrowserSurface {
    summary: Option<String>,
    expression: String,
    active_button: Option<String>,
    pending_notice: Option<(String, Duration)>,
}

impl RenderSurface for BrowserSurface {
    fn render(&mut self, summary: Option<&str>, expression: &str) {
        self.summary = summary.map(str::to_string);
        self.expression = expression.to_string();
    }

    fn highlight(&mut self, element_id: Option<&str>) {
        self.active_button = element_id.map(str::to_string);
    }
}

impl NotificationSink for BrowserSurface {
    fn notify(&mut self, message: &str, duration: Duration) {
        console::warn_1(&message.into());
        self.pending_notice = Some((message.to_string(), duration));
    }
}

/// Browser Calculator - the main WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    widget: CalculatorWidget<BrowserSurface, FastEvaluator>,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Create a new browser calculator
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();

        Self {
            widget: CalculatorWidget::with_surface(BrowserSurface::default(), FastEvaluator::new()),
        }
    }

    /// Create a calculator from a JSON configuration
    pub fn with_config_json(json: &str) -> Result<BrowserCalculator, JsValue> {
        let config =
            WidgetConfig::from_json_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let mut calc = Self::new();
        calc.widget = calc.widget.with_config(config);
        Ok(calc)
    }

    /// The live expression (ASCII operators)
    #[wasm_bindgen(getter)]
    pub fn expression(&self) -> String {
        self.widget.surface().expression.clone()
    }

    /// The live expression with display glyphs
    #[wasm_bindgen(getter)]
    pub fn display_expression(&self) -> String {
        format_symbols(&self.widget.surface().expression)
    }

    /// The summary line, if any
    #[wasm_bindgen(getter)]
    pub fn summary(&self) -> Option<String> {
        self.widget.surface().summary.clone()
    }

    /// Id of the button matching the key currently held
    #[wasm_bindgen(getter)]
    pub fn active_button(&self) -> Option<String> {
        self.widget.surface().active_button.clone()
    }

    /// Handle a keypad button click by element ID
    pub fn press_button(&mut self, button_id: &str) {
        let _ = self.widget.click(button_id);
    }

    /// Handle a keydown event
    pub fn key_down(&mut self, key: &str, repeat: bool) {
        let event = if repeat {
            super::DomEvent::key_repeat(key)
        } else {
            super::DomEvent::key_down(key)
        };
        let _ = self.widget.dispatch(event);
    }

    /// Handle a keyup event
    pub fn key_up(&mut self, key: &str) {
        let _ = self.widget.dispatch(super::DomEvent::key_up(key));
    }

    /// Takes the pending notice message, if any
    pub fn take_notification(&mut self) -> Option<String> {
        self.take_notice().map(|(message, _)| message)
    }

    /// Duration of the pending notice in milliseconds, if any
    pub fn notification_duration_ms(&self) -> Option<f64> {
        self.widget
            .surface()
            .pending_notice
            .as_ref()
            .map(|(_, duration)| duration.as_millis() as f64)
    }
}

impl BrowserCalculator {
    fn take_notice(&mut self) -> Option<(String, Duration)> {
        self.widget.surface_mut().pending_notice.take()
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize the calculator in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Keypad calculator initialized".into());
}
