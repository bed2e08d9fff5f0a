//! Widget layer: keypad, render surface and notification plumbing
//!
//! The editor knows nothing about presentation. [`CalculatorWidget`] feeds it
//! events and pushes the resulting state to a [`RenderSurface`], routing
//! failures to a [`NotificationSink`].

#[cfg(feature = "wasm")]
mod browser;
mod calculator;
mod dom;
mod keypad;

use std::time::Duration;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use calculator::CalculatorWidget;
pub use dom::{
    DomElement, DomEvent, MockDom, Notice, ACTIVE_CLASS, EXPRESSION_ID, SNACKBAR_ID, SUMMARY_ID,
};
pub use keypad::{Keypad, KeypadAction, KeypadButtonDef, BACKSPACE_LABEL};

/// Displays the summary line and the live expression
pub trait RenderSurface {
    /// Redraws both lines; `summary` is `None` when there is nothing to show
    fn render(&mut self, summary: Option<&str>, expression: &str);

    /// Marks the element matching a held key, or clears the mark on `None`
    fn highlight(&mut self, _element_id: Option<&str>) {}
}

/// Shows transient, auto-dismissing messages
pub trait NotificationSink {
    /// Shows `message` for `duration`
    fn notify(&mut self, message: &str, duration: Duration);
}
