//! Keypad Calculator - expression editing for a button-and-keyboard calculator
//!
//! The crate is split in three layers:
//!
//! - [`core`]: the expression editor state machine and its evaluator seam
//! - [`widget`]: keypad layout, render surfaces, notifications and the
//!   optional browser binding (`wasm` feature)
//! - [`driver`]: one set of behavioral checks runnable against any front end
//!
//! # Example
//!
//! ```rust
//! use keypad_calculator::prelude::*;
//!
//! let mut editor = ExpressionEditor::new();
//! for key in ["4", "2", "*", "(", "3", "+", "7", ")", "="] {
//!     editor.handle_key(key).unwrap();
//! }
//! assert_eq!(editor.expression(), "420");
//! assert_eq!(editor.summary(), Some("42*(3+7)"));
//!
//! // Failures recover locally and report a notice
//! for key in ["/", "0"] {
//!     editor.handle_key(key).unwrap();
//! }
//! let err = editor.handle_key("=").unwrap_err();
//! assert_eq!(err.notice("Invalid Expression").as_deref(), Some("Invalid Expression: Infinity"));
//! assert_eq!(editor.expression(), "0");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod widget;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{ConfigError, WidgetConfig};
    pub use crate::core::evaluator::{format_number, Evaluator, FastEvaluator};
    pub use crate::core::parens::is_balanced;
    pub use crate::core::symbol::format_symbols;
    pub use crate::core::{CalcError, CalcResult, ExpressionEditor, InputEvent, Operator};
    pub use crate::driver::{EditorDriver, HeadlessDriver};
    pub use crate::widget::{
        CalculatorWidget, DomEvent, Keypad, KeypadAction, MockDom, NotificationSink,
        RenderSurface,
    };

    #[cfg(feature = "wasm")]
    pub use crate::widget::BrowserCalculator;
}
