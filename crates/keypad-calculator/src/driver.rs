//! Unified Editor Driver
//!
//! The same behavioral checks run against the headless editor and the
//! DOM-backed widget: write the check once, run it on every front end.

#![allow(clippy::unwrap_used)]

use crate::config::WidgetConfig;
use crate::core::evaluator::{Evaluator, FastEvaluator};
use crate::core::{CalcResult, ExpressionEditor, InputEvent};
use crate::widget::{CalculatorWidget, MockDom, EXPRESSION_ID, SUMMARY_ID};

/// Abstract driver over anything that accepts calculator input
pub trait EditorDriver {
    /// Sends one input event
    fn send(&mut self, event: InputEvent) -> CalcResult<()>;

    /// Current expression as displayed
    fn expression(&self) -> String;

    /// Current summary line, if shown
    fn summary(&self) -> Option<String>;

    /// Notice produced by the most recent event
    fn last_notice(&self) -> Option<String>;

    /// Sends each character of `keys` as a raw key, returning the last result
    fn type_keys(&mut self, keys: &str) -> CalcResult<()> {
        let mut last = Ok(());
        for ch in keys.chars() {
            last = self.send(InputEvent::RawKey(ch.to_string()));
        }
        last
    }
}

/// Drives an [`ExpressionEditor`] directly, with no surface
#[derive(Debug)]
pub struct HeadlessDriver<E = FastEvaluator> {
    editor: ExpressionEditor<E>,
    config: WidgetConfig,
    last_notice: Option<String>,
}

impl Default for HeadlessDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessDriver {
    /// Creates a driver around a fresh editor
    #[must_use]
    pub fn new() -> Self {
        Self::with_editor(ExpressionEditor::new())
    }
}

impl<E: Evaluator> HeadlessDriver<E> {
    /// Creates a driver around an existing editor
    #[must_use]
    pub fn with_editor(editor: ExpressionEditor<E>) -> Self {
        Self {
            editor,
            config: WidgetConfig::default(),
            last_notice: None,
        }
    }

    /// Uses `config` for notice text, matching a configured widget
    #[must_use]
    pub fn with_config(mut self, config: WidgetConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the notice configuration
    #[must_use]
    pub const fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Returns the underlying editor
    #[must_use]
    pub fn editor(&self) -> &ExpressionEditor<E> {
        &self.editor
    }
}

impl<E: Evaluator> EditorDriver for HeadlessDriver<E> {
    fn send(&mut self, event: InputEvent) -> CalcResult<()> {
        let result = self.editor.apply(event);
        self.last_notice = result
            .as_ref()
            .err()
            .and_then(|err| err.notice(&self.config.invalid_prefix));
        result
    }

    fn expression(&self) -> String {
        self.editor.expression().to_string()
    }

    fn summary(&self) -> Option<String> {
        self.editor.summary().map(str::to_string)
    }

    fn last_notice(&self) -> Option<String> {
        self.last_notice.clone()
    }
}

/// Widget driver: keys go through key down/up, state is read back from the DOM
impl<E: Evaluator> EditorDriver for CalculatorWidget<MockDom, E> {
    fn send(&mut self, event: InputEvent) -> CalcResult<()> {
        match event {
            InputEvent::RawKey(key) => self.press_key(&key),
            other => CalculatorWidget::send(self, other),
        }
    }

    fn expression(&self) -> String {
        self.surface()
            .get_element_text(EXPRESSION_ID)
            .unwrap_or_default()
            .to_string()
    }

    fn summary(&self) -> Option<String> {
        let dom = self.surface();
        if dom.is_visible(SUMMARY_ID) {
            dom.get_element_text(SUMMARY_ID).map(str::to_string)
        } else {
            None
        }
    }

    fn last_notice(&self) -> Option<String> {
        CalculatorWidget::last_notice(self).map(str::to_string)
    }
}

// ===== Unified Checks =====
// These checks work with ANY EditorDriver implementation

fn reset<D: EditorDriver>(driver: &mut D) {
    let _ = driver.send(InputEvent::Clear);
    assert_eq!(driver.expression(), "0");
    assert_eq!(driver.summary(), None);
}

/// Verifies operands never keep a leading zero
pub fn verify_leading_zero<D: EditorDriver>(driver: &mut D) {
    reset(driver);
    driver.type_keys("05").unwrap();
    assert_eq!(driver.expression(), "5");

    driver.type_keys("+007").unwrap();
    assert_eq!(driver.expression(), "5+7");
    reset(driver);
}

/// Verifies the decimal point rules
pub fn verify_decimal_rules<D: EditorDriver>(driver: &mut D) {
    reset(driver);
    driver.type_keys("1.2.3").unwrap();
    assert_eq!(driver.expression(), "1.23");

    driver.type_keys("*.").unwrap();
    assert_eq!(driver.expression(), "1.23*");

    driver.type_keys("4.").unwrap();
    assert_eq!(driver.expression(), "1.23*4.");
    reset(driver);
}

/// Verifies consecutive operators collapse to the latest
pub fn verify_operator_collapse<D: EditorDriver>(driver: &mut D) {
    reset(driver);
    driver.type_keys("5+-").unwrap();
    assert_eq!(driver.expression(), "5-");

    driver.type_keys("2.^").unwrap();
    assert_eq!(driver.expression(), "5-2^");
    reset(driver);
}

/// Verifies parenthesis entry and balance checking
pub fn verify_parentheses<D: EditorDriver>(driver: &mut D) {
    reset(driver);
    driver.type_keys("(").unwrap();
    assert_eq!(driver.expression(), "(");

    driver.type_keys("1+2)*(3-4)=").unwrap();
    assert_eq!(driver.expression(), "-3");
    assert_eq!(driver.summary().as_deref(), Some("(1+2)*(3-4)"));

    reset(driver);
    driver.type_keys("(1+2))").unwrap();
    assert!(driver.type_keys("=").is_err());
    assert_eq!(driver.expression(), "0");
    assert_eq!(driver.summary().as_deref(), Some("(1+2))"));
    assert_eq!(
        driver.last_notice().as_deref(),
        Some("Invalid Expression: Unbalanced Parentheses")
    );
    reset(driver);
}

/// Verifies evaluation and continuing from a result
pub fn verify_evaluation<D: EditorDriver>(driver: &mut D) {
    reset(driver);
    driver.type_keys("2+2=").unwrap();
    assert_eq!(driver.expression(), "4");
    assert_eq!(driver.summary().as_deref(), Some("2+2"));

    driver.type_keys("^3=").unwrap();
    assert_eq!(driver.expression(), "64");
    assert_eq!(driver.summary().as_deref(), Some("4^3"));

    reset(driver);
    driver.type_keys("3+").unwrap();
    assert!(driver.type_keys("=").is_err());
    assert_eq!(driver.expression(), "3+");
    assert_eq!(driver.summary(), None);
    assert_eq!(driver.last_notice(), None);
    reset(driver);
}

/// Verifies failure recovery keeps the summary and resets the expression
pub fn verify_recovery<D: EditorDriver>(driver: &mut D) {
    reset(driver);
    driver.type_keys("1/0").unwrap();
    assert!(driver.type_keys("=").is_err());
    assert_eq!(driver.expression(), "0");
    assert_eq!(driver.summary().as_deref(), Some("1/0"));
    assert_eq!(
        driver.last_notice().as_deref(),
        Some("Invalid Expression: Infinity")
    );

    driver.send(InputEvent::Backspace).unwrap();
    assert_eq!(driver.expression(), "0");
    assert_eq!(driver.summary(), None);
}

/// Complete verification suite - runs every check
pub fn run_full_suite<D: EditorDriver>(driver: &mut D) {
    verify_leading_zero(driver);
    verify_decimal_rules(driver);
    verify_operator_collapse(driver);
    verify_parentheses(driver);
    verify_evaluation(driver);
    verify_recovery(driver);
}
