//! The expression editing state machine
//!
//! Holds the live expression (never empty, `"0"` when idle) and the summary
//! snapshot taken whenever evaluation is requested. Every input handler
//! runs to completion on `&mut self`, so edits never interleave.

use tracing::{debug, trace, warn};

use super::evaluator::{format_number, Evaluator, FastEvaluator};
use super::parens::is_balanced;
use super::{is_operator, CalcError, CalcResult, InputEvent, Operator};

/// The neutral buffer contents
const EMPTY_EXPRESSION: &str = "0";

/// Expression editor driven by keypad and keyboard input
#[derive(Debug, Clone)]
pub struct ExpressionEditor<E = FastEvaluator> {
    /// Live, editable expression text
    expression: String,
    /// Snapshot of the expression taken on the last evaluation request
    summary: Option<String>,
    /// Arithmetic backend
    evaluator: E,
}

impl Default for ExpressionEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionEditor {
    /// Creates an editor backed by [`FastEvaluator`]
    #[must_use]
    pub fn new() -> Self {
        Self::with_evaluator(FastEvaluator::new())
    }
}

impl<E: Evaluator> ExpressionEditor<E> {
    /// Creates an editor with a custom evaluator
    #[must_use]
    pub fn with_evaluator(evaluator: E) -> Self {
        Self {
            expression: EMPTY_EXPRESSION.to_string(),
            summary: None,
            evaluator,
        }
    }

    /// The live expression
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The last submitted expression, if evaluation was requested since the last clear
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// The evaluator in use
    #[must_use]
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Applies one input event.
    ///
    /// Errors are already recovered when returned; they only tell the caller
    /// what to show the user.
    pub fn apply(&mut self, event: InputEvent) -> CalcResult<()> {
        debug!(?event, expression = %self.expression, "input");
        match event {
            InputEvent::Digit(d) => self.push_digit(d),
            InputEvent::Operator(op) => self.push_operator(op),
            InputEvent::Decimal => self.push_decimal(),
            InputEvent::OpenParen => self.open_paren(),
            InputEvent::CloseParen => self.close_paren(),
            InputEvent::Backspace => self.backspace(),
            InputEvent::Clear => self.clear(),
            InputEvent::Equals => return self.evaluate(),
            InputEvent::RawKey(key) => return self.handle_key(&key),
        }
        Ok(())
    }

    /// Dispatches a raw keyboard key; unknown keys are ignored
    pub fn handle_key(&mut self, key: &str) -> CalcResult<()> {
        match InputEvent::from_key(key) {
            Some(event) => self.apply(event),
            None => {
                trace!(key, "ignored key");
                Ok(())
            }
        }
    }

    /// Appends a digit, replacing a lone leading zero of the current operand
    pub fn push_digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            trace!(digit, "ignored out-of-range digit");
            return;
        };

        if self.last_operand() == "0" {
            self.expression.pop();
        }
        self.expression.push(ch);
    }

    /// Appends a decimal point unless the operand already has one or the
    /// buffer ends in an operator
    pub fn push_decimal(&mut self) {
        let after_operator = self.last_char().is_some_and(is_operator);
        if !after_operator && !self.last_operand().contains('.') {
            self.expression.push('.');
        }
    }

    /// Appends an operator, replacing a trailing operator or decimal point
    pub fn push_operator(&mut self, op: Operator) {
        if self.ends_incomplete() {
            self.expression.pop();
        }
        self.expression.push(op.as_char());
    }

    /// Appends `(`; a fresh `"0"` buffer becomes `"("`
    pub fn open_paren(&mut self) {
        if self.expression == EMPTY_EXPRESSION {
            self.expression.clear();
        }
        self.expression.push('(');
    }

    /// Appends `)`
    pub fn close_paren(&mut self) {
        self.expression.push(')');
    }

    /// Drops the last character; a single character buffer becomes `"0"`
    pub fn backspace(&mut self) {
        if self.expression.chars().count() <= 1 {
            self.clear();
        } else {
            self.expression.pop();
        }
    }

    /// Resets expression and summary to the initial state
    pub fn clear(&mut self) {
        self.reset_expression();
        self.summary = None;
    }

    /// Evaluates the buffer.
    ///
    /// Refused silently when the buffer ends in an operator or decimal point.
    /// Otherwise the summary takes a snapshot, parentheses are checked, and
    /// the evaluator runs. Failures reset the expression to `"0"`.
    pub fn evaluate(&mut self) -> CalcResult<()> {
        if self.ends_incomplete() {
            trace!(expression = %self.expression, "evaluation refused");
            return Err(CalcError::IncompleteExpression);
        }

        self.summary = Some(self.expression.clone());

        if !is_balanced(&self.expression) {
            return Err(self.recover(CalcError::UnbalancedParentheses));
        }

        match self.evaluator.evaluate(&self.expression) {
            Ok(value) if value.is_finite() => {
                let rendered = format_number(value);
                debug!(summary = %self.expression, result = %rendered, "evaluated");
                self.expression = rendered;
                Ok(())
            }
            Ok(value) => Err(self.recover(CalcError::NonFiniteResult(value))),
            Err(reason) => Err(self.recover(CalcError::EvaluationFailed(reason))),
        }
    }

    /// Resets the buffer after a failed evaluation, keeping the summary
    fn recover(&mut self, error: CalcError) -> CalcError {
        warn!(%error, summary = ?self.summary, "invalid expression");
        self.reset_expression();
        error
    }

    fn reset_expression(&mut self) {
        self.expression.clear();
        self.expression.push_str(EMPTY_EXPRESSION);
    }

    /// The run of text after the last operator (the whole buffer if none)
    fn last_operand(&self) -> &str {
        self.expression.rsplit(is_operator).next().unwrap_or("")
    }

    fn last_char(&self) -> Option<char> {
        self.expression.chars().next_back()
    }

    fn ends_incomplete(&self) -> bool {
        self.last_char()
            .is_some_and(|ch| is_operator(ch) || ch == '.')
    }
}
