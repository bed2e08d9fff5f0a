//! Expression editing core
//!
//! The editor owns the expression buffer and the summary line, applies the
//! keypad editing rules, and delegates arithmetic to an [`Evaluator`].
//!
//! [`Evaluator`]: evaluator::Evaluator

pub mod editor;
pub mod evaluator;
pub mod parens;
pub mod symbol;

pub use editor::ExpressionEditor;

use std::fmt;

use thiserror::Error;

/// Result type for editor operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Failures the editor recovers from locally.
///
/// By the time one of these is returned the editor has already reset its
/// buffer (or left it untouched for [`CalcError::IncompleteExpression`]).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Equals pressed while the buffer ends in an operator or decimal point
    #[error("Incomplete expression")]
    IncompleteExpression,
    /// Mismatched or unclosed parentheses
    #[error("Unbalanced Parentheses")]
    UnbalancedParentheses,
    /// The evaluator rejected the expression text
    #[error("Evaluation failed: {0}")]
    EvaluationFailed(String),
    /// The evaluator produced infinity or NaN
    #[error("Non-finite result: {}", js_number(.0))]
    NonFiniteResult(f64),
}

impl CalcError {
    /// Detail shown after the notice prefix, or `None` when the failure is silent.
    ///
    /// `Some("")` means the notice carries no detail.
    #[must_use]
    pub fn notice_detail(&self) -> Option<String> {
        match self {
            Self::IncompleteExpression => None,
            Self::UnbalancedParentheses => Some("Unbalanced Parentheses".to_string()),
            Self::EvaluationFailed(_) => Some(String::new()),
            Self::NonFiniteResult(value) => Some(js_number(value)),
        }
    }

    /// Full notice text for the given prefix, or `None` when the failure is silent.
    #[must_use]
    pub fn notice(&self, prefix: &str) -> Option<String> {
        self.notice_detail().map(|detail| {
            if detail.is_empty() {
                prefix.to_string()
            } else {
                format!("{prefix}: {detail}")
            }
        })
    }
}

/// Renders non-finite values the way browsers print them.
fn js_number(value: &f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        evaluator::format_number(*value)
    }
}

/// The closed set of binary operators the keypad can insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `^`
    Power,
}

impl Operator {
    /// Every operator, in keypad order
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
    ];

    /// Parses an ASCII operator character
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '^' => Some(Self::Power),
            _ => None,
        }
    }

    /// The ASCII character stored in the expression buffer
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Power => '^',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Returns true for characters in the operator set
#[must_use]
pub const fn is_operator(ch: char) -> bool {
    Operator::from_char(ch).is_some()
}

/// Discrete input events consumed by the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A digit key (0-9)
    Digit(u8),
    /// An operator key
    Operator(Operator),
    /// The decimal point key
    Decimal,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// Evaluate the expression
    Equals,
    /// Drop the last character
    Backspace,
    /// Reset expression and summary
    Clear,
    /// An unmapped keyboard key, dispatched by [`InputEvent::from_key`]
    RawKey(String),
}

impl InputEvent {
    /// Maps a raw keyboard key to the event it triggers.
    ///
    /// Priority: digit, operator character, `=`, `.`, `Backspace`, parentheses,
    /// then `c`/`C` for clear. Any other key maps to `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        let single = match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(ch),
            _ => None,
        };

        if let Some(d) = single.and_then(|ch| ch.to_digit(10)) {
            return Some(Self::Digit(d as u8));
        }
        if let Some(op) = single.and_then(Operator::from_char) {
            return Some(Self::Operator(op));
        }
        match key {
            "=" => Some(Self::Equals),
            "." => Some(Self::Decimal),
            "Backspace" => Some(Self::Backspace),
            "(" => Some(Self::OpenParen),
            ")" => Some(Self::CloseParen),
            _ if key.eq_ignore_ascii_case("c") => Some(Self::Clear),
            _ => None,
        }
    }
}
