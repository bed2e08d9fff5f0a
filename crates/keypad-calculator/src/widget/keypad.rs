//! Keypad layout and keyboard-to-button correlation
//!
//! Layout:
//! ```text
//! [ C ] [ ( ] [ ) ] [ ⌫ ]
//! [ 7 ] [ 8 ] [ 9 ] [ ÷ ]
//! [ 4 ] [ 5 ] [ 6 ] [ × ]
//! [ 1 ] [ 2 ] [ 3 ] [ − ]
//! [ 0 ] [ . ] [ ^ ] [ + ]
//! [         =           ]
//! ```

use super::dom::DomElement;
use crate::core::symbol::format_symbols;
use crate::core::{InputEvent, Operator};

/// Label of the backspace button
pub const BACKSPACE_LABEL: &str = "\u{232B}";

/// Actions that keypad buttons can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadAction {
    /// Insert a digit (0-9)
    Digit(u8),
    /// Insert a decimal point
    Decimal,
    /// Insert an operator
    Operator(Operator),
    /// Evaluate the expression
    Equals,
    /// Clear expression and summary
    Clear,
    /// Drop the last character
    Backspace,
    /// Open parenthesis
    OpenParen,
    /// Close parenthesis
    CloseParen,
}

impl KeypadAction {
    /// The editor event this button sends
    #[must_use]
    pub fn to_event(self) -> InputEvent {
        match self {
            Self::Digit(d) => InputEvent::Digit(d),
            Self::Decimal => InputEvent::Decimal,
            Self::Operator(op) => InputEvent::Operator(op),
            Self::Equals => InputEvent::Equals,
            Self::Clear => InputEvent::Clear,
            Self::Backspace => InputEvent::Backspace,
            Self::OpenParen => InputEvent::OpenParen,
            Self::CloseParen => InputEvent::CloseParen,
        }
    }

    /// Returns the button label (operators use display glyphs)
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => format_symbols(&op.to_string()),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Backspace => BACKSPACE_LABEL.to_string(),
            Self::OpenParen => "(".to_string(),
            Self::CloseParen => ")".to_string(),
        }
    }

    /// Element id for this button
    #[must_use]
    pub fn element_id(&self) -> String {
        match self {
            Self::Digit(d) => format!("btn-{d}"),
            Self::Decimal => "btn-decimal".to_string(),
            Self::Operator(op) => format!("btn-{}", op_name(*op)),
            Self::Equals => "btn-equals".to_string(),
            Self::Clear => "btn-clear".to_string(),
            Self::Backspace => "btn-backspace".to_string(),
            Self::OpenParen => "btn-open-paren".to_string(),
            Self::CloseParen => "btn-close-paren".to_string(),
        }
    }
}

/// Returns a name for an operator (for element IDs)
const fn op_name(op: Operator) -> &'static str {
    match op {
        Operator::Add => "plus",
        Operator::Subtract => "minus",
        Operator::Multiply => "times",
        Operator::Divide => "divide",
        Operator::Power => "power",
    }
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The action this button performs
    pub action: KeypadAction,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
    /// Number of columns the button spans
    pub span: usize,
}

impl KeypadButtonDef {
    /// Creates a single-cell button
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        Self::spanning(action, row, col, 1)
    }

    /// Creates a button covering `span` columns
    #[must_use]
    pub fn spanning(action: KeypadAction, row: usize, col: usize, span: usize) -> Self {
        Self {
            action,
            id: action.element_id(),
            row,
            col,
            span,
        }
    }

    /// Whether this button covers the given cell
    #[must_use]
    pub const fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }
}

/// Calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Button definitions
    buttons: Vec<KeypadButtonDef>,
    /// Number of columns
    cols: usize,
    /// Number of rows
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        use KeypadAction::{
            Backspace, Clear, CloseParen, Decimal, Digit, Equals, OpenParen, Operator as Op,
        };

        let buttons = vec![
            // Row 0: C ( ) ⌫
            KeypadButtonDef::new(Clear, 0, 0),
            KeypadButtonDef::new(OpenParen, 0, 1),
            KeypadButtonDef::new(CloseParen, 0, 2),
            KeypadButtonDef::new(Backspace, 0, 3),
            // Row 1: 7 8 9 ÷
            KeypadButtonDef::new(Digit(7), 1, 0),
            KeypadButtonDef::new(Digit(8), 1, 1),
            KeypadButtonDef::new(Digit(9), 1, 2),
            KeypadButtonDef::new(Op(Operator::Divide), 1, 3),
            // Row 2: 4 5 6 ×
            KeypadButtonDef::new(Digit(4), 2, 0),
            KeypadButtonDef::new(Digit(5), 2, 1),
            KeypadButtonDef::new(Digit(6), 2, 2),
            KeypadButtonDef::new(Op(Operator::Multiply), 2, 3),
            // Row 3: 1 2 3 −
            KeypadButtonDef::new(Digit(1), 3, 0),
            KeypadButtonDef::new(Digit(2), 3, 1),
            KeypadButtonDef::new(Digit(3), 3, 2),
            KeypadButtonDef::new(Op(Operator::Subtract), 3, 3),
            // Row 4: 0 . ^ +
            KeypadButtonDef::new(Digit(0), 4, 0),
            KeypadButtonDef::new(Decimal, 4, 1),
            KeypadButtonDef::new(Op(Operator::Power), 4, 2),
            KeypadButtonDef::new(Op(Operator::Add), 4, 3),
            // Row 5: =
            KeypadButtonDef::spanning(Equals, 5, 0, 4),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 6,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button a keyboard key corresponds to.
    ///
    /// `Backspace` maps to the backspace button. Operator keys are matched by
    /// their display glyph, everything else by its upper-cased text.
    #[must_use]
    pub fn find_button_for_key(&self, key: &str) -> Option<&KeypadButtonDef> {
        if key == "Backspace" {
            return self
                .buttons
                .iter()
                .find(|b| b.action == KeypadAction::Backspace);
        }

        let is_operator = key.chars().count() == 1 && key.chars().all(crate::core::is_operator);
        let wanted = if is_operator {
            format_symbols(key)
        } else {
            key.to_uppercase()
        };
        self.buttons.iter().find(|b| b.action.label() == wanted)
    }

    /// Processes a button click and returns the event it sends
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<InputEvent> {
        self.find_button_by_id(element_id)
            .map(|btn| btn.action.to_event())
    }

    /// Creates DOM elements for all keypad buttons
    pub fn create_dom_elements(&self) -> Vec<DomElement> {
        self.buttons
            .iter()
            .map(|btn| {
                DomElement::new("button")
                    .with_id(&btn.id)
                    .with_text(&btn.action.label())
                    .with_class("keypad-btn")
                    .with_class(&format!("keypad-row-{}", btn.row))
                    .with_class(&format!("keypad-col-{}", btn.col))
                    .with_attr("data-span", &btn.span.to_string())
            })
            .collect()
    }

    /// Creates a keypad container element with all buttons
    #[must_use]
    pub fn create_keypad_element(&self) -> DomElement {
        let mut keypad = DomElement::new("div")
            .with_id("calc-keypad")
            .with_class("keypad");

        for btn_elem in self.create_dom_elements() {
            keypad = keypad.with_child(btn_elem);
        }

        keypad
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== KeypadAction tests =====

    #[test]
    fn test_action_to_event() {
        assert_eq!(KeypadAction::Digit(3).to_event(), InputEvent::Digit(3));
        assert_eq!(KeypadAction::Backspace.to_event(), InputEvent::Backspace);
        assert_eq!(
            KeypadAction::Operator(Operator::Power).to_event(),
            InputEvent::Operator(Operator::Power)
        );
    }

    #[test]
    fn test_action_labels_use_glyphs() {
        assert_eq!(KeypadAction::Operator(Operator::Divide).label(), "÷");
        assert_eq!(KeypadAction::Operator(Operator::Multiply).label(), "×");
        assert_eq!(KeypadAction::Operator(Operator::Subtract).label(), "\u{2212}");
        assert_eq!(KeypadAction::Operator(Operator::Add).label(), "+");
        assert_eq!(KeypadAction::Backspace.label(), "⌫");
        assert_eq!(KeypadAction::Clear.label(), "C");
    }

    #[test]
    fn test_element_ids() {
        assert_eq!(KeypadAction::Digit(5).element_id(), "btn-5");
        assert_eq!(KeypadAction::Operator(Operator::Add).element_id(), "btn-plus");
        assert_eq!(KeypadAction::Operator(Operator::Power).element_id(), "btn-power");
        assert_eq!(KeypadAction::OpenParen.element_id(), "btn-open-paren");
        assert_eq!(KeypadAction::Backspace.element_id(), "btn-backspace");
    }

    // ===== Keypad layout tests =====

    #[test]
    fn test_keypad_dimensions() {
        let keypad = Keypad::new();
        assert_eq!(keypad.dimensions(), (6, 4));
        assert_eq!(keypad.button_count(), 21);
    }

    #[test]
    fn test_get_button_at() {
        let keypad = Keypad::new();
        assert_eq!(
            keypad.get_button_at(1, 0).map(|b| b.action),
            Some(KeypadAction::Digit(7))
        );
        assert_eq!(
            keypad.get_button_at(0, 3).map(|b| b.action),
            Some(KeypadAction::Backspace)
        );
    }

    #[test]
    fn test_equals_spans_last_row() {
        let keypad = Keypad::new();
        for col in 0..4 {
            assert_eq!(
                keypad.get_button_at(5, col).map(|b| b.action),
                Some(KeypadAction::Equals)
            );
        }
    }

    #[test]
    fn test_get_button_out_of_bounds() {
        let keypad = Keypad::new();
        assert!(keypad.get_button_at(6, 0).is_none());
        assert!(keypad.get_button_at(0, 4).is_none());
    }

    #[test]
    fn test_handle_click() {
        let keypad = Keypad::new();
        assert_eq!(keypad.handle_click("btn-9"), Some(InputEvent::Digit(9)));
        assert_eq!(keypad.handle_click("btn-equals"), Some(InputEvent::Equals));
        assert_eq!(keypad.handle_click("nope"), None);
    }

    // ===== Key correlation tests =====

    #[test]
    fn test_find_button_for_digit_key() {
        let keypad = Keypad::new();
        assert_eq!(keypad.find_button_for_key("4").map(|b| b.id.as_str()), Some("btn-4"));
    }

    #[test]
    fn test_find_button_for_operator_key() {
        let keypad = Keypad::new();
        assert_eq!(
            keypad.find_button_for_key("/").map(|b| b.id.as_str()),
            Some("btn-divide")
        );
        assert_eq!(
            keypad.find_button_for_key("-").map(|b| b.id.as_str()),
            Some("btn-minus")
        );
        assert_eq!(
            keypad.find_button_for_key("*").map(|b| b.id.as_str()),
            Some("btn-times")
        );
    }

    #[test]
    fn test_find_button_for_clear_lowercase() {
        let keypad = Keypad::new();
        assert_eq!(
            keypad.find_button_for_key("c").map(|b| b.id.as_str()),
            Some("btn-clear")
        );
    }

    #[test]
    fn test_find_button_for_backspace() {
        let keypad = Keypad::new();
        assert_eq!(
            keypad.find_button_for_key("Backspace").map(|b| b.id.as_str()),
            Some("btn-backspace")
        );
    }

    #[test]
    fn test_find_button_for_unknown_key() {
        let keypad = Keypad::new();
        assert!(keypad.find_button_for_key("Shift").is_none());
        assert!(keypad.find_button_for_key("x").is_none());
    }

    // ===== DOM tests =====

    #[test]
    fn test_create_dom_elements() {
        let keypad = Keypad::new();
        let elements = keypad.create_dom_elements();
        assert_eq!(elements.len(), 21);
        let divide = elements.iter().find(|e| e.id == "btn-divide").unwrap();
        assert_eq!(divide.text_content, "÷");
        assert!(divide.has_class("keypad-btn"));
    }

    #[test]
    fn test_create_keypad_element() {
        let keypad = Keypad::new().create_keypad_element();
        assert_eq!(keypad.id, "calc-keypad");
        assert_eq!(keypad.children.len(), 21);
    }
}
