//! In-memory DOM used as the widget's render surface and notification sink
//!
//! Lets the widget be exercised end to end without a browser.

use std::collections::HashMap;
use std::time::Duration;

use super::keypad::Keypad;
use super::{NotificationSink, RenderSurface};

/// Element id of the summary line
pub const SUMMARY_ID: &str = "calc-summary";
/// Element id of the live expression
pub const EXPRESSION_ID: &str = "calc-expression";
/// Element id of the snackbar
pub const SNACKBAR_ID: &str = "calc-snackbar";
/// Class marking the button that matches the key being held
pub const ACTIVE_CLASS: &str = "active";

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Whether element is visible
    pub visible: bool,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            visible: true,
            children: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets visibility
    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Adds a class once
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// DOM events the widget reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click on a keypad button
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Keyboard key pressed
    KeyDown {
        /// The key value
        key: String,
        /// Auto-repeat while held
        repeat: bool,
    },
    /// Keyboard key released
    KeyUp {
        /// The key value
        key: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a non-repeating key down event
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
            repeat: false,
        }
    }

    /// Creates an auto-repeat key down event
    #[must_use]
    pub fn key_repeat(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
            repeat: true,
        }
    }

    /// Creates a key up event
    #[must_use]
    pub fn key_up(key: &str) -> Self {
        Self::KeyUp {
            key: key.to_string(),
        }
    }
}

/// A notice shown in the snackbar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Message text
    pub message: String,
    /// How long it stays visible
    pub duration: Duration,
}

/// Mock DOM for testing the calculator without a browser
#[derive(Debug)]
pub struct MockDom {
    /// Root element
    pub root: DomElement,
    /// Elements by ID for quick lookup
    elements: HashMap<String, DomElement>,
    /// Every notice shown, oldest first
    notices: Vec<Notice>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: DomElement::new("div").with_id("root"),
            elements: HashMap::new(),
            notices: Vec::new(),
        }
    }

    /// Creates the calculator DOM: summary, expression, snackbar and keypad
    #[must_use]
    pub fn calculator(keypad: &Keypad) -> Self {
        let mut dom = Self::new();

        let summary = DomElement::new("div")
            .with_id(SUMMARY_ID)
            .with_class("summary")
            .hidden();

        let expression = DomElement::new("div")
            .with_id(EXPRESSION_ID)
            .with_class("expression")
            .with_text("0");

        let snackbar = DomElement::new("div")
            .with_id(SNACKBAR_ID)
            .with_class("snackbar")
            .hidden();

        let keypad_elem = keypad.create_keypad_element();

        dom.root = DomElement::new("div")
            .with_id("calculator")
            .with_class("calculator-app")
            .with_child(summary.clone())
            .with_child(expression.clone())
            .with_child(keypad_elem.clone())
            .with_child(snackbar.clone());

        dom.register_element(summary);
        dom.register_element(expression);
        dom.register_element(snackbar);
        for btn in &keypad_elem.children {
            dom.register_element(btn.clone());
        }
        dom.register_element(keypad_elem);

        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.text_content = text.to_string();
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Whether the element exists and is visible
    #[must_use]
    pub fn is_visible(&self, id: &str) -> bool {
        self.elements.get(id).is_some_and(|e| e.visible)
    }

    /// Every notice shown so far
    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// The most recent notice
    #[must_use]
    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }

    /// Hides the snackbar, as its timer would
    pub fn dismiss_snackbar(&mut self) {
        if let Some(elem) = self.elements.get_mut(SNACKBAR_ID) {
            elem.visible = false;
        }
    }

    /// Ids of buttons currently marked active
    #[must_use]
    pub fn active_elements(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .elements
            .values()
            .filter(|e| e.has_class(ACTIVE_CLASS))
            .map(|e| e.id.as_str())
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Removes the active mark from every element
    pub fn clear_active(&mut self) {
        for elem in self.elements.values_mut() {
            elem.remove_class(ACTIVE_CLASS);
        }
    }
}

impl RenderSurface for MockDom {
    fn render(&mut self, summary: Option<&str>, expression: &str) {
        if let Some(elem) = self.elements.get_mut(SUMMARY_ID) {
            elem.text_content = summary.unwrap_or_default().to_string();
            elem.visible = summary.is_some();
        }
        self.set_element_text(EXPRESSION_ID, expression);
    }

    fn highlight(&mut self, element_id: Option<&str>) {
        self.clear_active();
        if let Some(elem) = element_id.and_then(|id| self.elements.get_mut(id)) {
            elem.add_class(ACTIVE_CLASS);
        }
    }
}

impl NotificationSink for MockDom {
    fn notify(&mut self, message: &str, duration: Duration) {
        if let Some(elem) = self.elements.get_mut(SNACKBAR_ID) {
            elem.text_content = message.to_string();
            elem.visible = true;
            elem.attributes.insert(
                "data-duration-ms".to_string(),
                duration.as_millis().to_string(),
            );
        }
        self.notices.push(Notice {
            message: message.to_string(),
            duration,
        });
    }
}
