//! Calculator widget: keypad and keyboard events in, rendered state out

use tracing::{debug, trace};

use super::dom::{DomEvent, MockDom};
use super::keypad::Keypad;
use super::{NotificationSink, RenderSurface};
use crate::config::WidgetConfig;
use crate::core::evaluator::{Evaluator, FastEvaluator};
use crate::core::{CalcResult, ExpressionEditor, InputEvent};

/// Wires input events to the editor and pushes state to a surface
#[derive(Debug)]
pub struct CalculatorWidget<S = MockDom, E = FastEvaluator> {
    /// Expression state machine
    editor: ExpressionEditor<E>,
    /// Button layout
    keypad: Keypad,
    /// Where state and notices go
    surface: S,
    /// Presentation settings
    config: WidgetConfig,
    /// Notice produced by the most recent event, if any
    last_notice: Option<String>,
}

impl Default for CalculatorWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorWidget {
    /// Creates a widget rendering into a fresh [`MockDom`]
    #[must_use]
    pub fn new() -> Self {
        let keypad = Keypad::new();
        let surface = MockDom::calculator(&keypad);
        Self::with_parts(ExpressionEditor::new(), keypad, surface)
    }

    /// Gets the mock DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.surface
    }

    /// Gets the mock DOM mutably
    pub fn dom_mut(&mut self) -> &mut MockDom {
        &mut self.surface
    }
}

impl<S, E> CalculatorWidget<S, E>
where
    S: RenderSurface + NotificationSink,
    E: Evaluator,
{
    /// Creates a widget from an editor, keypad and surface
    #[must_use]
    pub fn with_parts(editor: ExpressionEditor<E>, keypad: Keypad, surface: S) -> Self {
        let mut widget = Self {
            editor,
            keypad,
            surface,
            config: WidgetConfig::default(),
            last_notice: None,
        };
        widget.render();
        widget
    }

    /// Creates a widget with the standard keypad around a custom surface
    #[must_use]
    pub fn with_surface(surface: S, evaluator: E) -> Self {
        Self::with_parts(
            ExpressionEditor::with_evaluator(evaluator),
            Keypad::new(),
            surface,
        )
    }

    /// Applies a configuration
    #[must_use]
    pub fn with_config(mut self, config: WidgetConfig) -> Self {
        self.config = config;
        self
    }

    /// Gets the editor
    #[must_use]
    pub fn editor(&self) -> &ExpressionEditor<E> {
        &self.editor
    }

    /// Gets the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Gets the surface
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Gets the surface mutably
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Gets the configuration
    #[must_use]
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Notice produced by the most recent event
    #[must_use]
    pub fn last_notice(&self) -> Option<&str> {
        self.last_notice.as_deref()
    }

    /// Handles a DOM event.
    ///
    /// Clicks run the button's action. Key down marks the matching button,
    /// key up clears the mark and feeds the key to the editor. Auto-repeat
    /// key downs are ignored.
    pub fn dispatch(&mut self, event: DomEvent) -> CalcResult<()> {
        match event {
            DomEvent::Click { element_id } => match self.keypad.handle_click(&element_id) {
                Some(input) => self.send(input),
                None => {
                    trace!(%element_id, "click outside keypad");
                    Ok(())
                }
            },
            DomEvent::KeyDown { repeat: true, .. } => Ok(()),
            DomEvent::KeyDown { key, repeat: false } => {
                let target = self.keypad.find_button_for_key(&key).map(|b| b.id.as_str());
                self.surface.highlight(target);
                Ok(())
            }
            DomEvent::KeyUp { key } => {
                self.surface.highlight(None);
                self.send(InputEvent::RawKey(key))
            }
        }
    }

    /// Simulates a click on a keypad button
    pub fn click(&mut self, element_id: &str) -> CalcResult<()> {
        self.dispatch(DomEvent::click(element_id))
    }

    /// Simulates pressing and releasing a key
    pub fn press_key(&mut self, key: &str) -> CalcResult<()> {
        self.dispatch(DomEvent::key_down(key))?;
        self.dispatch(DomEvent::key_up(key))
    }

    /// Feeds one input event to the editor, then renders and notifies
    pub fn send(&mut self, input: InputEvent) -> CalcResult<()> {
        let result = self.editor.apply(input);
        self.render();

        self.last_notice = result
            .as_ref()
            .err()
            .and_then(|err| err.notice(&self.config.invalid_prefix));
        if let Some(message) = &self.last_notice {
            debug!(%message, "notify");
            self.surface
                .notify(message, self.config.notification_duration());
        }

        result
    }

    fn render(&mut self) {
        self.surface
            .render(self.editor.summary(), self.editor.expression());
    }
}
