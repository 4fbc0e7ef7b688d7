//! Floating label for the text field.
//!
//! The label renders in one of two placements decided by the field: floated
//! on its own line above the input when the field is active, or inline in
//! the text slot (where the value would go) when it is resting. This model
//! only owns the text and the styles; placement is the field's call.

use lipgloss_extras::prelude::*;

/// Label text and styling.
#[derive(Debug, Clone)]
pub struct Model {
    /// The label text; `None` renders nothing.
    pub text: Option<String>,
    /// Style while resting.
    pub style: Style,
    /// Style while the field is focused (accent color).
    pub focused_style: Style,
    /// Style while the field is disabled.
    pub disabled_style: Style,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            text: None,
            style: Style::new().foreground(Color::from("240")),
            focused_style: Style::new().foreground(Color::from("12")),
            disabled_style: Style::new().foreground(Color::from("240")).faint(true),
        }
    }
}

impl Model {
    /// Creates an empty label with default styles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether there is any text to render.
    pub fn is_set(&self) -> bool {
        self.text.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Renders the label text for the given field state.
    pub fn view(&self, focused: bool, disabled: bool) -> String {
        let Some(text) = self.text.as_deref() else {
            return String::new();
        };
        let style = if disabled {
            &self.disabled_style
        } else if focused {
            &self.focused_style
        } else {
            &self.style
        };
        style.render(text)
    }
}
