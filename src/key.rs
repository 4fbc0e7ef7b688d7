//! Type-safe key bindings for the text field.
//!
//! A [`Binding`] names an action and lists the key presses that trigger it.
//! Bindings are matched against [`bubbletea_rs::KeyMsg`] values, so both the
//! key code and the modifier set must agree.
//!
//! ```rust
//! use bubbletea_textfield::key::Binding;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let commit = Binding::new(vec![KeyCode::Enter]).with_help("enter", "commit value");
//! let clear = Binding::new(vec![(KeyCode::Char('x'), KeyModifiers::CONTROL)])
//!     .with_help("ctrl+x", "clear field");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Modifier keys held during the press.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// A set of key presses bound to one action, with optional help text.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help_key: String,
    help_desc: String,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from any mix of bare key codes and
    /// `(code, modifiers)` pairs.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help_key: String::new(),
            help_desc: String::new(),
            disabled: false,
        }
    }

    /// Attaches help text (short key label and description).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help_key = key.into();
        self.help_desc = desc.into();
        self
    }

    /// Disables the binding; disabled bindings never match.
    pub fn with_disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Returns the help text as a `(key, description)` pair.
    pub fn help(&self) -> (&str, &str) {
        (&self.help_key, &self.help_desc)
    }

    /// Returns the key presses this binding listens for.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns whether the given key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        !self.disabled
            && self
                .keys
                .iter()
                .any(|k| k.code == msg.key && k.modifiers == msg.modifiers)
    }
}
