//! Key bindings for the text field.

use crate::key::Binding;
use crossterm::event::{KeyCode, KeyModifiers};

/// The key bindings for every action the field supports.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move the caret one rune right.
    pub character_forward: Binding,
    /// Move the caret one rune left.
    pub character_backward: Binding,
    /// Move the caret one word right.
    pub word_forward: Binding,
    /// Move the caret one word left.
    pub word_backward: Binding,
    /// Delete the word before the caret.
    pub delete_word_backward: Binding,
    /// Delete the word after the caret.
    pub delete_word_forward: Binding,
    /// Delete from the caret to the end of the line.
    pub delete_after_cursor: Binding,
    /// Delete from the start of the line to the caret.
    pub delete_before_cursor: Binding,
    /// Delete one rune backward.
    pub delete_character_backward: Binding,
    /// Delete one rune forward.
    pub delete_character_forward: Binding,
    /// Move to the start of the line.
    pub line_start: Binding,
    /// Move to the end of the line.
    pub line_end: Binding,
    /// Paste from the system clipboard.
    pub paste: Binding,
    /// Commit the current value.
    pub commit: Binding,
    /// Clear the field (when clearable).
    pub clear: Binding,
}

/// The default bindings: arrows/home/end plus the usual emacs-style
/// control keys, Enter to commit, and ctrl+x to clear.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        character_forward: Binding::new(vec![
            (KeyCode::Right, KeyModifiers::NONE),
            (KeyCode::Char('f'), KeyModifiers::CONTROL),
        ]),
        character_backward: Binding::new(vec![
            (KeyCode::Left, KeyModifiers::NONE),
            (KeyCode::Char('b'), KeyModifiers::CONTROL),
        ]),
        word_forward: Binding::new(vec![
            (KeyCode::Right, KeyModifiers::ALT),
            (KeyCode::Right, KeyModifiers::CONTROL),
            (KeyCode::Char('f'), KeyModifiers::ALT),
        ]),
        word_backward: Binding::new(vec![
            (KeyCode::Left, KeyModifiers::ALT),
            (KeyCode::Left, KeyModifiers::CONTROL),
            (KeyCode::Char('b'), KeyModifiers::ALT),
        ]),
        delete_word_backward: Binding::new(vec![
            (KeyCode::Backspace, KeyModifiers::ALT),
            (KeyCode::Char('w'), KeyModifiers::CONTROL),
        ]),
        delete_word_forward: Binding::new(vec![
            (KeyCode::Delete, KeyModifiers::ALT),
            (KeyCode::Char('d'), KeyModifiers::ALT),
        ]),
        delete_after_cursor: Binding::new(vec![(KeyCode::Char('k'), KeyModifiers::CONTROL)]),
        delete_before_cursor: Binding::new(vec![(KeyCode::Char('u'), KeyModifiers::CONTROL)]),
        delete_character_backward: Binding::new(vec![
            (KeyCode::Backspace, KeyModifiers::NONE),
            (KeyCode::Char('h'), KeyModifiers::CONTROL),
        ]),
        delete_character_forward: Binding::new(vec![
            (KeyCode::Delete, KeyModifiers::NONE),
            (KeyCode::Char('d'), KeyModifiers::CONTROL),
        ]),
        line_start: Binding::new(vec![
            (KeyCode::Home, KeyModifiers::NONE),
            (KeyCode::Char('a'), KeyModifiers::CONTROL),
        ]),
        line_end: Binding::new(vec![
            (KeyCode::End, KeyModifiers::NONE),
            (KeyCode::Char('e'), KeyModifiers::CONTROL),
        ]),
        paste: Binding::new(vec![(KeyCode::Char('v'), KeyModifiers::CONTROL)]),
        commit: Binding::new(vec![(KeyCode::Enter, KeyModifiers::NONE)])
            .with_help("enter", "commit value"),
        clear: Binding::new(vec![(KeyCode::Char('x'), KeyModifiers::CONTROL)])
            .with_help("ctrl+x", "clear field"),
    }
}
