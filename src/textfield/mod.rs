//! A decorated single-line text field.
//!
//! The field composes the base editable line with a floating label,
//! prefix/suffix affixes, prepend/append icons, a clear affordance, a
//! character counter, format masking, and an indeterminate loading strip.
//! It follows the Elm Architecture used across this crate: feed messages
//! to [`Model::update`], render with [`Model::view`], and listen for the
//! messages the returned commands publish.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_textfield::textfield::new;
//!
//! let mut field = new();
//! field.set_label(Some("Email"));
//! field.set_placeholder("you@example.com");
//! field.set_width(32);
//! let _cmd = field.focus();
//! ```
//!
//! # Masking
//!
//! ```rust
//! use bubbletea_textfield::textfield::new;
//!
//! let mut field = new();
//! field.set_mask(Some("##/##"));
//! let _ = field.set_value(Some("1231"));
//! // Renders "12/31"; hosts receive the unmasked "1231".
//! ```

pub mod keymap;
pub mod methods;
pub mod model;
pub mod movement;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

pub use keymap::{default_key_map, KeyMap};
pub use model::{blink, new, paste, Model};
pub use types::{
    BlurMsg, ChangeMsg, ContentKind, CounterMode, EchoMode, FocusMsg, InputMsg, KeyDownMsg,
    PasteErrMsg, PasteMsg, RefocusMsg, ValidateFunc,
};
