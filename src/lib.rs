#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-textfield/")]

//! # bubbletea-textfield
//!
//! A decorated single-line text field for terminal applications built with
//! [bubbletea-rs](https://crates.io/crates/bubbletea-rs).
//!
//! The widget renders a labeled, styled input line in the spirit of a
//! Material text field: an optional floating label, prefix/suffix affixes,
//! prepend/append icons, a clear affordance, a character counter, an
//! indeterminate loading strip, and a details footer for hints and errors.
//! Values can optionally be run through a format mask (`##-##`-style
//! patterns) while the unmasked text is what the host application receives.
//!
//! The component follows the Elm Architecture used by bubbletea-rs: state
//! lives in a [`TextField`] model, keyboard input arrives through
//! `update()`, and `view()` renders the current state to a string.
//!
//! ## Basic Usage
//!
//! ```rust
//! use bubbletea_textfield::prelude::*;
//!
//! let mut field = textfield_new();
//! field.set_label(Some("Name"));
//! field.set_placeholder("Jane Doe");
//! field.set_width(30);
//! let _cmd = field.focus();
//! ```
//!
//! ## Events
//!
//! The field communicates with its host through messages produced by the
//! commands it returns:
//!
//! - [`textfield::InputMsg`] whenever the (unmasked) value changes
//! - [`textfield::ChangeMsg`] when a value is committed (Enter, or blur
//!   with a value that differs from the one captured at focus time)
//! - [`textfield::FocusMsg`] / [`textfield::BlurMsg`] on focus transitions
//! - [`textfield::KeyDownMsg`] for every handled key press
//!
//! ```rust
//! use bubbletea_rs::{Model, Msg, Cmd};
//! use bubbletea_textfield::prelude::*;
//!
//! struct App {
//!     field: TextField,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut field = textfield_new();
//!         field.set_label(Some("Search"));
//!         let cmd = field.focus();
//!         (Self { field }, Some(cmd))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(change) = msg.downcast_ref::<bubbletea_textfield::textfield::ChangeMsg>() {
//!             let _committed = change.value.clone();
//!         }
//!         self.field.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.field.view()
//!     }
//! }
//! ```
//!
//! ## Masking
//!
//! ```rust
//! use bubbletea_textfield::prelude::*;
//!
//! let mut field = textfield_new();
//! field.set_mask(Some("(###) ###-####"));
//! let _ = field.set_value(Some("5551234567"));
//! assert_eq!(field.value().as_deref(), Some("5551234567"));
//! // view() renders "(555) 123-4567"
//! ```

pub mod counter;
pub mod cursor;
mod deprecation;
pub mod key;
pub mod label;
pub mod loading;
pub mod mask;
pub mod textfield;

use bubbletea_rs::Cmd;

/// Focus management interface for the widgets in this crate.
///
/// Focus transitions are where the field captures and commits its value
/// snapshot, so hosts should always move focus through this interface (or
/// the inherent methods it delegates to) rather than toggling state by
/// hand.
///
/// - `focus()` marks the component active and may return a command (for
///   example to start the caret blinking and publish a focus message).
/// - `blur()` deactivates the component and may return a command carrying
///   the blur notification and, if the value changed since focus, the
///   committed value.
/// - `focused()` reports the current state.
///
/// ```rust
/// use bubbletea_textfield::prelude::*;
///
/// let mut field = textfield_new();
/// assert!(!field.focused());
/// let _cmd = Component::focus(&mut field);
/// assert!(field.focused());
/// let _cmd = Component::blur(&mut field);
/// assert!(!field.focused());
/// ```
pub trait Component {
    /// Sets the component to the focused state.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to the blurred state.
    fn blur(&mut self) -> Option<Cmd>;

    /// Returns whether the component currently has focus.
    fn focused(&self) -> bool;
}

pub use counter::Model as Counter;
pub use cursor::Model as Cursor;
pub use key::{Binding, KeyPress};
pub use label::Model as Label;
pub use loading::Model as Loading;
pub use mask::Pattern as MaskPattern;
pub use textfield::{
    blink, new as textfield_new, BlurMsg, ChangeMsg, ContentKind, CounterMode, EchoMode, FocusMsg,
    InputMsg, KeyDownMsg, KeyMap as TextFieldKeyMap, Model as TextField, PasteErrMsg, PasteMsg,
    RefocusMsg, ValidateFunc,
};

/// Convenience re-exports for the common types and constructors.
///
/// ```rust
/// use bubbletea_textfield::prelude::*;
///
/// let field: TextField = textfield_new();
/// ```
pub mod prelude {
    pub use crate::counter::Model as Counter;
    pub use crate::cursor::Model as Cursor;
    pub use crate::key::{Binding, KeyPress};
    pub use crate::label::Model as Label;
    pub use crate::loading::Model as Loading;
    pub use crate::mask::Pattern as MaskPattern;
    pub use crate::textfield::{
        blink, new as textfield_new, BlurMsg, ChangeMsg, ContentKind, CounterMode, EchoMode,
        FocusMsg, InputMsg, KeyDownMsg, KeyMap as TextFieldKeyMap, Model as TextField,
        PasteErrMsg, PasteMsg, RefocusMsg, ValidateFunc,
    };
    pub use crate::Component;
}
