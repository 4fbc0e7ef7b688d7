//! Core types and outbound messages for the text field.

use bubbletea_rs::{Cmd, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

/// Published when the (unmasked) value changes through user input or a
/// clear. `value` is `None` after a clear.
#[derive(Debug, Clone)]
pub struct InputMsg {
    /// Id of the field that produced the message.
    pub id: i64,
    /// The new unmasked value.
    pub value: Option<String>,
}

/// Published when a value is committed: on Enter, or on blur when the
/// value differs from the snapshot captured at focus time.
#[derive(Debug, Clone)]
pub struct ChangeMsg {
    /// Id of the field that produced the message.
    pub id: i64,
    /// The committed unmasked value.
    pub value: Option<String>,
}

/// Published when the field gains focus.
#[derive(Debug, Clone)]
pub struct FocusMsg {
    /// Id of the field that gained focus.
    pub id: i64,
}

/// Published when the field loses focus.
#[derive(Debug, Clone)]
pub struct BlurMsg {
    /// Id of the field that lost focus.
    pub id: i64,
}

/// Published for every key press handled while the field is focused.
#[derive(Debug, Clone)]
pub struct KeyDownMsg {
    /// Id of the field that handled the key.
    pub id: i64,
    /// The pressed key.
    pub key: KeyCode,
    /// Modifiers held during the press.
    pub modifiers: KeyModifiers,
}

/// Internal deferred message: re-focuses the field on the render pass
/// after a clear, mirroring how a pointer-driven clear hands focus back
/// to the input.
#[derive(Debug, Clone)]
pub struct RefocusMsg {
    /// Id of the field to refocus.
    pub id: i64,
}

/// Clipboard paste payload.
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Clipboard paste failure; the text is recorded as the field error.
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

/// How typed characters are echoed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EchoMode {
    /// Text is displayed as typed.
    Normal,
    /// Every rune is displayed as the echo character.
    Password,
    /// Nothing is displayed while runes are entered.
    Hidden,
}

/// The kind of content the field holds.
///
/// Kinds with a picker-style presentation keep the label permanently
/// floated; [`ContentKind::Password`] engages the echo mask;
/// [`ContentKind::Number`] filters input to numeric runes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// Free-form text (the default).
    Text,
    /// Secret text, echoed as mask characters.
    Password,
    /// Numeric input.
    Number,
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Combined date and time.
    DateTime,
    /// Calendar month.
    Month,
    /// Calendar week.
    Week,
    /// Color value.
    Color,
    /// File path.
    File,
}

impl ContentKind {
    /// Kinds whose rendered value always occupies the slot, keeping the
    /// label floated even while the field is empty.
    pub fn keeps_label_floated(self) -> bool {
        matches!(
            self,
            ContentKind::Date
                | ContentKind::Time
                | ContentKind::DateTime
                | ContentKind::Month
                | ContentKind::Week
                | ContentKind::Color
                | ContentKind::File
        )
    }

    /// Whether the kind accepts `c` as input. Rejected runes raise the
    /// field's bad-input flag.
    pub(crate) fn accepts(self, c: char) -> bool {
        match self {
            ContentKind::Number => {
                c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
            }
            _ => true,
        }
    }
}

/// Character counter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterMode {
    /// No counter.
    #[default]
    Off,
    /// Count against the field's own limit (mask capacity or char limit);
    /// a bare count when the field has neither.
    On,
    /// Count against an explicit maximum.
    Max(usize),
}

/// Validator hook: returns an error message for invalid values.
pub type ValidateFunc = Box<dyn Fn(&str) -> Result<(), String> + Send>;

/// Command resolving immediately to `msg`.
pub(crate) fn emit_msg<M: Send + 'static>(msg: M) -> Cmd {
    Box::pin(async move { Some(Box::new(msg) as Msg) })
}

/// Command delivering `msg` after the next render pass has settled.
pub(crate) fn defer_msg<M: Send + Clone + 'static>(msg: M) -> Cmd {
    use bubbletea_rs::tick as bubbletea_tick;
    use std::time::Duration;
    bubbletea_tick(Duration::from_nanos(1), move |_| Box::new(msg.clone()) as Msg)
}

/// Command resolving to nothing.
pub(crate) fn noop() -> Cmd {
    Box::pin(async { None })
}

/// Folds a command list: none, the single command, or a batch.
pub(crate) fn emit_all(mut cmds: Vec<Cmd>) -> Option<Cmd> {
    match cmds.len() {
        0 => None,
        1 => Some(cmds.remove(0)),
        _ => Some(bubbletea_rs::batch(cmds)),
    }
}
