//! The text field model.

use super::keymap::{default_key_map, KeyMap};
#[cfg(feature = "clipboard-support")]
use super::types::PasteMsg;
use super::types::{ContentKind, CounterMode, EchoMode, PasteErrMsg, ValidateFunc};
use crate::cursor::{new as cursor_new, Model as Cursor};
use crate::{counter, label, loading, mask};
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicI64, Ordering};

// Instance ids route outbound messages back to the right field when a
// host embeds several of them.
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// A decorated single-line text field.
///
/// The model composes a caret, a floating label, a character counter and a
/// loading strip around an editable line of text. State is mutated through
/// `update()` and the setter methods; `view()` renders label, affixes,
/// icons, the text line, and the details footer from the current state.
///
/// # Examples
///
/// ```rust
/// use bubbletea_textfield::textfield::{new, CounterMode};
///
/// let mut field = new();
/// field.set_label(Some("Card number"));
/// field.set_mask(Some("#### #### #### ####"));
/// field.set_counter(CounterMode::On);
/// field.set_width(30);
/// let _cmd = field.focus();
/// ```
///
/// For secret input:
///
/// ```rust
/// use bubbletea_textfield::textfield::{new, ContentKind};
///
/// let mut field = new();
/// field.set_kind(ContentKind::Password);
/// let _ = field.set_value(Some("hunter2"));
/// assert!(!field.view().contains("hunter2"));
/// ```
pub struct Model {
    /// An error surfaced by the validator or clipboard plumbing; rendered
    /// in the details footer.
    pub err: Option<String>,

    /// Floating label subcomponent (text plus styles).
    pub label: label::Model,
    /// Placeholder shown while the field is empty.
    pub placeholder: String,
    /// Prefix affix rendered before the text slot.
    pub prefix: Option<String>,
    /// Suffix affix rendered after the text slot.
    pub suffix: Option<String>,
    /// Icon rendered outside the frame, before the field.
    pub prepend_icon: Option<String>,
    /// Icon rendered inside the frame, before the text slot.
    pub prepend_inner_icon: Option<String>,
    /// Icon rendered inside the frame, after the text slot.
    pub append_icon: Option<String>,
    /// Icon rendered outside the frame, after the field.
    pub append_outer_icon: Option<String>,
    /// Icon for the clear affordance.
    pub clear_icon: String,
    /// Whether the clear affordance is available.
    pub clearable: bool,

    /// Character counter subcomponent (styles).
    pub counter: counter::Model,
    /// Counter configuration.
    pub counter_mode: CounterMode,
    /// Loading strip subcomponent.
    pub loader: loading::Model,

    /// The kind of content the field holds.
    pub kind: ContentKind,
    /// Accent color applied to the label, caret line and frame while
    /// focused. Set through [`Model::set_color`] so subcomponents pick it
    /// up too.
    pub color: Color,

    /// Filled (shaded slot) layout variant.
    pub filled: bool,
    /// Outlined (bordered) layout variant.
    pub outlined: bool,
    /// Solo (standalone box) layout variant.
    pub solo: bool,
    /// Solo variant with inverted shading.
    pub solo_inverted: bool,
    /// Removes the solo box border.
    pub flat: bool,
    /// Stretches the field without width padding.
    pub full_width: bool,
    /// Keeps the label from floating.
    pub single_line: bool,
    /// Mirrors the affix/icon layout.
    pub reverse: bool,

    /// Ignores all input and mutes the styling.
    pub disabled: bool,
    /// Allows caret movement but no edits.
    pub readonly: bool,
    /// Focus the field from [`Model::start`].
    pub autofocus: bool,
    /// Suppresses the details footer.
    pub hide_details: bool,
    /// Hint shown in the details footer while focused (and no error).
    pub hint: Option<String>,

    /// Display width of the text slot in cells; 0 disables the limit.
    pub width: i32,
    /// Maximum number of stored runes; 0 disables the limit.
    pub char_limit: i32,
    /// How typed runes are echoed.
    pub echo_mode: EchoMode,
    /// The rune used by [`EchoMode::Password`].
    pub echo_character: char,

    /// Key bindings.
    pub key_map: KeyMap,
    /// Caret subcomponent.
    pub cursor: Cursor,

    /// Style of the value text.
    pub text_style: Style,
    /// Style of the placeholder text.
    pub placeholder_style: Style,
    /// Style of the prefix/suffix affixes.
    pub affix_style: Style,
    /// Style of icons.
    pub icon_style: Style,
    /// Style of the error message in the details footer.
    pub error_style: Style,
    /// Style of the hint in the details footer.
    pub hint_style: Style,

    pub(super) value: Option<Vec<char>>,
    pub(super) pos: usize,
    pub(super) focus: bool,
    pub(super) initial_value: Option<String>,
    pub(super) bad_input: bool,
    pub(super) mask: Option<mask::Pattern>,
    pub(super) validate: Option<ValidateFunc>,
    pub(super) offset: usize,
    pub(super) offset_right: usize,
    pub(super) legacy_box: bool,
    pub(super) legacy_outline: bool,
    pub(super) id: i64,
}

/// Creates a text field with default settings.
///
/// The field starts blurred with a null value. Call `focus()` to direct
/// keyboard input at it.
///
/// # Examples
///
/// ```rust
/// use bubbletea_textfield::textfield::new;
///
/// let mut field = new();
/// assert!(field.value().is_none());
/// assert!(!field.focused());
/// ```
pub fn new() -> Model {
    let accent = Color::from("12");
    let mut label = label::Model::new();
    label.focused_style = Style::new().foreground(accent.clone());
    let mut loader = loading::Model::new();
    loader.style = Style::new().foreground(accent.clone());

    Model {
        err: None,
        label,
        placeholder: String::new(),
        prefix: None,
        suffix: None,
        prepend_icon: None,
        prepend_inner_icon: None,
        append_icon: None,
        append_outer_icon: None,
        clear_icon: "✕".to_string(),
        clearable: false,
        counter: counter::Model::new(),
        counter_mode: CounterMode::Off,
        loader,
        kind: ContentKind::Text,
        color: accent,
        filled: false,
        outlined: false,
        solo: false,
        solo_inverted: false,
        flat: false,
        full_width: false,
        single_line: false,
        reverse: false,
        disabled: false,
        readonly: false,
        autofocus: false,
        hide_details: false,
        hint: None,
        width: 0,
        char_limit: 0,
        echo_mode: EchoMode::Normal,
        echo_character: '•',
        key_map: default_key_map(),
        cursor: cursor_new(),
        text_style: Style::new(),
        placeholder_style: Style::new().foreground(Color::from("240")),
        affix_style: Style::new().foreground(Color::from("245")),
        icon_style: Style::new().foreground(Color::from("245")),
        error_style: Style::new().foreground(Color::from("9")),
        hint_style: Style::new().foreground(Color::from("240")),
        value: None,
        pos: 0,
        focus: false,
        initial_value: None,
        bad_input: false,
        mask: None,
        validate: None,
        offset: 0,
        offset_right: 0,
        legacy_box: false,
        legacy_outline: false,
        id: next_id(),
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

/// A command that starts the caret blink loop; return it from your
/// application's `init()` (or after focusing the field).
pub fn blink() -> Cmd {
    crate::cursor::blink()
}

/// A command that reads the system clipboard and reports back with a
/// [`PasteMsg`](super::types::PasteMsg) or
/// [`PasteErrMsg`](super::types::PasteErrMsg).
///
/// Requires the default `clipboard-support` feature; without it the
/// command resolves to the error message.
pub fn paste() -> Cmd {
    use bubbletea_rs::tick as bubbletea_tick;
    use std::time::Duration;
    bubbletea_tick(Duration::from_nanos(1), |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: Result<String, String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("Failed to create clipboard context: {}", e))?;
                ctx.get_contents()
                    .map_err(|e| format!("Failed to read clipboard: {}", e))
            })();
            match res {
                Ok(s) => Box::new(PasteMsg(s)) as Msg,
                Err(e) => Box::new(PasteErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Box::new(PasteErrMsg("Clipboard support not enabled".to_string())) as Msg
        }
    })
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
