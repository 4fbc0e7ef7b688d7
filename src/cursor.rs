//! Blinking caret for the text field.
//!
//! The caret is a subcomponent: the field embeds it, forwards messages to
//! it, and composites its `view()` over the character at the insertion
//! point. It supports blinking, static, and hidden modes and is themed via
//! Lip Gloss styles.
//!
//! Blink ticks are routed by instance id and a monotonically increasing
//! tag, so a stale tick scheduled before a focus change or mode switch is
//! dropped instead of toggling the caret at the wrong time.

use bubbletea_rs::{tick, Cmd, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

// Instance ids keep blink messages from leaking between carets.
static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed)
}

const DEFAULT_BLINK_SPEED: Duration = Duration::from_millis(530);

/// Message that kicks off blinking after a caret gains focus.
#[derive(Debug, Clone)]
pub struct InitialBlinkMsg;

/// Message that toggles the caret's blink phase.
#[derive(Debug, Clone)]
pub struct BlinkMsg {
    /// Id of the caret instance this tick targets.
    pub id: usize,
    /// Sequence tag; ticks with a stale tag are ignored.
    pub tag: usize,
}

/// Caret display behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The caret blinks at `blink_speed`.
    Blink,
    /// The caret is shown steadily.
    Static,
    /// The caret is never shown.
    Hide,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Mode::Blink => "blink",
            Mode::Static => "static",
            Mode::Hide => "hidden",
        })
    }
}

/// Caret state and styling.
#[derive(Debug, Clone)]
pub struct Model {
    /// Time between blink phase toggles.
    pub blink_speed: Duration,
    /// Style for the caret block when it is visible.
    pub style: Style,
    /// Style for the character underneath while the block is off.
    pub text_style: Style,

    glyph: String,
    id: usize,
    focus: bool,
    // When `off` is true the block is not drawn and the underlying
    // character shows through.
    off: bool,
    tag: usize,
    mode: Mode,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            blink_speed: DEFAULT_BLINK_SPEED,
            style: Style::new(),
            text_style: Style::new(),
            glyph: " ".to_string(),
            id: next_id(),
            focus: false,
            off: true,
            tag: 0,
            mode: Mode::Blink,
        }
    }
}

impl Model {
    /// Creates a caret with default settings (blinking, unfocused).
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles blink messages. Other messages are ignored.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if msg.downcast_ref::<InitialBlinkMsg>().is_some() {
            if self.mode != Mode::Blink || !self.focus {
                return None;
            }
            return self.blink_cmd();
        }

        if let Some(blink) = msg.downcast_ref::<BlinkMsg>() {
            if self.mode != Mode::Blink || !self.focus {
                return None;
            }
            if blink.id != self.id || blink.tag != self.tag {
                return None;
            }
            self.off = !self.off;
            return self.blink_cmd();
        }

        None
    }

    /// Returns the caret mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Sets the caret mode, returning a command when blinking must restart.
    pub fn set_mode(&mut self, mode: Mode) -> Option<Cmd> {
        self.mode = mode;
        self.off = self.mode == Mode::Hide || !self.focus;
        if mode == Mode::Blink {
            return Some(blink());
        }
        None
    }

    /// Forces the caret block on or off.
    pub fn set_visible(&mut self, visible: bool) {
        self.off = !visible;
    }

    fn blink_cmd(&mut self) -> Option<Cmd> {
        if self.mode != Mode::Blink {
            return None;
        }

        self.tag += 1;
        let tag = self.tag;
        let id = self.id;
        let speed = self.blink_speed;

        Some(tick(speed, move |_| Box::new(BlinkMsg { id, tag }) as Msg))
    }

    /// Focuses the caret; returns a command when it should start blinking.
    pub fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        self.off = self.mode == Mode::Hide;
        if self.mode == Mode::Blink {
            return self.blink_cmd();
        }
        None
    }

    /// Blurs the caret, hiding the block.
    pub fn blur(&mut self) {
        self.focus = false;
        self.off = true;
    }

    /// Returns whether the caret is focused.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Sets the character rendered under the caret.
    pub fn set_char(&mut self, s: &str) {
        self.glyph = s.to_string();
    }

    /// Renders the caret (or the plain character while the block is off).
    pub fn view(&self) -> String {
        if self.mode == Mode::Hide || self.off {
            return self.text_style.clone().inline(true).render(&self.glyph);
        }
        self.style
            .clone()
            .inline(true)
            .reverse(true)
            .render(&self.glyph)
    }
}

/// A command that starts the blink loop for focused carets.
pub fn blink() -> Cmd {
    tick(Duration::from_millis(0), |_| {
        Box::new(InitialBlinkMsg) as Msg
    })
}

/// Creates a caret with default settings. Equivalent to `Model::new()`.
pub fn new() -> Model {
    Model::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_tags_are_ignored() {
        let mut m = Model::new();
        m.mode = Mode::Blink;
        m.focus = true;

        let _cmd1 = m.blink_cmd().expect("cmd1");
        let first_tag = m.tag;
        let _cmd2 = m.blink_cmd().expect("cmd2");
        assert_ne!(first_tag, m.tag, "each scheduled blink advances the tag");

        // A tick carrying the superseded tag must not toggle the phase.
        let was_off = m.off;
        let stale: Msg = Box::new(BlinkMsg {
            id: m.id,
            tag: first_tag,
        });
        assert!(m.update(&stale).is_none());
        assert_eq!(was_off, m.off);
    }

    #[test]
    fn blur_hides_the_block() {
        let mut m = Model::new();
        let _ = m.focus();
        assert!(m.focused());
        m.blur();
        assert!(!m.focused());
        assert!(m.off);
    }

    #[test]
    fn hidden_mode_renders_plain_text() {
        let mut m = Model::new();
        let _ = m.set_mode(Mode::Hide);
        m.set_char("x");
        assert_eq!(m.view(), m.text_style.clone().inline(true).render("x"));
    }
}
