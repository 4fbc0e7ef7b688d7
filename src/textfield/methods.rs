//! State accessors, derived predicates, and the update loop.

use super::model::{paste, Model};
use super::types::{
    defer_msg, emit_all, emit_msg, noop, BlurMsg, ChangeMsg, ContentKind, CounterMode, EchoMode,
    FocusMsg, InputMsg, KeyDownMsg, PasteErrMsg, PasteMsg, RefocusMsg, ValidateFunc,
};
use crate::{deprecation, loading, mask};
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;

impl Model {
    /// Returns the field's unique identifier, carried by every outbound
    /// message.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the current unmasked value, or `None` when the field holds
    /// null (never set, or cleared).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_textfield::textfield::new;
    ///
    /// let mut field = new();
    /// assert!(field.value().is_none());
    /// let _ = field.set_value(Some("hello"));
    /// assert_eq!(field.value().as_deref(), Some("hello"));
    /// ```
    pub fn value(&self) -> Option<String> {
        self.value_string()
    }

    pub(super) fn value_string(&self) -> Option<String> {
        self.value.as_ref().map(|v| v.iter().collect())
    }

    pub(super) fn runes(&self) -> &[char] {
        self.value.as_deref().unwrap_or(&[])
    }

    /// Sets the bound value.
    ///
    /// With a mask configured, the stored value is the normalized unmasked
    /// form; when normalization alters the supplied text, the returned
    /// command reports the effective value back to the host after the next
    /// render pass.
    pub fn set_value(&mut self, s: Option<&str>) -> Option<Cmd> {
        let Some(raw) = s else {
            self.apply_clear_state();
            return None;
        };

        let stored = match &self.mask {
            Some(p) => p.normalize(raw),
            None => raw.to_string(),
        };
        let runes: Vec<char> = stored.chars().collect();
        let err = self.validate_runes(&runes);
        self.store_value(runes, err);
        self.bad_input = false;

        if stored != raw {
            return Some(defer_msg(InputMsg {
                id: self.id,
                value: self.value_string(),
            }));
        }
        None
    }

    // Stores a rune buffer, enforcing the char limit. The caret moves to
    // the end when the buffer was empty or the old position overruns.
    pub(super) fn store_value(&mut self, runes: Vec<char>, err: Option<String>) {
        self.err = err;

        let was_empty = self.runes().is_empty();

        let mut runes = runes;
        if self.char_limit > 0 && runes.len() > self.char_limit as usize {
            runes.truncate(self.char_limit as usize);
        }
        self.value = Some(runes);

        if (self.pos == 0 && was_empty) || self.pos > self.runes().len() {
            self.set_cursor(self.runes().len());
        }

        self.handle_overflow();
    }

    /// Returns the caret position as a rune index into the unmasked value.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the caret, clamping to the value length.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.runes().len());
        self.handle_overflow();
    }

    /// Moves the caret to the start of the value.
    pub fn cursor_start(&mut self) {
        self.set_cursor(0);
    }

    /// Moves the caret to the end of the value.
    pub fn cursor_end(&mut self) {
        self.set_cursor(self.runes().len());
    }

    /// Returns whether the field has keyboard focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Focuses the field.
    ///
    /// The first transition out of the blurred state captures the value
    /// snapshot that blur compares against and publishes a [`FocusMsg`];
    /// focusing an already focused field only restarts the caret blink.
    /// Disabled fields ignore the call.
    pub fn focus(&mut self) -> Cmd {
        if self.disabled {
            return noop();
        }

        let mut cmds: Vec<Cmd> = Vec::new();
        if !self.focus {
            self.focus = true;
            self.initial_value = self.value_string();
            cmds.push(emit_msg(FocusMsg { id: self.id }));
        }
        if let Some(blink) = self.cursor.focus() {
            cmds.push(blink);
        }
        emit_all(cmds).unwrap_or_else(noop)
    }

    /// Blurs the field.
    ///
    /// Publishes a [`BlurMsg`], and a [`ChangeMsg`] iff the value differs
    /// from the snapshot captured at focus time — so a change is committed
    /// at most once per focus/blur cycle. Blurring an already blurred
    /// field is a no-op.
    pub fn blur(&mut self) -> Option<Cmd> {
        if !self.focus {
            return None;
        }
        self.focus = false;
        self.cursor.blur();

        let mut cmds: Vec<Cmd> = vec![emit_msg(BlurMsg { id: self.id })];
        if self.initial_value != self.value_string() {
            cmds.push(emit_msg(ChangeMsg {
                id: self.id,
                value: self.value_string(),
            }));
        }
        self.initial_value = None;
        emit_all(cmds)
    }

    /// Clears the field: the value becomes null, an [`InputMsg`] with a
    /// null payload is published, and focus returns to the field on the
    /// render pass after the clear.
    ///
    /// Readonly and disabled fields ignore the call.
    pub fn clear(&mut self) -> Option<Cmd> {
        if self.disabled || self.readonly {
            return None;
        }
        self.apply_clear_state();
        emit_all(vec![
            emit_msg(InputMsg {
                id: self.id,
                value: None,
            }),
            defer_msg(RefocusMsg { id: self.id }),
        ])
    }

    /// Resets the value to null without publishing anything.
    pub fn reset(&mut self) {
        self.apply_clear_state();
    }

    pub(super) fn apply_clear_state(&mut self) {
        self.value = None;
        self.pos = 0;
        self.offset = 0;
        self.offset_right = 0;
        self.bad_input = false;
        self.err = None;
    }

    /// Startup hook for hosts: returns the focus command when `autofocus`
    /// is set.
    pub fn start(&mut self) -> Option<Cmd> {
        if self.autofocus && !self.disabled {
            return Some(self.focus());
        }
        None
    }

    // --- configuration -----------------------------------------------------

    /// Sets the label text.
    pub fn set_label(&mut self, label: Option<&str>) {
        self.label.text = label.map(str::to_string);
    }

    /// Sets the placeholder shown while the field is empty.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    /// Sets the prefix affix.
    pub fn set_prefix(&mut self, prefix: Option<&str>) {
        self.prefix = prefix.map(str::to_string);
    }

    /// Sets the suffix affix.
    pub fn set_suffix(&mut self, suffix: Option<&str>) {
        self.suffix = suffix.map(str::to_string);
    }

    /// Sets the display width of the text slot, in cells.
    pub fn set_width(&mut self, width: i32) {
        self.width = width;
        self.handle_overflow();
    }

    /// Sets the maximum number of stored runes. 0 disables the limit.
    pub fn set_char_limit(&mut self, limit: i32) {
        self.char_limit = limit;
    }

    /// Sets the echo mode.
    pub fn set_echo_mode(&mut self, mode: EchoMode) {
        self.echo_mode = mode;
    }

    /// Sets the content kind. [`ContentKind::Password`] also engages the
    /// password echo mode.
    pub fn set_kind(&mut self, kind: ContentKind) {
        self.kind = kind;
        if kind == ContentKind::Password {
            self.echo_mode = EchoMode::Password;
        }
    }

    /// Sets the counter configuration.
    pub fn set_counter(&mut self, mode: CounterMode) {
        self.counter_mode = mode;
    }

    /// Enables or disables the clear affordance.
    pub fn set_clearable(&mut self, clearable: bool) {
        self.clearable = clearable;
    }

    /// Sets the accent color and propagates it to the label and the
    /// loading strip.
    pub fn set_color(&mut self, color: Color) {
        self.label.focused_style = Style::new().foreground(color.clone());
        self.loader.style = Style::new().foreground(color.clone());
        self.color = color;
    }

    /// Sets the format mask. The current value is re-normalized through
    /// the new pattern; `None` removes masking.
    pub fn set_mask(&mut self, pattern: Option<&str>) {
        self.mask = pattern.map(mask::Pattern::new);
        if let (Some(p), Some(current)) = (self.mask.clone(), self.value_string()) {
            let normalized: Vec<char> = p.normalize(&current).chars().collect();
            let err = self.validate_runes(&normalized);
            self.store_value(normalized, err);
        }
        self.handle_overflow();
    }

    /// Returns the active mask pattern, if any.
    pub fn mask_pattern(&self) -> Option<&mask::Pattern> {
        self.mask.as_ref()
    }

    /// Sets the hint shown in the details footer while focused.
    pub fn set_hint(&mut self, hint: Option<&str>) {
        self.hint = hint.map(str::to_string);
    }

    /// Installs the validator, which runs on every edit.
    pub fn set_validate(&mut self, validate: ValidateFunc) {
        self.validate = Some(validate);
    }

    /// Starts or stops the loading strip, returning the command that
    /// drives the animation.
    pub fn set_loading(&mut self, loading: bool) -> Option<Cmd> {
        if loading {
            self.loader.start()
        } else {
            self.loader.stop();
            None
        }
    }

    /// Legacy alias for the `filled` variant.
    #[deprecated(note = "use the `filled` field instead")]
    pub fn set_box(&mut self, on: bool) {
        if on {
            deprecation::deprecate("box", "filled");
        }
        self.legacy_box = on;
    }

    /// Legacy alias for the `outlined` variant.
    #[deprecated(note = "use the `outlined` field instead")]
    pub fn set_outline(&mut self, on: bool) {
        if on {
            deprecation::deprecate("outline", "outlined");
        }
        self.legacy_outline = on;
    }

    // --- derived state -----------------------------------------------------

    /// Returns whether the field holds a non-empty value or has recorded
    /// bad input.
    pub fn is_dirty(&self) -> bool {
        !self.runes().is_empty() || self.bad_input
    }

    /// Returns whether the label belongs in the floated position: the
    /// field is dirty, or its content kind keeps the slot occupied.
    pub fn is_label_active(&self) -> bool {
        self.is_dirty() || self.kind.keeps_label_floated()
    }

    /// Returns whether a solo variant is configured.
    pub fn is_solo(&self) -> bool {
        self.solo || self.solo_inverted
    }

    /// Returns whether the label never floats (solo or single-line).
    pub fn is_single(&self) -> bool {
        self.is_solo() || self.single_line
    }

    /// Returns whether the filled variant (or its legacy alias) is on.
    pub fn is_filled(&self) -> bool {
        self.filled || self.legacy_box
    }

    /// Returns whether the outlined variant (or its legacy alias) is on.
    pub fn is_outlined(&self) -> bool {
        self.outlined || self.legacy_outline
    }

    /// Returns whether the field draws an enclosing frame of any kind.
    pub fn is_enclosed(&self) -> bool {
        self.is_filled() || self.is_solo() || self.is_outlined() || self.full_width
    }

    // A prefix standing in for the (null or empty) value.
    pub(super) fn prefix_label(&self) -> bool {
        self.prefix.as_deref().is_some_and(|p| !p.is_empty()) && self.runes().is_empty()
    }

    /// Returns whether the label renders at all: the field has one, and
    /// either it may float, or nothing else (value, placeholder, prefix)
    /// occupies the slot.
    pub fn show_label(&self) -> bool {
        self.label.is_set()
            && (!self.is_single()
                || (!self.is_label_active() && self.placeholder.is_empty() && !self.prefix_label()))
    }

    /// Returns whether the label currently renders in the floated
    /// position.
    pub fn label_floats(&self) -> bool {
        !self.is_single()
            && (self.focus
                || self.is_label_active()
                || !self.placeholder.is_empty()
                || self.prefix_label())
    }

    /// Rune count of the value, as displayed by the counter.
    pub fn counter_len(&self) -> usize {
        self.runes().len()
    }

    pub(super) fn counter_max(&self) -> Option<usize> {
        match self.counter_mode {
            CounterMode::Off => None,
            CounterMode::Max(n) => Some(n),
            CounterMode::On => {
                if let Some(p) = &self.mask {
                    Some(p.capacity())
                } else if self.char_limit > 0 {
                    Some(self.char_limit as usize)
                } else {
                    None
                }
            }
        }
    }

    // True while a focused field's value differs from the snapshot taken
    // at focus time; blur publishes a change exactly when this holds.
    pub(super) fn has_uncommitted_edit(&self) -> bool {
        self.focus && self.initial_value != self.value_string()
    }

    pub(super) fn effective_width(&self) -> i32 {
        if self.full_width {
            0
        } else {
            self.width
        }
    }

    // The rendered (masked, not yet echoed) runes.
    pub(super) fn display_runes(&self) -> Vec<char> {
        let text: String = self.runes().iter().collect();
        match &self.mask {
            Some(p) => p.mask(&text).chars().collect(),
            None => text.chars().collect(),
        }
    }

    // Caret position in display space.
    pub(super) fn display_pos(&self) -> usize {
        match &self.mask {
            Some(p) => {
                let prefix: String = self.runes()[..self.pos.min(self.runes().len())]
                    .iter()
                    .collect();
                p.masked_cursor(&prefix)
            }
            None => self.pos,
        }
    }

    // --- update loop -------------------------------------------------------

    /// Processes a message.
    ///
    /// Keyboard input is handled while the field is focused and enabled;
    /// deferred refocus messages and loading ticks are handled regardless
    /// of focus. Returned commands carry the outbound event messages.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(refocus) = msg.downcast_ref::<RefocusMsg>() {
            if refocus.id == self.id {
                return Some(self.focus());
            }
            return None;
        }

        if msg.downcast_ref::<loading::TickMsg>().is_some() {
            return self.loader.update(&msg);
        }

        if self.disabled || !self.focus {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg);
        }

        if let Some(paste_msg) = msg.downcast_ref::<PasteMsg>() {
            let before = self.value_string();
            let runes: Vec<char> = paste_msg.0.chars().collect();
            self.insert_runes_from_user_input(runes);
            self.handle_overflow();
            if self.value_string() != before {
                return Some(emit_msg(InputMsg {
                    id: self.id,
                    value: self.value_string(),
                }));
            }
            return None;
        }

        if let Some(paste_err) = msg.downcast_ref::<PasteErrMsg>() {
            self.err = Some(paste_err.0.clone());
            return None;
        }

        let cursor_cmd = self.cursor.update(&msg);
        self.handle_overflow();
        cursor_cmd
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        let mut cmds: Vec<Cmd> = vec![emit_msg(KeyDownMsg {
            id: self.id,
            key: key_msg.key,
            modifiers: key_msg.modifiers,
        })];
        let before = self.value_string();

        if self.key_map.commit.matches(key_msg) {
            cmds.push(emit_msg(ChangeMsg {
                id: self.id,
                value: before.clone(),
            }));
        } else if self.key_map.clear.matches(key_msg) {
            if self.clearable && self.is_dirty() && !self.readonly {
                self.apply_clear_state();
                cmds.push(defer_msg(RefocusMsg { id: self.id }));
            }
        } else if self.key_map.paste.matches(key_msg) {
            if !self.readonly {
                cmds.push(paste());
            }
        } else {
            self.handle_deletion_keys(key_msg);
            self.handle_movement_keys(key_msg);
            self.handle_character_input(key_msg);
        }

        self.handle_overflow();
        if self.value_string() != before {
            cmds.push(emit_msg(InputMsg {
                id: self.id,
                value: self.value_string(),
            }));
        }
        emit_all(cmds)
    }

    fn handle_deletion_keys(&mut self, key_msg: &KeyMsg) {
        if self.readonly {
            return;
        }

        if self.key_map.delete_word_backward.matches(key_msg) {
            self.delete_word_backward();
        } else if self.key_map.delete_character_backward.matches(key_msg) {
            self.err = None;
            if !self.runes().is_empty() && self.pos > 0 {
                let pos = self.pos;
                if let Some(v) = self.value.as_mut() {
                    v.remove(pos - 1);
                }
                self.pos -= 1;
                self.err = self.validate_runes(self.runes());
                self.bad_input = false;
            }
        } else if self.key_map.delete_character_forward.matches(key_msg) {
            if !self.runes().is_empty() && self.pos < self.runes().len() {
                let pos = self.pos;
                if let Some(v) = self.value.as_mut() {
                    v.remove(pos);
                }
                self.err = self.validate_runes(self.runes());
                self.bad_input = false;
            }
        } else if self.key_map.delete_after_cursor.matches(key_msg) {
            self.delete_after_cursor();
        } else if self.key_map.delete_before_cursor.matches(key_msg) {
            self.delete_before_cursor();
        } else if self.key_map.delete_word_forward.matches(key_msg) {
            self.delete_word_forward();
        }
    }

    fn handle_movement_keys(&mut self, key_msg: &KeyMsg) {
        if self.key_map.word_backward.matches(key_msg) {
            self.word_backward();
        } else if self.key_map.character_backward.matches(key_msg) {
            if self.pos > 0 {
                self.set_cursor(self.pos - 1);
            }
        } else if self.key_map.word_forward.matches(key_msg) {
            self.word_forward();
        } else if self.key_map.character_forward.matches(key_msg) {
            if self.pos < self.runes().len() {
                self.set_cursor(self.pos + 1);
            }
        } else if self.key_map.line_start.matches(key_msg) {
            self.cursor_start();
        } else if self.key_map.line_end.matches(key_msg) {
            self.cursor_end();
        }
    }

    fn handle_character_input(&mut self, key_msg: &KeyMsg) {
        if let KeyCode::Char(ch) = key_msg.key {
            // Accept plain and shifted runes; control/alt chords belong to
            // the bindings above.
            if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                && !key_msg.modifiers.contains(KeyModifiers::ALT)
            {
                self.insert_runes_from_user_input(vec![ch]);
            }
        }
    }

    // Inserts runes at the caret, subject to readonly, content-kind
    // filtering, the char limit, and mask capacity.
    pub(super) fn insert_runes_from_user_input(&mut self, runes: Vec<char>) {
        if self.readonly || self.disabled {
            return;
        }

        let mut rejected = false;
        let accepted: Vec<char> = runes
            .into_iter()
            .filter(|&c| {
                let ok = self.kind.accepts(c) && c != '\n' && c != '\r';
                rejected |= !ok;
                ok
            })
            .collect();
        if accepted.is_empty() {
            if rejected {
                self.bad_input = true;
            }
            return;
        }

        let head: Vec<char> = self.runes()[..self.pos.min(self.runes().len())].to_vec();
        let tail: Vec<char> = self.runes()[self.pos.min(self.runes().len())..].to_vec();

        if let Some(pattern) = self.mask.clone() {
            // Normalize through the mask: runes the pattern rejects are
            // dropped and the caret lands after the last rune that fit.
            let mut candidate: String = head.iter().collect();
            candidate.extend(accepted.iter());
            let caret_prefix = pattern.normalize(&candidate);

            let mut full = candidate;
            full.extend(tail.iter());
            let mut stored: Vec<char> = pattern.normalize(&full).chars().collect();
            if self.char_limit > 0 && stored.len() > self.char_limit as usize {
                stored.truncate(self.char_limit as usize);
            }

            self.pos = caret_prefix.chars().count().min(stored.len());
            self.err = self.validate_runes(&stored);
            self.value = Some(stored);
        } else {
            let mut avail_space = if self.char_limit > 0 {
                let space = self.char_limit - self.runes().len() as i32;
                if space <= 0 {
                    return;
                }
                Some(space as usize)
            } else {
                None
            };

            let mut new_value = head;
            for r in accepted {
                new_value.push(r);
                self.pos += 1;

                if let Some(ref mut space) = avail_space {
                    *space -= 1;
                    if *space == 0 {
                        break;
                    }
                }
            }
            new_value.extend(tail);

            self.err = self.validate_runes(&new_value);
            self.value = Some(new_value);
        }

        self.bad_input = false;
        self.handle_overflow();
    }

    pub(super) fn validate_runes(&self, runes: &[char]) -> Option<String> {
        if let Some(ref validate) = self.validate {
            let value: String = runes.iter().collect();
            validate(&value).err()
        } else {
            None
        }
    }

    // Slides the horizontal window so the caret stays visible when the
    // display text is wider than the slot.
    pub(super) fn handle_overflow(&mut self) {
        let width = self.effective_width();
        let display_len = self.display_runes().len();
        let display_pos = self.display_pos();

        if width <= 0 || display_len <= width as usize {
            self.offset = 0;
            self.offset_right = display_len;
            return;
        }

        let w = width as usize;
        self.offset = self.offset.min(display_len.saturating_sub(1));
        if display_pos < self.offset {
            self.offset = display_pos;
        } else if display_pos >= self.offset + w {
            self.offset = display_pos + 1 - w;
        }
        self.offset_right = (self.offset + w).min(display_len);
    }
}

impl crate::Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        Some(self.focus())
    }

    fn blur(&mut self) -> Option<Cmd> {
        self.blur()
    }

    fn focused(&self) -> bool {
        self.focused()
    }
}
