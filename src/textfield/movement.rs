//! Caret movement and word-wise deletion.

use super::model::Model;
use super::types::EchoMode;

impl Model {
    // Deletes everything before the caret.
    pub(super) fn delete_before_cursor(&mut self) {
        if self.readonly {
            return;
        }
        let pos = self.pos;
        let Some(v) = self.value.as_mut() else {
            return;
        };
        if pos < v.len() {
            v.drain(..pos);
        } else {
            v.clear();
        }
        self.err = self.validate_runes(self.runes());
        self.bad_input = false;
        self.offset = 0;
        self.set_cursor(0);
    }

    // Deletes everything after the caret.
    pub(super) fn delete_after_cursor(&mut self) {
        if self.readonly {
            return;
        }
        let pos = self.pos;
        let Some(v) = self.value.as_mut() else {
            return;
        };
        v.truncate(pos);
        self.err = self.validate_runes(self.runes());
        self.bad_input = false;
        self.cursor_end();
    }

    // Deletes the word before the caret. With a non-normal echo mode word
    // boundaries are not visible, so the whole head is removed instead.
    pub(super) fn delete_word_backward(&mut self) {
        if self.readonly || self.pos == 0 || self.runes().is_empty() {
            return;
        }

        if self.echo_mode != EchoMode::Normal {
            self.delete_before_cursor();
            return;
        }

        let old_pos = self.pos;

        self.pos -= 1;
        while self.pos > 0 && self.runes()[self.pos].is_whitespace() {
            self.pos -= 1;
        }
        while self.pos > 0 && !self.runes()[self.pos].is_whitespace() {
            self.pos -= 1;
        }
        if self.pos > 0 {
            self.pos += 1; // keep the separating space
        }

        let start = self.pos;
        if let Some(v) = self.value.as_mut() {
            v.drain(start..old_pos);
        }
        self.err = self.validate_runes(self.runes());
        self.bad_input = false;
        self.handle_overflow();
    }

    // Deletes the word after the caret; same echo-mode collapse as above.
    pub(super) fn delete_word_forward(&mut self) {
        if self.readonly || self.pos >= self.runes().len() || self.runes().is_empty() {
            return;
        }

        if self.echo_mode != EchoMode::Normal {
            self.delete_after_cursor();
            return;
        }

        let old_pos = self.pos;
        let mut end_pos = self.pos;

        while end_pos < self.runes().len() && self.runes()[end_pos].is_whitespace() {
            end_pos += 1;
        }
        while end_pos < self.runes().len() && !self.runes()[end_pos].is_whitespace() {
            end_pos += 1;
        }

        if let Some(v) = self.value.as_mut() {
            v.drain(old_pos..end_pos);
        }
        self.err = self.validate_runes(self.runes());
        self.bad_input = false;
        self.set_cursor(old_pos);
    }

    // Moves the caret to the start of the previous word.
    pub(super) fn word_backward(&mut self) {
        if self.pos == 0 || self.runes().is_empty() {
            return;
        }

        if self.echo_mode != EchoMode::Normal {
            self.cursor_start();
            return;
        }

        let mut i = self.pos - 1;
        while i > 0 && self.runes()[i].is_whitespace() {
            i -= 1;
        }
        while i > 0 && !self.runes()[i - 1].is_whitespace() {
            i -= 1;
        }
        self.set_cursor(i);
    }

    // Moves the caret past the end of the next word.
    pub(super) fn word_forward(&mut self) {
        if self.pos >= self.runes().len() || self.runes().is_empty() {
            return;
        }

        if self.echo_mode != EchoMode::Normal {
            self.cursor_end();
            return;
        }

        let mut i = self.pos;
        while i < self.runes().len() && self.runes()[i].is_whitespace() {
            i += 1;
        }
        while i < self.runes().len() && !self.runes()[i].is_whitespace() {
            i += 1;
        }
        self.set_cursor(i);
    }
}
