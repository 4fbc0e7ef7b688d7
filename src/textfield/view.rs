//! Rendering for the text field.
//!
//! A render produces up to four lines: the floated label, the decorated
//! input line (icons, affixes, text slot, frame), the loading strip, and
//! the details footer (error/hint plus counter). Everything is derived
//! from the current model state; rendering has no side effects.

use super::model::Model;
use super::types::{CounterMode, EchoMode};
use lipgloss_extras::lipgloss;
use lipgloss_extras::lipgloss::width as lg_width;
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthStr;

impl Model {
    /// Renders the field in its current state.
    pub fn view(&self) -> String {
        let mut lines: Vec<String> = Vec::new();

        if self.show_label() && self.label_floats() {
            lines.push(self.label.view(self.label_focused(), self.disabled));
        }

        lines.push(self.decorated_line());

        if self.loader.is_active() {
            lines.push(self.loader.view(self.strip_width()));
        }

        if let Some(details) = self.details_line() {
            lines.push(details);
        }

        lines.join("\n")
    }

    // Accent state for the floated label: focused (or invalid) fields
    // color it, single-line fields never do.
    fn label_focused(&self) -> bool {
        !self.is_single() && (self.focus || self.err.is_some())
    }

    // --- input line --------------------------------------------------------

    fn decorated_line(&self) -> String {
        let framed = self.framed_line();

        let has_outer =
            self.prepend_icon.is_some() || self.append_outer_icon.is_some();
        if !has_outer {
            return framed;
        }

        let prepend = self
            .prepend_icon
            .as_deref()
            .map(|i| format!("{} ", self.icon_style.render(i)));
        let append = self
            .append_outer_icon
            .as_deref()
            .map(|i| format!(" {}", self.icon_style.render(i)));

        let mut parts: Vec<&str> = Vec::new();
        if let Some(p) = prepend.as_deref() {
            parts.push(p);
        }
        parts.push(&framed);
        if let Some(a) = append.as_deref() {
            parts.push(a);
        }
        lipgloss::join_horizontal(lipgloss::TOP, &parts)
    }

    fn framed_line(&self) -> String {
        let line = self.input_line();

        if self.is_outlined() {
            return Style::new()
                .border_style(lipgloss::rounded_border())
                .border_foreground(self.frame_color())
                .padding(0, 1, 0, 1)
                .render(&line);
        }

        if self.is_solo() {
            if self.flat {
                return Style::new().padding(0, 1, 0, 1).render(&line);
            }
            return Style::new()
                .border_style(lipgloss::normal_border())
                .border_foreground(self.frame_color())
                .padding(0, 1, 0, 1)
                .render(&line);
        }

        line
    }

    fn frame_color(&self) -> Color {
        if self.disabled {
            Color::from("238")
        } else if self.focus {
            self.color.clone()
        } else {
            Color::from("240")
        }
    }

    fn input_line(&self) -> String {
        let mut left: Vec<String> = Vec::new();
        let mut right: Vec<String> = Vec::new();

        if let Some(icon) = self.prepend_inner_icon.as_deref() {
            left.push(self.icon_style.render(icon));
        }
        if let Some(prefix) = self.prefix.as_deref() {
            left.push(self.affix_style.render(prefix));
        }
        if let Some(suffix) = self.suffix.as_deref() {
            right.push(self.affix_style.render(suffix));
        }
        if self.clearable && self.is_dirty() && !self.disabled {
            right.push(self.icon_style.render(&self.clear_icon));
        }
        if let Some(icon) = self.append_icon.as_deref() {
            right.push(self.icon_style.render(icon));
        }

        if self.reverse {
            std::mem::swap(&mut left, &mut right);
            left.reverse();
            right.reverse();
        }

        let mut parts: Vec<String> = left;
        parts.push(self.text_slot());
        parts.extend(right);
        parts.join(" ")
    }

    // --- text slot ---------------------------------------------------------

    pub(super) fn text_slot(&self) -> String {
        // A resting label occupies the slot where the value would go.
        if self.show_label() && !self.label_floats() {
            let text = self.label.text.clone().unwrap_or_default();
            let style = if self.disabled {
                self.label.disabled_style.clone()
            } else {
                self.label.style.clone()
            };
            return self.overlay_slot(&text, &style);
        }

        if self.runes().is_empty() && !self.placeholder.is_empty() {
            let placeholder = self.placeholder.clone();
            let style = self.placeholder_style.clone();
            return self.overlay_slot(&placeholder, &style);
        }

        self.value_slot()
    }

    // Renders overlay text (placeholder or resting label): the caret sits
    // on the first rune while focused.
    fn overlay_slot(&self, text: &str, style: &Style) -> String {
        let runes: Vec<char> = text.chars().collect();
        let styled = self.with_slot_background(style);
        let mut v = String::new();
        let mut used = 0usize;

        if self.focus && !runes.is_empty() {
            let first = runes[0].to_string();
            let mut cur = self.cursor.clone();
            cur.set_char(&first);
            v.push_str(&cur.view());
            used += UnicodeWidthStr::width(first.as_str());

            let rest: String = runes[1..].iter().collect();
            if !rest.is_empty() {
                used += UnicodeWidthStr::width(rest.as_str());
                v.push_str(&styled.render(&rest));
            }
        } else {
            used += UnicodeWidthStr::width(text);
            v.push_str(&styled.render(text));
        }

        v.push_str(&self.slot_padding(used));
        v
    }

    // Renders the (echo-transformed, scrolled) value with the caret
    // composited at the insertion point.
    fn value_slot(&self) -> String {
        let display = self.display_runes();
        let start = self.offset.min(display.len());
        let end = self.offset_right.clamp(start, display.len());
        let visible: String = display[start..end].iter().collect();
        let pos = self.display_pos().saturating_sub(start);

        let shown: Vec<char> = self.echo_transform(&visible).chars().collect();
        let style = self.with_slot_background(&self.text_style);

        let mut v = String::new();
        let mut used = 0usize;

        if pos < shown.len() {
            let before: String = shown[..pos].iter().collect();
            if !before.is_empty() {
                v.push_str(&style.render(&before));
            }
            let under = shown[pos].to_string();
            let mut cur = self.cursor.clone();
            cur.set_char(&under);
            v.push_str(&cur.view());
            let after: String = shown[pos + 1..].iter().collect();
            if !after.is_empty() {
                v.push_str(&style.render(&after));
            }
            let all: String = shown.iter().collect();
            used += UnicodeWidthStr::width(all.as_str());
        } else {
            let all: String = shown.iter().collect();
            if !all.is_empty() {
                used += UnicodeWidthStr::width(all.as_str());
                v.push_str(&style.render(&all));
            }
            if self.focus {
                let mut cur = self.cursor.clone();
                cur.set_char(" ");
                v.push_str(&cur.view());
                used += 1;
            }
        }

        v.push_str(&self.slot_padding(used));
        v
    }

    pub(super) fn echo_transform(&self, v: &str) -> String {
        match self.echo_mode {
            EchoMode::Password => self
                .echo_character
                .to_string()
                .repeat(v.chars().count()),
            EchoMode::Hidden => String::new(),
            EchoMode::Normal => v.to_string(),
        }
    }

    fn slot_background(&self) -> Option<Color> {
        if self.is_filled() {
            Some(Color::from("236"))
        } else if self.solo_inverted {
            Some(Color::from("238"))
        } else {
            None
        }
    }

    fn with_slot_background(&self, base: &Style) -> Style {
        match self.slot_background() {
            Some(bg) => base.clone().background(bg),
            None => base.clone(),
        }
    }

    fn slot_padding(&self, used: usize) -> String {
        let width = self.effective_width();
        if width <= 0 {
            return String::new();
        }
        let w = width as usize;
        if used >= w {
            return String::new();
        }
        let pad = " ".repeat(w - used);
        match self.slot_background() {
            Some(bg) => Style::new().background(bg).render(&pad),
            None => pad,
        }
    }

    // --- footer ------------------------------------------------------------

    fn strip_width(&self) -> usize {
        let w = self.effective_width();
        if w > 0 {
            w as usize
        } else {
            lg_width(&self.input_line())
        }
    }

    fn details_line(&self) -> Option<String> {
        if self.hide_details {
            return None;
        }

        let message = if let Some(err) = self.err.as_deref() {
            self.error_style.render(err)
        } else if let Some(hint) = self.hint.as_deref() {
            if self.focus {
                self.hint_style.render(hint)
            } else {
                String::new()
            }
        } else {
            String::new()
        };

        let counter = if self.counter_mode == CounterMode::Off {
            String::new()
        } else {
            self.counter.view(self.counter_len(), self.counter_max())
        };

        if message.is_empty() && counter.is_empty() {
            return None;
        }

        let width = self.effective_width().max(0) as usize;
        let used = lg_width(&message) + lg_width(&counter);
        let gap = if width > used { width - used } else { 1 };
        Some(format!("{}{}{}", message, " ".repeat(gap), counter))
    }
}
