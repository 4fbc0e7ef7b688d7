//! Tests for the text field.

use super::*;

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

fn key(code: KeyCode) -> KeyMsg {
    KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }
}

fn ctrl(c: char) -> KeyMsg {
    KeyMsg {
        key: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
    }
}

fn type_str(field: &mut Model, s: &str) {
    for ch in s.chars() {
        let _ = field.update(Box::new(key(KeyCode::Char(ch))));
    }
}

#[test]
fn new_default_values() {
    let field = new();

    assert!(field.value().is_none());
    assert_eq!(field.position(), 0);
    assert!(!field.focused());
    assert!(!field.is_dirty());
    assert_eq!(field.placeholder, "");
    assert_eq!(field.char_limit, 0);
    assert_eq!(field.width, 0);
    assert_eq!(field.echo_mode, EchoMode::Normal);
    assert!(field.err.is_none());
    assert_eq!(field.counter_mode, CounterMode::Off);
}

#[test]
fn set_and_get_value() {
    let mut field = new();
    let _ = field.set_value(Some("hello world"));

    assert_eq!(field.value().as_deref(), Some("hello world"));
    assert_eq!(field.position(), 11);

    let _ = field.set_value(None);
    assert!(field.value().is_none());
    assert_eq!(field.position(), 0);
}

#[test]
fn char_limit_truncates() {
    let mut field = new();
    field.set_char_limit(5);
    let _ = field.set_value(Some("hello world"));

    assert_eq!(field.value().as_deref(), Some("hello"));
}

#[test]
fn cursor_clamps_and_moves() {
    let mut field = new();
    let _ = field.set_value(Some("hello"));

    field.set_cursor(2);
    assert_eq!(field.position(), 2);

    field.set_cursor(100);
    assert_eq!(field.position(), 5);

    field.cursor_start();
    assert_eq!(field.position(), 0);
    field.cursor_end();
    assert_eq!(field.position(), 5);
}

#[test]
fn focus_and_blur_toggle_state() {
    let mut field = new();
    assert!(!field.focused());

    let _ = field.focus();
    assert!(field.focused());

    let _ = field.blur();
    assert!(!field.focused());
}

#[test]
fn disabled_field_cannot_focus() {
    let mut field = new();
    field.disabled = true;
    let _ = field.focus();
    assert!(!field.focused());
}

#[test]
fn typing_mutates_value_and_emits() {
    let mut field = new();
    let _ = field.focus();

    let cmd = field.update(Box::new(key(KeyCode::Char('h'))));
    assert!(cmd.is_some(), "a handled key always produces messages");
    assert_eq!(field.value().as_deref(), Some("h"));

    type_str(&mut field, "ey");
    assert_eq!(field.value().as_deref(), Some("hey"));
    assert_eq!(field.position(), 3);
}

#[test]
fn blurred_field_ignores_input() {
    let mut field = new();
    let cmd = field.update(Box::new(key(KeyCode::Char('x'))));
    assert!(cmd.is_none());
    assert!(field.value().is_none());
}

#[test]
fn disabled_field_ignores_input() {
    let mut field = new();
    let _ = field.focus();
    field.disabled = true;
    let _ = field.update(Box::new(key(KeyCode::Char('x'))));
    assert!(field.value().is_none());
}

#[test]
fn readonly_field_moves_caret_but_keeps_value() {
    let mut field = new();
    let _ = field.set_value(Some("abc"));
    field.readonly = true;
    let _ = field.focus();

    let _ = field.update(Box::new(key(KeyCode::Char('x'))));
    assert_eq!(field.value().as_deref(), Some("abc"));

    let _ = field.update(Box::new(key(KeyCode::Left)));
    assert_eq!(field.position(), 2);

    let _ = field.update(Box::new(key(KeyCode::Backspace)));
    assert_eq!(field.value().as_deref(), Some("abc"));
}

#[test]
fn change_committed_once_per_focus_blur_cycle() {
    let mut field = new();

    // Type "abc" into an empty field, then blur: the value differs from
    // the focus-time snapshot, so blur carries exactly one commit.
    let _ = field.focus();
    assert!(!field.has_uncommitted_edit());
    type_str(&mut field, "abc");
    assert!(field.has_uncommitted_edit());
    assert_eq!(field.value().as_deref(), Some("abc"));

    assert!(field.blur().is_some());
    // Blurring again does nothing; the cycle is over.
    assert!(field.blur().is_none());

    // A cycle without edits has nothing to commit.
    let _ = field.focus();
    assert!(!field.has_uncommitted_edit());
    type_str(&mut field, "x");
    let _ = field.update(Box::new(key(KeyCode::Backspace)));
    assert!(!field.has_uncommitted_edit());
}

#[test]
fn dirty_iff_non_empty_or_bad_input() {
    let mut field = new();
    assert!(!field.is_dirty());

    let _ = field.set_value(Some(""));
    assert!(!field.is_dirty());

    let _ = field.set_value(Some("x"));
    assert!(field.is_dirty());

    // A numeric field that rejects a rune records bad input and reads as
    // dirty even though it stores nothing.
    let mut numeric = new();
    numeric.set_kind(ContentKind::Number);
    let _ = numeric.focus();
    let _ = numeric.update(Box::new(key(KeyCode::Char('q'))));
    assert!(numeric.value().is_none() || numeric.value().as_deref() == Some(""));
    assert!(numeric.is_dirty());

    // An accepted rune clears the flag.
    let _ = numeric.update(Box::new(key(KeyCode::Char('4'))));
    assert_eq!(numeric.value().as_deref(), Some("4"));
    let _ = numeric.update(Box::new(key(KeyCode::Backspace)));
    assert!(!numeric.is_dirty());
}

#[test]
fn clear_nulls_value_and_schedules_refocus() {
    let mut field = new();
    field.set_clearable(true);
    let _ = field.set_value(Some("hello"));

    let cmd = field.clear();
    assert!(cmd.is_some());
    assert!(field.value().is_none());
    assert_eq!(field.position(), 0);
    assert!(!field.is_dirty());
}

#[test]
fn clear_key_binding_respects_clearable() {
    let mut field = new();
    let _ = field.set_value(Some("hello"));
    let _ = field.focus();

    let _ = field.update(Box::new(ctrl('x')));
    assert_eq!(field.value().as_deref(), Some("hello"), "not clearable yet");

    field.set_clearable(true);
    let _ = field.update(Box::new(ctrl('x')));
    assert!(field.value().is_none());
}

#[tokio::test]
async fn refocus_message_restores_focus() {
    let mut field = new();
    field.set_clearable(true);
    let _ = field.set_value(Some("hello"));
    let _ = field.clear();

    // The deferred refocus lands as a message on the next pass.
    let id = field.id();
    let _ = field.update(Box::new(RefocusMsg { id }));
    assert!(field.focused());
}

#[tokio::test]
async fn focus_publishes_focus_message() {
    let mut field = new();
    // A static caret produces no blink command, leaving the focus
    // notification as the single command.
    let _ = field.cursor.set_mode(crate::cursor::Mode::Static);
    let cmd = field.focus();
    let msg = cmd.await.expect("focus publishes a message");
    let focus = msg.downcast_ref::<FocusMsg>().expect("FocusMsg");
    assert_eq!(focus.id, field.id());
}

#[tokio::test]
async fn blur_without_edit_publishes_only_blur() {
    let mut field = new();
    let _ = field.cursor.set_mode(crate::cursor::Mode::Static);
    let _ = field.focus();
    let cmd = field.blur().expect("blur publishes a message");
    let msg = cmd.await.expect("resolved message");
    assert!(msg.downcast_ref::<BlurMsg>().is_some());
}

#[test]
fn enter_commits_current_value() {
    let mut field = new();
    let _ = field.focus();
    type_str(&mut field, "hi");

    let cmd = field.update(Box::new(key(KeyCode::Enter)));
    assert!(cmd.is_some());
    assert_eq!(field.value().as_deref(), Some("hi"));
}

#[test]
fn echo_modes_transform_display() {
    let mut field = new();
    let _ = field.set_value(Some("secret"));

    assert!(field.view().contains("secret"));

    field.set_echo_mode(EchoMode::Password);
    let masked = field.view();
    assert!(!masked.contains("secret"));
    assert!(masked.contains(&field.echo_character.to_string().repeat(6)));

    field.set_echo_mode(EchoMode::Hidden);
    let hidden = field.view();
    assert!(!hidden.contains("secret"));
    assert!(!hidden.contains(&field.echo_character.to_string()));
}

#[test]
fn password_kind_engages_echo() {
    let mut field = new();
    field.set_kind(ContentKind::Password);
    assert_eq!(field.echo_mode, EchoMode::Password);
}

#[test]
fn placeholder_shows_only_while_empty() {
    let mut field = new();
    field.set_placeholder("Type here...");

    assert!(field.view().contains("Type here"));

    let _ = field.set_value(Some("text"));
    assert!(!field.view().contains("Type here"));
    assert!(field.view().contains("text"));
}

#[test]
fn label_visibility_predicate() {
    // Labeled multi-line field: label always shows.
    let mut field = new();
    field.set_label(Some("Name"));
    assert!(field.show_label());
    assert!(!field.label_floats(), "resting while blurred and empty");

    let _ = field.focus();
    assert!(field.label_floats(), "floats while focused");
    let _ = field.blur();

    let _ = field.set_value(Some("x"));
    assert!(field.label_floats(), "floats while dirty");

    // Single-line: label shows only while nothing else fills the slot.
    let mut single = new();
    single.set_label(Some("Name"));
    single.single_line = true;
    assert!(single.show_label());
    assert!(!single.label_floats());

    let _ = single.set_value(Some("x"));
    assert!(!single.show_label(), "hidden once the field is dirty");

    let mut placeholder = new();
    placeholder.set_label(Some("Name"));
    placeholder.single_line = true;
    placeholder.set_placeholder("hint");
    assert!(!placeholder.show_label(), "hidden behind a placeholder");

    let mut prefixed = new();
    prefixed.set_label(Some("Name"));
    prefixed.single_line = true;
    prefixed.set_prefix(Some("$"));
    assert!(!prefixed.show_label(), "hidden behind a prefix");
}

#[test]
fn picker_kinds_keep_label_floated() {
    let mut field = new();
    field.set_label(Some("When"));
    field.set_kind(ContentKind::Date);
    assert!(field.is_label_active());
    assert!(field.label_floats());
}

#[test]
fn counter_renders_len_against_max() {
    let mut field = new();
    field.set_counter(CounterMode::Max(5));
    let _ = field.set_value(Some("hello"));

    assert!(field.view().contains("5 / 5"));

    field.set_counter(CounterMode::On);
    field.set_char_limit(8);
    assert!(field.view().contains("5 / 8"));

    field.set_counter(CounterMode::Off);
    assert!(!field.view().contains("5 /"));
}

#[test]
fn masked_value_stores_unmasked_and_renders_masked() {
    let mut field = new();
    field.set_mask(Some("(###) ###-####"));
    let _ = field.focus();
    type_str(&mut field, "5551234567");

    assert_eq!(field.value().as_deref(), Some("5551234567"));
    assert!(field.view().contains("(555) 123-4567"));
}

#[test]
fn masked_input_drops_rejected_runes() {
    let mut field = new();
    field.set_mask(Some("####"));
    let _ = field.focus();
    type_str(&mut field, "12x34");

    assert_eq!(field.value().as_deref(), Some("1234"));
    assert_eq!(field.position(), 4);
}

#[test]
fn masked_caret_skips_literals() {
    let mut field = new();
    field.set_mask(Some("##-##"));
    let _ = field.focus();
    type_str(&mut field, "12");

    assert_eq!(field.position(), 2);
    assert_eq!(field.display_pos(), 3, "display caret sits past the dash");
}

#[test]
fn mask_capacity_bounds_value() {
    let mut field = new();
    field.set_mask(Some("##-##"));
    let _ = field.focus();
    type_str(&mut field, "123456");

    assert_eq!(field.value().as_deref(), Some("1234"));
}

#[test]
fn external_set_value_is_normalized_through_mask() {
    let mut field = new();
    field.set_mask(Some("##/##"));
    let cmd = field.set_value(Some("12/31"));
    assert_eq!(field.value().as_deref(), Some("1231"));
    assert!(cmd.is_some(), "normalization changed the supplied text");

    let cmd = field.set_value(Some("1231"));
    assert!(cmd.is_none(), "already normalized");
}

#[test]
fn deprecated_variant_aliases_behave_as_replacements() {
    let mut field = new();
    assert!(!field.is_filled());
    assert!(!field.is_outlined());

    #[allow(deprecated)]
    field.set_box(true);
    #[allow(deprecated)]
    field.set_outline(true);

    assert!(field.is_filled());
    assert!(field.is_outlined());
    assert!(field.is_enclosed());
}

#[test]
fn variant_predicates() {
    let mut field = new();
    field.solo_inverted = true;
    assert!(field.is_solo());
    assert!(field.is_single());
    assert!(field.is_enclosed());

    let mut full = new();
    full.full_width = true;
    assert!(full.is_enclosed());
    assert_eq!(full.effective_width(), 0);
}

#[test]
fn outlined_view_draws_a_border() {
    let mut field = new();
    field.outlined = true;
    field.set_width(10);
    let view = field.view();
    assert!(view.lines().count() >= 3, "border adds frame lines");
}

#[test]
fn overflow_window_follows_the_caret() {
    let mut field = new();
    field.set_width(5);
    let _ = field.set_value(Some("abcdefghij"));

    // Caret at the end: the window shows the tail.
    assert_eq!(field.position(), 10);
    assert!(field.offset > 0);
    assert!(field.offset_right <= 10);

    field.cursor_start();
    assert_eq!(field.offset, 0);
}

#[test]
fn word_wise_editing() {
    let mut field = new();
    let _ = field.focus();
    type_str(&mut field, "hello brave world");

    let _ = field.update(Box::new(KeyMsg {
        key: KeyCode::Backspace,
        modifiers: KeyModifiers::ALT,
    }));
    assert_eq!(field.value().as_deref(), Some("hello brave "));

    let _ = field.update(Box::new(KeyMsg {
        key: KeyCode::Left,
        modifiers: KeyModifiers::ALT,
    }));
    assert_eq!(field.position(), 6);

    let _ = field.update(Box::new(ctrl('k')));
    assert_eq!(field.value().as_deref(), Some("hello "));

    let _ = field.update(Box::new(ctrl('u')));
    assert_eq!(field.value().as_deref(), Some(""));
}

#[test]
fn kill_line_bindings_validate() {
    let mut field = new();
    field.set_validate(Box::new(|s: &str| {
        if s.len() < 3 {
            Err("too short".to_string())
        } else {
            Ok(())
        }
    }));
    let _ = field.focus();
    type_str(&mut field, "okay");
    assert!(field.err.is_none());

    let _ = field.update(Box::new(key(KeyCode::Backspace)));
    let _ = field.update(Box::new(key(KeyCode::Backspace)));
    assert_eq!(field.err.as_deref(), Some("too short"));
}

#[test]
fn loading_strip_renders_under_the_field() {
    let mut field = new();
    field.set_width(10);
    assert!(!field.loader.is_active());

    let cmd = field.set_loading(true);
    assert!(cmd.is_some());
    assert!(field.loader.is_active());
    assert!(field.view().lines().count() >= 2);

    assert!(field.set_loading(false).is_none());
    assert!(!field.loader.is_active());
}

#[test]
fn affixes_and_icons_render() {
    let mut field = new();
    field.set_prefix(Some("$"));
    field.set_suffix(Some("USD"));
    field.prepend_icon = Some("↑".to_string());
    field.append_icon = Some("☼".to_string());
    let _ = field.set_value(Some("12"));

    let view = field.view();
    assert!(view.contains('$'));
    assert!(view.contains("USD"));
    assert!(view.contains('↑'));
    assert!(view.contains('☼'));
}

#[test]
fn clear_icon_appears_only_when_dirty() {
    let mut field = new();
    field.set_clearable(true);
    assert!(!field.view().contains('✕'));

    let _ = field.set_value(Some("x"));
    assert!(field.view().contains('✕'));
}

#[test]
fn details_footer_shows_error_over_hint() {
    let mut field = new();
    field.set_hint(Some("helpful"));
    let _ = field.focus();
    assert!(field.view().contains("helpful"));

    field.err = Some("broken".to_string());
    let view = field.view();
    assert!(view.contains("broken"));
    assert!(!view.contains("helpful"));

    field.hide_details = true;
    assert!(!field.view().contains("broken"));
}

#[test]
fn autofocus_start_hook() {
    let mut field = new();
    assert!(field.start().is_none());

    field.autofocus = true;
    assert!(field.start().is_some());
    assert!(field.focused());
}

#[test]
fn scenario_type_abc_blur_commits_abc() {
    let mut field = new();
    let _ = field.focus();
    type_str(&mut field, "abc");

    assert!(field.has_uncommitted_edit());
    assert_eq!(field.value().as_deref(), Some("abc"));
    assert!(field.blur().is_some());
    assert!(!field.focused());
}

#[test]
fn scenario_counter_full() {
    let mut field = new();
    field.set_counter(CounterMode::Max(5));
    let _ = field.set_value(Some("hello"));
    assert_eq!(field.counter_len(), 5);
    assert!(field.view().contains("5 / 5"));
}
