//! Full-frame rendering tests for the view function

use super::view;
use crate::test_utils::{create_state_with_results, create_test_state, TestTerminal};
use crate::widgets::{IDLE_MESSAGE, LOADING_MESSAGE};
use gendesign_app::handler::update;
use gendesign_app::state::{AppState, UiMode};
use gendesign_app::{Message, USER_ERROR_MESSAGE};
use std::path::PathBuf;

fn draw(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::with_size(120, 40);
    term.draw_with(|frame| view(frame, state));
    term
}

/// Apply a message and any follow-up messages it produces
fn apply(state: &mut AppState, message: Message) {
    let mut next = Some(message);
    while let Some(msg) = next {
        next = update(state, msg).message;
    }
}

#[test]
fn test_initial_screen() {
    let term = draw(&create_test_state());

    assert!(term.buffer_contains("Perangkat Lunak Desain Generatif"));
    assert!(term.buffer_contains("Parameter Desain"));
    assert!(term.buffer_contains("Hasil Generasi Desain"));
    assert!(term.buffer_contains(IDLE_MESSAGE));
    assert!(term.buffer_contains("Tab pindah"));
}

#[test]
fn test_loading_replaces_placeholder() {
    let mut state = create_test_state();
    apply(&mut state, Message::SubmitForm);
    let term = draw(&state);

    assert!(term.buffer_contains(LOADING_MESSAGE));
    assert!(term.buffer_contains("Memproses..."));
    assert!(!term.buffer_contains(IDLE_MESSAGE));
}

#[test]
fn test_error_with_log_path() {
    let mut state = create_test_state().with_log_file(PathBuf::from("/var/log/gd.log"));
    let id = state.results.begin_request().unwrap();
    state.results.fail(id, "boom");
    let term = draw(&state);

    assert!(term.buffer_contains(USER_ERROR_MESSAGE));
    assert!(term.buffer_contains("/var/log/gd.log"));
    assert!(!term.buffer_contains(LOADING_MESSAGE));
}

#[test]
fn test_results_grid() {
    let term = draw(&create_state_with_results());
    assert!(term.buffer_contains("Desain 1"));
    assert!(term.buffer_contains("Desain 4"));
    assert!(term.buffer_contains("95%"));
    assert!(!term.buffer_contains(IDLE_MESSAGE));
}

#[test]
fn test_detail_modal_over_results() {
    let mut state = create_state_with_results();
    state.ui_mode = UiMode::Results;
    apply(&mut state, Message::SelectNextCard);
    apply(&mut state, Message::OpenDetail);
    let term = draw(&state);

    assert!(term.buffer_contains("Detail Desain"));
    assert!(term.buffer_contains("Perkiraan Biaya"));
    assert!(term.buffer_contains("Deskripsi Desain 2."));
    assert!(term.buffer_contains("Esc/Enter tutup"));
}

#[test]
fn test_appearance_modal_over_results() {
    let mut state = create_state_with_results();
    state.ui_mode = UiMode::Results;
    apply(&mut state, Message::OpenAppearanceEditor);
    let term = draw(&state);

    assert!(term.buffer_contains("Kustomisasi Tampilan"));
    assert!(term.buffer_contains("Ubah preferensi visual untuk Desain 1"));
    assert!(term.buffer_contains("Ctrl+S simpan"));
}

#[test]
fn test_footer_hidden_by_setting() {
    let mut state = create_test_state();
    state.settings.ui.show_key_hints = false;
    let term = draw(&state);
    assert!(!term.buffer_contains("Tab pindah"));
}

#[test]
fn test_narrow_terminal_renders() {
    let state = create_state_with_results();
    let mut term = TestTerminal::with_size(60, 40);
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Parameter Desain"));
    assert!(term.buffer_contains("Desain 1"));
}
