//! Main update function - handles state transitions (TEA pattern)

use gendesign_core::{MAX_MAX_COST, MIN_MAX_COST};
use tracing::{debug, warn};

use crate::appearance_editor::{AppearanceEditorState, EditorField};
use crate::message::Message;
use crate::state::{AppPhase, AppState, UiMode};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.results.tick();
            UpdateResult::none()
        }

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Form Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNextField => {
            state.form.focus_next();
            UpdateResult::none()
        }
        Message::FocusPrevField => {
            state.form.focus_prev();
            UpdateResult::none()
        }
        Message::FormInput(c) => {
            state.form.push_char(c);
            UpdateResult::none()
        }
        Message::FormBackspace => {
            state.form.backspace();
            UpdateResult::none()
        }
        Message::FormClear => {
            state.form.clear();
            UpdateResult::none()
        }
        Message::IncreaseMaxCost => {
            state.form.increase_max_cost();
            UpdateResult::none()
        }
        Message::DecreaseMaxCost => {
            state.form.decrease_max_cost();
            UpdateResult::none()
        }
        Message::MinMaxCost => {
            state.form.set_max_cost(MIN_MAX_COST);
            UpdateResult::none()
        }
        Message::MaxMaxCost => {
            state.form.set_max_cost(MAX_MAX_COST);
            UpdateResult::none()
        }
        Message::NextStrength => {
            let next = state.form.params.strength.next();
            state.form.set_strength(next);
            UpdateResult::none()
        }
        Message::PrevStrength => {
            let prev = state.form.params.strength.prev();
            state.form.set_strength(prev);
            UpdateResult::none()
        }
        Message::NextMaterialSuggestion => {
            state.form.next_material_suggestion();
            UpdateResult::none()
        }
        Message::PrevMaterialSuggestion => {
            state.form.prev_material_suggestion();
            UpdateResult::none()
        }
        Message::SubmitForm => handle_submit(state),

        // ─────────────────────────────────────────────────────────
        // Generation Results
        // ─────────────────────────────────────────────────────────
        Message::DesignsGenerated {
            request_id,
            options,
        } => {
            state.results.complete(request_id, options, &state.store);
            UpdateResult::none()
        }

        Message::DesignGenerationFailed { request_id, error } => {
            let detail = format!("{:?}: {}", error.kind, error.detail);
            state.results.fail(request_id, &detail);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Results Panel Navigation
        // ─────────────────────────────────────────────────────────
        Message::TogglePanel => {
            state.ui_mode = match state.ui_mode {
                UiMode::Form => UiMode::Results,
                _ => UiMode::Form,
            };
            UpdateResult::none()
        }
        Message::FocusForm => {
            state.ui_mode = UiMode::Form;
            UpdateResult::none()
        }
        Message::SelectNextCard => {
            state.results.select_next();
            UpdateResult::none()
        }
        Message::SelectPrevCard => {
            state.results.select_prev();
            UpdateResult::none()
        }
        Message::SelectCardUp => {
            state.results.select_up();
            UpdateResult::none()
        }
        Message::SelectCardDown => {
            state.results.select_down();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Detail Modal
        // ─────────────────────────────────────────────────────────
        Message::OpenDetail => {
            if let Some(index) = state.results.selected_index() {
                state.detail_card = Some(index);
                state.ui_mode = UiMode::DetailModal;
            }
            UpdateResult::none()
        }
        Message::CloseDetail => {
            state.detail_card = None;
            state.ui_mode = UiMode::Results;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Appearance Modal
        // ─────────────────────────────────────────────────────────
        Message::OpenAppearanceEditor => {
            if let Some(index) = state.results.selected_index() {
                if let Some(card) = state.results.cards().get(index) {
                    state.appearance_editor = Some(AppearanceEditorState::new(
                        index,
                        card.option.design_name.clone(),
                        card.appearance,
                    ));
                    state.detail_card = None;
                    state.ui_mode = UiMode::AppearanceModal;
                }
            }
            UpdateResult::none()
        }
        Message::EditorFocusNext => with_editor(state, AppearanceEditorState::focus_next),
        Message::EditorFocusPrev => with_editor(state, AppearanceEditorState::focus_prev),
        Message::EditorCyclePrev => with_editor(state, AppearanceEditorState::cycle_prev),
        Message::EditorCycleNext => with_editor(state, AppearanceEditorState::cycle_next),
        Message::EditorInput(c) => with_editor(state, |editor| editor.push_hex_char(c)),
        Message::EditorBackspace => with_editor(state, AppearanceEditorState::backspace_hex),
        Message::EditorConfirm => {
            let Some(editor) = state.appearance_editor.as_mut() else {
                return UpdateResult::none();
            };
            match editor.focus {
                EditorField::Save => UpdateResult::message(Message::SaveAppearance),
                EditorField::Cancel => UpdateResult::message(Message::CancelAppearance),
                _ => {
                    editor.focus_next();
                    UpdateResult::none()
                }
            }
        }
        Message::SaveAppearance => {
            handle_save_appearance(state);
            UpdateResult::none()
        }
        Message::CancelAppearance => {
            state.appearance_editor = None;
            state.ui_mode = UiMode::Results;
            UpdateResult::none()
        }
    }
}

fn with_editor(state: &mut AppState, f: impl FnOnce(&mut AppearanceEditorState)) -> UpdateResult {
    if let Some(editor) = state.appearance_editor.as_mut() {
        f(editor);
    }
    UpdateResult::none()
}

/// Start a request if the form is complete and nothing is in flight
fn handle_submit(state: &mut AppState) -> UpdateResult {
    if !state.form.is_complete() {
        debug!("Submit ignored: prompt or material is empty");
        return UpdateResult::none();
    }

    match state.results.begin_request() {
        Some(request_id) => UpdateResult::action(UpdateAction::GenerateDesigns {
            request_id,
            params: state.form.snapshot(),
        }),
        None => UpdateResult::none(),
    }
}

/// Apply the draft to its card and persist it. A failed write is logged;
/// the card keeps the new look for this session either way.
fn handle_save_appearance(state: &mut AppState) {
    let Some(editor) = state.appearance_editor.take() else {
        return;
    };
    state.ui_mode = UiMode::Results;

    if let Err(e) = state.store.save(&editor.design_name, &editor.draft) {
        warn!(
            "Failed to persist appearance for {:?}: {}",
            editor.design_name, e
        );
    }

    match state.results.card_mut(editor.card_index) {
        Some(card) if card.option.design_name == editor.design_name => {
            card.appearance = editor.draft;
        }
        _ => debug!(
            "Card {} no longer shows {:?}, draft only persisted",
            editor.card_index, editor.design_name
        ),
    }
}
