//! Key event handlers for different UI modes

use crate::form::FormField;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit works everywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode {
        UiMode::Form => handle_key_form(state, key),
        UiMode::Results => handle_key_results(key),
        UiMode::DetailModal => handle_key_detail(key),
        UiMode::AppearanceModal => handle_key_appearance(key),
    }
}

/// Handle key events while the form has focus
fn handle_key_form(state: &AppState, key: InputKey) -> Option<Message> {
    let focus = state.form.focus;
    match key {
        InputKey::Tab | InputKey::Down => Some(Message::FocusNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::FocusPrevField),
        InputKey::Esc => Some(Message::TogglePanel),
        InputKey::Enter => Some(Message::SubmitForm),

        // Material suggestions
        InputKey::CharCtrl('n') if focus == FormField::Material => {
            Some(Message::NextMaterialSuggestion)
        }
        InputKey::CharCtrl('p') if focus == FormField::Material => {
            Some(Message::PrevMaterialSuggestion)
        }

        // Text editing
        InputKey::Char(c) if focus.is_text() => Some(Message::FormInput(c)),
        InputKey::Backspace if focus.is_text() => Some(Message::FormBackspace),
        InputKey::CharCtrl('u') if focus.is_text() => Some(Message::FormClear),

        // Cost slider
        InputKey::Right | InputKey::Char('+' | 'l') if focus == FormField::MaxCost => {
            Some(Message::IncreaseMaxCost)
        }
        InputKey::Left | InputKey::Char('-' | 'h') if focus == FormField::MaxCost => {
            Some(Message::DecreaseMaxCost)
        }
        InputKey::Home if focus == FormField::MaxCost => Some(Message::MinMaxCost),
        InputKey::End if focus == FormField::MaxCost => Some(Message::MaxMaxCost),

        // Strength selector
        InputKey::Right | InputKey::Char('l') if focus == FormField::Strength => {
            Some(Message::NextStrength)
        }
        InputKey::Left | InputKey::Char('h') if focus == FormField::Strength => {
            Some(Message::PrevStrength)
        }

        InputKey::Char('q') if focus == FormField::Submit => Some(Message::Quit),

        _ => None,
    }
}

/// Handle key events while the card grid has focus
fn handle_key_results(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Right | InputKey::Char('l') => Some(Message::SelectNextCard),
        InputKey::Left | InputKey::Char('h') => Some(Message::SelectPrevCard),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectCardDown),
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectCardUp),
        InputKey::Enter => Some(Message::OpenDetail),
        InputKey::Char('c') => Some(Message::OpenAppearanceEditor),
        // Regenerate with the current form values
        InputKey::Char('g') => Some(Message::SubmitForm),
        InputKey::Tab | InputKey::BackTab | InputKey::Esc => Some(Message::FocusForm),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in the detail modal
fn handle_key_detail(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Enter | InputKey::Char('q') => Some(Message::CloseDetail),
        InputKey::Char('c') => Some(Message::OpenAppearanceEditor),
        _ => None,
    }
}

/// Handle key events in the appearance modal
fn handle_key_appearance(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CancelAppearance),
        InputKey::CharCtrl('s') => Some(Message::SaveAppearance),
        InputKey::Tab | InputKey::Down => Some(Message::EditorFocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::EditorFocusPrev),
        InputKey::Left => Some(Message::EditorCyclePrev),
        InputKey::Right => Some(Message::EditorCycleNext),
        InputKey::Enter => Some(Message::EditorConfirm),
        InputKey::Backspace => Some(Message::EditorBackspace),
        InputKey::Char(c) => Some(Message::EditorInput(c)),
        _ => None,
    }
}
