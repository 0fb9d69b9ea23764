//! Message types for the application (TEA pattern)

use gendesign_core::{DesignOption, GenerationError};

use crate::input_key::InputKey;
use crate::results::RequestId;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit immediately (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Form Messages
    // ─────────────────────────────────────────────────────────
    FocusNextField,
    FocusPrevField,
    /// Character typed into the focused text field
    FormInput(char),
    FormBackspace,
    /// Clear the focused text field
    FormClear,
    IncreaseMaxCost,
    DecreaseMaxCost,
    /// Jump to the lowest selectable cost
    MinMaxCost,
    /// Jump to the highest selectable cost
    MaxMaxCost,
    NextStrength,
    PrevStrength,
    NextMaterialSuggestion,
    PrevMaterialSuggestion,
    /// Submit the form (ignored when incomplete or busy)
    SubmitForm,

    // ─────────────────────────────────────────────────────────
    // Generation Results
    // ─────────────────────────────────────────────────────────
    DesignsGenerated {
        request_id: RequestId,
        options: Vec<DesignOption>,
    },
    DesignGenerationFailed {
        request_id: RequestId,
        error: GenerationError,
    },

    // ─────────────────────────────────────────────────────────
    // Results Panel Navigation
    // ─────────────────────────────────────────────────────────
    /// Move keyboard focus between the form and results panels
    TogglePanel,
    FocusForm,
    SelectNextCard,
    SelectPrevCard,
    SelectCardUp,
    SelectCardDown,

    // ─────────────────────────────────────────────────────────
    // Modal Messages
    // ─────────────────────────────────────────────────────────
    /// Open the read-only detail view of the selected card
    OpenDetail,
    CloseDetail,
    /// Open the appearance editor for the selected card
    OpenAppearanceEditor,
    EditorFocusNext,
    EditorFocusPrev,
    EditorCyclePrev,
    EditorCycleNext,
    EditorInput(char),
    EditorBackspace,
    /// Enter in the editor: activates the focused button or advances focus
    EditorConfirm,
    SaveAppearance,
    CancelAppearance,
}
