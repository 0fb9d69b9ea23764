//! Application state (Model in TEA pattern)

use std::path::PathBuf;

use crate::appearance_editor::AppearanceEditorState;
use crate::appearance_store::AppearanceStore;
use crate::config::Settings;
use crate::form::FormState;
use crate::results::{DesignCard, ResultsState};

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Keyboard focus on the input form
    #[default]
    Form,

    /// Keyboard focus on the results card grid
    Results,

    /// Read-only detail modal over the results
    DetailModal,

    /// Appearance customization modal over the results
    AppearanceModal,
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current UI mode/screen
    pub ui_mode: UiMode,

    pub phase: AppPhase,

    pub form: FormState,

    pub results: ResultsState,

    /// Persisted per-design appearance
    pub store: AppearanceStore,

    /// Card shown in the detail modal
    pub detail_card: Option<usize>,

    /// Draft edited in the appearance modal
    pub appearance_editor: Option<AppearanceEditorState>,

    /// Application settings from config file
    pub settings: Settings,

    /// Log file shown next to error messages
    pub log_file: Option<PathBuf>,
}

impl AppState {
    pub fn new(store: AppearanceStore) -> Self {
        Self::with_settings(Settings::default(), store)
    }

    pub fn with_settings(settings: Settings, store: AppearanceStore) -> Self {
        Self {
            ui_mode: UiMode::default(),
            phase: AppPhase::default(),
            form: FormState::new(),
            results: ResultsState::new(),
            store,
            detail_card: None,
            appearance_editor: None,
            settings,
            log_file: None,
        }
    }

    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = Some(log_file);
        self
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Whether the submit button is enabled
    pub fn can_submit(&self) -> bool {
        self.form.can_submit(self.results.is_busy())
    }

    /// Card currently shown in the detail modal
    pub fn detail(&self) -> Option<&DesignCard> {
        self.detail_card.and_then(|i| self.results.cards().get(i))
    }
}
