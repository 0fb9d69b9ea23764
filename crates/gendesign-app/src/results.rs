//! Result presentation state machine
//!
//! `Idle → Loading → Results | Error`, with a new request allowed from any
//! state except `Loading`. Each request carries an id; completions for any
//! other id are ignored.

use chrono::{DateTime, Local};
use gendesign_core::prelude::*;
use gendesign_core::{AppearanceSettings, DesignOption};

use crate::appearance_store::AppearanceStore;

/// Message shown in the results panel for every generation failure
pub const USER_ERROR_MESSAGE: &str = "Gagal menghasilkan desain. Silakan coba lagi.";

/// Columns of the card grid, used for up/down selection
pub const GRID_COLUMNS: usize = 2;

/// Identifier of one generation request
pub type RequestId = u64;

/// A generated design together with its current appearance
#[derive(Debug, Clone, PartialEq)]
pub struct DesignCard {
    pub option: DesignOption,
    pub appearance: AppearanceSettings,
}

/// What the results panel shows. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultView {
    #[default]
    Idle,
    Loading {
        request_id: RequestId,
        spinner_frame: usize,
    },
    Error(String),
    Results(Vec<DesignCard>),
}

#[derive(Debug, Default)]
pub struct ResultsState {
    view: ResultView,
    next_request_id: RequestId,
    /// Selected card index (only meaningful in `Results`)
    selected: usize,
    /// When the current results arrived
    generated_at: Option<DateTime<Local>>,
}

impl ResultsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &ResultView {
        &self.view
    }

    /// A request is in flight
    pub fn is_busy(&self) -> bool {
        matches!(self.view, ResultView::Loading { .. })
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        match self.view {
            ResultView::Loading { request_id, .. } => Some(request_id),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.view {
            ResultView::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Cards of the current results; empty in every other state
    pub fn cards(&self) -> &[DesignCard] {
        match &self.view {
            ResultView::Results(cards) => cards.as_slice(),
            _ => &[],
        }
    }

    pub fn generated_at(&self) -> Option<DateTime<Local>> {
        self.generated_at
    }

    // ─────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────

    /// Starts a request, dropping any previous results or error.
    ///
    /// Returns `None` while another request is in flight.
    pub fn begin_request(&mut self) -> Option<RequestId> {
        if let Some(current) = self.in_flight() {
            warn!("Request {} still in flight, ignoring new submission", current);
            return None;
        }

        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.view = ResultView::Loading {
            request_id,
            spinner_frame: 0,
        };
        self.selected = 0;
        self.generated_at = None;
        info!("Design request {} started", request_id);
        Some(request_id)
    }

    /// Shows the generated options. Returns false for a stale id.
    pub fn complete(
        &mut self,
        request_id: RequestId,
        options: Vec<DesignOption>,
        store: &AppearanceStore,
    ) -> bool {
        if self.in_flight() != Some(request_id) {
            debug!("Ignoring stale results for request {}", request_id);
            return false;
        }

        let cards: Vec<DesignCard> = options
            .into_iter()
            .map(|option| DesignCard {
                appearance: store.load_or_default(&option.design_name),
                option,
            })
            .collect();

        info!(
            "Design request {} completed with {} options",
            request_id,
            cards.len()
        );
        self.view = ResultView::Results(cards);
        self.selected = 0;
        self.generated_at = Some(Local::now());
        true
    }

    /// Shows the generic error message. `detail` only goes to the log.
    /// Returns false for a stale id.
    pub fn fail(&mut self, request_id: RequestId, detail: &str) -> bool {
        if self.in_flight() != Some(request_id) {
            debug!("Ignoring stale failure for request {}", request_id);
            return false;
        }

        error!("Design request {} failed: {}", request_id, detail);
        self.view = ResultView::Error(USER_ERROR_MESSAGE.to_string());
        true
    }

    /// Advances the loading spinner
    pub fn tick(&mut self) {
        if let ResultView::Loading { spinner_frame, .. } = &mut self.view {
            *spinner_frame = spinner_frame.wrapping_add(1);
        }
    }

    // ─────────────────────────────────────────────────────────
    // Card Selection
    // ─────────────────────────────────────────────────────────

    pub fn selected_index(&self) -> Option<usize> {
        let len = self.cards().len();
        (len > 0).then(|| self.selected.min(len - 1))
    }

    pub fn card_mut(&mut self, index: usize) -> Option<&mut DesignCard> {
        match &mut self.view {
            ResultView::Results(cards) => cards.get_mut(index),
            _ => None,
        }
    }

    pub fn select_next(&mut self) {
        let len = self.cards().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.cards().len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    pub fn select_down(&mut self) {
        let len = self.cards().len();
        if self.selected + GRID_COLUMNS < len {
            self.selected += GRID_COLUMNS;
        }
    }

    pub fn select_up(&mut self) {
        if self.selected >= GRID_COLUMNS {
            self.selected -= GRID_COLUMNS;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gendesign_core::{HexColor, LightingScheme, VisualStyle};
    use gendesign_gen::test_utils::{test_design, test_designs};

    fn store() -> AppearanceStore {
        AppearanceStore::in_memory()
    }

    #[test]
    fn test_starts_idle() {
        let results = ResultsState::new();
        assert_eq!(results.view(), &ResultView::Idle);
        assert!(!results.is_busy());
        assert!(results.cards().is_empty());
    }

    #[test]
    fn test_begin_request_enters_loading_first() {
        let mut results = ResultsState::new();
        let id = results.begin_request().unwrap();
        assert_eq!(
            results.view(),
            &ResultView::Loading {
                request_id: id,
                spinner_frame: 0
            }
        );
        assert!(results.error_message().is_none());
        assert!(results.cards().is_empty());
    }

    #[test]
    fn test_busy_guard_rejects_second_request() {
        let mut results = ResultsState::new();
        let first = results.begin_request().unwrap();
        assert_eq!(results.begin_request(), None);
        assert_eq!(results.in_flight(), Some(first));
    }

    #[test]
    fn test_complete_builds_cards_with_stored_appearance() {
        let mut store = store();
        let red = AppearanceSettings {
            primary_color: HexColor::new(255, 0, 0),
            lighting_scheme: LightingScheme::Natural,
            visual_style: VisualStyle::Wireframe,
        };
        store.save("Desain 2", &red).unwrap();

        let mut results = ResultsState::new();
        let id = results.begin_request().unwrap();
        assert!(results.complete(id, test_designs(), &store));

        let cards = results.cards();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].appearance, AppearanceSettings::default());
        assert_eq!(cards[1].appearance, red);
        assert!(!results.is_busy());
        assert!(results.generated_at().is_some());
    }

    #[test]
    fn test_fail_shows_generic_message() {
        let mut results = ResultsState::new();
        let id = results.begin_request().unwrap();
        assert!(results.fail(id, "HTTP 500"));
        assert_eq!(results.error_message(), Some(USER_ERROR_MESSAGE));
        assert!(!results.is_busy());
        assert!(results.cards().is_empty());
    }

    #[test]
    fn test_new_request_clears_error_and_results() {
        let mut results = ResultsState::new();
        let id = results.begin_request().unwrap();
        results.fail(id, "x");

        let id = results.begin_request().unwrap();
        assert!(results.error_message().is_none());
        results.complete(id, test_designs(), &store());

        results.begin_request().unwrap();
        assert!(results.cards().is_empty());
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut results = ResultsState::new();
        let first = results.begin_request().unwrap();
        results.fail(first, "timeout");
        let second = results.begin_request().unwrap();

        assert!(!results.complete(first, test_designs(), &store()));
        assert!(!results.fail(first, "late"));
        assert_eq!(results.in_flight(), Some(second));
    }

    #[test]
    fn test_completion_outside_loading_is_ignored() {
        let mut results = ResultsState::new();
        assert!(!results.complete(1, test_designs(), &store()));
        assert_eq!(results.view(), &ResultView::Idle);
    }

    #[test]
    fn test_empty_success_is_results_state() {
        let mut results = ResultsState::new();
        let id = results.begin_request().unwrap();
        results.complete(id, Vec::new(), &store());
        assert_eq!(results.view(), &ResultView::Results(Vec::new()));
        assert_eq!(results.selected_index(), None);
    }

    #[test]
    fn test_tick_only_advances_loading() {
        let mut results = ResultsState::new();
        results.tick();
        assert_eq!(results.view(), &ResultView::Idle);

        results.begin_request();
        results.tick();
        results.tick();
        assert!(matches!(
            results.view(),
            ResultView::Loading {
                spinner_frame: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_grid_selection() {
        let mut results = ResultsState::new();
        let id = results.begin_request().unwrap();
        let mut designs = test_designs();
        designs.push(test_design("Desain 5", 40));
        results.complete(id, designs, &store());

        assert_eq!(results.selected_index(), Some(0));
        results.select_down();
        assert_eq!(results.selected_index(), Some(2));
        results.select_down();
        assert_eq!(results.selected_index(), Some(4));
        // no card below index 4
        results.select_down();
        assert_eq!(results.selected_index(), Some(4));
        results.select_up();
        assert_eq!(results.selected_index(), Some(2));
        results.select_next();
        assert_eq!(results.selected_index(), Some(3));
        results.select_prev();
        results.select_prev();
        results.select_prev();
        results.select_prev();
        assert_eq!(results.selected_index(), Some(4));
    }
}
