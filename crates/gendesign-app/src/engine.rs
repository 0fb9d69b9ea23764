//! Engine - shared orchestration state for TUI and headless runners
//!
//! Owns the application state, the message channel and the design
//! generator. Frontends feed it input messages and read state (TUI) or
//! subscribe to [`EngineEvent`]s (headless).

use std::sync::Arc;

use gendesign_gen::DesignGenerator;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info};

use crate::appearance_store::{AppearanceStore, FileKvStore};
use crate::config::{self, Settings};
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::results::{RequestId, ResultView};
use crate::state::AppState;

/// Lightweight snapshot of state for change detection.
#[derive(Debug, Clone, Copy, PartialEq)]
struct StateSnapshot {
    in_flight: Option<RequestId>,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            in_flight: state.results.in_flight(),
        }
    }
}

pub struct Engine<G> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, key reader).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    generator: Arc<G>,

    event_tx: broadcast::Sender<EngineEvent>,
}

impl<G> Engine<G>
where
    G: DesignGenerator + Send + Sync + 'static,
{
    /// Create an engine around an existing state.
    pub fn new(state: AppState, generator: G) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (event_tx, _) = broadcast::channel(64);

        Self {
            state,
            msg_tx,
            msg_rx,
            generator: Arc::new(generator),
            event_tx,
        }
    }

    /// Create an engine with the file-backed appearance store named in
    /// `settings` and the current log file attached to the state.
    pub fn from_settings(settings: Settings, generator: G) -> Self {
        let store_path = config::appearance_file_path(&settings.storage);
        info!("Appearance store: {}", store_path.display());
        let store = AppearanceStore::new(FileKvStore::new(store_path));

        let mut state = AppState::with_settings(settings, store);
        if let Ok(log_file) = gendesign_core::logging::get_current_log_file() {
            state = state.with_log_file(log_file);
        }

        Self::new(state, generator)
    }

    /// Subscribe to engine events.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle and emit
    /// events for any request lifecycle change.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(&mut self.state, msg, &self.msg_tx, &self.generator);

        let post = StateSnapshot::capture(&self.state);
        if pre != post {
            self.emit_events(pre, post);
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn generator(&self) -> &Arc<G> {
        &self.generator
    }

    pub fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);
        info!("Engine shut down");
    }

    fn emit_events(&self, pre: StateSnapshot, post: StateSnapshot) {
        if let Some(finished) = pre.in_flight {
            if post.in_flight != Some(finished) {
                match self.state.results.view() {
                    ResultView::Results(cards) => self.emit(EngineEvent::Results {
                        request_id: finished,
                        designs: cards.iter().map(|card| card.option.clone()).collect(),
                    }),
                    ResultView::Error(message) => self.emit(EngineEvent::Error {
                        request_id: finished,
                        message: message.clone(),
                    }),
                    _ => {}
                }
            }
        }

        if let Some(started) = post.in_flight {
            if pre.in_flight != Some(started) {
                self.emit(EngineEvent::Loading {
                    request_id: started,
                });
            }
        }
    }

    fn emit(&self, event: EngineEvent) {
        // No subscribers is normal for the TUI
        if self.event_tx.send(event).is_err() {
            debug!("No engine event subscribers");
        }
    }
}
