//! # gendesign-app - Application State and Orchestration
//!
//! TEA (The Elm Architecture) layer of the design studio. Owns the form,
//! the result presentation state machine, the appearance store and the
//! modal states, and dispatches generation requests to a
//! [`DesignGenerator`](gendesign_gen::DesignGenerator).
//!
//! ## Public API
//!
//! - [`Engine`] - Shared orchestration for the TUI and headless runners
//! - [`AppState`] - Complete application state (the Model)
//! - [`Message`] - All application events
//! - [`handler::update()`] - The TEA update function
//! - [`UpdateAction`] - Side effects requested by `update()`
//! - [`ResultsState`], [`ResultView`] - Result presentation state machine
//! - [`FormState`] - Design request form
//! - [`AppearanceStore`] - Per-design appearance persistence
//! - [`AppearanceEditorState`] - Appearance modal draft
//! - [`InputKey`] - Terminal-independent key events

pub mod actions;
pub mod appearance_editor;
pub mod appearance_store;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod results;
pub mod signals;
pub mod state;

pub use appearance_editor::{AppearanceEditorState, EditorField};
pub use appearance_store::{
    storage_key, AppearanceStore, FileKvStore, KeyValueStore, MemoryKvStore,
};
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use form::{FormField, FormState, MATERIAL_SUGGESTIONS};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use results::{DesignCard, RequestId, ResultView, ResultsState, USER_ERROR_MESSAGE};
pub use state::{AppPhase, AppState, UiMode};
