//! Domain events emitted by the Engine for external consumers
//!
//! The headless runner turns these into NDJSON lines.

use gendesign_core::DesignOption;
use serde::Serialize;

use crate::results::RequestId;

/// Events broadcast after each message processing cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EngineEvent {
    /// A generation request started
    Loading { request_id: RequestId },

    /// Results for the in-flight request arrived
    Results {
        request_id: RequestId,
        designs: Vec<DesignOption>,
    },

    /// The in-flight request failed
    Error {
        request_id: RequestId,
        message: String,
    },

    /// Engine is shutting down
    Shutdown,
}
