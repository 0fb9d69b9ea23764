//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Message shown for every generation failure, whatever the cause.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Gagal berkomunikasi dengan AI. Periksa konsol untuk detailnya.";

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Domain Errors
    // ─────────────────────────────────────────────────────────────
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("No API key found (looked in: {searched})")]
    MissingApiKey { searched: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn missing_api_key(searched: impl Into<String>) -> Self {
        Self::MissingApiKey {
            searched: searched.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Generation Errors
// ─────────────────────────────────────────────────────────────────

/// Optional diagnostic cause of a [`GenerationError`].
///
/// Only ever logged; the UI shows the same message for every kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationErrorKind {
    /// Request never produced an HTTP response
    Transport,
    /// Endpoint answered with a non-success status code
    Status(u16),
    /// Response carried no candidate text
    EmptyResponse,
    /// Candidate text did not match the declared output schema
    Schema,
}

/// The external generation call failed, returned malformed data, or could
/// not be parsed.
#[derive(Debug, Clone, Error)]
#[error("Gagal berkomunikasi dengan AI. Periksa konsol untuk detailnya.")]
pub struct GenerationError {
    pub kind: GenerationErrorKind,
    /// Technical detail for the log file
    pub detail: String,
}

impl GenerationError {
    pub fn new(kind: GenerationErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    pub fn transport(detail: impl Into<String>) -> Self {
        Self::new(GenerationErrorKind::Transport, detail)
    }

    pub fn status(code: u16, detail: impl Into<String>) -> Self {
        Self::new(GenerationErrorKind::Status(code), detail)
    }

    pub fn empty_response(detail: impl Into<String>) -> Self {
        Self::new(GenerationErrorKind::EmptyResponse, detail)
    }

    pub fn schema(detail: impl Into<String>) -> Self {
        Self::new(GenerationErrorKind::Schema, detail)
    }
}

// ─────────────────────────────────────────────────────────────────
// Store Errors
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Read,
    Write,
    Serialize,
}

/// Persistence read/write failure. Never surfaced to the user.
#[derive(Debug, Clone, Error)]
#[error("Store {kind:?} failed: {detail}")]
pub struct StoreError {
    pub kind: StoreErrorKind,
    pub detail: String,
}

impl StoreError {
    pub fn read(detail: impl Into<String>) -> Self {
        Self {
            kind: StoreErrorKind::Read,
            detail: detail.into(),
        }
    }

    pub fn write(detail: impl Into<String>) -> Self {
        Self {
            kind: StoreErrorKind::Write,
            detail: detail.into(),
        }
    }

    pub fn serialize(detail: impl Into<String>) -> Self {
        Self {
            kind: StoreErrorKind::Serialize,
            detail: detail.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
