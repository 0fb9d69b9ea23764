//! Per-design appearance persistence
//!
//! Settings are stored as JSON strings in a flat key-value store, one entry
//! per design name. The key is derived from the display name, so two names
//! that differ only in whitespace share an entry.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use gendesign_core::prelude::*;
use gendesign_core::{AppearanceSettings, StoreError};
use regex::Regex;

/// Prefix of every appearance entry in the key-value store
pub const KEY_PREFIX: &str = "appearance-settings-";

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Maps a design name to its storage key.
///
/// Every run of whitespace becomes a single `-`: `"Frame A"` and
/// `"Frame  A"` both map to `appearance-settings-Frame-A`.
pub fn storage_key(design_name: &str) -> String {
    format!(
        "{KEY_PREFIX}{}",
        WHITESPACE_RUN.replace_all(design_name, "-")
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Key-Value Backends
// ─────────────────────────────────────────────────────────────────────────────

/// Minimal string key-value store.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), StoreError>;
}

/// In-memory store, used when no data directory is available and in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryKvStore {
    entries: HashMap<String, String>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryKvStore {
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a single JSON object file.
///
/// The file is created on first write. Writes go to a temp file that is
/// then renamed over the original. A file that no longer parses is moved
/// to [`FileKvStore::backup_path`] by the next write.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    path: PathBuf,
}

impl FileKvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> std::result::Result<HashMap<String, String>, StoreError> {
        match self.read_content()? {
            Some(content) => self.parse(&content),
            None => Ok(HashMap::new()),
        }
    }

    /// File content, or `None` when the file is missing or blank
    fn read_content(&self) -> std::result::Result<Option<String>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| StoreError::read(format!("{}: {e}", self.path.display())))?;
        Ok((!content.trim().is_empty()).then_some(content))
    }

    fn parse(&self, content: &str) -> std::result::Result<HashMap<String, String>, StoreError> {
        serde_json::from_str(content)
            .map_err(|e| StoreError::read(format!("{}: {e}", self.path.display())))
    }

    /// Path a corrupt store file is moved to before it is rewritten
    pub fn backup_path(&self) -> PathBuf {
        self.path.with_extension("json.bak")
    }

    /// Move an unparseable file aside so the next write starts fresh
    fn quarantine(&self, err: &StoreError) {
        let backup = self.backup_path();
        warn!(
            "Appearance store is corrupt, moving it to {}: {}",
            backup.display(),
            err.detail
        );
        if let Err(e) = std::fs::rename(&self.path, &backup) {
            warn!("Failed to back up {}: {}", self.path.display(), e);
        }
    }

    fn write_all(&self, entries: &HashMap<String, String>) -> std::result::Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::write(format!("{}: {e}", parent.display())))?;
        }

        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| StoreError::serialize(e.to_string()))?;

        let temp_path = self.path.with_extension("json.tmp");
        std::fs::write(&temp_path, content)
            .map_err(|e| StoreError::write(format!("{}: {e}", temp_path.display())))?;
        std::fs::rename(&temp_path, &self.path)
            .map_err(|e| StoreError::write(format!("{}: {e}", self.path.display())))?;
        Ok(())
    }
}

impl KeyValueStore for FileKvStore {
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), StoreError> {
        let mut entries = match self.read_content()? {
            Some(content) => self.parse(&content).unwrap_or_else(|e| {
                self.quarantine(&e);
                HashMap::new()
            }),
            None => HashMap::new(),
        };
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Appearance Store
// ─────────────────────────────────────────────────────────────────────────────

/// Reads and writes [`AppearanceSettings`] keyed by design name.
pub struct AppearanceStore {
    backend: Box<dyn KeyValueStore>,
}

impl AppearanceStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Store that forgets everything on exit
    pub fn in_memory() -> Self {
        Self::new(MemoryKvStore::new())
    }

    /// Stored settings for `design_name`.
    ///
    /// A missing entry, a read failure and a malformed value all yield
    /// `None`; failures are logged.
    pub fn load(&self, design_name: &str) -> Option<AppearanceSettings> {
        let key = storage_key(design_name);
        let raw = match self.backend.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read appearance for {:?}: {}", design_name, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(settings) => Some(settings),
            Err(e) => {
                warn!("Ignoring malformed appearance entry {}: {}", key, e);
                None
            }
        }
    }

    /// Stored settings, or the defaults when there are none
    pub fn load_or_default(&self, design_name: &str) -> AppearanceSettings {
        self.load(design_name).unwrap_or_default()
    }

    /// Persists `settings` for `design_name`, overwriting any previous entry
    /// under the same key.
    pub fn save(
        &mut self,
        design_name: &str,
        settings: &AppearanceSettings,
    ) -> std::result::Result<(), StoreError> {
        let value =
            serde_json::to_string(settings).map_err(|e| StoreError::serialize(e.to_string()))?;
        self.backend.set(&storage_key(design_name), &value)?;
        debug!("Saved appearance for {:?}", design_name);
        Ok(())
    }
}

impl fmt::Debug for AppearanceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppearanceStore").finish_non_exhaustive()
    }
}
