//! Configuration file parsing
//!
//! Supports `.gendesign/config.toml` (or an explicit path) with
//! `[generator]`, `[storage]` and `[ui]` sections.

pub mod settings;
pub mod types;

pub use settings::{
    appearance_file_path, generator_config, init_config_dir, load_settings, load_settings_from,
    resolve_api_key, CONFIG_FILENAME, FALLBACK_API_KEY_ENV, GENDESIGN_DIR,
};
pub use types::*;
