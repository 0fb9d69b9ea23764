//! Configuration types
//!
//! Defines `Settings` and its per-section sub-types.

use serde::{Deserialize, Serialize};

/// Global application settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub generator: GeneratorSettings,

    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Generation endpoint settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GeneratorSettings {
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the `generateContent` API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
            temperature: default_temperature(),
            api_key_env: default_api_key_env(),
        }
    }
}

fn default_model() -> String {
    gendesign_gen::DEFAULT_MODEL.to_string()
}

fn default_endpoint() -> String {
    gendesign_gen::DEFAULT_ENDPOINT.to_string()
}

fn default_temperature() -> f64 {
    gendesign_gen::DEFAULT_TEMPERATURE
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

/// Appearance persistence settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StorageSettings {
    /// Appearance file path; empty = `{data_local_dir}/gendesign/appearance.json`
    #[serde(default)]
    pub appearance_file: String,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Spinner frame interval in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Show the key hint footer
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            show_key_hints: true,
        }
    }
}

fn default_tick_ms() -> u64 {
    100
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.generator.model, "gemini-2.5-flash");
        assert_eq!(settings.generator.api_key_env, "GEMINI_API_KEY");
        assert_eq!(settings.generator.temperature, 0.8);
        assert!(settings.storage.appearance_file.is_empty());
        assert_eq!(settings.ui.tick_ms, 100);
        assert!(settings.ui.show_key_hints);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[generator]
model = "gemini-2.5-pro"
"#,
        )
        .unwrap();
        assert_eq!(settings.generator.model, "gemini-2.5-pro");
        assert_eq!(settings.generator.temperature, 0.8);
        assert_eq!(settings.ui, UiSettings::default());
    }
}
