//! Settings parser for .gendesign/config.toml

use super::types::{GeneratorSettings, Settings, StorageSettings};
use gendesign_core::prelude::*;
use gendesign_gen::GeneratorConfig;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.toml";
pub const GENDESIGN_DIR: &str = ".gendesign";

/// Checked when the configured variable is unset or empty
pub const FALLBACK_API_KEY_ENV: &str = "API_KEY";

const APPEARANCE_FILENAME: &str = "appearance.json";

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from .gendesign/config.toml
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings(project_path: &Path) -> Settings {
    load_settings_from(&project_path.join(GENDESIGN_DIR).join(CONFIG_FILENAME))
}

/// Load settings from an explicit config file path
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create a commented default config file in .gendesign/
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let gendesign_dir = project_path.join(GENDESIGN_DIR);

    if !gendesign_dir.exists() {
        std::fs::create_dir_all(&gendesign_dir)
            .map_err(|e| Error::config(format!("Failed to create .gendesign dir: {}", e)))?;
    }

    let config_path = gendesign_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# gendesign configuration

[generator]
model = "gemini-2.5-flash"
endpoint = "https://generativelanguage.googleapis.com/v1beta"
temperature = 0.8
api_key_env = "GEMINI_API_KEY"   # API_KEY is checked as a fallback

[storage]
appearance_file = ""             # Empty = user data directory

[ui]
tick_ms = 100                    # Spinner frame interval
show_key_hints = true
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Derived Runtime Values
// ─────────────────────────────────────────────────────────────────────────────

/// Read the API key from the environment.
///
/// Tries the configured variable first, then `API_KEY`.
pub fn resolve_api_key(settings: &GeneratorSettings) -> Result<String> {
    let mut searched = vec![settings.api_key_env.as_str()];
    if settings.api_key_env != FALLBACK_API_KEY_ENV {
        searched.push(FALLBACK_API_KEY_ENV);
    }

    for var in &searched {
        match std::env::var(var) {
            Ok(value) if !value.trim().is_empty() => {
                debug!("Using API key from ${}", var);
                return Ok(value.trim().to_string());
            }
            _ => {}
        }
    }

    Err(Error::missing_api_key(searched.join(", ")))
}

/// Client configuration from settings plus the resolved key
pub fn generator_config(settings: &GeneratorSettings, api_key: String) -> GeneratorConfig {
    GeneratorConfig::new(api_key)
        .with_model(settings.model.clone())
        .with_endpoint(settings.endpoint.clone())
        .with_temperature(settings.temperature)
}

/// Where appearance settings are persisted
pub fn appearance_file_path(settings: &StorageSettings) -> PathBuf {
    let configured = settings.appearance_file.trim();
    if configured.is_empty() {
        gendesign_core::logging::data_directory().join(APPEARANCE_FILENAME)
    } else {
        PathBuf::from(configured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(".gendesign");
        std::fs::create_dir_all(&dir).unwrap();

        let config = r#"
[generator]
model = "gemini-2.5-pro"
temperature = 0.2

[ui]
tick_ms = 250
"#;
        std::fs::write(dir.join("config.toml"), config).unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings.generator.model, "gemini-2.5-pro");
        assert_eq!(settings.generator.temperature, 0.2);
        assert_eq!(settings.generator.api_key_env, "GEMINI_API_KEY");
        assert_eq!(settings.ui.tick_ms, 250);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("custom.toml");
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        assert_eq!(load_settings_from(&path), Settings::default());
    }

    #[test]
    fn test_init_config_dir() {
        let temp = tempdir().unwrap();

        init_config_dir(temp.path()).unwrap();

        let path = temp.path().join(".gendesign/config.toml");
        assert!(path.exists());
        // The generated file parses back to the defaults
        assert_eq!(load_settings(temp.path()), Settings::default());
    }

    #[test]
    fn test_init_config_dir_keeps_existing_file() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(".gendesign");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), "[ui]\ntick_ms = 40\n").unwrap();

        init_config_dir(temp.path()).unwrap();
        assert_eq!(load_settings(temp.path()).ui.tick_ms, 40);
    }

    #[test]
    fn test_appearance_file_path() {
        let default = appearance_file_path(&StorageSettings::default());
        assert!(default.ends_with("gendesign/appearance.json"));

        let custom = appearance_file_path(&StorageSettings {
            appearance_file: "/tmp/looks.json".to_string(),
        });
        assert_eq!(custom, PathBuf::from("/tmp/looks.json"));
    }

    #[test]
    fn test_generator_config_from_settings() {
        let settings = GeneratorSettings {
            model: "m".to_string(),
            endpoint: "http://localhost:1".to_string(),
            temperature: 0.5,
            api_key_env: "X".to_string(),
        };
        let config = generator_config(&settings, "key".to_string());
        assert_eq!(config.api_key, "key");
        assert_eq!(config.model, "m");
        assert_eq!(config.endpoint, "http://localhost:1");
        assert_eq!(config.temperature, 0.5);
    }

    const TEST_KEY_ENV: &str = "GENDESIGN_TEST_API_KEY";

    fn key_settings() -> GeneratorSettings {
        GeneratorSettings {
            api_key_env: TEST_KEY_ENV.to_string(),
            ..GeneratorSettings::default()
        }
    }

    #[test]
    #[serial]
    fn test_resolve_api_key_from_configured_var() {
        std::env::set_var(TEST_KEY_ENV, " abc123 ");
        std::env::set_var(FALLBACK_API_KEY_ENV, "fallback");

        assert_eq!(resolve_api_key(&key_settings()).unwrap(), "abc123");

        std::env::remove_var(TEST_KEY_ENV);
        std::env::remove_var(FALLBACK_API_KEY_ENV);
    }

    #[test]
    #[serial]
    fn test_resolve_api_key_falls_back() {
        std::env::remove_var(TEST_KEY_ENV);
        std::env::set_var(FALLBACK_API_KEY_ENV, "fallback");

        assert_eq!(resolve_api_key(&key_settings()).unwrap(), "fallback");

        std::env::remove_var(FALLBACK_API_KEY_ENV);
    }

    #[test]
    #[serial]
    fn test_resolve_api_key_missing() {
        std::env::set_var(TEST_KEY_ENV, "   ");
        std::env::remove_var(FALLBACK_API_KEY_ENV);

        let err = resolve_api_key(&key_settings()).unwrap_err();
        assert!(err.to_string().contains(TEST_KEY_ENV));
        assert!(err.to_string().contains("API_KEY"));

        std::env::remove_var(TEST_KEY_ENV);
    }
}
