//! Generator configuration

use std::fmt;

use gendesign_core::GenerationError;
use url::Url;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEMPERATURE: f64 = 0.8;

/// Everything the client needs to reach the model.
///
/// Built once at startup; the API key is never read from the environment
/// inside this crate.
#[derive(Clone, PartialEq)]
pub struct GeneratorConfig {
    pub api_key: String,
    pub model: String,
    /// Base URL, e.g. `https://generativelanguage.googleapis.com/v1beta`
    pub endpoint: String,
    pub temperature: f64,
}

impl GeneratorConfig {
    /// Config with default model, endpoint and temperature
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// `{endpoint}/models/{model}:generateContent`
    pub fn generate_content_url(&self) -> Result<Url, GenerationError> {
        let raw = format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        );
        Url::parse(&raw)
            .map_err(|e| GenerationError::transport(format!("invalid endpoint URL {raw}: {e}")))
    }
}

// Keeps the key out of logs
impl fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("temperature", &self.temperature)
            .finish()
    }
}
