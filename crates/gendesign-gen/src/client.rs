//! Gemini HTTP client

use gendesign_core::{DesignOption, DesignParameters, GenerationError};
use tracing::{debug, error, info};

use crate::config::GeneratorConfig;
use crate::generator::DesignGenerator;
use crate::request::GenerateContentRequest;
use crate::response::{extract_text, parse_design_options, GenerateContentResponse};

/// Fallback used in logs when an error body cannot be read
const UNREADABLE_BODY: &str = "<unreadable body>";

/// [`DesignGenerator`] backed by the Gemini `generateContent` REST API.
pub struct GeminiClient {
    config: GeneratorConfig,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    async fn request_designs(
        &self,
        params: &DesignParameters,
    ) -> Result<Vec<DesignOption>, GenerationError> {
        let url = self.config.generate_content_url()?;
        let body = GenerateContentRequest::new(params, self.config.temperature);
        debug!(%url, material = %params.material, max_cost = params.max_cost, "Sending generation request");

        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::transport(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| UNREADABLE_BODY.to_string());
            return Err(GenerationError::status(
                status.as_u16(),
                format!("HTTP {status}: {text}"),
            ));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::empty_response(format!("unreadable response: {e}")))?;

        let text = extract_text(&payload)?;
        parse_design_options(&text)
    }
}

impl DesignGenerator for GeminiClient {
    async fn generate(
        &self,
        params: &DesignParameters,
    ) -> Result<Vec<DesignOption>, GenerationError> {
        let result = self.request_designs(params).await;
        match &result {
            Ok(options) => info!(count = options.len(), "Generated design options"),
            Err(e) => error!(kind = ?e.kind, detail = %e.detail, "Error calling generation API"),
        }
        result
    }
}
