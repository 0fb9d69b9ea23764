//! Test utilities for the generation service
//!
//! Provides a scripted [`FakeGenerator`] and helpers for building
//! [`DesignOption`] fixtures.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use gendesign_core::{DesignOption, DesignParameters, GenerationError};

use crate::generator::DesignGenerator;
use crate::response::parse_design_options;

/// What a [`FakeGenerator`] answers with on every call
#[derive(Debug, Clone)]
pub enum FakeResponse {
    Designs(Vec<DesignOption>),
    /// Raw model text, run through the real response parser
    RawText(String),
    Fail(GenerationError),
}

#[derive(Debug)]
pub struct FakeGenerator {
    response: FakeResponse,
    delay: Option<Duration>,
    calls: AtomicUsize,
    last_params: Mutex<Option<DesignParameters>>,
}

impl FakeGenerator {
    pub fn new(response: FakeResponse) -> Self {
        Self {
            response,
            delay: None,
            calls: AtomicUsize::new(0),
            last_params: Mutex::new(None),
        }
    }

    pub fn succeeding(options: Vec<DesignOption>) -> Self {
        Self::new(FakeResponse::Designs(options))
    }

    pub fn raw_text(text: impl Into<String>) -> Self {
        Self::new(FakeResponse::RawText(text.into()))
    }

    pub fn failing(error: GenerationError) -> Self {
        Self::new(FakeResponse::Fail(error))
    }

    /// Sleeps before answering, to keep a request in flight
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_params(&self) -> Option<DesignParameters> {
        self.last_params
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl DesignGenerator for FakeGenerator {
    async fn generate(
        &self,
        params: &DesignParameters,
    ) -> Result<Vec<DesignOption>, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self
            .last_params
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(params.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.response {
            FakeResponse::Designs(options) => Ok(options.clone()),
            FakeResponse::RawText(text) => parse_design_options(text),
            FakeResponse::Fail(error) => Err(error.clone()),
        }
    }
}

/// Creates a design option with the given name and efficiency score.
pub fn test_design(name: &str, score: u8) -> DesignOption {
    DesignOption {
        design_name: name.to_string(),
        material_used: "Serat Karbon".to_string(),
        estimated_cost: 4_200_000.0,
        strength_level: "Tinggi".to_string(),
        material_efficiency_score: score,
        description: format!("Deskripsi {name}."),
    }
}

/// Four designs named `Desain 1..=4` with scores 95, 80, 65, 50.
pub fn test_designs() -> Vec<DesignOption> {
    [95, 80, 65, 50]
        .iter()
        .enumerate()
        .map(|(i, score)| test_design(&format!("Desain {}", i + 1), *score))
        .collect()
}
