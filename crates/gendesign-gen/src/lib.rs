//! # gendesign-gen - Design Request Service
//!
//! Turns [`DesignParameters`] into a structured generation request, sends it
//! to the Gemini `generateContent` endpoint and parses the reply into
//! [`DesignOption`]s.
//!
//! ## Public API
//!
//! - [`DesignGenerator`] / [`LocalDesignGenerator`] - The service contract
//! - [`GeminiClient`] - HTTP implementation
//! - [`GeneratorConfig`] - Explicit credential and endpoint configuration
//! - [`build_prompt()`], [`response_schema()`] - Request shaping
//! - [`parse_design_options()`] - Response parsing
//!
//! With the `test-helpers` feature, `test_utils::FakeGenerator` provides a
//! scripted generator for downstream tests.
//!
//! [`DesignParameters`]: gendesign_core::DesignParameters
//! [`DesignOption`]: gendesign_core::DesignOption

pub mod client;
pub mod config;
pub mod generator;
pub mod request;
pub mod response;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::GeminiClient;
pub use config::{GeneratorConfig, DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
pub use generator::{DesignGenerator, LocalDesignGenerator};
pub use request::{build_prompt, response_schema, GenerateContentRequest};
pub use response::{extract_text, parse_design_options, GenerateContentResponse};
