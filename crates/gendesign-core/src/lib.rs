//! # gendesign-core - Core Domain Types
//!
//! Foundation crate for the design studio. Provides the request and result
//! types exchanged with the generation service, per-design appearance
//! settings, error handling and logging setup.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Design Types (`design`)
//! - [`DesignParameters`] - Material, cost ceiling, strength and free-text prompt
//! - [`DesignOption`] - One generated candidate design
//! - [`Strength`] - Desired structural strength
//!
//! ### Appearance (`appearance`)
//! - [`AppearanceSettings`] - Card color, lighting scheme and visual style
//! - [`HexColor`] - `#rrggbb` color
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Application error enum, one variant group per layer
//! - [`GenerationError`] - Failure of the external generation call
//! - [`StoreError`] - Appearance persistence failure
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use gendesign_core::prelude::*;
//! ```

pub mod appearance;
pub mod currency;
pub mod design;
pub mod error;
pub mod logging;

/// Prelude for common imports used throughout all gendesign crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use appearance::{
    AppearanceSettings, HexColor, LightingScheme, VisualStyle, DEFAULT_PRIMARY_COLOR,
    PRESET_COLORS,
};
pub use currency::{format_rupiah, format_rupiah_f64, format_thousands};
pub use design::{
    DesignOption, DesignParameters, Strength, MAX_COST_STEP, MAX_MAX_COST, MIN_MAX_COST,
};
pub use error::{
    Error, GenerationError, GenerationErrorKind, Result, ResultExt, StoreError, StoreErrorKind,
    GENERATION_FAILED_MESSAGE,
};
