//! Generative Design Studio
//!
//! Binary-side glue for the `gendesign` executable: the headless runner.
//! The interactive terminal UI lives in `gendesign-tui`.

pub mod headless;

// Re-export main entry points
pub use headless::{run_headless, HeadlessOutcome};
