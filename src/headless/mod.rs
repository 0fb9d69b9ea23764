//! Headless mode - NDJSON event output, no TUI
//!
//! Runs exactly one generation with the parameters from the command line
//! and prints every [`EngineEvent`] as one JSON object per line.
//!
//! # Example Output
//!
//! ```json
//! {"event":"loading","request_id":1}
//! {"event":"results","request_id":1,"designs":[{"designName":"Rangka Hexa",...}]}
//! {"event":"shutdown"}
//! ```

pub mod runner;

use std::io::Write;

use gendesign_app::EngineEvent;
use gendesign_core::prelude::*;

pub use runner::{run_headless, HeadlessOutcome};

/// Write one event as a single NDJSON line and flush.
pub fn emit<W: Write>(out: &mut W, event: &EngineEvent) -> Result<()> {
    let json = serde_json::to_string(event)?;
    writeln!(out, "{json}")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_writes_one_line_per_event() {
        let mut out = Vec::new();
        emit(&mut out, &EngineEvent::Loading { request_id: 3 }).unwrap();
        emit(&mut out, &EngineEvent::Shutdown).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![r#"{"event":"loading","request_id":3}"#, r#"{"event":"shutdown"}"#]
        );
    }
}
