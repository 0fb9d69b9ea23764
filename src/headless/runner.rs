//! Headless mode runner - one request, no terminal

use std::io::Write;

use gendesign_app::{signals, Engine, EngineEvent, FormState, Message};
use gendesign_core::prelude::*;
use gendesign_core::DesignParameters;
use gendesign_gen::DesignGenerator;
use tokio::sync::broadcast::error::TryRecvError;

use super::emit;

/// How a headless run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessOutcome {
    /// Results arrived (possibly an empty list)
    Designs(usize),
    /// The request failed; the error event was printed
    Failed,
    /// Quit (signal) before the request finished
    Interrupted,
}

impl HeadlessOutcome {
    pub fn exit_code(self) -> i32 {
        match self {
            HeadlessOutcome::Designs(_) => 0,
            HeadlessOutcome::Failed | HeadlessOutcome::Interrupted => 1,
        }
    }
}

/// Submit `params` once and stream the resulting events to `out`.
pub async fn run_headless<G, W>(
    mut engine: Engine<G>,
    params: DesignParameters,
    out: &mut W,
) -> Result<HeadlessOutcome>
where
    G: DesignGenerator + Send + Sync + 'static,
    W: Write,
{
    info!("gendesign starting in HEADLESS mode");

    let mut form = FormState::with_params(params.clone());
    form.set_max_cost(params.max_cost);
    if !form.is_complete() {
        return Err(Error::config("--prompt and --material must not be empty"));
    }
    engine.state.form = form;

    let mut events = engine.subscribe();
    signals::spawn_signal_handler(engine.msg_sender());

    engine.process_message(Message::SubmitForm);

    let outcome = loop {
        if let Some(outcome) = flush_events(&mut events, out)? {
            break outcome;
        }
        if engine.should_quit() {
            info!("Quit requested");
            break HeadlessOutcome::Interrupted;
        }

        match engine.msg_rx.recv().await {
            Some(msg) => engine.process_message(msg),
            None => {
                warn!("Message channel closed");
                break HeadlessOutcome::Interrupted;
            }
        }
    };

    engine.shutdown();
    flush_events(&mut events, out)?;

    info!("Headless run finished: {:?}", outcome);
    Ok(outcome)
}

/// Print every queued event; returns the outcome once the request settles.
fn flush_events<W: Write>(
    events: &mut tokio::sync::broadcast::Receiver<EngineEvent>,
    out: &mut W,
) -> Result<Option<HeadlessOutcome>> {
    let mut outcome = None;
    loop {
        match events.try_recv() {
            Ok(event) => {
                emit(out, &event)?;
                match event {
                    EngineEvent::Results { designs, .. } => {
                        outcome = Some(HeadlessOutcome::Designs(designs.len()));
                    }
                    EngineEvent::Error { .. } => outcome = Some(HeadlessOutcome::Failed),
                    EngineEvent::Loading { .. } | EngineEvent::Shutdown => {}
                }
            }
            Err(TryRecvError::Lagged(skipped)) => {
                warn!("Headless output skipped {} events", skipped);
            }
            Err(TryRecvError::Empty | TryRecvError::Closed) => return Ok(outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gendesign_app::{AppState, AppearanceStore};
    use gendesign_core::GenerationError;
    use gendesign_gen::test_utils::{test_designs, FakeGenerator};

    fn engine(generator: FakeGenerator) -> Engine<FakeGenerator> {
        Engine::new(AppState::new(AppearanceStore::in_memory()), generator)
    }

    fn lines(out: &[u8]) -> Vec<serde_json::Value> {
        String::from_utf8_lossy(out)
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_successful_run_prints_loading_results_shutdown() {
        let mut out = Vec::new();
        let outcome = run_headless(
            engine(FakeGenerator::succeeding(test_designs())),
            DesignParameters::default(),
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(outcome, HeadlessOutcome::Designs(4));
        assert_eq!(outcome.exit_code(), 0);

        let events = lines(&out);
        assert_eq!(events.len(), 3);
        assert_eq!(events[0]["event"], "loading");
        assert_eq!(events[1]["event"], "results");
        assert_eq!(events[1]["designs"][0]["designName"], "Desain 1");
        assert_eq!(events[2]["event"], "shutdown");
    }

    #[tokio::test]
    async fn test_failed_run_prints_error_and_exits_nonzero() {
        let mut out = Vec::new();
        let outcome = run_headless(
            engine(FakeGenerator::failing(GenerationError::status(500, "oops"))),
            DesignParameters::default(),
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(outcome, HeadlessOutcome::Failed);
        assert_eq!(outcome.exit_code(), 1);
        let events = lines(&out);
        assert_eq!(events[1]["event"], "error");
        assert_eq!(
            events[1]["message"],
            "Gagal menghasilkan desain. Silakan coba lagi."
        );
    }

    #[tokio::test]
    async fn test_blank_prompt_is_rejected_before_any_request() {
        let generator = FakeGenerator::succeeding(test_designs());
        let params = DesignParameters {
            prompt: "  ".to_string(),
            ..DesignParameters::default()
        };
        let mut out = Vec::new();

        let result = run_headless(engine(generator), params, &mut out).await;
        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_max_cost_is_clamped() {
        let generator = FakeGenerator::succeeding(test_designs());
        let params = DesignParameters {
            max_cost: 99_000_000,
            ..DesignParameters::default()
        };
        let engine = engine(generator);
        let generator = engine.generator().clone();

        run_headless(engine, params, &mut Vec::new()).await.unwrap();
        assert_eq!(generator.last_params().unwrap().max_cost, 20_000_000);
    }
}
