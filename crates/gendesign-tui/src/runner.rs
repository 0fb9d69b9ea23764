//! TUI runner - terminal lifecycle and the main event loop

use std::time::Duration;

use gendesign_app::{signals, Engine};
use gendesign_core::prelude::*;
use gendesign_gen::DesignGenerator;

use crate::{event, render, terminal};

/// Run the interactive studio until the user quits.
///
/// Takes an engine already wired to its store and generator. Restores the
/// terminal on every exit path, including errors from the loop.
pub async fn run<G>(mut engine: Engine<G>) -> Result<()>
where
    G: DesignGenerator + Send + Sync + 'static,
{
    terminal::install_panic_hook();
    let mut term = ratatui::init();

    signals::spawn_signal_handler(engine.msg_sender());

    let tick_rate = Duration::from_millis(engine.state.settings.ui.tick_ms.max(10));
    info!("TUI started (tick {}ms)", tick_rate.as_millis());

    let result = run_loop(&mut term, &mut engine, tick_rate);

    engine.shutdown();
    ratatui::restore();

    if let Err(ref e) = result {
        error!("TUI loop failed: {}", e);
    }
    result
}

/// Main event loop
fn run_loop<G>(
    term: &mut ratatui::DefaultTerminal,
    engine: &mut Engine<G>,
    tick_rate: Duration,
) -> Result<()>
where
    G: DesignGenerator + Send + Sync + 'static,
{
    while !engine.should_quit() {
        // Generation results and signals arrive on the message channel
        engine.drain_pending_messages();

        term.draw(|frame| render::view(frame, &engine.state))
            .context("Failed to draw frame")?;

        if let Some(message) = event::poll(tick_rate)? {
            engine.process_message(message);
        }
    }

    Ok(())
}
