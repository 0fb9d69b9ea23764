//! Message processing: runs the TEA update loop and dispatches actions

use std::sync::Arc;

use gendesign_gen::DesignGenerator;
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<G>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    generator: &Arc<G>,
) where
    G: DesignGenerator + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), Arc::clone(generator));
        }

        msg = result.message;
    }
}
