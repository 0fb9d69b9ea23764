//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use gendesign_gen::DesignGenerator;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task
pub fn handle_action<G>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, generator: Arc<G>)
where
    G: DesignGenerator + Send + Sync + 'static,
{
    match action {
        UpdateAction::GenerateDesigns { request_id, params } => {
            tokio::spawn(async move {
                debug!("Generation task for request {} started", request_id);
                let message = match generator.generate(&params).await {
                    Ok(options) => Message::DesignsGenerated {
                        request_id,
                        options,
                    },
                    Err(error) => Message::DesignGenerationFailed { request_id, error },
                };
                if msg_tx.send(message).await.is_err() {
                    warn!(
                        "Message channel closed before request {} finished",
                        request_id
                    );
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gendesign_core::{DesignParameters, GenerationError};
    use gendesign_gen::test_utils::{test_designs, FakeGenerator};

    #[tokio::test]
    async fn test_generate_designs_reports_success() {
        let (tx, mut rx) = mpsc::channel(4);
        let generator = Arc::new(FakeGenerator::succeeding(test_designs()));

        handle_action(
            UpdateAction::GenerateDesigns {
                request_id: 7,
                params: DesignParameters::default(),
            },
            tx,
            generator.clone(),
        );

        match rx.recv().await.unwrap() {
            Message::DesignsGenerated {
                request_id,
                options,
            } => {
                assert_eq!(request_id, 7);
                assert_eq!(options.len(), 4);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(generator.call_count(), 1);
    }

    #[tokio::test]
    async fn test_generate_designs_reports_failure() {
        let (tx, mut rx) = mpsc::channel(4);
        let generator = Arc::new(FakeGenerator::failing(GenerationError::status(500, "x")));

        handle_action(
            UpdateAction::GenerateDesigns {
                request_id: 3,
                params: DesignParameters::default(),
            },
            tx,
            generator,
        );

        assert!(matches!(
            rx.recv().await.unwrap(),
            Message::DesignGenerationFailed { request_id: 3, .. }
        ));
    }
}
