use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;

use hanbot_translate::Orchestrator;
use hanbot_types::{BotEvent, Reply};

use crate::state::AppState;

pub mod inbound;
pub mod on_demand;

use inbound::{Flow, handle_message};
use on_demand::handle_on_demand;

/// Bot's main loop: consumes gateway events, hands translations to spawned
/// tasks so one slow provider call never serializes unrelated messages.
pub async fn event_loop(
    state: Arc<AppState>,
    event_rx: AsyncReceiver<BotEvent>,
    reply_tx: AsyncSender<Reply>,
    orchestrator: Arc<Orchestrator>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("event loop started, waiting for messages");

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = event_rx.recv() => event?,
        };

        match event {
            BotEvent::Message(msg) => {
                let flow =
                    handle_message(&state, msg, &reply_tx, Arc::clone(&orchestrator)).await?;
                if flow == Flow::Shutdown {
                    tracing::info!("shutdown requested by admin");
                    cancel.cancel();
                    break;
                }
            }
            BotEvent::OnDemand(req) => {
                let orchestrator = Arc::clone(&orchestrator);
                let reply_tx = reply_tx.clone();
                tokio::spawn(async move {
                    if let Err(e) = handle_on_demand(req, orchestrator, reply_tx).await {
                        tracing::error!("on-demand translation failed: {e}");
                    }
                });
            }
            BotEvent::Shutdown => {
                tracing::info!("shutdown event received");
                cancel.cancel();
                break;
            }
        }
    }

    Ok(())
}
