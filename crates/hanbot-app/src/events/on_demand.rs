use std::sync::Arc;

use kanal::AsyncSender;

use hanbot_translate::Orchestrator;
use hanbot_types::{OnDemandRequest, Reply};

use crate::render;

/// Re-run the orchestrator with the fixed target from a trigger press.
/// Detection is skipped when the first pass cached a source language.
pub async fn handle_on_demand(
    req: OnDemandRequest,
    orchestrator: Arc<Orchestrator>,
    reply_tx: AsyncSender<Reply>,
) -> anyhow::Result<()> {
    let (request, target) = render::on_demand_request(&req);
    let outcome = orchestrator.translate_fixed(&request, target).await;
    let reply = render::render_on_demand(req.channel_id, &req.original_text, req.target, &outcome);
    reply_tx.send(reply).await?;
    Ok(())
}
