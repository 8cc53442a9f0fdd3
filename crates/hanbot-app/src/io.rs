use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

use hanbot_types::{BotEvent, InboundMessage, OnDemandRequest, OnDemandTarget, Reply};

/// Local development gateway: each stdin line becomes an inbound message on
/// channel 0, authored by an admin. Lines prefixed `!ja ` / `!en ` simulate
/// the two on-demand triggers. A real chat gateway replaces this task and
/// feeds the same channels.
pub async fn stdin_gateway(
    event_tx: AsyncSender<BotEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = tokio::select! {
            _ = cancel.cancelled() => break,
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            // stdin closed
            event_tx.send(BotEvent::Shutdown).await?;
            break;
        };

        let event = if let Some(text) = line.strip_prefix("!ja ") {
            BotEvent::OnDemand(OnDemandRequest {
                channel_id: 0,
                original_text: text.to_string(),
                source_lang: None,
                target: OnDemandTarget::Japanese,
            })
        } else if let Some(text) = line.strip_prefix("!en ") {
            BotEvent::OnDemand(OnDemandRequest {
                channel_id: 0,
                original_text: text.to_string(),
                source_lang: None,
                target: OnDemandTarget::English,
            })
        } else {
            BotEvent::Message(InboundMessage {
                channel_id: 0,
                author_is_bot: false,
                author_is_admin: true,
                content: line,
            })
        };

        event_tx.send(event).await?;
    }

    Ok(())
}

/// Counterpart of the stdin gateway: prints rendered replies.
pub async fn reply_printer(
    reply_rx: AsyncReceiver<Reply>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        let reply = tokio::select! {
            _ = cancel.cancelled() => break,
            reply = reply_rx.recv() => reply?,
        };

        match reply {
            Reply::Translation {
                body,
                provider,
                actions,
                ..
            } => {
                let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
                println!("{body}  [{provider}] ({})", labels.join(" / "));
            }
            Reply::Error { body, .. } | Reply::Plain { body, .. } => println!("{body}"),
        }
    }

    Ok(())
}
