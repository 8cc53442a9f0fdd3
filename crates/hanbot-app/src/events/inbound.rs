use std::sync::Arc;

use kanal::AsyncSender;

use hanbot_config::bot::BotConfig;
use hanbot_translate::{Orchestrator, TranslationRequest};
use hanbot_types::{InboundMessage, Reply};

use crate::render;
use crate::state::AppState;

/// What the event loop should do after a message is handled.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Shutdown,
}

/// What an inbound message asks for, after filtering.
#[derive(Debug, PartialEq, Eq)]
pub enum MessageAction {
    Ignore,
    Help,
    ShutdownRequest { authorized: bool },
    Translate,
}

/// Filtering and command matching, in the same order the bot applies them:
/// bot authors, excluded channels, single-channel restriction, minimum
/// length, shutdown phrase, help command, then translation.
pub fn classify(config: &BotConfig, msg: &InboundMessage) -> MessageAction {
    if msg.author_is_bot {
        return MessageAction::Ignore;
    }

    if config.excluded_channels.contains(&msg.channel_id) {
        return MessageAction::Ignore;
    }

    if let Some(only) = config.channel_id {
        if msg.channel_id != only {
            return MessageAction::Ignore;
        }
    }

    if msg.content.trim().chars().count() < config.min_message_chars {
        return MessageAction::Ignore;
    }

    if msg.content.starts_with(&config.shutdown_phrase) {
        return MessageAction::ShutdownRequest {
            authorized: msg.author_is_admin,
        };
    }

    if msg.content.starts_with("!help") || msg.content.starts_with("!ヘルプ") {
        return MessageAction::Help;
    }

    MessageAction::Translate
}

pub async fn handle_message(
    state: &Arc<AppState>,
    msg: InboundMessage,
    reply_tx: &AsyncSender<Reply>,
    orchestrator: Arc<Orchestrator>,
) -> anyhow::Result<Flow> {
    let action = {
        let config = state.config.read().await;
        classify(&config.bot, &msg)
    };

    match action {
        MessageAction::Ignore => {}
        MessageAction::Help => {
            let body = {
                let config = state.config.read().await;
                render::help_text(&config.bot)
            };
            reply_tx
                .send(Reply::Plain {
                    channel_id: msg.channel_id,
                    body,
                })
                .await?;
        }
        MessageAction::ShutdownRequest { authorized: false } => {
            reply_tx
                .send(Reply::Plain {
                    channel_id: msg.channel_id,
                    body: "❌ 管理者のみがこのコマンドを使用できます".to_string(),
                })
                .await?;
        }
        MessageAction::ShutdownRequest { authorized: true } => {
            reply_tx
                .send(Reply::Plain {
                    channel_id: msg.channel_id,
                    body: "おやすみ！また明日！ 🌙".to_string(),
                })
                .await?;
            return Ok(Flow::Shutdown);
        }
        MessageAction::Translate => {
            let reply_tx = reply_tx.clone();
            tokio::spawn(async move {
                let request = TranslationRequest::new(msg.content.clone(), None);
                let outcome = orchestrator.translate_auto(&request).await;
                let reply = render::render_auto(msg.channel_id, &msg.content, &outcome);
                if let Err(e) = reply_tx.send(reply).await {
                    tracing::error!("failed to deliver reply: {e}");
                }
            });
        }
    }

    Ok(Flow::Continue)
}
