use serde::{Deserialize, Serialize};

use hanbot_lang::Lang;

/// Events flowing from the gateway glue into the bot's event loop.
#[derive(Debug, Clone)]
pub enum BotEvent {
    /// A message arrived in a monitored channel.
    Message(InboundMessage),
    /// A user pressed one of the secondary-translation triggers on a reply.
    OnDemand(OnDemandRequest),
    /// Admin issued the shutdown phrase.
    Shutdown,
}

#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub channel_id: u64,
    pub author_is_bot: bool,
    pub author_is_admin: bool,
    pub content: String,
}

/// Re-invocation of the orchestrator with a fixed target, carrying the
/// original message text and the source language cached from the first pass.
#[derive(Debug, Clone)]
pub struct OnDemandRequest {
    pub channel_id: u64,
    pub original_text: String,
    pub source_lang: Option<Lang>,
    pub target: OnDemandTarget,
}

/// The two fixed secondary-translation triggers attached to every
/// auto-translation reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnDemandTarget {
    Japanese,
    English,
}

impl OnDemandTarget {
    pub fn lang(&self) -> Lang {
        match self {
            OnDemandTarget::Japanese => Lang::Ja,
            OnDemandTarget::English => Lang::En,
        }
    }

    /// Trigger label as shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            OnDemandTarget::Japanese => "日本語",
            OnDemandTarget::English => "English",
        }
    }
}

/// Rendered output handed back to the gateway glue for delivery.
#[derive(Debug, Clone)]
pub enum Reply {
    /// A successful translation, with the two on-demand triggers attached.
    /// `original_text` and `source_lang` are what a trigger press must echo
    /// back in an [`OnDemandRequest`].
    Translation {
        channel_id: u64,
        body: String,
        provider: String,
        original_text: String,
        source_lang: Option<Lang>,
        actions: [OnDemandTarget; 2],
    },
    /// A user-visible error message.
    Error { channel_id: u64, body: String },
    /// Plain informational text (help, shutdown acknowledgement).
    Plain { channel_id: u64, body: String },
}
