use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use hanbot_translate::Orchestrator;
use hanbot_types::{BotEvent, Reply};

use crate::events::event_loop;
use crate::health;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub gateway_to_app: (AsyncSender<BotEvent>, AsyncReceiver<BotEvent>),
    pub app_to_gateway: (AsyncSender<Reply>, AsyncReceiver<Reply>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            gateway_to_app: kanal::bounded_async(256), // message burst capacity
            app_to_gateway: kanal::bounded_async(64),
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Gateway-side handle for feeding events in.
    pub fn event_sender(&self) -> AsyncSender<BotEvent> {
        self.channels.gateway_to_app.0.clone()
    }

    /// Gateway-side handle for draining rendered replies.
    pub fn reply_receiver(&self) -> AsyncReceiver<Reply> {
        self.channels.app_to_gateway.1.clone()
    }

    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub async fn spawn_tasks(
        &self,
        orchestrator: Arc<Orchestrator>,
    ) -> anyhow::Result<JoinSet<anyhow::Result<()>>> {
        let mut tasks = JoinSet::new();

        tasks.spawn(event_loop(
            Arc::clone(&self.state),
            self.channels.gateway_to_app.1.clone(),
            self.channels.app_to_gateway.0.clone(),
            orchestrator,
            self.cancel_token.child_token(),
        ));

        let port = {
            let config = self.state.config.read().await;
            config.health.port
        };
        tasks.spawn(health::serve(
            Arc::clone(&self.state),
            port,
            self.cancel_token.child_token(),
        ));

        Ok(tasks)
    }
}
