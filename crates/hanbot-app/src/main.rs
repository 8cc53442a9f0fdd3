use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use hanbot_config::Config;
use hanbot_translate::{DeeplTranslator, GoogleTranslator, Orchestrator};

pub mod controller;
pub mod events;
pub mod health;
pub mod io;
pub mod render;
pub mod state;

use self::controller::AppController;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_ansi(atty::is(atty::Stream::Stdout))
        .init();

    let config = Config::from_env()?;

    let orchestrator = {
        let t = &config.translator;
        let primary = DeeplTranslator::new(
            t.api_key.clone(),
            t.api_url.clone(),
            Duration::from_secs(t.primary_timeout_secs),
        );
        let fallback = GoogleTranslator::new(Duration::from_secs(t.fallback_timeout_secs));
        Arc::new(Orchestrator::new(Arc::new(primary), Arc::new(fallback)))
    };

    match config.bot.channel_id {
        Some(id) => tracing::info!("restricted to channel {id}"),
        None => tracing::info!("active in all channels"),
    }
    if !config.bot.excluded_channels.is_empty() {
        tracing::info!("excluded channels: {:?}", config.bot.excluded_channels);
    }

    let state = Arc::new(AppState::new(config));
    let app = AppController::new(Arc::clone(&state));

    let mut tasks = app.spawn_tasks(orchestrator).await?;

    // Local gateway glue; a chat-platform gateway would use the same handles.
    tasks.spawn(io::stdin_gateway(app.event_sender(), app.cancel_token()));
    tasks.spawn(io::reply_printer(app.reply_receiver(), app.cancel_token()));

    state.ready.store(true, Ordering::Relaxed);
    tracing::info!("bot ready: auto zh ↔ ko, fallback DeepL → Google Translate");

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("shutdown requested");
            app.cancel_token().cancel();
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::warn!("a task exited"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
            app.cancel_token().cancel();
        }
    }

    tasks.shutdown().await;
    Ok(())
}
