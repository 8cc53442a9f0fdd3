use std::collections::HashSet;
use std::env;

use serde::{Deserialize, Serialize};

fn default_shutdown_phrase() -> String {
    "おやすみttt".to_string()
}

fn default_min_message_chars() -> usize {
    2
}

/// Channel filtering and command behavior.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct BotConfig {
    /// Restrict the bot to a single channel. None means all channels.
    pub channel_id: Option<u64>,
    /// Channels the bot never translates in.
    pub excluded_channels: HashSet<u64>,
    /// Admin-only phrase that shuts the bot down.
    #[serde(default = "default_shutdown_phrase")]
    pub shutdown_phrase: String,
    /// Messages shorter than this (trimmed chars) are ignored.
    #[serde(default = "default_min_message_chars")]
    pub min_message_chars: usize,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            channel_id: None,
            excluded_channels: HashSet::new(),
            shutdown_phrase: default_shutdown_phrase(),
            min_message_chars: default_min_message_chars(),
        }
    }
}

impl BotConfig {
    pub fn from_env() -> Self {
        let channel_id = env::var("BOT_CHANNEL_ID")
            .ok()
            .and_then(|v| v.parse().ok());

        let excluded_channels = env::var("EXCLUDED_CHANNEL_IDS")
            .map(|v| parse_channel_list(&v))
            .unwrap_or_default();

        let shutdown_phrase =
            env::var("SHUTDOWN_PHRASE").unwrap_or_else(|_| default_shutdown_phrase());

        Self {
            channel_id,
            excluded_channels,
            shutdown_phrase,
            min_message_chars: default_min_message_chars(),
        }
    }
}

/// Parse a comma-separated channel-id list. A malformed entry invalidates the
/// whole list rather than silently dropping ids.
pub fn parse_channel_list(raw: &str) -> HashSet<u64> {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let parsed: Result<HashSet<u64>, _> = entries.iter().map(|s| s.parse()).collect();
    match parsed {
        Ok(set) => set,
        Err(_) => {
            tracing::warn!("malformed EXCLUDED_CHANNEL_IDS, ignoring: {raw:?}");
            HashSet::new()
        }
    }
}
