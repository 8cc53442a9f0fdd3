use std::env;

use serde::{Deserialize, Serialize};

use crate::MissingCredential;

fn default_api_url() -> String {
    "https://api-free.deepl.com/v2/translate".to_string()
}

fn default_primary_timeout_secs() -> u64 {
    10
}

fn default_fallback_timeout_secs() -> u64 {
    5
}

/// Translation provider credentials and call bounds.
#[derive(Serialize, Deserialize, Clone)]
pub struct TranslatorConfig {
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Per-call bound on the primary provider; exceeding it falls through to
    /// the fallback, it does not fail the request.
    #[serde(default = "default_primary_timeout_secs")]
    pub primary_timeout_secs: u64,
    #[serde(default = "default_fallback_timeout_secs")]
    pub fallback_timeout_secs: u64,
}

impl TranslatorConfig {
    pub fn from_env() -> Result<Self, MissingCredential> {
        let api_key = env::var("DEEPL_TOKEN").map_err(|_| MissingCredential("DEEPL_TOKEN"))?;

        let api_url = env::var("DEEPL_API_URL").unwrap_or_else(|_| default_api_url());

        let primary_timeout_secs = env::var("DEEPL_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_primary_timeout_secs);

        let fallback_timeout_secs = env::var("FALLBACK_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_fallback_timeout_secs);

        Ok(Self {
            api_key,
            api_url,
            primary_timeout_secs,
            fallback_timeout_secs,
        })
    }
}
