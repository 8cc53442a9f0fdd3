use std::time::Duration;

use async_trait::async_trait;
use hanbot_lang::Lang;
use serde::Deserialize;

use crate::error::ProviderError;
use crate::{ProviderName, TranslationProvider};

/// Below this many trimmed characters the source hint is withheld: the
/// service's own detection beats ours on very short strings.
const SOURCE_HINT_MIN_CHARS: usize = 3;

/// Primary provider: DeepL's form-encoded v2 endpoint.
#[derive(Clone)]
pub struct DeeplTranslator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    timeout: Duration,
}

impl DeeplTranslator {
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
            timeout,
        }
    }
}

/// Form fields for a translate call. Split out so the short-text hint
/// heuristic is testable without a network.
fn build_params(
    api_key: &str,
    text: &str,
    source: Option<Lang>,
    target: Lang,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("auth_key", api_key.to_string()),
        ("text", text.to_string()),
        ("target_lang", target.deepl_tag().to_string()),
    ];

    if let Some(source) = source {
        if text.trim().chars().count() > SOURCE_HINT_MIN_CHARS {
            params.push(("source_lang", source.deepl_tag().to_string()));
        }
    }

    params
}

#[derive(Deserialize)]
struct DeeplResponse {
    translations: Vec<DeeplTranslation>,
}

#[derive(Deserialize)]
struct DeeplTranslation {
    text: String,
}

#[async_trait]
impl TranslationProvider for DeeplTranslator {
    fn name(&self) -> ProviderName {
        ProviderName::Deepl
    }

    async fn translate(
        &self,
        text: &str,
        source: Option<Lang>,
        target: Lang,
    ) -> Result<String, ProviderError> {
        let params = build_params(&self.api_key, text, source, target);

        let response = self
            .client
            .post(&self.api_url)
            .timeout(self.timeout)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body: DeeplResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))?;

        let translation = body
            .translations
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Malformed("empty translations array".to_string()))?;

        Ok(translation.text)
    }
}
