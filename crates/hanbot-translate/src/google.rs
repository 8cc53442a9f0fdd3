use std::time::Duration;

use async_trait::async_trait;
use hanbot_lang::Lang;

use crate::error::ProviderError;
use crate::{ProviderName, TranslationProvider};

const ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Fallback provider: the unofficial keyless `translate_a/single` endpoint,
/// the same service the deployed bot reached through googletrans.
#[derive(Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl GoogleTranslator {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: ENDPOINT.to_string(),
            timeout,
        }
    }
}

/// Google's dialect uses zh-cn/zh-tw tags, remapped here from the
/// normalized codes.
fn request_url(endpoint: &str, text: &str, source: Option<Lang>, target: Lang) -> String {
    let sl = source.map(|l| l.google_tag()).unwrap_or("auto");
    format!(
        "{}?client=gtx&sl={}&tl={}&dt=t&q={}",
        endpoint,
        sl,
        target.google_tag(),
        urlencoding::encode(text)
    )
}

/// The response is a nested array; the translation is the concatenation of
/// the first element of each segment in `json[0]`.
fn extract_translation(json: &serde_json::Value) -> Result<String, ProviderError> {
    let segments = json
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| ProviderError::Malformed("missing segments array".to_string()))?;

    let mut translated = String::new();
    for segment in segments {
        if let Some(text) = segment.get(0).and_then(|v| v.as_str()) {
            translated.push_str(text);
        }
    }

    if translated.is_empty() {
        return Err(ProviderError::Malformed(
            "no translated text in response".to_string(),
        ));
    }

    Ok(translated)
}

#[async_trait]
impl TranslationProvider for GoogleTranslator {
    fn name(&self) -> ProviderName {
        ProviderName::Google
    }

    async fn translate(
        &self,
        text: &str,
        source: Option<Lang>,
        target: Lang,
    ) -> Result<String, ProviderError> {
        let url = request_url(&self.endpoint, text, source, target);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", "Mozilla/5.0")
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))?;

        extract_translation(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn url_remaps_traditional_chinese() {
        let url = request_url(ENDPOINT, "안녕", Some(Lang::Ko), Lang::ZhHant);
        assert!(url.contains("sl=ko"));
        assert!(url.contains("tl=zh-tw"));
    }

    #[test]
    fn url_uses_auto_without_source() {
        let url = request_url(ENDPOINT, "hello", None, Lang::Ko);
        assert!(url.contains("sl=auto"));
        assert!(url.contains("tl=ko"));
    }

    #[test]
    fn url_encodes_text() {
        let url = request_url(ENDPOINT, "a b&c", Some(Lang::En), Lang::Ko);
        assert!(url.ends_with("q=a%20b%26c"));
    }

    #[test]
    fn extracts_multi_segment_translation() {
        let body = json!([[["안녕 ", "hello ", null], ["세계", "world", null]], null, "en"]);
        assert_eq!(extract_translation(&body).unwrap(), "안녕 세계");
    }

    #[test]
    fn empty_response_is_malformed() {
        let body = json!([[], null, "en"]);
        assert!(matches!(
            extract_translation(&body),
            Err(ProviderError::Malformed(_))
        ));
    }
}
