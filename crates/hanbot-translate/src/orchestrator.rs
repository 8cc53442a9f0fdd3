use std::sync::Arc;

use hanbot_lang::{Lang, detect};

use crate::error::ProviderError;
use crate::policy;
use crate::{ProviderName, TranslationProvider};

/// One translation job: the message text plus an optional source-language
/// hint (cached from a previous pass for on-demand requests). Immutable once
/// constructed and discarded after an outcome is produced.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    text: String,
    source: Option<Lang>,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, source: Option<Lang>) -> Self {
        Self {
            text: text.into(),
            source,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> Option<Lang> {
        self.source
    }
}

/// Terminal result of a translation run. Exactly one variant, always.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationOutcome {
    Success {
        text: String,
        source: Lang,
        target: Lang,
        provider: ProviderName,
    },
    Failure {
        message: String,
        provider: ProviderName,
    },
}

/// Outcome of the primary step: either terminal, or a signal to run the
/// fallback provider with the same languages.
enum PrimaryStep {
    Done(TranslationOutcome),
    NeedsFallback(ProviderError),
}

/// Sequences detection, target policy and the provider chain.
///
/// Per request the flow is
/// `Detect (if no hint) → ResolveTarget → TryPrimary → TryFallback?` and
/// every path ends in exactly one [`TranslationOutcome`] — neither entry
/// point can return an error. The orchestrator holds no mutable state, so
/// re-invoking it with identical inputs is always safe.
pub struct Orchestrator {
    primary: Arc<dyn TranslationProvider>,
    fallback: Arc<dyn TranslationProvider>,
}

impl Orchestrator {
    pub fn new(primary: Arc<dyn TranslationProvider>, fallback: Arc<dyn TranslationProvider>) -> Self {
        Self { primary, fallback }
    }

    /// Automatic mode: detect the source, pick the target from the
    /// closed-pair policy.
    pub async fn translate_auto(&self, request: &TranslationRequest) -> TranslationOutcome {
        let source = self.resolve_source(request);
        let target = policy::auto_target(source);
        self.run(request.text(), source, target).await
    }

    /// On-demand mode: fixed target, policy bypassed. Detection runs only
    /// when the original request's source language was not cached.
    pub async fn translate_fixed(
        &self,
        request: &TranslationRequest,
        target: Lang,
    ) -> TranslationOutcome {
        let source = self.resolve_source(request);
        self.run(request.text(), source, target).await
    }

    fn resolve_source(&self, request: &TranslationRequest) -> Lang {
        request.source().unwrap_or_else(|| detect(request.text()))
    }

    async fn run(&self, text: &str, source: Lang, target: Lang) -> TranslationOutcome {
        match self.try_primary(text, source, target).await {
            PrimaryStep::Done(outcome) => outcome,
            PrimaryStep::NeedsFallback(err) => {
                tracing::warn!(
                    provider = %self.primary.name(),
                    error = %err,
                    "primary provider failed, falling back"
                );
                self.try_fallback(text, source, target).await
            }
        }
    }

    async fn try_primary(&self, text: &str, source: Lang, target: Lang) -> PrimaryStep {
        match self.primary.translate(text, Some(source), target).await {
            Ok(translated) => PrimaryStep::Done(TranslationOutcome::Success {
                text: translated,
                source,
                target,
                provider: self.primary.name(),
            }),
            Err(err) => PrimaryStep::NeedsFallback(err),
        }
    }

    /// Last line of defense: any error here becomes a terminal Failure with
    /// a short human-readable message.
    async fn try_fallback(&self, text: &str, source: Lang, target: Lang) -> TranslationOutcome {
        match self.fallback.translate(text, Some(source), target).await {
            Ok(translated) => TranslationOutcome::Success {
                text: translated,
                source,
                target,
                provider: self.fallback.name(),
            },
            Err(err) => {
                tracing::error!(
                    provider = %self.fallback.name(),
                    error = %err,
                    "fallback provider failed"
                );
                TranslationOutcome::Failure {
                    message: format!("translation failed: {err}"),
                    provider: self.fallback.name(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    enum MockBehavior {
        Succeed(&'static str),
        FailStatus(u16),
        FailTimeout,
    }

    struct MockProvider {
        name: ProviderName,
        behavior: MockBehavior,
        calls: Mutex<Vec<(String, Option<Lang>, Lang)>>,
    }

    impl MockProvider {
        fn new(name: ProviderName, behavior: MockBehavior) -> Arc<Self> {
            Arc::new(Self {
                name,
                behavior,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<(String, Option<Lang>, Lang)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TranslationProvider for MockProvider {
        fn name(&self) -> ProviderName {
            self.name
        }

        async fn translate(
            &self,
            text: &str,
            source: Option<Lang>,
            target: Lang,
        ) -> Result<String, ProviderError> {
            self.calls
                .lock()
                .unwrap()
                .push((text.to_string(), source, target));
            match &self.behavior {
                MockBehavior::Succeed(out) => Ok(out.to_string()),
                MockBehavior::FailStatus(code) => Err(ProviderError::Status(*code)),
                MockBehavior::FailTimeout => Err(ProviderError::Timeout),
            }
        }
    }

    fn orchestrator(primary: Arc<MockProvider>, fallback: Arc<MockProvider>) -> Orchestrator {
        Orchestrator::new(primary, fallback)
    }

    const CHINESE: &str = "今天天气很好，我们一起去公园散步吧。";
    const KOREAN: &str = "안녕하세요, 오늘 날씨가 정말 좋네요.";

    #[tokio::test]
    async fn auto_chinese_goes_to_korean_via_primary() {
        let primary = MockProvider::new(ProviderName::Deepl, MockBehavior::Succeed("안녕하세요 세계"));
        let fallback = MockProvider::new(ProviderName::Google, MockBehavior::Succeed("unused"));
        let orch = orchestrator(primary.clone(), fallback.clone());

        let outcome = orch
            .translate_auto(&TranslationRequest::new(CHINESE, None))
            .await;

        assert_eq!(
            outcome,
            TranslationOutcome::Success {
                text: "안녕하세요 세계".to_string(),
                source: Lang::Zh,
                target: Lang::Ko,
                provider: ProviderName::Deepl,
            }
        );
        assert!(fallback.calls().is_empty());

        let calls = primary.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1, Some(Lang::Zh));
    }

    #[tokio::test]
    async fn primary_http_error_triggers_fallback_with_remapped_target() {
        let primary = MockProvider::new(ProviderName::Deepl, MockBehavior::FailStatus(456));
        let fallback = MockProvider::new(ProviderName::Google, MockBehavior::Succeed("你好"));
        let orch = orchestrator(primary.clone(), fallback.clone());

        let outcome = orch
            .translate_auto(&TranslationRequest::new(KOREAN, None))
            .await;

        match outcome {
            TranslationOutcome::Success {
                target, provider, ..
            } => {
                assert_eq!(target, Lang::ZhHant);
                assert_eq!(provider, ProviderName::Google);
            }
            other => panic!("expected fallback success, got {other:?}"),
        }

        let calls = fallback.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, KOREAN);
        assert_eq!(calls[0].2, Lang::ZhHant);
        assert_eq!(calls[0].2.google_tag(), "zh-tw");
    }

    #[tokio::test]
    async fn primary_timeout_triggers_fallback() {
        let primary = MockProvider::new(ProviderName::Deepl, MockBehavior::FailTimeout);
        let fallback = MockProvider::new(ProviderName::Google, MockBehavior::Succeed("ok"));
        let orch = orchestrator(primary, fallback.clone());

        let outcome = orch
            .translate_auto(&TranslationRequest::new(CHINESE, None))
            .await;

        assert!(matches!(
            outcome,
            TranslationOutcome::Success {
                provider: ProviderName::Google,
                ..
            }
        ));
        assert_eq!(fallback.calls().len(), 1);
    }

    #[tokio::test]
    async fn fallback_failure_is_terminal() {
        let primary = MockProvider::new(ProviderName::Deepl, MockBehavior::FailStatus(503));
        let fallback = MockProvider::new(ProviderName::Google, MockBehavior::FailTimeout);
        let orch = orchestrator(primary, fallback);

        let outcome = orch
            .translate_auto(&TranslationRequest::new(KOREAN, None))
            .await;

        match outcome {
            TranslationOutcome::Failure { message, provider } => {
                assert!(!message.is_empty());
                assert_eq!(provider, ProviderName::Google);
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fixed_target_bypasses_policy_and_uses_cached_source() {
        let primary = MockProvider::new(ProviderName::Deepl, MockBehavior::Succeed("こんにちは"));
        let fallback = MockProvider::new(ProviderName::Google, MockBehavior::Succeed("unused"));
        let orch = orchestrator(primary.clone(), fallback);

        // Garbage text the detector would misread; the cached hint must win.
        let request = TranslationRequest::new("zxqj", Some(Lang::Ko));
        let outcome = orch.translate_fixed(&request, Lang::Ja).await;

        assert!(matches!(
            outcome,
            TranslationOutcome::Success {
                target: Lang::Ja,
                source: Lang::Ko,
                ..
            }
        ));

        let calls = primary.calls();
        assert_eq!(calls[0].1, Some(Lang::Ko));
        assert_eq!(calls[0].2, Lang::Ja);
    }

    #[tokio::test]
    async fn fixed_without_hint_redetects() {
        let primary = MockProvider::new(ProviderName::Deepl, MockBehavior::Succeed("hello"));
        let fallback = MockProvider::new(ProviderName::Google, MockBehavior::Succeed("unused"));
        let orch = orchestrator(primary.clone(), fallback);

        orch.translate_fixed(&TranslationRequest::new(KOREAN, None), Lang::En)
            .await;

        assert_eq!(primary.calls()[0].1, Some(Lang::Ko));
    }

    #[tokio::test]
    async fn repeated_fixed_invocation_is_idempotent() {
        let primary = MockProvider::new(ProviderName::Deepl, MockBehavior::Succeed("こんにちは"));
        let fallback = MockProvider::new(ProviderName::Google, MockBehavior::Succeed("unused"));
        let orch = orchestrator(primary, fallback);

        let request = TranslationRequest::new(CHINESE, Some(Lang::Zh));
        let first = orch.translate_fixed(&request, Lang::Ja).await;
        let second = orch.translate_fixed(&request, Lang::Ja).await;

        assert_eq!(first, second);
    }
}
