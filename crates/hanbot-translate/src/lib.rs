use std::fmt;

use async_trait::async_trait;
use hanbot_lang::Lang;

pub mod deepl;
pub mod error;
pub mod google;
pub mod orchestrator;
pub mod policy;

pub use deepl::DeeplTranslator;
pub use error::ProviderError;
pub use google::GoogleTranslator;
pub use orchestrator::{Orchestrator, TranslationOutcome, TranslationRequest};

/// Translation provider interface
///
/// Both the primary and fallback services implement this; the orchestrator
/// only ever sees the trait object, so either side can be replaced by a test
/// double.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    fn name(&self) -> ProviderName;

    /// Translate text into `target`. A `None` source lets the backing
    /// service detect the language itself.
    async fn translate(
        &self,
        text: &str,
        source: Option<Lang>,
        target: Lang,
    ) -> Result<String, ProviderError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderName {
    Deepl,
    Google,
}

impl fmt::Display for ProviderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderName::Deepl => f.write_str("DeepL"),
            ProviderName::Google => f.write_str("Google Translate"),
        }
    }
}
