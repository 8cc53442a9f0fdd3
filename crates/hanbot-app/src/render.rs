use hanbot_config::bot::BotConfig;
use hanbot_lang::Lang;
use hanbot_translate::{TranslationOutcome, orchestrator};
use hanbot_types::{OnDemandTarget, Reply};

/// Flag prefix for the auto-translation pair.
fn flag_prefix(target: Lang) -> &'static str {
    match target {
        Lang::Ko => "🇰🇷： ",
        Lang::ZhHant => "🇹🇼： ",
        _ => "",
    }
}

/// Flag prefix for the two on-demand targets.
fn on_demand_prefix(target: OnDemandTarget) -> &'static str {
    match target {
        OnDemandTarget::Japanese => "🇯🇵： ",
        OnDemandTarget::English => "🇺🇸： ",
    }
}

/// Render an auto-mode outcome as a deliverable reply. Success replies carry
/// the two on-demand triggers plus the original text and resolved source
/// language a trigger press must echo back.
pub fn render_auto(channel_id: u64, original_text: &str, outcome: &TranslationOutcome) -> Reply {
    match outcome {
        TranslationOutcome::Success {
            text,
            source,
            target,
            provider,
        } => Reply::Translation {
            channel_id,
            body: format!("{}{}", flag_prefix(*target), text),
            provider: provider.to_string(),
            original_text: original_text.to_string(),
            source_lang: Some(*source),
            actions: [OnDemandTarget::Japanese, OnDemandTarget::English],
        },
        TranslationOutcome::Failure { message, .. } => Reply::Error {
            channel_id,
            body: format!("❌ 翻訳エラー: {message}"),
        },
    }
}

/// Render an on-demand outcome: a flagged line appended under the original
/// reply, or a short error.
pub fn render_on_demand(
    channel_id: u64,
    original_text: &str,
    target: OnDemandTarget,
    outcome: &TranslationOutcome,
) -> Reply {
    match outcome {
        TranslationOutcome::Success {
            text,
            source,
            provider,
            ..
        } => Reply::Translation {
            channel_id,
            body: format!("{}{}", on_demand_prefix(target), text),
            provider: provider.to_string(),
            original_text: original_text.to_string(),
            source_lang: Some(*source),
            actions: [OnDemandTarget::Japanese, OnDemandTarget::English],
        },
        TranslationOutcome::Failure { .. } => Reply::Error {
            channel_id,
            body: match target {
                OnDemandTarget::Japanese => "❌ 日本語翻訳に失敗しました".to_string(),
                OnDemandTarget::English => "❌ 英語翻訳に失敗しました".to_string(),
            },
        },
    }
}

pub fn help_text(config: &BotConfig) -> String {
    let mut text = String::from(
        "🤖 翻訳Bot ヘルプ\n\
         • 中国語 → 韓国語 / 韓国語 → 中国語繁体字 の自動翻訳\n\
         • 日本語・English の追加翻訳トリガー\n\
         • `!help` - このヘルプを表示\n",
    );
    text.push_str(&format!(
        "• `{}` - Bot停止（管理者のみ）\n",
        config.shutdown_phrase
    ));
    if !config.excluded_channels.is_empty() {
        let mut ids: Vec<String> = config
            .excluded_channels
            .iter()
            .map(|id| id.to_string())
            .collect();
        ids.sort();
        text.push_str(&format!("• 除外チャンネル: {}\n", ids.join(", ")));
    }
    text
}

/// Build the on-demand request carried by a trigger press.
pub fn on_demand_request(
    req: &hanbot_types::OnDemandRequest,
) -> (orchestrator::TranslationRequest, Lang) {
    (
        orchestrator::TranslationRequest::new(req.original_text.clone(), req.source_lang),
        req.target.lang(),
    )
}

#[cfg(test)]
mod tests {
    use hanbot_translate::ProviderName;

    use super::*;

    fn success(target: Lang) -> TranslationOutcome {
        TranslationOutcome::Success {
            text: "번역".to_string(),
            source: Lang::Zh,
            target,
            provider: ProviderName::Deepl,
        }
    }

    #[test]
    fn korean_target_gets_korean_flag() {
        match render_auto(7, "你好", &success(Lang::Ko)) {
            Reply::Translation { body, .. } => assert_eq!(body, "🇰🇷： 번역"),
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn traditional_chinese_target_gets_taiwan_flag() {
        match render_auto(7, "안녕", &success(Lang::ZhHant)) {
            Reply::Translation { body, .. } => assert_eq!(body, "🇹🇼： 번역"),
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn other_targets_get_no_flag() {
        match render_auto(7, "你好", &success(Lang::Ja)) {
            Reply::Translation { body, .. } => assert_eq!(body, "번역"),
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn success_reply_carries_trigger_context() {
        match render_auto(7, "你好世界", &success(Lang::Ko)) {
            Reply::Translation {
                original_text,
                source_lang,
                actions,
                ..
            } => {
                assert_eq!(original_text, "你好世界");
                assert_eq!(source_lang, Some(Lang::Zh));
                assert_eq!(
                    actions,
                    [OnDemandTarget::Japanese, OnDemandTarget::English]
                );
            }
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn failure_renders_error_reply() {
        let outcome = TranslationOutcome::Failure {
            message: "translation failed: request timed out".to_string(),
            provider: ProviderName::Google,
        };
        match render_auto(7, "你好", &outcome) {
            Reply::Error { body, .. } => assert!(body.contains("request timed out")),
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn on_demand_success_uses_target_flag() {
        match render_on_demand(7, "你好", OnDemandTarget::Japanese, &success(Lang::Ja)) {
            Reply::Translation { body, .. } => assert_eq!(body, "🇯🇵： 번역"),
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn on_demand_failure_is_a_short_message() {
        let outcome = TranslationOutcome::Failure {
            message: "x".to_string(),
            provider: ProviderName::Google,
        };
        match render_on_demand(7, "你好", OnDemandTarget::English, &outcome) {
            Reply::Error { body, .. } => assert!(body.contains("英語")),
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn help_lists_excluded_channels() {
        let mut config = BotConfig::default();
        config.excluded_channels.insert(42);
        let text = help_text(&config);
        assert!(text.contains("42"));
        assert!(text.contains(&config.shutdown_phrase));
    }
}
