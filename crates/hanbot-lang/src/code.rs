use std::fmt;
use std::str::FromStr;

/// Normalized language codes: the set the primary provider accepts, plus the
/// traditional-Chinese target variant. Anything outside this set coerces to
/// [`Lang::En`] at the detection boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    En,
    Ja,
    De,
    Fr,
    Es,
    Pt,
    It,
    Ru,
    /// Simplified Chinese (detector output; also what "zh" means on the wire)
    Zh,
    /// Traditional Chinese. Never produced by detection, only as a target.
    ZhHant,
    Ko,
    Nl,
    Pl,
    Sv,
    Da,
    Fi,
    No,
    Cs,
    Hu,
    Ro,
    Sk,
    Sl,
    Bg,
    Et,
    Lv,
    Lt,
    Uk,
    Ar,
    Tr,
}

impl Lang {
    /// Canonical lowercase code ("zh-hant" for the traditional variant).
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ja => "ja",
            Lang::De => "de",
            Lang::Fr => "fr",
            Lang::Es => "es",
            Lang::Pt => "pt",
            Lang::It => "it",
            Lang::Ru => "ru",
            Lang::Zh => "zh",
            Lang::ZhHant => "zh-hant",
            Lang::Ko => "ko",
            Lang::Nl => "nl",
            Lang::Pl => "pl",
            Lang::Sv => "sv",
            Lang::Da => "da",
            Lang::Fi => "fi",
            Lang::No => "no",
            Lang::Cs => "cs",
            Lang::Hu => "hu",
            Lang::Ro => "ro",
            Lang::Sk => "sk",
            Lang::Sl => "sl",
            Lang::Bg => "bg",
            Lang::Et => "et",
            Lang::Lv => "lv",
            Lang::Lt => "lt",
            Lang::Uk => "uk",
            Lang::Ar => "ar",
            Lang::Tr => "tr",
        }
    }

    /// Tag in the primary provider's dialect (uppercase, "ZH-HANT").
    pub fn deepl_tag(&self) -> &'static str {
        match self {
            Lang::En => "EN",
            Lang::Ja => "JA",
            Lang::De => "DE",
            Lang::Fr => "FR",
            Lang::Es => "ES",
            Lang::Pt => "PT",
            Lang::It => "IT",
            Lang::Ru => "RU",
            Lang::Zh => "ZH",
            Lang::ZhHant => "ZH-HANT",
            Lang::Ko => "KO",
            Lang::Nl => "NL",
            Lang::Pl => "PL",
            Lang::Sv => "SV",
            Lang::Da => "DA",
            Lang::Fi => "FI",
            Lang::No => "NO",
            Lang::Cs => "CS",
            Lang::Hu => "HU",
            Lang::Ro => "RO",
            Lang::Sk => "SK",
            Lang::Sl => "SL",
            Lang::Bg => "BG",
            Lang::Et => "ET",
            Lang::Lv => "LV",
            Lang::Lt => "LT",
            Lang::Uk => "UK",
            Lang::Ar => "AR",
            Lang::Tr => "TR",
        }
    }

    /// Tag in the fallback provider's dialect. Google distinguishes Chinese
    /// variants as zh-cn / zh-tw instead of zh / zh-hant.
    pub fn google_tag(&self) -> &'static str {
        match self {
            Lang::Zh => "zh-cn",
            Lang::ZhHant => "zh-tw",
            other => other.code(),
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLang(pub String);

impl fmt::Display for UnknownLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language code: {}", self.0)
    }
}

impl std::error::Error for UnknownLang {}

impl FromStr for Lang {
    type Err = UnknownLang;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let lang = match lowered.as_str() {
            "en" => Lang::En,
            "ja" => Lang::Ja,
            "de" => Lang::De,
            "fr" => Lang::Fr,
            "es" => Lang::Es,
            "pt" => Lang::Pt,
            "it" => Lang::It,
            "ru" => Lang::Ru,
            "zh" | "zh-cn" | "zh-hans" => Lang::Zh,
            "zh-hant" | "zh-tw" => Lang::ZhHant,
            "ko" => Lang::Ko,
            "nl" => Lang::Nl,
            "pl" => Lang::Pl,
            "sv" => Lang::Sv,
            "da" => Lang::Da,
            "fi" => Lang::Fi,
            "no" => Lang::No,
            "cs" => Lang::Cs,
            "hu" => Lang::Hu,
            "ro" => Lang::Ro,
            "sk" => Lang::Sk,
            "sl" => Lang::Sl,
            "bg" => Lang::Bg,
            "et" => Lang::Et,
            "lv" => Lang::Lv,
            "lt" => Lang::Lt,
            "uk" => Lang::Uk,
            "ar" => Lang::Ar,
            "tr" => Lang::Tr,
            _ => return Err(UnknownLang(lowered)),
        };
        Ok(lang)
    }
}
