use crate::code::Lang;

/// Best-effort language identification for inbound chat text.
///
/// Detection failure is never fatal: ambiguous, too-short, or unclassifiable
/// input comes back as [`Lang::En`], as does any language the providers do
/// not understand.
pub fn detect(text: &str) -> Lang {
    match whatlang::detect(text) {
        Some(info) if info.is_reliable() => from_whatlang(info.lang()),
        _ => Lang::En,
    }
}

/// Normalization table from whatlang output onto the supported code set.
fn from_whatlang(lang: whatlang::Lang) -> Lang {
    use whatlang::Lang::*;
    match lang {
        Eng => Lang::En,
        Jpn => Lang::Ja,
        Deu => Lang::De,
        Fra => Lang::Fr,
        Spa => Lang::Es,
        Por => Lang::Pt,
        Ita => Lang::It,
        Rus => Lang::Ru,
        Cmn => Lang::Zh,
        Kor => Lang::Ko,
        Nld => Lang::Nl,
        Pol => Lang::Pl,
        Swe => Lang::Sv,
        Dan => Lang::Da,
        Fin => Lang::Fi,
        Nob => Lang::No,
        Ces => Lang::Cs,
        Hun => Lang::Hu,
        Ron => Lang::Ro,
        Slk => Lang::Sk,
        Slv => Lang::Sl,
        Bul => Lang::Bg,
        Est => Lang::Et,
        Lav => Lang::Lv,
        Lit => Lang::Lt,
        Ukr => Lang::Uk,
        Ara => Lang::Ar,
        Tur => Lang::Tr,
        _ => Lang::En,
    }
}
