use hanbot_lang::Lang;

/// Destination language for automatic translation.
///
/// The bot serves one closed pair: Chinese (either variant) goes to Korean,
/// Korean goes to traditional Chinese. Every other detected language
/// collapses onto the Korean side of the pair.
//
// Routing all non-pair languages to Korean mirrors the deployed behavior;
// flagged for product review in DESIGN.md.
pub fn auto_target(source: Lang) -> Lang {
    match source {
        Lang::Zh | Lang::ZhHant => Lang::Ko,
        Lang::Ko => Lang::ZhHant,
        _ => Lang::Ko,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chinese_variants_route_to_korean() {
        assert_eq!(auto_target(Lang::Zh), Lang::Ko);
        assert_eq!(auto_target(Lang::ZhHant), Lang::Ko);
    }

    #[test]
    fn korean_routes_to_traditional_chinese() {
        assert_eq!(auto_target(Lang::Ko), Lang::ZhHant);
    }

    #[test]
    fn everything_else_routes_to_korean() {
        for lang in [Lang::En, Lang::Ja, Lang::Ru, Lang::Tr] {
            assert_eq!(auto_target(lang), Lang::Ko);
        }
    }
}
