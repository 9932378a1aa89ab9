//! Localization filter: keep the localized texts written in one language.

use crate::entities::LocalizedText;

/// Return the entries of `texts` whose language is `lang_code`, in their
/// original order.
///
/// Well-formed data has at most one entry per language, but every match is
/// kept. No match yields an empty vector, which callers render as an empty
/// description list.
pub fn localized_in<I>(texts: I, lang_code: &str) -> Vec<LocalizedText>
where
    I: IntoIterator<Item = LocalizedText>,
{
    texts
        .into_iter()
        .filter(|text| text.language == lang_code)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(id: i64, language: &str, content: &str) -> LocalizedText {
        LocalizedText {
            id,
            language: language.into(),
            content: content.into(),
        }
    }

    #[test]
    fn keeps_only_matching_language() {
        let texts = vec![
            text(1, "eng", "At the market"),
            text(2, "spa", "En el mercado"),
            text(3, "fra", "Au marché"),
        ];
        assert_eq!(localized_in(texts, "spa"), vec![text(2, "spa", "En el mercado")]);
    }

    #[test]
    fn tolerates_duplicates_and_preserves_order() {
        let texts = vec![
            text(4, "eng", "second wording"),
            text(1, "spa", "x"),
            text(2, "eng", "first wording"),
        ];
        let kept = localized_in(texts, "eng");
        assert_eq!(
            kept.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![4, 2]
        );
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let texts = vec![text(1, "eng", "hello")];
        assert!(localized_in(texts, "jpn").is_empty());
        assert!(localized_in(Vec::new(), "eng").is_empty());
    }
}
