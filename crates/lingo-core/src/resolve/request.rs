//! Parameter validation for the situation detail operation.

use crate::errors::ContentError;

/// Validated input for [`resolve_situation`](super::resolve_situation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub situation_id: i64,
    /// Language being learned; utterances are filtered to it.
    pub target_lang: String,
    /// Language explanatory text is shown in.
    pub native_lang: String,
}

impl DetailRequest {
    /// Build a request from raw, possibly absent, parameters.
    ///
    /// An absent or empty language is missing; any other value is kept
    /// verbatim. When both are missing the error names both, `target_lang`
    /// first.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::MissingParameter` naming every missing parameter.
    pub fn from_params(
        situation_id: i64,
        target_lang: Option<&str>,
        native_lang: Option<&str>,
    ) -> Result<Self, ContentError> {
        let target = present(target_lang);
        let native = present(native_lang);

        match (target, native) {
            (Some(target), Some(native)) => Ok(Self {
                situation_id,
                target_lang: target.to_string(),
                native_lang: native.to_string(),
            }),
            (target, native) => {
                let mut missing = Vec::with_capacity(2);
                if target.is_none() {
                    missing.push("target_lang");
                }
                if native.is_none() {
                    missing.push("native_lang");
                }
                Err(ContentError::MissingParameter(missing))
            }
        }
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, Some("eng"), vec!["target_lang"])]
    #[case(Some("spa"), None, vec!["native_lang"])]
    #[case(None, None, vec!["target_lang", "native_lang"])]
    #[case(Some(""), Some("eng"), vec!["target_lang"])]
    #[case(Some("spa"), Some(""), vec!["native_lang"])]
    fn missing_parameters_are_named(
        #[case] target: Option<&str>,
        #[case] native: Option<&str>,
        #[case] expected: Vec<&'static str>,
    ) {
        let err = DetailRequest::from_params(1, target, native).unwrap_err();
        match err {
            ContentError::MissingParameter(names) => assert_eq!(names, expected),
            other => panic!("expected MissingParameter, got {other:?}"),
        }
    }

    #[test]
    fn both_present_builds_request() {
        let req = DetailRequest::from_params(3, Some("spa"), Some("eng")).unwrap();
        assert_eq!(
            req,
            DetailRequest {
                situation_id: 3,
                target_lang: "spa".into(),
                native_lang: "eng".into(),
            }
        );
    }

    #[rstest]
    #[case("  ")]
    #[case(" spa ")]
    fn non_empty_values_are_kept_verbatim(#[case] target: &str) {
        let req = DetailRequest::from_params(3, Some(target), Some("eng")).unwrap();
        assert_eq!(req.target_lang, target);
    }
}
