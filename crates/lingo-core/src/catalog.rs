//! Listing operations: languages and situations per target language.

use crate::entities::{DescriptionOwner, Language};
use crate::errors::ContentError;
use crate::localization::localized_in;
use crate::responses::{SituationSummary, describe_all};
use crate::store::ContentStore;

/// All languages, ordered by code.
///
/// # Errors
///
/// Returns `ContentError::TransientStoreFailure` if the store fails.
pub async fn list_languages<S: ContentStore>(store: &S) -> Result<Vec<Language>, ContentError> {
    store.languages().await.map_err(ContentError::store)
}

/// Situations offering `lang` as a target language, ordered by id, each with
/// its descriptions in `lang`.
///
/// # Errors
///
/// Returns `ContentError::TransientStoreFailure` if the store fails.
pub async fn list_situations<S: ContentStore>(
    store: &S,
    lang: &str,
) -> Result<Vec<SituationSummary>, ContentError> {
    let situations = store
        .situations_with_target(lang)
        .await
        .map_err(ContentError::store)?;

    let mut summaries = Vec::with_capacity(situations.len());
    for situation in situations {
        let texts = store
            .descriptions(DescriptionOwner::Situation(situation.id))
            .await
            .map_err(ContentError::store)?;
        summaries.push(SituationSummary {
            id: situation.id,
            last_updated: situation.last_updated,
            image_url: situation.image_url,
            language_code: lang.to_string(),
            descriptions: describe_all(localized_in(texts, lang)),
        });
    }
    Ok(summaries)
}
