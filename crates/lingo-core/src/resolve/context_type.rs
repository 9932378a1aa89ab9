//! Context type lookup by free-text label.

use crate::entities::DescriptionOwner;
use crate::errors::ContentError;
use crate::localization::localized_in;
use crate::store::ContentStore;

use super::tree::ResolvedContextType;

/// Resolve a context annotation's label to its type record.
///
/// Returns `None` when no type carries `label`. When several do, the first in
/// store order wins; the duplicate is logged since names are meant to be unique.
///
/// # Errors
///
/// Returns `ContentError::TransientStoreFailure` if the store fails.
pub async fn resolve_context_type<S: ContentStore>(
    store: &S,
    label: &str,
    native_lang: &str,
) -> Result<Option<ResolvedContextType>, ContentError> {
    let candidates = store
        .context_types_named(label)
        .await
        .map_err(ContentError::store)?;

    if candidates.len() > 1 {
        tracing::warn!(
            label,
            matches = candidates.len(),
            "duplicate context type name; using first in store order"
        );
    }

    let Some(context_type) = candidates.into_iter().next() else {
        return Ok(None);
    };

    let texts = store
        .descriptions(DescriptionOwner::ContextType(context_type.id))
        .await
        .map_err(ContentError::store)?;

    Ok(Some(ResolvedContextType {
        context_type,
        descriptions: localized_in(texts, native_lang),
    }))
}
