//! Content tree resolution.
//!
//! Walks situation → prompts and situation → communications → utterances →
//! context annotations for one `(target, native)` language pair. Native
//! language filters every description list, target language filters
//! utterances, and communications left without utterances are pruned.

mod context_type;
mod request;
mod tree;

pub use context_type::resolve_context_type;
pub use request::DetailRequest;
pub use tree::{
    ResolvedCommunication, ResolvedContext, ResolvedContextType, ResolvedPrompt,
    ResolvedSituation, ResolvedUtterance,
};

use crate::entities::{Communication, DescriptionOwner, LocalizedText, Utterance};
use crate::errors::{ContentError, NotFound};
use crate::localization::localized_in;
use crate::store::ContentStore;

/// Resolve the content tree for one situation.
///
/// Reads are issued sequentially. Any store failure aborts the whole
/// resolution; no partial tree is returned.
///
/// # Errors
///
/// - `ContentError::NotFound(NotFound::Situation)` if the situation does not exist.
/// - `ContentError::NotFound(NotFound::NoContentForTarget)` if the target language
///   is not one of the situation's target languages.
/// - `ContentError::TransientStoreFailure` if the store fails.
pub async fn resolve_situation<S: ContentStore>(
    store: &S,
    request: &DetailRequest,
) -> Result<ResolvedSituation, ContentError> {
    let DetailRequest {
        situation_id,
        target_lang,
        native_lang,
    } = request;

    let situation = store
        .situation(*situation_id)
        .await
        .map_err(ContentError::store)?
        .ok_or(NotFound::Situation { id: *situation_id })?;

    if !situation.supports_target(target_lang) {
        return Err(NotFound::NoContentForTarget {
            id: situation.id,
            target_lang: target_lang.clone(),
        }
        .into());
    }

    let descriptions =
        native_descriptions(store, DescriptionOwner::Situation(situation.id), native_lang).await?;

    let mut prompts = Vec::new();
    for prompt in store
        .situation_prompts(situation.id)
        .await
        .map_err(ContentError::store)?
    {
        let descriptions =
            native_descriptions(store, DescriptionOwner::Prompt(prompt.id), native_lang).await?;
        prompts.push(ResolvedPrompt {
            prompt,
            descriptions,
        });
    }

    let mut communications = Vec::new();
    for communication in store
        .situation_communications(situation.id)
        .await
        .map_err(ContentError::store)?
    {
        if let Some(resolved) =
            resolve_communication(store, communication, target_lang, native_lang).await?
        {
            communications.push(resolved);
        }
    }

    tracing::debug!(
        situation_id = situation.id,
        target_lang = %target_lang,
        native_lang = %native_lang,
        prompts = prompts.len(),
        communications = communications.len(),
        "resolved situation"
    );

    Ok(ResolvedSituation {
        situation,
        native_lang: native_lang.clone(),
        descriptions,
        prompts,
        communications,
    })
}

/// Resolve one communication, or `None` if it has nothing in `target_lang`.
async fn resolve_communication<S: ContentStore>(
    store: &S,
    communication: Communication,
    target_lang: &str,
    native_lang: &str,
) -> Result<Option<ResolvedCommunication>, ContentError> {
    let in_target: Vec<Utterance> = store
        .communication_utterances(communication.id)
        .await
        .map_err(ContentError::store)?
        .into_iter()
        .filter(|utterance| utterance.language == target_lang)
        .collect();

    if in_target.is_empty() {
        tracing::debug!(
            communication_id = communication.id,
            target_lang,
            "pruned communication without target-language utterances"
        );
        return Ok(None);
    }

    let mut utterances = Vec::with_capacity(in_target.len());
    for utterance in in_target {
        utterances.push(resolve_utterance(store, utterance, native_lang).await?);
    }

    let descriptions = native_descriptions(
        store,
        DescriptionOwner::Communication(communication.id),
        native_lang,
    )
    .await?;

    Ok(Some(ResolvedCommunication {
        communication,
        descriptions,
        utterances,
    }))
}

async fn resolve_utterance<S: ContentStore>(
    store: &S,
    utterance: Utterance,
    native_lang: &str,
) -> Result<ResolvedUtterance, ContentError> {
    let annotations = store
        .utterance_contexts(utterance.id)
        .await
        .map_err(ContentError::store)?;

    let mut contexts = Vec::with_capacity(annotations.len());
    for annotation in annotations {
        let context_type =
            resolve_context_type(store, &annotation.context_type, native_lang).await?;
        let descriptions =
            native_descriptions(store, DescriptionOwner::Context(annotation.id), native_lang)
                .await?;
        contexts.push(ResolvedContext {
            annotation,
            context_type,
            descriptions,
        });
    }

    Ok(ResolvedUtterance {
        utterance,
        contexts,
    })
}

async fn native_descriptions<S: ContentStore>(
    store: &S,
    owner: DescriptionOwner,
    native_lang: &str,
) -> Result<Vec<LocalizedText>, ContentError> {
    let texts = store
        .descriptions(owner)
        .await
        .map_err(ContentError::store)?;
    Ok(localized_in(texts, native_lang))
}
