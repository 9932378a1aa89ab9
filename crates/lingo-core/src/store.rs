//! The entity store seam.
//!
//! The resolver only reads through this trait, so any backend that can answer
//! these lookups in a stable order can serve content trees. `lingo-db`
//! provides the libSQL implementation.

use crate::entities::{
    Communication, ContextAnnotation, ContextType, DescriptionOwner, Language, LocalizedText,
    Prompt, Situation, Utterance,
};

/// Read access to the content graph.
///
/// Every collection is returned in store order (insertion order). The
/// resolver never re-sorts, so implementations must keep that order stable
/// between calls for unchanged data.
#[allow(async_fn_in_trait)]
pub trait ContentStore {
    /// Backend failure. Always surfaced as a transient store failure.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Look up a situation, including its supported target languages.
    async fn situation(&self, id: i64) -> Result<Option<Situation>, Self::Error>;

    /// All localized texts attached to `owner`, in every language.
    async fn descriptions(&self, owner: DescriptionOwner)
    -> Result<Vec<LocalizedText>, Self::Error>;

    async fn situation_prompts(&self, situation_id: i64) -> Result<Vec<Prompt>, Self::Error>;

    async fn situation_communications(
        &self,
        situation_id: i64,
    ) -> Result<Vec<Communication>, Self::Error>;

    /// All utterances of a communication, in every language.
    async fn communication_utterances(
        &self,
        communication_id: i64,
    ) -> Result<Vec<Utterance>, Self::Error>;

    async fn utterance_contexts(
        &self,
        utterance_id: i64,
    ) -> Result<Vec<ContextAnnotation>, Self::Error>;

    /// Every context type whose `name` equals `name`, in store order.
    async fn context_types_named(&self, name: &str) -> Result<Vec<ContextType>, Self::Error>;

    /// All languages ordered by code.
    async fn languages(&self) -> Result<Vec<Language>, Self::Error>;

    /// Situations supporting `code` as a target language, ordered by id.
    async fn situations_with_target(&self, code: &str) -> Result<Vec<Situation>, Self::Error>;
}
