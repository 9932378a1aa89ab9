//! `ContentStore` implementation over the libSQL repos.

use lingo_core::entities::{
    Communication, ContextAnnotation, ContextType, DescriptionOwner, Language, LocalizedText,
    Prompt, Situation, Utterance,
};
use lingo_core::store::ContentStore;

use crate::error::DatabaseError;
use crate::service::ContentService;

impl ContentStore for ContentService {
    type Error = DatabaseError;

    async fn situation(&self, id: i64) -> Result<Option<Situation>, Self::Error> {
        self.get_situation(id).await
    }

    async fn descriptions(
        &self,
        owner: DescriptionOwner,
    ) -> Result<Vec<LocalizedText>, Self::Error> {
        self.list_descriptions(owner).await
    }

    async fn situation_prompts(&self, situation_id: i64) -> Result<Vec<Prompt>, Self::Error> {
        self.list_situation_prompts(situation_id).await
    }

    async fn situation_communications(
        &self,
        situation_id: i64,
    ) -> Result<Vec<Communication>, Self::Error> {
        self.list_situation_communications(situation_id).await
    }

    async fn communication_utterances(
        &self,
        communication_id: i64,
    ) -> Result<Vec<Utterance>, Self::Error> {
        self.list_communication_utterances(communication_id).await
    }

    async fn utterance_contexts(
        &self,
        utterance_id: i64,
    ) -> Result<Vec<ContextAnnotation>, Self::Error> {
        self.list_utterance_contexts(utterance_id).await
    }

    async fn context_types_named(&self, name: &str) -> Result<Vec<ContextType>, Self::Error> {
        self.context_types_by_name(name).await
    }

    async fn languages(&self) -> Result<Vec<Language>, Self::Error> {
        self.list_languages().await
    }

    async fn situations_with_target(&self, code: &str) -> Result<Vec<Situation>, Self::Error> {
        self.list_situations_for_target(code).await
    }
}
