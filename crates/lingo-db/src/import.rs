//! Content bundle import.
//!
//! A bundle is applied in one transaction: either every entity in it is
//! written or none is. Languages and context types that already exist are
//! reused; situations and everything nested under them are always created.

use lingo_core::bundle::{BundleCommunication, BundleSituation, BundleText, ContentBundle};
use lingo_core::entities::DescriptionOwner;
use lingo_core::responses::ImportSummary;

use crate::error::DatabaseError;
use crate::service::ContentService;

impl ContentService {
    /// Import a content bundle atomically.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` if the bundle references an
    /// unknown language, or any database error. Nothing is written on error.
    pub async fn import_bundle(
        &self,
        bundle: &ContentBundle,
    ) -> Result<ImportSummary, DatabaseError> {
        self.db().execute("BEGIN", ()).await?;
        match self.apply_bundle(bundle).await {
            Ok(summary) => {
                self.db().execute("COMMIT", ()).await?;
                tracing::info!(
                    situations = summary.situations,
                    communications = summary.communications,
                    utterances = summary.utterances,
                    descriptions = summary.descriptions,
                    "content bundle imported"
                );
                Ok(summary)
            }
            Err(e) => {
                if let Err(rollback) = self.db().execute("ROLLBACK", ()).await {
                    tracing::error!(error = %rollback, "rollback after failed import failed");
                }
                Err(e)
            }
        }
    }

    async fn apply_bundle(&self, bundle: &ContentBundle) -> Result<ImportSummary, DatabaseError> {
        let mut summary = ImportSummary::default();

        for language in &bundle.languages {
            if self.get_language(&language.code).await?.is_none() {
                self.create_language(&language.code, &language.name).await?;
                summary.languages += 1;
            }
        }

        for context_type in &bundle.context_types {
            let existing = self.context_types_by_name(&context_type.name).await?;
            match existing.first() {
                Some(ct) => {
                    let owner = DescriptionOwner::ContextType(ct.id);
                    let described: Vec<String> = self
                        .list_descriptions(owner)
                        .await?
                        .into_iter()
                        .map(|text| text.language)
                        .collect();
                    let missing: Vec<BundleText> = context_type
                        .descriptions
                        .iter()
                        .filter(|text| !described.contains(&text.language))
                        .cloned()
                        .collect();
                    self.add_texts(owner, &missing, &mut summary).await?;
                }
                None => {
                    let id = self.create_context_type(&context_type.name).await?.id;
                    summary.context_types += 1;
                    self.add_texts(
                        DescriptionOwner::ContextType(id),
                        &context_type.descriptions,
                        &mut summary,
                    )
                    .await?;
                }
            }
        }

        for situation in &bundle.situations {
            self.import_situation(situation, &mut summary).await?;
        }

        Ok(summary)
    }

    async fn import_situation(
        &self,
        bundled: &BundleSituation,
        summary: &mut ImportSummary,
    ) -> Result<(), DatabaseError> {
        let situation = self.create_situation(&bundled.image_url).await?;
        summary.situations += 1;
        tracing::debug!(situation_id = situation.id, "importing situation");

        for code in &bundled.target_languages {
            self.add_target_language(situation.id, code).await?;
        }
        self.add_texts(
            DescriptionOwner::Situation(situation.id),
            &bundled.descriptions,
            summary,
        )
        .await?;

        for bundled_prompt in &bundled.prompts {
            let prompt = self.create_prompt().await?;
            summary.prompts += 1;
            self.link_prompt(situation.id, prompt.id).await?;
            self.add_texts(
                DescriptionOwner::Prompt(prompt.id),
                &bundled_prompt.descriptions,
                summary,
            )
            .await?;
        }

        for bundled_comm in &bundled.communications {
            let communication_id = self.import_communication(bundled_comm, summary).await?;
            self.link_communication(situation.id, communication_id)
                .await?;
        }
        Ok(())
    }

    async fn import_communication(
        &self,
        bundled: &BundleCommunication,
        summary: &mut ImportSummary,
    ) -> Result<i64, DatabaseError> {
        let communication = self
            .create_communication(bundled.should_be_expressed, bundled.should_be_understood)
            .await?;
        summary.communications += 1;
        self.add_texts(
            DescriptionOwner::Communication(communication.id),
            &bundled.descriptions,
            summary,
        )
        .await?;

        for bundled_utt in &bundled.utterances {
            let utterance = self
                .create_utterance(
                    communication.id,
                    &bundled_utt.language,
                    &bundled_utt.content,
                    &bundled_utt.transliteration,
                )
                .await?;
            summary.utterances += 1;

            for bundled_ctx in &bundled_utt.contexts {
                let context = self
                    .create_context(utterance.id, &bundled_ctx.context_type)
                    .await?;
                summary.contexts += 1;
                self.add_texts(
                    DescriptionOwner::Context(context.id),
                    &bundled_ctx.descriptions,
                    summary,
                )
                .await?;
            }
        }
        Ok(communication.id)
    }

    async fn add_texts(
        &self,
        owner: DescriptionOwner,
        texts: &[BundleText],
        summary: &mut ImportSummary,
    ) -> Result<(), DatabaseError> {
        for text in texts {
            self.add_description(owner, &text.language, &text.content)
                .await?;
            summary.descriptions += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use lingo_core::bundle::{BundleText, ContentBundle};
    use lingo_core::entities::DescriptionOwner;
    use lingo_core::responses::ImportSummary;
    use pretty_assertions::assert_eq;

    use crate::error::DatabaseError;
    use crate::test_support::helpers::test_service;

    fn market_bundle() -> ContentBundle {
        serde_json::from_str(
            r#"{
                "languages": [
                    {"code": "eng", "name": "English"},
                    {"code": "spa", "name": "Spanish"}
                ],
                "context_types": [
                    {"name": "formal", "descriptions": [{"language": "eng", "content": "Formal register"}]}
                ],
                "situations": [{
                    "image_url": "https://img/market.png",
                    "target_languages": ["spa"],
                    "descriptions": [{"language": "eng", "content": "At the market"}],
                    "prompts": [{"descriptions": [{"language": "eng", "content": "Ask for a price"}]}],
                    "communications": [{
                        "shouldBeExpressed": true,
                        "shouldBeUnderstood": true,
                        "descriptions": [{"language": "eng", "content": "Greeting"}],
                        "utterances": [{
                            "language": "spa",
                            "content": "Buenos días",
                            "contexts": [{"context_type": "formal"}]
                        }]
                    }]
                }]
            }"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn import_reports_counts() {
        let svc = test_service().await;
        let summary = svc.import_bundle(&market_bundle()).await.unwrap();

        assert_eq!(
            summary,
            ImportSummary {
                languages: 2,
                context_types: 1,
                situations: 1,
                prompts: 1,
                communications: 1,
                utterances: 1,
                contexts: 1,
                descriptions: 4,
            }
        );

        let situations = svc.list_situations_for_target("spa").await.unwrap();
        assert_eq!(situations.len(), 1);
        let texts = svc
            .list_descriptions(DescriptionOwner::Situation(situations[0].id))
            .await
            .unwrap();
        assert_eq!(texts[0].content, "At the market");
    }

    #[tokio::test]
    async fn reimport_reuses_languages_and_context_types() {
        let svc = test_service().await;
        svc.import_bundle(&market_bundle()).await.unwrap();
        let second = svc.import_bundle(&market_bundle()).await.unwrap();

        assert_eq!(second.languages, 0);
        assert_eq!(second.context_types, 0);
        assert_eq!(second.situations, 1);
        assert_eq!(svc.list_context_types().await.unwrap().len(), 1);
        assert_eq!(svc.list_situations().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn reimport_skips_languages_a_context_type_already_describes() {
        let svc = test_service().await;
        svc.import_bundle(&market_bundle()).await.unwrap();

        let mut bundle = market_bundle();
        bundle.context_types[0].descriptions.push(BundleText {
            language: "spa".to_string(),
            content: "Registro formal".to_string(),
        });
        let second = svc.import_bundle(&bundle).await.unwrap();
        assert_eq!(second.descriptions, 4);

        let formal = svc.list_context_types().await.unwrap()[0].id;
        let texts = svc
            .list_descriptions(DescriptionOwner::ContextType(formal))
            .await
            .unwrap();
        let languages: Vec<&str> = texts.iter().map(|t| t.language.as_str()).collect();
        assert_eq!(languages, vec!["eng", "spa"]);
        assert_eq!(texts[0].content, "Formal register");
    }

    #[tokio::test]
    async fn failed_import_writes_nothing() {
        let svc = test_service().await;
        let mut bundle = market_bundle();
        bundle.situations[0].communications[0].utterances[0].language = "deu".to_string();

        let err = svc.import_bundle(&bundle).await.unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidState(_)));

        assert!(svc.list_languages().await.unwrap().is_empty());
        assert!(svc.list_situations().await.unwrap().is_empty());
        assert!(svc.list_context_types().await.unwrap().is_empty());
    }
}
