//! In-memory `ContentStore` used by the resolver tests.
//!
//! Unlike the libSQL store it allows duplicate context-type names and can be
//! told to fail, so tie-break and failure paths are reachable.

#[cfg(test)]
pub(crate) mod memory {
    use std::cell::Cell;

    use chrono::{DateTime, TimeZone, Utc};
    use thiserror::Error;

    use crate::entities::{
        Communication, ContextAnnotation, ContextType, DescriptionOwner, Language, LocalizedText,
        Prompt, Situation, Utterance,
    };
    use crate::store::ContentStore;

    #[derive(Debug, Error)]
    #[error("memory store offline")]
    pub struct Offline;

    #[derive(Debug, Default)]
    pub struct MemoryStore {
        pub languages: Vec<Language>,
        pub situations: Vec<Situation>,
        pub prompts: Vec<(i64, Prompt)>,
        pub communications: Vec<(i64, Communication)>,
        pub utterances: Vec<Utterance>,
        pub contexts: Vec<ContextAnnotation>,
        pub context_types: Vec<ContextType>,
        pub texts: Vec<(DescriptionOwner, LocalizedText)>,
        next_id: Cell<i64>,
        /// Fail every read once this many reads have succeeded.
        pub fail_after: Option<usize>,
        reads: Cell<usize>,
    }

    pub fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).single().unwrap()
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        fn id(&self) -> i64 {
            let id = self.next_id.get() + 1;
            self.next_id.set(id);
            id
        }

        pub fn add_situation(&mut self, targets: &[&str]) -> i64 {
            let id = self.id();
            self.situations.push(Situation {
                id,
                last_updated: ts(),
                image_url: format!("https://img.example/{id}.png"),
                target_languages: targets.iter().map(ToString::to_string).collect(),
            });
            id
        }

        pub fn prompt(&mut self, situation_id: i64) -> i64 {
            let id = self.id();
            self.prompts.push((
                situation_id,
                Prompt {
                    id,
                    last_updated: ts(),
                },
            ));
            id
        }

        pub fn communication(&mut self, situation_id: i64) -> i64 {
            let id = self.id();
            self.communications.push((
                situation_id,
                Communication {
                    id,
                    last_updated: ts(),
                    should_be_expressed: true,
                    should_be_understood: false,
                },
            ));
            id
        }

        pub fn utterance(&mut self, communication_id: i64, language: &str, content: &str) -> i64 {
            let id = self.id();
            self.utterances.push(Utterance {
                id,
                communication_id,
                last_updated: ts(),
                language: language.into(),
                transliteration: String::new(),
                content: content.into(),
            });
            id
        }

        pub fn context(&mut self, utterance_id: i64, label: &str) -> i64 {
            let id = self.id();
            self.contexts.push(ContextAnnotation {
                id,
                utterance_id,
                context_type: label.into(),
            });
            id
        }

        pub fn context_type(&mut self, name: &str) -> i64 {
            let id = self.id();
            self.context_types.push(ContextType {
                id,
                name: name.into(),
                last_updated: ts(),
            });
            id
        }

        pub fn describe(&mut self, owner: DescriptionOwner, language: &str, content: &str) -> i64 {
            let id = self.id();
            self.texts.push((
                owner,
                LocalizedText {
                    id,
                    language: language.into(),
                    content: content.into(),
                },
            ));
            id
        }

        fn read(&self) -> Result<(), Offline> {
            let reads = self.reads.get();
            if self.fail_after.is_some_and(|limit| reads >= limit) {
                return Err(Offline);
            }
            self.reads.set(reads + 1);
            Ok(())
        }
    }

    impl ContentStore for MemoryStore {
        type Error = Offline;

        async fn situation(&self, id: i64) -> Result<Option<Situation>, Offline> {
            self.read()?;
            Ok(self.situations.iter().find(|s| s.id == id).cloned())
        }

        async fn descriptions(
            &self,
            owner: DescriptionOwner,
        ) -> Result<Vec<LocalizedText>, Offline> {
            self.read()?;
            Ok(self
                .texts
                .iter()
                .filter(|(o, _)| *o == owner)
                .map(|(_, t)| t.clone())
                .collect())
        }

        async fn situation_prompts(&self, situation_id: i64) -> Result<Vec<Prompt>, Offline> {
            self.read()?;
            Ok(self
                .prompts
                .iter()
                .filter(|(s, _)| *s == situation_id)
                .map(|(_, p)| p.clone())
                .collect())
        }

        async fn situation_communications(
            &self,
            situation_id: i64,
        ) -> Result<Vec<Communication>, Offline> {
            self.read()?;
            Ok(self
                .communications
                .iter()
                .filter(|(s, _)| *s == situation_id)
                .map(|(_, c)| c.clone())
                .collect())
        }

        async fn communication_utterances(
            &self,
            communication_id: i64,
        ) -> Result<Vec<Utterance>, Offline> {
            self.read()?;
            Ok(self
                .utterances
                .iter()
                .filter(|u| u.communication_id == communication_id)
                .cloned()
                .collect())
        }

        async fn utterance_contexts(
            &self,
            utterance_id: i64,
        ) -> Result<Vec<ContextAnnotation>, Offline> {
            self.read()?;
            Ok(self
                .contexts
                .iter()
                .filter(|c| c.utterance_id == utterance_id)
                .cloned()
                .collect())
        }

        async fn context_types_named(&self, name: &str) -> Result<Vec<ContextType>, Offline> {
            self.read()?;
            Ok(self
                .context_types
                .iter()
                .filter(|t| t.name == name)
                .cloned()
                .collect())
        }

        async fn languages(&self) -> Result<Vec<Language>, Offline> {
            self.read()?;
            let mut languages = self.languages.clone();
            languages.sort_by(|a, b| a.code.cmp(&b.code));
            Ok(languages)
        }

        async fn situations_with_target(&self, code: &str) -> Result<Vec<Situation>, Offline> {
            self.read()?;
            let mut situations: Vec<_> = self
                .situations
                .iter()
                .filter(|s| s.supports_target(code))
                .cloned()
                .collect();
            situations.sort_by_key(|s| s.id);
            Ok(situations)
        }
    }
}
