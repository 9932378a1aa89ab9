//! Wire documents returned by the content operations.
//!
//! Every field is always present. Sequences may be empty but never absent,
//! and `context_type_details` is `null` rather than omitted. Conversion from
//! the resolved tree is a pure mapping with no business rules.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::LocalizedText;
use crate::resolve::{
    ResolvedCommunication, ResolvedContext, ResolvedContextType, ResolvedPrompt,
    ResolvedSituation, ResolvedUtterance,
};

/// `{id, content, language}` entry of a `descriptions` list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DescriptionDocument {
    pub id: i64,
    pub content: String,
    pub language: String,
}

/// Response of the situation detail operation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SituationDocument {
    pub situation: SituationHeader,
    pub prompts: Vec<PromptDocument>,
    pub communications: Vec<CommunicationDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SituationHeader {
    pub id: i64,
    pub last_updated: DateTime<Utc>,
    pub image_url: String,
    /// The native language the descriptions were filtered to.
    pub language: String,
    pub descriptions: Vec<DescriptionDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PromptDocument {
    pub id: i64,
    pub last_updated: DateTime<Utc>,
    pub descriptions: Vec<DescriptionDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CommunicationDocument {
    pub id: i64,
    pub last_updated: DateTime<Utc>,
    #[serde(rename = "shouldBeExpressed")]
    pub should_be_expressed: bool,
    #[serde(rename = "shouldBeUnderstood")]
    pub should_be_understood: bool,
    pub descriptions: Vec<DescriptionDocument>,
    pub utterances: Vec<UtteranceDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UtteranceDocument {
    pub id: i64,
    pub last_updated: DateTime<Utc>,
    pub language: String,
    pub transliteration: String,
    pub content: String,
    pub contexts: Vec<ContextDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ContextDocument {
    pub id: i64,
    /// The annotation's label, verbatim, whether or not a type matched.
    pub context_type: String,
    pub context_type_details: Option<ContextTypeDocument>,
    pub descriptions: Vec<DescriptionDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ContextTypeDocument {
    pub id: i64,
    pub name: String,
    pub descriptions: Vec<DescriptionDocument>,
}

/// Entry of the situation listing for one language.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SituationSummary {
    pub id: i64,
    pub last_updated: DateTime<Utc>,
    pub image_url: String,
    pub language_code: String,
    pub descriptions: Vec<DescriptionDocument>,
}

/// Counts reported by a content bundle import.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ImportSummary {
    pub languages: u32,
    pub context_types: u32,
    pub situations: u32,
    pub prompts: u32,
    pub communications: u32,
    pub utterances: u32,
    pub contexts: u32,
    pub descriptions: u32,
}

pub(crate) fn describe_all(texts: Vec<LocalizedText>) -> Vec<DescriptionDocument> {
    texts.into_iter().map(DescriptionDocument::from).collect()
}

impl From<LocalizedText> for DescriptionDocument {
    fn from(text: LocalizedText) -> Self {
        Self {
            id: text.id,
            content: text.content,
            language: text.language,
        }
    }
}

impl From<ResolvedSituation> for SituationDocument {
    fn from(resolved: ResolvedSituation) -> Self {
        let ResolvedSituation {
            situation,
            native_lang,
            descriptions,
            prompts,
            communications,
        } = resolved;

        Self {
            situation: SituationHeader {
                id: situation.id,
                last_updated: situation.last_updated,
                image_url: situation.image_url,
                language: native_lang,
                descriptions: describe_all(descriptions),
            },
            prompts: prompts.into_iter().map(PromptDocument::from).collect(),
            communications: communications
                .into_iter()
                .map(CommunicationDocument::from)
                .collect(),
        }
    }
}

impl From<ResolvedPrompt> for PromptDocument {
    fn from(resolved: ResolvedPrompt) -> Self {
        Self {
            id: resolved.prompt.id,
            last_updated: resolved.prompt.last_updated,
            descriptions: describe_all(resolved.descriptions),
        }
    }
}

impl From<ResolvedCommunication> for CommunicationDocument {
    fn from(resolved: ResolvedCommunication) -> Self {
        let communication = resolved.communication;
        Self {
            id: communication.id,
            last_updated: communication.last_updated,
            should_be_expressed: communication.should_be_expressed,
            should_be_understood: communication.should_be_understood,
            descriptions: describe_all(resolved.descriptions),
            utterances: resolved
                .utterances
                .into_iter()
                .map(UtteranceDocument::from)
                .collect(),
        }
    }
}

impl From<ResolvedUtterance> for UtteranceDocument {
    fn from(resolved: ResolvedUtterance) -> Self {
        let utterance = resolved.utterance;
        Self {
            id: utterance.id,
            last_updated: utterance.last_updated,
            language: utterance.language,
            transliteration: utterance.transliteration,
            content: utterance.content,
            contexts: resolved
                .contexts
                .into_iter()
                .map(ContextDocument::from)
                .collect(),
        }
    }
}

impl From<ResolvedContext> for ContextDocument {
    fn from(resolved: ResolvedContext) -> Self {
        Self {
            id: resolved.annotation.id,
            context_type: resolved.annotation.context_type,
            context_type_details: resolved.context_type.map(ContextTypeDocument::from),
            descriptions: describe_all(resolved.descriptions),
        }
    }
}

impl From<ResolvedContextType> for ContextTypeDocument {
    fn from(resolved: ResolvedContextType) -> Self {
        Self {
            id: resolved.context_type.id,
            name: resolved.context_type.name,
            descriptions: describe_all(resolved.descriptions),
        }
    }
}
