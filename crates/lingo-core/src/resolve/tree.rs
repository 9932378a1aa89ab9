use crate::entities::{
    Communication, ContextAnnotation, ContextType, LocalizedText, Prompt, Situation, Utterance,
};

/// A situation with every branch filtered to one `(target, native)` pair.
///
/// Descriptions at every level hold native-language texts only; utterances
/// hold target-language utterances only; communications without any
/// target-language utterance are absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSituation {
    pub situation: Situation,
    pub native_lang: String,
    pub descriptions: Vec<LocalizedText>,
    pub prompts: Vec<ResolvedPrompt>,
    pub communications: Vec<ResolvedCommunication>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPrompt {
    pub prompt: Prompt,
    pub descriptions: Vec<LocalizedText>,
}

/// Invariant: `utterances` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommunication {
    pub communication: Communication,
    pub descriptions: Vec<LocalizedText>,
    pub utterances: Vec<ResolvedUtterance>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUtterance {
    pub utterance: Utterance,
    pub contexts: Vec<ResolvedContext>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContext {
    pub annotation: ContextAnnotation,
    /// `None` when no context type carries the annotation's label.
    pub context_type: Option<ResolvedContextType>,
    pub descriptions: Vec<LocalizedText>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContextType {
    pub context_type: ContextType,
    pub descriptions: Vec<LocalizedText>,
}
