//! Content bundle: a JSON document describing a batch of content to import.
//!
//! Bundles nest the way content is authored (situation → prompts,
//! communications → utterances → contexts) and carry descriptions inline as
//! `(language, content)` pairs. Languages referenced anywhere must either be
//! declared in `languages` or already exist in the store.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ContentBundle {
    #[serde(default)]
    pub languages: Vec<BundleLanguage>,
    #[serde(default)]
    pub context_types: Vec<BundleContextType>,
    #[serde(default)]
    pub situations: Vec<BundleSituation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BundleLanguage {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BundleText {
    pub language: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BundleContextType {
    pub name: String,
    #[serde(default)]
    pub descriptions: Vec<BundleText>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BundleSituation {
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub target_languages: Vec<String>,
    #[serde(default)]
    pub descriptions: Vec<BundleText>,
    #[serde(default)]
    pub prompts: Vec<BundlePrompt>,
    #[serde(default)]
    pub communications: Vec<BundleCommunication>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BundlePrompt {
    #[serde(default)]
    pub descriptions: Vec<BundleText>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BundleCommunication {
    #[serde(default, rename = "shouldBeExpressed")]
    pub should_be_expressed: bool,
    #[serde(default, rename = "shouldBeUnderstood")]
    pub should_be_understood: bool,
    #[serde(default)]
    pub descriptions: Vec<BundleText>,
    #[serde(default)]
    pub utterances: Vec<BundleUtterance>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BundleUtterance {
    pub language: String,
    pub content: String,
    #[serde(default)]
    pub transliteration: String,
    #[serde(default)]
    pub contexts: Vec<BundleContext>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BundleContext {
    pub context_type: String,
    #[serde(default)]
    pub descriptions: Vec<BundleText>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_bundle_fills_defaults() {
        let bundle: ContentBundle = serde_json::from_str(
            r#"{
                "situations": [{
                    "target_languages": ["spa"],
                    "communications": [{
                        "shouldBeExpressed": true,
                        "utterances": [{"language": "spa", "content": "Hola"}]
                    }]
                }]
            }"#,
        )
        .unwrap();

        assert!(bundle.languages.is_empty());
        let situation = &bundle.situations[0];
        assert!(situation.image_url.is_empty());
        let comm = &situation.communications[0];
        assert!(comm.should_be_expressed);
        assert!(!comm.should_be_understood);
        assert!(comm.utterances[0].transliteration.is_empty());
        assert!(comm.utterances[0].contexts.is_empty());
    }
}
