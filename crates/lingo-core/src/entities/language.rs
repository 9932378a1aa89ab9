use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A language known to the service. `code` is globally unique and is the
/// join key for every localized text and utterance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Language {
    pub id: i64,
    pub code: String,
    pub name: String,
}
