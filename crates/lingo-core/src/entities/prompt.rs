use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A hint shown alongside a situation. Independent of target language.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Prompt {
    pub id: i64,
    pub last_updated: DateTime<Utc>,
}
