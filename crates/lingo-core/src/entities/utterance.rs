use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The phrase realizing a communication in exactly one language.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Utterance {
    pub id: i64,
    pub communication_id: i64,
    pub last_updated: DateTime<Utc>,
    /// Language code of `content`.
    pub language: String,
    /// Romanized form; empty when not applicable.
    pub transliteration: String,
    pub content: String,
}
