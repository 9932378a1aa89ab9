use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A real-world scenario under which learners practice communication.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Situation {
    pub id: i64,
    pub last_updated: DateTime<Utc>,
    pub image_url: String,
    /// Codes of the target languages this situation has content for.
    /// Only `(situation, target)` pairs listed here can be resolved.
    pub target_languages: Vec<String>,
}

impl Situation {
    /// Whether `code` is one of this situation's supported target languages.
    #[must_use]
    pub fn supports_target(&self, code: &str) -> bool {
        self.target_languages.iter().any(|lang| lang == code)
    }
}
