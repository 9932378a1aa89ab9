use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A `(language, content)` pair attached to exactly one parent entity.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LocalizedText {
    pub id: i64,
    /// Language code, e.g. `eng`.
    pub language: String,
    pub content: String,
}

/// The parent entity a set of localized descriptions belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptionOwner {
    Situation(i64),
    Communication(i64),
    Prompt(i64),
    Context(i64),
    ContextType(i64),
}

impl DescriptionOwner {
    /// The owner's row id.
    #[must_use]
    pub const fn id(self) -> i64 {
        match self {
            Self::Situation(id)
            | Self::Communication(id)
            | Self::Prompt(id)
            | Self::Context(id)
            | Self::ContextType(id) => id,
        }
    }

    #[must_use]
    pub const fn kind(self) -> &'static str {
        match self {
            Self::Situation(_) => "situation",
            Self::Communication(_) => "communication",
            Self::Prompt(_) => "prompt",
            Self::Context(_) => "context",
            Self::ContextType(_) => "context_type",
        }
    }
}

impl fmt::Display for DescriptionOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.id())
    }
}
