use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Register, politeness, or regional note attached to an utterance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ContextAnnotation {
    pub id: i64,
    pub utterance_id: i64,
    /// Free-text label matched against [`ContextType::name`]. Not a foreign key.
    pub context_type: String,
}

/// Lookup record describing a context label.
///
/// `name` should be unique; the libSQL schema enforces it, but other stores
/// may not, so lookups take the first match in store order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ContextType {
    pub id: i64,
    pub name: String,
    pub last_updated: DateTime<Utc>,
}
