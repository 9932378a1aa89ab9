use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Something a learner may want to express or understand in a situation.
/// Linked many-to-many to situations.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Communication {
    pub id: i64,
    pub last_updated: DateTime<Utc>,
    pub should_be_expressed: bool,
    pub should_be_understood: bool,
}
