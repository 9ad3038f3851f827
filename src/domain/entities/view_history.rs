use crate::domain::value_objects::ViewSource;
use serde::{Deserialize, Serialize};

/// Append-only record of a restaurant being shown to the user. Purged by
/// age, never edited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewHistoryEntry {
    pub id: String,
    pub restaurant_id: String,
    pub viewed_at: i64,
    pub source: ViewSource,
}

impl ViewHistoryEntry {
    pub fn new(restaurant_id: String, viewed_at: i64, source: ViewSource) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            restaurant_id,
            viewed_at,
            source,
        }
    }
}
