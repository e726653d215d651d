use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A free-text block addressed by a caller-chosen key such as `hero_title`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub id: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentUpdate {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentUpsert {
    pub id: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

impl ContentUpdate {
    pub fn prepare_for_upsert(&self, id: &str) -> ContentUpsert {
        ContentUpsert {
            id: id.to_string(),
            value: self.value.clone(),
            updated_at: Utc::now(),
        }
    }
}
