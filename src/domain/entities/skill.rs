use serde::{Deserialize, Serialize};

use super::option_fields::{ChangeSet, OptionField};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: String,
    pub order_index: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSkillRequest {
    pub name: String,
    pub category: String,
    pub order_index: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateSkillRequest {
    pub name: OptionField<String>,
    pub category: OptionField<String>,
    pub order_index: OptionField<i32>,
}

impl UpdateSkillRequest {
    pub fn changes(&self) -> ChangeSet {
        ChangeSet::new()
            .with("name", &self.name)
            .with("category", &self.category)
            .with("order_index", &self.order_index)
    }
}
