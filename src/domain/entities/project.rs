use serde::{Deserialize, Serialize};

use super::option_fields::{ChangeSet, OptionField};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub github_url: String,
    pub live_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    pub order_index: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProjectRequest {
    pub title: String,
    pub description: String,
    pub github_url: String,
    #[serde(default)]
    pub live_url: Option<String>,
    pub tags: Vec<String>,
    pub colors: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    pub order_index: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateProjectRequest {
    pub title: OptionField<String>,
    pub description: OptionField<String>,
    pub github_url: OptionField<String>,
    pub live_url: OptionField<String>,
    pub tags: OptionField<Vec<String>>,
    pub colors: OptionField<Vec<String>>,
    pub is_featured: OptionField<bool>,
    pub order_index: OptionField<i32>,
}

impl UpdateProjectRequest {
    pub fn changes(&self) -> ChangeSet {
        ChangeSet::new()
            .with("title", &self.title)
            .with("description", &self.description)
            .with("github_url", &self.github_url)
            .with_nullable("live_url", &self.live_url)
            .with("tags", &self.tags)
            .with("colors", &self.colors)
            .with("is_featured", &self.is_featured)
            .with("order_index", &self.order_index)
    }
}
