use serde::{Deserialize, Serialize};

use super::option_fields::{ChangeSet, OptionField};

/// A gallery entry: an image and the prompt that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoolStuff {
    pub id: String,
    pub image_url: String,
    pub prompt: String,
    pub order_index: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCoolStuffRequest {
    pub image_url: String,
    pub prompt: String,
    pub order_index: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateCoolStuffRequest {
    pub image_url: OptionField<String>,
    pub prompt: OptionField<String>,
    pub order_index: OptionField<i32>,
}

impl UpdateCoolStuffRequest {
    pub fn changes(&self) -> ChangeSet {
        ChangeSet::new()
            .with("image_url", &self.image_url)
            .with("prompt", &self.prompt)
            .with("order_index", &self.order_index)
    }
}
