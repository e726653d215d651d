use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::option_fields::{ChangeSet, OptionField};

// ───── Stored Rows ──────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub location: String,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub experience_id: String,
    pub title: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub order_index: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceInsert {
    pub company: String,
    pub location: String,
    pub order_index: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleInsert {
    pub experience_id: String,
    pub title: String,
    pub period: String,
    pub description: String,
    pub skills: Vec<String>,
    pub order_index: i32,
}

// ───── API Response Models ──────────────────────────────────────────

/// An experience together with its roles, ordered by `order_index`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceWithRoles {
    #[serde(flatten)]
    pub experience: Experience,
    pub roles: Vec<Role>,
}

impl ExperienceWithRoles {
    pub fn new(experience: Experience, roles: Vec<Role>) -> Self {
        Self { experience, roles }
    }
}

// ───── Input ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRoleRequest {
    pub title: String,
    pub period: String,
    pub description: String,
    pub skills: Vec<String>,
    pub order_index: i32,
}

impl NewRoleRequest {
    pub fn prepare_for_insert(&self, experience_id: &str) -> RoleInsert {
        RoleInsert {
            experience_id: experience_id.to_string(),
            title: self.title.clone(),
            period: self.period.clone(),
            description: self.description.clone(),
            skills: self.skills.clone(),
            order_index: self.order_index,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExperienceRequest {
    pub company: String,
    pub location: String,
    pub order_index: i32,
    #[serde(default)]
    pub roles: Vec<NewRoleRequest>,
}

impl NewExperienceRequest {
    pub fn prepare_for_insert(&self) -> ExperienceInsert {
        ExperienceInsert {
            company: self.company.clone(),
            location: self.location.clone(),
            order_index: self.order_index,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateExperienceRequest {
    pub company: OptionField<String>,
    pub location: OptionField<String>,
    pub order_index: OptionField<i32>,
}

impl UpdateExperienceRequest {
    pub fn changes(&self) -> ChangeSet {
        ChangeSet::new()
            .with("company", &self.company)
            .with("location", &self.location)
            .with("order_index", &self.order_index)
    }
}
