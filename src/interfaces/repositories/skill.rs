use async_trait::async_trait;
use serde_json::Value;

use crate::{
    entities::{
        option_fields::ChangeSet,
        skill::{NewSkillRequest, Skill},
    },
    errors::AppError,
    supabase::SupabaseClient,
};

use super::supabase_repo::{confirmed_delete, confirmed_row, SupabaseSkillRepo, SKILLS_TABLE};

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;
    async fn list_skills_by_category(&self, category: &str) -> Result<Vec<Skill>, AppError>;
    async fn create_skill(&self, skill: &NewSkillRequest) -> Result<Skill, AppError>;
    async fn update_skill(&self, id: &str, changes: &ChangeSet) -> Result<Skill, AppError>;
    async fn delete_skill(&self, id: &str) -> Result<(), AppError>;
}

impl SupabaseSkillRepo {
    pub fn new(client: SupabaseClient) -> Self {
        SupabaseSkillRepo { client }
    }
}

#[async_trait]
impl SkillRepository for SupabaseSkillRepo {
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        let skills = self.client
            .table(SKILLS_TABLE)
            .order("order_index")
            .select()
            .await?;

        Ok(skills)
    }

    async fn list_skills_by_category(&self, category: &str) -> Result<Vec<Skill>, AppError> {
        let skills = self.client
            .table(SKILLS_TABLE)
            .eq("category", category)
            .order("order_index")
            .select()
            .await?;

        Ok(skills)
    }

    async fn create_skill(&self, skill: &NewSkillRequest) -> Result<Skill, AppError> {
        let rows = self.client.table(SKILLS_TABLE).insert(skill).await?;
        confirmed_row(rows, || AppError::BadRequest("Failed to create skill".into()))
    }

    async fn update_skill(&self, id: &str, changes: &ChangeSet) -> Result<Skill, AppError> {
        let rows = self.client
            .table(SKILLS_TABLE)
            .eq("id", id)
            .update(changes)
            .await?;

        confirmed_row(rows, || AppError::NotFound("Skill not found".into()))
    }

    async fn delete_skill(&self, id: &str) -> Result<(), AppError> {
        let rows: Vec<Value> = self.client
            .table(SKILLS_TABLE)
            .eq("id", id)
            .delete()
            .await?;

        confirmed_delete(rows, "Skill")
    }
}
