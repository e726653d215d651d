use async_trait::async_trait;
use serde_json::Value;

use crate::{
    entities::{
        experience::{Experience, ExperienceInsert, Role, RoleInsert},
        option_fields::ChangeSet,
    },
    errors::AppError,
    supabase::SupabaseClient,
};

use super::supabase_repo::{
    confirmed_delete, confirmed_row, SupabaseExperienceRepo, EXPERIENCES_TABLE, ROLES_TABLE,
};

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// All experiences ordered by `order_index`
    async fn list_experiences(&self) -> Result<Vec<Experience>, AppError>;

    /// Roles of one experience ordered by `order_index`
    async fn list_roles(&self, experience_id: &str) -> Result<Vec<Role>, AppError>;

    async fn create_experience(&self, insert: &ExperienceInsert) -> Result<Experience, AppError>;

    /// Applies a non-empty sparse update; `NotFound` when no row matched
    async fn update_experience(&self, id: &str, changes: &ChangeSet) -> Result<Experience, AppError>;

    async fn delete_experience(&self, id: &str) -> Result<(), AppError>;

    async fn create_role(&self, insert: &RoleInsert) -> Result<Role, AppError>;

    async fn delete_role(&self, id: &str) -> Result<(), AppError>;

    /// Removes every role of an experience, returning how many went
    async fn delete_roles_for_experience(&self, experience_id: &str) -> Result<usize, AppError>;
}

impl SupabaseExperienceRepo {
    pub fn new(client: SupabaseClient) -> Self {
        SupabaseExperienceRepo { client }
    }
}

#[async_trait]
impl ExperienceRepository for SupabaseExperienceRepo {
    async fn list_experiences(&self) -> Result<Vec<Experience>, AppError> {
        let experiences = self.client
            .table(EXPERIENCES_TABLE)
            .order("order_index")
            .select()
            .await?;

        Ok(experiences)
    }

    async fn list_roles(&self, experience_id: &str) -> Result<Vec<Role>, AppError> {
        let roles = self.client
            .table(ROLES_TABLE)
            .eq("experience_id", experience_id)
            .order("order_index")
            .select()
            .await?;

        Ok(roles)
    }

    async fn create_experience(&self, insert: &ExperienceInsert) -> Result<Experience, AppError> {
        let rows = self.client.table(EXPERIENCES_TABLE).insert(insert).await?;
        confirmed_row(rows, || AppError::BadRequest("Failed to create experience".into()))
    }

    async fn update_experience(&self, id: &str, changes: &ChangeSet) -> Result<Experience, AppError> {
        let rows = self.client
            .table(EXPERIENCES_TABLE)
            .eq("id", id)
            .update(changes)
            .await?;

        confirmed_row(rows, || AppError::NotFound("Experience not found".into()))
    }

    async fn delete_experience(&self, id: &str) -> Result<(), AppError> {
        let rows: Vec<Value> = self.client
            .table(EXPERIENCES_TABLE)
            .eq("id", id)
            .delete()
            .await?;

        confirmed_delete(rows, "Experience")
    }

    async fn create_role(&self, insert: &RoleInsert) -> Result<Role, AppError> {
        let rows = self.client.table(ROLES_TABLE).insert(insert).await?;
        confirmed_row(rows, || AppError::BadRequest("Failed to add role".into()))
    }

    async fn delete_role(&self, id: &str) -> Result<(), AppError> {
        let rows: Vec<Value> = self.client
            .table(ROLES_TABLE)
            .eq("id", id)
            .delete()
            .await?;

        confirmed_delete(rows, "Role")
    }

    async fn delete_roles_for_experience(&self, experience_id: &str) -> Result<usize, AppError> {
        let rows: Vec<Value> = self.client
            .table(ROLES_TABLE)
            .eq("experience_id", experience_id)
            .delete()
            .await?;

        Ok(rows.len())
    }
}
