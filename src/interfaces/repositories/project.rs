use async_trait::async_trait;
use serde_json::Value;

use crate::{
    entities::{
        option_fields::ChangeSet,
        project::{NewProjectRequest, Project},
    },
    errors::AppError,
    supabase::SupabaseClient,
};

use super::supabase_repo::{confirmed_delete, confirmed_row, SupabaseProjectRepo, PROJECTS_TABLE};

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn list_featured_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn create_project(&self, project: &NewProjectRequest) -> Result<Project, AppError>;
    async fn update_project(&self, id: &str, changes: &ChangeSet) -> Result<Project, AppError>;
    async fn delete_project(&self, id: &str) -> Result<(), AppError>;
}

impl SupabaseProjectRepo {
    pub fn new(client: SupabaseClient) -> Self {
        SupabaseProjectRepo { client }
    }
}

#[async_trait]
impl ProjectRepository for SupabaseProjectRepo {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects = self.client
            .table(PROJECTS_TABLE)
            .order("order_index")
            .select()
            .await?;

        Ok(projects)
    }

    async fn list_featured_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects = self.client
            .table(PROJECTS_TABLE)
            .eq("is_featured", true)
            .order("order_index")
            .select()
            .await?;

        Ok(projects)
    }

    async fn create_project(&self, project: &NewProjectRequest) -> Result<Project, AppError> {
        let rows = self.client.table(PROJECTS_TABLE).insert(project).await?;
        confirmed_row(rows, || AppError::BadRequest("Failed to create project".into()))
    }

    async fn update_project(&self, id: &str, changes: &ChangeSet) -> Result<Project, AppError> {
        let rows = self.client
            .table(PROJECTS_TABLE)
            .eq("id", id)
            .update(changes)
            .await?;

        confirmed_row(rows, || AppError::NotFound("Project not found".into()))
    }

    async fn delete_project(&self, id: &str) -> Result<(), AppError> {
        let rows: Vec<Value> = self.client
            .table(PROJECTS_TABLE)
            .eq("id", id)
            .delete()
            .await?;

        confirmed_delete(rows, "Project")
    }
}
