use crate::{
    entities::project::{NewProjectRequest, Project, UpdateProjectRequest},
    errors::AppError,
    repositories::project::ProjectRepository,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_projects().await
    }

    /// Featured projects only, ordered by `order_index`
    pub async fn list_featured_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_featured_projects().await
    }

    pub async fn create_project(&self, request: NewProjectRequest) -> Result<Project, AppError> {
        self.project_repo.create_project(&request).await
    }

    pub async fn update_project(
        &self,
        id: &str,
        request: UpdateProjectRequest,
    ) -> Result<Project, AppError> {
        let changes = request.changes();
        if changes.is_empty() {
            return Err(AppError::BadRequest("No fields to update".into()));
        }

        self.project_repo.update_project(id, &changes).await
    }

    pub async fn delete_project(&self, id: &str) -> Result<(), AppError> {
        self.project_repo.delete_project(id).await
    }
}
