use tracing::{error, info, warn};

use crate::{
    entities::experience::{
        ExperienceWithRoles, NewExperienceRequest, NewRoleRequest, Role, UpdateExperienceRequest,
    },
    errors::AppError,
    repositories::experience::ExperienceRepository,
};

pub struct ExperienceHandler<R>
where
    R: ExperienceRepository,
{
    pub experience_repo: R,
}

impl<R> ExperienceHandler<R>
where
    R: ExperienceRepository,
{
    pub fn new(experience_repo: R) -> Self {
        ExperienceHandler { experience_repo }
    }

    /// Lists every experience with its roles attached, both ordered by `order_index`.
    /// One query for the experiences plus one per experience for its roles.
    pub async fn list_experiences(&self) -> Result<Vec<ExperienceWithRoles>, AppError> {
        let experiences = self.experience_repo.list_experiences().await?;

        let mut result = Vec::with_capacity(experiences.len());
        for experience in experiences {
            let roles = self.experience_repo.list_roles(&experience.id).await?;
            result.push(ExperienceWithRoles::new(experience, roles));
        }

        Ok(result)
    }

    /// Creates an experience and its roles in submission order. If any role
    /// fails to insert, everything created so far is deleted again and the
    /// failure is reported.
    pub async fn create_experience(
        &self,
        request: NewExperienceRequest,
    ) -> Result<ExperienceWithRoles, AppError> {
        let experience = self.experience_repo
            .create_experience(&request.prepare_for_insert())
            .await?;

        let mut roles = Vec::with_capacity(request.roles.len());
        for role in &request.roles {
            let insert = role.prepare_for_insert(&experience.id);
            match self.experience_repo.create_role(&insert).await {
                Ok(created) => roles.push(created),
                Err(e) => {
                    warn!(
                        experience_id = %experience.id,
                        role = %role.title,
                        "Role insert failed, rolling back experience: {}", e
                    );
                    self.rollback_experience(&experience.id, &roles).await;
                    return Err(AppError::BadRequest(format!(
                        "Failed to create role '{}': {}",
                        role.title,
                        e.detail()
                    )));
                }
            }
        }

        info!(experience_id = %experience.id, roles = roles.len(), "Created experience");
        Ok(ExperienceWithRoles::new(experience, roles))
    }

    async fn rollback_experience(&self, experience_id: &str, roles: &[Role]) {
        for role in roles {
            if let Err(e) = self.experience_repo.delete_role(&role.id).await {
                error!(role_id = %role.id, "Rollback could not delete role: {}", e);
            }
        }

        if let Err(e) = self.experience_repo.delete_experience(experience_id).await {
            error!(experience_id, "Rollback could not delete experience: {}", e);
        }
    }

    /// Applies a sparse update and re-attaches the experience's current roles.
    pub async fn update_experience(
        &self,
        id: &str,
        request: UpdateExperienceRequest,
    ) -> Result<ExperienceWithRoles, AppError> {
        let changes = request.changes();
        if changes.is_empty() {
            return Err(AppError::BadRequest("No fields to update".into()));
        }

        let experience = self.experience_repo.update_experience(id, &changes).await?;
        let roles = self.experience_repo.list_roles(id).await?;

        Ok(ExperienceWithRoles::new(experience, roles))
    }

    /// Deletes an experience, then sweeps any roles the store left behind.
    /// A failed sweep is logged; the experience is already gone at that point.
    pub async fn delete_experience(&self, id: &str) -> Result<(), AppError> {
        self.experience_repo.delete_experience(id).await?;

        match self.experience_repo.delete_roles_for_experience(id).await {
            Ok(removed) => {
                info!(experience_id = id, roles = removed, "Deleted experience");
            }
            Err(e) => {
                error!(experience_id = id, "Deleted experience but could not sweep its roles: {}", e);
            }
        }

        Ok(())
    }

    pub async fn add_role(&self, experience_id: &str, request: NewRoleRequest) -> Result<Role, AppError> {
        self.experience_repo
            .create_role(&request.prepare_for_insert(experience_id))
            .await
    }

    pub async fn delete_role(&self, role_id: &str) -> Result<(), AppError> {
        self.experience_repo.delete_role(role_id).await
    }
}
