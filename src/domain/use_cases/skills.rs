use crate::{
    entities::skill::{NewSkillRequest, Skill, UpdateSkillRequest},
    errors::AppError,
    repositories::skill::SkillRepository,
};

pub struct SkillHandler<R>
where
    R: SkillRepository,
{
    pub skill_repo: R,
}

impl<R> SkillHandler<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repo: R) -> Self {
        SkillHandler { skill_repo }
    }

    pub async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        self.skill_repo.list_skills().await
    }

    pub async fn list_skills_by_category(&self, category: &str) -> Result<Vec<Skill>, AppError> {
        self.skill_repo.list_skills_by_category(category).await
    }

    pub async fn create_skill(&self, request: NewSkillRequest) -> Result<Skill, AppError> {
        self.skill_repo.create_skill(&request).await
    }

    pub async fn update_skill(&self, id: &str, request: UpdateSkillRequest) -> Result<Skill, AppError> {
        let changes = request.changes();
        if changes.is_empty() {
            return Err(AppError::BadRequest("No fields to update".into()));
        }

        self.skill_repo.update_skill(id, &changes).await
    }

    pub async fn delete_skill(&self, id: &str) -> Result<(), AppError> {
        self.skill_repo.delete_skill(id).await
    }
}
