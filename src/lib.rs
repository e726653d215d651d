mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod shared_repos;
pub mod telemetry;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, middlewares, repositories, routes};
pub use infrastructure::{supabase, utils, web};

use errors::StoreError;
use repositories::supabase_repo::{
    SupabaseContentRepo, SupabaseCoolStuffRepo, SupabaseExperienceRepo, SupabaseProjectRepo,
    SupabaseSkillRepo,
};
use settings::AppConfig;
use shared_repos::SharedRepositories;
use supabase::{SupabaseClient, SupabaseIdentity, SupabaseStorage};
use use_cases::{
    admin_gate::AdminGate, content::ContentHandler, cool_stuff::CoolStuffHandler,
    experiences::ExperienceHandler, projects::ProjectHandler, skills::SkillHandler,
};

pub struct AppState {
    pub experience_handler: AppExperienceHandler,
    pub project_handler: AppProjectHandler,
    pub cool_stuff_handler: AppCoolStuffHandler,
    pub content_handler: AppContentHandler,
    pub skill_handler: AppSkillHandler,
    pub admin_gate: AppAdminGate,
}

pub type AppExperienceHandler = ExperienceHandler<SupabaseExperienceRepo>;
pub type AppProjectHandler = ProjectHandler<SupabaseProjectRepo>;
pub type AppCoolStuffHandler = CoolStuffHandler<SupabaseCoolStuffRepo, SupabaseStorage>;
pub type AppContentHandler = ContentHandler<SupabaseContentRepo>;
pub type AppSkillHandler = SkillHandler<SupabaseSkillRepo>;
pub type AppAdminGate = AdminGate<SupabaseIdentity>;

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self, StoreError> {
        let client = SupabaseClient::new(config)?;
        let repos = SharedRepositories::new(client.clone());

        let storage = SupabaseStorage::new(client.clone(), config);
        let identity = SupabaseIdentity::new(client);

        Ok(AppState {
            experience_handler: ExperienceHandler::new(repos.experience_repo),
            project_handler: ProjectHandler::new(repos.project_repo),
            cool_stuff_handler: CoolStuffHandler::new(repos.cool_stuff_repo, storage),
            content_handler: ContentHandler::new(repos.content_repo),
            skill_handler: SkillHandler::new(repos.skill_repo),
            admin_gate: AdminGate::new(identity, config.admin_email.clone()),
        })
    }
}
